// Over/under script conversion
//
// An `mover` whose script is a bare operator is an accent (`\vec`, `\hat`,
// `\overline`). Other over/under scripts have no OMML limit form here and are
// emitted as plain siblings.

use super::converter::MathmlConverter;
use crate::formula::ast::MathComponent;
use crate::formula::mathml::{MathmlElement, MathmlNode, MathmlTag};

impl MathmlConverter {
    /// Convert an `munder`, `mover` or `munderover` sitting at `depth`
    pub(super) fn convert_under_over(
        &mut self,
        element: &MathmlElement,
        depth: usize,
    ) -> Vec<MathComponent> {
        if element.tag == MathmlTag::Over
            && let Some(mark) = accent_mark(element)
        {
            return vec![MathComponent::Accent {
                base: self.convert_child(element, 0, depth),
                accent: mark,
            }];
        }

        let script_count = match element.tag {
            MathmlTag::UnderOver => 2,
            _ => 1,
        };
        let mut components = self.convert_child(element, 0, depth);
        for index in 1..=script_count {
            components.extend(self.convert_child(element, index, depth));
        }
        components
    }
}

/// Accent mark of an `mover`: the direct text of an `mo` second child
fn accent_mark(element: &MathmlElement) -> Option<String> {
    match element.child(1)? {
        MathmlNode::Element(script) if script.tag == MathmlTag::Operator => {
            let mark = script.direct_text();
            (!mark.is_empty()).then_some(mark)
        },
        _ => None,
    }
}

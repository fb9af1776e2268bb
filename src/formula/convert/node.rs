// Node conversion logic
//
// One exhaustive match over the recognized MathML tags. Unknown elements are
// transparent: their children are converted as if they sat in the parent row.

use super::converter::MathmlConverter;
use crate::formula::ast::MathComponent;
use crate::formula::mathml::{MathmlElement, MathmlNode, MathmlTag};

impl MathmlConverter {
    /// Convert a single node sitting at `depth`, without sibling grouping
    pub(super) fn convert_node(&mut self, node: &MathmlNode, depth: usize) -> Vec<MathComponent> {
        if depth > self.options.max_depth {
            return self.flatten_nodes(std::slice::from_ref(node));
        }
        self.stats.record_node();

        match node {
            MathmlNode::Text(text) => text_run(text.clone()),
            MathmlNode::Element(element) => self.convert_element(element, depth),
        }
    }

    fn convert_element(&mut self, element: &MathmlElement, depth: usize) -> Vec<MathComponent> {
        match element.tag {
            MathmlTag::Identifier | MathmlTag::Number | MathmlTag::Operator => {
                text_run(element.text_content())
            },
            MathmlTag::Superscript => vec![MathComponent::Superscript {
                base: self.convert_child(element, 0, depth),
                superscript: self.convert_child(element, 1, depth),
            }],
            MathmlTag::Subscript => vec![MathComponent::Subscript {
                base: self.convert_child(element, 0, depth),
                subscript: self.convert_child(element, 1, depth),
            }],
            MathmlTag::SubSup => vec![MathComponent::SubSuperscript {
                base: self.convert_child(element, 0, depth),
                subscript: self.convert_child(element, 1, depth),
                superscript: self.convert_child(element, 2, depth),
            }],
            MathmlTag::Fraction => vec![MathComponent::Fraction {
                numerator: self.convert_child(element, 0, depth),
                denominator: self.convert_child(element, 1, depth),
            }],
            MathmlTag::Sqrt => vec![MathComponent::Radical {
                base: self.convert_siblings(&element.children, depth + 1),
                degree: None,
            }],
            MathmlTag::Root => vec![MathComponent::Radical {
                base: self.convert_child(element, 0, depth),
                degree: Some(self.convert_child(element, 1, depth)),
            }],
            MathmlTag::Table => self.convert_table(element, depth),
            MathmlTag::Under | MathmlTag::Over | MathmlTag::UnderOver => {
                self.convert_under_over(element, depth)
            },
            MathmlTag::Math
            | MathmlTag::Semantics
            | MathmlTag::Row
            | MathmlTag::TableRow
            | MathmlTag::TableCell
            | MathmlTag::Unknown => self.convert_siblings(&element.children, depth + 1),
        }
    }
}

/// One run for non-empty text, nothing otherwise
#[inline]
fn text_run(text: String) -> Vec<MathComponent> {
    if text.is_empty() {
        Vec::new()
    } else {
        vec![MathComponent::Run(text)]
    }
}

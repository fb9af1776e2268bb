// N-ary operator grouping
//
// KaTeX renders `\sum_{i=1}^{n}` as `munderover` (display) or `msubsup`
// (inline) with the operator glyph as first child; the summand follows as
// plain siblings in the same row.

use super::converter::MathmlConverter;
use crate::formula::ast::{LargeOperator, MathComponent};
use crate::formula::mathml::{MathmlElement, MathmlNode, MathmlTag};

/// Where the limits of a recognized large operator live
#[derive(Debug, Clone, Copy)]
pub(super) struct NaryShape<'a> {
    pub element: &'a MathmlElement,
    pub operator: LargeOperator,
    /// Child index of the lower limit, if the shape has one
    pub lower: Option<usize>,
    /// Child index of the upper limit, if the shape has one
    pub upper: Option<usize>,
}

/// Recognize a sum or integral carrying limits
///
/// The element must be one of the over/under or sub-superscript tags and its
/// first child an `<mo>` whose text contains the operator glyph.
pub(super) fn detect_nary(element: &MathmlElement) -> Option<NaryShape<'_>> {
    if !element.tag.is_under_over() && element.tag != MathmlTag::SubSup {
        return None;
    }
    let (lower, upper) = match element.tag {
        MathmlTag::Under => (Some(1), None),
        MathmlTag::Over => (None, Some(1)),
        _ => (Some(1), Some(2)),
    };

    let operator = match element.child(0)? {
        MathmlNode::Element(first) if first.tag == MathmlTag::Operator => {
            LargeOperator::from_operator_text(&first.direct_text())?
        },
        _ => return None,
    };

    Some(NaryShape {
        element,
        operator,
        lower,
        upper,
    })
}

impl MathmlConverter {
    /// Build the n-ary group for `shape`, with `body` as its operand
    ///
    /// In LibreOffice mode the operator becomes a sub-superscripted glyph run
    /// followed by the body as plain siblings.
    pub(super) fn convert_nary(
        &mut self,
        shape: &NaryShape<'_>,
        body: &[MathmlNode],
        depth: usize,
    ) -> Vec<MathComponent> {
        self.stats.record_nary();

        let lower_limit = shape
            .lower
            .map(|index| self.convert_child(shape.element, index, depth));
        let upper_limit = shape
            .upper
            .map(|index| self.convert_child(shape.element, index, depth));
        // Each chained operator nests one level deeper
        let body = self.convert_siblings(body, depth + 1);

        if self.options.libreoffice_compat {
            let mut components = Vec::with_capacity(body.len() + 1);
            components.push(MathComponent::SubSuperscript {
                base: vec![MathComponent::run(shape.operator.glyph())],
                subscript: lower_limit.unwrap_or_default(),
                superscript: upper_limit.unwrap_or_default(),
            });
            components.extend(body);
            return components;
        }

        vec![MathComponent::Nary {
            operator: shape.operator,
            lower_limit,
            upper_limit,
            body,
        }]
    }
}

// Math component definitions

use super::types::*;

/// One Office Math construct
///
/// Every component owns its children outright. A converted formula is an
/// ordered `Vec<MathComponent>` of siblings.
#[derive(Debug, Clone, PartialEq)]
pub enum MathComponent {
    /// Plain run of text (`m:r`)
    Run(String),

    /// Fraction: numerator / denominator (`m:f`)
    Fraction {
        numerator: Vec<MathComponent>,
        denominator: Vec<MathComponent>,
    },

    /// Square root or nth root (`m:rad`)
    Radical {
        base: Vec<MathComponent>,
        degree: Option<Vec<MathComponent>>,
    },

    /// Superscript (`m:sSup`)
    Superscript {
        base: Vec<MathComponent>,
        superscript: Vec<MathComponent>,
    },

    /// Subscript (`m:sSub`)
    Subscript {
        base: Vec<MathComponent>,
        subscript: Vec<MathComponent>,
    },

    /// Both subscript and superscript (`m:sSubSup`)
    SubSuperscript {
        base: Vec<MathComponent>,
        subscript: Vec<MathComponent>,
        superscript: Vec<MathComponent>,
    },

    /// Sum or integral with optional limits (`m:nary`)
    Nary {
        operator: LargeOperator,
        lower_limit: Option<Vec<MathComponent>>,
        upper_limit: Option<Vec<MathComponent>>,
        body: Vec<MathComponent>,
    },

    /// Matrix: rows of cells, each cell a component sequence (`m:m`)
    Matrix { rows: Vec<Vec<Vec<MathComponent>>> },

    /// Accent mark glued over a base (`m:acc`)
    Accent {
        base: Vec<MathComponent>,
        accent: String,
    },
}

impl MathComponent {
    /// Create a text run
    #[inline]
    pub fn run(text: impl Into<String>) -> Self {
        MathComponent::Run(text.into())
    }

    /// Kind of this component
    pub fn kind(&self) -> ComponentKind {
        match self {
            MathComponent::Run(_) => ComponentKind::Run,
            MathComponent::Fraction { .. } => ComponentKind::Fraction,
            MathComponent::Radical { .. } => ComponentKind::Radical,
            MathComponent::Superscript { .. } => ComponentKind::Superscript,
            MathComponent::Subscript { .. } => ComponentKind::Subscript,
            MathComponent::SubSuperscript { .. } => ComponentKind::SubSuperscript,
            MathComponent::Nary {
                operator: LargeOperator::Sum,
                ..
            } => ComponentKind::NarySum,
            MathComponent::Nary {
                operator: LargeOperator::Integral,
                ..
            } => ComponentKind::NaryIntegral,
            MathComponent::Matrix { .. } => ComponentKind::Matrix,
            MathComponent::Accent { .. } => ComponentKind::Accent,
        }
    }

    /// Qualified OMML element name this component serializes to
    pub fn element_name(&self) -> &'static str {
        match self {
            MathComponent::Run(_) => "m:r",
            MathComponent::Fraction { .. } => "m:f",
            MathComponent::Radical { .. } => "m:rad",
            MathComponent::Superscript { .. } => "m:sSup",
            MathComponent::Subscript { .. } => "m:sSub",
            MathComponent::SubSuperscript { .. } => "m:sSubSup",
            MathComponent::Nary { .. } => "m:nary",
            MathComponent::Matrix { .. } => "m:m",
            MathComponent::Accent { .. } => "m:acc",
        }
    }

    /// Classified accent mark, for accent components
    pub fn accent_type(&self) -> Option<AccentType> {
        match self {
            MathComponent::Accent { accent, .. } => AccentType::from_mark(accent),
            _ => None,
        }
    }

    /// Text carried by this component and all of its descendants
    ///
    /// Decorations are not content: accent marks and n-ary glyphs are left
    /// out, limits and bodies are included in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            MathComponent::Run(text) => out.push_str(text),
            MathComponent::Fraction {
                numerator,
                denominator,
            } => {
                collect_all(numerator, out);
                collect_all(denominator, out);
            },
            MathComponent::Radical { base, degree } => {
                if let Some(degree) = degree {
                    collect_all(degree, out);
                }
                collect_all(base, out);
            },
            MathComponent::Superscript { base, superscript } => {
                collect_all(base, out);
                collect_all(superscript, out);
            },
            MathComponent::Subscript { base, subscript } => {
                collect_all(base, out);
                collect_all(subscript, out);
            },
            MathComponent::SubSuperscript {
                base,
                subscript,
                superscript,
            } => {
                collect_all(base, out);
                collect_all(subscript, out);
                collect_all(superscript, out);
            },
            MathComponent::Nary {
                lower_limit,
                upper_limit,
                body,
                ..
            } => {
                if let Some(lower) = lower_limit {
                    collect_all(lower, out);
                }
                if let Some(upper) = upper_limit {
                    collect_all(upper, out);
                }
                collect_all(body, out);
            },
            MathComponent::Matrix { rows } => {
                for cell in rows.iter().flatten() {
                    collect_all(cell, out);
                }
            },
            MathComponent::Accent { base, .. } => collect_all(base, out),
        }
    }
}

fn collect_all(nodes: &[MathComponent], out: &mut String) {
    for node in nodes {
        node.collect_text(out);
    }
}

/// Concatenated text of a component sequence
pub fn text_of(nodes: &[MathComponent]) -> String {
    let mut out = String::new();
    collect_all(nodes, &mut out);
    out
}

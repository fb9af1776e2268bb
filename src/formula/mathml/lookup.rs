use phf::phf_map;

/// MathML tags the converter understands
///
/// Everything outside the LaTeX-generated presentation subset resolves to
/// `Unknown` and is flattened into its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathmlTag {
    Math,
    Semantics,
    Row,
    Identifier,
    Number,
    Operator,
    Superscript,
    Subscript,
    SubSup,
    Fraction,
    Sqrt,
    Root,
    Under,
    Over,
    UnderOver,
    Table,
    TableRow,
    TableCell,
    Unknown,
}

/// Fast element name to tag lookup using PHF
static MATHML_TAGS: phf::Map<&'static str, MathmlTag> = phf_map! {
    // Roots
    "math" => MathmlTag::Math,
    "semantics" => MathmlTag::Semantics,

    // Layout
    "mrow" => MathmlTag::Row,
    "mfrac" => MathmlTag::Fraction,
    "msqrt" => MathmlTag::Sqrt,
    "mroot" => MathmlTag::Root,

    // Tokens
    "mi" => MathmlTag::Identifier,
    "mn" => MathmlTag::Number,
    "mo" => MathmlTag::Operator,

    // Scripts and limits
    "msup" => MathmlTag::Superscript,
    "msub" => MathmlTag::Subscript,
    "msubsup" => MathmlTag::SubSup,
    "munder" => MathmlTag::Under,
    "mover" => MathmlTag::Over,
    "munderover" => MathmlTag::UnderOver,

    // Tables
    "mtable" => MathmlTag::Table,
    "mtr" => MathmlTag::TableRow,
    "mtd" => MathmlTag::TableCell,
};

/// Elements whose text content is significant even when it is whitespace
static TOKEN_ELEMENTS: phf::Set<&'static str> = phf::phf_set! {
    "mi", "mn", "mo", "mtext", "ms",
};

impl MathmlTag {
    /// Resolve a local element name
    #[inline]
    pub fn from_name(name: &str) -> Self {
        MATHML_TAGS.get(name).copied().unwrap_or(MathmlTag::Unknown)
    }

    /// Whether this is one of the over/under script tags
    #[inline]
    pub const fn is_under_over(self) -> bool {
        matches!(self, MathmlTag::Under | MathmlTag::Over | MathmlTag::UnderOver)
    }
}

/// Whether whitespace-only text inside `name` must be kept
#[inline]
pub fn is_token_element(name: &str) -> bool {
    TOKEN_ELEMENTS.contains(name)
}

use phf::phf_map;

/// Large operators recognized as n-ary constructs
///
/// Only the operators LaTeX-to-MathML renderers emit with limits in the
/// supported subset are listed; anything else stays an ordinary run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LargeOperator {
    Sum,      // ∑
    Integral, // ∫
}

impl LargeOperator {
    /// The operator glyph as it appears in MathML and OMML
    #[inline]
    pub const fn glyph(self) -> &'static str {
        match self {
            LargeOperator::Sum => "∑",
            LargeOperator::Integral => "∫",
        }
    }

    /// OMML limit location (`m:limLoc`) used by Word for this operator
    ///
    /// Sums stack their limits under and over the glyph; integrals attach
    /// them as scripts.
    #[inline]
    pub const fn limit_location(self) -> &'static str {
        match self {
            LargeOperator::Sum => "undOvr",
            LargeOperator::Integral => "subSup",
        }
    }

    /// Detect a large operator inside the text of an `<mo>` element
    ///
    /// Renderers sometimes pad the glyph with invisible characters, so the
    /// test is containment rather than equality. The sum glyph wins when both
    /// are present.
    pub fn from_operator_text(text: &str) -> Option<Self> {
        if text.contains(LargeOperator::Sum.glyph()) {
            Some(LargeOperator::Sum)
        } else if text.contains(LargeOperator::Integral.glyph()) {
            Some(LargeOperator::Integral)
        } else {
            None
        }
    }
}

/// Accent types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccentType {
    Hat,       // ^
    Check,     // ˇ
    Tilde,     // ~
    Acute,     // ´
    Grave,     // `
    Dot,       // ˙
    DoubleDot, // ¨
    TripleDot, // ⃛
    Bar,       // ¯
    Breve,     // ˘
    Vec,       // →
}

/// Fast accent mark to type lookup using PHF
///
/// Covers the standalone marks KaTeX and latex2mathml put in `<mo>` under a
/// `<mover accent="true">`, plus the combining forms OMML documents use.
static ACCENTS: phf::Map<&'static str, AccentType> = phf_map! {
    // Standalone accent characters
    "¯" => AccentType::Bar,       // U+00AF Macron
    "‾" => AccentType::Bar,       // U+203E Overline (\overline in KaTeX)
    "_" => AccentType::Bar,       // latex2mathml \bar
    "¨" => AccentType::DoubleDot, // U+00A8 Diaeresis
    "˙" => AccentType::Dot,       // U+02D9 Dot above
    "`" => AccentType::Grave,     // U+0060 Grave accent
    "ˋ" => AccentType::Grave,     // U+02CB Modifier grave
    "´" => AccentType::Acute,     // U+00B4 Acute accent
    "ˊ" => AccentType::Acute,     // U+02CA Modifier acute
    "~" => AccentType::Tilde,     // U+007E Tilde
    "˜" => AccentType::Tilde,     // U+02DC Small tilde
    "^" => AccentType::Hat,       // U+005E Circumflex
    "ˆ" => AccentType::Hat,       // U+02C6 Modifier circumflex
    "ˇ" => AccentType::Check,     // U+02C7 Caron
    "˘" => AccentType::Breve,     // U+02D8 Breve
    "→" => AccentType::Vec,       // U+2192 Right arrow
    "⃗" => AccentType::Vec,       // U+20D7 Combining right arrow above
    "⃛" => AccentType::TripleDot, // U+20DB Combining three dots above

    // Combining characters (Unicode U+0300-U+036F range)
    "̀" => AccentType::Grave,     // U+0300 Combining grave accent
    "́" => AccentType::Acute,     // U+0301 Combining acute accent
    "̂" => AccentType::Hat,       // U+0302 Combining circumflex
    "̃" => AccentType::Tilde,     // U+0303 Combining tilde
    "̄" => AccentType::Bar,       // U+0304 Combining macron
    "̅" => AccentType::Bar,       // U+0305 Combining overline
    "̆" => AccentType::Breve,     // U+0306 Combining breve
    "̇" => AccentType::Dot,       // U+0307 Combining dot above
    "̈" => AccentType::DoubleDot, // U+0308 Combining diaeresis
    "̌" => AccentType::Check,     // U+030C Combining caron
};

impl AccentType {
    /// Classify a raw accent mark
    pub fn from_mark(mark: &str) -> Option<Self> {
        ACCENTS.get(mark.trim()).copied()
    }
}

/// Kind of a math component, one per OMML construct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Run,
    Fraction,
    Radical,
    Superscript,
    Subscript,
    SubSuperscript,
    NarySum,
    NaryIntegral,
    Matrix,
    Accent,
}

impl ComponentKind {
    /// Whether this kind is a native n-ary construct
    #[inline]
    pub const fn is_nary(self) -> bool {
        matches!(self, ComponentKind::NarySum | ComponentKind::NaryIntegral)
    }
}

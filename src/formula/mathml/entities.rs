// Entity reference resolution
//
// Renderers emit MathML mostly as raw UTF-8, but numeric character references
// and a handful of named MathML entities still show up (MathJax and older
// latex2mathml releases in particular).

use phf::phf_map;
use std::borrow::Cow;

/// Named entities resolved in addition to the five predefined XML ones
static NAMED_ENTITIES: phf::Map<&'static str, char> = phf_map! {
    // Predefined XML entities
    "amp" => '&',
    "lt" => '<',
    "gt" => '>',
    "quot" => '"',
    "apos" => '\'',

    // Invisible operators
    "InvisibleTimes" => '\u{2062}',
    "it" => '\u{2062}',
    "ApplyFunction" => '\u{2061}',
    "af" => '\u{2061}',
    "InvisibleComma" => '\u{2063}',
    "ic" => '\u{2063}',

    // Spaces
    "nbsp" => '\u{00A0}',
    "NonBreakingSpace" => '\u{00A0}',
    "ThinSpace" => '\u{2009}',
    "MediumSpace" => '\u{205F}',
    "ZeroWidthSpace" => '\u{200B}',

    // Large operators
    "sum" => '∑',
    "Sum" => '∑',
    "int" => '∫',
    "Integral" => '∫',
    "prod" => '∏',
    "Product" => '∏',

    // Common relations and symbols
    "PlusMinus" => '±',
    "pm" => '±',
    "times" => '×',
    "div" => '÷',
    "le" => '≤',
    "ge" => '≥',
    "ne" => '≠',
    "infin" => '∞',
    "infty" => '∞',
    "part" => '∂',
    "nabla" => '∇',
    "rarr" => '→',
    "RightArrow" => '→',
    "OverBar" => '‾',
    "Hat" => '^',
};

/// Resolve the name between `&` and `;` to a character
///
/// Handles decimal (`#8721`) and hexadecimal (`#x2211`) character references
/// as well as the named entities above.
pub fn resolve_entity(name: &str) -> Option<char> {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        return char::from_u32(code);
    }
    NAMED_ENTITIES.get(name).copied()
}

/// Decode entity references embedded in a text fragment
///
/// Unknown or malformed references are kept verbatim.
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp + 1..];
        match tail.find(';').and_then(|semi| resolve_entity(&tail[..semi]).map(|c| (semi, c))) {
            Some((semi, c)) => {
                out.push(c);
                rest = &tail[semi + 1..];
            },
            None => {
                out.push('&');
                rest = tail;
            },
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

const SPECIAL_CHARS: [&str; 5] = ["&", "<", ">", "\"", "'"];
const ENTITIES: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"];

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(SPECIAL_CHARS)
        .expect("Failed to build XML escaper")
});

/// Escape XML special characters.
///
/// The result is safe both as element text and inside a double- or
/// single-quoted attribute value.
///
/// # Examples
///
/// ```
/// use litchi_mathml::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("x<y"), "x&lt;y");
/// assert_eq!(escape_xml("∑"), "∑");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &ENTITIES)
}

/// Escape XML special characters, appending the result to `out`.
///
/// Avoids the intermediate allocation of [`escape_xml`] when the caller is
/// already building a larger document.
#[inline]
pub fn escape_xml_into(s: &str, out: &mut String) {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        out.push_str(s);
        return;
    }
    XML_ESCAPER.replace_all_with(s, out, |mat, _, dst| {
        dst.push_str(ENTITIES[mat.pattern().as_usize()]);
        true
    });
}

use super::lookup::MathmlTag;
use super::node::{MathmlElement, MathmlNode, find_first};

/// Locate the element whose children are the formula content
///
/// Finds the first `<math>` in document order, then prefers the presentation
/// branch of a `<semantics>` wrapper so annotations (the LaTeX source KaTeX
/// embeds) never reach the output. `semantics` and `mrow` are only taken as
/// direct children; a row nested inside another construct is content, not a
/// root. Returns `None` when there is no `<math>`.
pub fn locate_root(forest: &[MathmlNode]) -> Option<&MathmlElement> {
    let math = find_first(forest, MathmlTag::Math)?;

    if let Some(semantics) = math.children_tagged(MathmlTag::Semantics).next() {
        return Some(
            semantics
                .children_tagged(MathmlTag::Row)
                .next()
                .unwrap_or(semantics),
        );
    }

    Some(math.children_tagged(MathmlTag::Row).next().unwrap_or(math))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::mathml::MathmlParser;

    fn located(xml: &str) -> Option<(MathmlTag, String)> {
        let forest = MathmlParser::new().parse(xml).unwrap();
        locate_root(&forest).map(|root| (root.tag, root.text_content()))
    }

    #[test]
    fn test_locate_semantics_row() {
        let xml = r#"<span class="katex"><math><semantics><mrow><mi>x</mi></mrow><annotation encoding="application/x-tex">x</annotation></semantics></math></span>"#;
        assert_eq!(located(xml), Some((MathmlTag::Row, "x".to_string())));
    }

    #[test]
    fn test_locate_semantics_without_row() {
        let xml = "<math><semantics><mi>y</mi><annotation>y</annotation></semantics></math>";
        assert_eq!(located(xml).map(|(tag, _)| tag), Some(MathmlTag::Semantics));
    }

    #[test]
    fn test_locate_semantics_ignores_nested_row() {
        let xml = "<math><semantics><mfrac><mrow><mi>a</mi></mrow><mn>2</mn></mfrac>\
                   <annotation>a/2</annotation></semantics></math>";
        assert_eq!(located(xml).map(|(tag, _)| tag), Some(MathmlTag::Semantics));
    }

    #[test]
    fn test_locate_row_or_math() {
        assert_eq!(
            located("<math><mrow><mn>1</mn></mrow><mn>2</mn></math>"),
            Some((MathmlTag::Row, "1".to_string()))
        );
        assert_eq!(
            located("<math><mn>1</mn><mn>2</mn></math>"),
            Some((MathmlTag::Math, "12".to_string()))
        );
    }

    #[test]
    fn test_locate_math_when_row_is_nested() {
        let xml = "<math><mfrac><mrow><mi>a</mi><mo>+</mo><mi>b</mi></mrow><mn>2</mn></mfrac>\
                   <mo>=</mo><mi>c</mi></math>";
        assert_eq!(located(xml), Some((MathmlTag::Math, "a+b2=c".to_string())));

        let accent = r#"<math><mover accent="true"><mrow><mi>A</mi><mi>B</mi></mrow><mo>‾</mo></mover></math>"#;
        assert_eq!(located(accent).map(|(tag, _)| tag), Some(MathmlTag::Math));
    }

    #[test]
    fn test_locate_without_math() {
        assert_eq!(located("<div><mrow><mi>x</mi></mrow></div>"), None);
        assert!(locate_root(&[]).is_none());
    }
}

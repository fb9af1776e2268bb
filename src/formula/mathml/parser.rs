use super::entities::{decode_entities, resolve_entity};
use super::error::MathmlError;
use super::lookup::is_token_element;
use super::node::{MathmlElement, MathmlNode};
use crate::formula::config::DEFAULT_MAX_DEPTH;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// MathML parser that reads XML into the generic element/text tree
///
/// The parser is a thin adapter over `quick-xml`'s streaming reader: it keeps
/// element order and attributes, merges adjacent text and entity events into
/// one text leaf, and drops formatting whitespace between elements.
#[derive(Debug, Clone, Copy)]
pub struct MathmlParser {
    max_depth: usize,
}

impl MathmlParser {
    /// Create a parser with the default nesting limit
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Create a parser rejecting documents nested deeper than `max_depth`
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: max_depth.max(1),
        }
    }

    /// Parse MathML from a string into a forest of top-level nodes
    ///
    /// # Example
    /// ```
    /// use litchi_mathml::formula::mathml::MathmlParser;
    ///
    /// let forest = MathmlParser::new().parse("<math><mi>x</mi></math>").unwrap();
    /// assert_eq!(forest.len(), 1);
    /// ```
    pub fn parse(&self, xml: &str) -> Result<Vec<MathmlNode>, MathmlError> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(false);

        let mut stack: Vec<MathmlElement> = Vec::with_capacity(32);
        let mut forest = Vec::new();
        let mut pending = String::new();

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => {
                    flush_text(&mut pending, &mut stack, &mut forest);
                    if stack.len() >= self.max_depth {
                        return Err(MathmlError::DepthLimitExceeded(self.max_depth));
                    }
                    stack.push(start_element(e)?);
                },
                Ok(Event::Empty(ref e)) => {
                    flush_text(&mut pending, &mut stack, &mut forest);
                    if stack.len() >= self.max_depth {
                        return Err(MathmlError::DepthLimitExceeded(self.max_depth));
                    }
                    let element = start_element(e)?;
                    append_node(&mut stack, &mut forest, element.into());
                },
                Ok(Event::End(ref e)) => {
                    flush_text(&mut pending, &mut stack, &mut forest);
                    let Some(element) = stack.pop() else {
                        let name = std::str::from_utf8(e.local_name().as_ref())?.to_string();
                        return Err(MathmlError::UnexpectedClose(name));
                    };
                    append_node(&mut stack, &mut forest, element.into());
                },
                Ok(Event::Text(ref e)) => {
                    // References arrive separately as `GeneralRef`
                    pending.push_str(std::str::from_utf8(e)?);
                },
                Ok(Event::CData(ref e)) => {
                    // CDATA content is literal, no entity decoding
                    pending.push_str(std::str::from_utf8(e)?);
                },
                Ok(Event::GeneralRef(ref e)) => {
                    let name = std::str::from_utf8(e)?;
                    match resolve_entity(name) {
                        Some(c) => pending.push(c),
                        None => {
                            // Unknown entities are kept verbatim
                            pending.push('&');
                            pending.push_str(name);
                            pending.push(';');
                        },
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(MathmlError::Xml {
                        position: reader.buffer_position() as u64,
                        message: e.to_string(),
                    });
                },
                _ => {}, // Declarations, comments, processing instructions, doctype
            }
        }

        flush_text(&mut pending, &mut stack, &mut forest);
        if let Some(open) = stack.last() {
            return Err(MathmlError::UnclosedElement(open.name.clone()));
        }

        Ok(forest)
    }
}

impl Default for MathmlParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Build an element from a start tag, stripping any namespace prefix
fn start_element(elem: &BytesStart) -> Result<MathmlElement, MathmlError> {
    let local = elem.local_name();
    let name = std::str::from_utf8(local.as_ref())?;
    let mut element = MathmlElement::new(name);

    for attr in elem.attributes().filter_map(|a| a.ok()) {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = std::str::from_utf8(&attr.value)?;
        element
            .attributes
            .push((key.to_string(), decode_entities(value).into_owned()));
    }

    Ok(element)
}

/// Attach a finished node to the innermost open element, or to the forest
fn append_node(stack: &mut [MathmlElement], forest: &mut Vec<MathmlNode>, node: MathmlNode) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => forest.push(node),
    }
}

/// Emit accumulated text as a leaf
///
/// Whitespace-only text is formatting between elements unless it sits inside
/// a token element, where it is content.
fn flush_text(pending: &mut String, stack: &mut [MathmlElement], forest: &mut Vec<MathmlNode>) {
    if pending.is_empty() {
        return;
    }
    let text = std::mem::take(pending);
    let significant = !text.trim().is_empty()
        || stack
            .last()
            .is_some_and(|parent| is_token_element(&parent.name));
    if significant {
        append_node(stack, forest, MathmlNode::Text(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::mathml::lookup::MathmlTag;

    fn parse(xml: &str) -> Vec<MathmlNode> {
        MathmlParser::new().parse(xml).unwrap()
    }

    #[test]
    fn test_parse_simple_math() {
        let forest = parse("<math><mi>x</mi></math>");
        assert_eq!(forest.len(), 1);
        let math = forest[0].as_element().unwrap();
        assert_eq!(math.tag, MathmlTag::Math);
        assert_eq!(math.children.len(), 1);
        assert_eq!(math.children[0].text_content(), "x");
    }

    #[test]
    fn test_parse_preserves_order_and_attributes() {
        let forest = parse(
            r#"<math xmlns="http://www.w3.org/1998/Math/MathML" display="block"><mi>a</mi><mo>+</mo><mn>2</mn></math>"#,
        );
        let math = forest[0].as_element().unwrap();
        assert_eq!(math.attribute("display"), Some("block"));
        assert_eq!(math.attribute("xmlns"), Some("http://www.w3.org/1998/Math/MathML"));
        let texts: Vec<String> = math.children.iter().map(MathmlNode::text_content).collect();
        assert_eq!(texts, ["a", "+", "2"]);
    }

    #[test]
    fn test_parse_strips_namespace_prefix() {
        let forest = parse(r#"<mml:math xmlns:mml="http://www.w3.org/1998/Math/MathML"><mml:mi>y</mml:mi></mml:math>"#);
        let math = forest[0].as_element().unwrap();
        assert_eq!(math.tag, MathmlTag::Math);
        assert_eq!(math.children[0].tag(), Some(MathmlTag::Identifier));
    }

    #[test]
    fn test_parse_drops_formatting_whitespace() {
        let forest = parse("<math>\n  <mrow>\n    <mi>x</mi>\n  </mrow>\n</math>");
        let math = forest[0].as_element().unwrap();
        assert_eq!(math.children.len(), 1);
        assert_eq!(math.children[0].children().len(), 1);
    }

    #[test]
    fn test_parse_keeps_token_whitespace() {
        let forest = parse("<math><mtext> </mtext></math>");
        let mtext = forest[0].children()[0].as_element().unwrap();
        assert_eq!(mtext.children, vec![MathmlNode::text(" ")]);
    }

    #[test]
    fn test_parse_entities_merge_into_one_leaf() {
        let forest = parse("<math><mo>&#x2211;</mo><mi>a&amp;b</mi><mo>&InvisibleTimes;</mo></math>");
        let math = forest[0].as_element().unwrap();
        assert_eq!(math.children[0].children(), [MathmlNode::text("∑")]);
        assert_eq!(math.children[1].children(), [MathmlNode::text("a&b")]);
        assert_eq!(math.children[2].text_content(), "\u{2062}");
    }

    #[test]
    fn test_parse_references_between_text() {
        let forest = parse("<math><mi>x&lt;y&amp;&amp;z</mi><mtext>&unknown; a</mtext></math>");
        let math = forest[0].as_element().unwrap();
        assert_eq!(math.children[0].children(), [MathmlNode::text("x<y&&z")]);
        assert_eq!(math.children[1].text_content(), "&unknown; a");
    }

    #[test]
    fn test_parse_attribute_entities() {
        let forest = parse(r#"<math><mo fence="&quot;x&amp;y&quot;" lspace="&#x30;">|</mo></math>"#);
        let mo = forest[0].children()[0].as_element().unwrap();
        assert_eq!(mo.attribute("fence"), Some("\"x&y\""));
        assert_eq!(mo.attribute("lspace"), Some("0"));
    }

    #[test]
    fn test_parse_cdata_and_empty_elements() {
        let forest = parse("<math><mi><![CDATA[<x>]]></mi><mspace width=\"1em\"/></math>");
        let math = forest[0].as_element().unwrap();
        assert_eq!(math.children[0].text_content(), "<x>");
        let mspace = math.children[1].as_element().unwrap();
        assert_eq!(mspace.name, "mspace");
        assert!(mspace.children.is_empty());
    }

    #[test]
    fn test_parse_forest_without_math() {
        let forest = parse("<span>text</span>");
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].tag(), Some(MathmlTag::Unknown));
    }

    #[test]
    fn test_parse_mismatched_tags_fail() {
        assert!(MathmlParser::new().parse("<math><mi>x</mo></math>").is_err());
    }

    #[test]
    fn test_parse_unclosed_fails() {
        let err = MathmlParser::new().parse("<math><mrow><mi>x</mi>").unwrap_err();
        assert!(matches!(err, MathmlError::UnclosedElement(_) | MathmlError::Xml { .. }));
    }

    #[test]
    fn test_parse_depth_limit() {
        let xml = format!("{}{}", "<mrow>".repeat(10), "</mrow>".repeat(10));
        assert!(MathmlParser::with_max_depth(10).parse(&xml).is_ok());
        let err = MathmlParser::with_max_depth(9).parse(&xml).unwrap_err();
        assert!(matches!(err, MathmlError::DepthLimitExceeded(9)));
    }
}

// Generic MathML tree
//
// The parser adapter produces this tree; the locator and the converter only
// read it. Attributes are kept in document order even though the converter
// does not consume them.

use super::lookup::MathmlTag;
use smallvec::SmallVec;

/// Attribute list; MathML elements rarely carry more than a couple
pub type Attributes = SmallVec<[(String, String); 2]>;

/// Node in a MathML tree - either an element or a text leaf
#[derive(Debug, Clone, PartialEq)]
pub enum MathmlNode {
    Element(MathmlElement),
    Text(String),
}

/// MathML element with its resolved tag and ordered children
#[derive(Debug, Clone, PartialEq)]
pub struct MathmlElement {
    /// Local name as written in the source (namespace prefix stripped)
    pub name: String,
    /// Resolved tag; `Unknown` for names outside the supported subset
    pub tag: MathmlTag,
    pub attributes: Attributes,
    pub children: Vec<MathmlNode>,
}

impl MathmlElement {
    /// Create an element, resolving its tag from the name
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            tag: MathmlTag::from_name(&name),
            name,
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style child append, mostly for tests and programmatic trees
    pub fn with_child(mut self, child: impl Into<MathmlNode>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Builder-style attribute append
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Look up an attribute value by name
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Child at `index`, if present
    #[inline]
    pub fn child(&self, index: usize) -> Option<&MathmlNode> {
        self.children.get(index)
    }

    /// Element children carrying the given tag, in order
    pub fn children_tagged(&self, tag: MathmlTag) -> impl Iterator<Item = &MathmlElement> {
        self.children
            .iter()
            .filter_map(MathmlNode::as_element)
            .filter(move |e| e.tag == tag)
    }

    /// Concatenation of the element's direct text children
    pub fn direct_text(&self) -> String {
        self.children.iter().filter_map(MathmlNode::as_text).collect()
    }

    /// Concatenation of all descendant text, in document order
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }
}

fn collect_text(nodes: &[MathmlNode], out: &mut String) {
    for node in nodes {
        match node {
            MathmlNode::Text(text) => out.push_str(text),
            MathmlNode::Element(element) => collect_text(&element.children, out),
        }
    }
}

impl MathmlNode {
    /// Create a text leaf
    #[inline]
    pub fn text(value: impl Into<String>) -> Self {
        MathmlNode::Text(value.into())
    }

    /// Tag of this node; `None` for text leaves
    #[inline]
    pub fn tag(&self) -> Option<MathmlTag> {
        self.as_element().map(|e| e.tag)
    }

    /// Get as element reference.
    #[inline]
    pub fn as_element(&self) -> Option<&MathmlElement> {
        match self {
            MathmlNode::Element(e) => Some(e),
            MathmlNode::Text(_) => None,
        }
    }

    /// Get as text reference.
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MathmlNode::Text(t) => Some(t),
            MathmlNode::Element(_) => None,
        }
    }

    /// Children of an element; text leaves have none
    #[inline]
    pub fn children(&self) -> &[MathmlNode] {
        match self {
            MathmlNode::Element(e) => &e.children,
            MathmlNode::Text(_) => &[],
        }
    }

    /// All text under this node
    pub fn text_content(&self) -> String {
        match self {
            MathmlNode::Text(t) => t.clone(),
            MathmlNode::Element(e) => e.text_content(),
        }
    }
}

impl From<MathmlElement> for MathmlNode {
    fn from(element: MathmlElement) -> Self {
        MathmlNode::Element(element)
    }
}

/// Find the first element with `tag`, depth-first in pre-order
pub fn find_first(nodes: &[MathmlNode], tag: MathmlTag) -> Option<&MathmlElement> {
    for node in nodes {
        if let MathmlNode::Element(element) = node {
            if element.tag == tag {
                return Some(element);
            }
            if let Some(found) = find_first(&element.children, tag) {
                return Some(found);
            }
        }
    }
    None
}

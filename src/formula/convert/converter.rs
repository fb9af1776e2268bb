// MathML Converter Implementation
//
// This module contains the MathmlConverter struct, the sibling scan and the
// depth guard shared by every per-tag rule.

use super::ConversionStats;
use super::nary::detect_nary;
use crate::formula::ast::MathComponent;
use crate::formula::config::ConvertOptions;
use crate::formula::mathml::{MathmlElement, MathmlError, MathmlNode, MathmlParser, locate_root};

/// Result of one step of the sibling scan
///
/// Grouping rules may claim more than the sibling they start at; `consumed`
/// says how many siblings the caller must skip.
#[derive(Debug, Clone, PartialEq)]
pub struct SiblingGroup {
    pub components: Vec<MathComponent>,
    pub consumed: usize,
}

/// Converter from MathML trees to Office Math components
///
/// Holds the options for every conversion it runs and accumulates
/// [`ConversionStats`]. A converter is cheap to create; one per thread is the
/// usual pattern for parallel work.
///
/// # Example
/// ```
/// use litchi_mathml::formula::{ComponentKind, ConvertOptions, MathmlConverter};
///
/// let mut converter = MathmlConverter::new(ConvertOptions::default());
/// let components = converter
///     .convert("<math><msup><mi>x</mi><mn>2</mn></msup></math>")
///     .unwrap();
/// assert_eq!(components[0].kind(), ComponentKind::Superscript);
/// assert_eq!(converter.stats().nodes_visited, 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MathmlConverter {
    pub(super) options: ConvertOptions,
    pub(super) stats: ConversionStats,
}

impl MathmlConverter {
    /// Create a converter with the given options
    pub fn new(options: ConvertOptions) -> Self {
        Self {
            options,
            stats: ConversionStats::default(),
        }
    }

    /// Options used by this converter
    #[inline]
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Get conversion statistics
    #[inline]
    pub fn stats(&self) -> &ConversionStats {
        &self.stats
    }

    /// Clear the accumulated statistics
    #[inline]
    pub fn reset_stats(&mut self) {
        self.stats = ConversionStats::default();
    }

    /// Parse a MathML string and convert it
    ///
    /// Input without a `<math>` element converts to an empty sequence.
    pub fn convert(&mut self, mathml: &str) -> Result<Vec<MathComponent>, MathmlError> {
        let forest = MathmlParser::with_max_depth(self.options.max_depth).parse(mathml)?;
        Ok(self.convert_forest(&forest))
    }

    /// Convert an already parsed forest
    pub fn convert_forest(&mut self, forest: &[MathmlNode]) -> Vec<MathComponent> {
        match locate_root(forest) {
            Some(root) => self.convert_element_children(root),
            None => Vec::new(),
        }
    }

    /// Convert the children of `root` as one row
    pub fn convert_element_children(&mut self, root: &MathmlElement) -> Vec<MathComponent> {
        self.convert_siblings(&root.children, 1)
    }

    /// Convert an ordered sibling slice sitting at `depth`
    pub(super) fn convert_siblings(
        &mut self,
        nodes: &[MathmlNode],
        depth: usize,
    ) -> Vec<MathComponent> {
        if depth > self.options.max_depth {
            return self.flatten_nodes(nodes);
        }

        let mut components = Vec::with_capacity(nodes.len());
        let mut index = 0;
        while index < nodes.len() {
            let group = self.sibling_step(&nodes[index..], depth);
            components.extend(group.components);
            index += group.consumed.max(1);
        }
        components
    }

    /// Convert the first sibling of `nodes`, applying grouping rules
    ///
    /// A sum or integral with limits claims every remaining sibling as its
    /// body. An empty slice yields an empty group that consumes nothing.
    pub fn sibling_step(&mut self, nodes: &[MathmlNode], depth: usize) -> SiblingGroup {
        let Some((first, rest)) = nodes.split_first() else {
            return SiblingGroup {
                components: Vec::new(),
                consumed: 0,
            };
        };

        if depth <= self.options.max_depth
            && let MathmlNode::Element(element) = first
            && let Some(shape) = detect_nary(element)
        {
            self.stats.record_node();
            return SiblingGroup {
                components: self.convert_nary(&shape, rest, depth),
                consumed: nodes.len(),
            };
        }

        SiblingGroup {
            components: self.convert_node(first, depth),
            consumed: 1,
        }
    }

    /// Convert the child at `index` of `parent`, which sits at `depth`
    ///
    /// A missing child converts to an empty sequence.
    pub(super) fn convert_child(
        &mut self,
        parent: &MathmlElement,
        index: usize,
        depth: usize,
    ) -> Vec<MathComponent> {
        match parent.child(index) {
            Some(child) => self.convert_node(child, depth + 1),
            None => Vec::new(),
        }
    }

    /// Degrade nodes nested beyond the depth limit to one text run
    pub(super) fn flatten_nodes(&mut self, nodes: &[MathmlNode]) -> Vec<MathComponent> {
        self.stats.record_depth_fallback();
        let text: String = nodes.iter().map(MathmlNode::text_content).collect();
        if text.is_empty() {
            Vec::new()
        } else {
            vec![MathComponent::Run(text)]
        }
    }
}

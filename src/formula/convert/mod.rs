// Structural conversion module
//
// Rewrites a located MathML subtree into Office Math components. Sibling-level
// grouping (n-ary operators claiming the rest of their row) lives in the
// converter; per-tag rules are split by construct.

mod accent;
mod converter;
mod matrix;
mod nary;
mod node;

pub use converter::{MathmlConverter, SiblingGroup};

/// Counters collected while converting
///
/// Kept across conversions until [`MathmlConverter::reset_stats`] is called.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConversionStats {
    /// MathML nodes (elements and text leaves) converted
    pub nodes_visited: usize,
    /// Sums and integrals grouped with their body
    pub nary_groups: usize,
    /// Tables converted, in either output shape
    pub matrices: usize,
    /// Subtrees flattened to text because they were nested too deeply
    pub depth_fallbacks: usize,
}

impl ConversionStats {
    pub fn record_node(&mut self) {
        self.nodes_visited += 1;
    }

    pub fn record_nary(&mut self) {
        self.nary_groups += 1;
    }

    pub fn record_matrix(&mut self) {
        self.matrices += 1;
    }

    pub fn record_depth_fallback(&mut self) {
        self.depth_fallbacks += 1;
    }
}

// Office Math component model
//
// This module defines the output side of the conversion: one variant per OMML
// construct the converter can produce. Components are plain owned trees; they
// are built once by the converter and never mutated afterwards.

mod node;
mod types;

pub use node::{MathComponent, text_of};
pub use types::*;

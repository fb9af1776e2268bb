// MathML Input Module
//
// Reads MathML text into a generic, order-preserving element tree and locates
// the subtree holding the formula content. Only the presentation subset that
// LaTeX-to-MathML renderers emit is given a dedicated tag; everything else is
// kept as `MathmlTag::Unknown` so the converter can flatten it.

mod entities;
mod error;
mod locator;
mod lookup;
mod node;
mod parser;

pub use entities::{decode_entities, resolve_entity};
pub use error::MathmlError;
pub use locator::locate_root;
pub use lookup::{MathmlTag, is_token_element};
pub use node::{Attributes, MathmlElement, MathmlNode, find_first};
pub use parser::MathmlParser;

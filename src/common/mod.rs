//! Common utilities shared across the formula modules.
//!
//! Anything here is format-agnostic: it knows nothing about MathML or OMML
//! semantics, only about the XML text both of them travel in.

#[cfg(feature = "omml")]
pub mod xml;

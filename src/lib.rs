//! Litchi MathML - convert MathML formulas into Office Math (OMML)
//!
//! This library converts the presentation MathML produced by LaTeX-to-MathML
//! renderers (KaTeX, latex2mathml, MathJax) into the component tree used by
//! Office Math Markup Language, ready to be embedded in a `.docx` paragraph.
//!
//! # Features
//!
//! - **Streaming parser adapter**: MathML is read with `quick-xml` into an
//!   order-preserving element/text tree
//! - **Structural conversion**: fractions, radicals, scripts, n-ary operators
//!   with limits, matrices and accents
//! - **LibreOffice compatibility mode**: flattens n-ary operators and matrices
//!   into constructs LibreOffice renders reliably
//! - **OMML serialization**: writes `<m:oMath>` fragments (feature `omml`)
//! - **Batch conversion**: converts many formulas in parallel
//!
//! # Example - Converting a KaTeX formula
//!
//! ```
//! use litchi_mathml::formula::{mathml_to_omml, ConvertOptions, ComponentKind};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mathml = r#"<math><semantics><mrow>
//!     <mfrac><mn>1</mn><mn>2</mn></mfrac>
//! </mrow><annotation encoding="application/x-tex">\frac12</annotation></semantics></math>"#;
//!
//! let components = mathml_to_omml(mathml, &ConvertOptions::default())?;
//! assert_eq!(components.len(), 1);
//! assert_eq!(components[0].kind(), ComponentKind::Fraction);
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Writing OMML
//!
//! ```
//! # #[cfg(feature = "omml")]
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use litchi_mathml::formula::{mathml_to_omml_xml, ConvertOptions};
//!
//! let xml = mathml_to_omml_xml("<math><mi>x</mi></math>", &ConvertOptions::default())?;
//! assert!(xml.starts_with("<m:oMath>"));
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "omml"))]
//! # fn main() {}
//! ```

/// Common utilities shared across the formula modules
pub mod common;

/// Formula conversion: MathML parsing, structural conversion and OMML output
pub mod formula;

// Re-export commonly used types for convenience
pub use formula::{
    ComponentKind, ConvertOptions, FormulaError, MathComponent, MathmlConverter, mathml_to_omml,
    mathml_to_omml_batch, mathml_to_omml_lossy,
};

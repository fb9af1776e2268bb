// Formula Module - MathML to Office Math Conversion
//
// This module converts the presentation MathML that LaTeX renderers emit into
// Office Math components, and optionally into OMML text:
//
// - **mathml**: parser adapter, generic tree and root locator
// - **convert**: structural converter with sibling grouping
// - **ast**: the Office Math component model
// - **omml**: OMML serialization (feature `omml`)
//
// # Example
//
// ```
// use litchi_mathml::formula::{mathml_to_omml, ComponentKind, ConvertOptions};
//
// let mathml = "<math><munderover><mo>∑</mo><mi>i</mi><mi>n</mi></munderover><mi>i</mi></math>";
// let components = mathml_to_omml(mathml, &ConvertOptions::default()).unwrap();
// assert_eq!(components[0].kind(), ComponentKind::NarySum);
// ```

/// Office Math component model
///
/// One variant per OMML construct the converter produces, plus the lookup
/// tables for large operators and accent marks.
pub mod ast;
/// Conversion options
pub mod config;
/// Structural MathML to component converter
pub mod convert;
/// MathML parsing
///
/// Reads MathML with `quick-xml` into an order-preserving tree and locates
/// the formula content inside KaTeX's `<semantics>` wrapper.
pub mod mathml;
/// OMML (Office Math Markup Language) Writer
///
/// Reference: https://devblogs.microsoft.com/math-in-office/officemath/
#[cfg(feature = "omml")]
pub mod omml;

use rayon::prelude::*;
use thiserror::Error;

// Re-export public API
pub use ast::{AccentType, ComponentKind, LargeOperator, MathComponent, text_of};
pub use config::{ConvertOptions, DEFAULT_MAX_DEPTH};
pub use convert::{ConversionStats, MathmlConverter, SiblingGroup};
pub use mathml::{MathmlError, MathmlParser};
#[cfg(feature = "omml")]
pub use omml::OmmlWriteError;

/// Conversion error that wraps all possible formula errors
#[derive(Error, Debug)]
pub enum FormulaError {
    #[error("MathML error: {0}")]
    Mathml(#[from] MathmlError),

    #[cfg(feature = "omml")]
    #[error("OMML error: {0}")]
    Omml(#[from] OmmlWriteError),
}

/// Result type for formula operations
pub type Result<T> = std::result::Result<T, FormulaError>;

/// Convert a MathML string into Office Math components
///
/// Input without a `<math>` element yields an empty sequence; malformed XML
/// is an error.
///
/// # Example
/// ```
/// use litchi_mathml::formula::{mathml_to_omml, ComponentKind, ConvertOptions};
///
/// let components = mathml_to_omml(
///     r#"<math><mover accent="true"><mi>x</mi><mo>^</mo></mover></math>"#,
///     &ConvertOptions::default(),
/// ).unwrap();
/// assert_eq!(components.len(), 1);
/// assert_eq!(components[0].kind(), ComponentKind::Accent);
/// ```
pub fn mathml_to_omml(mathml: &str, options: &ConvertOptions) -> Result<Vec<MathComponent>> {
    Ok(MathmlConverter::new(*options).convert(mathml)?)
}

/// Convert a MathML string, treating unreadable input as empty
///
/// For callers embedding formulas in a larger document, where one broken
/// formula must not abort the whole export.
pub fn mathml_to_omml_lossy(mathml: &str, options: &ConvertOptions) -> Vec<MathComponent> {
    mathml_to_omml(mathml, options).unwrap_or_default()
}

/// Convert a MathML string straight to an inline `<m:oMath>` fragment
///
/// Use [`omml::to_omml_para_string`] on the components for display math.
#[cfg(feature = "omml")]
pub fn mathml_to_omml_xml(mathml: &str, options: &ConvertOptions) -> Result<String> {
    let components = mathml_to_omml(mathml, options)?;
    Ok(omml::to_omml_string(&components)?)
}

/// Convert many MathML strings in parallel
///
/// Results are returned in input order.
pub fn mathml_to_omml_batch(
    inputs: &[&str],
    options: &ConvertOptions,
) -> Vec<Result<Vec<MathComponent>>> {
    inputs
        .par_iter()
        .map(|mathml| mathml_to_omml(mathml, options))
        .collect()
}

#[cfg(test)]
mod tests;

/// Error types for MathML parsing.
use thiserror::Error;

/// Errors that can occur while reading MathML into the generic tree
///
/// Conversion itself never fails; every error here comes from the input not
/// being well-formed XML.
#[derive(Error, Debug)]
pub enum MathmlError {
    /// XML syntax error reported by the reader
    #[error("XML parsing error at position {position}: {message}")]
    Xml { position: u64, message: String },

    /// Text or names that are not valid UTF-8
    #[error("Text encoding error: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// Closing tag without a matching open element
    #[error("Unexpected closing tag: </{0}>")]
    UnexpectedClose(String),

    /// Input ended while elements were still open
    #[error("Unclosed element at end of input: <{0}>")]
    UnclosedElement(String),

    /// Nesting deeper than the configured limit
    #[error("XML depth limit exceeded: {0}")]
    DepthLimitExceeded(usize),
}

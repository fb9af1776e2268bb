// OMML (Office Math Markup Language) Writer
//
// Serializes converted math components into the OMML vocabulary Word and
// LibreOffice read from `word/document.xml`. The output is a fragment using
// the `m:` prefix; the embedding document declares the namespace.
//
// Reference: ECMA-376 Part 1, §22.1 (Math)

mod error;
mod writer;

pub use error::OmmlWriteError;
pub use writer::{OMML_NAMESPACE, to_omml_para_string, to_omml_string, write_omml};

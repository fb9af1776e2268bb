//! Tests for the full MathML to Office Math pipeline

mod katex;

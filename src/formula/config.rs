/// Configuration options for MathML conversion.
///
/// This struct controls the output shape of the converter and the nesting
/// guard applied to untrusted input.
///
/// # Examples
///
/// ```rust
/// use litchi_mathml::formula::ConvertOptions;
///
/// // Create with defaults
/// let options = ConvertOptions::default();
/// assert!(!options.libreoffice_compat);
///
/// // Or customize
/// let options = ConvertOptions::new()
///     .with_libreoffice_compat(true)
///     .with_max_depth(64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Replace native n-ary operators and matrices with flattened text
    /// approximations that LibreOffice renders reliably
    pub libreoffice_compat: bool,
    /// Maximum element nesting accepted by the parser and followed by the
    /// converter
    pub max_depth: usize,
}

/// Default nesting limit; LaTeX-generated MathML stays in the tens.
pub const DEFAULT_MAX_DEPTH: usize = 256;

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            libreoffice_compat: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ConvertOptions {
    /// Create a new `ConvertOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to emit the LibreOffice-compatible output shape.
    ///
    /// When enabled, sums and integrals become a sub-superscripted glyph
    /// followed by their body, and matrices become bracketed text such as
    /// `[a, b; c, d]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use litchi_mathml::formula::ConvertOptions;
    ///
    /// let options = ConvertOptions::new().with_libreoffice_compat(true);
    /// assert!(options.libreoffice_compat);
    /// ```
    #[inline]
    pub fn with_libreoffice_compat(mut self, enabled: bool) -> Self {
        self.libreoffice_compat = enabled;
        self
    }

    /// Set the maximum nesting depth.
    ///
    /// A value of zero is raised to one so the `<math>` root itself is always
    /// accepted.
    #[inline]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth.max(1);
        self
    }
}

use crate::languages::config::LanguageConfig;

/// What one line of source turned out to be. Lines carrying documentation
/// hold their text with comment markers already stripped; code lines are
/// passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A single-line comment, a one-line block comment, or the opening line
    /// of a block comment. Carries the stripped text.
    Documentation(&'a str),
    /// A line inside an open block comment, unmodified.
    ContinueMultiline(&'a str),
    /// The line that closes a block comment. Carries the text before the
    /// close marker, right-trimmed.
    CloseMultiline(&'a str),
    /// Shebang or doc-comment line. Contributes to neither side.
    Excluded,
    /// Everything else.
    Code(&'a str),
}

/// Carried across the lines of one file, reset per file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifierState {
    pub in_multiline: bool,
}

/// Classifies one line and advances the multiline flag.
///
/// Check order matters and is fixed:
/// 1. An open block comment swallows everything until its close marker.
/// 2. Exclusions (shebang, doc-comment marker). Doc markers like `///` are
///    prefix-extensions of the line marker and must win over it.
/// 3. Single-line comments, including the degenerate block form that opens
///    and closes on one line. This takes precedence over the block opener so
///    a one-liner never leaves the multiline flag set.
/// 4. Block-comment openers.
/// 5. Code.
pub fn classify<'a>(
    config: &LanguageConfig,
    state: &mut ClassifierState,
    line: &'a str,
) -> LineKind<'a> {
    if state.in_multiline {
        if let Some(text) = config.strip_block_close(line) {
            state.in_multiline = false;
            return LineKind::CloseMultiline(text);
        }
        return LineKind::ContinueMultiline(line);
    }

    if config.is_excluded(line) {
        return LineKind::Excluded;
    }

    if let Some(text) = config.strip_line_comment(line) {
        return LineKind::Documentation(text);
    }

    if let Some(text) = config.strip_degenerate_block(line) {
        return LineKind::Documentation(text);
    }

    if let Some(text) = config.strip_block_open(line) {
        state.in_multiline = true;
        return LineKind::Documentation(text);
    }

    LineKind::Code(line)
}

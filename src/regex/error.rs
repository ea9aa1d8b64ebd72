use thiserror::Error;

/// Reasons a pattern string is rejected. Positions are char indices into the pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("empty pattern")]
    EmptyPattern,

    #[error("dangling `\\` at position {0}")]
    DanglingEscape(usize),

    #[error("unterminated `{open}` opened at position {pos}")]
    UnterminatedGroup { open: char, pos: usize },

    #[error("unparsable pattern: unexpected `{found}` at position {pos}")]
    UnparsablePattern { found: char, pos: usize },
}

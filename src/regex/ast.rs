/// Single-character matcher that may carry a quantifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Atom {
    Literal(char),
    Digit,    // \d
    Word,     // \w
    Wildcard, // .
}

impl Atom {
    pub fn accepts(self, c: char) -> bool {
        match self {
            Atom::Literal(l) => c == l,
            Atom::Digit => c.is_ascii_digit(),
            Atom::Word => c.is_ascii_alphanumeric() || c == '_',
            Atom::Wildcard => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quantifier {
    #[default]
    One,
    ZeroOrOne, // ?
    OneOrMore, // +
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKind {
    Positive, // [abc]
    Negative, // [^abc]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    AnchorStart, // ^
    AnchorEnd,   // $
    Atom(Atom, Quantifier),
    CharClass { members: Vec<char>, kind: ClassKind },
    Group(Vec<String>), // (cat|dog), options are plain literals
}

impl Token {
    #[cfg(test)]
    pub(crate) fn atom(atom: Atom) -> Self {
        Token::Atom(atom, Quantifier::One)
    }
}

/// A compiled pattern.
///
/// Only [`compile`](crate::regex::compile) builds one, so the sequence is never
/// empty, `AnchorStart` can only be first and `AnchorEnd` can only be last.
/// Matching never mutates it; share it freely across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    tokens: Vec<Token>,
}

impl Pattern {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        Pattern { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

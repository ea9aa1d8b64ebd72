use crate::regex::ast::{Atom, ClassKind, Pattern, Quantifier, Token};

/// Reports whether `pattern` occurs in `line`.
///
/// A pattern starting with `^` is tried once at position 0; anything else is
/// tried at every offset, including the empty tail.
pub fn matches(line: &[char], pattern: &Pattern) -> bool {
    match pattern.tokens().split_first() {
        Some((Token::AnchorStart, rest)) => match_here(line, rest),
        _ => (0..=line.len()).any(|start| match_here(&line[start..], pattern.tokens())),
    }
}

impl Pattern {
    pub fn is_match(&self, line: &str) -> bool {
        let line: Vec<char> = line.chars().collect();
        matches(&line, self)
    }
}

// Checks if the tokens match starting exactly at the beginning of `line`.
// Input left over once the tokens run out is fine.
fn match_here(line: &[char], tokens: &[Token]) -> bool {
    let Some((token, rest)) = tokens.split_first() else {
        return true;
    };

    match token {
        // Only ever first, and `matches` strips it.
        Token::AnchorStart => false,
        Token::AnchorEnd => line.is_empty(),
        Token::CharClass { members, kind } => match line.split_first() {
            Some((c, tail)) if class_accepts(members, *kind, *c) => match_here(tail, rest),
            _ => false,
        },
        Token::Group(options) => options.iter().any(|option| {
            strip_literal(line, option).is_some_and(|tail| match_here(tail, rest))
        }),
        Token::Atom(atom, quantifier) => match_atom(line, *atom, *quantifier, rest),
    }
}

fn match_atom(line: &[char], atom: Atom, quantifier: Quantifier, rest: &[Token]) -> bool {
    let head = match line.split_first() {
        Some((c, tail)) if atom.accepts(*c) => Some(tail),
        _ => None,
    };

    match quantifier {
        Quantifier::One => head.is_some_and(|tail| match_here(tail, rest)),
        // Skipping wins whenever the rest already matches.
        Quantifier::ZeroOrOne => {
            match_here(line, rest) || head.is_some_and(|tail| match_here(tail, rest))
        }
        // Shortest run first, one more char per attempt. Looping keeps the
        // recursion depth tied to the pattern, not to the line.
        Quantifier::OneOrMore => {
            let run = line.iter().take_while(|&&c| atom.accepts(c)).count();
            (1..=run).any(|taken| match_here(&line[taken..], rest))
        }
    }
}

fn class_accepts(members: &[char], kind: ClassKind, c: char) -> bool {
    let found = members.contains(&c);
    match kind {
        ClassKind::Positive => found,
        ClassKind::Negative => !found,
    }
}

fn strip_literal<'a>(line: &'a [char], literal: &str) -> Option<&'a [char]> {
    let mut rest = line;
    for expected in literal.chars() {
        match rest.split_first() {
            Some((c, tail)) if *c == expected => rest = tail,
            _ => return None,
        }
    }
    Some(rest)
}

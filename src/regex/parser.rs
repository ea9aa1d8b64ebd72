use std::iter;
use std::mem;
use std::str::FromStr;

use crate::regex::ast::{Atom, ClassKind, Pattern, Quantifier, Token};
use crate::regex::error::CompileError;

pub fn compile(pattern: &str) -> Result<Pattern, CompileError> {
    let chars: Vec<char> = pattern.chars().collect();
    if chars.is_empty() {
        return Err(CompileError::EmptyPattern);
    }

    // Anchors are positional: `^` only as the first char, `$` only as the last.
    let anchored_start = chars[0] == '^';
    let start = usize::from(anchored_start);
    let last = chars.len() - 1;
    let anchored_end = last >= start && chars[last] == '$' && !is_escaped(&chars, last);
    let end = if anchored_end { last } else { chars.len() };

    let mut tokens = Vec::new();
    if anchored_start {
        tokens.push(Token::AnchorStart);
    }

    let mut chars = chars.iter().copied().enumerate().take(end).skip(start).peekable();

    while let Some((pos, c)) = chars.next() {
        let atom = match c {
            '\\' => match chars.next() {
                Some((_, 'd')) => Atom::Digit,
                Some((_, 'w')) => Atom::Word,
                Some((_, escaped)) => Atom::Literal(escaped),
                None => return Err(CompileError::DanglingEscape(pos)),
            },
            '.' => Atom::Wildcard,
            '[' => {
                tokens.push(parse_class(&mut chars, pos)?);
                continue;
            }
            '(' => {
                tokens.push(parse_group(&mut chars, pos)?);
                continue;
            }
            // `+`/`?` here did not follow an atom; `|` and `)` only belong inside a group.
            '+' | '?' | '|' | ')' => return Err(CompileError::UnparsablePattern { found: c, pos }),
            _ => Atom::Literal(c),
        };

        let quantifier = match chars.peek() {
            Some((_, '+')) => Quantifier::OneOrMore,
            Some((_, '?')) => Quantifier::ZeroOrOne,
            _ => Quantifier::One,
        };
        if quantifier != Quantifier::One {
            chars.next();
        }
        tokens.push(Token::Atom(atom, quantifier));
    }

    if anchored_end {
        tokens.push(Token::AnchorEnd);
    }
    Ok(Pattern::new(tokens))
}

impl FromStr for Pattern {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        compile(s)
    }
}

// An odd run of backslashes before `idx` escapes it.
fn is_escaped(chars: &[char], idx: usize) -> bool {
    chars[..idx].iter().rev().take_while(|&&c| c == '\\').count() % 2 == 1
}

fn parse_class<I>(chars: &mut I, open_pos: usize) -> Result<Token, CompileError>
where
    I: Iterator<Item = (usize, char)>,
{
    let (body, close_pos) = take_until(chars, ']').ok_or(CompileError::UnterminatedGroup {
        open: '[',
        pos: open_pos,
    })?;

    let mut members: Vec<char> = body.into_iter().map(|(_, c)| c).collect();
    let kind = if members.first() == Some(&'^') {
        members.remove(0);
        ClassKind::Negative
    } else {
        ClassKind::Positive
    };

    if members.is_empty() {
        return Err(CompileError::UnparsablePattern {
            found: ']',
            pos: close_pos,
        });
    }
    Ok(Token::CharClass { members, kind })
}

fn parse_group<I>(chars: &mut I, open_pos: usize) -> Result<Token, CompileError>
where
    I: Iterator<Item = (usize, char)>,
{
    let (body, close_pos) = take_until(chars, ')').ok_or(CompileError::UnterminatedGroup {
        open: '(',
        pos: open_pos,
    })?;

    // Options are kept verbatim; nothing inside a group is special except `|`.
    let mut options = Vec::new();
    let mut current = String::new();
    for (pos, c) in body.into_iter().chain(iter::once((close_pos, ')'))) {
        if c == '|' || c == ')' {
            if current.is_empty() {
                return Err(CompileError::UnparsablePattern { found: c, pos });
            }
            options.push(mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    Ok(Token::Group(options))
}

/// Consumes through the next `close`, returning what came before it and where `close` was.
fn take_until<I>(chars: &mut I, close: char) -> Option<(Vec<(usize, char)>, usize)>
where
    I: Iterator<Item = (usize, char)>,
{
    let mut body = Vec::new();
    for (pos, c) in chars.by_ref() {
        if c == close {
            return Some((body, pos));
        }
        body.push((pos, c));
    }
    None
}

use std::io::{self, Read};

use anyhow::{Context, Result, bail};
use bytes::{BufMut, BytesMut};
use tinygrep::regex::{compile, matches};

use crate::cli::Config;

pub const EXIT_MATCH: i32 = 0;
pub const EXIT_NO_MATCH: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Compiles the pattern and tests it against the whole input as one line.
pub fn run<R: Read>(cfg: &Config, mut input: R) -> Result<bool> {
    let pattern = compile(&cfg.pattern)
        .with_context(|| format!("invalid pattern `{}`", cfg.pattern))?;

    let mut writer = BytesMut::new().writer();
    io::copy(&mut input, &mut writer).context("read input text")?;
    let buffer = writer.into_inner().freeze();

    let text = std::str::from_utf8(&buffer).context("input is not valid UTF-8")?;
    let line = strip_newline(text);

    let chars: Vec<char> = line.chars().collect();
    if chars.len() > cfg.max_line_chars {
        bail!(
            "input line has {} chars, limit is {}",
            chars.len(),
            cfg.max_line_chars
        );
    }

    Ok(matches(&chars, &pattern))
}

pub fn exit_code(outcome: &Result<bool>) -> i32 {
    match outcome {
        Ok(true) => EXIT_MATCH,
        Ok(false) => EXIT_NO_MATCH,
        Err(_) => EXIT_ERROR,
    }
}

fn strip_newline(text: &str) -> &str {
    text.strip_suffix('\n')
        .map(|t| t.strip_suffix('\r').unwrap_or(t))
        .unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::DEFAULT_MAX_LINE_CHARS;

    fn cfg(pattern: &str) -> Config {
        Config {
            pattern: pattern.to_string(),
            max_line_chars: DEFAULT_MAX_LINE_CHARS,
        }
    }

    #[test]
    fn matches_input_with_trailing_newline() {
        assert!(run(&cfg("dog$"), "hot dog\n".as_bytes()).unwrap());
        assert!(run(&cfg("^dog$"), "dog\r\n".as_bytes()).unwrap());
        assert!(!run(&cfg("^cat"), "dog\n".as_bytes()).unwrap());
    }

    #[test]
    fn maps_outcomes_to_exit_codes() {
        assert_eq!(exit_code(&run(&cfg(r"\d"), "a1".as_bytes())), EXIT_MATCH);
        assert_eq!(exit_code(&run(&cfg(r"\d"), "ab".as_bytes())), EXIT_NO_MATCH);
        assert_eq!(exit_code(&run(&cfg("[ab"), "ab".as_bytes())), EXIT_ERROR);
    }

    #[test]
    fn reports_compile_errors_with_context() {
        let err = run(&cfg(""), "x".as_bytes()).unwrap_err();
        assert_eq!(format!("{err:#}"), "invalid pattern ``: empty pattern");
    }

    #[test]
    fn rejects_invalid_utf8() {
        assert!(run(&cfg("a"), &[0x61, 0xff][..]).is_err());
    }

    #[test]
    fn enforces_line_limit() {
        let limited = Config {
            max_line_chars: 3,
            ..cfg("a")
        };
        assert!(run(&limited, "abc\n".as_bytes()).unwrap());
        assert!(run(&limited, "abcd".as_bytes()).is_err());
    }

    #[test]
    fn plus_patterns_finish_at_the_default_limit() {
        let line = "a".repeat(DEFAULT_MAX_LINE_CHARS);
        assert!(run(&cfg("^a+$"), line.as_bytes()).unwrap());
        assert!(!run(&cfg(".+x"), line.as_bytes()).unwrap());
        assert_eq!(exit_code(&run(&cfg("^a+$"), line.as_bytes())), EXIT_MATCH);
    }
}

use anyhow::{Context, Result, bail};

pub const USAGE: &str = "usage: tinygrep -E <pattern> [--max-line-chars=N]";

/// Lines longer than this are refused, which bounds the matching work per line.
pub const DEFAULT_MAX_LINE_CHARS: usize = 16 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub pattern: String,
    pub max_line_chars: usize,
}

pub fn parse_args(args: Vec<String>) -> Result<Config> {
    let Some(flag_idx) = args.iter().position(|a| a == "-E") else {
        bail!("missing -E\n{USAGE}");
    };
    let pattern_idx = flag_idx + 1;
    let Some(pattern) = args.get(pattern_idx) else {
        bail!("missing pattern after -E\n{USAGE}");
    };

    // The pattern itself may look like a flag.
    let limit_flag = args
        .iter()
        .enumerate()
        .filter(|&(idx, _)| idx != pattern_idx)
        .find_map(|(_, a)| a.strip_prefix("--max-line-chars="));
    let max_line_chars = match limit_flag {
        Some(value) => value
            .parse()
            .with_context(|| format!("invalid --max-line-chars value `{value}`"))?,
        None => DEFAULT_MAX_LINE_CHARS,
    };

    Ok(Config {
        pattern: pattern.clone(),
        max_line_chars,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("tinygrep")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_pattern_after_flag() {
        let cfg = parse_args(args(&["-E", r"\d+"])).unwrap();
        assert_eq!(cfg.pattern, r"\d+");
        assert_eq!(cfg.max_line_chars, DEFAULT_MAX_LINE_CHARS);
    }

    #[test]
    fn parses_line_limit() {
        let cfg = parse_args(args(&["--max-line-chars=10", "-E", "a"])).unwrap();
        assert_eq!(cfg.max_line_chars, 10);
    }

    #[test]
    fn pattern_that_looks_like_the_limit_flag_is_a_pattern() {
        let cfg = parse_args(args(&["-E", "--max-line-chars=x"])).unwrap();
        assert_eq!(cfg.pattern, "--max-line-chars=x");
        assert_eq!(cfg.max_line_chars, DEFAULT_MAX_LINE_CHARS);

        let cfg = parse_args(args(&["-E", "--max-line-chars=x", "--max-line-chars=5"])).unwrap();
        assert_eq!(cfg.max_line_chars, 5);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(parse_args(args(&["a"])).is_err());
        assert!(parse_args(args(&["-E"])).is_err());
        assert!(parse_args(args(&["-E", "a", "--max-line-chars=lots"])).is_err());
    }
}

//! A small regular-expression engine for single lines.
//!
//! Supported syntax: literals, `\d`, `\w`, `.`, `[abc]`, `[^abc]`, `+` and `?`
//! after a single atom, `^`/`$` anchors and one level of `(a|b|...)` whose
//! options are plain literals.
//!
//! ```
//! use tinygrep::regex::compile;
//!
//! let pattern = compile(r"^I see \d+ (cat|dog)s?$").unwrap();
//! assert!(pattern.is_match("I see 2 dogs"));
//! assert!(!pattern.is_match("I see 2 dog3"));
//! ```

pub mod regex;

use std::borrow::Cow;
use std::fmt;

use crate::filter::filter_matches;
use crate::scan::scan;
use crate::token::{MatchData, Token};

/// Replacement for emoji, used by [`replace_emoji`](ReplaceEmoji) and for emoji
/// filtered out by version in [`demojize`](crate::Demojize) and [`emojize`](crate::Emojize)
#[derive(Default)]
pub enum Replacement<'r> {
    /// Remove the emoji
    #[default]
    Drop,
    Literal(Cow<'r, str>),
    /// Called with the emoji and its metadata, returns the replacement
    Callback(Box<dyn FnMut(&str, &MatchData) -> String + 'r>),
}

impl<'r> Replacement<'r> {
    pub fn with(f: impl FnMut(&str, &MatchData) -> String + 'r) -> Self {
        Replacement::Callback(Box::new(f))
    }

    pub(crate) fn apply(&mut self, out: &mut String, emoji: &str, data: &MatchData) {
        match self {
            Replacement::Drop => {}
            Replacement::Literal(s) => out.push_str(s),
            Replacement::Callback(f) => out.push_str(&f(emoji, data)),
        }
    }
}

impl<'r> From<&'r str> for Replacement<'r> {
    #[inline]
    fn from(s: &'r str) -> Self {
        Replacement::Literal(Cow::Borrowed(s))
    }
}

impl From<String> for Replacement<'_> {
    #[inline]
    fn from(s: String) -> Self {
        Replacement::Literal(Cow::Owned(s))
    }
}

impl fmt::Debug for Replacement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Replacement::Drop => f.write_str("Drop"),
            Replacement::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            Replacement::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

/// Replaces emoji in text.
///
/// Non-RGI sequences are replaced as a whole if joiners are kept (see
/// [`Config::replace_emoji_keep_zwj`](crate::config::Config::replace_emoji_keep_zwj)),
/// otherwise each of their parts is replaced on its own.
#[derive(Debug, Default)]
pub struct ReplaceEmoji<'r> {
    replace: Replacement<'r>,
    version: Option<f32>,
    keep_zwj: Option<bool>,
}

impl<'r> ReplaceEmoji<'r> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replacement for each emoji, removed by default
    pub fn replace(mut self, replace: impl Into<Replacement<'r>>) -> Self {
        self.replace = replace.into();
        self
    }

    /// Only replace emoji newer than `version`, keeping all others
    pub fn version(mut self, version: f32) -> Self {
        self.version = Some(version);
        self
    }

    /// Overrides the process-wide joiner setting for this call
    pub fn keep_zwj(mut self, keep_zwj: bool) -> Self {
        self.keep_zwj = Some(keep_zwj);
        self
    }

    pub fn apply(mut self, text: &str) -> String {
        let keep_zwj = self.keep_zwj.unwrap_or_else(|| crate::config::get().replace_emoji_keep_zwj);

        let tokens = filter_matches(scan(text, keep_zwj), false, true);

        let mut out = String::with_capacity(text.len());

        for token in &tokens {
            let (version, data) = match token {
                Token::Char(c) => {
                    out.push_str(c);
                    continue;
                }
                Token::Emoji(m) => (m.entry.version(), m.data()),
                Token::NonRgi(m) => (m.version(), m.data()),
            };

            match self.version {
                Some(max) if max >= 0.0 && version <= max => out.push_str(token.text()),
                _ => self.replace.apply(&mut out, token.text(), &data),
            }
        }

        out
    }
}

/// Removes all emoji from `text`
///
/// ```
/// assert_eq!(emoji::replace_emoji("Rust \u{1F44D}!", ""), "Rust !");
/// assert_eq!(emoji::replace_emoji("Rust \u{1F44D}!", "<emoji>"), "Rust <emoji>!");
/// ```
pub fn replace_emoji<'r>(text: &str, replace: impl Into<Replacement<'r>>) -> String {
    ReplaceEmoji::new().replace(replace).apply(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace() {
        assert_eq!(replace_emoji("a\u{1F44D}b\u{2764}\u{FE0F}c", "*"), "a*b*c");
        assert_eq!(replace_emoji("a\u{1F44D}b", Replacement::Drop), "ab");
        assert_eq!(replace_emoji("no emoji", "*"), "no emoji");
    }

    #[test]
    fn test_callback_offsets() {
        let mut spans = Vec::new();

        let out = ReplaceEmoji::new()
            .replace(Replacement::with(|e, data| {
                spans.push((data.match_start, data.match_end));
                format!("[{}]", e.chars().count())
            }))
            .apply("\u{e9}\u{1F44D} \u{1F469}\u{1F3FF}");

        assert_eq!(out, "\u{e9}[1] [2]");
        assert_eq!(spans, [(1, 2), (3, 5)]);
    }

    #[test]
    fn test_version_gate() {
        // butterfly is 3.0, thumbs up 0.6
        let text = "\u{1F98B}\u{1F44D}";

        assert_eq!(ReplaceEmoji::new().replace("x").version(1.0).apply(text), "x\u{1F44D}");
        assert_eq!(ReplaceEmoji::new().replace("x").version(3.0).apply(text), text);
        assert_eq!(ReplaceEmoji::new().replace("x").version(-1.0).apply(text), "xx");
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", Replacement::from("a")), "Literal(\"a\")");
        assert_eq!(format!("{:?}", Replacement::with(|_, _| String::new())), "Callback(..)");
    }
}

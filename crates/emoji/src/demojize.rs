use std::borrow::Cow;

use crate::data::Language;
use crate::replace::Replacement;
use crate::scan::scan;
use crate::token::Token;

/// Replaces emoji in text with their shortcodes.
///
/// ```
/// use emoji::{Demojize, Language};
///
/// let text = Demojize::new().delimiters("__", "__").apply("Unicode is tricky \u{1F62F}");
/// assert_eq!(text, "Unicode is tricky __hushed_face__");
///
/// let text = Demojize::new().language(Language::Alias).apply("\u{1F44D}");
/// assert_eq!(text, ":+1:");
/// ```
#[derive(Debug)]
pub struct Demojize<'r> {
    open: Cow<'r, str>,
    close: Cow<'r, str>,
    language: Language,
    version: Option<f32>,
    handle_version: Replacement<'r>,
    keep_zwj: Option<bool>,
}

impl Default for Demojize<'_> {
    fn default() -> Self {
        Demojize {
            open: Cow::Borrowed(":"),
            close: Cow::Borrowed(":"),
            language: Language::English,
            version: None,
            handle_version: Replacement::Drop,
            keep_zwj: None,
        }
    }
}

impl<'r> Demojize<'r> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delimiters put around each shortcode, `:` by default
    pub fn delimiters(mut self, open: impl Into<Cow<'r, str>>, close: impl Into<Cow<'r, str>>) -> Self {
        self.open = open.into();
        self.close = close.into();
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Maximum emoji version, newer emoji are passed to [`handle_version`](Self::handle_version)
    pub fn version(mut self, version: f32) -> Self {
        self.version = Some(version);
        self
    }

    /// Replacement for emoji newer than [`version`](Self::version), removed by default
    pub fn handle_version(mut self, handle_version: impl Into<Replacement<'r>>) -> Self {
        self.handle_version = handle_version.into();
        self
    }

    /// Overrides the process-wide joiner setting for this call
    pub fn keep_zwj(mut self, keep_zwj: bool) -> Self {
        self.keep_zwj = Some(keep_zwj);
        self
    }

    pub fn apply(mut self, text: &str) -> String {
        let keep_zwj = self.keep_zwj.unwrap_or_else(|| crate::config::get().demojize_keep_zwj);

        let mut out = String::with_capacity(text.len() * 2);

        for token in scan(text, keep_zwj) {
            let m = match token {
                Token::Emoji(m) => m,
                other => {
                    out.push_str(other.text());
                    continue;
                }
            };

            if matches!(self.version, Some(max) if m.entry.version() > max) {
                self.handle_version.apply(&mut out, m.emoji, &m.data());
                continue;
            }

            match m.entry.name(self.language) {
                Some(name) => {
                    out.push_str(&self.open);
                    out.push_str(strip_colons(name));
                    out.push_str(&self.close);
                }
                // no translation, keep the emoji itself
                None => out.push_str(m.emoji),
            }
        }

        out
    }
}

fn strip_colons(name: &str) -> &str {
    name.strip_prefix(':').and_then(|n| n.strip_suffix(':')).unwrap_or(name)
}

/// Replaces emoji in `text` with their English shortcodes
///
/// ```
/// assert_eq!(emoji::demojize("Rust is fun \u{1F44D}"), "Rust is fun :thumbs_up:");
/// ```
pub fn demojize(text: &str) -> String {
    Demojize::new().apply(text)
}

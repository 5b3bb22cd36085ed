use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::data::{self, Language};
use crate::replace::Replacement;
use crate::token::MatchData;
use crate::{is_variation_selector, Error, VS15, VS16};

/// Presentation selector appended to emoji that accept one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// VS-15, U+FE0E
    TextType,
    /// VS-16, U+FE0F
    EmojiType,
}

impl Variant {
    pub const fn as_str(self) -> &'static str {
        match self {
            Variant::TextType => "text_type",
            Variant::EmojiType => "emoji_type",
        }
    }

    pub const fn selector(self) -> char {
        match self {
            Variant::TextType => VS15,
            Variant::EmojiType => VS16,
        }
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text_type" => Ok(Variant::TextType),
            "emoji_type" => Ok(Variant::EmojiType),
            _ => Err(Error::InvalidVariant(s.to_owned())),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shortcode pattern between the given delimiters, `\w` without the zero-width joiners
fn pattern(open: &str, close: &str) -> String {
    format!(
        r"{}[[\w--\p{{Join_Control}}]\-&.’”“()!#*+?–,/]+{}",
        regex::escape(open),
        regex::escape(close)
    )
}

static DEFAULT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(&pattern(":", ":")).unwrap());

/// Replaces shortcodes in text with the emoji they stand for.
///
/// Shortcodes that are not known in the chosen language are left as they are.
///
/// ```
/// use emoji::{Emojize, Language, Variant};
///
/// # fn main() -> Result<(), emoji::Error> {
/// let text = Emojize::new().language(Language::Alias).apply("Rust is fun :thumbsup:")?;
/// assert_eq!(text, "Rust is fun \u{1F44D}");
///
/// let text = Emojize::new().delimiters("{", "}").apply("Rust is fun {thumbs_up}")?;
/// assert_eq!(text, "Rust is fun \u{1F44D}");
///
/// let text = Emojize::new().variant(Variant::TextType).apply(":red_heart:")?;
/// assert_eq!(text, "\u{2764}\u{FE0E}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Emojize<'r> {
    open: Cow<'r, str>,
    close: Cow<'r, str>,
    variant: Option<Variant>,
    language: Language,
    version: Option<f32>,
    handle_version: Replacement<'r>,
}

impl Default for Emojize<'_> {
    fn default() -> Self {
        Emojize {
            open: Cow::Borrowed(":"),
            close: Cow::Borrowed(":"),
            variant: None,
            language: Language::English,
            version: None,
            handle_version: Replacement::Drop,
        }
    }
}

impl<'r> Emojize<'r> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delimiters around each shortcode, `:` by default
    pub fn delimiters(mut self, open: impl Into<Cow<'r, str>>, close: impl Into<Cow<'r, str>>) -> Self {
        self.open = open.into();
        self.close = close.into();
        self
    }

    /// Presentation selector for emoji that accept one, replacing any existing selector
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
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

    pub fn apply(self, text: &str) -> Result<String, Error> {
        if self.open == ":" && self.close == ":" {
            return Ok(self.replace_all(&DEFAULT_PATTERN, text));
        }

        let re = Regex::new(&pattern(&self.open, &self.close))?;

        Ok(self.replace_all(&re, text))
    }

    fn replace_all(mut self, re: &Regex, text: &str) -> String {
        let mut out = String::with_capacity(text.len());

        // code point offset of `last`
        let mut offset = 0;
        let mut last = 0;

        for m in re.find_iter(text) {
            let skipped = &text[last..m.start()];
            out.push_str(skipped);
            offset += skipped.chars().count();

            let len = m.as_str().chars().count();
            self.substitute(&mut out, m.as_str(), offset, offset + len);

            offset += len;
            last = m.end();
        }

        out.push_str(&text[last..]);
        out
    }

    fn substitute(&mut self, out: &mut String, span: &str, match_start: usize, match_end: usize) {
        let name = &span[self.open.len()..span.len() - self.close.len()];

        let Some(entry) = data::lookup(&format!(":{name}:"), self.language) else {
            out.push_str(span);
            return;
        };

        if matches!(self.version, Some(max) if entry.version() > max) {
            let data = MatchData {
                entry: Some(entry),
                match_start,
                match_end,
            };

            self.handle_version.apply(out, entry.emoji(), &data);
            return;
        }

        match self.variant {
            Some(variant) if entry.has_variant() => {
                let emoji = entry.emoji();
                out.push_str(emoji.strip_suffix(is_variation_selector).unwrap_or(emoji));
                out.push(variant.selector());
            }
            _ => out.push_str(entry.emoji()),
        }
    }
}

/// Replaces English shortcodes in `text` with the emoji they stand for
///
/// ```
/// assert_eq!(emoji::emojize("Rust is fun :thumbs_up:"), "Rust is fun \u{1F44D}");
/// assert_eq!(emoji::emojize("Hello :not_a_real_emoji:"), "Hello :not_a_real_emoji:");
/// ```
pub fn emojize(text: &str) -> String {
    Emojize::new().replace_all(&DEFAULT_PATTERN, text)
}

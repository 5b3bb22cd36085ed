use hashbrown::HashSet;

use crate::data::{self, Language};
use crate::emojize::Emojize;
use crate::filter::filter_matches;
use crate::replace::Replacement;
use crate::scan::scan;
use crate::token::{EmojiMatch, Token};
use crate::Error;

/// Lists every registered emoji in `text`, in order.
///
/// Emoji linked by zero-width joiners into a non-RGI sequence are listed individually.
///
/// ```
/// let list = emoji::emoji_list("Hi, I am fine. \u{1F601}");
///
/// assert_eq!(list.len(), 1);
/// assert_eq!((list[0].start, list[0].end, list[0].emoji), (15, 16, "\u{1F601}"));
/// ```
pub fn emoji_list(text: &str) -> Vec<EmojiMatch<'_>> {
    filter_matches(scan(text, false), true, false)
        .into_iter()
        .filter_map(|token| match token {
            Token::Emoji(m) => Some(m),
            _ => None,
        })
        .collect()
}

/// Lists the distinct emoji in `text`, in order of first occurrence
pub fn distinct_emoji_list(text: &str) -> Vec<&str> {
    let mut seen = HashSet::new();

    emoji_list(text).into_iter().map(|m| m.emoji).filter(|e| seen.insert(*e)).collect()
}

/// Counts the emoji in `text`, or only distinct emoji if `unique` is set
pub fn emoji_count(text: &str, unique: bool) -> usize {
    if unique {
        return distinct_emoji_list(text).len();
    }

    emoji_list(text).len()
}

/// Checks if `s` is exactly one registered emoji, in any qualification
///
/// ```
/// assert!(emoji::is_emoji("\u{1F44D}"));
/// assert!(!emoji::is_emoji("\u{1F44D}\u{1F44D}"));
/// assert!(!emoji::is_emoji(":thumbs_up:"));
/// ```
pub fn is_emoji(s: &str) -> bool {
    data::get(s).is_some()
}

/// Emoji version of the emoji `s`, an English shortcode, or the first emoji or shortcode found in `s`
///
/// See <https://www.unicode.org/reports/tr51/#Versioning>
///
/// ```
/// assert_eq!(emoji::version("\u{1F601}").unwrap(), 0.6);
/// assert_eq!(emoji::version(":butterfly:").unwrap(), 3.0);
/// assert!(emoji::version("no emoji here").is_err());
/// ```
pub fn version(s: &str) -> Result<f32, Error> {
    if let Some(entry) = data::get(s).or_else(|| data::lookup(s, Language::English)) {
        return Ok(entry.version());
    }

    if let Some(m) = emoji_list(s).first() {
        tracing::trace!("Found emoji {:?} at {}", m.emoji, m.start);
        return Ok(m.entry.version());
    }

    for language in std::iter::once(Language::Alias).chain(Language::ALL) {
        let mut found = None;

        Emojize::new()
            .language(language)
            .version(-1.0)
            .handle_version(Replacement::with(|_, data| {
                if found.is_none() {
                    found = data.entry.map(|e| e.version());
                }
                String::new()
            }))
            .apply(s)?;

        if let Some(version) = found {
            tracing::trace!("Found {language} shortcode in {s:?}");
            return Ok(version);
        }
    }

    Err(Error::NoEmojiFound)
}

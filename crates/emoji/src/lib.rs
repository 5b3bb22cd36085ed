//! Conversion between emoji shortcodes such as `:thumbs_up:` and the Unicode emoji
//! they stand for, plus structural queries over emoji found in text.
//!
//! Text is scanned with a longest-match walk over every known emoji sequence. Sequences
//! joined by zero-width joiners (U+200D) that are not themselves registered ("non-RGI")
//! are decomposed into their registered parts, and can optionally be recombined.
//!
//! ```
//! assert_eq!(emoji::emojize("Rust is fun :thumbs_up:"), "Rust is fun \u{1F44D}");
//! assert_eq!(emoji::demojize("Rust is fun \u{1F44D}"), "Rust is fun :thumbs_up:");
//! assert_eq!(emoji::emoji_count("\u{1F44D} and \u{1F44E}", false), 2);
//! ```
//!
//! All offsets reported by this crate are code-point offsets, not byte offsets.

pub mod config;
pub mod data;
pub mod error;
pub mod filter;
pub mod scan;
pub mod tree;

mod demojize;
mod emojize;
mod query;
mod replace;
mod token;

pub use data::{find, get, iter, lookup, EmojiEntry, Language, Status};
pub use error::Error;
pub use token::{EmojiMatch, MatchData, NonRgiMatch, Token};

pub use demojize::{demojize, Demojize};
pub use emojize::{emojize, Emojize, Variant};
pub use filter::analyze;
pub use query::{distinct_emoji_list, emoji_count, emoji_list, is_emoji, version};
pub use replace::{replace_emoji, ReplaceEmoji, Replacement};

/// Zero-width joiner
pub(crate) const ZWJ: char = '\u{200D}';

/// Text presentation selector, VS-15
pub(crate) const VS15: char = '\u{FE0E}';

/// Emoji presentation selector, VS-16
pub(crate) const VS16: char = '\u{FE0F}';

#[inline]
pub(crate) const fn is_variation_selector(c: char) -> bool {
    matches!(c, VS15 | VS16)
}

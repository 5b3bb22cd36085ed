//! The emoji table, compiled from `data/emoji.txt` by the build script.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Qualification of an emoji sequence, see <https://www.unicode.org/reports/tr51/#def_qualified_emoji>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Skin tones and hair styles, which normally only appear attached to a base emoji
    Component,
    FullyQualified,
    /// Minimally-qualified or unqualified forms, missing one or more U+FE0F
    NonFullyQualified,
}

impl Status {
    pub const fn as_str(self) -> &'static str {
        match self {
            Status::Component => "component",
            Status::FullyQualified => "fully_qualified",
            Status::NonFullyQualified => "non_fully_qualified",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language of emoji shortcodes
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    English,
    Spanish,
    Portuguese,
    Italian,
    French,
    German,
    /// English aliases, e.g. `:+1:` or `:thumbsup:` instead of `:thumbs_up:`
    Alias,
}

impl Language {
    /// Every language with its own shortcodes, excluding [`Language::Alias`]
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::Spanish,
        Language::Portuguese,
        Language::Italian,
        Language::French,
        Language::German,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::Portuguese => "pt",
            Language::Italian => "it",
            Language::French => "fr",
            Language::German => "de",
            Language::Alias => "alias",
        }
    }

    /// Column of this language in the generated tables, aliases fall back to English
    const fn column(self) -> usize {
        match self {
            Language::English | Language::Alias => 0,
            Language::Spanish => 1,
            Language::Portuguese => 2,
            Language::Italian => 3,
            Language::French => 4,
            Language::German => 5,
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "en" => Language::English,
            "es" => Language::Spanish,
            "pt" => Language::Portuguese,
            "it" => Language::Italian,
            "fr" => Language::French,
            "de" => Language::German,
            "alias" => Language::Alias,
            _ => return Err(Error::UnknownLanguage(s.to_owned())),
        })
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single known emoji sequence and its metadata
#[derive(Debug, PartialEq)]
pub struct EmojiEntry {
    emoji: &'static str,
    status: Status,
    version: f32,
    variant: bool,
    names: [Option<&'static str>; 6],
    aliases: &'static [&'static str],
}

impl EmojiEntry {
    /// The emoji sequence itself
    #[inline]
    pub fn emoji(&self) -> &'static str {
        self.emoji
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn is_component(&self) -> bool {
        self.status == Status::Component
    }

    /// The Emoji version this sequence was introduced in, see <https://www.unicode.org/reports/tr51/#Versioning>
    #[inline]
    pub fn version(&self) -> f32 {
        self.version
    }

    /// Whether the base accepts a text or emoji presentation selector (U+FE0E/U+FE0F)
    #[inline]
    pub fn has_variant(&self) -> bool {
        self.variant
    }

    /// Shortcode in the given language, including its `:` delimiters.
    ///
    /// For [`Language::Alias`] this is the first alias, or the English name if there is none.
    pub fn name(&self, language: Language) -> Option<&'static str> {
        match language {
            Language::Alias => self.aliases.first().copied().or(self.names[0]),
            _ => self.names[language.column()],
        }
    }

    /// English aliases, including their `:` delimiters
    #[inline]
    pub fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }
}

include!(concat!(env!("OUT_DIR"), "/codegen.rs"));

/// Looks up an exact emoji sequence
pub fn get(e: &str) -> Option<&'static EmojiEntry> {
    EMOJI_TO_INDEX.get(e).map(|&idx| &ENTRIES[idx as usize])
}

/// Takes any known form of an emoji and returns the fully-qualified form
pub fn find(e: &str) -> Option<&'static str> {
    let idx = *EMOJI_TO_INDEX.get(e)?;

    ENTRIES.get(FULLY_QUALIFIED[idx as usize] as usize).map(EmojiEntry::emoji)
}

/// Iterates through all known emoji sequences, in every qualification
pub fn iter() -> impl Iterator<Item = &'static EmojiEntry> {
    ENTRIES.iter()
}

/// Looks up a shortcode, such as `:thumbs_up:`, in the given language.
///
/// Only fully-qualified emoji and components are found this way.
pub fn lookup(shortcode: &str, language: Language) -> Option<&'static EmojiEntry> {
    let table = match language {
        Language::Alias => &ALIASES_TO_INDEX,
        _ => &NAMES_TO_INDEX[language.column()],
    };

    table.get(shortcode).map(|&idx| &ENTRIES[idx as usize])
}

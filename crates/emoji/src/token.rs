use std::fmt;

use crate::data::EmojiEntry;
use crate::ZWJ;

/// A registered ("RGI") emoji found in text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmojiMatch<'a> {
    /// The matched text, exactly as found in the input
    pub emoji: &'a str,
    /// Code-point offset of the first code point
    pub start: usize,
    /// Code-point offset one past the last code point
    pub end: usize,
    pub entry: &'static EmojiEntry,
}

impl EmojiMatch<'_> {
    /// Metadata passed to replacement callbacks
    #[inline]
    pub fn data(&self) -> MatchData {
        MatchData {
            entry: Some(self.entry),
            match_start: self.start,
            match_end: self.end,
        }
    }
}

/// Registered emoji joined by zero-width joiners, where the whole
/// sequence is not registered itself ("non-RGI").
#[derive(Debug, Clone, PartialEq)]
pub struct NonRgiMatch<'a> {
    emojis: Vec<EmojiMatch<'a>>,
    emoji: String,
}

impl<'a> NonRgiMatch<'a> {
    pub(crate) fn new(first: EmojiMatch<'a>, second: EmojiMatch<'a>) -> Self {
        let mut emoji = String::with_capacity(first.emoji.len() + ZWJ.len_utf8() + second.emoji.len());
        emoji.push_str(first.emoji);
        emoji.push(ZWJ);
        emoji.push_str(second.emoji);

        NonRgiMatch {
            emojis: vec![first, second],
            emoji,
        }
    }

    /// Links another emoji to the end of the sequence
    pub(crate) fn push(&mut self, next: EmojiMatch<'a>) {
        self.emoji.push(ZWJ);
        self.emoji.push_str(next.emoji);
        self.emojis.push(next);
    }

    /// The constituents joined by zero-width joiners
    #[inline]
    pub fn emoji(&self) -> &str {
        &self.emoji
    }

    /// The registered constituents, in order
    #[inline]
    pub fn emojis(&self) -> &[EmojiMatch<'a>] {
        &self.emojis
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.emojis[0].start
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.emojis[self.emojis.len() - 1].end
    }

    /// The newest version among the constituents
    pub fn version(&self) -> f32 {
        self.emojis.iter().map(|e| e.entry.version()).fold(0.0, f32::max)
    }

    /// Metadata passed to replacement callbacks, without any entry
    #[inline]
    pub fn data(&self) -> MatchData {
        MatchData {
            entry: None,
            match_start: self.start(),
            match_end: self.end(),
        }
    }
}

/// Metadata of a match, as passed to replacement callbacks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchData {
    /// `None` for non-RGI sequences
    pub entry: Option<&'static EmojiEntry>,
    pub match_start: usize,
    pub match_end: usize,
}

/// A piece of scanned text
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'a> {
    /// A single character that is not part of an emoji
    Char(&'a str),
    Emoji(EmojiMatch<'a>),
    NonRgi(NonRgiMatch<'a>),
}

impl<'a> Token<'a> {
    pub fn text(&self) -> &str {
        match self {
            Token::Char(c) => c,
            Token::Emoji(m) => m.emoji,
            Token::NonRgi(m) => m.emoji(),
        }
    }

    #[inline]
    pub fn is_emoji(&self) -> bool {
        !matches!(self, Token::Char(_))
    }

    #[inline]
    pub(crate) fn is_zwj(&self) -> bool {
        matches!(self, Token::Char(c) if c.starts_with(ZWJ))
    }

    /// Code-point span of an emoji token
    pub fn span(&self) -> Option<(usize, usize)> {
        match self {
            Token::Char(_) => None,
            Token::Emoji(m) => Some((m.start, m.end)),
            Token::NonRgi(m) => Some((m.start(), m.end())),
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

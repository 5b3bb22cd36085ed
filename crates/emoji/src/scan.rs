//! Splits text into literal characters and emoji matches.
//!
//! The scan is a single left-to-right walk over code points. Matches are held in a short
//! pending window instead of being emitted directly, since a following zero-width joiner
//! may reveal that a longer sequence spans it. When that happens the scanner marks the
//! joiner as ignored and rewinds to retry the walk from an earlier match, which either
//! finds the longer registered sequence or reproduces the same split. Every rewind ignores
//! one more position, so the walk always terminates.

use smallvec::SmallVec;

use crate::data::EmojiEntry;
use crate::token::{EmojiMatch, Token};
use crate::tree::{search_tree, SearchTree};
use crate::{is_variation_selector, ZWJ};

/// Scans `text` into tokens.
///
/// Joiners that end up linking two matches are only kept as [`Token::Char`] if `keep_zwj` is set,
/// all other characters except variation selectors are always kept.
pub fn scan(text: &str, keep_zwj: bool) -> Vec<Token<'_>> {
    let tree = search_tree();

    Scanner::new(&tree, text, keep_zwj).run()
}

/// What to do at the current position
enum Step {
    /// Position was consumed by an earlier rewind
    Ignored,
    /// A registered sequence ends at `end`
    Match { end: usize, entry: &'static EmojiEntry },
    /// A joiner directly after a pending match, rewind to `to`
    Joiner { to: usize },
    /// Anything else
    Literal,
}

struct Scanner<'t, 'a> {
    tree: &'t SearchTree,
    text: &'a str,
    keep_zwj: bool,

    chars: Vec<char>,
    /// Byte offset of each code point, plus the end of the text
    bounds: Vec<usize>,
    ignore: Vec<bool>,

    /// At most the two latest tokens, which may still be taken back by a rewind
    pending: SmallVec<[Token<'a>; 4]>,
    out: Vec<Token<'a>>,
}

impl<'t, 'a> Scanner<'t, 'a> {
    fn new(tree: &'t SearchTree, text: &'a str, keep_zwj: bool) -> Self {
        let mut chars = Vec::with_capacity(text.len());
        let mut bounds = Vec::with_capacity(text.len() + 1);

        for (idx, c) in text.char_indices() {
            chars.push(c);
            bounds.push(idx);
        }
        bounds.push(text.len());

        Scanner {
            tree,
            text,
            keep_zwj,
            ignore: vec![false; chars.len()],
            chars,
            bounds,
            pending: SmallVec::new(),
            out: Vec::with_capacity(text.len()),
        }
    }

    #[inline]
    fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.text[self.bounds[start]..self.bounds[end]]
    }

    fn push(&mut self, token: Token<'a>) {
        if self.pending.len() == 2 {
            self.out.push(self.pending.remove(0));
        }
        self.pending.push(token);
    }

    fn flush(&mut self) {
        self.out.extend(self.pending.drain(..));
    }

    /// Latest pending token, if it is a match ending exactly at `pos`
    fn last_match(&self, pos: usize) -> Option<EmojiMatch<'a>> {
        match self.pending.last() {
            Some(Token::Emoji(m)) if m.end == pos => Some(*m),
            _ => None,
        }
    }

    fn step(&mut self, pos: usize) -> Step {
        if self.ignore[pos] {
            return Step::Ignored;
        }

        if let Some((end, entry)) = self.tree.longest_match(&self.chars, pos, &self.ignore) {
            return Step::Match { end, entry };
        }

        if self.chars[pos] != ZWJ {
            return Step::Literal;
        }

        let Some(last) = self.last_match(pos) else {
            return Step::Literal;
        };

        self.ignore[pos] = true;
        self.pending.pop();

        if !last.entry.is_component() {
            // retry from the start of the previous emoji
            return Step::Joiner { to: last.start };
        }

        // joiner + component, the component stands alone
        if last.start > 0 && self.chars[last.start - 1] == ZWJ {
            return Step::Joiner { to: last.start };
        }

        // base + component, retry the walk from the base
        if let Some(base) = self.last_match(last.start) {
            self.pending.pop();
            return Step::Joiner { to: base.start };
        }

        Step::Joiner { to: last.start }
    }

    fn run(mut self) -> Vec<Token<'a>> {
        let mut pos = 0;

        while pos < self.chars.len() {
            match self.step(pos) {
                Step::Ignored => {
                    if self.keep_zwj && self.chars[pos] == ZWJ {
                        let zwj = self.slice(pos, pos + 1);
                        self.push(Token::Char(zwj));
                    }
                    pos += 1;
                }
                Step::Match { end, entry } => {
                    let emoji = self.slice(pos, end);
                    self.push(Token::Emoji(EmojiMatch {
                        emoji,
                        start: pos,
                        end,
                        entry,
                    }));
                    pos = end;
                }
                Step::Joiner { to } => {
                    tracing::trace!("Joiner at {pos}, rewinding to {to}");
                    pos = to;
                }
                Step::Literal => {
                    self.flush();

                    if !is_variation_selector(self.chars[pos]) {
                        let c = self.slice(pos, pos + 1);
                        self.out.push(Token::Char(c));
                    }
                    pos += 1;
                }
            }
        }

        self.flush();
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<String> {
        tokens.iter().map(|t| t.text().to_owned()).collect()
    }

    fn emoji(tokens: &[Token]) -> Vec<(usize, usize, &'static str)> {
        tokens
            .iter()
            .filter_map(|t| match t {
                Token::Emoji(m) => Some((m.start, m.end, m.entry.name(crate::Language::English).unwrap())),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_plain_text() {
        let tokens = scan("abc", true);
        assert_eq!(texts(&tokens), ["a", "b", "c"]);
        assert!(scan("", true).is_empty());
    }

    #[test]
    fn test_offsets_are_code_points() {
        let tokens = scan("h\u{e9}\u{1F44D}!", false);

        assert_eq!(emoji(&tokens), [(2, 3, ":thumbs_up:")]);
        assert_eq!(texts(&tokens), ["h", "\u{e9}", "\u{1F44D}", "!"]);
    }

    #[test]
    fn test_registered_zwj_sequence() {
        // family: man, woman, girl, boy
        let tokens = scan("\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}", false);

        assert_eq!(tokens.len(), 1);
        assert_eq!(emoji(&tokens), [(0, 7, ":family_man_woman_girl_boy:")]);
    }

    #[test]
    fn test_non_rgi_sequence() {
        let input = "\u{1F468}\u{200D}\u{1F469}\u{1F3FF}\u{200D}\u{1F467}\u{1F3FB}\u{200D}\u{1F466}\u{1F3FE}";

        let expected = [
            (0, 1, ":man:"),
            (2, 4, ":woman_dark_skin_tone:"),
            (5, 7, ":girl_light_skin_tone:"),
            (8, 10, ":boy_medium-dark_skin_tone:"),
        ];

        let dropped = scan(input, false);
        assert_eq!(emoji(&dropped), expected);
        assert_eq!(dropped.len(), 4);

        let kept = scan(input, true);
        assert_eq!(emoji(&kept), expected);
        assert_eq!(kept.len(), 7);
        assert_eq!(kept.iter().filter(|t| t.is_zwj()).count(), 3);
        assert_eq!(kept.iter().map(Token::text).collect::<String>(), input);
    }

    #[test]
    fn test_component_after_registered_sequence() {
        let tokens = scan("\u{1F468}\u{1F3FF}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{1F3FB}\u{200D}\u{1F466}", false);

        assert_eq!(
            emoji(&tokens),
            [
                (0, 2, ":man_dark_skin_tone:"),
                (3, 6, ":family_woman_girl:"),
                (6, 7, ":light_skin_tone:"),
                (8, 9, ":boy:"),
            ]
        );
    }

    #[test]
    fn test_standalone_component() {
        // right-facing fist has no skin tone variants
        let tokens = scan("\u{1F91C}\u{1F3FF}", false);
        assert_eq!(emoji(&tokens), [(0, 1, ":right-facing_fist:"), (1, 2, ":dark_skin_tone:")]);

        let tokens = scan("\u{1F3FF}\u{1F476}\u{200D}\u{1F6D1}", false);
        assert_eq!(
            emoji(&tokens),
            [(0, 1, ":dark_skin_tone:"), (1, 2, ":baby:"), (3, 4, ":stop_sign:")]
        );
    }

    #[test]
    fn test_variation_selectors_dropped() {
        // registered with U+FE0F, kept as part of the match
        let tokens = scan("\u{2764}\u{FE0F}", false);
        assert_eq!(texts(&tokens), ["\u{2764}\u{FE0F}"]);

        // not registered with U+FE0E, dropped
        let tokens = scan("\u{1F44D}\u{FE0E}x", false);
        assert_eq!(texts(&tokens), ["\u{1F44D}", "x"]);

        let tokens = scan("\u{FE0F}", true);
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_stray_joiners() {
        let tokens = scan("\u{200D}a\u{200D}", false);
        assert_eq!(texts(&tokens), ["\u{200D}", "a", "\u{200D}"]);

        // trailing joiner after an emoji is ignored, only kept on request
        let tokens = scan("\u{1F476}\u{200D}", false);
        assert_eq!(texts(&tokens), ["\u{1F476}"]);

        let tokens = scan("\u{1F476}\u{200D}", true);
        assert_eq!(texts(&tokens), ["\u{1F476}", "\u{200D}"]);
    }

    #[test]
    fn test_combining_mark_breaks_chain() {
        let tokens = scan("\u{1F476}\u{1F3FF}\u{0308}\u{200D}\u{1F476}\u{1F3FF}", false);

        assert_eq!(
            texts(&tokens),
            ["\u{1F476}\u{1F3FF}", "\u{0308}", "\u{200D}", "\u{1F476}\u{1F3FF}"]
        );
    }
}

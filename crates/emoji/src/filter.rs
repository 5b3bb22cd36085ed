use crate::scan::scan;
use crate::token::{EmojiMatch, NonRgiMatch, Token};

/// Scans `text` for emoji.
///
/// With `only_emoji`, all literal characters are left out. With `join_emoji`, registered
/// emoji linked only by zero-width joiners are combined into a single [`Token::NonRgi`].
///
/// ```
/// use emoji::Token;
///
/// let tokens = emoji::analyze("\u{1F476}\u{200D}\u{1F6D1}!", true, true);
/// assert!(matches!(&tokens[..], [Token::NonRgi(m)] if m.emojis().len() == 2));
/// ```
pub fn analyze(text: &str, only_emoji: bool, join_emoji: bool) -> Vec<Token<'_>> {
    filter_matches(scan(text, true), only_emoji, join_emoji)
}

/// Drops literals and combines joiner-linked matches, as requested
pub fn filter_matches(tokens: Vec<Token<'_>>, only_emoji: bool, join_emoji: bool) -> Vec<Token<'_>> {
    if !join_emoji {
        if only_emoji {
            return tokens.into_iter().filter(Token::is_emoji).collect();
        }
        return tokens;
    }

    let mut joiner = Joiner {
        only_emoji,
        out: Vec::with_capacity(tokens.len()),
        chain: None,
        held: None,
    };

    for token in tokens {
        joiner.push(token);
    }

    joiner.finish()
}

struct Joiner<'a> {
    only_emoji: bool,
    out: Vec<Token<'a>>,
    /// Latest emoji, which may still be linked to the next one
    chain: Option<Token<'a>>,
    /// Joiner directly after `chain`
    held: Option<Token<'a>>,
}

impl<'a> Joiner<'a> {
    fn push(&mut self, token: Token<'a>) {
        match token {
            Token::Emoji(next) if self.links(&next) => {
                self.held = None;
                self.chain = match self.chain.take() {
                    Some(Token::NonRgi(mut prev)) => {
                        prev.push(next);
                        Some(Token::NonRgi(prev))
                    }
                    Some(Token::Emoji(prev)) => Some(Token::NonRgi(NonRgiMatch::new(prev, next))),
                    _ => Some(Token::Emoji(next)),
                };
            }
            Token::Emoji(next) => {
                self.break_chain();
                self.chain = Some(Token::Emoji(next));
            }
            zwj if zwj.is_zwj() && self.chain.is_some() && self.held.is_none() => {
                self.held = Some(zwj);
            }
            other => {
                self.break_chain();

                if other.is_emoji() {
                    self.out.push(other);
                } else {
                    self.emit_literal(Some(other));
                }
            }
        }
    }

    /// A held joiner sits exactly between the chain and `next`
    fn links(&self, next: &EmojiMatch<'a>) -> bool {
        match (&self.chain, &self.held) {
            (Some(chain), Some(_)) => chain.span().is_some_and(|(_, end)| end + 1 == next.start),
            _ => false,
        }
    }

    fn emit_literal(&mut self, token: Option<Token<'a>>) {
        if !self.only_emoji {
            self.out.extend(token);
        }
    }

    fn break_chain(&mut self) {
        self.out.extend(self.chain.take());

        let held = self.held.take();
        self.emit_literal(held);
    }

    fn finish(mut self) -> Vec<Token<'a>> {
        self.break_chain();
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<String> {
        tokens.iter().map(|t| t.text().to_owned()).collect()
    }

    const FAMILY: &str = "\u{1F468}\u{200D}\u{1F469}\u{1F3FF}\u{200D}\u{1F467}\u{1F3FB}\u{200D}\u{1F466}\u{1F3FE}";

    #[test]
    fn test_join_chain() {
        let text = format!("a{FAMILY}b");
        let tokens = analyze(&text, false, true);
        assert_eq!(tokens.len(), 3);

        let Token::NonRgi(ref m) = tokens[1] else {
            panic!("expected a non-RGI match, got {:?}", tokens[1]);
        };

        assert_eq!(m.emoji(), FAMILY);
        assert_eq!(m.emojis().len(), 4);
        assert_eq!((m.start(), m.end()), (1, 11));
        assert_eq!(m.data().entry, None);
        assert_eq!(m.version(), 1.0);
    }

    #[test]
    fn test_no_join() {
        let tokens = analyze(FAMILY, true, false);
        assert_eq!(tokens.len(), 4);
        assert!(tokens.iter().all(Token::is_emoji));

        let tokens = analyze(FAMILY, false, false);
        assert_eq!(tokens.len(), 7);
        assert_eq!(tokens.iter().map(Token::text).collect::<String>(), FAMILY);
    }

    #[test]
    fn test_only_emoji() {
        let text = format!("x {FAMILY} \u{1F44D}");
        let tokens = analyze(&text, true, true);
        assert_eq!(texts(&tokens), [FAMILY, "\u{1F44D}"]);
    }

    #[test]
    fn test_broken_chain_keeps_joiners() {
        // dangling joiner after the last emoji
        let tokens = analyze("\u{1F476}\u{200D}x", false, true);
        assert_eq!(texts(&tokens), ["\u{1F476}", "\u{200D}", "x"]);

        let tokens = analyze("\u{1F476}\u{200D}x", true, true);
        assert_eq!(texts(&tokens), ["\u{1F476}"]);

        // doubled joiners never link
        let tokens = analyze("\u{1F476}\u{200D}\u{200D}\u{1F476}", false, true);
        assert_eq!(texts(&tokens), ["\u{1F476}", "\u{200D}", "\u{200D}", "\u{1F476}"]);
    }

    #[test]
    fn test_joiner_after_dropped_selector() {
        // the selector is not registered with the thumb, so the joiner is not adjacent to it
        let text = "\u{1F44D}\u{FE0F}\u{200D}\u{1F476}";

        let tokens = analyze(text, false, true);
        assert_eq!(texts(&tokens), ["\u{1F44D}", "\u{200D}", "\u{1F476}"]);
        assert!(tokens.iter().all(|t| !matches!(t, Token::NonRgi(_))));

        let tokens = analyze(text, true, true);
        assert_eq!(texts(&tokens), ["\u{1F44D}", "\u{1F476}"]);
    }
}

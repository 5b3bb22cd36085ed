//! Prefix tree over every known emoji sequence, one code point per edge.

use std::sync::Arc;

use arc_swap::ArcSwap;
use once_cell::sync::Lazy;
use smallvec::SmallVec;

use crate::data::{self, EmojiEntry};

type NodeId = u32;

#[derive(Debug, Default, Clone, PartialEq)]
struct Node {
    /// Sorted by code point
    children: SmallVec<[(char, NodeId); 2]>,
    terminal: Option<&'static EmojiEntry>,
}

/// Arena-allocated trie used for longest-match lookups
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTree {
    nodes: Vec<Node>,
}

impl SearchTree {
    const ROOT: NodeId = 0;

    pub fn build(entries: impl IntoIterator<Item = &'static EmojiEntry>) -> SearchTree {
        let mut tree = SearchTree {
            nodes: vec![Node::default()],
        };

        let mut count = 0;
        for entry in entries {
            tree.insert(entry);
            count += 1;
        }

        tracing::debug!(nodes = tree.nodes.len(), entries = count, "Built emoji search tree");

        tree
    }

    fn insert(&mut self, entry: &'static EmojiEntry) {
        let mut node = Self::ROOT;

        for c in entry.emoji().chars() {
            let children = &self.nodes[node as usize].children;

            node = match children.binary_search_by_key(&c, |&(k, _)| k) {
                Ok(idx) => children[idx].1,
                Err(idx) => {
                    let child = self.nodes.len() as NodeId;
                    self.nodes.push(Node::default());
                    self.nodes[node as usize].children.insert(idx, (c, child));
                    child
                }
            };
        }

        self.nodes[node as usize].terminal = Some(entry);
    }

    #[inline]
    fn child(&self, node: NodeId, c: char) -> Option<NodeId> {
        let children = &self.nodes[node as usize].children;

        match children.binary_search_by_key(&c, |&(k, _)| k) {
            Ok(idx) => Some(children[idx].1),
            Err(_) => None,
        }
    }

    /// Number of nodes, including the root
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes[Self::ROOT as usize].children.is_empty()
    }

    /// Looks up an exact sequence
    pub fn get(&self, seq: &str) -> Option<&'static EmojiEntry> {
        let mut node = Self::ROOT;
        for c in seq.chars() {
            node = self.child(node, c)?;
        }
        self.nodes[node as usize].terminal
    }

    /// Walks the tree from `chars[start]` for as long as the input follows an edge, stopping
    /// early at any position marked in `ignore`. Returns the end of the longest registered
    /// sequence passed on the way, with its entry.
    pub fn longest_match(
        &self,
        chars: &[char],
        start: usize,
        ignore: &[bool],
    ) -> Option<(usize, &'static EmojiEntry)> {
        let mut node = Self::ROOT;
        let mut longest = None;

        for (pos, &c) in chars.iter().enumerate().skip(start) {
            if pos > start && ignore[pos] {
                break;
            }

            match self.child(node, c) {
                Some(next) => node = next,
                None => break,
            }

            if let Some(entry) = self.nodes[node as usize].terminal {
                longest = Some((pos + 1, entry));
            }
        }

        longest
    }
}

static SEARCH_TREE: Lazy<ArcSwap<SearchTree>> = Lazy::new(|| ArcSwap::from_pointee(SearchTree::build(data::iter())));

/// The process-wide search tree over the emoji table, built on first use
#[inline]
pub fn search_tree() -> Arc<SearchTree> {
    SEARCH_TREE.load_full()
}

/// Replaces the process-wide search tree with a freshly built one
#[cfg(test)]
pub(crate) fn rebuild_search_tree() -> Arc<SearchTree> {
    let tree = Arc::new(SearchTree::build(data::iter()));
    SEARCH_TREE.store(tree.clone());
    tree
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_every_entry_reachable() {
        let tree = search_tree();

        for e in data::iter() {
            assert_eq!(tree.get(e.emoji()), Some(e));
        }

        // prefixes of sequences are not entries themselves
        assert_eq!(tree.get("\u{1F468}\u{200D}"), None);
    }

    #[test]
    fn test_longest_match() {
        let tree = search_tree();

        // family: man, woman, girl, boy
        let input = chars("\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}!");
        let ignore = vec![false; input.len()];

        let (end, entry) = tree.longest_match(&input, 0, &ignore).unwrap();
        assert_eq!(end, 7);
        assert_eq!(entry.emoji(), "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}");

        // the walk passes a non-terminal node, and backs off to the deepest terminal
        let input = chars("\u{1F468}\u{200D}\u{1F469}\u{1F3FF}");
        let ignore = vec![false; input.len()];
        assert_eq!(tree.longest_match(&input, 0, &ignore).map(|(end, _)| end), Some(1));

        // ignored positions stop the walk
        let input = chars("\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466}");
        let mut ignore = vec![false; input.len()];
        ignore[1] = true;
        assert_eq!(tree.longest_match(&input, 0, &ignore).map(|(end, _)| end), Some(1));

        let input = chars("#a");
        assert_eq!(tree.longest_match(&input, 0, &[false, false]), None);
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let before = search_tree();
        let after = rebuild_search_tree();

        assert_eq!(*before, *after);
        assert!(!after.is_empty());
        assert!(after.len() > data::iter().count());
    }

    #[test]
    fn test_concurrent_first_use() {
        let trees: Vec<Arc<SearchTree>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8).map(|_| scope.spawn(search_tree)).collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        // other tests may swap in a rebuilt tree, which is equal but not the same allocation
        for tree in &trees {
            assert_eq!(**tree, *trees[0]);
            assert!(!tree.is_empty());
        }
    }
}

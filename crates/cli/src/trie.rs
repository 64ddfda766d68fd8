// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Taboo Contributors

//! Vocabulary trie: the matching engine.
//!
//! One node per code point; shared prefixes share nodes, and a terminal
//! flag marks the end of a complete vocabulary entry. All scans work at
//! code-point granularity and are greedy: at each start position the
//! longest entry ending on a terminal node wins.
//!
//! The trie has no concurrency awareness; `filter::WordFilter` wraps it
//! behind a lock for shared use.

use std::collections::HashMap;

#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    terminal: bool,
}

/// Prefix tree over the vocabulary, keyed by Unicode code point.
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert vocabulary entries. Inserting an entry twice is a no-op
    /// beyond the first; entries sharing a prefix converge on the same
    /// nodes.
    pub fn add<I>(&mut self, words: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref();
            // The root is never terminal: the empty string is not an entry.
            if word.is_empty() {
                continue;
            }
            let mut node = &mut self.root;
            for ch in word.chars() {
                node = node.children.entry(ch).or_default();
            }
            node.terminal = true;
        }
    }

    /// Remove vocabulary entries. Removing clears only the entry's own
    /// terminal flag; childless nodes on the unwound path are pruned.
    /// Removing an absent entry is a no-op, and an entry that prefixes a
    /// longer one leaves the longer entry fully matchable.
    pub fn del<I>(&mut self, words: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for word in words {
            let chars: Vec<char> = word.as_ref().chars().collect();
            del_path(&mut self.root, &chars);
        }
    }

    /// Exact vocabulary membership (not a substring scan).
    pub fn contains_word(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let mut node = &self.root;
        for ch in word.chars() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.terminal
    }

    /// True when the vocabulary holds no entries.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Number of vocabulary entries.
    pub fn word_count(&self) -> usize {
        count_terminals(&self.root)
    }

    /// First vocabulary hit in `text`, scanning start positions left to
    /// right with a greedy longest match at each.
    pub fn find_in(&self, text: &str) -> Option<String> {
        let chars: Vec<char> = text.chars().collect();
        (0..chars.len()).find_map(|start| {
            self.match_len_at(&chars, start)
                .map(|len| chars[start..start + len].iter().collect())
        })
    }

    /// Every distinct vocabulary hit in `text`, first-occurrence order,
    /// non-overlapping scan (the scan resumes past the end of each hit).
    pub fn find_all(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut found: Vec<String> = Vec::new();
        let mut start = 0;
        while start < chars.len() {
            match self.match_len_at(&chars, start) {
                Some(len) => {
                    let word: String = chars[start..start + len].iter().collect();
                    if !found.contains(&word) {
                        found.push(word);
                    }
                    start += len;
                }
                None => start += 1,
            }
        }
        found
    }

    /// Mask every hit with `repl`, one replacement per code point, so the
    /// output length in code points equals the input length.
    pub fn replace(&self, text: &str, repl: char) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        let mut start = 0;
        while start < chars.len() {
            match self.match_len_at(&chars, start) {
                Some(len) => {
                    out.extend(std::iter::repeat_n(repl, len));
                    start += len;
                }
                None => {
                    out.push(chars[start]);
                    start += 1;
                }
            }
        }
        out
    }

    /// Remove every hit entirely; unmatched spans pass through unchanged.
    pub fn filter(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        let mut start = 0;
        while start < chars.len() {
            match self.match_len_at(&chars, start) {
                Some(len) => start += len,
                None => {
                    out.push(chars[start]);
                    start += 1;
                }
            }
        }
        out
    }

    /// As `find_in`, but `wildcard` appearing in the *text* matches any
    /// child edge during the walk. Qualifying branches are explored
    /// depth-first, bounded by the remaining input length, and the
    /// longest accepting span wins. The returned span is the text as
    /// typed, wildcard code points included.
    pub fn validate_with_wildcard(&self, text: &str, wildcard: char) -> Option<String> {
        let chars: Vec<char> = text.chars().collect();
        (0..chars.len()).find_map(|start| {
            wildcard_len(&self.root, &chars[start..], wildcard)
                .map(|len| chars[start..start + len].iter().collect())
        })
    }

    /// Length in code points of the longest entry matching at `start`,
    /// or `None` when no terminal node is reachable from there.
    fn match_len_at(&self, chars: &[char], start: usize) -> Option<usize> {
        let mut node = &self.root;
        let mut best = None;
        for (offset, ch) in chars[start..].iter().enumerate() {
            match node.children.get(ch) {
                Some(child) => {
                    if child.terminal {
                        best = Some(offset + 1);
                    }
                    node = child;
                }
                None => break,
            }
        }
        best
    }
}

/// Clear the terminal flag at the end of `chars`, pruning childless
/// non-terminal nodes on the way back up. Returns true when the caller
/// may drop its edge to `node`.
fn del_path(node: &mut TrieNode, chars: &[char]) -> bool {
    match chars.split_first() {
        None => {
            node.terminal = false;
            node.children.is_empty()
        }
        Some((ch, rest)) => {
            let Some(child) = node.children.get_mut(ch) else {
                // Absent entry: nothing to clear, nothing to prune.
                return false;
            };
            if del_path(child, rest) {
                node.children.remove(ch);
            }
            !node.terminal && node.children.is_empty()
        }
    }
}

fn count_terminals(node: &TrieNode) -> usize {
    node.children
        .values()
        .map(|child| usize::from(child.terminal) + count_terminals(child))
        .sum()
}

/// Longest span from the front of `chars` ending on a terminal node,
/// with `wildcard` taking any child edge.
fn wildcard_len(node: &TrieNode, chars: &[char], wildcard: char) -> Option<usize> {
    let (ch, rest) = chars.split_first()?;
    let mut best = None;
    if *ch == wildcard {
        for child in node.children.values() {
            best = longest(best, descend(child, rest, wildcard));
        }
    } else if let Some(child) = node.children.get(ch) {
        best = descend(child, rest, wildcard);
    }
    best
}

/// Longest accepting span through `child`, counting the edge just taken.
fn descend(child: &TrieNode, rest: &[char], wildcard: char) -> Option<usize> {
    let mut best = if child.terminal { Some(1) } else { None };
    if let Some(len) = wildcard_len(child, rest, wildcard) {
        best = longest(best, Some(len + 1));
    }
    best
}

fn longest(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.max(y)),
        (x, None) => x,
        (None, y) => y,
    }
}

#[cfg(test)]
#[path = "trie_tests.rs"]
mod tests;

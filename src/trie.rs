// Wordsquares – Search for word squares
// Copyright (C) 2026  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use std::num::NonZeroUsize;
use super::alphabet;

// The trie is stored as a flat list of nodes. Each node has a link to
// its first child and a link to its next sibling so that the children
// of a node form a linked list. The list of children is kept sorted by
// letter so that iterating the trie returns the words in alphabetical
// order.
//
// The first entry in the list is the root node. Its letter should be
// ignored.

struct Node {
    letter: u8,
    // Whether the letters in the chain of parents leading up to this
    // node are a word
    terminal: bool,
    // Index of the first child if there is one
    first_child: Option<NonZeroUsize>,
    // Index of the next sibling if there is one
    next_sibling: Option<NonZeroUsize>,
}

impl Node {
    fn new(letter: u8) -> Node {
        Node {
            letter,
            terminal: false,
            first_child: None,
            next_sibling: None,
        }
    }
}

pub struct Trie {
    nodes: Vec<Node>,
    n_words: usize,
}

struct Children<'a> {
    nodes: &'a [Node],
    next: Option<NonZeroUsize>,
}

impl<'a> Iterator for Children<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let child = self.next?.get();
        self.next = self.nodes[child].next_sibling;
        Some(child)
    }
}

#[derive(Clone, Copy)]
struct StackEntry {
    node: usize,
    word_length: usize,
}

impl Trie {
    pub fn new() -> Trie {
        Trie {
            nodes: vec![Node::new(b'*')],
            n_words: 0,
        }
    }

    /// Number of distinct words added to the trie.
    pub fn len(&self) -> usize {
        self.n_words
    }

    pub fn is_empty(&self) -> bool {
        self.n_words == 0
    }

    fn children(&self, parent: usize) -> Children<'_> {
        Children {
            nodes: &self.nodes,
            next: self.nodes[parent].first_child,
        }
    }

    fn find_child(&self, parent: usize, letter: u8) -> Option<usize> {
        self.children(parent)
            .take_while(|&child| self.nodes[child].letter <= letter)
            .find(|&child| self.nodes[child].letter == letter)
    }

    fn find_node(&self, prefix: &[u8]) -> Option<usize> {
        prefix.iter().try_fold(0, |node, &letter| {
            self.find_child(node, letter)
        })
    }

    /// Adds a word to the trie. Adding the same word again has no
    /// effect. The word must only contain lowercase ASCII letters.
    pub fn add_word(&mut self, word: &str) {
        assert!(
            alphabet::is_word(word),
            "“{}” contains letters outside of a-z",
            word,
        );

        let mut node = 0;

        for letter in word.bytes() {
            node = self.add_child(node, letter);
        }

        let node = &mut self.nodes[node];

        if !node.terminal {
            node.terminal = true;
            self.n_words += 1;
        }
    }

    fn add_child(&mut self, parent: usize, letter: u8) -> usize {
        let mut previous = None;
        let mut child = self.nodes[parent].first_child;

        // Find where the letter belongs in the sorted list of children
        while let Some(this_child) = child {
            let this_node = &self.nodes[this_child.get()];

            if this_node.letter == letter {
                return this_child.get();
            }

            if this_node.letter > letter {
                break;
            }

            previous = Some(this_child);
            child = this_node.next_sibling;
        }

        let new_node_pos = self.nodes.len();
        let mut new_node = Node::new(letter);

        new_node.next_sibling = child;
        self.nodes.push(new_node);

        let link = NonZeroUsize::new(new_node_pos);
        // The nodes list is never empty, so the new_node_pos
        // shouldn’t be zero
        assert!(link.is_some());

        match previous {
            Some(previous) => self.nodes[previous.get()].next_sibling = link,
            None => self.nodes[parent].first_child = link,
        }

        new_node_pos
    }

    /// Returns whether any word in the trie starts with `prefix`. The
    /// empty prefix is the start of everything, even in an empty trie.
    pub fn has_prefix<P: AsRef<[u8]>>(&self, prefix: P) -> bool {
        let prefix = prefix.as_ref();

        debug_assert!(alphabet::is_word(prefix));

        self.find_node(prefix).is_some()
    }

    /// Returns whether `word` was added to the trie as a whole word.
    pub fn contains<W: AsRef<[u8]>>(&self, word: W) -> bool {
        let word = word.as_ref();

        debug_assert!(alphabet::is_word(word));

        self.find_node(word)
            .map(|node| self.nodes[node].terminal)
            .unwrap_or(false)
    }

    /// Returns every word that starts with `prefix` in alphabetical
    /// order, including the prefix itself if it is a word.
    pub fn with_prefix<P: AsRef<[u8]>>(&self, prefix: P) -> Vec<String> {
        let mut iter = WordIterator::with_prefix(self, prefix);
        let mut words = Vec::new();

        while let Some(word) = iter.next() {
            words.push(word.to_string());
        }

        words
    }

    pub fn words(&self) -> Vec<String> {
        self.with_prefix("")
    }

    /// Returns every word that has one letter for each of the
    /// alphabets where the letter at each position is contained in the
    /// alphabet for that position. The alphabets may contain
    /// duplicates.
    pub fn matches<A: AsRef<[u8]>>(&self, alphabets: &[A]) -> Vec<String> {
        let mut words = Vec::new();

        if alphabets.is_empty() {
            if self.nodes[0].terminal {
                words.push(String::new());
            }

            return words;
        }

        let Some(first_child) = self.nodes[0].first_child
        else {
            return words;
        };

        let mut buf = String::with_capacity(alphabets.len());
        let mut stack = vec![StackEntry {
            node: first_child.get(),
            word_length: 0,
        }];

        while let Some(entry) = stack.pop() {
            let node = &self.nodes[entry.node];

            if let Some(sibling) = node.next_sibling {
                stack.push(StackEntry {
                    node: sibling.get(),
                    word_length: entry.word_length,
                });
            }

            if !alphabets[entry.word_length].as_ref().contains(&node.letter) {
                continue;
            }

            buf.truncate(entry.word_length);
            buf.push(node.letter as char);

            if buf.len() >= alphabets.len() {
                if node.terminal {
                    words.push(buf.clone());
                }
            } else if let Some(child) = node.first_child {
                stack.push(StackEntry {
                    node: child.get(),
                    word_length: buf.len(),
                });
            }
        }

        words
    }
}

impl Default for Trie {
    fn default() -> Trie {
        Trie::new()
    }
}

impl<'a> Extend<&'a str> for Trie {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, words: I) {
        for word in words {
            self.add_word(word);
        }
    }
}

impl<'a> FromIterator<&'a str> for Trie {
    fn from_iter<I: IntoIterator<Item = &'a str>>(words: I) -> Trie {
        let mut trie = Trie::new();
        trie.extend(words);
        trie
    }
}

/// Walks the words below a prefix in alphabetical order. The words
/// are built up in a single buffer that is reused for each one.
pub struct WordIterator<'a> {
    trie: &'a Trie,
    stack: Vec<StackEntry>,
    buf: String,
    // The prefix is a word in its own right and hasn’t been returned yet
    prefix_is_word: bool,
}

impl<'a> WordIterator<'a> {
    pub fn new(trie: &'a Trie) -> WordIterator<'a> {
        WordIterator::with_prefix(trie, "")
    }

    pub fn with_prefix<P: AsRef<[u8]>>(
        trie: &'a Trie,
        prefix: P,
    ) -> WordIterator<'a> {
        let prefix = prefix.as_ref();

        debug_assert!(alphabet::is_word(prefix));

        let mut stack = Vec::new();
        let mut prefix_is_word = false;

        if let Some(node) = trie.find_node(prefix) {
            prefix_is_word = trie.nodes[node].terminal;

            if let Some(child) = trie.nodes[node].first_child {
                stack.push(StackEntry {
                    node: child.get(),
                    word_length: prefix.len(),
                });
            }
        }

        WordIterator {
            trie,
            stack,
            buf: prefix.iter().map(|&letter| letter as char).collect(),
            prefix_is_word,
        }
    }

    pub fn next(&mut self) -> Option<&str> {
        if self.prefix_is_word {
            self.prefix_is_word = false;
            return Some(self.buf.as_str());
        }

        let trie = self.trie;

        while let Some(entry) = self.stack.pop() {
            let node = &trie.nodes[entry.node];

            if let Some(sibling) = node.next_sibling {
                self.stack.push(StackEntry {
                    node: sibling.get(),
                    word_length: entry.word_length,
                });
            }

            self.buf.truncate(entry.word_length);
            self.buf.push(node.letter as char);

            if let Some(child) = node.first_child {
                self.stack.push(StackEntry {
                    node: child.get(),
                    word_length: self.buf.len(),
                });
            }

            if node.terminal {
                return Some(self.buf.as_str());
            }
        }

        None
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sorted(mut words: Vec<String>) -> Vec<String> {
        words.sort();
        words
    }

    #[test]
    fn has_prefix() {
        let trie = ["this", "is", "a", "test"].into_iter().collect::<Trie>();

        assert!(trie.has_prefix("th"));
        assert!(trie.has_prefix("thi"));
        assert!(trie.has_prefix("this"));
        assert!(trie.has_prefix(""));
        assert!(!trie.has_prefix("ok"));
        assert!(!trie.has_prefix("thisy"));
        assert!(!trie.has_prefix("s"));
    }

    #[test]
    fn contains() {
        let trie = ["this", "is", "a", "test", "is"]
            .into_iter()
            .collect::<Trie>();

        assert!(!trie.contains("th"));
        assert!(!trie.contains("thi"));
        assert!(trie.contains("is"));
        assert!(trie.contains("a"));
        assert!(!trie.contains("ok"));
        assert!(!trie.contains(""));
        assert!(!trie.contains("tests"));

        assert_eq!(trie.len(), 4);
    }

    #[test]
    fn every_prefix_of_a_word() {
        let trie = ["wordsquare"].into_iter().collect::<Trie>();

        for i in 0..="wordsquare".len() {
            assert!(trie.has_prefix(&"wordsquare"[0..i]));
        }

        assert!(trie.contains("wordsquare"));
    }

    #[test]
    fn with_prefix() {
        let trie = ["this", "that", "other", "tank", "think"]
            .into_iter()
            .collect::<Trie>();

        assert_eq!(
            sorted(trie.with_prefix("th")),
            &["that", "think", "this"],
        );
        assert_eq!(trie.with_prefix("x"), &[""; 0]);
        assert_eq!(trie.with_prefix("thinker"), &[""; 0]);
        assert_eq!(trie.with_prefix("other"), &["other"]);
        assert_eq!(trie.with_prefix("").len(), 5);
    }

    #[test]
    fn with_prefix_includes_prefix_word() {
        let trie = ["app", "apple", "apply", "ape", "b"]
            .into_iter()
            .collect::<Trie>();

        assert_eq!(trie.with_prefix("app"), &["app", "apple", "apply"]);
        assert_eq!(trie.with_prefix(b"ap"), &["ape", "app", "apple", "apply"]);
    }

    #[test]
    fn alphabetical_order() {
        let trie = ["zebra", "apple", "mango", "applet", "banana", "a"]
            .into_iter()
            .collect::<Trie>();

        assert_eq!(
            trie.words(),
            &["a", "apple", "applet", "banana", "mango", "zebra"],
        );

        let mut iter = WordIterator::new(&trie);

        assert_eq!(iter.next(), Some("a"));
        assert_eq!(iter.next(), Some("apple"));
        assert_eq!(iter.next(), Some("applet"));
        assert_eq!(iter.next(), Some("banana"));
        assert_eq!(iter.next(), Some("mango"));
        assert_eq!(iter.next(), Some("zebra"));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn matches() {
        let trie = ["this", "that", "other", "tank", "think"]
            .into_iter()
            .collect::<Trie>();

        let alphabets: [&[u8]; 4] = [b"t", b"ha", b"an", b"tk"];

        assert_eq!(sorted(trie.matches(&alphabets)), &["tank", "that"]);

        // Duplicates don’t change the result
        let alphabets: [&[u8]; 4] = [b"tt", b"haah", b"an", b"tkt"];

        assert_eq!(sorted(trie.matches(&alphabets)), &["tank", "that"]);

        // Words that are longer or shorter than the list aren’t included
        let alphabets: [&[u8]; 3] = [b"t", b"ha", b"ain"];

        assert_eq!(trie.matches(&alphabets), &[""; 0]);

        let alphabets: [&[u8]; 4] = [b"t", b"h", b"i", b""];

        assert_eq!(trie.matches(&alphabets), &[""; 0]);
    }

    #[test]
    fn matches_every_letter() {
        let trie = ["ab", "ba", "bb", "abc"].into_iter().collect::<Trie>();
        let everything = (b'a'..=b'z').collect::<Vec<u8>>();

        assert_eq!(
            trie.matches(&[everything.clone(), everything]),
            &["ab", "ba", "bb"],
        );
    }

    #[test]
    fn empty_trie() {
        let trie = Trie::new();

        assert!(trie.is_empty());
        assert!(trie.has_prefix(""));
        assert!(!trie.has_prefix("a"));
        assert!(!trie.contains(""));
        assert_eq!(trie.with_prefix(""), &[""; 0]);
        assert_eq!(trie.matches(&[b"abc"]), &[""; 0]);
        assert_eq!(trie.matches::<&[u8]>(&[]), &[""; 0]);
    }

    #[test]
    fn idempotent_add() {
        let mut trie = Trie::new();

        trie.add_word("this");
        trie.add_word("that");

        let n_nodes = trie.nodes.len();

        trie.add_word("this");

        assert_eq!(trie.nodes.len(), n_nodes);
        assert_eq!(trie.len(), 2);
        assert_eq!(trie.words(), &["that", "this"]);
    }

    #[test]
    fn shared_prefixes() {
        let trie = ["this", "is", "a", "test"].into_iter().collect::<Trie>();

        // Root, “this”, “is”, “a” and the “est” of “test”
        assert_eq!(trie.nodes.len(), 11);
    }

    #[test]
    #[should_panic]
    fn add_uppercase_word() {
        let mut trie = Trie::new();
        trie.add_word("Apple");
    }
}

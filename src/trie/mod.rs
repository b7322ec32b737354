// see https://en.wikipedia.org/wiki/Radix_tree
// and https://github.com/michaelsproul/rust_radix_trie

mod iteration;


use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::mem;

use log::{debug, trace};

use crate::codec::{HangulCodec, KeyCodec};
use crate::common_prefix::*;

pub use iteration::Iter;

/// A set of strings stored in a compressed prefix tree, where each edge is labeled with a run of
/// units produced by the codec `C`.
///
/// Invariants between any two public operations:
/// - Every child is keyed by the first unit of its label, so siblings never share a first unit.
/// - Every node except the root has a non-empty label.
/// - Every non-root node that is not terminal has at least two children (i.e., there are no
///   non-branching chains and no dangling edges).
#[derive(Debug, Clone)]
pub struct Trie<C: KeyCodec = HangulCodec> {
    // The root has an empty label and is never terminal itself.
    root: TrieNode<C::Unit>,

    // The empty key ends at the root, so it is tracked separately.
    contains_empty_key: bool,

    /// Number of keys, i.e., terminal nodes plus the empty key.
    len: usize,

    codec: C,
}

#[derive(Debug, Clone)]
pub struct TrieNode<U> {
    label: Vec<U>,
    terminal: bool,
    children: HashMap<U, TrieNode<U>>,
}

impl Trie<HangulCodec> {
    pub fn new() -> Self {
        Self::with_codec(HangulCodec)
    }
}

impl<C: KeyCodec + Default> Default for Trie<C> {
    fn default() -> Self {
        Self::with_codec(C::default())
    }
}

impl<C: KeyCodec> Trie<C> {
    pub fn with_codec(codec: C) -> Self {
        Self {
            root: TrieNode::empty_root(),
            contains_empty_key: false,
            len: 0,
            codec,
        }
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Returns the number of keys in the trie. O(1).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.root = TrieNode::empty_root();
        self.contains_empty_key = false;
        self.len = 0;
    }

    /// The root node, whose label is always empty.
    pub fn root(&self) -> &TrieNode<C::Unit> {
        &self.root
    }

    /// Inserts `key`. Returns `false` (and leaves the trie unchanged) if it was already present.
    pub fn insert(&mut self, key: &str) -> bool {
        let units = self.codec.decompose(key);
        if units.is_empty() {
            return self.insert_empty_key();
        }

        let mut node = &mut self.root;
        let mut rest = &units[..];
        // Invariant: `rest` is non-empty at the start of each iteration.
        loop {
            let child = match node.children.entry(rest[0].clone()) {
                // No edge starts with the next unit, so the whole rest becomes a new leaf.
                Entry::Vacant(entry) => {
                    trace!("insert {key:?}: new leaf with {} units", rest.len());
                    entry.insert(TrieNode::leaf(rest));
                    break;
                }
                Entry::Occupied(entry) => entry.into_mut(),
            };

            let common_len = common_prefix_len(&child.label, rest);

            // The key diverges from (or ends) inside the edge, so split it at the divergence.
            if common_len < child.label.len() {
                trace!("insert {key:?}: split edge of {} units after {common_len}", child.label.len());
                child.split_at(common_len);
                match &rest[common_len..] {
                    [] => child.terminal = true,
                    suffix => {
                        child.children.insert(suffix[0].clone(), TrieNode::leaf(suffix));
                    }
                }
                break;
            }

            // The whole edge matched, so continue below it (or stop exactly at its end).
            rest = &rest[common_len..];
            if rest.is_empty() {
                if child.terminal {
                    debug!("insert {key:?}: already present");
                    return false;
                }
                trace!("insert {key:?}: mark existing branch node as terminal");
                child.terminal = true;
                break;
            }
            node = child;
        }

        self.len += 1;
        true
    }

    fn insert_empty_key(&mut self) -> bool {
        if self.contains_empty_key {
            debug!("insert \"\": already present");
            return false;
        }
        self.contains_empty_key = true;
        self.len += 1;
        true
    }

    /// Returns `true` if exactly `key` was inserted (and not removed since).
    pub fn has(&self, key: &str) -> bool {
        let units = self.codec.decompose(key);
        if units.is_empty() {
            return self.contains_empty_key;
        }
        self.root.find_exact(&units).map_or(false, |node| node.terminal)
    }

    /// Removes `key`. Returns `false` (and leaves the trie unchanged) if it was not present.
    pub fn remove(&mut self, key: &str) -> bool {
        let units = self.codec.decompose(key);
        if units.is_empty() {
            let removed = mem::replace(&mut self.contains_empty_key, false);
            if removed {
                self.len -= 1;
            }
            return removed;
        }

        // Walk down to the parent of the node where `key` ends. The child is first only looked at
        // immutably, so that `parent` stays usable once the target node is found.
        let mut parent = &mut self.root;
        let mut parent_is_root = true;
        let mut rest = &units[..];
        loop {
            let first = &rest[0];
            let Some(child) = parent.children.get(first) else {
                debug!("remove {key:?}: not present");
                return false;
            };
            let common_len = common_prefix_len(&child.label, rest);
            if common_len < child.label.len() {
                debug!("remove {key:?}: not present, diverges inside an edge");
                return false;
            }
            if common_len == rest.len() {
                break;
            }
            rest = &rest[common_len..];
            let Some(child) = parent.children.get_mut(first) else {
                return false;
            };
            parent = child;
            parent_is_root = false;
        }

        let Some(node) = parent.children.get_mut(&rest[0]) else {
            return false;
        };
        if !node.terminal {
            debug!("remove {key:?}: not present, ends at a branch node");
            return false;
        }
        node.terminal = false;

        // Clearing the terminal flag leaves at most one node with a single child behind: either the
        // node itself, or (if the node was a leaf and is now detached) its parent.
        match node.children.len() {
            0 => {
                trace!("remove {key:?}: detach leaf");
                parent.children.remove(&rest[0]);
                if !parent_is_root && !parent.terminal && parent.children.len() == 1 {
                    trace!("remove {key:?}: merge parent with its remaining child");
                    parent.merge_with_only_child();
                }
            }
            1 => {
                trace!("remove {key:?}: merge former branch node with its only child");
                node.merge_with_only_child();
            }
            _ => {}
        }

        self.len -= 1;
        true
    }

    /// Returns all keys, in unspecified order.
    pub fn get_all(&self) -> Vec<String> {
        let mut result = Vec::with_capacity(self.len);
        if self.contains_empty_key {
            result.push(self.codec.compose(&[]));
        }
        self.root.for_each_key(&mut Vec::new(), &mut |units| result.push(self.codec.compose(units)));
        result
    }

    /// Returns all keys that start with `prefix` (at unit granularity, so with the Hangul codec,
    /// "납" completes to "나비"), in unspecified order.
    pub fn auto_complete(&self, prefix: &str) -> Vec<String> {
        let units = self.codec.decompose(prefix);
        if units.is_empty() {
            return self.get_all();
        }

        let Some((matched_len, subtrie)) = self.root.find_prefix(&units) else {
            return Vec::new();
        };
        let mut result = Vec::new();
        let mut key = units[..matched_len].to_vec();
        subtrie.for_each_key(&mut key, &mut |units| result.push(self.codec.compose(units)));
        result
    }

    /// Returns a lazy depth-first iterator over all keys, in unspecified order.
    pub fn iter(&self) -> Iter<'_, C> {
        Iter::new(self)
    }

    /// Renders the node structure, one node per line, indented by depth, with children sorted by
    /// label. Terminal nodes are marked with `*`.
    pub fn to_tree_string(&self) -> String
    where
        C::Unit: fmt::Display,
    {
        fn write_node<U: fmt::Display>(out: &mut String, node: &TrieNode<U>, level: usize) {
            use std::fmt::Write;
            let label: String = node.label.iter().map(ToString::to_string).collect();
            // Writing to a `String` cannot fail.
            let _ = write!(out, "{}\"{label}\"", "  ".repeat(level));
            if node.terminal {
                out.push('*');
            }
            out.push('\n');

            let mut children: Vec<(String, &TrieNode<U>)> = node
                .children
                .values()
                .map(|child| (child.label.iter().map(ToString::to_string).collect(), child))
                .collect();
            children.sort_by(|(a, _), (b, _)| a.cmp(b));
            for (_, child) in children {
                write_node(out, child, level + 1);
            }
        }

        let mut out = String::new();
        write_node(&mut out, &self.root, 0);
        if self.contains_empty_key {
            // The root is never terminal itself, mark the empty key on the root line instead.
            out.insert(2, '*');
        }
        out.pop(); // Remove trailing newline.
        out
    }
}

impl<'trie, C: KeyCodec> IntoIterator for &'trie Trie<C> {
    type Item = String;
    type IntoIter = Iter<'trie, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<C: KeyCodec, S: AsRef<str>> Extend<S> for Trie<C> {
    fn extend<I: IntoIterator<Item = S>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key.as_ref());
        }
    }
}

impl<C: KeyCodec + Default, S: AsRef<str>> FromIterator<S> for Trie<C> {
    fn from_iter<I: IntoIterator<Item = S>>(keys: I) -> Self {
        let mut trie = Self::default();
        trie.extend(keys);
        trie
    }
}

impl<U> TrieNode<U> {

    // Constructors:

    fn empty_root() -> Self {
        Self {
            label: Vec::new(),
            terminal: false,
            children: HashMap::new(),
        }
    }

    fn leaf(label: &[U]) -> Self
    where
        U: Clone,
    {
        Self {
            label: label.to_vec(),
            terminal: true,
            children: HashMap::new(),
        }
    }


    // Accessors:

    pub fn label(&self) -> &[U] {
        &self.label
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn children(&self) -> impl Iterator<Item = &TrieNode<U>> {
        self.children.values()
    }
}

impl<U: Clone + Eq + std::hash::Hash> TrieNode<U> {

    // Structural changes:

    /// Keeps the first `at` units of the label in this node, and moves the rest of the label,
    /// together with the terminal flag and the children, into a new (and only) child.
    /// `at` must be in `1..self.label.len()`, so the key of this node in its parent stays valid.
    fn split_at(&mut self, at: usize) {
        debug_assert!(0 < at && at < self.label.len());
        let suffix = TrieNode {
            label: self.label.split_off(at),
            terminal: mem::replace(&mut self.terminal, false),
            children: mem::take(&mut self.children),
        };
        self.children.insert(suffix.label[0].clone(), suffix);
    }

    /// Collapses this node with its only child, by appending the child's label and adopting its
    /// terminal flag and children. Inverse of `split_at`.
    fn merge_with_only_child(&mut self) {
        debug_assert!(!self.terminal && self.children.len() == 1);
        let children = mem::take(&mut self.children);
        if let Some(child) = children.into_values().next() {
            self.label.extend(child.label);
            self.terminal = child.terminal;
            self.children = child.children;
        }
    }


    // Lookups:

    /// Returns the node at which exactly `key` ends (terminal or not), if any.
    fn find_exact(&self, key: &[U]) -> Option<&TrieNode<U>> {
        let mut node = self;
        let mut rest = key;
        while let Some(first) = rest.first() {
            let child = node.children.get(first)?;
            let common_len = common_prefix_len(&child.label, rest);
            // The key ends or diverges inside this edge.
            if common_len < child.label.len() {
                return None;
            }
            rest = &rest[common_len..];
            node = child;
        }
        Some(node)
    }

    /// Returns the subtrie that contains all keys starting with `prefix`, together with the number
    /// of prefix units consumed by the ancestors of that subtrie. Concatenating these units with the
    /// labels inside the subtrie gives the full keys.
    fn find_prefix(&self, prefix: &[U]) -> Option<(usize, &TrieNode<U>)> {
        let mut node = self;
        let mut matched_len = 0;
        while let Some(first) = prefix.get(matched_len) {
            let child = node.children.get(first)?;
            match longest_common_prefix(&prefix[matched_len..], &child.label) {
                // The prefix ends within (or exactly at the end of) this edge, so every key in the
                // child's subtrie completes it.
                LcpResult { left_rest: [], .. } => return Some((matched_len, child)),
                // The whole edge is part of the prefix, so search further in the children.
                LcpResult { common_prefix, right_rest: [], .. } => {
                    matched_len += common_prefix.len();
                    node = child;
                }
                // Both have a non-empty rest, so no key in the trie starts with `prefix`.
                LcpResult { .. } => return None,
            }
        }
        Some((matched_len, node))
    }
}

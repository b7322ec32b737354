use crate::codec::KeyCodec;

use super::{Trie, TrieNode};

impl<U: Clone> TrieNode<U> {
    /// Internal pre-order depth-first traversal, calling `f` with the full key (i.e., `key` followed
    /// by the labels on the path from this node) of every terminal node in this subtrie.
    /// `key` is restored to its original contents afterwards.
    pub(crate) fn for_each_key<F>(&self, key: &mut Vec<U>, f: &mut F)
    where
        F: FnMut(&[U]),
    {
        key.extend_from_slice(&self.label);
        if self.terminal {
            f(key);
        }
        for child in self.children.values() {
            child.for_each_key(key, f);
        }
        key.truncate(key.len() - self.label.len());
    }
}

/// External pre-order depth-first iterator over the keys of a trie.
pub struct Iter<'trie, C: KeyCodec> {
    codec: &'trie C,

    /// A worklist of nodes still to process.
    /// `None` is used as a marker to indicate to pop the last element from the `key_parts_stack`.
    node_stack: Vec<Option<&'trie TrieNode<C::Unit>>>,

    /// The labels of the current key, as encountered along the spine of the tree.
    key_parts_stack: Vec<&'trie [C::Unit]>,

    /// The empty key is not stored in any node, so it is yielded first, if present.
    pending_empty_key: bool,
}

impl<'trie, C: KeyCodec> Iter<'trie, C> {
    pub(super) fn new(trie: &'trie Trie<C>) -> Self {
        Self {
            codec: &trie.codec,
            node_stack: vec![Some(trie.root())],
            key_parts_stack: Vec::new(),
            pending_empty_key: trie.contains_empty_key,
        }
    }
}

impl<'trie, C: KeyCodec> Iterator for Iter<'trie, C> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if std::mem::take(&mut self.pending_empty_key) {
            return Some(self.codec.compose(&[]));
        }
        while let Some(cur_node) = self.node_stack.pop() {
            match cur_node {
                Some(node) => {
                    self.key_parts_stack.push(&node.label);
                    // Pop from the key parts stack again after having processed this subtrie.
                    self.node_stack.push(None);
                    // Process the children next, i.e., depth-first traversal.
                    self.node_stack.extend(node.children.values().map(Some));
                    if node.terminal {
                        let key = self.key_parts_stack.concat();
                        return Some(self.codec.compose(&key));
                    }
                }
                None => {
                    self.key_parts_stack.pop();
                }
            }
        }
        None
    }
}

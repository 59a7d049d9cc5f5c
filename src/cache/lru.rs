//! LRU Tracker Module
//!
//! Maintains the recency order used to pick eviction candidates: a total
//! order over resident keys from least- to most-recently-touched.
//!
//! The order is a doubly-linked list threaded through an arena of nodes
//! addressed by stable slot indices, with a key-to-slot map on the side.
//! Links are indices rather than pointers, so reordering is O(1) without
//! any aliasing hazards, and vacated slots are recycled through a free
//! list.

use std::collections::HashMap;

// == List Node ==
#[derive(Debug)]
struct Node {
    key: String,
    /// Slot of the next more recently used key, `None` at the head.
    newer: Option<usize>,
    /// Slot of the next less recently used key, `None` at the tail.
    older: Option<usize>,
}

// == LRU Tracker ==
/// Tracks access order for LRU eviction.
///
/// Head = most recently used, tail = least recently used. Every `touch`
/// moves the key to the head, so the tail is always the unique eviction
/// candidate.
#[derive(Debug, Default)]
pub struct LruTracker {
    /// Node arena; `None` marks a vacated slot awaiting reuse.
    nodes: Vec<Option<Node>>,
    /// Vacated slot indices available for reuse.
    free: Vec<usize>,
    /// Key to occupied slot index.
    index: HashMap<String, usize>,
    /// Most recently used slot.
    head: Option<usize>,
    /// Least recently used slot.
    tail: Option<usize>,
}

impl LruTracker {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self::default()
    }

    // == Touch ==
    /// Marks a key as most recently used.
    ///
    /// An already-tracked key is relinked at the head; a new key is
    /// allocated a slot and linked at the head.
    pub fn touch(&mut self, key: &str) {
        if let Some(&slot) = self.index.get(key) {
            if self.head == Some(slot) {
                return;
            }
            self.unlink(slot);
            self.link_front(slot);
        } else {
            let slot = self.alloc(key.to_string());
            self.index.insert(key.to_string(), slot);
            self.link_front(slot);
        }
    }

    // == Remove ==
    /// Removes a key from the tracker. Unknown keys are ignored.
    pub fn remove(&mut self, key: &str) {
        if let Some(slot) = self.index.remove(key) {
            self.unlink(slot);
            self.release(slot);
        }
    }

    // == Evict Oldest ==
    /// Removes and returns the least recently used key.
    ///
    /// Returns `None` if the tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<String> {
        let slot = self.tail?;
        self.unlink(slot);
        let key = self.release(slot);
        self.index.remove(&key);
        Some(key)
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    pub fn peek_oldest(&self) -> Option<&str> {
        self.tail
            .and_then(|slot| self.nodes[slot].as_ref())
            .map(|node| node.key.as_str())
    }

    // == Clear ==
    /// Drops all tracked keys and recycled slots.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.index.clear();
        self.head = None;
        self.tail = None;
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    // == Arena Helpers ==
    /// Places `key` in a fresh or recycled slot, unlinked.
    fn alloc(&mut self, key: String) -> usize {
        let node = Node {
            key,
            newer: None,
            older: None,
        };
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = Some(node);
                slot
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        }
    }

    /// Vacates `slot` and returns the key it held.
    fn release(&mut self, slot: usize) -> String {
        let node = self.nodes[slot]
            .take()
            .expect("released lru slot must be occupied");
        self.free.push(slot);
        node.key
    }

    /// Detaches `slot` from the recency list, leaving its links cleared.
    fn unlink(&mut self, slot: usize) {
        let (newer, older) = {
            let node = self.nodes[slot]
                .as_ref()
                .expect("unlinked lru slot must be occupied");
            (node.newer, node.older)
        };

        match newer {
            Some(n) => {
                if let Some(node) = self.nodes[n].as_mut() {
                    node.older = older;
                }
            }
            None => self.head = older,
        }
        match older {
            Some(o) => {
                if let Some(node) = self.nodes[o].as_mut() {
                    node.newer = newer;
                }
            }
            None => self.tail = newer,
        }

        if let Some(node) = self.nodes[slot].as_mut() {
            node.newer = None;
            node.older = None;
        }
    }

    /// Attaches a detached `slot` at the head (most recent position).
    fn link_front(&mut self, slot: usize) {
        let old_head = self.head;
        if let Some(node) = self.nodes[slot].as_mut() {
            node.newer = None;
            node.older = old_head;
        }
        if let Some(h) = old_head {
            if let Some(node) = self.nodes[h].as_mut() {
                node.newer = Some(slot);
            }
        }
        self.head = Some(slot);
        if self.tail.is_none() {
            self.tail = Some(slot);
        }
    }
}

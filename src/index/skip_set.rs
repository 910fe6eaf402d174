//! Probabilistically balanced ordered set.
//!
//! Each element sits in a tower whose height is drawn by fair coin flips
//! (geometric, capped at [`MAX_HEIGHT`]). Searches start at the tallest
//! level in use, advance while the next key is smaller than the target,
//! then drop a level. Insert, lookup and removal are expected O(log n)
//! with no rebalancing.
//!
//! Nodes live in an arena addressed by index; removed slots are recycled.
//!
//! ```
//! use memory_duel::index::SkipSet;
//!
//! let mut set = SkipSet::new(42);
//! assert!(set.insert(5));
//! assert!(set.insert(1));
//! assert!(!set.insert(5)); // already present
//!
//! assert!(set.contains(&1));
//! assert!(set.remove(&1));
//! assert!(!set.remove(&1)); // already gone
//!
//! assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![5]);
//! ```

use smallvec::SmallVec;

use crate::core::GameRng;

/// Tallest tower a node can get.
pub const MAX_HEIGHT: usize = 16;

type NodeId = usize;

/// Where a search currently stands: the header or a real node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cursor {
    Head,
    Node(NodeId),
}

#[derive(Clone, Debug)]
struct Node<T> {
    key: T,
    /// One successor per level of this node's tower.
    forward: SmallVec<[Option<NodeId>; 4]>,
}

/// Ordered set backed by a skip list.
#[derive(Clone)]
pub struct SkipSet<T> {
    nodes: Vec<Node<T>>,
    /// Recycled arena slots.
    free: Vec<NodeId>,
    /// Header successors, one per possible level.
    head: [Option<NodeId>; MAX_HEIGHT],
    /// Number of levels currently in use.
    height: usize,
    len: usize,
    rng: GameRng,
}

impl<T: Ord> SkipSet<T> {
    /// Create an empty set whose tower heights come from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// Create an empty set drawing tower heights from `rng`.
    #[must_use]
    pub fn with_rng(rng: GameRng) -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: [None; MAX_HEIGHT],
            height: 0,
            len: 0,
            rng,
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the set holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels currently in use.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Add `key`. Returns false if it was already present.
    pub fn insert(&mut self, key: T) -> bool {
        let update = self.predecessors(&key);
        if let Some(next) = self.next(update[0], 0) {
            if self.nodes[next].key == key {
                return false;
            }
        }

        // Levels above the old height already have the header as predecessor.
        let height = self.random_height();
        self.height = self.height.max(height);

        let forward = (0..height)
            .map(|level| self.next(update[level], level))
            .collect();
        let id = self.alloc(Node { key, forward });

        for (level, &cursor) in update.iter().enumerate().take(height) {
            self.set_next(cursor, level, Some(id));
        }

        self.len += 1;
        true
    }

    /// Membership test.
    #[must_use]
    pub fn contains(&self, key: &T) -> bool {
        let mut cursor = Cursor::Head;
        for level in (0..self.height).rev() {
            cursor = self.advance(cursor, level, key);
        }
        self.next(cursor, 0).is_some_and(|id| self.nodes[id].key == *key)
    }

    /// Remove `key`. Returns false if it was not present.
    pub fn remove(&mut self, key: &T) -> bool {
        let update = self.predecessors(key);
        let target = match self.next(update[0], 0) {
            Some(id) if self.nodes[id].key == *key => id,
            _ => return false,
        };

        for level in 0..self.nodes[target].forward.len() {
            let after = self.nodes[target].forward[level];
            self.set_next(update[level], level, after);
        }

        while self.height > 0 && self.head[self.height - 1].is_none() {
            self.height -= 1;
        }

        self.nodes[target].forward.clear();
        self.free.push(target);
        self.len -= 1;
        true
    }

    /// Iterate in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            set: self,
            next: self.head[0],
        }
    }

    // === Internals ===

    fn next(&self, cursor: Cursor, level: usize) -> Option<NodeId> {
        match cursor {
            Cursor::Head => self.head[level],
            Cursor::Node(id) => self.nodes[id].forward[level],
        }
    }

    fn set_next(&mut self, cursor: Cursor, level: usize, to: Option<NodeId>) {
        match cursor {
            Cursor::Head => self.head[level] = to,
            Cursor::Node(id) => self.nodes[id].forward[level] = to,
        }
    }

    /// Walk right on `level` while the next key is smaller than `key`.
    fn advance(&self, mut cursor: Cursor, level: usize, key: &T) -> Cursor {
        while let Some(next) = self.next(cursor, level) {
            if self.nodes[next].key < *key {
                cursor = Cursor::Node(next);
            } else {
                break;
            }
        }
        cursor
    }

    /// Rightmost node with key < `key` on every level.
    fn predecessors(&self, key: &T) -> [Cursor; MAX_HEIGHT] {
        let mut update = [Cursor::Head; MAX_HEIGHT];
        let mut cursor = Cursor::Head;
        for level in (0..self.height).rev() {
            cursor = self.advance(cursor, level, key);
            update[level] = cursor;
        }
        update
    }

    fn random_height(&mut self) -> usize {
        let mut height = 1;
        while height < MAX_HEIGHT && self.rng.flip() {
            height += 1;
        }
        log::trace!("skip set tower height {}", height);
        height
    }

    fn alloc(&mut self, node: Node<T>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id] = node;
                id
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }
}

impl<T: Ord> Extend<T> for SkipSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SkipSet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut entries = f.debug_set();
        let mut next = self.head[0];
        while let Some(id) = next {
            entries.entry(&self.nodes[id].key);
            next = self.nodes[id].forward[0];
        }
        entries.finish()
    }
}

/// Ascending iterator over a [`SkipSet`].
pub struct Iter<'a, T> {
    set: &'a SkipSet<T>,
    next: Option<NodeId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = &self.set.nodes[id];
        self.next = node.forward[0];
        Some(&node.key)
    }
}

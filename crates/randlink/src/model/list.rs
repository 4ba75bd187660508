//! The arena-backed doubly-linked list with random references.

use rustc_hash::FxHashMap;

use crate::error::ListError;
use crate::model::node::{Node, NodeId};

/// A doubly-linked list whose nodes carry an extra unordered "random"
/// reference to any node of the same list (including themselves), or none.
///
/// Nodes live in an arena owned by the list and are addressed through
/// [`NodeId`] handles, so node identity is positional and never depends on
/// payload contents. The chain (`next`/`prev`) is a simple path; `random`
/// links may point anywhere, including forward in chain order, and may
/// form cycles.
#[derive(Debug, Default)]
pub struct RandomList {
    nodes: Vec<Node>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

impl RandomList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Number of nodes in the list.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the list has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First node of the chain, or `None` for an empty list.
    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    /// Last node of the chain, or `None` for an empty list.
    pub fn tail(&self) -> Option<NodeId> {
        self.tail
    }

    /// Appends a node at the back of the chain.
    pub fn push_back(&mut self, data: Option<String>) -> NodeId {
        let id = self.alloc(data);
        match self.tail {
            Some(tail) => {
                self.nodes[tail.0].next = Some(id);
                self.nodes[id.0].prev = Some(tail);
            }
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        id
    }

    /// Prepends a node at the front of the chain.
    pub fn push_front(&mut self, data: Option<String>) -> NodeId {
        let id = self.alloc(data);
        match self.head {
            Some(head) => {
                self.nodes[head.0].prev = Some(id);
                self.nodes[id.0].next = Some(head);
            }
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        id
    }

    /// Sets or clears the random reference of `node`.
    pub fn set_random(&mut self, node: NodeId, target: Option<NodeId>) -> Result<(), ListError> {
        self.check(node)?;
        if let Some(target) = target {
            self.check(target)?;
        }
        self.nodes[node.0].random = target;
        Ok(())
    }

    /// Payload of `node`, if it exists and carries one.
    pub fn data(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node.0).and_then(|n| n.data.as_deref())
    }

    /// Chain successor of `node`.
    pub fn next(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|n| n.next)
    }

    /// Chain predecessor of `node`.
    pub fn prev(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|n| n.prev)
    }

    /// Random reference of `node`.
    pub fn random(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|n| n.random)
    }

    /// Iterates node handles in chain order, head to tail.
    pub fn iter(&self) -> ChainIter<'_> {
        ChainIter {
            list: self,
            cur: self.head,
        }
    }

    /// Assigns each node a dense 0-based position in traversal order.
    ///
    /// This is the identity map the encoder and deep-copy use to express
    /// `random` links without pointer identity. Identity is the arena
    /// handle, never the payload, so lists with duplicate payloads index
    /// correctly. The map is scoped to a single call and discarded
    /// afterwards; it is never persisted.
    pub fn positions(&self) -> FxHashMap<NodeId, u64> {
        let mut positions =
            FxHashMap::with_capacity_and_hasher(self.nodes.len(), Default::default());
        for (pos, id) in self.iter().enumerate() {
            positions.insert(id, pos as u64);
        }
        positions
    }

    /// Clones the list into a fresh arena without sharing any node
    /// identity with the original.
    ///
    /// Single forward traversal: payloads are cloned in chain order, so
    /// `prev`/`next` always resolve against the previously created clone.
    /// A `random` target that has not been cloned yet (a forward
    /// reference in traversal order) is deferred to a fix-up list and
    /// resolved once the pass completes — the same two-phase scheme the
    /// decoder uses, keyed by original handle instead of record id.
    pub fn deep_copy(&self) -> RandomList {
        let mut copy = RandomList::with_capacity(self.nodes.len());
        let mut clones: FxHashMap<NodeId, NodeId> =
            FxHashMap::with_capacity_and_hasher(self.nodes.len(), Default::default());
        // (clone handle, original random target)
        let mut pending: Vec<(NodeId, NodeId)> = Vec::new();

        for orig in self.iter() {
            let clone = copy.push_back(self.nodes[orig.0].data.clone());
            if let Some(target) = self.nodes[orig.0].random {
                match clones.get(&target) {
                    Some(&mapped) => copy.link_random(clone, mapped),
                    None => pending.push((clone, target)),
                }
            }
            clones.insert(orig, clone);
        }

        // Every node is on the chain, so the mapping is complete by now.
        for (clone, target) in pending {
            copy.link_random(clone, clones[&target]);
        }

        copy
    }

    /// Sets a random link between handles known to be in range.
    pub(crate) fn link_random(&mut self, node: NodeId, target: NodeId) {
        self.nodes[node.0].random = Some(target);
    }

    fn alloc(&mut self, data: Option<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(data));
        id
    }

    fn check(&self, node: NodeId) -> Result<(), ListError> {
        if node.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(ListError::InvalidNodeId { id: node.0 })
        }
    }

    /// Overwrites a chain link directly, bypassing the push operations.
    #[cfg(test)]
    pub(crate) fn corrupt_next(&mut self, node: NodeId, next: Option<NodeId>) {
        self.nodes[node.0].next = next;
    }

    /// Overwrites a back link directly, bypassing the push operations.
    #[cfg(test)]
    pub(crate) fn corrupt_prev(&mut self, node: NodeId, prev: Option<NodeId>) {
        self.nodes[node.0].prev = prev;
    }
}

/// Structural equality: same payload sequence in chain order and the same
/// positional `random` targets. Arena indices do not participate, so a
/// list and its compacted deep copy compare equal.
impl PartialEq for RandomList {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let self_pos = self.positions();
        let other_pos = other.positions();
        let mut other_iter = other.iter();
        for a in self.iter() {
            let Some(b) = other_iter.next() else {
                return false;
            };
            if self.nodes[a.0].data != other.nodes[b.0].data {
                return false;
            }
            let a_random = self.nodes[a.0].random.map(|t| self_pos[&t]);
            let b_random = other.nodes[b.0].random.map(|t| other_pos[&t]);
            if a_random != b_random {
                return false;
            }
        }
        other_iter.next().is_none()
    }
}

impl Eq for RandomList {}

/// Iterator over node handles in chain order.
#[derive(Debug)]
pub struct ChainIter<'a> {
    list: &'a RandomList,
    cur: Option<NodeId>,
}

impl Iterator for ChainIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.cur?;
        self.cur = self.list.nodes[id.0].next;
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_push_back_chain_order() {
        let mut list = RandomList::new();
        let a = list.push_back(payload("a"));
        let b = list.push_back(payload("b"));
        let c = list.push_back(payload("c"));

        assert_eq!(list.head(), Some(a));
        assert_eq!(list.tail(), Some(c));
        assert_eq!(list.next(a), Some(b));
        assert_eq!(list.prev(b), Some(a));
        assert_eq!(list.next(c), None);
        assert_eq!(list.prev(a), None);

        let order: Vec<_> = list.iter().map(|id| list.data(id).unwrap().to_string()).collect();
        assert_eq!(order, ["a", "b", "c"]);
    }

    #[test]
    fn test_push_front_diverges_from_arena_order() {
        let mut list = RandomList::new();
        let b = list.push_back(payload("b"));
        let a = list.push_front(payload("a"));

        // Arena allocated `b` first, but `a` leads the chain.
        assert!(a.as_raw() > b.as_raw());
        assert_eq!(list.head(), Some(a));

        let positions = list.positions();
        assert_eq!(positions[&a], 0);
        assert_eq!(positions[&b], 1);
    }

    #[test]
    fn test_positions_ignore_duplicate_payloads() {
        let mut list = RandomList::new();
        let first = list.push_back(payload("qwerty"));
        let second = list.push_back(payload("qwerty"));

        let positions = list.positions();
        assert_eq!(positions[&first], 0);
        assert_eq!(positions[&second], 1);
    }

    #[test]
    fn test_set_random_rejects_foreign_handle() {
        let mut list = RandomList::new();
        let a = list.push_back(payload("a"));

        let bogus = NodeId(7);
        assert_eq!(
            list.set_random(a, Some(bogus)),
            Err(ListError::InvalidNodeId { id: 7 })
        );
        assert_eq!(
            list.set_random(bogus, None),
            Err(ListError::InvalidNodeId { id: 7 })
        );
    }

    #[test]
    fn test_set_random_clears() {
        let mut list = RandomList::new();
        let a = list.push_back(payload("a"));
        let b = list.push_back(payload("b"));

        list.set_random(a, Some(b)).unwrap();
        assert_eq!(list.random(a), Some(b));
        list.set_random(a, None).unwrap();
        assert_eq!(list.random(a), None);
    }

    #[test]
    fn test_deep_copy_structural_equality() {
        let mut list = RandomList::new();
        let a = list.push_back(payload("a"));
        let b = list.push_back(None);
        let c = list.push_back(payload("a"));
        list.set_random(a, Some(c)).unwrap(); // forward reference
        list.set_random(b, Some(b)).unwrap(); // self reference
        list.set_random(c, Some(a)).unwrap(); // backward, closes a cycle

        let copy = list.deep_copy();
        assert_eq!(copy, list);
    }

    #[test]
    fn test_deep_copy_shares_no_identity() {
        let mut list = RandomList::new();
        let a = list.push_back(payload("a"));
        let b = list.push_back(payload("b"));
        list.set_random(a, Some(b)).unwrap();

        let copy = list.deep_copy();

        // Mutating the original leaves the copy untouched.
        list.set_random(a, None).unwrap();
        list.push_back(payload("c"));

        assert_eq!(copy.len(), 2);
        let head = copy.head().unwrap();
        assert_eq!(copy.random(head), copy.next(head));
    }

    #[test]
    fn test_deep_copy_empty() {
        let list = RandomList::new();
        let copy = list.deep_copy();
        assert!(copy.is_empty());
        assert_eq!(copy.head(), None);
    }

    #[test]
    fn test_deep_copy_compacts_push_front_lists() {
        let mut list = RandomList::new();
        let b = list.push_back(payload("b"));
        let a = list.push_front(payload("a"));
        list.set_random(b, Some(a)).unwrap();

        let copy = list.deep_copy();
        assert_eq!(copy, list);
        // The copy is compacted in traversal order.
        assert_eq!(copy.head().map(|id| id.as_raw()), Some(0));
        assert_eq!(copy.tail().map(|id| id.as_raw()), Some(1));
    }

    #[test]
    fn test_structural_eq_detects_divergence() {
        let mut left = RandomList::new();
        let la = left.push_back(payload("a"));
        let lb = left.push_back(payload("b"));
        left.set_random(la, Some(lb)).unwrap();

        let mut right = RandomList::new();
        let ra = right.push_back(payload("a"));
        right.push_back(payload("b"));
        right.set_random(ra, Some(ra)).unwrap();

        // Same payloads, different random shape.
        assert_ne!(left, right);

        let mut third = RandomList::new();
        let ta = third.push_back(payload("a"));
        let tb = third.push_back(payload("x"));
        third.set_random(ta, Some(tb)).unwrap();

        // Same random shape, different payloads.
        assert_ne!(left, third);
    }
}

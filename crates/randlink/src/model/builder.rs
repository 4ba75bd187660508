//! Fluent construction of random-linked lists.
//!
//! Payloads are appended in chain order and random links are recorded
//! positionally, so a link may point at a node that has not been appended
//! yet at the time of the call. Everything is resolved at build time.

use crate::error::ListError;
use crate::model::list::RandomList;

/// Builder for constructing a [`RandomList`] positionally.
///
/// # Example
///
/// ```rust
/// use randlink::ListBuilder;
///
/// let list = ListBuilder::new()
///     .node("qwerty0")
///     .node_null()
///     .node("qwerty2")
///     .random(0, 2) // first node's random points at the third
///     .random(2, 2) // self-reference
///     .build()
///     .unwrap();
///
/// assert_eq!(list.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ListBuilder {
    payloads: Vec<Option<String>>,
    links: Vec<(usize, usize)>,
}

impl ListBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node with the given payload.
    pub fn node(mut self, data: impl Into<String>) -> Self {
        self.payloads.push(Some(data.into()));
        self
    }

    /// Appends a node with no payload.
    pub fn node_null(mut self) -> Self {
        self.payloads.push(None);
        self
    }

    /// Records a random link from position `from` to position `to`.
    pub fn random(mut self, from: usize, to: usize) -> Self {
        self.links.push((from, to));
        self
    }

    /// Builds the list, resolving the recorded links.
    ///
    /// Fails with [`ListError::InvalidNodeId`] if a link names a position
    /// that was never appended.
    pub fn build(self) -> Result<RandomList, ListError> {
        let mut list = RandomList::with_capacity(self.payloads.len());
        let ids: Vec<_> = self
            .payloads
            .into_iter()
            .map(|data| list.push_back(data))
            .collect();
        for (from, to) in self.links {
            let &from_id = ids.get(from).ok_or(ListError::InvalidNodeId { id: from })?;
            let &to_id = ids.get(to).ok_or(ListError::InvalidNodeId { id: to })?;
            list.set_random(from_id, Some(to_id))?;
        }
        Ok(list)
    }
}

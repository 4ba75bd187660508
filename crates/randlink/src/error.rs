//! Error types for list construction, encoding/decoding, and validation.

use thiserror::Error;

/// Error from list operations that take node handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// The handle does not name a node of this list.
    #[error("node id {id} does not belong to this list")]
    InvalidNodeId { id: usize },
}

/// Error during serialization.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The sink rejected a write. Raised for closed or otherwise
    /// unwritable sinks; the list itself cannot fail to encode.
    #[error("sink is not writable: {0}")]
    Sink(#[from] std::io::Error),
}

/// Error during deserialization.
///
/// Two families, matching the conditions callers must distinguish: a
/// source that cannot be read at all ([`Source`](DecodeError::Source)),
/// and input whose content is malformed (everything else). Underlying
/// I/O and parse failures are chained as error sources, not discarded.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The source stream failed to read. Raised before any record
    /// handling begins.
    #[error("source is not readable: {0}")]
    Source(#[source] std::io::Error),

    /// A candidate record object failed to parse.
    #[error("malformed record object: {0}")]
    MalformedRecord(#[source] serde_json::Error),

    /// A byte that cannot start any JSON token.
    #[error("unexpected character {found:?} at byte {pos}")]
    UnexpectedCharacter { found: char, pos: usize },

    /// Input ended inside a token or an open container.
    #[error("unexpected end of input while reading {context}")]
    UnexpectedEof { context: &'static str },

    /// A closing bracket with no matching open container.
    #[error("closing {found:?} at byte {pos} does not match any open container")]
    UnbalancedDelimiter { found: char, pos: usize },

    /// Two values concatenated without a separator between them.
    #[error("value at byte {pos} is not separated from the previous one")]
    MissingSeparator { pos: usize },

    /// Content after the top-level value has completed.
    #[error("trailing content at byte {pos} after the top-level value")]
    TrailingContent { pos: usize },

    /// Containers nested deeper than [`limits::MAX_NESTING_DEPTH`](crate::limits::MAX_NESTING_DEPTH).
    #[error("nesting depth exceeds maximum {max}")]
    NestingTooDeep { max: usize },

    /// A record without the required `Id` field. `index` is the record's
    /// position in order of appearance.
    #[error("record {index} is missing required field `Id`")]
    MissingId { index: usize },

    /// A pending fix-up named a source record id outside the decoded list.
    #[error("record id {id} out of bounds (record count: {count})")]
    IdOutOfBounds { id: i64, count: usize },

    /// A `RandomId` named a record outside the decoded list.
    #[error("random id {id} out of bounds (record count: {count})")]
    RandomIdOutOfBounds { id: i64, count: usize },
}

/// Error from structural validation of an in-memory list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Head/tail bookkeeping disagrees with the chain.
    #[error("head/tail bookkeeping is inconsistent")]
    BadEndpoints,

    /// `a.next == b` without `b.prev == a`.
    #[error("node {node} next/previous links are not inverses")]
    InconsistentLinks { node: usize },

    /// The chain is not a simple path covering every node exactly once.
    #[error("chain is not a simple path over all {expected} nodes (visited {visited})")]
    IncompleteChain { expected: usize, visited: usize },
}

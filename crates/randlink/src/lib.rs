//! randlink: reversible JSON codec and deep-copy engine for doubly-linked
//! lists with random references.
//!
//! A [`RandomList`] is a doubly-linked list whose nodes carry an extra
//! unordered "random" reference to any node of the same list — itself
//! included — or none. This crate serializes such lists to a byte stream,
//! reconstructs them into structurally identical lists, and deep-copies
//! them in memory without sharing any node identity with the original.
//!
//! # Quick Start
//!
//! ```rust
//! use randlink::{ListBuilder, deserialize, serialize};
//!
//! // Two nodes; the first one's random reference points at the second.
//! let list = ListBuilder::new()
//!     .node("qwerty")
//!     .node_null()
//!     .random(0, 1)
//!     .build()
//!     .unwrap();
//!
//! let mut bytes = Vec::new();
//! serialize(&list, &mut bytes).unwrap();
//!
//! let decoded = deserialize(&mut bytes.as_slice()).unwrap();
//! assert_eq!(decoded, list);
//!
//! // The deep copy is structurally equal but shares no node identity.
//! assert_eq!(list.deep_copy(), list);
//! ```
//!
//! # Modules
//!
//! - [`model`]: the list arena, node handles, and positional builder
//! - [`codec`]: wire encoding/decoding and the permissive record scanner
//! - [`validate`]: structural invariant checking
//! - [`error`]: error types
//! - [`limits`]: security limits for decoding
//!
//! # Wire Format
//!
//! A list encodes as a JSON array with one flat object per node in chain
//! order: `[{"Id":0,"RandomId":null,"Data":"qwerty"}]`. `Id` is the
//! node's 0-based position; `next`/`previous` are implied by record
//! adjacency and never written. `RandomId`, when set, names the target
//! record's `Id` — possibly one that appears later in the stream, which
//! the decoder resolves in a fix-up pass once all records are in.
//!
//! # Security
//!
//! The decoder is designed to safely handle untrusted input: reads are
//! bounds-checked, container nesting is capped, and malformed input is
//! rejected with descriptive errors that chain the underlying failure.
//! There is no partial success — a call produces the full list or an
//! error.

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
pub mod validate;

// Re-export commonly used items at crate root
pub use codec::{deserialize, serialize};
pub use error::{DecodeError, EncodeError, ListError, ValidationError};
pub use model::{ChainIter, ListBuilder, NodeId, RandomList};
pub use validate::validate_list;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

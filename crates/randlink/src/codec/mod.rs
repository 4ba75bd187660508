//! JSON encoding/decoding for random-linked lists.

pub mod list;
pub mod scan;

pub use list::{deserialize, serialize};
pub use scan::Scanner;

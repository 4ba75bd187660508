//! Security limits for decoding untrusted input.

/// Maximum nesting depth of arrays the record scanner will descend into.
///
/// The scanner tolerates structure around record objects, so hostile
/// input could otherwise nest `[` arbitrarily deep and grow the scanner's
/// container stack without bound. Record objects themselves are parsed by
/// serde_json, which enforces its own recursion limit.
pub const MAX_NESTING_DEPTH: usize = 128;

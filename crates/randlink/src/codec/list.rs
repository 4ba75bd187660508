//! Wire format for random-linked lists.
//!
//! A list encodes as a JSON array of flat record objects, one per node in
//! chain order: `[{"Id":0,"RandomId":null,"Data":"qwerty"}]`. `Id` is the
//! node's position in traversal order; `next`/`previous` are not written,
//! record adjacency carries them. `RandomId` names the target record's
//! `Id` and may lie ahead of the record it appears in, so the decoder
//! resolves backward references immediately and defers forward references
//! to a fix-up pass after all records are in.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::codec::scan::Scanner;
use crate::error::{DecodeError, EncodeError};
use crate::model::{NodeId, RandomList};

/// One node on the wire. Fields are emitted in declaration order, which
/// is the fixture order (`Id`, `RandomId`, `Data`), with explicit nulls.
#[derive(Debug, Serialize)]
struct Record<'a> {
    #[serde(rename = "Id")]
    id: i64,
    #[serde(rename = "RandomId")]
    random_id: Option<i64>,
    #[serde(rename = "Data")]
    data: Option<&'a str>,
}

/// Decoded record shape, before `Id` presence is enforced. Unknown keys
/// are ignored; absent keys read as `None`.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Id")]
    id: Option<i64>,
    #[serde(rename = "RandomId")]
    random_id: Option<i64>,
    #[serde(rename = "Data")]
    data: Option<String>,
}

// =============================================================================
// ENCODING
// =============================================================================

/// Serializes `list` to `sink` as a JSON array of records.
///
/// An empty list writes `[]`. The sink is flushed but never closed; the
/// caller keeps ownership of it. Write failures surface as
/// [`EncodeError::Sink`].
pub fn serialize<W: Write>(list: &RandomList, sink: &mut W) -> Result<(), EncodeError> {
    let positions = list.positions();

    sink.write_all(b"[")?;
    for (pos, node) in list.iter().enumerate() {
        if pos > 0 {
            sink.write_all(b",")?;
        }
        let record = Record {
            id: pos as i64,
            random_id: list.random(node).map(|target| positions[&target] as i64),
            data: list.data(node),
        };
        serde_json::to_writer(&mut *sink, &record).map_err(|e| EncodeError::Sink(e.into()))?;
    }
    sink.write_all(b"]")?;
    sink.flush()?;
    Ok(())
}

// =============================================================================
// DECODING
// =============================================================================

/// Deserializes a list from `source`.
///
/// The source is read to exhaustion up front: a stream that cannot be
/// read at all fails with [`DecodeError::Source`] before any record
/// handling. Input containing zero record objects (including `[]` and
/// empty input) yields the empty list.
pub fn deserialize<R: Read>(source: &mut R) -> Result<RandomList, DecodeError> {
    let mut input = Vec::new();
    source
        .read_to_end(&mut input)
        .map_err(DecodeError::Source)?;
    decode_records(&input)
}

/// Single forward pass over the records in order of appearance.
///
/// Chain links resolve against the node created one step earlier. A
/// `RandomId` of at most the current position resolves immediately (the
/// boundary is `<=`: a self-reference counts as backward, because the
/// node at the current position already exists). A strictly greater
/// `RandomId` targets a node not yet created, so the pair
/// `(declared id, random id)` goes onto a fix-up list resolved against
/// the complete node vector once the pass ends.
fn decode_records(input: &[u8]) -> Result<RandomList, DecodeError> {
    let mut list = RandomList::new();
    let mut nodes: Vec<NodeId> = Vec::new();
    // (declared source id, forward target id)
    let mut pending: Vec<(i64, i64)> = Vec::new();

    let mut scanner = Scanner::new(input);
    while let Some(object) = scanner.next_object()? {
        let record: RawRecord =
            serde_json::from_slice(object).map_err(DecodeError::MalformedRecord)?;

        let index = nodes.len();
        let Some(id) = record.id else {
            return Err(DecodeError::MissingId { index });
        };
        let node = list.push_back(record.data);
        nodes.push(node);

        if let Some(random_id) = record.random_id {
            if random_id > index as i64 {
                pending.push((id, random_id));
            } else {
                let target = lookup(&nodes, random_id).ok_or(DecodeError::RandomIdOutOfBounds {
                    id: random_id,
                    count: nodes.len(),
                })?;
                list.link_random(node, target);
            }
        }
    }

    for (source_id, random_id) in pending {
        let node = lookup(&nodes, source_id).ok_or(DecodeError::IdOutOfBounds {
            id: source_id,
            count: nodes.len(),
        })?;
        let target = lookup(&nodes, random_id).ok_or(DecodeError::RandomIdOutOfBounds {
            id: random_id,
            count: nodes.len(),
        })?;
        list.link_random(node, target);
    }

    Ok(list)
}

fn lookup(nodes: &[NodeId], id: i64) -> Option<NodeId> {
    usize::try_from(id).ok().and_then(|i| nodes.get(i)).copied()
}

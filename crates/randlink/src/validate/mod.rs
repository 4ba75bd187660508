//! Structural validation for in-memory lists.
//!
//! Checks the chain invariants the codec relies on: head/tail
//! bookkeeping, next/previous inversion, and completeness (every node on
//! the simple path exactly once). `random` links need no checking here —
//! handles are range-checked at the point they are set, and any target
//! inside the arena is legal, cycles included.

use crate::error::ValidationError;
use crate::model::RandomList;

/// Validates that `list`'s chain is a consistent simple path.
pub fn validate_list(list: &RandomList) -> Result<(), ValidationError> {
    match (list.head(), list.tail()) {
        (None, None) => {
            return if list.is_empty() {
                Ok(())
            } else {
                Err(ValidationError::IncompleteChain {
                    expected: list.len(),
                    visited: 0,
                })
            };
        }
        (Some(head), Some(tail)) => {
            if list.prev(head).is_some() || list.next(tail).is_some() {
                return Err(ValidationError::BadEndpoints);
            }
        }
        _ => return Err(ValidationError::BadEndpoints),
    }

    let mut visited = 0usize;
    let mut cur = list.head();
    while let Some(node) = cur {
        visited += 1;
        if visited > list.len() {
            // More steps than nodes means the chain loops.
            return Err(ValidationError::IncompleteChain {
                expected: list.len(),
                visited,
            });
        }
        match list.next(node) {
            Some(next) => {
                if list.prev(next) != Some(node) {
                    return Err(ValidationError::InconsistentLinks {
                        node: node.as_raw(),
                    });
                }
            }
            None => {
                if Some(node) != list.tail() {
                    return Err(ValidationError::BadEndpoints);
                }
            }
        }
        cur = list.next(node);
    }

    if visited != list.len() {
        return Err(ValidationError::IncompleteChain {
            expected: list.len(),
            visited,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ListBuilder;

    #[test]
    fn test_valid_lists_pass() {
        assert_eq!(validate_list(&RandomList::new()), Ok(()));

        let list = ListBuilder::new()
            .node("a")
            .node_null()
            .node("c")
            .random(0, 2)
            .random(1, 1)
            .build()
            .unwrap();
        assert_eq!(validate_list(&list), Ok(()));

        let mut fronted = RandomList::new();
        fronted.push_back(Some("b".into()));
        fronted.push_front(Some("a".into()));
        assert_eq!(validate_list(&fronted), Ok(()));
    }

    #[test]
    fn test_broken_back_link_detected() {
        let mut list = RandomList::new();
        let a = list.push_back(Some("a".into()));
        let b = list.push_back(Some("b".into()));
        list.push_back(Some("c".into()));

        list.corrupt_prev(b, None);
        assert_eq!(
            validate_list(&list),
            Err(ValidationError::InconsistentLinks { node: a.as_raw() })
        );
    }

    #[test]
    fn test_chain_cycle_detected() {
        let mut list = RandomList::new();
        let a = list.push_back(Some("a".into()));
        let b = list.push_back(Some("b".into()));

        list.corrupt_next(b, Some(a));
        list.corrupt_prev(a, Some(b));
        // Head now has a predecessor, which the endpoint check catches.
        assert_eq!(validate_list(&list), Err(ValidationError::BadEndpoints));
    }

    #[test]
    fn test_truncated_chain_detected() {
        let mut list = RandomList::new();
        list.push_back(Some("a".into()));
        let b = list.push_back(Some("b".into()));
        list.push_back(Some("c".into()));

        // Drop the tail off the chain; b claims to end the list.
        list.corrupt_next(b, None);
        assert_eq!(validate_list(&list), Err(ValidationError::BadEndpoints));
    }
}

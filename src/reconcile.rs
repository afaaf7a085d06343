//! Toggle-style membership edits and positional reordering for ordered id lists.
//!
//! Albums, playlists and music author lists are all stored as ordered lists of
//! identifiers. Clients never send the full new list; they send the ids whose
//! membership should flip, and optionally a permutation over positions. The two
//! functions here turn those requests into the list that gets persisted.
//!
//! Both functions are pure: they read their inputs, never mutate them, and run
//! in time linear in the input size (plus the removal scan for toggled ids).

use std::{collections::HashSet, hash::Hash};

use thiserror::Error;

/// Errors produced while reconciling or reordering a list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconcileError {
    /// The request tried to toggle an identifier the caller marked as protected.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// The inputs make the operation meaningless.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Returns `items` without repeats, keeping the first occurrence of each.
pub fn dedup_preserving_order<T>(items: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// Flips the membership of every id in `incoming` against `stored`.
///
/// `incoming` is deduplicated first. Each id that is already present loses
/// its first occurrence; each id that is absent is appended at the end. When
/// `protect` is given, any attempt to toggle that id fails the whole request
/// with [`ReconcileError::InvalidOperation`] and nothing is returned.
///
/// # Example
///
/// ```
/// use soundshelf::reconcile::reconcile_membership;
///
/// let stored = vec!["a", "b", "c"];
/// let updated = reconcile_membership(&stored, &["b", "d"], None).unwrap();
/// assert_eq!(updated, vec!["a", "c", "d"]);
/// ```
pub fn reconcile_membership<T>(
    stored: &[T],
    incoming: &[T],
    protect: Option<&T>,
) -> Result<Vec<T>, ReconcileError>
where
    T: Eq + Hash + Clone,
{
    let mut working = stored.to_vec();

    for id in dedup_preserving_order(incoming) {
        if protect.is_some_and(|p| *p == id) {
            return Err(ReconcileError::InvalidOperation(
                "cannot remove the protected identifier".to_string(),
            ));
        }

        match working.iter().position(|current| *current == id) {
            Some(index) => {
                working.remove(index);
            }
            None => working.push(id),
        }
    }

    Ok(working)
}

/// Rearranges `current` according to a client supplied list of positions.
///
/// Repeated positions keep their first occurrence and positions outside
/// `0..current.len()` are dropped. Positions the client did not mention are
/// appended in ascending order, so the result always holds every element of
/// `current` exactly once.
///
/// Fails with [`ReconcileError::InvalidArgument`] only when `current` is
/// empty and `order` is not.
pub fn apply_order<T>(current: &[T], order: &[usize]) -> Result<Vec<T>, ReconcileError>
where
    T: Clone,
{
    if current.is_empty() {
        if order.is_empty() {
            return Ok(Vec::new());
        }
        return Err(ReconcileError::InvalidArgument(
            "cannot reorder an empty list".to_string(),
        ));
    }

    let mut placed = vec![false; current.len()];
    let mut positions = Vec::with_capacity(current.len());

    for &index in order {
        if index < current.len() && !placed[index] {
            placed[index] = true;
            positions.push(index);
        }
    }

    positions.extend((0..current.len()).filter(|&index| !placed[index]));

    Ok(positions
        .into_iter()
        .map(|index| current[index].clone())
        .collect())
}

//! Pure edit operations over ordered card/block sequences.
//!
//! Every operation takes the current sequence by reference and returns a new
//! one; caller-owned state is never mutated, so the rendering layer can treat
//! each configuration as an immutable snapshot. Operations on a missing id
//! and boundary moves are silent no-ops, not errors.

use serde::{Deserialize, Serialize};

use crate::id;

/// Anything that lives in an editable sequence: has a stable id, and can be
/// given a new one when duplicated.
pub trait Entity {
    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
}

/// A shallow patch applicable to an entity of type `T`.
pub trait Patch<T> {
    fn apply(&self, target: &mut T);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// Append an entity at the end of the sequence.
pub fn append<T: Clone>(items: &[T], item: T) -> Vec<T> {
    let mut next = items.to_vec();
    next.push(item);
    next
}

/// Shallow-merge `patch` into the entity matching `id`.
pub fn update_by_id<T, P>(items: &[T], id: &str, patch: &P) -> Vec<T>
where
    T: Entity + Clone,
    P: Patch<T>,
{
    items
        .iter()
        .map(|item| {
            if item.id() == id {
                let mut updated = item.clone();
                patch.apply(&mut updated);
                updated
            } else {
                item.clone()
            }
        })
        .collect()
}

/// Remove the entity matching `id`.
pub fn delete_by_id<T: Entity + Clone>(items: &[T], id: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.id() != id)
        .cloned()
        .collect()
}

/// Swap the entity matching `id` with its immediate neighbour in the given
/// direction. Already at the boundary: unchanged.
pub fn move_adjacent<T: Entity + Clone>(items: &[T], id: &str, direction: Direction) -> Vec<T> {
    let mut next = items.to_vec();
    let Some(index) = next.iter().position(|item| item.id() == id) else {
        return next;
    };
    match direction {
        Direction::Up if index > 0 => next.swap(index, index - 1),
        Direction::Down if index + 1 < next.len() => next.swap(index, index + 1),
        _ => {}
    }
    next
}

/// Clone the entity matching `id` under a fresh id, inserted immediately
/// after the original.
pub fn duplicate_after<T: Entity + Clone>(items: &[T], id: &str) -> Vec<T> {
    let mut next = items.to_vec();
    if let Some(index) = next.iter().position(|item| item.id() == id) {
        let mut copy = next[index].clone();
        copy.set_id(id::generate());
        next.insert(index + 1, copy);
    }
    next
}

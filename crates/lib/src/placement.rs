//! Placement of new and re-hinted entries.
//!
//! Placement works on the full positional record sequence, tombstones
//! included, so that a removed entry keeps holding its group's place.
//!
//! Two rules apply:
//!
//! - **Inside a group** the entry goes right after the last member whose
//!   remembered hint is `<=` its own (equal hints keep insertion order), or
//!   right before the first member if every member has a larger hint.
//! - **A group seen for the first time** has no members to compare against.
//!   Its first entry goes on one of the boundaries between existing group
//!   blocks, drawn uniformly from a [`RandomSource`]. The chosen position is
//!   then just part of the stored sequence, so it is never drawn again.
//!
//! A block is a run of consecutive records of one group. Groups start out as
//! a single run each, but [`OrderManager::move_item`] may drag an entry into
//! another group's block, splitting it. Each run then counts as a block of its
//! own, so a new group can land between any two runs and never inside one.
//!
//! [`OrderManager::move_item`]: crate::OrderManager::move_item

use crate::random::RandomSource;
use crate::state::Record;

/// Where an entry was placed, and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Placed among existing members of its group.
    InGroup { index: usize },
    /// First entry of a new group, on block boundary `choice` of `boundaries`.
    NewBlock {
        index: usize,
        choice: usize,
        boundaries: usize,
    },
}

impl Placement {
    /// The position in the record sequence to insert at.
    pub fn index(&self) -> usize {
        match *self {
            Placement::InGroup { index } | Placement::NewBlock { index, .. } => index,
        }
    }
}

/// Finds the insertion index for `hint` among the members of `group_id`.
///
/// Returns `None` if the group has no records at all.
pub fn slot_in_group(records: &[Record], group_id: &str, hint: f64) -> Option<usize> {
    let mut first = None;
    let mut after = None;
    for (index, record) in records.iter().enumerate() {
        if record.group_id() != group_id {
            continue;
        }
        first.get_or_insert(index);
        if record.order_hint() <= hint {
            after = Some(index + 1);
        }
    }
    after.or(first)
}

/// Positions where a new group block may start.
///
/// A boundary is the start of the sequence, the end of the sequence, or any
/// index where the group changes from one record to the next. For a sequence
/// of `n` runs there are `n + 1` boundaries; without cross-group moves every
/// group is one run.
pub fn block_boundaries(records: &[Record]) -> Vec<usize> {
    let mut boundaries = vec![0];
    for (index, pair) in records.windows(2).enumerate() {
        if pair[0].group_id() != pair[1].group_id() {
            boundaries.push(index + 1);
        }
    }
    if !records.is_empty() {
        boundaries.push(records.len());
    }
    boundaries
}

/// Decides where an entry for `group_id` with `hint` goes.
///
/// `random` is only consulted when the group has no records yet and there is
/// more than one boundary to choose from.
pub fn place(
    records: &[Record],
    group_id: &str,
    hint: f64,
    random: &mut dyn RandomSource,
) -> Placement {
    if let Some(index) = slot_in_group(records, group_id, hint) {
        return Placement::InGroup { index };
    }

    let boundaries = block_boundaries(records);
    // With no other records there is nothing to choose between.
    let choice = if boundaries.len() > 1 {
        random.pick_index(boundaries.len())
    } else {
        0
    };
    Placement::NewBlock {
        index: boundaries[choice.min(boundaries.len() - 1)],
        choice,
        boundaries: boundaries.len(),
    }
}

//! Ordering rules for tasks inside columns
//!
//! Pure functions over ordered id lists. The store loads the current order,
//! asks this module for the new order, and writes back only the rows whose
//! location changed. Index in a returned list == persisted position, so
//! every column stays a contiguous `0..n` sequence after a renumbering
//! operation.

use std::collections::HashMap;

use crate::model::{ColumnId, TaskId};

/// Position one past the current maximum, or 0 for an empty list
pub fn append_position(max: Option<i64>) -> i64 {
    max.map_or(0, |m| m + 1)
}

/// Resolve a requested insertion slot against a list of `len` elements.
///
/// Omitted or out-of-range requests mean "end of list".
pub fn clamp_slot(requested: Option<usize>, len: usize) -> usize {
    requested.map_or(len, |slot| slot.min(len))
}

/// New orders produced by a move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovePlan {
    /// Source column order after the move (includes the task for a reorder)
    pub source: Vec<TaskId>,
    /// Target column order, `None` for an intra-column reorder
    pub target: Option<Vec<TaskId>>,
    /// Final position of the moved task
    pub slot: usize,
}

/// Plan a move of `task`.
///
/// `target == None` is an intra-column reorder: remove the task and reinsert
/// it at `requested` (indices refer to the list without the task). Otherwise
/// the task leaves `source` and is inserted into `target` at `requested`,
/// shifting the tasks at or after that slot down by one.
///
/// Returns `None` when `task` is not in `source`.
pub fn plan_move(
    source: &[TaskId],
    target: Option<&[TaskId]>,
    task: TaskId,
    requested: Option<usize>,
) -> Option<MovePlan> {
    let index = source.iter().position(|id| *id == task)?;
    let mut remaining = source.to_vec();
    remaining.remove(index);

    match target {
        None => {
            let slot = clamp_slot(requested, remaining.len());
            remaining.insert(slot, task);
            Some(MovePlan {
                source: remaining,
                target: None,
                slot,
            })
        }
        Some(target) => {
            let mut destination: Vec<TaskId> =
                target.iter().copied().filter(|id| *id != task).collect();
            let slot = clamp_slot(requested, destination.len());
            destination.insert(slot, task);
            Some(MovePlan {
                source: remaining,
                target: Some(destination),
                slot,
            })
        }
    }
}

/// Order left after deleting `task` (unchanged if absent)
pub fn plan_removal(ids: &[TaskId], task: TaskId) -> Vec<TaskId> {
    ids.iter().copied().filter(|id| *id != task).collect()
}

/// A task's location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub id: TaskId,
    pub column_id: ColumnId,
    pub position: i64,
}

/// Dense placements for one column order
pub fn layout(column_id: ColumnId, ids: &[TaskId]) -> Vec<Placement> {
    ids.iter()
        .enumerate()
        .map(|(i, id)| Placement {
            id: *id,
            column_id,
            position: i as i64,
        })
        .collect()
}

/// Placements in `desired` whose location differs from `current`
///
/// Rows absent from `current` always count as changed.
pub fn diff_layout(current: &[Placement], desired: &[Placement]) -> Vec<Placement> {
    let before: HashMap<TaskId, (ColumnId, i64)> = current
        .iter()
        .map(|p| (p.id, (p.column_id, p.position)))
        .collect();

    desired
        .iter()
        .filter(|p| before.get(&p.id) != Some(&(p.column_id, p.position)))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clamp_slot() {
        assert_eq!(clamp_slot(None, 3), 3);
        assert_eq!(clamp_slot(Some(0), 3), 0);
        assert_eq!(clamp_slot(Some(2), 3), 2);
        assert_eq!(clamp_slot(Some(9), 3), 3);
        assert_eq!(clamp_slot(None, 0), 0);
    }

    #[test]
    fn test_append_position() {
        assert_eq!(append_position(None), 0);
        assert_eq!(append_position(Some(3)), 4);
    }

    #[test]
    fn test_reorder_forward_and_backward() {
        let ids = [10, 11, 12, 13];

        let plan = plan_move(&ids, None, 10, Some(2)).unwrap();
        assert_eq!(plan.source, vec![11, 12, 10, 13]);
        assert_eq!(plan.target, None);
        assert_eq!(plan.slot, 2);

        let plan = plan_move(&ids, None, 13, Some(0)).unwrap();
        assert_eq!(plan.source, vec![13, 10, 11, 12]);
    }

    #[test]
    fn test_reorder_to_same_slot_keeps_order() {
        let ids = [1, 2, 3];
        let plan = plan_move(&ids, None, 2, Some(1)).unwrap();
        assert_eq!(plan.source, ids.to_vec());
    }

    #[test]
    fn test_reorder_without_position_goes_last() {
        let plan = plan_move(&[1, 2, 3], None, 1, None).unwrap();
        assert_eq!(plan.source, vec![2, 3, 1]);
        assert_eq!(plan.slot, 2);
    }

    #[test]
    fn test_cross_column_move() {
        let plan = plan_move(&[1, 2, 3], Some(&[7, 8][..]), 2, Some(1)).unwrap();
        assert_eq!(plan.source, vec![1, 3]);
        assert_eq!(plan.target, Some(vec![7, 2, 8]));
        assert_eq!(plan.slot, 1);

        let plan = plan_move(&[1], Some(&[][..]), 1, None).unwrap();
        assert!(plan.source.is_empty());
        assert_eq!(plan.target, Some(vec![1]));
        assert_eq!(plan.slot, 0);
    }

    #[test]
    fn test_move_of_unknown_task() {
        assert_eq!(plan_move(&[1, 2], None, 9, Some(0)), None);
    }

    #[test]
    fn test_plan_removal() {
        assert_eq!(plan_removal(&[4, 5, 6], 5), vec![4, 6]);
        assert_eq!(plan_removal(&[4, 5, 6], 9), vec![4, 5, 6]);
    }

    #[test]
    fn test_diff_layout_only_reports_changed_rows() {
        let current = layout(1, &[1, 2, 3]);
        let desired = layout(1, &[1, 3]);
        let changed = diff_layout(&current, &desired);
        assert_eq!(
            changed,
            vec![Placement {
                id: 3,
                column_id: 1,
                position: 1
            }]
        );

        // 跨列：即便 position 相同，列变化也算改动
        let desired = layout(2, &[1]);
        assert_eq!(diff_layout(&current, &desired).len(), 1);
    }

    fn is_dense(ids: &[TaskId], members: &[TaskId]) -> bool {
        let mut a = ids.to_vec();
        let mut b = members.to_vec();
        a.sort_unstable();
        b.sort_unstable();
        a == b
    }

    proptest! {
        #[test]
        fn prop_moves_keep_columns_a_permutation(
            sizes in (0usize..6, 0usize..6),
            moves in proptest::collection::vec((any::<bool>(), 0usize..12, proptest::option::of(0usize..8)), 0..20)
        ) {
            let mut a: Vec<TaskId> = (0..sizes.0 as i64).collect();
            let mut b: Vec<TaskId> = (100..100 + sizes.1 as i64).collect();
            let mut all: Vec<TaskId> = a.iter().chain(b.iter()).copied().collect();
            all.sort_unstable();

            for (cross, pick, slot) in moves {
                if all.is_empty() {
                    break;
                }
                let task = all[pick % all.len()];
                let in_a = a.contains(&task);
                let (src, dst) = if in_a { (&mut a, &mut b) } else { (&mut b, &mut a) };

                let plan = if cross {
                    plan_move(src, Some(dst.as_slice()), task, slot).unwrap()
                } else {
                    plan_move(src, None, task, slot).unwrap()
                };
                match plan.target {
                    Some(target) => {
                        *src = plan.source;
                        *dst = target;
                        prop_assert_eq!(dst[plan.slot], task);
                    }
                    None => {
                        *src = plan.source;
                        prop_assert_eq!(src[plan.slot], task);
                    }
                }

                let mut joined: Vec<TaskId> = a.iter().chain(b.iter()).copied().collect();
                prop_assert!(is_dense(&joined, &all));
                joined.dedup();
                prop_assert_eq!(joined.len(), all.len());
            }
        }

        #[test]
        fn prop_cross_move_round_trip_restores_both_columns(
            len_a in 1usize..6,
            len_b in 0usize..6,
            pick in 0usize..6,
            slot in 0usize..8,
        ) {
            let a: Vec<TaskId> = (0..len_a as i64).collect();
            let b: Vec<TaskId> = (100..100 + len_b as i64).collect();
            let index = pick % len_a;
            let task = a[index];

            let there = plan_move(&a, Some(b.as_slice()), task, Some(slot)).unwrap();
            let b2 = there.target.unwrap();
            let back = plan_move(&b2, Some(there.source.as_slice()), task, Some(index)).unwrap();

            prop_assert_eq!(back.target.unwrap(), a);
            prop_assert_eq!(back.source, b);
        }
    }
}

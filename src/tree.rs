// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Category tree layout and drag-to-reorder.
//!
//! Reordering never touches local data optimistically: a drop sends one
//! move description to the backend, then the category list is refetched
//! and the drag-id list rebuilt from what the backend returned.

use crate::client::Transport;
use crate::error::ReorderError;
use crate::models::{Category, ReorderCategory};
use crate::session::Session;
use tracing::{debug, info};

/// Stable single-element move: remove at `from`, reinsert at `to`.
///
/// Out-of-range indices leave the slice untouched.
pub fn array_move<T>(items: &mut [T], from: usize, to: usize) {
    if from >= items.len() || to >= items.len() || from == to {
        return;
    }
    if from < to {
        items[from..=to].rotate_left(1);
    } else {
        items[to..=from].rotate_right(1);
    }
}

pub fn moved<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut out = items.to_vec();
    array_move(&mut out, from, to);
    out
}

/// Ids of the top-level rows in rendered order. Drag positions index this.
pub fn drag_ids(categories: &[Category]) -> Vec<i64> {
    categories.iter().map(|c| c.id).collect()
}

/// End of a drag gesture: the dragged row and the row it was dropped on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragEnd {
    pub active: i64,
    pub over: Option<i64>,
}

/// Turns a drop into the request to send, or `None` when it is a no-op.
pub fn plan_reorder(ids: &[i64], drag: DragEnd) -> Option<ReorderCategory> {
    let over = drag.over?;
    if over == drag.active {
        return None;
    }
    let old_index = ids.iter().position(|&id| id == drag.active)?;
    let new_index = ids.iter().position(|&id| id == over)?;
    if old_index == new_index {
        return None;
    }
    Some(ReorderCategory {
        id: drag.active,
        old_index: Some(old_index),
        new_index: Some(new_index),
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeRow<'a> {
    pub depth: usize,
    pub category: &'a Category,
}

/// Depth-first rows; children are skipped when `expanded` is false.
pub fn flatten(categories: &[Category], expanded: bool) -> Vec<TreeRow<'_>> {
    fn walk<'a>(cats: &'a [Category], depth: usize, expanded: bool, out: &mut Vec<TreeRow<'a>>) {
        for c in cats {
            out.push(TreeRow { depth, category: c });
            if expanded {
                walk(&c.categories, depth + 1, expanded, out);
            }
        }
    }
    let mut out = Vec::new();
    walk(categories, 0, expanded, &mut out);
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderOutcome {
    /// Dropped in place, outside the list, or on itself.
    Cancelled,
    Moved {
        request: ReorderCategory,
        order: Vec<i64>,
    },
}

/// One rendered category table. At most one reorder is in flight per board.
#[derive(Debug, Default)]
pub struct CategoryBoard {
    ids: Vec<i64>,
    in_flight: Option<ReorderCategory>,
}

impl CategoryBoard {
    pub fn new(categories: &[Category]) -> Self {
        Self {
            ids: drag_ids(categories),
            in_flight: None,
        }
    }

    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Claims the board for a drop. Errors with `Busy` while another
    /// reorder has not finished.
    pub fn begin(&mut self, drag: DragEnd) -> Result<Option<ReorderCategory>, ReorderError> {
        if let Some(pending) = self.in_flight {
            debug!(pending = pending.id, active = drag.active, "reorder rejected, busy");
            return Err(ReorderError::Busy);
        }
        let plan = plan_reorder(&self.ids, drag);
        self.in_flight = plan;
        Ok(plan)
    }

    /// Releases the board. Pass the refetched list to rebuild drag ids.
    pub fn finish(&mut self, refreshed: Option<&[Category]>) {
        self.in_flight = None;
        if let Some(cats) = refreshed {
            self.ids = drag_ids(cats);
        }
    }

    /// Sends the drop, waits for it, then refetches categories.
    pub fn drop_on<T: Transport>(
        &mut self,
        session: &mut Session<T>,
        drag: DragEnd,
    ) -> Result<ReorderOutcome, ReorderError> {
        let Some(request) = self.begin(drag)? else {
            return Ok(ReorderOutcome::Cancelled);
        };
        if let Err(e) = session.reorder_category(&request) {
            self.finish(None);
            return Err(e.into());
        }
        match session.refetch_categories() {
            Ok(cats) => {
                self.finish(Some(&cats));
                info!(id = request.id, order = ?self.ids, "category reordered");
                Ok(ReorderOutcome::Moved {
                    request,
                    order: self.ids.clone(),
                })
            }
            Err(e) => {
                self.finish(None);
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(id: i64, children: Vec<Category>) -> Category {
        Category {
            id,
            name: format!("c{id}"),
            parent_id: None,
            amount: None,
            categories: children,
        }
    }

    #[test]
    fn move_is_not_a_swap() {
        let s = [10, 20, 30, 40, 50];
        assert_eq!(moved(&s, 1, 3), vec![10, 30, 40, 20, 50]);
        assert_eq!(moved(&s, 4, 0), vec![50, 10, 20, 30, 40]);
    }

    #[test]
    fn move_to_same_index_is_identity() {
        let s = [1, 2, 3];
        for i in 0..s.len() {
            assert_eq!(moved(&s, i, i), s.to_vec());
        }
    }

    #[test]
    fn move_is_undone_by_inverse() {
        let s: Vec<u8> = (0..7).collect();
        for i in 0..s.len() {
            for j in 0..s.len() {
                let there = moved(&s, i, j);
                assert_eq!(there[j], s[i]);
                let mut sorted = there.clone();
                sorted.sort();
                assert_eq!(sorted, s);
                assert_eq!(moved(&there, j, i), s);
            }
        }
    }

    #[test]
    fn plan_skips_self_drop_and_unknown_ids() {
        let ids = [1, 2, 3];
        assert_eq!(plan_reorder(&ids, DragEnd { active: 2, over: Some(2) }), None);
        assert_eq!(plan_reorder(&ids, DragEnd { active: 2, over: None }), None);
        assert_eq!(plan_reorder(&ids, DragEnd { active: 9, over: Some(1) }), None);
        assert_eq!(plan_reorder(&ids, DragEnd { active: 1, over: Some(9) }), None);
    }

    #[test]
    fn plan_reports_positions_in_drag_list() {
        let ids = [1, 2];
        let plan = plan_reorder(&ids, DragEnd { active: 2, over: Some(1) }).unwrap();
        assert_eq!(plan.id, 2);
        assert_eq!(plan.old_index, Some(1));
        assert_eq!(plan.new_index, Some(0));
    }

    #[test]
    fn board_rejects_overlapping_drops() {
        let mut board = CategoryBoard::new(&[cat(1, vec![]), cat(2, vec![]), cat(3, vec![])]);
        assert!(board.begin(DragEnd { active: 3, over: Some(1) }).unwrap().is_some());
        assert!(matches!(
            board.begin(DragEnd { active: 1, over: Some(2) }),
            Err(ReorderError::Busy)
        ));
        board.finish(None);
        assert!(!board.is_busy());
        assert_eq!(board.ids(), &[1, 2, 3]);
    }

    #[test]
    fn flatten_walks_children_when_expanded() {
        let tree = vec![cat(1, vec![cat(11, vec![]), cat(12, vec![])]), cat(2, vec![])];
        let rows: Vec<(usize, i64)> = flatten(&tree, true)
            .iter()
            .map(|r| (r.depth, r.category.id))
            .collect();
        assert_eq!(rows, vec![(0, 1), (1, 11), (1, 12), (0, 2)]);
        assert_eq!(flatten(&tree, false).len(), 2);
    }
}

//! Reachability over the open-edge graph.
//!
//! The graph has one node per cell and an edge between orthogonal
//! neighbors whenever no wall segment closes the boundary between them.
//! Pawns are ignored: any pawn can eventually be stepped around or jumped,
//! so plain connectivity is what decides whether a goal edge is reachable.
//!
//! All searches are iterative BFS with a visited set sized to the board,
//! so each cell is expanded at most once.

use std::collections::VecDeque;

use crate::board::{Cell, GoalEdge, WallGrid, ALL_DIRECTIONS};

/// Returns the set of cells reachable from `from`, indexed by `Cell::index`.
pub fn reachable_cells(walls: &WallGrid, from: Cell) -> Vec<bool> {
    let size = walls.board_size();
    let mut visited = vec![false; size * size];
    if !from.in_bounds(size) {
        return visited;
    }
    let mut queue = VecDeque::with_capacity(size * size);
    visited[from.index(size)] = true;
    queue.push_back(from);

    while let Some(cur) = queue.pop_front() {
        for dir in ALL_DIRECTIONS {
            if let Some(next) = walls.open_step(cur, dir) {
                let idx = next.index(size);
                if !visited[idx] {
                    visited[idx] = true;
                    queue.push_back(next);
                }
            }
        }
    }
    visited
}

/// Length of the shortest open path from `from` to any cell of `goal`,
/// or `None` if the edge is sealed off.
pub fn goal_distance(walls: &WallGrid, from: Cell, goal: GoalEdge) -> Option<usize> {
    let size = walls.board_size();
    if !from.in_bounds(size) {
        return None;
    }
    let mut dist = vec![usize::MAX; size * size];
    let mut queue = VecDeque::with_capacity(size * size);
    dist[from.index(size)] = 0;
    queue.push_back(from);

    while let Some(cur) = queue.pop_front() {
        let d = dist[cur.index(size)];
        if goal.contains(cur, size) {
            return Some(d);
        }
        for dir in ALL_DIRECTIONS {
            if let Some(next) = walls.open_step(cur, dir) {
                let idx = next.index(size);
                if dist[idx] == usize::MAX {
                    dist[idx] = d + 1;
                    queue.push_back(next);
                }
            }
        }
    }
    None
}

/// Returns true if some cell of `goal` is reachable from `from`.
///
/// Stops as soon as the first goal cell is dequeued.
#[inline]
pub fn reaches_goal(walls: &WallGrid, from: Cell, goal: GoalEdge) -> bool {
    goal_distance(walls, from, goal).is_some()
}

//! Per-search node state.
//!
//! A [`SearchSpace`] is an arena of [`SearchState`]s indexed by flat cell
//! index. It is created at the start of a `find_path` call and dropped when
//! the call returns, so searches sharing a [`Grid`] never see each other's
//! costs or parent links.

use tilepath_core::{Grid, Point};

use crate::error::FindError;
use crate::frontier::Frontier;
use crate::heuristic::SQRT2;

/// Where a node stands within one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Visit {
    #[default]
    Unvisited,
    Frontier,
    Settled,
}

/// Which seed a search grows from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    FromStart,
    FromEnd,
}

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct SearchState {
    pub(crate) g: f64,
    pub(crate) h: f64,
    pub(crate) f: f64,
    pub(crate) visit: Visit,
    pub(crate) parent: Option<usize>,
}

pub(crate) struct SearchSpace {
    pub(crate) side: Side,
    states: Vec<SearchState>,
    weight: f64,
}

impl SearchSpace {
    pub(crate) fn new(side: Side, cells: usize, weight: f64) -> Self {
        Self {
            side,
            states: vec![SearchState::default(); cells],
            weight,
        }
    }

    #[inline]
    pub(crate) fn state(&self, idx: usize) -> &SearchState {
        &self.states[idx]
    }

    /// Whether `idx` has been reached at all by this search.
    #[inline]
    pub(crate) fn is_discovered(&self, idx: usize) -> bool {
        self.states[idx].visit != Visit::Unvisited
    }

    #[inline]
    pub(crate) fn is_settled(&self, idx: usize) -> bool {
        self.states[idx].visit == Visit::Settled
    }

    /// Put the seed node on the frontier with `g = 0`.
    pub(crate) fn seed(&mut self, open: &mut Frontier, idx: usize, h: f64) {
        let s = &mut self.states[idx];
        s.g = 0.0;
        s.h = h;
        s.f = self.weight * h;
        s.parent = None;
        s.visit = Visit::Frontier;
        open.push(idx, s.f, s.h);
    }

    pub(crate) fn settle(&mut self, idx: usize) {
        self.states[idx].visit = Visit::Settled;
    }

    /// Relax the edge `from -> to` of cost `step`.
    ///
    /// `estimate` is only called the first time `to` is discovered. Returns
    /// whether `to` got a new cost.
    pub(crate) fn relax(
        &mut self,
        open: &mut Frontier,
        from: usize,
        to: usize,
        step: f64,
        estimate: impl FnOnce() -> f64,
    ) -> bool {
        let g = self.states[from].g + step;
        let weight = self.weight;
        let n = &mut self.states[to];
        match n.visit {
            Visit::Settled => false,
            Visit::Frontier if g >= n.g => false,
            Visit::Frontier => {
                n.g = g;
                n.f = g + weight * n.h;
                n.parent = Some(from);
                open.decrease_key(to, n.f, n.h);
                true
            }
            Visit::Unvisited => {
                n.h = estimate();
                n.g = g;
                n.f = g + weight * n.h;
                n.parent = Some(from);
                n.visit = Visit::Frontier;
                open.push(to, n.f, n.h);
                true
            }
        }
    }

    /// Follow parent links from `idx` back to the seed. The result runs
    /// seed → `idx`, both inclusive.
    pub(crate) fn backtrace(&self, grid: &Grid, idx: usize) -> Vec<Point> {
        let mut path = vec![grid.point(idx)];
        let mut cur = idx;
        while let Some(parent) = self.states[cur].parent {
            path.push(grid.point(parent));
            cur = parent;
        }
        path.reverse();
        path
    }
}

/// Join a chain running start → meeting with a chain running end → meeting
/// into a single start → end path. A meeting cell present at the end of
/// both chains is kept once.
pub(crate) fn bi_backtrace(mut head: Vec<Point>, mut tail: Vec<Point>) -> Vec<Point> {
    tail.reverse();
    let skip = usize::from(head.last().is_some() && head.last() == tail.first());
    head.extend(tail.into_iter().skip(skip));
    head
}

/// Cost of a single move between adjacent cells.
#[inline]
pub(crate) fn step_cost(from: Point, to: Point) -> f64 {
    if from.is_diagonal_to(to) { SQRT2 } else { 1.0 }
}

/// Check that both endpoints are inside the grid and walkable, returning
/// their flat indices.
pub(crate) fn endpoints(grid: &Grid, start: Point, end: Point) -> Result<(usize, usize), FindError> {
    let si = grid.checked_index(start)?;
    let ei = grid.checked_index(end)?;
    for p in [start, end] {
        if !grid.is_walkable_at(p) {
            return Err(FindError::BlockedEndpoint { pos: p });
        }
    }
    Ok((si, ei))
}

use pathviz_core::{CellState, Context, Grid, Point};

use crate::distance::{Heuristic, Manhattan};
use crate::error::InvalidEndpoints;
use crate::frontier::Frontier;
use crate::outcome::{Outcome, Path, SearchStats, SearchStatus};

/// Sentinel g-score for cells not reached yet.
const UNREACHED: i32 = i32::MAX;

/// Per-run bookkeeping, indexed by flat cell index. Dropped when the run
/// returns.
struct SearchState {
    g: Vec<i32>,
    f: Vec<i32>,
    came_from: Vec<Option<usize>>,
    frontier: Frontier,
}

impl SearchState {
    fn new(cells: usize) -> Self {
        Self {
            g: vec![UNREACHED; cells],
            f: vec![UNREACHED; cells],
            came_from: vec![None; cells],
            frontier: Frontier::new(cells),
        }
    }
}

/// A* engine. Holds the heuristic and the status and counters of the most
/// recent run; all per-run tables live only for the duration of
/// [`run`](Self::run).
#[derive(Debug, Default)]
pub struct PathSearch<H = Manhattan> {
    heuristic: H,
    status: SearchStatus,
    stats: SearchStats,
}

impl PathSearch<Manhattan> {
    /// An engine using the Manhattan heuristic.
    pub fn new() -> Self {
        Self::with_heuristic(Manhattan)
    }
}

impl<H: Heuristic> PathSearch<H> {
    pub fn with_heuristic(heuristic: H) -> Self {
        Self {
            heuristic,
            status: SearchStatus::Idle,
            stats: SearchStats::default(),
        }
    }

    /// Status of the most recent run.
    #[inline]
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Counters of the most recent run.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Search for a shortest path from `start` to `end`.
    ///
    /// Cells are tagged on `grid` as the search proceeds: discovered cells
    /// become Open, expanded cells Closed (the start keeps its own tag), and
    /// on success the interior of the path becomes Path and `end` becomes
    /// Ended. Nothing is reverted on failure or cancellation.
    ///
    /// `on_step` is called once after every expansion and once for every
    /// path cell tagged during reconstruction. `ctx` is checked before every
    /// expansion; once it is done the run stops with
    /// [`Outcome::Cancelled`].
    ///
    /// The grid's cached adjacency is used as-is, and recomputed first only
    /// if the layout changed since it was last built. Start and End tags are
    /// the caller's business; the engine only relies on the positions.
    pub fn run<F>(
        &mut self,
        grid: &mut Grid,
        start: Point,
        end: Point,
        ctx: &Context,
        mut on_step: F,
    ) -> Result<Outcome, InvalidEndpoints>
    where
        F: FnMut(&Grid),
    {
        let (start_idx, end_idx) = validate(grid, start, end)?;

        if grid.neighbors_stale() {
            log::debug!("adjacency is stale, recomputing before search");
            grid.update_neighbors();
        }

        self.status = SearchStatus::Running;
        self.stats = SearchStats::default();
        log::debug!(
            "A* {} -> {} on {}x{} grid",
            start,
            end,
            grid.size(),
            grid.size()
        );

        let mut state = SearchState::new(grid.len());
        state.g[start_idx] = 0;
        state.f[start_idx] = self.estimate(start, end);
        state.frontier.push(start_idx, state.f[start_idx]);

        let mut nbuf: Vec<Point> = Vec::with_capacity(4);

        let outcome = 'search: loop {
            if ctx.is_done() {
                break 'search Outcome::Cancelled;
            }

            let Some(current) = state.frontier.pop() else {
                break 'search Outcome::Failed;
            };
            let ci = current.idx;
            self.stats.expanded += 1;

            if ci == end_idx {
                let path = self.reconstruct(grid, &state, start_idx, end_idx, &mut on_step);
                grid.set_state(end, CellState::Ended);
                break 'search Outcome::Succeeded(path);
            }

            let cp = grid.point(ci);
            log::trace!("expand {} g={} f={}", cp, state.g[ci], current.f);

            nbuf.clear();
            nbuf.extend_from_slice(grid.neighbors(cp));

            let tentative_g = state.g[ci] + 1;
            for &np in &nbuf {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                debug_assert!(
                    grid.state(np).is_some_and(CellState::is_walkable),
                    "adjacency of {cp} lists barrier {np}"
                );
                if tentative_g >= state.g[ni] {
                    continue;
                }
                state.came_from[ni] = Some(ci);
                state.g[ni] = tentative_g;
                state.f[ni] = tentative_g + self.estimate(np, end);

                if !state.frontier.contains(ni) {
                    state.frontier.push(ni, state.f[ni]);
                    mark(grid, np, CellState::Open);
                }
            }

            on_step(&*grid);
            self.stats.steps += 1;

            if ci != start_idx {
                mark(grid, cp, CellState::Closed);
            }
        };

        self.stats.insertions = state.frontier.insertions();
        self.status = outcome.status();
        log::debug!(
            "A* finished: {:?} after {} expansions ({} insertions, {} steps)",
            self.status,
            self.stats.expanded,
            self.stats.insertions,
            self.stats.steps
        );
        Ok(outcome)
    }

    fn estimate(&self, from: Point, to: Point) -> i32 {
        let h = self.heuristic.estimate(from, to);
        debug_assert!(h >= 0, "negative heuristic {h} for {from} -> {to}");
        h
    }

    /// Walk predecessor links back from `end_idx`, tagging every interior
    /// cell as Path.
    fn reconstruct<F>(
        &mut self,
        grid: &mut Grid,
        state: &SearchState,
        start_idx: usize,
        end_idx: usize,
        on_step: &mut F,
    ) -> Path
    where
        F: FnMut(&Grid),
    {
        let mut cells = vec![grid.point(end_idx)];
        let mut ci = end_idx;
        while let Some(prev) = state.came_from[ci] {
            let p = grid.point(prev);
            cells.push(p);
            if prev != start_idx {
                grid.set_state(p, CellState::Path);
                on_step(&*grid);
                self.stats.steps += 1;
            }
            ci = prev;
        }
        cells.reverse();
        Path::new(cells)
    }
}

/// Check the endpoints and return their flat indices.
fn validate(grid: &Grid, start: Point, end: Point) -> Result<(usize, usize), InvalidEndpoints> {
    let start_idx = grid
        .index(start)
        .ok_or(InvalidEndpoints::OutOfBounds(start))?;
    let end_idx = grid.index(end).ok_or(InvalidEndpoints::OutOfBounds(end))?;
    if start_idx == end_idx {
        return Err(InvalidEndpoints::Coincident(start));
    }
    for p in [start, end] {
        if grid.state(p) == Some(CellState::Barrier) {
            return Err(InvalidEndpoints::Barrier(p));
        }
    }
    Ok((start_idx, end_idx))
}

/// Tag a cell visited by the search, leaving the endpoint tags alone so
/// there is always exactly one Start and one End on screen.
fn mark(grid: &mut Grid, p: Point, state: CellState) {
    match grid.state(p) {
        Some(CellState::Start | CellState::End) | None => {}
        Some(_) => {
            grid.set_state(p, state);
        }
    }
}

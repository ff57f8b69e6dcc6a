//! The interactive grid editor: places endpoints and barriers from mouse
//! input and runs the search on demand.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pathviz_core::{Canvas, CellState, Context, Glyph, Grid, Key, MouseAction, Msg, Point};
use pathviz_search::{Outcome, PathSearch};

use crate::app::{Effect, Model};
use crate::palette;

/// Screen columns per grid cell, so cells look roughly square.
pub const CELL_WIDTH: i32 = 2;

const HELP: &str = "left: place  right: erase  space: search  r: random  c: clear  q: quit";
const SEARCHING: &str = "searching... q/esc to cancel";

/// Largest grid whose screen still fits terminal (`u16`) coordinates.
pub const MAX_SIZE: i32 = u16::MAX as i32 / CELL_WIDTH;

/// Screen size needed to show a `size`×`size` grid plus the status line.
pub fn screen_size(size: i32) -> (i32, i32) {
    (size * CELL_WIDTH, size + 1)
}

pub struct Editor {
    grid: Grid,
    start: Option<Point>,
    end: Option<Point>,
    search: PathSearch,
    rng: StdRng,
    barrier_density: f64,
    status: String,
}

impl Editor {
    /// An editor over an empty `size`×`size` grid.
    pub fn new(size: i32, seed: u64, barrier_density: f64) -> Self {
        Self::from_grid(Grid::new(size), seed, barrier_density)
    }

    /// An editor over a preloaded layout. The first Start and End tags found
    /// (row-major) become the endpoints; any further ones are freed.
    pub fn from_grid(mut grid: Grid, seed: u64, barrier_density: f64) -> Self {
        grid.clear_search_marks();
        let start = grid.find(CellState::Start);
        let end = grid.find(CellState::End);
        for (tag, keep) in [(CellState::Start, start), (CellState::End, end)] {
            let extra: Vec<Point> = grid
                .cells()
                .filter(|c| c.state() == tag && Some(c.position()) != keep)
                .map(|c| c.position())
                .collect();
            if !extra.is_empty() {
                log::warn!("layout has {} extra {:?} cells, freeing them", extra.len(), tag);
            }
            for p in extra {
                grid.set_state(p, CellState::Free);
            }
        }

        Self {
            grid,
            start,
            end,
            search: PathSearch::new(),
            rng: StdRng::seed_from_u64(seed),
            barrier_density,
            status: HELP.to_string(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Option<Point> {
        self.start
    }

    pub fn end(&self) -> Option<Point> {
        self.end
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// The grid cell under screen position `(x, y)`, if any.
    pub fn cell_at(&self, x: i32, y: i32) -> Option<Point> {
        if x < 0 || y < 0 {
            return None;
        }
        let p = Point::new(y, x / CELL_WIDTH);
        self.grid.contains(p).then_some(p)
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    /// Left button: the first click places Start, the second End, and every
    /// later one (or drag) a barrier. Endpoints are never painted over.
    fn place(&mut self, p: Point) {
        if self.start.is_none() && self.end != Some(p) {
            self.grid.set_state(p, CellState::Start);
            self.start = Some(p);
        } else if self.end.is_none() && self.start != Some(p) {
            self.grid.set_state(p, CellState::End);
            self.end = Some(p);
        } else if self.start != Some(p) && self.end != Some(p) {
            self.grid.set_state(p, CellState::Barrier);
        }
    }

    /// Right button: free the cell, forgetting it as an endpoint.
    fn erase(&mut self, p: Point) {
        self.grid.set_state(p, CellState::Free);
        if self.start == Some(p) {
            self.start = None;
        }
        if self.end == Some(p) {
            self.end = None;
        }
    }

    fn reset(&mut self) {
        self.grid = Grid::new(self.grid.size());
        self.start = None;
        self.end = None;
        self.status = HELP.to_string();
    }

    /// Turn each free cell into a barrier with the configured probability.
    fn scatter_barriers(&mut self) {
        self.grid.clear_search_marks();
        let free: Vec<Point> = self
            .grid
            .cells()
            .filter(|c| c.is_free())
            .map(|c| c.position())
            .collect();
        let mut placed = 0;
        for p in free {
            if self.rng.random_bool(self.barrier_density) {
                self.grid.set_state(p, CellState::Barrier);
                placed += 1;
            }
        }
        log::debug!("scattered {placed} barriers");
        self.status = format!("placed {placed} random barriers");
    }

    fn handle_key(&mut self, key: Key) -> Option<Effect> {
        match key {
            Key::Space => {
                if self.start.is_some() && self.end.is_some() {
                    return Some(Effect::Search);
                }
                self.status = "place a start and an end first".to_string();
            }
            Key::Char('c') => self.reset(),
            Key::Char('r') => self.scatter_barriers(),
            Key::Escape | Key::Char('q') => return Some(Effect::End),
            _ => {}
        }
        None
    }

    fn report(&mut self, outcome: &Outcome) {
        let stats = self.search.stats();
        self.status = match outcome {
            Outcome::Succeeded(path) => format!(
                "path found: {} moves, {} cells expanded",
                path.len(),
                stats.expanded
            ),
            Outcome::Failed => format!("no path: end is unreachable ({} cells expanded)", stats.expanded),
            Outcome::Cancelled => "search cancelled".to_string(),
        };
        log::info!("{}", self.status);
    }
}

// ---------------------------------------------------------------------------
// Drawing
// ---------------------------------------------------------------------------

fn draw_grid(grid: &Grid, canvas: &mut Canvas) {
    for cell in grid.cells() {
        let g = Glyph::blank(palette::cell_color(cell.state()));
        let x = cell.col() * CELL_WIDTH;
        for dx in 0..CELL_WIDTH {
            canvas.set(x + dx, cell.row(), g);
        }
    }
}

fn draw_status(canvas: &mut Canvas, y: i32, text: &str) {
    for x in 0..canvas.width() {
        canvas.set(x, y, Glyph::blank(palette::BACKGROUND));
    }
    canvas.print(0, y, text, palette::STATUS_FG, palette::BACKGROUND);
}

impl Model for Editor {
    fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::KeyDown { key } => self.handle_key(key),
            Msg::Mouse { action, x, y } => {
                let p = self.cell_at(x, y)?;
                match action {
                    MouseAction::Main | MouseAction::Drag => self.place(p),
                    MouseAction::Secondary => self.erase(p),
                    MouseAction::Release => {}
                }
                None
            }
            Msg::Quit => Some(Effect::End),
            Msg::Init | Msg::Screen { .. } => None,
        }
    }

    fn draw(&self, canvas: &mut Canvas) {
        canvas.fill(Glyph::blank(palette::BACKGROUND));
        draw_grid(&self.grid, canvas);
        draw_status(canvas, self.grid.size(), &self.status);
    }

    fn draw_step(grid: &Grid, canvas: &mut Canvas) {
        draw_grid(grid, canvas);
        draw_status(canvas, grid.size(), SEARCHING);
    }

    fn run_search(&mut self, ctx: &Context, step: &mut dyn FnMut(&Grid)) {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return;
        };
        self.grid.clear_search_marks();
        self.grid.update_neighbors();

        match self.search.run(&mut self.grid, start, end, ctx, &mut *step) {
            Ok(outcome) => self.report(&outcome),
            Err(e) => {
                log::warn!("{e}");
                self.status = e.to_string();
            }
        }
    }
}

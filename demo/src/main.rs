//! pathviz: draw a maze in the terminal and watch A* solve it.
//!
//! Left click places the start, then the end, then barriers (drag to paint).
//! Right click erases. Space runs the search, `r` scatters random barriers,
//! `c` clears the grid, `q` or Esc quits (or cancels a running search).

use std::error::Error;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use env_logger::{Env, Target};

use pathviz_core::Grid;
use pathviz_crossterm::CrosstermDriver;

use pathviz_demo::app::{App, AppConfig};
use pathviz_demo::config::{self, DemoConfig};
use pathviz_demo::editor::{self, Editor};

#[derive(Parser)]
#[command(name = "pathviz")]
#[command(about = "Interactive A* pathfinding on a square grid")]
struct Args {
    /// TOML configuration file; defaults are used if it does not exist
    #[arg(long, default_value = "pathviz.toml")]
    config: PathBuf,

    /// Rows and columns of the grid
    #[arg(long)]
    size: Option<i32>,

    /// Pause after every search step, in milliseconds
    #[arg(long)]
    delay: Option<u64>,

    /// Seed for random barriers
    #[arg(long)]
    seed: Option<u64>,

    /// ASCII layout to start from (`.` free, `#` barrier, `S` start, `E` end)
    #[arg(long)]
    layout: Option<PathBuf>,
}

impl Args {
    fn apply(&self, config: &mut DemoConfig) {
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(delay) = self.delay {
            config.step_delay_ms = delay;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(layout) = &self.layout {
            config.layout = Some(layout.clone());
        }
    }
}

/// Log to `log_file` when one is configured; the terminal belongs to the
/// grid, so without a file nothing is logged unless `RUST_LOG` asks for it.
fn init_logging(log_file: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let default_filter = if log_file.is_some() { "warn" } else { "off" };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter));
    if let Some(path) = log_file {
        builder.target(Target::Pipe(Box::new(File::create(path)?)));
    }
    builder.try_init()?;
    Ok(())
}

fn load_layout(path: &Path) -> Result<Grid, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let rows: Vec<&str> = text.lines().collect();
    let grid = Grid::from_ascii(&rows)?;
    config::check_size(grid.size())?;
    log::info!("loaded {}x{} layout from {}", grid.size(), grid.size(), path.display());
    Ok(grid)
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let loaded = DemoConfig::load(&args.config);
    let mut config = loaded.as_ref().cloned().unwrap_or_default();
    args.apply(&mut config);
    config.validate()?;

    init_logging(config.log_file.as_deref())?;
    if let Err(e) = loaded {
        log::warn!("{e}; using default configuration");
    }

    let seed = config.seed.unwrap_or_else(rand::random);
    log::debug!("barrier seed {seed}");

    let editor = match &config.layout {
        Some(path) => Editor::from_grid(load_layout(path)?, seed, config.barrier_density),
        None => Editor::new(config.size, seed, config.barrier_density),
    };
    let (width, height) = editor::screen_size(editor.grid().size());

    let mut app = App::new(AppConfig {
        model: editor,
        driver: CrosstermDriver::new(),
        width,
        height,
        step_delay: Duration::from_millis(config.step_delay_ms),
    });
    let result = app.run();
    log::info!("exiting: {}", app.model().status());
    result
}

fn main() {
    if let Err(e) = run() {
        eprintln!("pathviz: {e}");
        std::process::exit(1);
    }
}

//! The application loop: [`Model`], [`Effect`], [`App`].
//!
//! The loop is the usual poll → update → draw → diff → flush cycle, with one
//! twist: a [`Effect::Search`] hands control to the model's search, and the
//! loop keeps painting and polling from inside the search's step callback
//! until it finishes or is cancelled.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use pathviz_core::{Canvas, Context, Driver, Grid, Msg, compute_frame};

type BoxError = Box<dyn std::error::Error>;

/// How long the idle loop waits for input before polling again.
const IDLE_WAIT: Duration = Duration::from_millis(16);

// ---------------------------------------------------------------------------
// Effect
// ---------------------------------------------------------------------------

/// A side-effect returned by [`Model::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Run the model's search now, animating every step.
    Search,
    /// Signal the application loop to stop.
    End,
}

// ---------------------------------------------------------------------------
// Model trait
// ---------------------------------------------------------------------------

/// The application model.
pub trait Model {
    /// Process a message, optionally returning a side-effect.
    fn update(&mut self, msg: Msg) -> Option<Effect>;

    /// Render the current state into `canvas`.
    fn draw(&self, canvas: &mut Canvas);

    /// Render a grid mid-search, when the model itself is busy.
    fn draw_step(grid: &Grid, canvas: &mut Canvas);

    /// Run the search requested by [`Effect::Search`], calling `step` after
    /// every engine step and giving up once `ctx` is done.
    fn run_search(&mut self, ctx: &Context, step: &mut dyn FnMut(&Grid));
}

// ---------------------------------------------------------------------------
// AppConfig / App
// ---------------------------------------------------------------------------

/// Configuration for creating an [`App`].
pub struct AppConfig<M: Model, D: Driver> {
    pub model: M,
    pub driver: D,
    pub width: i32,
    pub height: i32,
    /// Pause after every search step so the animation is visible.
    pub step_delay: Duration,
}

/// The main application runner.
pub struct App<M: Model, D: Driver> {
    model: M,
    driver: D,
    prev: Canvas,
    curr: Canvas,
    step_delay: Duration,
}

impl<M: Model, D: Driver> App<M, D> {
    /// Create a new application from a configuration.
    pub fn new(config: AppConfig<M, D>) -> Self {
        Self {
            model: config.model,
            driver: config.driver,
            prev: Canvas::new(config.width, config.height),
            curr: Canvas::new(config.width, config.height),
            step_delay: config.step_delay,
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Run the loop until the model returns [`Effect::End`].
    ///
    /// The driver is closed on every exit path, including errors.
    pub fn run(&mut self) -> Result<(), BoxError> {
        self.driver.init()?;
        let result = self.event_loop();
        self.driver.close();
        result
    }

    fn event_loop(&mut self) -> Result<(), BoxError> {
        let (tx, rx): (Sender<Msg>, Receiver<Msg>) = mpsc::channel();
        tx.send(Msg::Init).ok();

        loop {
            if self.process_pending(&rx, &tx)? {
                return Ok(());
            }
            self.driver.poll_msgs(&tx, IDLE_WAIT)?;
        }
    }

    /// Drain queued messages, update the model, draw, diff, and flush.
    /// Returns `true` once the model asked to stop.
    fn process_pending(&mut self, rx: &Receiver<Msg>, tx: &Sender<Msg>) -> Result<bool, BoxError> {
        let mut needs_draw = false;

        while let Ok(msg) = rx.try_recv() {
            match self.model.update(msg) {
                Some(Effect::End) => return Ok(true),
                Some(Effect::Search) => self.search(rx, tx)?,
                None => {}
            }
            needs_draw = true;
        }

        if needs_draw {
            self.model.draw(&mut self.curr);
            self.present()?;
        }

        Ok(false)
    }

    /// Run the model's search, redrawing after every step. Input is only
    /// drained, never waited for, between steps. A quit message arriving
    /// mid-search cancels the search rather than the app.
    fn search(&mut self, rx: &Receiver<Msg>, tx: &Sender<Msg>) -> Result<(), BoxError> {
        let ctx = Context::new();
        let mut failure: Option<BoxError> = None;

        let Self {
            model,
            driver,
            prev,
            curr,
            step_delay,
        } = self;

        let mut step = |grid: &Grid| {
            if failure.is_some() {
                return;
            }
            M::draw_step(grid, curr);
            let frame = compute_frame(prev, curr);
            let flushed = if frame.glyphs.is_empty() {
                Ok(())
            } else {
                driver.flush(frame)
            };
            prev.copy_from(curr);

            if let Err(e) = flushed.and_then(|()| driver.poll_msgs(tx, Duration::ZERO)) {
                failure = Some(e);
                ctx.cancel();
                return;
            }
            while let Ok(msg) = rx.try_recv() {
                if msg.is_quit() {
                    log::info!("search cancelled by user");
                    ctx.cancel();
                }
            }
            if !step_delay.is_zero() {
                thread::sleep(*step_delay);
            }
        };
        model.run_search(&ctx, &mut step);

        match failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn present(&mut self) -> Result<(), BoxError> {
        let frame = compute_frame(&self.prev, &self.curr);
        if !frame.glyphs.is_empty() {
            self.driver.flush(frame)?;
        }
        self.prev.copy_from(&self.curr);
        Ok(())
    }
}

//! Interactive terminal front-end for the pathviz A* engine.
//!
//! [`app`] holds the generic update/draw loop, [`editor`] the grid editor
//! model that drives the search, and [`config`] the on-disk settings.

pub mod app;
pub mod config;
pub mod editor;
pub mod palette;

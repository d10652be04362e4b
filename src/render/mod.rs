// src/render/mod.rs

//! Presentation of the status table.
//!
//! The coordinator only knows the [`Renderer`] trait. Production uses
//! [`TerminalRenderer`]; tests plug in a renderer that records frames.

pub mod table;

pub use table::{format_table, TerminalRenderer, TIME_PLACEHOLDER};

use crate::errors::Result;
use crate::pool::Snapshot;

/// Displays one frame of the status table.
pub trait Renderer: Send {
    fn render(&mut self, snapshot: &Snapshot) -> Result<()>;
}

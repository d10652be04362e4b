use std::sync::{Arc, Mutex};

use taskpool::errors::Result;
use taskpool::pool::Snapshot;
use taskpool::render::Renderer;

/// A renderer that keeps every frame it is asked to draw.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    frames: Arc<Mutex<Vec<Snapshot>>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the recorded frames; stays valid after the renderer
    /// has been moved into a coordinator.
    pub fn frames(&self) -> Arc<Mutex<Vec<Snapshot>>> {
        Arc::clone(&self.frames)
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.frames.lock().unwrap().push(snapshot.clone());
        Ok(())
    }
}

use color_eyre::eyre::Result;

use crate::{
    core::state::AppState, infrastructure::tui::TuiLike, presentation::components::Components,
};

/// Draws frames only when something changed since the last one
#[derive(Debug)]
pub struct Renderer {
    components: Components,
    dirty: bool,
    frames: usize,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        // The first frame is always drawn
        Self {
            components: Components::new(),
            dirty: true,
            frames: 0,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Draws if dirty. Returns whether a frame was drawn.
    pub fn render_if_dirty(&mut self, tui: &mut dyn TuiLike, state: &AppState) -> Result<bool> {
        if !self.dirty {
            return Ok(false);
        }
        self.render(tui, state)?;
        Ok(true)
    }

    pub fn render(&mut self, tui: &mut dyn TuiLike, state: &AppState) -> Result<()> {
        let components = &self.components;
        tui.draw(&mut |f| components.render(f, state))?;
        self.dirty = false;
        self.frames += 1;
        Ok(())
    }
}

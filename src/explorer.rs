//! The viewport state machine: applies navigation, then renders the resulting viewport.

use std::sync::Arc;

use crate::{
    colour::Palette,
    config::Config,
    render::Renderer,
    screen,
    viewport::{Navigation, Viewport},
};

pub struct Explorer {
    viewport: Viewport,
    renderer: Renderer,
}

impl Explorer {
    pub fn new(config: &Config) -> Self {
        let palette = Arc::new(Palette::build(config.max_iterations()));
        Self {
            viewport: config.initial_viewport(),
            renderer: Renderer::new(config.frame(), config.max_iterations(), palette),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn frame(&self) -> screen::Size {
        self.renderer.frame()
    }

    /// Apply one cycle's navigation. Returns whether the viewport changed.
    pub fn navigate(&mut self, navigation: Navigation) -> bool {
        let next = self.viewport.apply(navigation);
        let changed = next != self.viewport;
        self.viewport = next;
        changed
    }

    /// Render the current viewport. The renderer gets a copy, so the frame reflects the viewport
    /// as it was when rendering started.
    pub fn render(&mut self) -> &[u8] {
        let snapshot = self.viewport;
        self.renderer.render(snapshot)
    }

    /// One update cycle: navigate, then render.
    pub fn update(&mut self, navigation: Navigation) -> &[u8] {
        self.navigate(navigation);
        self.render()
    }

    /// The last rendered frame.
    pub fn pixels(&self) -> &[u8] {
        self.renderer.pixels()
    }
}

//! Mock tile renderer for tests.

use std::sync::Mutex;

use crate::coord::TileAddress;
use crate::tile::renderer::{RenderOutcome, TileRenderer};

/// Renderer that returns a preset outcome and records requested addresses.
pub struct MockTileRenderer {
    outcome: RenderOutcome,
    panic_message: Option<&'static str>,
    requests: Mutex<Vec<TileAddress>>,
}

impl MockTileRenderer {
    /// Renderer that always returns a clone of `outcome`.
    pub fn with_outcome(outcome: RenderOutcome) -> Self {
        Self {
            outcome,
            panic_message: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Renderer that panics on every request, for exercising the HTTP
    /// layer's panic containment.
    pub fn panicking(message: &'static str) -> Self {
        Self {
            outcome: RenderOutcome::rendered(Vec::new(), 0),
            panic_message: Some(message),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Addresses requested so far, in call order.
    pub fn requests(&self) -> Vec<TileAddress> {
        self.requests.lock().map(|g| g.clone()).unwrap_or_default()
    }
}

impl TileRenderer for MockTileRenderer {
    fn render_tile(&self, addr: &TileAddress) -> RenderOutcome {
        if let Ok(mut guard) = self.requests.lock() {
            guard.push(*addr);
        }
        if let Some(message) = self.panic_message {
            panic!("{}", message);
        }
        self.outcome.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_preset_outcome_and_records() {
        let renderer =
            MockTileRenderer::with_outcome(RenderOutcome::rendered(vec![1, 2], 5));
        let addr = TileAddress::new(3, 1, 2).unwrap();

        let outcome = renderer.render_tile(&addr);
        assert_eq!(outcome.bytes(), &[1, 2]);
        assert_eq!(renderer.requests(), vec![addr]);
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn test_panicking_renderer_panics() {
        let renderer = MockTileRenderer::panicking("boom");
        let addr = TileAddress::new(0, 0, 0).unwrap();
        renderer.render_tile(&addr);
    }
}

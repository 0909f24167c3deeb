//! Tile renderer trait and outcome types.

use crate::coord::TileAddress;
use std::fmt;

/// Pipeline stage in which a tile request failed.
///
/// Stages run in declaration order. Invalid addresses are rejected before
/// the pipeline starts (at `TileAddress` construction), so they have no
/// stage here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStage {
    /// Fetching the dataset from the cache
    Loading,
    /// Projecting and clipping features to the tile extent
    Filtering,
    /// Painting features onto the pixel buffer
    Rendering,
    /// Encoding the pixel buffer to the wire format
    Encoding,
}

impl fmt::Display for RenderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RenderStage::Loading => "loading",
            RenderStage::Filtering => "filtering",
            RenderStage::Rendering => "rendering",
            RenderStage::Encoding => "encoding",
        };
        write!(f, "{}", name)
    }
}

/// How a tile request was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderStatus {
    /// Features were rendered and encoded normally.
    Rendered {
        /// Number of features that intersected the tile and were drawn
        features_drawn: usize,
    },
    /// No dataset was available; the empty fallback tile was served.
    NoData,
    /// A pipeline stage failed; the empty fallback tile was served.
    Degraded {
        /// Stage that failed
        stage: RenderStage,
    },
}

/// Result of rendering one tile: the bytes to serve plus how they were
/// produced.
///
/// Every outcome carries servable bytes. Failure is expressed through
/// [`RenderStatus`], never through an absent body, so the HTTP layer can
/// stay a straight passthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutcome {
    bytes: Vec<u8>,
    status: RenderStatus,
}

impl RenderOutcome {
    /// Outcome for a normally rendered tile.
    pub fn rendered(bytes: Vec<u8>, features_drawn: usize) -> Self {
        Self {
            bytes,
            status: RenderStatus::Rendered { features_drawn },
        }
    }

    /// Outcome for a request served the fallback tile because no dataset
    /// was available.
    pub fn no_data(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            status: RenderStatus::NoData,
        }
    }

    /// Outcome for a request served the fallback tile after a stage failed.
    pub fn degraded(bytes: Vec<u8>, stage: RenderStage) -> Self {
        Self {
            bytes,
            status: RenderStatus::Degraded { stage },
        }
    }

    /// The encoded tile bytes to serve.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the outcome, returning the encoded tile bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// How the tile was produced.
    pub fn status(&self) -> &RenderStatus {
        &self.status
    }

    /// True when the fallback tile was served in place of real output.
    pub fn is_degraded(&self) -> bool {
        matches!(self.status, RenderStatus::Degraded { .. })
    }
}

/// Renders map tiles for validated addresses.
///
/// Implementations never fail: whatever happens internally, a servable
/// byte body comes back. The HTTP layer maps outcomes straight onto
/// `200 OK` responses.
pub trait TileRenderer: Send + Sync {
    /// Render the tile at `addr`.
    fn render_tile(&self, addr: &TileAddress) -> RenderOutcome;
}

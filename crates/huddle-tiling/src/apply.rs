//! Push computed placements to a surface, animating when enabled.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use huddle_common::types::{Rect, TileId};

use crate::animation::Transition;
use crate::layout::Placement;
use crate::surface::TileSurface;

/// Tracks what the surface currently shows and any moves still in flight.
///
/// Surface failures are logged and skipped; one broken view never stops
/// the rest of the layout from landing.
#[derive(Debug)]
pub struct LayoutApplier {
    animate: bool,
    duration: Duration,
    current: HashMap<TileId, Rect>,
    transitions: HashMap<TileId, Transition>,
}

impl LayoutApplier {
    pub fn new(animate: bool, duration: Duration) -> Self {
        Self {
            animate,
            duration,
            current: HashMap::new(),
            transitions: HashMap::new(),
        }
    }

    /// Apply a fresh layout. Tiles no longer present are removed from the
    /// surface; new tiles jump straight to their rect; moved tiles animate.
    pub fn apply(&mut self, placements: &[Placement], now: Instant, surface: &mut dyn TileSurface) {
        let gone: Vec<TileId> = self
            .current
            .keys()
            .filter(|id| !placements.iter().any(|p| p.id == **id))
            .copied()
            .collect();
        for id in gone {
            self.current.remove(&id);
            self.transitions.remove(&id);
            if let Err(e) = surface.remove(id) {
                tracing::warn!(tile = %id, error = %e, "Failed to remove tile view");
            }
        }

        for placement in placements {
            let shown = self.shown_rect(placement.id, now);
            match shown {
                Some(from) if from == placement.rect => {
                    self.transitions.remove(&placement.id);
                }
                Some(from) if self.animate && !self.duration.is_zero() => {
                    self.transitions.insert(
                        placement.id,
                        Transition::new(from, placement.rect, now, self.duration),
                    );
                    self.current.insert(placement.id, placement.rect);
                }
                _ => {
                    self.transitions.remove(&placement.id);
                    self.current.insert(placement.id, placement.rect);
                    write(surface, placement.id, placement.rect);
                }
            }
        }

        tracing::debug!(
            tiles = placements.len(),
            animating = self.transitions.len(),
            "Layout applied"
        );
    }

    /// Advance running animations. Returns `true` while any remain.
    pub fn tick(&mut self, now: Instant, surface: &mut dyn TileSurface) -> bool {
        let mut finished = Vec::new();
        for (id, transition) in &self.transitions {
            write(surface, *id, transition.sample(now));
            if transition.is_finished(now) {
                finished.push(*id);
            }
        }
        for id in finished {
            self.transitions.remove(&id);
        }
        self.is_animating()
    }

    pub fn is_animating(&self) -> bool {
        !self.transitions.is_empty()
    }

    /// The target rect last applied for a tile.
    pub fn current(&self, id: TileId) -> Option<Rect> {
        self.current.get(&id).copied()
    }

    /// Forget all state without touching the surface.
    pub fn clear(&mut self) {
        self.current.clear();
        self.transitions.clear();
    }

    fn shown_rect(&self, id: TileId, now: Instant) -> Option<Rect> {
        match self.transitions.get(&id) {
            Some(t) => Some(t.sample(now)),
            None => self.current.get(&id).copied(),
        }
    }
}

fn write(surface: &mut dyn TileSurface, id: TileId, rect: Rect) {
    if let Err(e) = surface.place(id, rect) {
        tracing::warn!(tile = %id, error = %e, "Failed to place tile view");
    }
}

//! The RoomController owns participants, tiles, chat, and UI state for one
//! room session.
//!
//! Every handler runs to completion on `&mut self`. Anything that changes
//! the tile set or the container only schedules a layout pass; the pass
//! itself runs from [`RoomController::poll`] once the debounce expires.

mod chat;
mod events;
mod join;
mod media;
mod tiles;


use std::time::Duration;

use huddle_common::{
    EventBus, NotificationQueue, Rect, RoomEvent, RoomId, RoomPhase, TileId,
};
use huddle_config::schema::{LayoutConfig, RoomConfig};
use huddle_config::HuddleConfig;
use huddle_social::ChatLog;
use huddle_tiling::{LayoutApplier, LayoutOptions, TileManager, TileSurface};
use tokio::time::Instant;

use crate::debounce::Debouncer;
use crate::participant::Participant;
use crate::permissions::PermissionChecker;
use crate::session::MediaSession;
use crate::token::TokenProvider;
use crate::ui_state::{reduce, UiAction, UiState};

/// Frame interval used while tile animations are running.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Layout options for the engine, taken from the `[layout]` config section.
pub fn layout_options(config: &LayoutConfig) -> LayoutOptions {
    LayoutOptions {
        min_ratio: config.min_ratio,
        max_ratio: config.max_ratio,
        fixed_ratio: config.fixed_ratio,
        big_percentage: config.big_percentage,
        big_fixed_ratio: config.big_fixed_ratio,
        big_min_ratio: config.big_min_ratio,
        big_max_ratio: config.big_max_ratio,
        big_first: config.big_first,
        animate: config.animate,
    }
}

pub struct RoomController {
    config: RoomConfig,
    session: Box<dyn MediaSession>,
    tokens: Box<dyn TokenProvider>,
    permissions: Option<Box<dyn PermissionChecker>>,
    surface: Box<dyn TileSurface>,
    tiles: TileManager,
    applier: LayoutApplier,
    debounce: Debouncer,
    viewport: Rect,
    phase: RoomPhase,
    room_id: Option<RoomId>,
    local: Option<Participant>,
    remotes: Vec<Participant>,
    chat: ChatLog,
    ui: UiState,
    notifications: NotificationQueue,
    events: EventBus,
    layout_passes: u64,
}

impl RoomController {
    pub fn new(
        config: &HuddleConfig,
        session: Box<dyn MediaSession>,
        tokens: Box<dyn TokenProvider>,
        surface: Box<dyn TileSurface>,
    ) -> Self {
        let options = layout_options(&config.layout);
        let animation = Duration::from_millis(config.layout.animation_ms.into());
        Self {
            config: config.room.clone(),
            session,
            tokens,
            permissions: None,
            surface,
            applier: LayoutApplier::new(options.animate, animation),
            tiles: TileManager::with_options(options),
            debounce: Debouncer::new(Duration::from_millis(config.room.debounce_ms)),
            viewport: Rect::sized(0.0, 0.0),
            phase: RoomPhase::Idle,
            room_id: None,
            local: None,
            remotes: Vec::new(),
            chat: ChatLog::new(),
            ui: UiState::default(),
            notifications: NotificationQueue::new(16),
            events: EventBus::default(),
            layout_passes: 0,
        }
    }

    /// Install a platform permission check, run before publishing when
    /// `room.request_permissions` is set.
    pub fn with_permissions(mut self, checker: Box<dyn PermissionChecker>) -> Self {
        self.permissions = Some(checker);
        self
    }

    pub fn with_viewport(mut self, width: f64, height: f64) -> Self {
        self.viewport = Rect::sized(width, height);
        self
    }

    // -- Accessors --

    pub fn phase(&self) -> RoomPhase {
        self.phase
    }

    pub fn room_id(&self) -> Option<&RoomId> {
        self.room_id.as_ref()
    }

    pub fn local(&self) -> Option<&Participant> {
        self.local.as_ref()
    }

    pub fn remotes(&self) -> &[Participant] {
        &self.remotes
    }

    /// Local participant first, then remotes in join order.
    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.local.iter().chain(self.remotes.iter())
    }

    pub fn tiles(&self) -> &TileManager {
        &self.tiles
    }

    pub fn big_tile(&self) -> Option<TileId> {
        self.tiles.big_id()
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn chat(&self) -> &ChatLog {
        &self.chat
    }

    pub fn ui(&self) -> UiState {
        self.ui
    }

    pub fn notifications(&mut self) -> &mut NotificationQueue {
        &mut self.notifications
    }

    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<RoomEvent> {
        self.events.subscribe()
    }

    /// Number of layout passes applied so far.
    pub fn layout_passes(&self) -> u64 {
        self.layout_passes
    }

    /// Target rect of a tile after the last layout pass.
    pub fn placement(&self, tile: TileId) -> Option<Rect> {
        self.applier.current(tile)
    }

    pub fn layout_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    // -- Layout scheduling --

    /// Record the container size and schedule a recompute.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport = Rect::sized(width.max(0.0), height.max(0.0));
        self.schedule_layout();
    }

    fn schedule_layout(&mut self) {
        self.debounce.schedule(Instant::now());
    }

    /// Run the layout pass if its debounce expired, then advance animations.
    /// Returns `true` when a layout pass ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        let due = self.debounce.take_due(now);
        if due {
            self.relayout(now);
        }
        if self.applier.is_animating() {
            self.applier.tick(now.into_std(), self.surface.as_mut());
        }
        due
    }

    /// When `poll` next has work: the debounce deadline, or the next
    /// animation frame.
    pub fn next_deadline(&self, now: Instant) -> Option<Instant> {
        let frame = self.applier.is_animating().then(|| now + FRAME_INTERVAL);
        match (self.debounce.deadline(), frame) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn relayout(&mut self, now: Instant) {
        let placements = self.tiles.compute(self.viewport);
        self.applier
            .apply(&placements, now.into_std(), self.surface.as_mut());
        self.layout_passes += 1;
        tracing::debug!(
            tiles = placements.len(),
            width = self.viewport.width,
            height = self.viewport.height,
            "Layout recomputed"
        );
        self.events.publish(RoomEvent::LayoutUpdated {
            tiles: placements.len(),
        });
    }

    fn dispatch_ui(&mut self, action: UiAction) {
        self.ui = reduce(self.ui, action);
    }

    /// Find the participant (local or remote) bound to a tile.
    pub fn participant_for_tile(&self, tile: TileId) -> Option<&Participant> {
        self.participants().find(|p| p.tile == tile)
    }
}

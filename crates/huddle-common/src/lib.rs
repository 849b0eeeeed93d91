pub mod errors;
pub mod events;
pub mod id;
pub mod notifications;
pub mod types;

pub use errors::{ConfigError, HuddleError, SessionError};
pub use events::{EventBus, RoomEvent};
pub use id::{new_id, RoomId};
pub use notifications::{Notification, NotificationQueue};
pub use types::{ConnectionId, Rect, RoomPhase, TileId};

pub type Result<T> = std::result::Result<T, HuddleError>;

pub mod chat;
pub mod identity;
pub mod protocol;

pub use chat::{ChatEntry, ChatLog};
pub use identity::{client_data, guest_nickname, parse_nickname};
pub use protocol::{ChatPayload, PayloadError};

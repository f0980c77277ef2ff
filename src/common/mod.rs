pub mod commands;
pub mod events;
pub mod types;

pub use commands::FetchCommand;
pub use events::FetchEvent;
pub use types::{ChatMessage, Origin, Place, RequestId};

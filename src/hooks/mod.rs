pub mod use_auth;
pub mod use_feed;

pub use use_auth::{use_auth, UseAuthHandle};
pub use use_feed::{use_feed, UseFeedHandle};

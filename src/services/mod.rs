pub mod api_client;
pub mod auth_service;
pub mod backend;
pub mod feed_service;
pub mod notify_service;
pub mod submit_service;

pub use api_client::ApiClient;
pub use auth_service::{AuthService, SessionCheck};
pub use backend::{LocalStore, MemoryStore, RequestBackend};
pub use feed_service::{FeedFilter, FeedService};
pub use notify_service::{NotificationPort, WhatsAppRelay};
pub use submit_service::SubmitService;

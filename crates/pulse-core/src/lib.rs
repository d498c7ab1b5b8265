pub mod config;
pub mod types;

pub use config::{Site, load_sites};
pub use types::{Notification, color};

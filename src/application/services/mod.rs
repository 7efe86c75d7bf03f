/// Hardcoded demo data.
pub mod catalog;
/// Transient notification queue.
pub mod notification_manager;

pub use notification_manager::NotificationManager;

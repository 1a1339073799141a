//! Domain objects owned by the client itself.

pub mod notification;
pub mod session;

pub use notification::{Notification, NotificationColor};
pub use session::Session;

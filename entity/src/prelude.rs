pub use super::notification::Entity as Notification;
pub use super::payment::Entity as Payment;
pub use super::site::Entity as Site;
pub use super::user::Entity as User;

pub mod messages;
pub mod replies;

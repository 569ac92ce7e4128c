pub mod handlers;
pub mod identity;
pub mod messages;
pub mod middleware;
pub mod router;

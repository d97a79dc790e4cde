//! Route handlers organized by resource

pub mod health;
pub mod reviews;
pub mod spaces;
pub mod users;

//! Domain models with validation at construction
//!
//! All request input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod user;
pub mod space;
pub mod review;

pub use validation::ValidationError;
pub use user::{normalize_email, NewUser};
pub use space::NewSpace;
pub use review::{NewReview, Rating};

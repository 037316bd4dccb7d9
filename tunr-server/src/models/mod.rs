//! Request-side domain types
//!
//! Form input is parsed into these types at the HTTP boundary. Invalid input
//! returns ValidationError, not panic.

pub mod artist;
pub mod validation;

pub use artist::ArtistForm;
pub use validation::ValidationError;

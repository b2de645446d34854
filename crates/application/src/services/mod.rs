//! Application Services
//!
//! Use cases layered over the listing store: submissions, ratings, visits,
//! and the read views the directory pages are built from.

mod directory;
mod session;

pub use directory::*;
pub use session::*;

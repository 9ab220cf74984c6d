//! imfuse-fusion
//!
//! Imaging-fusion classification. Pure functions, no I/O: a rule table maps a
//! [`ConfigVector`] onto one of the closed set of [`FusionMode`]s, and the
//! generator expands the vector into the ordered registration list the form
//! controller works from.

pub mod classify;
pub mod error;
pub mod generate;
pub mod mode;
pub mod outcome;
pub mod session;

pub use classify::classify;
pub use generate::generate;
pub use mode::{FusionMode, ModeFamily};
pub use outcome::FusionOutcome;
pub use session::RegistrationSession;

pub use imfuse_core::models::vector::ConfigVector;

//! imfuse-core
//!
//! Pure domain types for imaging-fusion requests. No classification logic
//! lives here; this is the shared vocabulary between the fusion engine and
//! the service that exposes it to the form-state controller.

pub mod error;
pub mod models;

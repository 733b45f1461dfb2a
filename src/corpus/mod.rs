//! Sample corpus module
//!
//! Loads recorded response bodies and projects the subtree each declared
//! field addresses.

mod loader;
mod project;

pub use loader::load_bodies;
pub use project::{field_samples, project, resolve};

//! Generate Go encode/decode wrapper functions for a list of data-structure
//! names, one template per serialization backend.

pub mod backends;
pub mod check;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod expand;
pub mod layouts;
pub mod model;

pub use error::{GenError, Result};
pub use expand::{expand, expand_batch};
pub use model::TypeName;

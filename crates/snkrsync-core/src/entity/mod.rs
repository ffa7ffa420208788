//! Shoe entity module.
//!
//! This module contains the core `Shoe` entity shared by the selection,
//! status, and channel layers.

mod model;

pub use model::Shoe;

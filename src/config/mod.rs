//! Configuration loading and item metadata defaults

mod configuration;
mod defaults;
pub mod keys;

pub use configuration::Configuration;
pub use defaults::{ConfiguredField, ItemDefaults};

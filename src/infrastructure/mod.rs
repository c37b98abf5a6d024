//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module resolves where FridgeChef keeps its files on the host: the data
//! directory for trace exports and the config directory for `config.toml`,
//! following the XDG base directory conventions.

pub mod paths;

pub use paths::{expand_tilde, get_config_dir, get_data_dir};

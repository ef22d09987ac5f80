//! Configuration loading for the shift scheduler.
//!
//! This module loads the server settings and optional seed shifts from
//! YAML files.
//!
//! # Example
//!
//! ```no_run
//! use shift_scheduler::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Match policy: {:?}", config.server().match_policy);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{SeedConfig, SeedShift, ServerConfig};

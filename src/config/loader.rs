//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the server
//! configuration and seed shifts from YAML files.

use std::fs;
use std::path::Path;

use uuid::Uuid;

use crate::error::{SchedulerError, SchedulerResult};
use crate::models::{Shift, ShiftDraft};
use crate::store::InMemoryShiftStore;

use super::types::{SeedConfig, ServerConfig};

/// Loads and provides access to the service configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// ├── server.yaml   # Bind address, log filter, match policy
/// └── shifts.yaml   # Optional seed shifts
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_scheduler::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config")?;
/// println!("Binding {}", loader.server().bind_addr());
/// # Ok::<(), shift_scheduler::error::SchedulerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    server: ServerConfig,
    seed: Vec<Shift>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// `server.yaml` is required; `shifts.yaml` is optional.
    pub fn load<P: AsRef<Path>>(path: P) -> SchedulerResult<Self> {
        let path = path.as_ref();

        let server = Self::load_yaml::<ServerConfig>(&path.join("server.yaml"))?;

        let seed_path = path.join("shifts.yaml");
        let seed_config = if seed_path.exists() {
            Self::load_yaml::<SeedConfig>(&seed_path)?
        } else {
            SeedConfig::default()
        };

        let seed = seed_config
            .shifts
            .into_iter()
            .map(|s| {
                let id = s.id.unwrap_or_else(|| Uuid::new_v4().to_string());
                if id.trim().is_empty() {
                    return Err(SchedulerError::InvalidConfig {
                        message: "seed shift id must not be blank".to_string(),
                    });
                }
                Ok(Shift::from_draft(
                    id,
                    ShiftDraft {
                        date: s.date,
                        start_time: s.start_time,
                        end_time: s.end_time,
                        name: s.name,
                    },
                ))
            })
            .collect::<SchedulerResult<Vec<_>>>()?;

        Ok(Self { server, seed })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> SchedulerResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| SchedulerError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| SchedulerError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Returns the seed shifts.
    pub fn seed(&self) -> &[Shift] {
        &self.seed
    }

    /// Builds an in-memory store holding the seed shifts.
    ///
    /// Conflicting seeds (repeated ids, taken windows) are a configuration
    /// error.
    pub fn build_store(&self) -> SchedulerResult<InMemoryShiftStore> {
        InMemoryShiftStore::seeded(self.server.match_policy, self.seed.clone()).map_err(|e| {
            SchedulerError::InvalidConfig {
                message: format!("invalid seed shifts: {}", e),
            }
        })
    }
}

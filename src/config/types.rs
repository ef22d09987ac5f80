//! Configuration types for the shift scheduler.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::checker::MatchPolicy;
use crate::models::TimeOfDay;

/// Server settings from `server.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
    /// `tracing-subscriber` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// Which existing shifts count as duplicates.
    #[serde(default)]
    pub match_policy: MatchPolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_filter: default_log_filter(),
            match_policy: MatchPolicy::default(),
        }
    }
}

impl ServerConfig {
    /// The `host:port` string to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_filter() -> String {
    "shift_scheduler=info".to_string()
}

/// Seed file structure (`shifts.yaml`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedConfig {
    /// Shifts loaded into the store at startup.
    #[serde(default)]
    pub shifts: Vec<SeedShift>,
}

/// One shift in the seed file.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedShift {
    /// Fixed id; a fresh one is generated when absent.
    #[serde(default)]
    pub id: Option<String>,
    /// The shift date.
    pub date: NaiveDate,
    /// When the shift starts.
    pub start_time: TimeOfDay,
    /// When the shift ends.
    pub end_time: TimeOfDay,
    /// Optional display label.
    #[serde(default)]
    pub name: Option<String>,
}

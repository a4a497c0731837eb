//! Runtime configuration.
//!
//! Values are layered with figment: built-in defaults first, then any
//! `ROLLCALL_*` environment variable (e.g. `ROLLCALL_DATABASE_URL`).

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::RollcallError;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub static_dir: PathBuf,
    pub loglevel: String,
    pub max_connections: u32,
    /// Run the bundled `CREATE TABLE IF NOT EXISTS` DDL at startup.
    pub bootstrap_schema: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:attendance.db".to_string(),
            listen_addr: "0.0.0.0:3000".to_string(),
            static_dir: PathBuf::from("public"),
            loglevel: "info".to_string(),
            max_connections: 10,
            bootstrap_schema: true,
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default())).merge(Env::prefixed("ROLLCALL_"))
    }

    pub fn load() -> Result<Self, RollcallError> {
        Ok(Self::figment().extract()?)
    }
}

// SPDX-FileCopyrightText: 2026 Furrow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports `./furrow.toml` > `~/.config/furrow/furrow.toml` > `/etc/furrow/furrow.toml`
//! with environment variable overrides via the `FURROW_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::FurrowConfig;

/// System-wide configuration file.
pub const SYSTEM_CONFIG: &str = "/etc/furrow/furrow.toml";

/// Working-directory configuration file.
pub const LOCAL_CONFIG: &str = "furrow.toml";

/// Per-user configuration file under the XDG config directory.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("furrow/furrow.toml"))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/furrow/furrow.toml`
/// 3. `~/.config/furrow/furrow.toml`
/// 4. `./furrow.toml`
/// 5. `FURROW_*` environment variables
pub fn load_config() -> Result<FurrowConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no files, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<FurrowConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(FurrowConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<FurrowConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(FurrowConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for config loading, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(FurrowConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG))
        .merge(env_provider())
}

/// Environment provider mapping `FURROW_<SECTION>_<KEY>` to `section.key`.
///
/// Uses `Env::map()` rather than `Env::split("_")` because keys such as
/// `log_level` and `fallback_confidence` contain underscores.
fn env_provider() -> Env {
    Env::prefixed("FURROW_").map(|key| {
        let mapped = key
            .as_str()
            .to_ascii_lowercase()
            .replacen("service_", "service.", 1)
            .replacen("server_", "server.", 1)
            .replacen("classifier_", "classifier.", 1)
            .replacen("nlp_", "nlp.", 1)
            .replacen("metrics_", "metrics.", 1);
        mapped.into()
    })
}

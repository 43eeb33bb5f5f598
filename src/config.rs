//! Host configuration parsed from environment variables.
//!
//! Leptos reads its own settings (`site-addr`, `site-root`, ...) from
//! `[package.metadata.leptos]` and `LEPTOS_*` variables. This module only adds
//! the host-level overrides on top.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;

use crate::error::ConfigError;

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Replaces the port of the Leptos `site-addr` when set.
    pub port: Option<u16>,
}

impl HostConfig {
    /// Build host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port override
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        Ok(Self { port })
    }

    /// Address to bind: the Leptos address with the port override applied.
    pub fn bind_addr(&self, site_addr: SocketAddr) -> SocketAddr {
        match self.port {
            Some(port) => SocketAddr::new(site_addr.ip(), port),
            None => site_addr,
        }
    }
}

/// Tracing filter directive from `RUST_LOG`, default `info`.
pub fn log_filter() -> String {
    resolve_log_filter(std::env::var("RUST_LOG").ok().as_deref())
}

fn resolve_log_filter(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_LOG_FILTER)
        .to_owned()
}

fn parse_port(raw: Option<&str>) -> Result<Option<u16>, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<u16>()
            .ok()
            .filter(|port| *port != 0)
            .map(Some)
            .ok_or_else(|| ConfigError::InvalidPort(value.to_owned())),
    }
}

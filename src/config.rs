//! Server configuration parsed from environment variables.
//!
//! - `HOST` (default `0.0.0.0`) and `PORT` (default `4173`)
//! - `PUBLIC_DIR`: directory holding the JSON data files (default
//!   `<crate>/public`)
//! - `ALLOWED_HOSTS`: comma list of accepted `Host` names; `*` or empty
//!   accepts any. Entries starting with `.` also match subdomains.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 4173;
pub const DEFAULT_ALLOWED_HOSTS: &str = "acw.gixia.org,localhost";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT `{0}`")]
    InvalidPort(String),
    #[error("invalid bind address `{0}`")]
    InvalidAddr(String),
}

/// Which `Host` header values the server answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostPolicy {
    Any,
    Only(Vec<String>),
}

impl HostPolicy {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let entries: Vec<String> = raw
            .split(',')
            .map(|s| s.trim().to_ascii_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        if entries.is_empty() || entries.iter().any(|s| s == "*") {
            Self::Any
        } else {
            Self::Only(entries)
        }
    }

    /// Whether a request carrying `host` (a `Host` header value, port
    /// included) is served.
    ///
    /// IP literals, `localhost` and `*.localhost` are always accepted.
    #[must_use]
    pub fn allows(&self, host: Option<&str>) -> bool {
        let entries = match self {
            Self::Any => return true,
            Self::Only(entries) => entries,
        };
        let Some(name) = host.map(host_name) else {
            return false;
        };
        if name == "localhost" || name.ends_with(".localhost") || is_ip_literal(&name) {
            return true;
        }
        entries.iter().any(|entry| match entry.strip_prefix('.') {
            Some(domain) => name == domain || name.ends_with(entry.as_str()),
            None => name == *entry,
        })
    }
}

/// Lowercased host without the port; IPv6 literals keep their brackets.
fn host_name(header: &str) -> String {
    let header = header.trim();
    let name = if header.starts_with('[') {
        header.find(']').map_or(header, |end| &header[..=end])
    } else {
        header.split(':').next().unwrap_or(header)
    };
    name.to_ascii_lowercase()
}

fn is_ip_literal(name: &str) -> bool {
    name.trim_start_matches('[').trim_end_matches(']').parse::<IpAddr>().is_ok()
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub public_dir: PathBuf,
    pub allowed_hosts: HostPolicy,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an unparseable `PORT` or `HOST`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup; missing keys use the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an unparseable `PORT` or `HOST`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let ip: IpAddr = host.trim().parse().map_err(|_| ConfigError::InvalidAddr(host.clone()))?;

        let public_dir = lookup("PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_public_dir);
        let allowed_hosts =
            HostPolicy::parse(&lookup("ALLOWED_HOSTS").unwrap_or_else(|| DEFAULT_ALLOWED_HOSTS.to_owned()));

        Ok(Self { addr: SocketAddr::new(ip, port), public_dir, allowed_hosts })
    }
}

fn default_public_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public")
}

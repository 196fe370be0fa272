// SPDX-License-Identifier: MIT OR Apache-2.0

//! Connection settings for the Proxmox VE API
//!
//! The settings are read once at process start and treated as read-only
//! for the remainder of the process. Loading is idempotent and performs
//! no I/O beyond the environment lookup itself.
//!
//! # Example
//!
//! ```no_run
//! use pve_config_rs::config::ConnectionSettings;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = ConnectionSettings::from_env()?;
//! assert!(!settings.host.is_empty());
//! # Ok(())
//! # }
//! ```

use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{PveError, Result};

/// Environment variable holding the Proxmox host name or IP.
pub const ENV_PROXMOX_HOST: &str = "PROXMOX_HOST";
/// Environment variable holding the API port.
pub const ENV_PROXMOX_PORT: &str = "PROXMOX_PORT";
/// Environment variable holding the user id (`name@realm`).
pub const ENV_PROXMOX_USER: &str = "PROXMOX_USER";
/// Environment variable holding the password.
pub const ENV_PROXMOX_PASSWORD: &str = "PROXMOX_PASSWORD";
/// Environment variable holding the target node name.
pub const ENV_PROXMOX_NODE: &str = "PROXMOX_NODE";
/// Environment variable toggling TLS certificate verification.
pub const ENV_PROXMOX_VERIFY_SSL: &str = "PROXMOX_VERIFY_SSL";

/// Default host placeholder.
pub const DEFAULT_HOST: &str = "your_proxmox_ip";
/// Default API port of a Proxmox VE installation.
pub const DEFAULT_PORT: u16 = 8006;
/// Default user placeholder.
pub const DEFAULT_USER: &str = "your_user";
/// Default password placeholder.
pub const DEFAULT_PASSWORD: &str = "your_password";
/// Default node name of a fresh Proxmox VE installation.
pub const DEFAULT_NODE: &str = "pve";

/// Connection settings for a single Proxmox VE host.
///
/// Populated once at startup, either from the process environment via
/// [`ConnectionSettings::from_env`] or from a host application's own
/// configuration document via serde.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionSettings {
    /// Hostname or IP literal of the Proxmox host.
    pub host: String,

    /// API port.
    pub port: u16,

    /// User id, conventionally `name@realm` (e.g. `root@pam`).
    pub user: String,

    /// Password. Never included in `Debug` output.
    pub password: String,

    /// Name of the cluster node the client targets.
    pub node: String,

    /// Whether the TLS certificate of the host is verified.
    pub verify_ssl: bool,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            user: DEFAULT_USER.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            node: DEFAULT_NODE.to_string(),
            verify_ssl: false,
        }
    }
}

impl ConnectionSettings {
    /// Load settings from the process environment.
    ///
    /// Each `PROXMOX_*` variable that is present and non-empty overrides
    /// the documented default. Safe to call multiple times; two calls
    /// under the same environment yield equal settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `PROXMOX_PORT` is set to a non-empty value
    /// that does not parse as a decimal port number.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load settings through an arbitrary lookup function.
    ///
    /// This is the whole loading contract; [`ConnectionSettings::from_env`]
    /// delegates here with a process-environment lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the port value is present, non-empty and not
    /// a valid decimal port number. A malformed value is never silently
    /// replaced by the default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(host) = non_empty(lookup(ENV_PROXMOX_HOST)) {
            settings.host = host;
        }
        if let Some(port) = non_empty(lookup(ENV_PROXMOX_PORT)) {
            settings.port = port.parse().map_err(|e| {
                PveError::Config(format!(
                    "{ENV_PROXMOX_PORT} must be a decimal port number, got {port:?}: {e}"
                ))
            })?;
        }
        if let Some(user) = non_empty(lookup(ENV_PROXMOX_USER)) {
            settings.user = user;
        }
        if let Some(password) = non_empty(lookup(ENV_PROXMOX_PASSWORD)) {
            settings.password = password;
        }
        if let Some(node) = non_empty(lookup(ENV_PROXMOX_NODE)) {
            settings.node = node;
        }
        if let Some(flag) = non_empty(lookup(ENV_PROXMOX_VERIFY_SSL)) {
            // Deliberately an exact case-insensitive match against "true",
            // not a general boolean parser: "1", "yes" etc. stay false.
            settings.verify_ssl = flag.eq_ignore_ascii_case("true");
        }

        Ok(settings)
    }

    /// Base URL of the Proxmox VE JSON API (`https://host:port/api2/json`).
    ///
    /// The API is always addressed over HTTPS; [`Self::verify_ssl`] only
    /// governs whether the certificate is checked.
    ///
    /// # Errors
    ///
    /// Returns an error if the host does not form a valid URL.
    pub fn api_base_url(&self) -> Result<Url> {
        let raw = format!("https://{}:{}/api2/json", self.host, self.port);
        Url::parse(&raw)
            .map_err(|e| PveError::Config(format!("invalid API base URL {raw:?}: {e}")))
    }

    /// The user name portion of the user id, without the realm suffix.
    #[must_use]
    pub fn username(&self) -> &str {
        self.user
            .rsplit_once('@')
            .map_or(self.user.as_str(), |(name, _)| name)
    }

    /// The authentication realm of the user id (e.g. `pam`), if any.
    #[must_use]
    pub fn realm(&self) -> Option<&str> {
        self.user.rsplit_once('@').map(|(_, realm)| realm)
    }
}

// Manual impl so the password cannot leak through diagnostic output.
impl fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("node", &self.node)
            .field("verify_ssl", &self.verify_ssl)
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

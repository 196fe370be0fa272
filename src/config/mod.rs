// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration management for Proxmox VE clients
//!
//! This module provides the settings that parametrize a Proxmox VE API
//! client and the monitor front-end built on top of it.
//!
//! # Environment Variables
//!
//! The following environment variables are supported. A variable that is
//! unset or set to the empty string falls back to its documented default.
//!
//! - `PROXMOX_HOST` - Hostname or IP of the Proxmox host (default: `your_proxmox_ip`)
//! - `PROXMOX_PORT` - API port, decimal (default: `8006`)
//! - `PROXMOX_USER` - User id, conventionally `name@realm` (default: `your_user`)
//! - `PROXMOX_PASSWORD` - Password (default: `your_password`)
//! - `PROXMOX_NODE` - Target cluster node name (default: `pve`)
//! - `PROXMOX_VERIFY_SSL` - `true` (any casing) enables certificate verification (default: `false`)
//!
//! # Example
//!
//! ```no_run
//! use pve_config_rs::config::ConnectionSettings;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = ConnectionSettings::from_env()?;
//!
//! println!("Targeting node {} at {}", settings.node, settings.api_base_url()?);
//! # Ok(())
//! # }
//! ```

mod connection;
mod monitor;

pub use connection::{
    ConnectionSettings, DEFAULT_HOST, DEFAULT_NODE, DEFAULT_PASSWORD, DEFAULT_PORT, DEFAULT_USER,
    ENV_PROXMOX_HOST, ENV_PROXMOX_NODE, ENV_PROXMOX_PASSWORD, ENV_PROXMOX_PORT, ENV_PROXMOX_USER,
    ENV_PROXMOX_VERIFY_SSL,
};
pub use monitor::{MonitorSettings, DEFAULT_ACTION_REFRESH_DELAY, DEFAULT_UPDATE_INTERVAL};

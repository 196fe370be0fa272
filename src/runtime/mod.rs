// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runtime utilities for the monitor front-end.
//!
//! This module provides the logging bootstrap and the reconnect policy
//! applied when the front-end establishes its Proxmox API session.

mod logging;
mod reconnect;

pub use logging::{LogLevel, LoggingConfig, DEFAULT_LOG_FILE};
pub use reconnect::{
    BackoffStrategy, ExponentialBackoff, FixedBackoff, NoBackoff, ReconnectPolicy,
    ReconnectPolicyBuilder,
};

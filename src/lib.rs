// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod config;
pub mod error;
pub mod runtime;

pub use config::{ConnectionSettings, MonitorSettings};
pub use error::PveError;
pub use runtime::{LoggingConfig, ReconnectPolicy};

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reconnect policy for establishing the Proxmox API session.
//!
//! The policy only describes the schedule; the actual connection attempt
//! is a caller-supplied closure. [`ReconnectPolicy::run`] drives the
//! closure, sleeping between failed attempts, so the startup path of a
//! front-end stays a single call.
//!
//! # Example
//!
//! ```
//! use pve_config_rs::runtime::{FixedBackoff, ReconnectPolicy};
//! use std::time::Duration;
//!
//! let policy = ReconnectPolicy::builder()
//!     .max_attempts(3)
//!     .backoff(FixedBackoff::from_secs(2))
//!     .build();
//!
//! assert_eq!(policy.delays().count(), 2);
//! ```

use std::thread;
use std::time::Duration;

use tracing::warn;

/// Defines a backoff strategy for delays between connection attempts.
pub trait BackoffStrategy: Clone + Send + Sync + 'static {
    /// Calculate the delay after a failed attempt.
    ///
    /// # Arguments
    /// * `attempt` - The attempt that just failed (0-indexed)
    fn delay(&self, attempt: u32) -> Duration;
}

// =============================================================================
// No Backoff
// =============================================================================

/// No delay between attempts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBackoff;

impl NoBackoff {
    /// Create a new no-backoff strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl BackoffStrategy for NoBackoff {
    fn delay(&self, _attempt: u32) -> Duration {
        Duration::ZERO
    }
}

// =============================================================================
// Fixed Backoff
// =============================================================================

/// Fixed delay between attempts.
#[derive(Debug, Clone, Copy)]
pub struct FixedBackoff {
    delay: Duration,
}

impl FixedBackoff {
    /// Create a new fixed backoff strategy.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Create a fixed backoff with delay in milliseconds.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    /// Create a fixed backoff with delay in seconds.
    #[must_use]
    pub fn from_secs(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }
}

impl Default for FixedBackoff {
    fn default() -> Self {
        Self::new(Duration::from_secs(2))
    }
}

impl BackoffStrategy for FixedBackoff {
    fn delay(&self, _attempt: u32) -> Duration {
        self.delay
    }
}

// =============================================================================
// Exponential Backoff
// =============================================================================

/// Exponential backoff - delay doubles with each attempt.
///
/// Optionally includes jitter to avoid synchronized reconnect storms.
#[derive(Debug, Clone, Copy)]
pub struct ExponentialBackoff {
    initial_delay: Duration,
    max_delay: Duration,
    multiplier: f64,
    jitter: bool,
}

impl ExponentialBackoff {
    /// Create a new exponential backoff strategy.
    #[must_use]
    pub fn new(initial_delay: Duration) -> Self {
        Self {
            initial_delay,
            max_delay: Duration::from_secs(30),
            multiplier: 2.0,
            jitter: true,
        }
    }

    /// Set the maximum delay cap.
    #[must_use]
    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    /// Set the multiplier for exponential growth.
    #[must_use]
    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Enable or disable jitter.
    #[must_use]
    pub fn with_jitter(mut self, jitter: bool) -> Self {
        self.jitter = jitter;
        self
    }
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        Self::new(Duration::from_secs(2))
    }
}

impl BackoffStrategy for ExponentialBackoff {
    fn delay(&self, attempt: u32) -> Duration {
        let base_delay =
            self.initial_delay.as_millis() as f64 * self.multiplier.powi(attempt as i32);
        let capped_delay = base_delay.min(self.max_delay.as_millis() as f64);

        let final_delay = if self.jitter {
            // Add up to 25% jitter, deterministic per attempt number
            let jitter_range = capped_delay * 0.25;
            let jitter = (attempt as f64 * 0.1).sin().abs() * jitter_range;
            capped_delay + jitter
        } else {
            capped_delay
        };

        Duration::from_millis(final_delay as u64)
    }
}

// =============================================================================
// Reconnect Policy
// =============================================================================

/// Policy applied when the front-end establishes its API session.
///
/// The defaults mirror the startup behavior of the monitor: three
/// attempts, a two second pause between them and a ten second timeout
/// handed to the client for each attempt.
#[derive(Debug, Clone)]
pub struct ReconnectPolicy<B: BackoffStrategy = FixedBackoff> {
    /// Total number of connection attempts before giving up.
    pub max_attempts: u32,
    /// Timeout the API client applies to a single attempt. The policy
    /// itself does not enforce it; it is connection data for the client.
    pub attempt_timeout: Duration,
    /// Backoff strategy between failed attempts.
    pub backoff: B,
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            attempt_timeout: Duration::from_secs(10),
            backoff: FixedBackoff::default(),
        }
    }
}

impl ReconnectPolicy {
    /// Create a new policy with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a policy builder.
    #[must_use]
    pub fn builder() -> ReconnectPolicyBuilder<FixedBackoff> {
        ReconnectPolicyBuilder::new()
    }

    /// A policy that tries exactly once.
    #[must_use]
    pub fn single_attempt() -> ReconnectPolicy<NoBackoff> {
        ReconnectPolicy {
            max_attempts: 1,
            attempt_timeout: Duration::from_secs(10),
            backoff: NoBackoff,
        }
    }
}

impl<B: BackoffStrategy> ReconnectPolicy<B> {
    /// The schedule of pauses between attempts.
    ///
    /// A policy with `max_attempts` attempts pauses `max_attempts - 1`
    /// times.
    pub fn delays(&self) -> impl Iterator<Item = Duration> + '_ {
        (0..self.max_attempts.saturating_sub(1)).map(|attempt| self.backoff.delay(attempt))
    }

    /// Drive a connection attempt until it succeeds or the policy is
    /// exhausted.
    ///
    /// The closure receives the 0-indexed attempt number and owns all
    /// I/O; this driver only sequences the attempts and sleeps between
    /// failures. At least one attempt always runs, even with
    /// `max_attempts` of zero.
    ///
    /// # Errors
    ///
    /// Returns the error of the last attempt once the policy is
    /// exhausted.
    pub fn run<T, E, F>(&self, mut operation: F) -> std::result::Result<T, E>
    where
        F: FnMut(u32) -> std::result::Result<T, E>,
        E: std::fmt::Display,
    {
        let mut attempt = 0;
        loop {
            match operation(attempt) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    if attempt + 1 >= self.max_attempts {
                        return Err(err);
                    }
                    warn!(
                        attempt = attempt + 1,
                        max_attempts = self.max_attempts,
                        error = %err,
                        "connection attempt failed, retrying"
                    );
                    thread::sleep(self.backoff.delay(attempt));
                    attempt += 1;
                }
            }
        }
    }
}

/// Builder for [`ReconnectPolicy`].
#[derive(Debug, Clone)]
pub struct ReconnectPolicyBuilder<B: BackoffStrategy> {
    max_attempts: u32,
    attempt_timeout: Duration,
    backoff: B,
}

impl ReconnectPolicyBuilder<FixedBackoff> {
    /// Create a new builder with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_attempts: 3,
            attempt_timeout: Duration::from_secs(10),
            backoff: FixedBackoff::default(),
        }
    }
}

impl Default for ReconnectPolicyBuilder<FixedBackoff> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: BackoffStrategy> ReconnectPolicyBuilder<B> {
    /// Set the total number of attempts.
    #[must_use]
    pub fn max_attempts(mut self, max: u32) -> Self {
        self.max_attempts = max;
        self
    }

    /// Set the per-attempt timeout handed to the client.
    #[must_use]
    pub fn attempt_timeout(mut self, timeout: Duration) -> Self {
        self.attempt_timeout = timeout;
        self
    }

    /// Set the backoff strategy.
    #[must_use]
    pub fn backoff<B2: BackoffStrategy>(self, backoff: B2) -> ReconnectPolicyBuilder<B2> {
        ReconnectPolicyBuilder {
            max_attempts: self.max_attempts,
            attempt_timeout: self.attempt_timeout,
            backoff,
        }
    }

    /// Build the policy.
    #[must_use]
    pub fn build(self) -> ReconnectPolicy<B> {
        ReconnectPolicy {
            max_attempts: self.max_attempts,
            attempt_timeout: self.attempt_timeout,
            backoff: self.backoff,
        }
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0

use std::time::Duration;

use pve_config_rs::runtime::{ExponentialBackoff, ReconnectPolicy};

fn main() {
    let default_policy = ReconnectPolicy::new();
    println!(
        "default: {} attempts, {:?} per attempt",
        default_policy.max_attempts, default_policy.attempt_timeout
    );
    for (i, delay) in default_policy.delays().enumerate() {
        println!("  pause {} -> {delay:?}", i + 1);
    }

    let patient = ReconnectPolicy::builder()
        .max_attempts(6)
        .backoff(ExponentialBackoff::new(Duration::from_secs(1)).with_jitter(false))
        .build();
    println!("exponential: {} attempts", patient.max_attempts);
    for (i, delay) in patient.delays().enumerate() {
        println!("  pause {} -> {delay:?}", i + 1);
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0

use pve_config_rs::config::{
    ConnectionSettings, DEFAULT_NODE, DEFAULT_USER, ENV_PROXMOX_HOST, ENV_PROXMOX_NODE,
    ENV_PROXMOX_PASSWORD, ENV_PROXMOX_PORT, ENV_PROXMOX_USER, ENV_PROXMOX_VERIFY_SSL,
};

const ALL_VARS: [&str; 6] = [
    ENV_PROXMOX_HOST,
    ENV_PROXMOX_PORT,
    ENV_PROXMOX_USER,
    ENV_PROXMOX_PASSWORD,
    ENV_PROXMOX_NODE,
    ENV_PROXMOX_VERIFY_SSL,
];

fn clear_env() {
    for var in ALL_VARS {
        std::env::remove_var(var);
    }
}

// All environment states live in a single test: integration tests run on
// multiple threads and the process environment is shared.
#[test]
fn test_load_from_process_environment() {
    clear_env();

    // Nothing set: the documented defaults, exactly.
    let settings = ConnectionSettings::from_env().unwrap();
    assert_eq!(settings, ConnectionSettings::default());

    // Partial override leaves the remaining defaults untouched.
    std::env::set_var(ENV_PROXMOX_HOST, "10.0.0.5");
    std::env::set_var(ENV_PROXMOX_PORT, "22");
    std::env::set_var(ENV_PROXMOX_VERIFY_SSL, "True");
    let settings = ConnectionSettings::from_env().unwrap();
    assert_eq!(settings.host, "10.0.0.5");
    assert_eq!(settings.port, 22);
    assert!(settings.verify_ssl);
    assert_eq!(settings.user, DEFAULT_USER);
    assert_eq!(settings.node, DEFAULT_NODE);

    // Two loads under the same environment are equal.
    assert_eq!(settings, ConnectionSettings::from_env().unwrap());

    // A malformed port fails loudly instead of falling back.
    std::env::set_var(ENV_PROXMOX_PORT, "abc");
    let err = ConnectionSettings::from_env().unwrap_err();
    assert!(err.to_string().contains("PROXMOX_PORT"));

    // An empty port counts as unset.
    std::env::set_var(ENV_PROXMOX_PORT, "");
    let settings = ConnectionSettings::from_env().unwrap();
    assert_eq!(settings.port, 8006);

    clear_env();
}

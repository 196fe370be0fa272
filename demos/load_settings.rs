// SPDX-License-Identifier: MIT OR Apache-2.0

use pve_config_rs::config::ConnectionSettings;
use pve_config_rs::runtime::LoggingConfig;

fn main() -> anyhow::Result<()> {
    LoggingConfig::new().without_file().init()?;

    let settings = ConnectionSettings::from_env()?;
    tracing::info!(
        host = %settings.host,
        port = settings.port,
        node = %settings.node,
        verify_ssl = settings.verify_ssl,
        "loaded Proxmox connection settings"
    );

    // Debug output keeps the password redacted.
    println!("{settings:#?}");
    println!("API base URL: {}", settings.api_base_url()?);
    if let Some(realm) = settings.realm() {
        println!("{} authenticates against realm {realm}", settings.username());
    }

    Ok(())
}

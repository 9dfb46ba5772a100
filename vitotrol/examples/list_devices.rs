// examples/list_devices.rs
//
// Logs in to the Vitotrol service and lists the devices of the account.
//
// Credentials come from the configuration (`~/.vitotrol/config.yaml`,
// `credentials.username` / `credentials.password`) or from the environment:
//   VITOTROL_CONFIG__CREDENTIALS__USERNAME=... \
//   VITOTROL_CONFIG__CREDENTIALS__PASSWORD=... \
//   RUST_LOG=vitotrol=debug cargo run --example list_devices

use anyhow::Result;
use vitoconfig::Config;
use vitotrol::{Session, VitotrolError};

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let config = Config::load("")?;
    let (username, password) = config.credentials()?;

    let mut session = Session::from_config(&config);

    match session.login(username, password) {
        Ok(()) => {}
        Err(VitotrolError::Application(header)) => {
            eprintln!("Login refused ({}): {}", header.code, header.message);
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    }

    if let Some(profile) = session.profile() {
        println!("Logged in as {}", profile.display_name());
    }

    session.get_devices()?;

    if session.devices().is_empty() {
        println!("No device attached to this account.");
        return Ok(());
    }

    for device in session.devices() {
        println!(
            "[{}] {} / [{}] {}{}{}",
            device.location_id,
            device.location_name,
            device.device_id,
            device.device_name,
            if device.is_connected { "" } else { " (offline)" },
            if device.has_error { " (error)" } else { "" },
        );
    }

    Ok(())
}

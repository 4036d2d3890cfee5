//! `dvsync-verify`: check that the published dataset matches the working tree.
//!
//! Configured purely from the environment, no flags:
//! - `DV_URL`: base URL of the Dataverse installation
//! - `DV_PID`: persistent identifier of the dataset
//! - `DV_API_TOKEN`: API token

use dvsync_core::{verify, DataverseClient, SyncConfig, SyncError};

fn env_var(name: &'static str) -> Result<String, SyncError> {
    std::env::var(name)
        .map_err(|_| SyncError::validation(format!("environment variable {} is not set", name)))
}

fn try_main() -> Result<(), SyncError> {
    env_logger::init();

    let base_url = env_var("DV_URL")?;
    let persistent_id = env_var("DV_PID")?;
    let api_token = env_var("DV_API_TOKEN")?;

    let config = SyncConfig::unchecked(base_url, persistent_id, api_token, "");
    let client = DataverseClient::new(config);

    let cwd = std::env::current_dir()?;
    let report = verify(&client, &cwd)?;

    println!("=====================================================");
    println!(" Dataset matches the repository content on disk.");
    println!(" {} file(s) verified.", report.files_checked);
    println!("=====================================================");
    Ok(())
}

fn main() {
    if let Err(e) = try_main() {
        eprintln!("error: {e}");
        ::std::process::exit(1)
    }
}

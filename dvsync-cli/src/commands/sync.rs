//! dvsync sync command.

use dvsync_core::{DataverseClient, SyncConfig};
use serde_json::json;

use super::Result;
use crate::output::Output;
use crate::Cli;

/// Run the sync command from the current working directory.
pub fn run(output: &Output, cli: &Cli) -> Result<()> {
    // Validation happens here, before any network call
    let config = SyncConfig::new(
        &cli.dataverse_url,
        &cli.persistent_id,
        &cli.api_token,
        &cli.directory,
    )?;

    let client = DataverseClient::new(config.clone());
    let cwd = std::env::current_dir()?;

    let summary = dvsync_core::sync(&config, &client, &cwd)?;

    if output.is_json() {
        output.println(
            &json!({
                "status": "synced",
                "deleted": summary.deleted,
                "skipped": summary.skipped,
                "uploaded": summary.uploaded,
            })
            .to_string(),
        );
    } else {
        output.success(&format!(
            "Summary: {} deleted, {} skipped, {} uploaded",
            summary.deleted, summary.skipped, summary.uploaded
        ));
    }

    Ok(())
}

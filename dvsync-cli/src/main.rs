use clap::Parser;

mod commands;
mod output;

use output::{Output, OutputFormat};

const LONG_ABOUT: &str = "\
Dataverse Repository Synchronizer

Mirrors the content of a GitHub/GitLab repository checkout into a Dataverse
dataset. Run from the repository root, typically inside a CI pipeline: files
deleted from the repository are removed from the dataset, then the full
working tree (plus the .dvregistry manifest) is uploaded.

Example:

    dvsync \\
        --dataverse-url https://demo.dataverse.org \\
        --persistent-id doi:10.5072/FK2/ABC123 \\
        --api-token <API_TOKEN>
";

#[derive(Parser)]
#[clap(name = "dvsync", version, about, long_about = LONG_ABOUT)]
pub struct Cli {
    /// The base URL of the Dataverse installation.
    #[clap(long)]
    pub dataverse_url: String,

    /// The persistent identifier (PID) of the dataset, starting with `doi:`.
    #[clap(long)]
    pub persistent_id: String,

    /// The API token for authentication (a v4 UUID).
    #[clap(long)]
    pub api_token: String,

    /// The dataset subdirectory to upload into.
    #[clap(long, default_value = "")]
    pub directory: String,

    /// Output results as JSON.
    #[clap(long)]
    pub json: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };
    let output = Output::new(format);

    if let Err(e) = commands::sync::run(&output, &cli) {
        output.error(e.error_type(), &e.to_string());
        ::std::process::exit(1)
    }
}

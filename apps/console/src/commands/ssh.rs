//! Operator SSH key pair commands.

use anyhow::Result;
use clap::Subcommand;
use serde_json::json;

use redcell_core::store::Store;

use crate::commands::print_json;

#[derive(Debug, Subcommand)]
pub enum SshAction {
    /// Show the key pair pushed to provisioned hosts
    Show,
    /// Generate the key pair when none exists yet
    Generate,
}

pub async fn run(store: &Store, action: SshAction) -> Result<()> {
    let config = match action {
        SshAction::Show => store.get_ssh_config().await?,
        SshAction::Generate => store.create_ssh_config().await?,
    };
    match config {
        Some(config) => print_json(&config),
        // no key pair yet; print the absence rather than erroring
        None => print_json(&json!(null)),
    }
}

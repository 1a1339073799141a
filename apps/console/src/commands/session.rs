//! Session commands: login, logout, whoami.

use anyhow::Result;
use clap::Args;
use serde_json::json;

use redcell_core::store::{Store, getters};

use crate::commands::print_json;

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Account email
    #[arg(long)]
    pub username: String,
    /// Password; read from REDCELL_PASSWORD when omitted
    #[arg(long)]
    pub password: Option<String>,
}

pub async fn login(store: &Store, args: LoginArgs) -> Result<()> {
    let password = match args
        .password
        .or_else(|| std::env::var("REDCELL_PASSWORD").ok())
    {
        Some(password) => password,
        None => anyhow::bail!("no password given, pass --password or set REDCELL_PASSWORD"),
    };
    store.log_in(&args.username, &password).await?;
    let profile = store
        .state()
        .read(|state| getters::user_profile(&state.main));
    print_json(&profile)
}

pub async fn logout(store: &Store) -> Result<()> {
    store.user_log_out().await;
    Ok(())
}

/// Report the session as it stands, never touching the backend.
pub async fn whoami(store: &Store) -> Result<()> {
    let (session, profile) = store.state().read(|state| {
        (
            getters::session(&state.main),
            getters::user_profile(&state.main),
        )
    });
    print_json(&json!({ "session": session, "profile": profile }))
}

//! Redcell console - command-line client for the infrastructure backend.
//!
//! Wires the shared store to the HTTP transport, recovers the persisted
//! session on startup and dispatches one subcommand per invocation.

mod commands;
mod telemetry;

use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use redcell_client::{ApiClient, ClientConfig, FileTokenStore};
use redcell_core::domain::NotificationColor;
use redcell_core::routes::{Route, RouteState};
use redcell_core::store::{StateHandle, Store, getters};

use crate::commands::{c2, domain, isp, module, session, ssh, template, user, vps};
use crate::telemetry::{TelemetryConfig, init_telemetry};

#[derive(Parser)]
#[command(name = "redcell")]
#[command(about = "Offensive infrastructure console", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and persist the session token
    Login(session::LoginArgs),
    /// Drop the persisted session
    Logout,
    /// Show the current session and profile
    Whoami,
    /// Own profile and user administration
    #[command(subcommand)]
    User(user::UserAction),
    /// ISP provider profiles
    #[command(subcommand)]
    Isp(isp::IspAction),
    /// C2 malleable profiles
    #[command(subcommand)]
    C2(c2::C2Action),
    /// Site templates
    #[command(subcommand)]
    Template(template::TemplateAction),
    /// Operator SSH key pair
    #[command(subcommand)]
    Ssh(ssh::SshAction),
    /// Domains, monitors and grow tasks
    #[command(subcommand)]
    Domain(domain::DomainAction),
    /// VPS instances
    #[command(subcommand)]
    Vps(vps::VpsAction),
    /// Team servers and redirectors
    #[command(subcommand)]
    Module(module::ModuleAction),
}

impl Commands {
    /// Whether the command needs a settled session before it runs.
    fn requires_session(&self) -> bool {
        !matches!(
            self,
            Commands::Login(_) | Commands::Logout | Commands::Whoami
        )
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let telemetry = TelemetryConfig::from_env();
    init_telemetry(&telemetry);

    let config = ClientConfig::from_env();
    let token_path = config
        .token_file
        .clone()
        .unwrap_or_else(FileTokenStore::default_path);

    let state = StateHandle::new();
    let navigator = Arc::new(RouteState::starting_at(Route::Login));
    let tokens = Arc::new(FileTokenStore::new(token_path));

    let api = ApiClient::new(
        config,
        Arc::new(state.clone()),
        tokens.clone(),
        Arc::new(state.clone()),
        navigator.clone(),
    )
    .context("failed to build the API client")?;
    let store = Store::new(state.clone(), Arc::new(api), tokens, navigator);

    store.check_logged_in().await;
    if cli.command.requires_session()
        && state.read(|state| getters::is_logged_in(&state.main)) != Some(true)
    {
        anyhow::bail!("not logged in, run `redcell login` first");
    }

    let outcome = dispatch(&store, cli.command).await;
    drain_notifications(&state);
    outcome
}

async fn dispatch(store: &Store, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Login(args) => session::login(store, args).await,
        Commands::Logout => session::logout(store).await,
        Commands::Whoami => session::whoami(store).await,
        Commands::User(action) => user::run(store, action).await,
        Commands::Isp(action) => isp::run(store, action).await,
        Commands::C2(action) => c2::run(store, action).await,
        Commands::Template(action) => template::run(store, action).await,
        Commands::Ssh(action) => ssh::run(store, action).await,
        Commands::Domain(action) => domain::run(store, action).await,
        Commands::Vps(action) => vps::run(store, action).await,
        Commands::Module(action) => module::run(store, action).await,
    }
}

/// Surface whatever the store queued as log lines once the command
/// settles. Results themselves go to stdout; this is the side channel.
fn drain_notifications(state: &StateHandle) {
    let notifications = state.commit(|state| std::mem::take(&mut state.main.notifications));
    for notification in notifications {
        match notification.color {
            Some(NotificationColor::Error) => tracing::warn!("{}", notification.content),
            _ => tracing::info!("{}", notification.content),
        }
    }
}

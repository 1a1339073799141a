//! Module commands: team servers and redirectors.

use anyhow::Result;
use clap::{Args, Subcommand};

use redcell_core::store::Store;
use redcell_shared::dto::{RedirectorCreate, TeamServerCreate};
use redcell_shared::validation::{self, FormField};

use crate::commands::{PageArgs, print_json};

#[derive(Debug, Subcommand)]
pub enum ModuleAction {
    /// Team servers
    #[command(subcommand)]
    TeamServer(TeamServerAction),
    /// Redirectors
    #[command(subcommand)]
    Redirector(RedirectorAction),
    /// Beacon flavors a redirector can forward
    BeaconTypes,
}

#[derive(Debug, Subcommand)]
pub enum TeamServerAction {
    /// List team servers
    List(PageArgs),
    /// Deploy a team server onto a VPS
    Create(TeamServerArgs),
    /// Tear a team server down
    Delete {
        /// Team server id
        team_server_id: i64,
    },
}

#[derive(Debug, Subcommand)]
pub enum RedirectorAction {
    /// List redirectors
    List(PageArgs),
    /// Deploy a redirector onto a VPS
    Create(RedirectorArgs),
    /// Tear a redirector down
    Delete {
        /// Redirector id
        redirector_id: i64,
    },
}

#[derive(Debug, Args)]
pub struct TeamServerArgs {
    /// Team server port
    #[arg(long)]
    pub port: u16,
    /// VPS to deploy onto
    #[arg(long = "vps-id")]
    pub vps_id: i64,
    /// Download URL for the Cobalt Strike archive
    #[arg(long = "cs-url")]
    pub cs_download_url: String,
    /// Team server password; generated when omitted
    #[arg(long)]
    pub password: Option<String>,
    /// C2 profile to load
    #[arg(long = "c2-profile-id")]
    pub c2_profile_id: Option<i64>,
    /// Beacon kill date, YYYY-MM-DD
    #[arg(long = "kill-date")]
    pub kill_date: Option<String>,
    /// Password of the downloaded archive
    #[arg(long = "zip-password")]
    pub zip_password: Option<String>,
    #[arg(long)]
    pub remark: Option<String>,
}

#[derive(Debug, Args)]
pub struct RedirectorArgs {
    /// Beacon type code from `module beacon-types`
    #[arg(long = "beacon-type")]
    pub beacon_type: String,
    /// Team server the traffic forwards to
    #[arg(long = "team-server-id")]
    pub team_server_id: i64,
    /// Listener port on the team server
    #[arg(long = "listener-port")]
    pub listener_port: u16,
    /// Domain the beacon traffic fronts through
    #[arg(long = "redirect-domain")]
    pub redirect_domain: String,
    /// VPS to deploy onto
    #[arg(long = "vps-id")]
    pub vps_id: i64,
    /// Domain id backing the redirect domain
    #[arg(long = "domain-id")]
    pub domain_id: i64,
    #[arg(long)]
    pub remark: Option<String>,
}

pub async fn run(store: &Store, action: ModuleAction) -> Result<()> {
    match action {
        ModuleAction::TeamServer(action) => run_team_server(store, action).await,
        ModuleAction::Redirector(action) => run_redirector(store, action).await,
        ModuleAction::BeaconTypes => print_json(&store.get_beacon_types().await?),
    }
}

async fn run_team_server(store: &Store, action: TeamServerAction) -> Result<()> {
    match action {
        TeamServerAction::List(page) => print_json(&store.get_team_servers(&page.query()).await?),
        TeamServerAction::Create(args) => {
            validation::validate(FormField::Url, &args.cs_download_url)?;
            validation::validate(FormField::Remark, args.remark.as_deref().unwrap_or(""))?;
            let team_server = TeamServerCreate {
                port: args.port,
                password: args.password,
                c2_profile_id: args.c2_profile_id,
                vps_id: args.vps_id,
                kill_date: args.kill_date,
                remark: args.remark,
                cs_download_url: args.cs_download_url,
                zip_password: args.zip_password,
            };
            print_json(&store.create_team_server(&team_server).await?)
        }
        TeamServerAction::Delete { team_server_id } => {
            print_json(&store.delete_team_server(team_server_id).await?)
        }
    }
}

async fn run_redirector(store: &Store, action: RedirectorAction) -> Result<()> {
    match action {
        RedirectorAction::List(page) => print_json(&store.get_redirectors(&page.query()).await?),
        RedirectorAction::Create(args) => {
            validation::validate(FormField::Domain, &args.redirect_domain)?;
            validation::validate(FormField::Remark, args.remark.as_deref().unwrap_or(""))?;
            let redirector = RedirectorCreate {
                beacon_type: args.beacon_type,
                team_server_id: args.team_server_id,
                listener_port: args.listener_port,
                redirect_domain: args.redirect_domain,
                vps_id: args.vps_id,
                domain_id: args.domain_id,
                remark: args.remark,
            };
            print_json(&store.create_redirector(&redirector).await?)
        }
        RedirectorAction::Delete { redirector_id } => {
            print_json(&store.delete_redirector(redirector_id).await?)
        }
    }
}

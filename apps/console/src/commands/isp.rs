//! ISP provider profile commands.

use anyhow::Result;
use clap::{Args, Subcommand};

use redcell_core::store::Store;
use redcell_shared::dto::{IspKind, IspProfileCreate, IspProfileUpdate};
use redcell_shared::validation::{self, FormField};

use crate::commands::{PageArgs, print_json};

#[derive(Debug, Subcommand)]
pub enum IspAction {
    /// Providers selectable per module
    Available,
    /// List provider profiles for one module
    List(ListArgs),
    /// Create a provider profile
    Create(CreateArgs),
    /// Update a provider profile
    Update(UpdateArgs),
    /// Delete a provider profile
    Delete {
        /// Profile id
        profile_id: i64,
    },
    /// Reload provider credentials on the backend
    Reload {
        /// Module the profiles belong to: domain or vps
        kind: IspKind,
    },
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Module the profiles belong to: domain or vps
    pub kind: IspKind,
    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Module the profile belongs to: domain or vps
    pub kind: IspKind,
    /// Provider code from `isp available`
    #[arg(long)]
    pub provider: i64,
    #[arg(long = "api-key")]
    pub api_key: String,
    #[arg(long)]
    pub remark: Option<String>,
    /// Mark the profile as a test account
    #[arg(long)]
    pub test: bool,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Profile id
    pub profile_id: i64,
    /// Module the profile belongs to: domain or vps
    pub kind: IspKind,
    #[arg(long)]
    pub provider: Option<i64>,
    #[arg(long = "api-key")]
    pub api_key: Option<String>,
    #[arg(long)]
    pub remark: Option<String>,
    #[arg(long)]
    pub test: Option<bool>,
}

pub async fn run(store: &Store, action: IspAction) -> Result<()> {
    match action {
        IspAction::Available => print_json(&store.get_available_isp().await?),
        IspAction::List(args) => {
            print_json(&store.get_isp_profiles(args.kind, &args.page.query()).await?)
        }
        IspAction::Create(args) => {
            validation::validate(FormField::IspApiKey, &args.api_key)?;
            validation::validate(FormField::Remark, args.remark.as_deref().unwrap_or(""))?;
            let profile = IspProfileCreate {
                provider: Some(args.provider),
                api_key: Some(args.api_key),
                remark: args.remark,
                is_test: Some(args.test),
            };
            print_json(&store.create_isp_profile(args.kind, &profile).await?)
        }
        IspAction::Update(args) => {
            if let Some(api_key) = &args.api_key {
                validation::validate(FormField::IspApiKey, api_key)?;
            }
            validation::validate(FormField::Remark, args.remark.as_deref().unwrap_or(""))?;
            let update = IspProfileUpdate {
                kind: args.kind.code(),
                provider: args.provider,
                api_key: args.api_key,
                remark: args.remark,
                is_test: args.test,
            };
            print_json(&store.update_isp_profile(args.profile_id, &update).await?)
        }
        IspAction::Delete { profile_id } => {
            print_json(&store.delete_isp_profile(profile_id).await?)
        }
        IspAction::Reload { kind } => print_json(&store.reload_isp_config(kind).await?),
    }
}

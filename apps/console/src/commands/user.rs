//! Account commands: own profile plus user administration.

use anyhow::Result;
use clap::{Args, Subcommand};

use redcell_core::store::{Store, getters};
use redcell_shared::dto::{UserCreate, UserUpdate};

use crate::commands::print_json;

#[derive(Debug, Subcommand)]
pub enum UserAction {
    /// Show the logged-in profile
    Me,
    /// Update the logged-in profile
    UpdateMe(ProfileArgs),
    /// List all users (superuser only)
    List,
    /// Create a user (superuser only)
    Create(CreateArgs),
    /// Update a user (superuser only)
    Update(UpdateArgs),
}

#[derive(Debug, Args)]
pub struct ProfileArgs {
    #[arg(long)]
    pub username: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub username: Option<String>,
    /// Create the account disabled
    #[arg(long)]
    pub inactive: bool,
    /// Grant superuser access
    #[arg(long)]
    pub superuser: bool,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// User id to update
    pub user_id: i64,
    #[arg(long)]
    pub username: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub active: Option<bool>,
    #[arg(long)]
    pub superuser: Option<bool>,
}

pub async fn run(store: &Store, action: UserAction) -> Result<()> {
    match action {
        UserAction::Me => {
            store.get_user_profile().await?;
            let profile = store
                .state()
                .read(|state| getters::user_profile(&state.main));
            print_json(&profile)
        }
        UserAction::UpdateMe(args) => {
            let update = UserUpdate {
                email: args.email,
                username: args.username,
                password: args.password,
                ..UserUpdate::default()
            };
            store.update_user_profile(&update).await?;
            let profile = store
                .state()
                .read(|state| getters::user_profile(&state.main));
            print_json(&profile)
        }
        UserAction::List => print_json(&store.get_users().await?),
        UserAction::Create(args) => {
            let user = UserCreate {
                email: args.email,
                password: args.password,
                username: args.username,
                is_active: Some(!args.inactive),
                is_superuser: Some(args.superuser),
            };
            print_json(&store.create_user(&user).await?)
        }
        UserAction::Update(args) => {
            let update = UserUpdate {
                email: args.email,
                username: args.username,
                password: args.password,
                is_active: args.active,
                is_superuser: args.superuser,
            };
            print_json(&store.update_user(args.user_id, &update).await?)
        }
    }
}

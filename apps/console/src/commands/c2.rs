//! C2 malleable profile commands.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

use redcell_core::store::Store;
use redcell_shared::dto::{C2ProfileForm, C2ProfileUpdate};
use redcell_shared::validation::{self, FormField};

use crate::commands::{PageArgs, print_json, read_payload};

#[derive(Debug, Subcommand)]
pub enum C2Action {
    /// List C2 profiles
    List(PageArgs),
    /// Show one profile, content included
    Show {
        /// Profile id
        profile_id: i64,
    },
    /// Register a malleable profile
    Create(CreateArgs),
    /// Rename a profile or change its remark
    Update(UpdateArgs),
    /// Delete a profile
    Delete {
        /// Profile id
        profile_id: i64,
    },
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Profile name
    pub name: String,
    /// Path to the .profile file
    #[arg(long)]
    pub profile: Option<PathBuf>,
    #[arg(long)]
    pub remark: Option<String>,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Profile id
    pub profile_id: i64,
    /// New profile name
    pub name: String,
    #[arg(long)]
    pub remark: Option<String>,
}

pub async fn run(store: &Store, action: C2Action) -> Result<()> {
    match action {
        C2Action::List(page) => print_json(&store.get_c2_profiles(&page.query()).await?),
        C2Action::Show { profile_id } => print_json(&store.get_c2_profile(profile_id).await?),
        C2Action::Create(args) => {
            validation::validate(FormField::C2ProfileName, &args.name)?;
            validation::validate(FormField::Remark, args.remark.as_deref().unwrap_or(""))?;
            let mut form = C2ProfileForm::new(args.name);
            if let Some(path) = &args.profile {
                let payload = read_payload(path)?;
                validation::validate(FormField::C2ProfileFile, &payload.file_name)?;
                form = form.with_profile(payload);
            }
            if let Some(remark) = args.remark {
                form = form.with_remark(remark);
            }
            print_json(&store.create_c2_profile(&form).await?)
        }
        C2Action::Update(args) => {
            validation::validate(FormField::C2ProfileName, &args.name)?;
            validation::validate(FormField::Remark, args.remark.as_deref().unwrap_or(""))?;
            let update = C2ProfileUpdate {
                name: args.name,
                remark: args.remark,
            };
            print_json(&store.update_c2_profile(args.profile_id, &update).await?)
        }
        C2Action::Delete { profile_id } => print_json(&store.delete_c2_profile(profile_id).await?),
    }
}

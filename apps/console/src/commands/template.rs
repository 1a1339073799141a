//! Site template commands.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use serde_json::json;

use redcell_core::store::Store;
use redcell_shared::dto::{SiteTemplateForm, SiteTemplateUpdate};
use redcell_shared::validation::{self, FormField};

use crate::commands::{PageArgs, print_json, read_payload};

#[derive(Debug, Subcommand)]
pub enum TemplateAction {
    /// List site templates
    List(PageArgs),
    /// Register a template from a zip archive
    Create(CreateArgs),
    /// Rename a template or change its remark
    Update(UpdateArgs),
    /// Replace the archive behind a template
    Upload {
        /// Template id
        template_id: i64,
        /// Path to the .zip archive
        archive: PathBuf,
    },
    /// Delete a template
    Delete {
        /// Template id
        template_id: i64,
    },
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Template name
    pub name: String,
    /// Path to the .zip archive
    pub archive: PathBuf,
    #[arg(long)]
    pub remark: Option<String>,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Template id
    pub template_id: i64,
    /// New template name
    pub name: String,
    #[arg(long)]
    pub remark: Option<String>,
}

pub async fn run(store: &Store, action: TemplateAction) -> Result<()> {
    match action {
        TemplateAction::List(page) => print_json(&store.get_site_templates(&page.query()).await?),
        TemplateAction::Create(args) => {
            validation::validate(FormField::RequiredData, &args.name)?;
            validation::validate(FormField::Remark, args.remark.as_deref().unwrap_or(""))?;
            let payload = read_payload(&args.archive)?;
            validation::validate(FormField::ZipFile, &payload.file_name)?;
            let mut form = SiteTemplateForm::new(args.name, payload);
            if let Some(remark) = args.remark {
                form = form.with_remark(remark);
            }
            print_json(&store.create_site_template(&form).await?)
        }
        TemplateAction::Update(args) => {
            validation::validate(FormField::RequiredData, &args.name)?;
            validation::validate(FormField::Remark, args.remark.as_deref().unwrap_or(""))?;
            let update = SiteTemplateUpdate {
                id: args.template_id,
                name: args.name,
                remark: args.remark,
            };
            print_json(&store.update_site_template(&update).await?)
        }
        TemplateAction::Upload {
            template_id,
            archive,
        } => {
            let payload = read_payload(&archive)?;
            validation::validate(FormField::ZipFile, &payload.file_name)?;
            let replaced = store
                .upload_site_template_archive(template_id, &payload)
                .await?;
            print_json(&json!({ "replaced": replaced }))
        }
        TemplateAction::Delete { template_id } => {
            print_json(&store.delete_site_template(template_id).await?)
        }
    }
}

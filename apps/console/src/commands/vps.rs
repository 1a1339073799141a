//! VPS commands: inventory, provisioning and power control.

use anyhow::Result;
use clap::{Args, Subcommand};

use redcell_core::store::Store;
use redcell_shared::dto::VpsCreate;
use redcell_shared::validation::{self, FormField};

use crate::commands::{PageArgs, print_json};

#[derive(Debug, Subcommand)]
pub enum VpsAction {
    /// List VPS instances
    List(PageArgs),
    /// Provision a VPS through a provider profile
    Create(CreateArgs),
    /// Region, OS and plan catalogs for one provider profile
    Specs {
        /// VPS-module ISP profile id
        isp_id: i64,
    },
    /// SSH keys registered at the provider
    SshKeys {
        /// VPS-module ISP profile id
        isp_id: i64,
    },
    /// Destroy a VPS
    Destroy {
        /// VPS id
        vps_id: i64,
    },
    /// Reboot a VPS
    Reboot {
        /// VPS id
        vps_id: i64,
    },
    /// Reinstall the operating system on a VPS
    Reinstall {
        /// VPS id
        vps_id: i64,
    },
    /// Power a VPS off
    Shutdown {
        /// VPS id
        vps_id: i64,
    },
    /// Power a VPS on
    Start {
        /// VPS id
        vps_id: i64,
    },
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Hostname for the new instance
    pub hostname: String,
    /// VPS-module ISP profile id
    #[arg(long = "isp-id")]
    pub isp_id: i64,
    /// Region code from `vps specs`
    #[arg(long = "region")]
    pub region_code: String,
    /// OS code from `vps specs`
    #[arg(long = "os")]
    pub os_code: String,
    /// Plan code from `vps specs`
    #[arg(long = "plan")]
    pub plan_code: String,
    /// Provider SSH key id, repeatable
    #[arg(long = "ssh-key")]
    pub ssh_keys: Vec<String>,
    #[arg(long)]
    pub remark: Option<String>,
}

pub async fn run(store: &Store, action: VpsAction) -> Result<()> {
    match action {
        VpsAction::List(page) => print_json(&store.get_vps_list(&page.query()).await?),
        VpsAction::Create(args) => {
            validation::validate(FormField::VpsHostname, &args.hostname)?;
            validation::validate(FormField::Remark, args.remark.as_deref().unwrap_or(""))?;
            let profile = VpsCreate {
                hostname: args.hostname,
                isp_id: args.isp_id,
                region_code: args.region_code,
                os_code: args.os_code,
                plan_code: args.plan_code,
                ssh_keys: (!args.ssh_keys.is_empty()).then_some(args.ssh_keys),
                remark: args.remark,
            };
            print_json(&store.create_vps(&profile).await?)
        }
        VpsAction::Specs { isp_id } => print_json(&store.get_vps_specs(isp_id).await?),
        VpsAction::SshKeys { isp_id } => print_json(&store.get_isp_ssh_keys(isp_id).await?),
        VpsAction::Destroy { vps_id } => print_json(&store.destroy_vps(vps_id).await?),
        VpsAction::Reboot { vps_id } => print_json(&store.reboot_vps(vps_id).await?),
        VpsAction::Reinstall { vps_id } => print_json(&store.reinstall_vps(vps_id).await?),
        VpsAction::Shutdown { vps_id } => print_json(&store.shutdown_vps(vps_id).await?),
        VpsAction::Start { vps_id } => print_json(&store.start_vps(vps_id).await?),
    }
}

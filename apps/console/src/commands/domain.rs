//! Domain commands: inventory, purchase, reputation checks, health
//! monitors and grow tasks.

use anyhow::Result;
use clap::{Args, Subcommand};

use redcell_core::store::Store;
use redcell_shared::dto::{
    DomainCreate, DomainGrowCreate, DomainMonitorCreate, DomainPurchase, DomainVerify,
    PurchasableDomainQuery,
};
use redcell_shared::validation::{self, FormField};

use crate::commands::{PageArgs, print_json};

#[derive(Debug, Subcommand)]
pub enum DomainAction {
    /// List registered domains
    List(PageArgs),
    /// Register a domain already owned at the given provider
    Create(CreateArgs),
    /// Remove a domain from the inventory
    Delete {
        /// Domain id
        domain_id: i64,
    },
    /// Re-sync DNS records from the providers
    Reload,
    /// Search a provider for purchasable names
    Search(SearchArgs),
    /// Buy a domain through a provider profile
    Purchase(PurchaseArgs),
    /// Check a domain against the blocklist vendors
    Verify(VerifyArgs),
    /// Health monitors
    #[command(subcommand)]
    Monitor(MonitorAction),
    /// Reputation grow tasks
    #[command(subcommand)]
    Grow(GrowAction),
}

#[derive(Debug, Subcommand)]
pub enum MonitorAction {
    /// List monitors
    List(PageArgs),
    /// Create a monitor
    Create(MonitorArgs),
    /// Reconfigure a monitor
    Update {
        /// Monitor id
        monitor_id: i64,
        #[command(flatten)]
        args: MonitorArgs,
    },
    /// Delete a monitor
    Delete {
        /// Monitor id
        monitor_id: i64,
    },
}

#[derive(Debug, Subcommand)]
pub enum GrowAction {
    /// List grow tasks
    List(PageArgs),
    /// Stand up a benign site on a domain to age its reputation
    Create(GrowArgs),
    /// Remove a grow task
    Delete {
        /// Grow task id
        grow_id: i64,
    },
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Fully qualified domain name
    pub domain: String,
    /// Domain-module ISP profile id
    #[arg(long = "isp-id")]
    pub isp_id: i64,
    #[arg(long)]
    pub remark: Option<String>,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Name or keyword to search for
    pub domain: String,
    /// Domain-module ISP profile id
    #[arg(long = "isp-id")]
    pub isp_id: i64,
}

#[derive(Debug, Args)]
pub struct PurchaseArgs {
    /// Name to buy
    pub domain: String,
    /// Domain-module ISP profile id
    #[arg(long = "isp-id")]
    pub isp_id: i64,
    /// Provider name echoed from the search result
    #[arg(long = "provider-name")]
    pub provider_name: String,
    /// Listed price from the search result
    #[arg(long)]
    pub price: Option<f64>,
}

#[derive(Debug, Args)]
pub struct VerifyArgs {
    /// Name to check
    pub domain: String,
    /// VirusTotal API token
    #[arg(long = "vt-token")]
    pub vt_token: Option<String>,
}

#[derive(Debug, Args)]
pub struct MonitorArgs {
    /// Task name
    pub name: String,
    /// Domain id to watch
    #[arg(long = "domain-id")]
    pub domain_id: i64,
    /// Check interval in minutes
    #[arg(long)]
    pub interval: i64,
    #[arg(long)]
    pub remark: Option<String>,
}

#[derive(Debug, Args)]
pub struct GrowArgs {
    /// Domain-module ISP profile id
    #[arg(long = "isp-id")]
    pub isp_id: i64,
    /// VPS hosting the site
    #[arg(long = "vps-id")]
    pub vps_id: i64,
    /// Domain to age
    #[arg(long = "domain-id")]
    pub domain_id: i64,
    /// Site template to serve
    #[arg(long = "template-id")]
    pub site_template_id: i64,
    #[arg(long)]
    pub remark: Option<String>,
}

impl MonitorArgs {
    fn into_create(self) -> Result<DomainMonitorCreate> {
        validation::validate(FormField::DomainMonitorTaskName, &self.name)?;
        validation::validate(FormField::Remark, self.remark.as_deref().unwrap_or(""))?;
        Ok(DomainMonitorCreate {
            domain_id: self.domain_id,
            name: self.name,
            interval: self.interval,
            remark: self.remark,
        })
    }
}

pub async fn run(store: &Store, action: DomainAction) -> Result<()> {
    match action {
        DomainAction::List(page) => print_json(&store.get_domains(&page.query()).await?),
        DomainAction::Create(args) => {
            validation::validate(FormField::Domain, &args.domain)?;
            validation::validate(FormField::Remark, args.remark.as_deref().unwrap_or(""))?;
            let domain = DomainCreate {
                domain: args.domain,
                isp_id: args.isp_id,
                remark: args.remark,
            };
            print_json(&store.create_domain(&domain).await?)
        }
        DomainAction::Delete { domain_id } => print_json(&store.delete_domain(domain_id).await?),
        DomainAction::Reload => print_json(&store.reload_dns_records().await?),
        DomainAction::Search(args) => {
            validation::validate(FormField::Domain, &args.domain)?;
            let query = PurchasableDomainQuery {
                isp_id: args.isp_id,
                domain: args.domain,
            };
            print_json(&store.search_purchasable(&query).await?)
        }
        DomainAction::Purchase(args) => {
            validation::validate(FormField::Domain, &args.domain)?;
            let purchase = DomainPurchase {
                domain: args.domain,
                price: args.price,
                isp_id: args.isp_id,
                provider_name: args.provider_name,
            };
            print_json(&store.purchase_domain(&purchase).await?)
        }
        DomainAction::Verify(args) => {
            validation::validate(FormField::Domain, &args.domain)?;
            let verify = DomainVerify {
                domain: args.domain,
                vt_token: args.vt_token,
            };
            print_json(&store.verify_domain(&verify).await?)
        }
        DomainAction::Monitor(action) => run_monitor(store, action).await,
        DomainAction::Grow(action) => run_grow(store, action).await,
    }
}

async fn run_monitor(store: &Store, action: MonitorAction) -> Result<()> {
    match action {
        MonitorAction::List(page) => print_json(&store.get_domain_monitors(&page.query()).await?),
        MonitorAction::Create(args) => {
            let monitor = args.into_create()?;
            print_json(&store.create_domain_monitor(&monitor).await?)
        }
        MonitorAction::Update { monitor_id, args } => {
            let monitor = args.into_create()?;
            print_json(&store.update_domain_monitor(monitor_id, &monitor).await?)
        }
        MonitorAction::Delete { monitor_id } => {
            print_json(&store.delete_domain_monitor(monitor_id).await?)
        }
    }
}

async fn run_grow(store: &Store, action: GrowAction) -> Result<()> {
    match action {
        GrowAction::List(page) => print_json(&store.get_domain_grow_tasks(&page.query()).await?),
        GrowAction::Create(args) => {
            validation::validate(FormField::Remark, args.remark.as_deref().unwrap_or(""))?;
            let grow = DomainGrowCreate {
                isp_id: args.isp_id,
                vps_id: args.vps_id,
                domain_id: args.domain_id,
                site_template_id: args.site_template_id,
                remark: args.remark,
            };
            print_json(&store.create_domain_grow(&grow).await?)
        }
        GrowAction::Delete { grow_id } => print_json(&store.delete_domain_grow(grow_id).await?),
    }
}

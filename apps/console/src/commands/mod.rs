//! Command implementations, one module per resource area.

pub mod c2;
pub mod domain;
pub mod isp;
pub mod module;
pub mod session;
pub mod ssh;
pub mod template;
pub mod user;
pub mod vps;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use redcell_shared::PageQuery;
use redcell_shared::dto::FilePayload;

/// Shared paging flags for list commands.
#[derive(Debug, Args)]
pub struct PageArgs {
    /// Page number, starting at 1
    #[arg(long)]
    pub page: Option<u64>,
    /// Rows per page
    #[arg(long = "per-page")]
    pub per_page: Option<u64>,
    /// Fetch every row instead of one page
    #[arg(long, conflicts_with_all = ["page", "per_page"])]
    pub all: bool,
}

impl PageArgs {
    pub fn query(&self) -> PageQuery {
        if self.all {
            return PageQuery::all();
        }
        let mut query = PageQuery::page(self.page.unwrap_or(1));
        if let Some(per_page) = self.per_page {
            query = query.with_per_page(per_page);
        }
        query
    }
}

/// Read a file to upload, keeping its original name.
pub fn read_payload(path: &Path) -> Result<FilePayload> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .with_context(|| format!("no usable file name in {}", path.display()))?;
    let content =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(FilePayload::new(file_name, content))
}

/// Render a command result on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to render the result")?;
    println!("{rendered}");
    Ok(())
}

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use ycdash_lib::{validation, CachedClient, Snapshot, DEFAULT_TAG};

#[derive(Args)]
pub struct SnapshotArgs {
    /// Directory to write yc_ai_companies.json and yc_ai_stats.json into
    #[arg(long)]
    pub out: PathBuf,

    /// Tag whose companies make up the snapshot
    #[arg(long, default_value = DEFAULT_TAG)]
    pub tag: String,
}

pub async fn run(args: &SnapshotArgs, client: &Arc<CachedClient>) -> Result<()> {
    let tag = validation::validate_tag(&args.tag)?;
    let client = Arc::clone(client);
    let companies =
        super::load("companies", async move { client.get_tag_companies(&tag).await }).await?;

    let snapshot = Snapshot::from_companies(&companies);
    snapshot.write_dir(&args.out)?;

    eprintln!(
        "Wrote {} companies to {}",
        snapshot.companies.len(),
        args.out.display()
    );
    Ok(())
}

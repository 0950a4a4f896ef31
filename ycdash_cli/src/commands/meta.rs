use std::sync::Arc;

use anyhow::Result;
use ycdash_lib::CachedClient;

use crate::output::{print_json, print_rows, MetaRow, OutputFormat};

pub async fn run(client: &Arc<CachedClient>, format: &OutputFormat) -> Result<()> {
    let client = Arc::clone(client);
    let meta = super::load("metadata", async move { client.get_meta().await }).await?;

    match format {
        OutputFormat::Json => print_json(&*meta),
        _ => {
            let mut rows = vec![MetaRow::new(
                "last_updated",
                meta.last_updated.as_deref().unwrap_or("-"),
            )];
            for (key, value) in &meta.extra {
                rows.push(MetaRow::new(key, &value.to_string()));
            }
            print_rows(Some("Dataset metadata"), rows, format)?;
        }
    }
    Ok(())
}

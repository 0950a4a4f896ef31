use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use ycdash_lib::{filter, normalize_all, validation, CachedClient, Page};

use crate::output::{build_company_rows, print_rows, OutputFormat};

#[derive(Args)]
pub struct CompaniesArgs {
    /// Case-insensitive search over name, batch, country, status and location
    #[arg(long)]
    pub search: Option<String>,

    /// Page number (clamped to the last page)
    #[arg(long, default_value = "1")]
    pub page: usize,

    /// Results per page
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Tag to list (defaults to artificial-intelligence)
    #[arg(long)]
    pub tag: Option<String>,
}

pub async fn run(
    args: &CompaniesArgs,
    client: &Arc<CachedClient>,
    default_page_size: usize,
    format: &OutputFormat,
) -> Result<()> {
    let page_size = validation::validate_page_size(args.page_size.unwrap_or(default_page_size))?;
    let page = validation::validate_page(args.page)?;
    let query = match &args.search {
        Some(q) => validation::validate_search(q)?,
        None => String::new(),
    };
    let tag = match &args.tag {
        Some(t) => Some(validation::validate_tag(t)?),
        None => None,
    };

    let client = Arc::clone(client);
    let raw = super::load("companies", async move {
        match tag {
            Some(tag) => client.get_tag_companies(&tag).await,
            None => client.get_ai_companies().await,
        }
    })
    .await?;

    let normalized = normalize_all(&raw);
    let matches = filter(&normalized, &query);
    let page = Page::clamped(&matches, page_size, page);

    eprintln!(
        "Page {}/{} ({} matching companies)",
        page.number, page.total_pages, page.total_items
    );

    print_rows(None, build_company_rows(page.items), format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: CompaniesArgs,
    }

    #[test]
    fn test_search_help_lists_every_matched_field() {
        let cmd = TestCli::command();
        let search = cmd
            .get_arguments()
            .find(|a| a.get_id() == "search")
            .expect("search flag exists");
        let help = search.get_help().map(|h| h.to_string()).unwrap_or_default();
        for field in ["name", "batch", "country", "status", "location"] {
            assert!(help.contains(field), "search help should mention {field}: {help}");
        }
    }

    #[test]
    fn test_search_flag_parses() {
        let cli = TestCli::parse_from(["companies", "--search", "bengaluru", "--page", "2"]);
        assert_eq!(cli.args.search.as_deref(), Some("bengaluru"));
        assert_eq!(cli.args.page, 2);
        assert_eq!(cli.args.page_size, None);
    }
}

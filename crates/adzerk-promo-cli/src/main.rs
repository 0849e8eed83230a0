mod logging;

use anyhow::Context;
use clap::Parser;
use serde_json::{Map, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use adzerk_promo_core::impls::InMemoryPromoCatalog;
use adzerk_promo_core::{FetcherBuilder, PageContext, PromoConfig};

/// Ask the Adzerk engine for a promo decision and print the decorated promo.
#[derive(Debug, Parser)]
#[command(name = "adzerk-promo", version)]
struct Cli {
    /// Config file (yaml / toml / json). `ADZERK_*` env vars override it.
    #[arg(short, long, env = "ADZERK_PROMO_CONFIG")]
    config: Option<PathBuf>,

    /// Site of the current page. Without it the front page keywords are used.
    #[arg(long)]
    post_site: Option<String>,

    /// Seed the local promo catalog: `<link>:<campaign>[=<json object>]`.
    #[arg(long = "promo", value_parser = parse_promo_seed)]
    promos: Vec<PromoSeed>,

    /// Print the page script config block and exit.
    #[arg(long)]
    show_client_config: bool,
}

#[derive(Debug, Clone, PartialEq)]
struct PromoSeed {
    link: String,
    campaign: String,
    data: Map<String, Value>,
}

fn parse_promo_seed(s: &str) -> Result<PromoSeed, String> {
    let (key, data) = match s.split_once('=') {
        Some((key, json)) => {
            let data = match serde_json::from_str::<Value>(json) {
                Ok(Value::Object(map)) => map,
                Ok(_) => return Err("promo data must be a JSON object".to_string()),
                Err(e) => return Err(format!("invalid promo data: {e}")),
            };
            (key, data)
        }
        None => (s, Map::new()),
    };

    let (link, campaign) = key
        .split_once(':')
        .ok_or_else(|| format!("expected <link>:<campaign>, got {key:?}"))?;
    if link.is_empty() || campaign.is_empty() {
        return Err(format!("expected <link>:<campaign>, got {key:?}"));
    }

    Ok(PromoSeed {
        link: link.to_string(),
        campaign: campaign.to_string(),
        data,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();

    let config = PromoConfig::load(cli.config.as_deref()).context("failed to load config")?;

    if cli.show_client_config {
        println!("{}", serde_json::to_string_pretty(&config.client_config())?);
        return Ok(());
    }

    let catalog = cli
        .promos
        .into_iter()
        .fold(InMemoryPromoCatalog::new(), |catalog, seed| {
            catalog.with_promo(seed.link, seed.campaign, seed.data)
        });
    let seeded = catalog.len().await;
    info!(promos = seeded, endpoint = %config.endpoint, "starting");

    let fetcher = FetcherBuilder::from_config(config)?
        .promo_fetcher(Arc::new(catalog))
        .build()?;

    let page = PageContext {
        post_site: cli.post_site,
    };
    match fetcher.request_promo(&page).await? {
        Some(promo) => println!("{}", serde_json::to_string_pretty(&promo)?),
        None => println!("false"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_bare_seed() {
        let seed = parse_promo_seed("t3_abc:t8_def").unwrap();
        assert_eq!(seed.link, "t3_abc");
        assert_eq!(seed.campaign, "t8_def");
        assert!(seed.data.is_empty());
    }

    #[test]
    fn parses_seed_with_data() {
        let seed = parse_promo_seed(r#"t3_abc:t8_def={"title":"hi","url":"http://x=y"}"#).unwrap();
        assert_eq!(seed.data.get("title"), Some(&json!("hi")));
        assert_eq!(seed.data.get("url"), Some(&json!("http://x=y")));
    }

    #[test]
    fn rejects_bad_seeds() {
        assert!(parse_promo_seed("t3_abc").is_err());
        assert!(parse_promo_seed(":t8_def").is_err());
        assert!(parse_promo_seed("t3_abc:t8_def=[1]").is_err());
        assert!(parse_promo_seed("t3_abc:t8_def={").is_err());
    }

    #[test]
    fn cli_collects_repeated_promos() {
        let cli = Cli::try_parse_from([
            "adzerk-promo",
            "--post-site",
            "pics",
            "--promo",
            "t3_a:t8_a",
            "--promo",
            "t3_b:t8_b={}",
        ])
        .unwrap();
        assert_eq!(cli.post_site.as_deref(), Some("pics"));
        assert_eq!(cli.promos.len(), 2);
        assert!(!cli.show_client_config);
    }
}

use std::{str::FromStr, sync::Arc};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use client_core::{
    load_settings, render_cards, render_text, CartAction, CatalogLoader, HttpCatalogSource,
    LoadOutcome, Storefront,
};
use shared::domain::ProductId;
use tracing_subscriber::EnvFilter;

/// Loads the product catalog once, replays cart actions, and prints the resulting cards.
#[derive(Parser, Debug)]
struct Args {
    /// Overrides the configured catalog endpoint.
    #[arg(long)]
    catalog_url: Option<String>,
    /// Cart action as `<verb>:<id>`; verbs are add, bulk, inc, dec, delete. Repeatable.
    #[arg(long = "action", value_name = "VERB:ID")]
    actions: Vec<ScriptedAction>,
    /// Print the final catalog and quantities as JSON instead of cards.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy)]
struct ScriptedAction(CartAction);

impl FromStr for ScriptedAction {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        let (verb, id) = raw
            .split_once(':')
            .ok_or_else(|| anyhow!("expected <verb>:<id>, got '{raw}'"))?;
        let id = ProductId(
            id.trim()
                .parse::<i64>()
                .with_context(|| format!("invalid product id in '{raw}'"))?,
        );
        let action = match verb.trim().to_ascii_lowercase().as_str() {
            "add" => CartAction::AddToCart(id),
            "bulk" => CartAction::Bulk(id),
            "inc" | "increase" => CartAction::Increase(id),
            "dec" | "decrease" => CartAction::Decrease(id),
            "delete" | "del" => CartAction::Delete(id),
            other => return Err(anyhow!("unknown cart action '{other}'")),
        };
        Ok(Self(action))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(url) = args.catalog_url {
        settings.catalog_url = url;
    }

    let source = HttpCatalogSource::from_settings(&settings)
        .with_context(|| format!("failed to set up catalog source for {}", settings.catalog_url))?;
    let loader = CatalogLoader::new(Arc::new(source));

    let mut storefront = Storefront::new();
    if let LoadOutcome::Loaded(products) = loader.load().await {
        storefront.replace_catalog(products);
    }

    for ScriptedAction(action) in args.actions {
        if !storefront.is_listed(action.product_id()) {
            tracing::warn!(product_id = %action.product_id(), ?action, "product not listed; action has no effect");
        }
        storefront.apply(action);
    }

    if args.json {
        let quantities: std::collections::BTreeMap<String, u32> = storefront
            .quantities()
            .iter()
            .map(|(id, qty)| (id.to_string(), qty))
            .collect();
        let snapshot = serde_json::json!({
            "products": storefront.products(),
            "quantities": quantities,
        });
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        let cards = render_cards(storefront.products(), storefront.quantities());
        print!("{}", render_text(&cards));
    }

    Ok(())
}

//! Card evaluation for the `inspect` and `fetch` commands.
//!
//! Both commands end the same way: pick a slot configuration for the product,
//! load its variants into a `SelectionController`, replay the requested
//! selections, and print what the card would render.

use std::fmt::{self, Write as _};
use std::path::Path;

use anyhow::Context;
use swatch_core::{AppConfig, ProductData, SlotConfig};
use swatch_engine::{InventoryDisplay, RenderedOption, SelectionController};
use swatch_storefront::{
    normalize_product, ProductDocument, ProductSource, ShopSource, StorefrontClient,
};

pub(crate) fn run_inspect(
    config: &AppConfig,
    path: &Path,
    selections: &[(String, String)],
) -> anyhow::Result<()> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let document: ProductDocument = serde_json::from_str(&body)
        .with_context(|| format!("{} is not a product document", path.display()))?;
    let product = normalize_product(document.into_product())?;

    let slots = slot_config_for(config, &product)?;
    let card = evaluate(&product, slots, selections, config.low_stock_threshold);
    print!("{}", render_report(&product, &card)?);
    Ok(())
}

pub(crate) async fn run_fetch(
    config: &AppConfig,
    handle: &str,
    shop: Option<&str>,
    selections: &[(String, String)],
) -> anyhow::Result<()> {
    let shop_url = shop
        .map(str::to_owned)
        .or_else(|| config.storefront_url.clone())
        .ok_or_else(|| {
            anyhow::anyhow!("no storefront URL: pass --shop or set SWATCH_STOREFRONT_URL")
        })?;

    let client = StorefrontClient::new(config.request_timeout_secs, &config.user_agent)
        .map_err(|e| anyhow::anyhow!("failed to build storefront client: {e}"))?;
    let source = ShopSource::new(client, shop_url);

    let product = source
        .fetch_product(handle)
        .await
        .with_context(|| format!("failed to load '{handle}' from {}", source.shop_url()))?;

    let slots = slot_config_for(config, &product)?;
    let card = evaluate(&product, slots, selections, config.low_stock_threshold);
    print!("{}", render_report(&product, &card)?);
    Ok(())
}

/// Slot configuration for `product`: the card entry in the cards file when one
/// exists for its handle, otherwise derived from the product's option names.
fn slot_config_for(config: &AppConfig, product: &ProductData) -> anyhow::Result<SlotConfig> {
    if config.cards_path.exists() {
        let cards = swatch_core::load_card_configs(&config.cards_path)?;
        if let Some(card) = cards.find(&product.handle) {
            tracing::debug!(handle = %product.handle, "using slot config from cards file");
            return Ok(card.slot_config()?);
        }
    } else {
        tracing::debug!(
            path = %config.cards_path.display(),
            "cards file not found; deriving slots from option names"
        );
    }
    Ok(product.slot_config()?)
}

/// One rendered option per distinct value in each configured slot.
pub(crate) fn rendered_options(product: &ProductData, slots: &SlotConfig) -> Vec<RenderedOption> {
    slots
        .axes()
        .flat_map(|(axis, slot)| {
            product
                .option_values(slot)
                .into_iter()
                .map(move |value| RenderedOption {
                    axis: axis.clone(),
                    value: value.to_owned(),
                })
        })
        .collect()
}

pub(crate) fn evaluate(
    product: &ProductData,
    slots: SlotConfig,
    selections: &[(String, String)],
    low_stock_threshold: u32,
) -> SelectionController {
    let options = rendered_options(product, &slots);
    let mut card = SelectionController::new(slots, options, low_stock_threshold, ());
    card.load_variant_data(product.variants.clone());
    for (axis, value) in selections {
        card.select_option(axis, Some(value));
    }
    card
}

pub(crate) fn render_report(
    product: &ProductData,
    card: &SelectionController,
) -> Result<String, fmt::Error> {
    let view = card.snapshot();
    let mut out = String::new();

    writeln!(
        out,
        "{} [{}]: {} variants",
        product.title,
        product.handle,
        product.variant_count()
    )?;
    writeln!(out, "options:")?;
    for option in &view.options {
        let state = if option.enabled { "available" } else { "unavailable" };
        writeln!(out, "  {}={} {state}", option.axis, option.value)?;
    }

    let enabled = if view.button.enabled { "enabled" } else { "disabled" };
    writeln!(out, "button: {} ({enabled})", view.button.label)?;

    match card.matched_variant() {
        Some(variant) => writeln!(out, "variant: {} {}", variant.id, variant.title)?,
        None => writeln!(out, "variant: none")?,
    }

    match view.inventory {
        InventoryDisplay::Quantity {
            low_stock: true, ..
        } => writeln!(out, "inventory: {} (low stock)", view.inventory)?,
        InventoryDisplay::Quantity { .. } => writeln!(out, "inventory: {}", view.inventory)?,
        InventoryDisplay::Hidden => writeln!(out, "inventory: hidden")?,
    }

    Ok(out)
}

use anyhow::Context;

use shopfront_catalog::Catalog;
use shopfront_session::Storefront;

fn load_catalog() -> anyhow::Result<Catalog> {
    match std::env::var("SHOPFRONT_CATALOG") {
        Ok(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read catalog {path}"))?;
            Catalog::from_json(&json).with_context(|| format!("invalid catalog {path}"))
        }
        Err(_) => {
            tracing::warn!("SHOPFRONT_CATALOG not set; using bundled sample catalog");
            Catalog::sample().context("bundled sample catalog is invalid")
        }
    }
}

fn main() -> anyhow::Result<()> {
    shopfront_observability::init();

    let shop = Storefront::new(load_catalog()?);
    let catalog = shop.catalog();

    tracing::info!(
        products = catalog.products().len(),
        services = catalog.services().len(),
        categories = ?catalog.categories(),
        "catalog ready"
    );

    for bucket in catalog.price_buckets() {
        tracing::info!(%bucket, "price bucket");
    }

    for product in shop.featured_products() {
        tracing::info!(
            id = %product.id,
            name = %product.name,
            price = %shop.format_price(product.price),
            "featured product"
        );
    }

    for service in shop.featured_services() {
        tracing::info!(
            name = %service.name,
            price_range = %service.price_range,
            "featured service"
        );
    }

    for product in shop.low_stock() {
        tracing::warn!(id = %product.id, stock = product.stock, "low stock");
    }

    Ok(())
}

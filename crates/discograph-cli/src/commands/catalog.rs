use anyhow::Result;
use discograph_core::{Catalog, CatalogFilter};
use discograph_fetch::{CatalogFetcher, Config};

/// Fetch the merged catalog and print it as a table.
pub async fn run_catalog(config: &Config, filter_key: &str) -> Result<()> {
    let filter = CatalogFilter::from_key(filter_key)?;

    let mut fetcher = CatalogFetcher::new(config)?;
    let releases = fetcher.fetch_catalog().await;
    log::debug!("fetched {} releases", releases.len());

    let mut catalog = Catalog::new();
    catalog.replace(releases);
    catalog.set_filter(filter);

    let filtered = catalog.filtered();
    if filtered.is_empty() {
        println!("No releases found.");
        return Ok(());
    }

    println!(
        "{:<32} {:<7} {:>6}  {:<12} {}",
        "Title", "Type", "Tracks", "Released", "Links"
    );
    for release in &filtered {
        println!(
            "{:<32} {:<7} {:>6}  {:<12} {}",
            release.name,
            release.type_label(),
            release.track_count,
            release.release_date,
            release.links.available().count(),
        );
    }

    println!(
        "\n{} of {} releases (filter: {})",
        filtered.len(),
        catalog.len(),
        catalog.filter().key()
    );

    Ok(())
}

use anyhow::Result;
use discograph_fetch::{Config, LinkResolver};

/// Resolve and print the link set for one release.
pub async fn run_links(config: &Config, name: &str, source_url: Option<&str>) -> Result<()> {
    let resolver = LinkResolver::new(config)?;
    let links = resolver.resolve(name, source_url).await;

    println!("Listening links for \"{name}\":\n");
    for (platform, url) in links.available() {
        println!("  {:<12} {}", platform.display_name(), url);
    }

    if source_url.is_none() {
        println!("\n(search fallbacks only; pass --url for resolved links)");
    }

    Ok(())
}

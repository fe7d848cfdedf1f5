//! End-to-end catalog-merge scenarios over the pure pipeline steps.
//!
//! No live network: the two source payloads are either constructed as the
//! proxy would return them or served from a loopback stub, and link
//! resolution exercises the fallback path (including actual service
//! failure against an unreachable address and an erroring endpoint).

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use discograph_core::{Origin, Platform, ReleaseType};
use discograph_fetch::catalog_api::CatalogAlbum;
use discograph_fetch::fetcher::{merge_catalog, normalize_album, secondary_releases};
use discograph_fetch::usergen::UserGenTrack;
use discograph_fetch::{CatalogFetcher, Config, FetchError, LinkResolver, SonglinkClient};

/// A loopback stand-in for the proxy API. Serves a fixed catalog, an
/// empty secondary feed, and a configurable `/links` response, counting
/// `/links` hits.
struct StubApi {
    base_url: String,
    links_hits: Arc<AtomicUsize>,
}

async fn spawn_stub_api(catalog_body: &str, links_status: u16, links_body: &str) -> StubApi {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("loopback bind succeeds");
    let addr = listener.local_addr().expect("bound socket has an address");

    let links_hits = Arc::new(AtomicUsize::new(0));
    let hits = Arc::clone(&links_hits);
    let catalog_body = catalog_body.to_string();
    let links_body = links_body.to_string();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let hits = Arc::clone(&hits);
            let catalog_body = catalog_body.clone();
            let links_body = links_body.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 4096];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]).into_owned();
                let path = request.split_whitespace().nth(1).unwrap_or("/");

                let (status, reason, body) = if path.starts_with("/links") {
                    hits.fetch_add(1, Ordering::SeqCst);
                    let reason = if links_status == 200 {
                        "OK"
                    } else {
                        "Internal Server Error"
                    };
                    (links_status, reason, links_body)
                } else if path.starts_with("/catalog") {
                    (200, "OK", catalog_body)
                } else if path.starts_with("/usergen") {
                    (200, "OK", "[]".to_string())
                } else {
                    (404, "Not Found", "{}".to_string())
                };

                let response = format!(
                    "HTTP/1.1 {status} {reason}\r\n\
                     content-type: application/json\r\n\
                     content-length: {}\r\n\
                     connection: close\r\n\r\n{body}",
                    body.len()
                );
                socket.write_all(response.as_bytes()).await.ok();
            });
        }
    });

    StubApi {
        base_url: format!("http://{addr}"),
        links_hits,
    }
}

fn primary_payload() -> Vec<CatalogAlbum> {
    serde_json::from_str(
        r#"[{
            "id": "alb1",
            "name": "Perpetual Motion",
            "albumType": "single",
            "releaseDate": "2024-12-23",
            "releaseDatePrecision": "day",
            "totalTracks": 4,
            "images": [{"url": "https://img.example/pm.jpg"}],
            "externalUrls": {"spotify": "https://open.spotify.com/album/alb1"}
        }]"#,
    )
    .expect("primary payload deserializes")
}

fn secondary_payload() -> Vec<UserGenTrack> {
    serde_json::from_str(
        r#"[
            {
                "id": 100,
                "title": "Perpetual Motion",
                "duration": 240000,
                "createdAt": "2024-12-20T00:00:00Z",
                "permalinkUrl": "https://soundcloud.com/nts/perpetual-motion",
                "sharing": "public"
            },
            {
                "id": 101,
                "title": "Side B",
                "duration": 1320000,
                "createdAt": "2024-11-02T10:30:00Z",
                "permalinkUrl": "https://soundcloud.com/nts/side-b",
                "sharing": "public"
            }
        ]"#,
    )
    .expect("secondary payload deserializes")
}

#[tokio::test]
async fn merged_catalog_dedups_classifies_and_sorts() {
    let resolver = LinkResolver::new(&Config::default()).expect("resolver builds");

    let primary = primary_payload();
    let primary_names: Vec<&str> = primary.iter().map(|a| a.name.as_str()).collect();

    let secondary = secondary_releases(&secondary_payload(), &primary_names);

    let mut normalized_primary = Vec::new();
    for album in &primary {
        let release = normalize_album(album).expect("album normalizes");
        // Fallback-only resolution: no service call is made without a
        // reachable endpoint being consulted first in this test.
        let links = resolver.resolve(&release.name, None).await;
        normalized_primary.push(release.with_links(links));
    }

    let catalog = merge_catalog(normalized_primary, secondary);

    // The duplicate "Perpetual Motion" upload was dropped; two releases
    // remain, newest (2024-12-23) first.
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog[0].name, "Perpetual Motion");
    assert_eq!(catalog[0].origin, Origin::Primary);
    assert_eq!(catalog[1].name, "Side B");

    // 22 minutes means a mix.
    assert_eq!(catalog[1].release_type, ReleaseType::Mix);

    // The primary release carries a link for every platform.
    for platform in Platform::ALL {
        assert!(
            catalog[0].links.url(platform).is_some(),
            "no link for {platform:?}"
        );
    }

    // The secondary release carries only its own permalink.
    assert_eq!(catalog[1].links.len(), 1);
    assert_eq!(
        catalog[1].links.url(Platform::SoundCloud),
        Some("https://soundcloud.com/nts/side-b")
    );
}

#[tokio::test]
async fn resolution_failure_degrades_to_exact_fallback_set() {
    // Nothing listens here; the service call fails immediately.
    let config = Config {
        api_base_url: "http://127.0.0.1:1".to_string(),
        ..Config::default()
    };
    let resolver = LinkResolver::new(&config).expect("resolver builds");

    let resolved = resolver
        .resolve("Perpetual Motion", Some("https://open.spotify.com/album/alb1"))
        .await;

    assert_eq!(resolved, resolver.fallback_links("Perpetual Motion"));
}

#[tokio::test]
async fn repeated_fetch_resolves_each_release_once() {
    let catalog = r#"[{
        "id": "alb1",
        "name": "Perpetual Motion",
        "albumType": "single",
        "releaseDate": "2024-12-23",
        "totalTracks": 4,
        "externalUrls": {"spotify": "https://open.spotify.com/album/alb1"}
    }]"#;
    let links = r#"{
        "linksByPlatform": {
            "spotify": {"url": "https://open.spotify.com/album/alb1"}
        }
    }"#;
    let stub = spawn_stub_api(catalog, 200, links).await;

    let config = Config {
        api_base_url: stub.base_url.clone(),
        ..Config::default()
    };
    let mut fetcher = CatalogFetcher::new(&config).expect("fetcher builds");

    let first = fetcher.fetch_catalog().await;
    assert_eq!(first.len(), 1);
    // The resolved link won over the search fallback.
    assert_eq!(
        first[0].links.url(Platform::Spotify),
        Some("https://open.spotify.com/album/alb1")
    );

    let second = fetcher.fetch_catalog().await;
    assert_eq!(second.len(), 1);

    // The second fetch hit the session cache instead of the service.
    assert_eq!(stub.links_hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn resolution_service_error_status_degrades_to_fallbacks() {
    let stub = spawn_stub_api("[]", 500, "{}").await;

    let client = SonglinkClient::new(stub.base_url.as_str()).expect("client builds");
    let err = client
        .resolve("https://open.spotify.com/album/alb1")
        .await
        .expect_err("a 500 answer is an error");
    assert!(matches!(err, FetchError::Http { .. }));

    let config = Config {
        api_base_url: stub.base_url.clone(),
        ..Config::default()
    };
    let resolver = LinkResolver::new(&config).expect("resolver builds");
    let resolved = resolver
        .resolve("Perpetual Motion", Some("https://open.spotify.com/album/alb1"))
        .await;
    assert_eq!(resolved, resolver.fallback_links("Perpetual Motion"));
}

#[test]
fn secondary_only_catalog_survives_primary_failure() {
    // Partial preservation: when the primary fetch degrades to an empty
    // list, the secondary releases still make up the catalog.
    let secondary = secondary_releases(&secondary_payload(), &[]);
    let catalog = merge_catalog(Vec::new(), secondary);

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog[0].name, "Perpetual Motion");
    assert_eq!(catalog[1].name, "Side B");
}

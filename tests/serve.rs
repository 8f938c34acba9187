//! Serving loaded routes over a real socket.

use std::time::Duration;

use route_directory::config::TimeoutConfig;
use route_directory::providers::{AppInfo, APP_INFO};
use route_directory::{Container, HttpServer, ProviderRegistry, RouteDirectory, Shutdown};
use serde_json::Value;

mod common;

use common::RouteTree;

#[tokio::test]
async fn test_serves_mounted_routes_until_shutdown() {
    let tree = RouteTree::new();
    tree.route("index.toml", "health");
    tree.route("about/index.toml", "info");
    tree.route("debug/echo.toml", "echo");
    tree.file(
        "pages/Welcome.toml",
        "provider = \"static\"\n[options]\nbody = \"<h1>hi</h1>\"\ncontent_type = \"text/html\"\n",
    );

    let mut container = Container::new();
    container.provide(
        APP_INFO,
        AppInfo {
            name: "demo".into(),
            version: "0.0.1".into(),
        },
    );

    let plugin = RouteDirectory::new(tree.config());
    let mut server = HttpServer::new(TimeoutConfig::default());
    let outcome = plugin
        .load(&container, &ProviderRegistry::with_builtin(), &mut server)
        .await
        .unwrap();
    assert_eq!(outcome.mounted(), 4);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let base = format!("http://{addr}");

    let health: Value = client.get(&base).send().await.unwrap().json().await.unwrap();
    assert_eq!(health["status"], "ok");

    let about: Value = client
        .get(format!("{base}/about"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(about["name"], "demo");

    let echo = client.get(format!("{base}/debug/echo/a/b")).send().await.unwrap();
    assert!(echo.headers().contains_key("x-request-id"));
    let echo: Value = echo.json().await.unwrap();
    assert_eq!(echo["path"], "/a/b");
    assert_eq!(echo["original_path"], "/debug/echo/a/b");

    let page = client.get(format!("{base}/pages/welcome")).send().await.unwrap();
    assert_eq!(page.headers()["content-type"], "text/html");
    assert_eq!(page.text().await.unwrap(), "<h1>hi</h1>");

    let missing = client.get(format!("{base}/nope")).send().await.unwrap();
    assert_eq!(missing.status(), 404);

    drop(client);
    shutdown.trigger();
    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server did not stop")
        .unwrap();
    assert!(result.is_ok());
}

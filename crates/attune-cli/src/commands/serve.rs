//! Server command implementation

use anyhow::Result;
use attune_core::AttuneConfig;

/// Apply `--host`/`--port` on top of the loaded config
pub fn apply_overrides(
    mut config: AttuneConfig,
    host: Option<String>,
    port: Option<u16>,
) -> AttuneConfig {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    config
}

pub async fn cmd_serve(config: AttuneConfig, host: Option<String>, port: Option<u16>) -> Result<()> {
    let config = apply_overrides(config, host, port);

    println!("🚀 Starting Attune web server...");
    println!(
        "   Listening: http://{}:{}",
        config.server.host, config.server.port
    );
    if config.server.allowed_origins.is_empty() {
        println!("   CORS: same-origin only");
    } else {
        println!(
            "   CORS origins: {}",
            config.server.allowed_origins.join(", ")
        );
    }
    println!();
    println!("   Press Ctrl+C to stop");

    attune_server::serve_with_config(attune_server::ServerConfig::from(&config)).await?;

    Ok(())
}

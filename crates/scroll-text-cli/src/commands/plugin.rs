use std::io;
use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use scroll_text_core::{
    action::{HttpTitleSource, JsonLineHost, Plugin},
    AppConfig,
};

/// Serve the host protocol until stdin closes or Ctrl-C
pub async fn run(config: &AppConfig) -> Result<()> {
    let host = Arc::new(JsonLineHost::new(io::stdout()));
    let mut plugin = Plugin::new(host, config.scroll.clone());

    if let Some(source) = HttpTitleSource::from_config(&config.title)? {
        info!("Fetching titles for empty keys from {}", source.url());
        plugin = plugin.with_title_source(Arc::new(source));
    }

    info!("Plugin started, waiting for host events");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line? {
                    Some(line) => plugin.handle_line(&line).await,
                    None => {
                        info!("Host closed the connection");
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted");
                break;
            }
        }
    }

    plugin.shutdown();
    Ok(())
}

//! Interactive terminal entry point for the repo explorer.
//!
//! Plain input lines feed the search bar; `/open <login>` toggles a
//! user's panel; `/quit` exits. The page is re-rendered right after a
//! dispatch (showing the pending phase) and again once the action's
//! effects have completed.

use repo_explorer::github::ApiGateway;
use repo_explorer::{Config, Page, SearchBar};
use repo_explorer_github::GithubClient;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const EFFECT_WAIT: Duration = Duration::from_secs(30);
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let client = GithubClient::with_options(config.github.api_url.clone(), config.request_timeout())?;
    let page = Page::new(
        Arc::new(ApiGateway::new(client)),
        config.reveal_delay(),
        config.repo_fetch_timeout(),
    );

    println!("{}", page.render().await);
    println!("Type a username fragment to search, /open <login> to toggle a panel, /quit to exit.");

    let mut search_bar = SearchBar::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim() == "/quit" {
            break;
        }

        let handle = if let Some(login) = line.trim().strip_prefix("/open ") {
            Some(page.toggle_user(login.trim().to_string()).await?)
        } else {
            search_bar.set_input(line);
            match search_bar.submit() {
                Some(query) => Some(page.search(query).await?),
                // Blank input dispatches nothing.
                None => None,
            }
        };

        if let Some(mut handle) = handle {
            // First paint shows the pending phase.
            println!("{}", page.render().await);
            if handle.wait_with_timeout(EFFECT_WAIT).await.is_err() {
                tracing::warn!("effects still running after {EFFECT_WAIT:?}");
            }
        }

        println!("{}", page.render().await);
    }

    if let Err(error) = page.shutdown(SHUTDOWN_TIMEOUT).await {
        tracing::warn!(%error, "shutdown incomplete");
    }

    Ok(())
}

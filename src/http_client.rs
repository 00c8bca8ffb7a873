use std::time::Duration;

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use reqwest::blocking::Client;

const USER_AGENT: &str = "ipl_terminal/0.1";

static CLIENT: OnceCell<Client> = OnceCell::new();

/// Shared blocking client. The timeout is fixed by whichever caller builds it first.
pub fn http_client(timeout: Option<Duration>) -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        // reqwest's blocking client defaults to a 30s timeout; `None` here means no limit.
        Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .context("failed to build http client")
    })
}

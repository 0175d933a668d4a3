//! 共通HTTPヘルパー

use crate::error::{DevcnError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::{Client, Url};

/// GET して本文をテキストで返す
///
/// 非2xxは `DevcnError::RegistryFetch`（ステータス付き）。リトライはしない。
pub async fn get_text(client: &Client, url: &Url) -> Result<String> {
    tracing::debug!(%url, "GET");

    let response = client.get(url.clone()).send().await?;
    let status = response.status();

    if !status.is_success() {
        return Err(DevcnError::RegistryFetch {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    Ok(response.text().await?)
}

/// スピナー付きで GET
pub async fn get_text_with_spinner(client: &Client, url: &Url, message: &str) -> Result<String> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = get_text(client, url).await;

    pb.finish_and_clear();
    result
}

//! Where the rubric document comes from: an HTTP(S) URL or a local file.

#[cfg(test)]
#[path = "source_test.rs"]
mod source_test;

use rubric::Document;

use crate::CliError;

pub const DEFAULT_SOURCE: &str = "http://127.0.0.1:4173/ai-consciousness-watch-i18n.json";

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

pub async fn load(source: &str) -> Result<Document, CliError> {
    let raw = if is_url(source) {
        fetch(source).await?
    } else {
        tokio::fs::read_to_string(source).await.map_err(|e| CliError::Io {
            path: source.to_owned(),
            source: e,
        })?
    };
    Ok(Document::from_json(&raw)?)
}

async fn fetch(url: &str) -> Result<String, CliError> {
    let response = reqwest::get(url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::Status {
            url: url.to_owned(),
            status: status.as_u16(),
        });
    }
    Ok(response.text().await?)
}

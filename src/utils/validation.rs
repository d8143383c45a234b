// Validation utilities
use crate::error::{Error, Result};
use tracing::warn;
use url::Url;

/// Validate that a configured base URL is absolute, uses http/https and has a host
pub fn validate_base_url(url_str: &str) -> Result<Url> {
    let url = Url::parse(url_str)?;

    match url.scheme() {
        "http" | "https" => {}
        _ => {
            warn!(
                "Rejected non-HTTP(S) base URL scheme: {} in URL: {}",
                url.scheme(),
                url_str
            );
            return Err(Error::Validation(format!(
                "URL must use http or https scheme: {url_str}"
            )));
        }
    }

    if url.host_str().is_none() {
        return Err(Error::Validation("URL must have a valid host".to_string()));
    }

    if url.query().is_some() || url.fragment().is_some() {
        return Err(Error::Validation(
            "Base URL must not carry a query string or fragment".to_string(),
        ));
    }

    Ok(url)
}

/// Validate an item identifier before it is sent upstream
pub fn validate_item_id(id: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(Error::Validation("Item id must not be empty".to_string()));
    }
    Ok(())
}

use std::time::Duration;

use reqwest::{Client, Url};
use swatch_core::ProductData;

use crate::error::StorefrontError;
use crate::normalize::normalize_product;
use crate::types::{ProductDocument, StorefrontProduct};

/// HTTP client for a storefront's public per-product document
/// (`/products/<handle>.js`).
///
/// Rate limiting (429), not-found (404), and other non-2xx responses surface
/// as typed errors. Nothing is retried: a card that fails to load keeps its
/// optimistic state.
pub struct StorefrontClient {
    client: Client,
}

/// Extracts the scheme+host origin from a shop URL.
///
/// Given `"https://shop.example.com/collections/shirts"`, returns
/// `"https://shop.example.com"`, so product documents are always fetched from
/// the store root.
pub(crate) fn extract_store_origin(shop_url: &str) -> String {
    Url::parse(shop_url).map_or_else(
        |_| {
            // fallback: take "https://host" by splitting on '/' and taking first 3 parts
            shop_url
                .trim_end_matches('/')
                .splitn(4, '/')
                .take(3)
                .collect::<Vec<_>>()
                .join("/")
        },
        |u| u.origin().ascii_serialization(),
    )
}

impl StorefrontClient {
    /// Creates a `StorefrontClient` with the given request timeout and
    /// `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, StorefrontError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches the raw product document for `handle`.
    ///
    /// Accepts both the bare `.js` shape and the `{"product": ...}` envelope.
    ///
    /// # Errors
    ///
    /// - [`StorefrontError::InvalidShopUrl`] / [`StorefrontError::InvalidHandle`]:
    ///   the request URL cannot be built.
    /// - [`StorefrontError::RateLimited`]: HTTP 429.
    /// - [`StorefrontError::NotFound`]: HTTP 404.
    /// - [`StorefrontError::UnexpectedStatus`]: any other non-2xx status.
    /// - [`StorefrontError::Http`]: network or TLS failure.
    /// - [`StorefrontError::Deserialize`]: the body is not a product document.
    pub async fn fetch_product(
        &self,
        shop_url: &str,
        handle: &str,
    ) -> Result<StorefrontProduct, StorefrontError> {
        let url = Self::product_url(shop_url, handle)?;
        tracing::debug!(url = %url, "fetching product document");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(60);

            return Err(StorefrontError::RateLimited {
                domain: extract_domain(shop_url),
                retry_after_secs,
            });
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(StorefrontError::NotFound { url });
        }

        if !status.is_success() {
            return Err(StorefrontError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let document = serde_json::from_str::<ProductDocument>(&body).map_err(|e| {
            StorefrontError::Deserialize {
                context: format!("product {handle} from {shop_url}"),
                source: e,
            }
        })?;

        Ok(document.into_product())
    }

    /// Fetches and normalizes the product for `handle`.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::fetch_product`] or
    /// [`normalize_product`].
    pub async fn fetch_product_data(
        &self,
        shop_url: &str,
        handle: &str,
    ) -> Result<ProductData, StorefrontError> {
        let product = self.fetch_product(shop_url, handle).await?;
        normalize_product(product)
    }

    /// Builds `https://host/products/<handle>.js` for the given shop.
    ///
    /// Any path on `shop_url` is discarded. The handle is pushed as a single
    /// percent-encoded path segment.
    fn product_url(shop_url: &str, handle: &str) -> Result<String, StorefrontError> {
        if handle.is_empty() || handle.contains('/') {
            return Err(StorefrontError::InvalidHandle {
                handle: handle.to_owned(),
            });
        }

        let origin = extract_store_origin(shop_url);
        let invalid = |reason: &str| StorefrontError::InvalidShopUrl {
            shop_url: shop_url.to_owned(),
            reason: reason.to_owned(),
        };

        let mut url = Url::parse(&origin).map_err(|e| invalid(&e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https"));
        }
        url.path_segments_mut()
            .map_err(|()| invalid("URL cannot be a base"))?
            .clear()
            .push("products")
            .push(&format!("{handle}.js"));
        Ok(url.to_string())
    }
}

/// Extracts the hostname from a shop URL for use in error messages.
///
/// Falls back to the full URL string if parsing fails.
fn extract_domain(shop_url: &str) -> String {
    let without_scheme = shop_url
        .strip_prefix("https://")
        .or_else(|| shop_url.strip_prefix("http://"))
        .unwrap_or(shop_url);
    without_scheme
        .split('/')
        .next()
        .unwrap_or(shop_url)
        .to_owned()
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;

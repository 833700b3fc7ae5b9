use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Response};
use tracing::debug;

#[cfg(test)]
use mockall::automock;

use crate::config::StorefrontConfig;
use crate::domain::{Product, ProductId};
use crate::services::StorefrontError;

/// Remote catalogue operations used by the product pages.
///
/// Futures are not `Send` because the browser client is single threaded.
#[cfg_attr(test, automock)]
#[async_trait(?Send)]
pub trait ProductApi {
    async fn get_product(&self, id: &ProductId) -> Result<Product, StorefrontError>;

    async fn delete_product(&self, id: &ProductId, token: &str) -> Result<(), StorefrontError>;
}

/// `ProductApi` backed by the storefront REST backend.
#[derive(Clone)]
pub struct HttpProductApi {
    client: Client,
    base_url: String,
}

impl HttpProductApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &StorefrontConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn product_url(&self, id: &ProductId) -> String {
        format!("{}/api/product/{}/", self.base_url, id)
    }

    pub fn delete_url(&self, id: &ProductId) -> String {
        format!("{}/api/product-delete/{}/", self.base_url, id)
    }
}

#[async_trait(?Send)]
impl ProductApi for HttpProductApi {
    async fn get_product(&self, id: &ProductId) -> Result<Product, StorefrontError> {
        let url = self.product_url(id);
        debug!(url = %url, "Fetching product");

        let response = self.client.get(&url).send().await?;
        let response = check_status(response).await?;
        Ok(response.json::<Product>().await?)
    }

    async fn delete_product(&self, id: &ProductId, token: &str) -> Result<(), StorefrontError> {
        let url = self.delete_url(id);
        debug!(url = %url, "Deleting product");

        let response = self
            .client
            .delete(&url)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}

async fn check_status(response: Response) -> Result<Response, StorefrontError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(StorefrontError::from_response(status.as_u16(), &body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        let api = HttpProductApi::new("http://localhost:8000/");
        let id = ProductId::new("42");

        assert_eq!(api.product_url(&id), "http://localhost:8000/api/product/42/");
        assert_eq!(
            api.delete_url(&id),
            "http://localhost:8000/api/product-delete/42/"
        );
    }

    #[test]
    fn test_from_config_uses_base_url() {
        let config = StorefrontConfig {
            api_base_url: "https://shop.example.com".to_string(),
            ..StorefrontConfig::default()
        };
        let api = HttpProductApi::from_config(&config);
        assert_eq!(
            api.product_url(&ProductId::new("a-1")),
            "https://shop.example.com/api/product/a-1/"
        );
    }
}

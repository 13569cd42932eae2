//! Turing transport trait and reqwest-based HTTP implementation.

use std::time::Duration;

use fcommon::BoxFuture;
use reqwest::{Client, Response, StatusCode};

use crate::ProviderError;

use super::types::{TuringForm, truncate};

pub trait TuringTransport: Send + Sync + std::fmt::Debug {
    /// POST `form` to `url` and return the raw response body.
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        form: TuringForm<'a>,
    ) -> BoxFuture<'a, Result<String, ProviderError>>;
}

#[derive(Debug, Clone)]
pub struct TuringHttpTransport {
    client: Client,
}

impl TuringHttpTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ProviderError::transport(err.to_string()))?;
        Ok(Self::new(client))
    }

    fn map_reqwest_error(err: reqwest::Error) -> ProviderError {
        if err.is_timeout() {
            ProviderError::timeout(err.to_string())
        } else {
            ProviderError::transport(err.to_string())
        }
    }

    async fn parse_error(response: Response) -> ProviderError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = format!(
            "turing request failed with status {status}: {}",
            truncate(&body, 512)
        );

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                ProviderError::authentication(message)
            }
            StatusCode::REQUEST_TIMEOUT => ProviderError::timeout(message),
            status if status.is_server_error() => ProviderError::unavailable(message),
            _ => ProviderError::transport(message),
        }
    }
}

impl TuringTransport for TuringHttpTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        form: TuringForm<'a>,
    ) -> BoxFuture<'a, Result<String, ProviderError>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .form(&form)
                .send()
                .await
                .map_err(Self::map_reqwest_error)?;

            if !response.status().is_success() {
                return Err(Self::parse_error(response).await);
            }

            response.text().await.map_err(Self::map_reqwest_error)
        })
    }
}

// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

mod errors;

use async_trait::async_trait;
use polyrpc_polynomial::{Operation, Polynomial, PolynomialTuple};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

pub use errors::ClientError;

/// The remote polynomial arithmetic service.
///
/// Each call blocks the caller until the result or a transport error arrives.
#[async_trait]
pub trait PolyRpc: Send + Sync {
    async fn call(
        &self,
        operation: Operation,
        polys: PolynomialTuple,
    ) -> Result<Polynomial, ClientError>;

    async fn add(&self, polys: PolynomialTuple) -> Result<Polynomial, ClientError> {
        self.call(Operation::Add, polys).await
    }

    async fn sub(&self, polys: PolynomialTuple) -> Result<Polynomial, ClientError> {
        self.call(Operation::Sub, polys).await
    }

    async fn mul(&self, polys: PolynomialTuple) -> Result<Polynomial, ClientError> {
        self.call(Operation::Mul, polys).await
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP/JSON client for a polyrpc server
#[derive(Clone, Debug)]
pub struct PolyClient {
    http: reqwest::Client,
    base: Url,
}

impl PolyClient {
    /// Dial the server at `server_url` and check that it is healthy.
    ///
    /// `dial_timeout` only bounds connection establishment and the health probe. Calls
    /// made afterwards wait for the server without a deadline.
    pub async fn connect(server_url: &str, dial_timeout: Duration) -> Result<Self, ClientError> {
        let mut base = Url::parse(server_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .connect_timeout(dial_timeout)
            .build()
            .map_err(ClientError::Transport)?;

        let health = base.join("health")?;
        let client = Self { http, base };
        client
            .probe(health, dial_timeout)
            .await
            .map_err(|source| ClientError::Dial {
                url: server_url.to_string(),
                source,
            })?;

        info!(url = %client.base, "connected to polyrpc server");
        Ok(client)
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    async fn probe(&self, health: Url, timeout: Duration) -> Result<(), reqwest::Error> {
        self.http
            .get(health)
            .timeout(timeout)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[async_trait]
impl PolyRpc for PolyClient {
    async fn call(
        &self,
        operation: Operation,
        polys: PolynomialTuple,
    ) -> Result<Polynomial, ClientError> {
        let url = self.base.join(operation.path())?;
        debug!(%operation, operands = polys.len(), %url, "calling");

        let response = self
            .http
            .post(url)
            .json(&polys)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                });
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response.json::<Polynomial>().await.map_err(ClientError::Decode)
    }
}

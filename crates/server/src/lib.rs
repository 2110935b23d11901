// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

mod types;

use actix_web::{
    dev::Server, error, middleware::Logger, web, App, HttpRequest, HttpResponse, HttpServer,
    Result as ActixResult,
};
use anyhow::{anyhow, Result};
use polyrpc_config::ServerConfig;
use polyrpc_polynomial::{Operation, PolynomialTuple};
use std::net::SocketAddr;
use tracing::{info, warn};

pub use types::{ErrorResponse, HealthResponse};

#[derive(Clone, Debug, Default)]
pub struct PolyServerBuilder {
    port: Option<u16>,
    host: Option<String>,
    workers: Option<usize>,
}

impl PolyServerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the `server` section of the app configuration
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            port: Some(config.port),
            host: Some(config.host.clone()),
            workers: config.workers,
        }
    }

    /// Set the port number (default: 6090). Port 0 picks a free port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the host address (default: "0.0.0.0")
    pub fn with_host<S: Into<String>>(mut self, host: S) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the number of http workers handling calls concurrently
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Build the PolyServer
    pub fn build(self) -> PolyServer {
        PolyServer {
            port: self.port.unwrap_or(6090),
            host: self.host.unwrap_or_else(|| "0.0.0.0".to_string()),
            workers: self.workers,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PolyServer {
    port: u16,
    host: String,
    workers: Option<usize>,
}

impl PolyServer {
    /// Create a new builder for PolyServer
    pub fn builder() -> PolyServerBuilder {
        PolyServerBuilder::new()
    }

    /// Get the configured port
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Get the configured host
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Get the bind address as a string
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Bind the listener and return the not yet awaited server with its local address
    pub fn listen(&self) -> Result<(Server, SocketAddr)> {
        let mut server = HttpServer::new(|| App::new().wrap(Logger::default()).configure(routes));
        if let Some(workers) = self.workers {
            server = server.workers(workers);
        }

        let server = server.bind(self.bind_address())?;
        let addr = server
            .addrs()
            .first()
            .copied()
            .ok_or_else(|| anyhow!("no address bound for {}", self.bind_address()))?;

        Ok((server.run(), addr))
    }

    /// Run the HTTP server until it is stopped
    pub async fn run(&self) -> Result<()> {
        let (server, addr) = self.listen()?;
        info!(%addr, "polyrpc server listening");
        server.await.map_err(Into::into)
    }
}

/// Register the polyrpc routes on an actix app
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(handle_payload_error))
        .route("/health", web::get().to(handle_health_check))
        .route("/health", web::head().to(handle_health_check))
        .route("/{operation}", web::post().to(handle_operation));
}

async fn handle_operation(
    name: web::Path<String>,
    req: web::Json<PolynomialTuple>,
) -> ActixResult<HttpResponse> {
    let name = name.into_inner();
    let Ok(operation) = name.parse::<Operation>() else {
        return Ok(HttpResponse::NotFound().json(ErrorResponse {
            error: format!("unknown operation: {name}"),
        }));
    };

    let tuple = req.into_inner();
    let result = operation.apply(tuple.polys());

    info!(
        %operation,
        operands = tuple.len(),
        result_len = result.len(),
        "polynomial operation served"
    );
    Ok(HttpResponse::Ok().json(result))
}

async fn handle_health_check() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
    }))
}

fn handle_payload_error(err: error::JsonPayloadError, _: &HttpRequest) -> actix_web::Error {
    warn!("rejected request payload: {}", err);
    let response = HttpResponse::BadRequest().json(ErrorResponse {
        error: err.to_string(),
    });
    error::InternalError::from_response(err, response).into()
}

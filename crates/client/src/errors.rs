// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use thiserror::Error;

/// Transport level failures of a remote call. Arithmetic itself never fails.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid server url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The server could not be reached when establishing the session
    #[error("failed to dial {url}: {source}")]
    Dial {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("rpc failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a non success status
    #[error("server responded {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body was not a polynomial
    #[error("could not decode response: {0}")]
    Decode(#[source] reqwest::Error),
}

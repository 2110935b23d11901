// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use polyrpc_config::AppConfig;
use polyrpc_server::PolyServerBuilder;
use tracing::info;

pub async fn execute(config: &AppConfig) -> Result<()> {
    let server = PolyServerBuilder::from_config(config.server()).build();
    info!("Starting polyrpc server on {}", server.bind_address());
    server.run().await
}

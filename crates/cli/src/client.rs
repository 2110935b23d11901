// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::session::{self, Session};
use anyhow::Result;
use polyrpc_client::PolyClient;
use polyrpc_config::AppConfig;
use std::io;
use tracing::info;

pub async fn execute(config: &AppConfig) -> Result<()> {
    let client_config = config.client();
    // Failing to dial is fatal, errors during the session are not
    let client =
        PolyClient::connect(&client_config.server_url, client_config.dial_timeout()).await?;

    let mut session = Session::new();
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    session::run(&mut session, &client, &mut input, &mut output).await?;

    info!("Session ended");
    Ok(())
}

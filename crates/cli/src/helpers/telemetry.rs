// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use wcs_config::WcsConfig;

/// Installs the global subscriber. Logs go to stderr so stdout stays
/// machine readable.
///
/// An explicit `log_level` wins, then `RUST_LOG`, then the configured level.
pub fn setup_tracing(config: &WcsConfig, log_level: Option<Level>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level.as_str()),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str())),
    };

    // ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

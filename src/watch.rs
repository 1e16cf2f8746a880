//! Periodic polling of the rates table.

use crate::aggregator::{RateAggregator, RatesRequest};
use crate::common::RateScannerError;
use crate::display::render_rates_table;
use std::io::Write;
use std::time::Duration;
use tracing::info;

/// Fetches and prints the rates table right away, then once per `refresh` period.
///
/// Stops on Ctrl-C, or after `iterations` refreshes when set.
/// Returns the number of tables written. A zero `refresh` is rejected with
/// [RateScannerError::Config].
pub async fn watch_rates<W: Write>(
    aggregator: &RateAggregator,
    request: &RatesRequest,
    refresh: Duration,
    iterations: Option<u64>,
    out: &mut W,
) -> Result<u64, RateScannerError> {
    if refresh.is_zero() {
        return Err(RateScannerError::Config(
            "refresh period must be greater than zero".to_string(),
        ));
    }

    let mut ticker = tokio::time::interval(refresh);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    let mut written = 0u64;
    while iterations.is_none_or(|max| written < max) {
        tokio::select! {
            _ = &mut shutdown => {
                info!("interrupted, stopping watch");
                break;
            }
            _ = ticker.tick() => {
                let rates = aggregator.fetch_rates(request).await;
                let table = render_rates_table(
                    &rates,
                    &request.crypto,
                    &request.fiat,
                    chrono::Local::now(),
                );
                writeln!(out, "{}", table)?;
                out.flush()?;
                written += 1;
                info!(rates = rates.len(), refresh_secs = refresh.as_secs(), "rates refreshed");
            }
        }
    }

    Ok(written)
}

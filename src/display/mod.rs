//! Plain-text rendering of the rates table.

use crate::common::P2PRate;
use chrono::{DateTime, Local};

const TITLE: &str = "RateHunt";
const EMPTY_TABLE: &str = "No rates available";
const BEST_MARK: &str = " *";

/// Rate with the lowest buy price. Zero prices (unparsed fields) are ignored.
pub fn best_buy(rates: &[P2PRate]) -> Option<&P2PRate> {
    rates
        .iter()
        .filter(|r| r.buy_price > 0.0)
        .reduce(|best, r| if r.buy_price < best.buy_price { r } else { best })
}

/// Rate with the highest sell price.
pub fn best_sell(rates: &[P2PRate]) -> Option<&P2PRate> {
    rates
        .iter()
        .filter(|r| r.sell_price > 0.0)
        .reduce(|best, r| if r.sell_price > best.sell_price { r } else { best })
}

fn format_price(value: f64) -> String {
    if value.abs() < 100.0 {
        format!("{:.4}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Renders the header line and the rates table.
///
/// The best buy (lowest) and best sell (highest) cells are marked with `*`.
pub fn render_rates_table(
    rates: &[P2PRate],
    crypto: &str,
    fiat: &str,
    last_update: DateTime<Local>,
) -> String {
    let mut out = format!(
        "{} | {}/{} | last update {}\n",
        TITLE,
        crypto,
        fiat,
        last_update.format("%Y-%m-%d %H:%M:%S")
    );

    if rates.is_empty() {
        out.push_str(EMPTY_TABLE);
        out.push('\n');
        return out;
    }

    let best_buy = best_buy(rates);
    let best_sell = best_sell(rates);

    let header = [
        "Exchange".to_string(),
        format!("Buy ({})", fiat),
        format!("Sell ({})", fiat),
        format!("Available ({})", crypto),
        "Limit".to_string(),
        "Payment".to_string(),
        "Trade URL".to_string(),
    ];

    let rows: Vec<[String; 7]> = rates
        .iter()
        .map(|rate| {
            let mark = |best: Option<&P2PRate>| {
                if best.is_some_and(|b| std::ptr::eq(b, rate)) {
                    BEST_MARK
                } else {
                    ""
                }
            };
            [
                rate.exchange.clone(),
                format!("{}{}", format_price(rate.buy_price), mark(best_buy)),
                format!("{}{}", format_price(rate.sell_price), mark(best_sell)),
                format!("{:.2}", rate.available),
                rate.limit.clone(),
                rate.payment_method.clone(),
                rate.trade_url.clone(),
            ]
        })
        .collect();

    let mut widths = header.each_ref().map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render_row = |cells: &[String; 7]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    out.push_str(&render_row(&header));
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.push('\n');
    for row in &rows {
        out.push_str(&render_row(row));
        out.push('\n');
    }
    out.push_str("* best buy (lowest) / best sell (highest)\n");

    out
}

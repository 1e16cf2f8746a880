use clap::{Args, Parser, Subcommand};
use p2p_rate_scanner::{
    AppState, P2PExchange, RateAggregator, RatesRequest, RatesResponse, ScannerConfig,
    init_logging, load_dotenv, render_rates_table, start_server, watch_rates,
};
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "p2p-rates")]
#[command(about = "Best P2P buy/sell rates across crypto exchanges")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch rates once and print them
    Fetch {
        #[command(flatten)]
        query: QueryArgs,

        /// Print the JSON response instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Keep printing the rates table, refreshing periodically
    Watch {
        #[command(flatten)]
        query: QueryArgs,

        /// Refresh period in seconds (defaults to P2P_REFRESH_SECS or 10)
        #[arg(short, long)]
        interval: Option<u64>,

        /// Stop after this many refreshes
        #[arg(long)]
        iterations: Option<u64>,
    },

    /// Serve the rates endpoint over HTTP
    Serve {
        /// Listen address (defaults to P2P_BIND_ADDR or 0.0.0.0:8080)
        #[arg(short, long)]
        bind: Option<SocketAddr>,
    },
}

#[derive(Args, Debug)]
struct QueryArgs {
    /// Fiat currency code
    #[arg(short, long, default_value = "USD")]
    fiat: String,

    /// Crypto asset code
    #[arg(short, long, default_value = "USDT")]
    crypto: String,

    /// Exchanges to query (comma separated)
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_value = "Binance,OKX,Bybit,Huobi,KuCoin"
    )]
    exchanges: Vec<String>,

    /// Include ads from unverified merchants (Binance only)
    #[arg(long)]
    no_verification_required: bool,

    /// Keep sold-out ads (Binance only)
    #[arg(long)]
    include_untradable: bool,

    /// Minimum order amount in fiat (Binance only)
    #[arg(long)]
    min_amount: Option<f64>,

    /// Payment methods to filter by (Binance only, comma separated)
    #[arg(long, value_delimiter = ',')]
    payment_methods: Vec<String>,
}

impl QueryArgs {
    fn into_request(self) -> RatesRequest {
        RatesRequest {
            fiat: self.fiat.to_uppercase(),
            crypto: self.crypto.to_uppercase(),
            exchanges: self.exchanges,
            no_verification_required: self.no_verification_required,
            only_tradable: !self.include_untradable,
            min_amount: self.min_amount,
            payment_methods: self.payment_methods,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    load_dotenv();
    init_logging();

    let config = ScannerConfig::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
    })?;
    let aggregator = RateAggregator::from_config(&config);

    match cli.command {
        Commands::Fetch { query, json } => {
            let request = query.into_request();
            warn_unknown_exchanges(&request);
            let rates = aggregator.fetch_rates(&request).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&RatesResponse { rates })?);
            } else {
                let table = render_rates_table(
                    &rates,
                    &request.crypto,
                    &request.fiat,
                    chrono::Local::now(),
                );
                println!("{}", table);
            }
        }
        Commands::Watch {
            query,
            interval,
            iterations,
        } => {
            let request = query.into_request();
            warn_unknown_exchanges(&request);
            let refresh = interval
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(config.refresh_interval);

            let mut stdout = std::io::stdout();
            watch_rates(&aggregator, &request, refresh, iterations, &mut stdout).await?;
        }
        Commands::Serve { bind } => {
            let addr = bind.unwrap_or(config.bind_addr);
            start_server(AppState::new(aggregator), addr).await?;
        }
    }

    Ok(())
}

fn warn_unknown_exchanges(request: &RatesRequest) {
    for name in &request.exchanges {
        if name.parse::<P2PExchange>().is_err() {
            tracing::warn!(
                exchange = %name,
                known = ?P2PExchange::ALL.map(|e| e.display_name()),
                "unknown exchange will be skipped"
            );
        }
    }
}

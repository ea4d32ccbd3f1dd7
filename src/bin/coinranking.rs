//! `coinranking` — browse the coin list, inspect coins and manage favorites from a terminal.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueHint};
use coinranking_sdk::prelude::*;
use coinranking_sdk::shared::fmt::decimal;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Path to environment file. Missing files are ignored.
    #[arg(long, value_hint = ValueHint::FilePath, default_value = ".env", global = true)]
    env_file: PathBuf,

    /// Favorites JSON file (overrides COINRANKING_FAVORITES_PATH)
    #[arg(long, value_hint = ValueHint::FilePath, global = true)]
    favorites: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List coins, one page at a time
    List(ListArgs),

    /// Show one coin with its price history
    Detail(DetailArgs),

    /// Mark a coin as favorite
    Favorite { id: String },

    /// Print stored favorites
    Favorites,

    /// Remove a coin from favorites
    Unfavorite { id: String },
}

#[derive(Args)]
struct ListArgs {
    /// Number of pages to load
    #[arg(long, default_value_t = 1)]
    pages: u32,

    /// Sort key: price | change
    #[arg(long)]
    sort: Option<SortKey>,

    /// Sort direction: asc | desc
    #[arg(long)]
    order: Option<SortDirection>,

    /// Time period for the change figure
    #[arg(long, default_value_t = TimePeriod::Hour24)]
    period: TimePeriod,
}

#[derive(Args)]
struct DetailArgs {
    id: String,

    /// Time period for the history request
    #[arg(long, default_value_t = TimePeriod::Hour24)]
    period: TimePeriod,

    /// Chart window: 1D | 7D | 1M
    #[arg(long, default_value_t = ChartWindow::TwentyFourHours)]
    window: ChartWindow,
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_loaded = dotenvy::from_path(&cli.env_file).is_ok();
    setup_logging();
    if env_loaded {
        tracing::debug!(path = %cli.env_file.display(), "Loaded environment file");
    }

    let mut builder = CoinRankingClientBuilder::from_env();
    if let Some(path) = cli.favorites {
        builder = builder.favorites_path(path);
    }

    match cli.cmd {
        Command::List(args) => {
            let client = builder.time_period(args.period).build()?;
            list(&client, args).await
        }
        Command::Detail(args) => {
            let client = builder.time_period(args.period).build()?;
            detail(&client, args).await
        }
        Command::Favorite { id } => favorite(&builder.build()?, CoinId::from(id)).await,
        Command::Favorites => {
            let client = builder.build()?;
            let favorites = client.favorites().snapshot();
            if favorites.is_empty() {
                println!("No favorites yet.");
            }
            for record in favorites.iter() {
                println!("{:<16} {:<8} {}", record.id, record.symbol, record.name);
            }
            Ok(())
        }
        Command::Unfavorite { id } => {
            let client = builder.build()?;
            let id = CoinId::from(id);
            if !client.favorites().contains(&id) {
                bail!("{} is not a favorite", id);
            }
            client.favorites().remove(&id)?;
            println!("Removed {} from favorites", id);
            Ok(())
        }
    }
}

async fn list(client: &CoinRankingClient<ReqwestTransport>, args: ListArgs) -> Result<()> {
    let list = client.coin_list();
    let filter = FilterState::new(args.sort, args.order);

    if filter.is_default() {
        list.fetch_coins().await;
    } else {
        list.apply_filter(filter).await;
    }
    for _ in 1..args.pages {
        let before = list.cursor();
        list.fetch_more_coins().await;
        if list.cursor() == before {
            break;
        }
    }

    let state = list.snapshot();
    if state.coins().is_empty() {
        bail!("No coins loaded (run with RUST_LOG=debug for details)");
    }

    for coin in state.coins() {
        let star = if list.is_favorite(&coin.id) { "*" } else { " " };
        println!(
            "{star} {:>4}  {:<8} {:<24} {:>16} {:>14}  {}",
            coin.rank,
            coin.symbol,
            coin.name,
            coin.formatted_price(),
            coin.change_text(),
            formatted_value(coin.market_cap.as_ref()),
        );
    }
    match state.total() {
        Some(total) => println!("{} of {} coins", state.coins().len(), total),
        None => println!("{} coins", state.coins().len()),
    }
    Ok(())
}

async fn detail(client: &CoinRankingClient<ReqwestTransport>, args: DetailArgs) -> Result<()> {
    let view = client.coin_detail(args.id.as_str());
    view.select_window(args.window);
    tokio::join!(
        view.fetch_detail(args.period),
        view.fetch_price_history(args.period)
    );

    let detail = match view.status() {
        DetailStatus::Loaded(detail) => detail,
        DetailStatus::Empty => bail!("No coin with id {}", args.id),
        DetailStatus::Error | DetailStatus::Loading => {
            bail!("Failed to load {} (run with RUST_LOG=debug for details)", args.id)
        }
    };

    println!("{} ({})  rank #{}", detail.name, detail.symbol, detail.rank);
    println!("  Price            {}", detail.formatted_price());
    println!("  Change           {}", detail.change_text());
    println!("  Market cap       {}", detail.formatted_market_cap());
    println!("  24h volume       {}", detail.formatted_volume_24h());
    println!("  All-time high    {}", detail.formatted_all_time_high());
    println!("  Circulating      {}", detail.formatted_circulating_supply());
    println!("  Total supply     {}", detail.formatted_total_supply());
    println!("  Max supply       {}", detail.formatted_max_supply());
    if let Some(url) = &detail.website_url {
        println!("  Website          {}", url);
    }
    if client.favorites().contains(&detail.id) {
        println!("  ★ favorite");
    }

    match view.history() {
        Some(_) => {
            let prices = view.chart_prices();
            let low = prices.iter().min().map_or("N/A".to_string(), decimal::display);
            let high = prices.iter().max().map_or("N/A".to_string(), decimal::display);
            println!(
                "  {} chart        {} points, low {}, high {}",
                args.window,
                prices.len(),
                low,
                high,
            );
        }
        None => println!("  Price history unavailable"),
    }
    Ok(())
}

async fn favorite(client: &CoinRankingClient<ReqwestTransport>, id: CoinId) -> Result<()> {
    if client.favorites().contains(&id) {
        println!("{} is already a favorite", id);
        return Ok(());
    }

    let view = client.coin_detail(id.clone());
    view.fetch_detail(client.time_period()).await;
    let coin = match view.status() {
        DetailStatus::Loaded(detail) => detail.summary(),
        DetailStatus::Empty => bail!("No coin with id {}", id),
        _ => bail!("Failed to load {}", id),
    };

    client
        .favorites()
        .toggle(&coin)
        .context("Failed to save favorite")?;
    println!("Added {} ({}) to favorites", coin.name, coin.symbol);
    Ok(())
}

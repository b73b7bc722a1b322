// Preview binary: renders a single value the way the dashboard would.
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use formatter::{
    FixedClock, FormatConfig, FormatMode, Formatter, DEFAULT_DECIMALS, DEFAULT_QUANTITY_DECIMALS,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "fmt-preview", about = "Preview how dashboard values are rendered")]
struct Cli {
    /// JSON locale/palette file; keys not present keep their pt-BR defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Pin the clock (RFC 3339) for relative dates
    #[arg(long, global = true)]
    now: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Currency {
        #[arg(allow_negative_numbers = true)]
        value: String,
        #[arg(long)]
        code: Option<String>,
    },
    SignedCurrency {
        #[arg(allow_negative_numbers = true)]
        value: String,
        #[arg(long)]
        code: Option<String>,
    },
    Percent {
        #[arg(allow_negative_numbers = true)]
        value: String,
        #[arg(long, default_value_t = DEFAULT_DECIMALS)]
        decimals: usize,
        #[arg(long)]
        no_sign: bool,
    },
    Number {
        #[arg(allow_negative_numbers = true)]
        value: String,
        #[arg(long, default_value_t = DEFAULT_DECIMALS)]
        decimals: usize,
    },
    Quantity {
        #[arg(allow_negative_numbers = true)]
        value: String,
        #[arg(long, default_value_t = DEFAULT_QUANTITY_DECIMALS)]
        max_decimals: usize,
    },
    Date {
        value: String,
        #[arg(long, default_value_t = FormatMode::Short.to_string())]
        mode: String,
    },
    Relative {
        value: String,
    },
    FileSize {
        #[arg(allow_negative_numbers = true)]
        value: String,
    },
    Classify {
        #[arg(allow_negative_numbers = true)]
        value: String,
    },
}

fn build_formatter(cli: &Cli) -> Result<Formatter> {
    let config = match &cli.config {
        Some(path) => FormatConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => FormatConfig::default(),
    };
    let formatter = match &cli.now {
        Some(now) => {
            let now = DateTime::parse_from_rfc3339(now)
                .with_context(|| format!("Invalid --now timestamp '{}'", now))?
                .with_timezone(&Utc);
            Formatter::with_clock(config, FixedClock(now))
        }
        None => Formatter::new(config),
    };
    Ok(formatter)
}

fn render(formatter: &Formatter, command: &Command) -> String {
    match command {
        Command::Currency { value, code } => formatter.format_currency(value.as_str(), code.as_deref()),
        Command::SignedCurrency { value, code } => {
            formatter.format_currency_with_sign(value.as_str(), code.as_deref())
        }
        Command::Percent { value, decimals, no_sign } => {
            formatter.format_percent(value.as_str(), *decimals, !no_sign)
        }
        Command::Number { value, decimals } => formatter.format_number(value.as_str(), *decimals),
        Command::Quantity { value, max_decimals } => formatter.format_quantity(value.as_str(), *max_decimals),
        Command::Date { value, mode } => formatter.format_date_named(value.as_str(), mode),
        Command::Relative { value } => formatter.relative_time_now(value.as_str()),
        Command::FileSize { value } => formatter.format_file_size(value.as_str()),
        Command::Classify { value } => {
            let class = formatter.classify(value.as_str());
            format!("{} ({})", class, formatter.palette().color_for(class))
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let formatter = build_formatter(&cli)?;
    info!(version = %formatter.config().version, "Formatter ready");

    println!("{}", render(&formatter, &cli.command));
    Ok(())
}

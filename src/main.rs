//! HappyData CLI
//!
//! Command-line interface for the HappyData engine:
//! - Fetch a country indicator trend
//! - Compare an indicator against happiness scores
//! - Build the regional happiness choropleth dataset
//! - List the built-in country and indicator catalogs

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use happydata::config::{generate_default_config, Config, LoggingConfig};
use happydata::dashboard::{
    country_name, CountryTrend, IndicatorVsHappiness, RegionalHappiness, Selection, COUNTRIES,
    INDICATORS,
};
use happydata::sources::WorldBankClient;

#[derive(Parser)]
#[command(name = "happydata")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "World Bank indicators meet World Happiness Report scores")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path (default: search standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch an indicator trend for one country
    Trend {
        /// World Bank country code
        #[arg(short, long, default_value = "IND")]
        country: String,
        /// World Bank indicator code
        #[arg(short, long, default_value = "NY.GDP.MKTP.CD")]
        indicator: String,
    },

    /// Compare an indicator against happiness scores on a shared year axis
    Compare {
        /// World Bank country code
        #[arg(short, long, default_value = "IND")]
        country: String,
        /// Survey-side country name (default: catalog lookup on the code)
        #[arg(long)]
        country_name: Option<String>,
        /// World Bank indicator code
        #[arg(short, long, default_value = "NY.GDP.MKTP.CD")]
        indicator: String,
        /// Survey CSV location (overrides config)
        #[arg(long)]
        survey: Option<String>,
    },

    /// Build the choropleth dataset for the latest survey year
    Map {
        /// Survey CSV location (overrides config)
        #[arg(long)]
        survey: Option<String>,
        /// Topology location (overrides config)
        #[arg(long)]
        topology: Option<String>,
    },

    /// List the built-in country catalog
    Countries,

    /// List the built-in indicator catalog
    Indicators,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    init_tracing(&config.logging);

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.sources.request_timeout_secs))
        .user_agent(concat!("happydata/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("failed to build HTTP client")?;

    match cli.command {
        Commands::Trend { country, indicator } => {
            let name = country_name(&country)
                .map(str::to_string)
                .unwrap_or_else(|| country.clone());
            let client = WorldBankClient::new(http, &config.sources.worldbank_url);
            let mut view = CountryTrend::new(client, Selection::new(&country, name, &indicator));
            view.refresh().await?;

            let chart = view
                .take_chart()
                .context("trend refresh produced no chart")?;
            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&chart)?);
            } else {
                println!("{}", chart.label);
                println!("{:<8} {:>20}", "Year", "Value");
                for (year, value) in chart.labels.iter().zip(&chart.values) {
                    println!("{:<8} {:>20}", year, fmt_value(*value));
                }
            }
        }

        Commands::Compare {
            country,
            country_name: name_override,
            indicator,
            survey,
        } => {
            let name = name_override
                .or_else(|| country_name(&country).map(str::to_string))
                .unwrap_or_else(|| country.clone());
            let survey = survey.unwrap_or_else(|| config.sources.survey.clone());

            let client = WorldBankClient::new(http.clone(), &config.sources.worldbank_url);
            let mut view = IndicatorVsHappiness::new(
                client,
                http,
                survey,
                Selection::new(&country, name, &indicator),
            );
            view.load_survey().await?;
            view.refresh().await?;

            let chart = view
                .take_chart()
                .context("comparison refresh produced no chart")?;
            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&chart)?);
            } else {
                println!("{} - {} vs happiness (0-10)", chart.country, chart.indicator);
                println!("{:<8} {:>20} {:>12}", "Year", "Indicator", "Happiness");
                for i in 0..chart.series.len() {
                    println!(
                        "{:<8} {:>20} {:>12}",
                        chart.series.labels[i],
                        fmt_value(chart.series.indicator[i]),
                        fmt_value(chart.series.happiness[i]),
                    );
                }
            }
        }

        Commands::Map { survey, topology } => {
            let survey = survey.unwrap_or_else(|| config.sources.survey.clone());
            let topology = topology.unwrap_or_else(|| config.sources.topology.clone());

            let mut view = RegionalHappiness::new(
                http,
                survey,
                topology,
                &config.sources.topology_object,
            );
            view.load().await?;

            let map = view.take_map().context("map load produced no dataset")?;
            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&map)?);
            } else {
                println!("World Happiness Scores ({})", map.year);
                println!("{:<40} {:>8}", "Country", "Score");
                for row in &map.rows {
                    println!("{:<40} {:>8}", row.name, fmt_value(row.value));
                }
            }
        }

        Commands::Countries => {
            println!("{:<6} Name", "Code");
            for (code, name) in COUNTRIES {
                println!("{code:<6} {name}");
            }
        }

        Commands::Indicators => {
            println!("{:<18} Label", "Code");
            for (code, label) in INDICATORS {
                println!("{code:<18} {label}");
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("failed to write config to {path:?}"))?;
                    println!("Wrote default config to {path:?}");
                }
                None => print!("{content}"),
            }
        }
    }

    Ok(())
}

/// Render an optional value for table output; gaps stay visible as "-".
fn fmt_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "-".to_string(),
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("happydata={}", logging.level).into());

    if logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

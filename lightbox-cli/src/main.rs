use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

/// LightBox combined geocode CLI tool
#[derive(Parser)]
#[command(name = "lightbox")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Upstream combined endpoint URL
    #[arg(short, long, env = "LIGHTBOX_COMBINED_URL", global = true)]
    url: Option<String>,

    /// API key sent as x-api-key
    #[arg(short = 'k', long, env = "LIGHTBOX_API_KEY", global = true)]
    api_key: Option<String>,

    /// Upstream request timeout in seconds
    #[arg(
        short,
        long,
        env = "LIGHTBOX_TIMEOUT_SECS",
        default_value = "30",
        global = true
    )]
    timeout_secs: u64,

    /// Retries on transport failure
    #[arg(long, env = "LIGHTBOX_MAX_RETRIES", default_value = "2", global = true)]
    max_retries: u32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a combined geocode / reverse-geocode lookup
    Combined {
        /// Street line of the address
        #[arg(long)]
        street: Option<String>,

        /// City or locality
        #[arg(long)]
        locality: Option<String>,

        /// State, province or region
        #[arg(long)]
        region: Option<String>,

        /// Postal code
        #[arg(long)]
        postal_code: Option<String>,

        /// Country code or name
        #[arg(long)]
        country: Option<String>,

        /// Latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,

        /// Search buffer around the point
        #[arg(long)]
        buffer_distance: Option<f64>,

        /// Output status and body as a single JSON object
        #[arg(short, long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let upstream = commands::Upstream {
        url: cli.url,
        api_key: cli.api_key,
        timeout_secs: cli.timeout_secs,
        max_retries: cli.max_retries,
    };

    match cli.command {
        Commands::Combined {
            street,
            locality,
            region,
            postal_code,
            country,
            lat,
            lon,
            buffer_distance,
            json,
        } => {
            let params = lightbox::CombinedParams {
                street,
                locality,
                region,
                postal_code,
                country,
                lat,
                lon,
                buffer_distance,
            };
            commands::combined::run(upstream, params, json).await
        }
    }
}

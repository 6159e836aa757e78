use crate::{config::Config, gateways, rows};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use geoenrich_core::{
    entities::{column_names, detail_column_names, AddressPart, AddressParts},
    usecases,
};
use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::PathBuf,
};

/// Enrich addresses with coordinates from the Google Geocoding API
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (default: geoenrich.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Google Geocoding API key
    #[arg(long, env = "GOOGLE_MAPS_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Append coordinates to every row of a CSV file
    Rows {
        /// CSV input with a header row (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// CSV output (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Also append formatted address, place ID and location type
        #[arg(long)]
        extended: bool,
    },
    /// Geocode a single address
    Address {
        #[arg(long)]
        address1: Option<String>,
        #[arg(long)]
        address2: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        postal_code: Option<String>,
        #[arg(long)]
        country: Option<String>,
        /// Print the request URL instead of sending it
        #[arg(long)]
        dry_run: bool,
    },
}

pub fn run() -> Result<()> {
    let Cli {
        config,
        api_key,
        command,
    } = Cli::parse();

    let mut cfg = Config::try_load_from_file_or_default(config.as_ref())?;
    if let Some(api_key) = api_key {
        cfg.set_api_key(api_key);
    }
    let geocoder = gateways::geocoder(&cfg.geocoding)?;

    match command {
        Commands::Rows {
            input,
            output,
            extended,
        } => {
            if cfg.address.columns.is_empty() {
                log::warn!("No address columns configured");
            }
            let input: Box<dyn Read> = match &input {
                Some(path) => Box::new(BufReader::new(
                    File::open(path).with_context(|| format!("Unable to open {}", path.display()))?,
                )),
                None => Box::new(io::stdin().lock()),
            };
            let output: Box<dyn Write> = match &output {
                Some(path) => Box::new(BufWriter::new(
                    File::create(path)
                        .with_context(|| format!("Unable to create {}", path.display()))?,
                )),
                None => Box::new(io::stdout().lock()),
            };
            let extended = extended || cfg.output.extended;
            let stats =
                rows::enrich_rows(&geocoder, &cfg.address.columns, extended, input, output)?;
            log::info!(
                "Geocoded {} rows ({} with errors)",
                stats.total,
                stats.failed
            );
        }
        Commands::Address {
            address1,
            address2,
            city,
            postal_code,
            country,
            dry_run,
        } => {
            let parts: AddressParts = [
                (AddressPart::AddressLine1, address1),
                (AddressPart::AddressLine2, address2),
                (AddressPart::City, city),
                (AddressPart::PostalCode, postal_code),
                (AddressPart::Country, country),
            ]
            .into_iter()
            .filter_map(|(part, value)| value.map(|v| (part, v)))
            .collect();
            if dry_run {
                let query = usecases::address_query(&parts)?;
                let endpoint = geocoder.endpoint();
                println!("{}", endpoint.redact(&endpoint.request_url(&query)));
                return Ok(());
            }
            let out = geocoder.geocode(&parts);
            let names = column_names().into_iter().chain(detail_column_names());
            let values = out.to_columns().into_iter().chain(out.to_detail_columns());
            for (name, value) in names.zip(values) {
                println!("{name}\t{value}");
            }
        }
    }
    Ok(())
}

use anyhow::Result;
use clap::{Parser, Subcommand};
use strum::IntoEnumIterator;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use hazard_catalog::Domain;

#[derive(Parser)]
#[clap(author, version, about = "Weather hazard category catalog")]
struct Cli {
    /// Tracing filter, e.g. "warn" or "hazard_catalog=debug"
    #[clap(long, env = "HAZARD_CATALOG_LOG", default_value = "warn", global = true)]
    log_level: String,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every option in a registry as JSON
    List {
        /// "outlooks" or "alerts"
        #[clap(value_parser = Domain::parse)]
        domain: Domain,

        /// Indent the JSON output
        #[clap(long)]
        pretty: bool,
    },

    /// Print the option for one exact display label
    Lookup {
        /// "outlooks" or "alerts"
        #[clap(value_parser = Domain::parse)]
        domain: Domain,

        /// Display label, e.g. "Tornado Warning"
        label: String,
    },

    /// Check that both registries are non-empty with unique labels
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log_level)?)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::List { domain, pretty } => {
            let options = domain.options();
            debug!(%domain, count = options.len(), "listing options");

            let json = if pretty {
                serde_json::to_string_pretty(&options)?
            } else {
                serde_json::to_string(&options)?
            };
            println!("{}", json);
        }
        Command::Lookup { domain, label } => {
            let option = domain.lookup(&label)?;
            println!("{}", serde_json::to_string(&option)?);
        }
        Command::Check => {
            for domain in Domain::iter() {
                domain.validate()?;
                info!(%domain, count = domain.count(), "registry ok");
                println!("✓ {}: {} categories", domain, domain.count());
            }
        }
    }

    Ok(())
}

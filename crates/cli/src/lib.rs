pub mod commands;

use std::env;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use crate::commands::quote::QuoteArgs;

#[derive(Debug, Parser)]
#[command(
    name = "epoch",
    about = "EPOCH Cabinetry dealer portal CLI",
    long_about = "Browse the product catalog, configure and price a quotation, and inspect the quotation register.",
    after_help = "Examples:\n  epoch catalog --category \"Base Cabinets\"\n  epoch quote --wood-species Cherry --discount-rate 10\n  epoch quotations"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "List catalog templates, optionally narrowed to one category")]
    Catalog {
        #[arg(long, help = "Only show templates in this category")]
        category: Option<String>,
    },
    #[command(about = "Show configurable facets and the values the catalog offers")]
    Facets {
        #[arg(help = "One facet name; omit to list every facet")]
        facet: Option<String>,
    },
    #[command(about = "Price the demo quotation under the given facet selections and charges")]
    Quote {
        #[arg(long, help = "Chosen wood species, e.g. Cherry")]
        wood_species: Option<String>,
        #[arg(long, help = "Chosen door style, e.g. Shaker")]
        door_style: Option<String>,
        #[arg(long, help = "Chosen finish color, e.g. Espresso")]
        finish_color: Option<String>,
        #[arg(long, help = "Shipping cost in dollars")]
        shipping: Option<Decimal>,
        #[arg(long, help = "Assembly charge in dollars")]
        assembly: Option<Decimal>,
        #[arg(long, help = "Other charges in dollars")]
        other: Option<Decimal>,
        #[arg(long, help = "Discount rate as a percentage in [0, 100]")]
        discount_rate: Option<Decimal>,
        #[arg(long, help = "Flat discount in dollars")]
        discount_amount: Option<Decimal>,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "List the quotation register with statuses and values")]
    Quotations,
}

pub fn run() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Catalog { category } => commands::catalog::run(category.as_deref()),
        Command::Facets { facet } => commands::facets::run(facet.as_deref()),
        Command::Quote {
            wood_species,
            door_style,
            finish_color,
            shipping,
            assembly,
            other,
            discount_rate,
            discount_amount,
            json,
        } => commands::quote::run(QuoteArgs {
            wood_species,
            door_style,
            finish_color,
            shipping,
            assembly,
            other,
            discount_rate,
            discount_amount,
            json,
        }),
        Command::Quotations => commands::quotations::run(),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

fn init_logging() {
    use tracing::Level;

    let level = env::var("EPOCH_LOG_LEVEL")
        .ok()
        .and_then(|value| value.parse::<Level>().ok())
        .unwrap_or(Level::INFO);
    let format = env::var("EPOCH_LOG_FORMAT").unwrap_or_default();

    let builder = tracing_subscriber::fmt().with_target(false).with_max_level(level);
    let init_result = match format.trim().to_ascii_lowercase().as_str() {
        "pretty" => builder.pretty().try_init(),
        "json" => builder.json().try_init(),
        _ => builder.compact().try_init(),
    };

    // A second init (tests, embedding) keeps the existing subscriber.
    let _ = init_result;
}

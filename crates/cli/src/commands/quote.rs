use rust_decimal::Decimal;
use serde_json::json;

use epoch_core::demo::{demo_quote, DOOR_STYLE, FINISH_COLOR, WOOD_SPECIES};
use epoch_core::{
    compute_totals, load_catalog, Catalog, GlobalConfiguration, LoadOptions, QuoteAggregator,
};

use crate::commands::CommandResult;

#[derive(Debug, Default)]
pub struct QuoteArgs {
    pub wood_species: Option<String>,
    pub door_style: Option<String>,
    pub finish_color: Option<String>,
    pub shipping: Option<Decimal>,
    pub assembly: Option<Decimal>,
    pub other: Option<Decimal>,
    pub discount_rate: Option<Decimal>,
    pub discount_amount: Option<Decimal>,
    pub json: bool,
}

pub fn run(args: QuoteArgs) -> CommandResult {
    if let Err(message) = validate_args(&args) {
        return CommandResult::failure(message, 2);
    }

    let catalog = match load_catalog(LoadOptions::default()) {
        Ok(catalog) => catalog,
        Err(error) => return CommandResult::failure(format!("catalog load: {error}"), 2),
    };

    let mut configuration = GlobalConfiguration::new();
    if let Some(value) = &args.wood_species {
        configuration.select(WOOD_SPECIES, value);
    }
    if let Some(value) = &args.door_style {
        configuration.select(DOOR_STYLE, value);
    }
    if let Some(value) = &args.finish_color {
        configuration.select(FINISH_COLOR, value);
    }

    let quote = match demo_quote(&catalog, &configuration) {
        Ok(quote) => quote,
        Err(error) => return CommandResult::failure(format!("demo quote: {error}"), 3),
    };

    let mut aggregator = QuoteAggregator::from_quote(quote);
    if let Some(shipping) = args.shipping {
        aggregator.set_shipping_cost(shipping);
    }
    if let Some(assembly) = args.assembly {
        aggregator.set_assembly_charge(assembly);
    }
    if let Some(other) = args.other {
        aggregator.set_other_charges(other);
    }
    if let Some(discount_rate) = args.discount_rate {
        aggregator.set_discount_rate(discount_rate);
    }
    if let Some(discount_amount) = args.discount_amount {
        aggregator.set_discount_amount(discount_amount);
    }
    aggregator.recompute_all(&catalog, &configuration);

    let quote = aggregator.into_quote();
    let totals = compute_totals(&quote);
    tracing::info!(
        event_name = "portal.quote.priced",
        line_count = quote.lines.len(),
        grand_total = %totals.grand_total,
        "demo quotation priced"
    );

    if args.json {
        let payload = json!({ "lines": quote.lines, "totals": totals });
        return match serde_json::to_string_pretty(&payload) {
            Ok(output) => CommandResult::success(output),
            Err(error) => CommandResult::failure(format!("serialization: {error}"), 4),
        };
    }

    CommandResult::success(render_text(&catalog, &quote, &totals))
}

fn validate_args(args: &QuoteArgs) -> Result<(), String> {
    if let Some(rate) = args.discount_rate {
        if rate < Decimal::ZERO || rate > Decimal::ONE_HUNDRED {
            return Err(format!("discount rate must be between 0 and 100, got {rate}"));
        }
    }
    for (label, value) in [
        ("shipping", args.shipping),
        ("assembly", args.assembly),
        ("other", args.other),
        ("discount amount", args.discount_amount),
    ] {
        if let Some(amount) = value {
            if amount < Decimal::ZERO {
                return Err(format!("{label} must not be negative, got {amount}"));
            }
        }
    }
    Ok(())
}

fn render_text(
    catalog: &Catalog,
    quote: &epoch_core::Quote,
    totals: &epoch_core::QuoteTotals,
) -> String {
    let mut lines =
        vec![format!("{:<42} {:>4} {:>10} {:>10} {:>6}", "PRODUCT", "QTY", "UNIT", "TOTAL", "WEEKS")];

    for line in &quote.lines {
        let name = catalog
            .find(&line.template_id)
            .map(|template| template.name.as_str())
            .unwrap_or(line.template_id.0.as_str());
        lines.push(format!(
            "{:<42} {:>4} {:>10} {:>10} {:>6}",
            name,
            line.quantity,
            format!("${}", line.unit_price),
            format!("${}", line.extended_price()),
            line.lead_time_weeks,
        ));
    }

    lines.push(String::new());
    lines.push(format!("Subtotal:        ${}", totals.subtotal));
    lines.push(format!("Shipping:        ${}", quote.shipping_cost));
    lines.push(format!("Assembly:        ${}", quote.assembly_charge));
    lines.push(format!("Other charges:   ${}", quote.other_charges));
    lines.push(format!("Discount:        ${}", totals.total_discount));
    lines.push(format!("Grand total:     ${}", totals.grand_total));
    lines.push(format!("Total items:     {}", totals.total_item_count));
    lines.push(format!("Max lead time:   {} weeks", totals.max_lead_time_weeks));

    lines.join("\n")
}

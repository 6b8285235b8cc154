//! Deterministic demo fixtures: the EPOCH cabinetry catalog, the seeded
//! quotation-builder session, and the dealer's existing quotations. Used by
//! the CLI and as shared test data; nothing here touches the filesystem.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::cpq::aggregator::QuoteAggregator;
use crate::cpq::catalog::Catalog;
use crate::domain::configuration::GlobalConfiguration;
use crate::domain::quotation::{QuotationBook, QuotationId, QuotationRecord, QuotationStatus};
use crate::domain::quote::{Quote, QuoteId};
use crate::domain::template::{LeadTimeRule, ProductTemplate, TemplateId};
use crate::errors::DomainError;

pub const WOOD_SPECIES: &str = "wood_species";
pub const DOOR_STYLE: &str = "door_style";
pub const FINISH_COLOR: &str = "finish_color";

fn money(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn multiplier(hundredths: i64) -> Decimal {
    Decimal::new(hundredths, 2)
}

fn cabinet(
    id: &str,
    name: &str,
    category: &str,
    base_price: Decimal,
    base_lead_time_weeks: u32,
) -> ProductTemplate {
    ProductTemplate {
        id: TemplateId::new(id),
        name: name.to_string(),
        category: category.to_string(),
        base_price,
        base_lead_time_weeks,
        config_options: BTreeMap::from([
            (
                WOOD_SPECIES.to_string(),
                vec![
                    "Maple".to_string(),
                    "Cherry".to_string(),
                    "Oak".to_string(),
                    "Walnut".to_string(),
                ],
            ),
            (
                DOOR_STYLE.to_string(),
                vec!["Shaker".to_string(), "Slab".to_string(), "Raised Panel".to_string()],
            ),
            (
                FINISH_COLOR.to_string(),
                vec![
                    "White".to_string(),
                    "Grey".to_string(),
                    "Espresso".to_string(),
                    "Natural Wood".to_string(),
                ],
            ),
        ]),
        price_modifiers: BTreeMap::from([
            (
                WOOD_SPECIES.to_string(),
                BTreeMap::from([
                    ("Maple".to_string(), multiplier(105)),
                    ("Cherry".to_string(), multiplier(115)),
                    ("Walnut".to_string(), multiplier(125)),
                ]),
            ),
            (
                DOOR_STYLE.to_string(),
                BTreeMap::from([("Raised Panel".to_string(), multiplier(112))]),
            ),
            (
                FINISH_COLOR.to_string(),
                BTreeMap::from([("Espresso".to_string(), multiplier(108))]),
            ),
        ]),
        lead_time_modifiers: BTreeMap::from([(
            WOOD_SPECIES.to_string(),
            LeadTimeRule::ByValue(BTreeMap::from([
                ("Cherry".to_string(), 1),
                ("Walnut".to_string(), 2),
            ])),
        )]),
    }
}

fn accessory(
    id: &str,
    name: &str,
    base_price: Decimal,
    base_lead_time_weeks: u32,
) -> ProductTemplate {
    ProductTemplate {
        id: TemplateId::new(id),
        name: name.to_string(),
        category: "Accessories".to_string(),
        base_price,
        base_lead_time_weeks,
        config_options: BTreeMap::from([(
            FINISH_COLOR.to_string(),
            vec!["Grey".to_string(), "Natural Wood".to_string()],
        )]),
        price_modifiers: BTreeMap::new(),
        lead_time_modifiers: BTreeMap::new(),
    }
}

/// The ten demo products from the dealer portal's catalog.
pub fn demo_catalog() -> Catalog {
    let mut tall_pantry = cabinet(
        "prod-005",
        "Pantry Unit 90\" - Modern Lux",
        "Tall Cabinets",
        money(120_000),
        7,
    );
    // Tall carcasses get an extra assembly week whatever the door build.
    tall_pantry
        .lead_time_modifiers
        .insert(DOOR_STYLE.to_string(), LeadTimeRule::Flat(1));
    let mut tall_classic = cabinet(
        "prod-003",
        "Tall Cabinet 84\" - Classic Elegance",
        "Tall Cabinets",
        money(80_000),
        6,
    );
    tall_classic.lead_time_modifiers.insert(
        DOOR_STYLE.to_string(),
        LeadTimeRule::ByValue(BTreeMap::from([("Raised Panel".to_string(), 1)])),
    );

    Catalog::new(vec![
        cabinet("prod-001", "Base Cabinet 36\" - Modern Lux", "Base Cabinets", money(45_000), 4),
        cabinet("prod-002", "Wall Cabinet 30\" - Modern Lux", "Wall Cabinets", money(30_000), 3),
        tall_classic,
        cabinet("prod-004", "Drawer Base 24\" - Urban Loft", "Base Cabinets", money(55_000), 5),
        tall_pantry,
        cabinet(
            "prod-006",
            "Corner Base Cabinet - Classic Elegance",
            "Base Cabinets",
            money(65_000),
            5,
        ),
        accessory("prod-007", "Wine Rack Insert - Urban Loft", money(15_000), 2),
        accessory("prod-010", "Spice Rack Pullout - Urban Loft", money(10_000), 2),
        cabinet("prod-008", "Island Base 48\" - Modern Lux", "Base Cabinets", money(90_000), 6),
        cabinet(
            "prod-009",
            "Glass Door Wall Cabinet - Classic Elegance",
            "Wall Cabinets",
            money(40_000),
            4,
        ),
    ])
}

/// The portal's seeded builder session: two base-cabinet lines plus the
/// shipping/assembly/discount figures from the quotation form.
pub fn demo_quote(
    catalog: &Catalog,
    configuration: &GlobalConfiguration,
) -> Result<Quote, DomainError> {
    let mut aggregator = QuoteAggregator::new();
    aggregator.add_line_item(catalog, configuration, &TemplateId::new("prod-001"), 2)?;
    aggregator.add_line_item(catalog, configuration, &TemplateId::new("prod-003"), 1)?;
    aggregator.set_shipping_cost(money(15_000));
    aggregator.set_assembly_charge(money(5_000));
    aggregator.set_discount_amount(money(2_500));
    Ok(aggregator.into_quote())
}

/// The four rows of the portal's "Existing Quotations" register.
pub fn demo_quotation_book() -> QuotationBook {
    QuotationBook::new(vec![
        record(
            "Q-2025-001",
            "Brown Bathroom Remodel",
            date(2025, 5, 20),
            Some(date(2025, 5, 22)),
            money(850_000),
            QuotationStatus::Approved,
        ),
        record(
            "Q-2025-002",
            "Miller Living Room Cabinets",
            date(2025, 5, 25),
            None,
            money(320_000),
            QuotationStatus::Draft,
        ),
        record(
            "Q-2025-003",
            "Johnson Kitchen Refresh",
            date(2025, 6, 1),
            Some(date(2025, 6, 5)),
            money(1_120_000),
            QuotationStatus::Ordered,
        ),
        record(
            "Q-2025-004",
            "Davis Office Storage",
            date(2025, 6, 10),
            None,
            money(450_000),
            QuotationStatus::PendingReview,
        ),
    ])
}

fn record(
    id: &str,
    project_name: &str,
    draft_date: NaiveDate,
    approval_date: Option<NaiveDate>,
    value: Decimal,
    status: QuotationStatus,
) -> QuotationRecord {
    QuotationRecord {
        id: QuotationId(id.to_string()),
        quote_id: QuoteId::generate(),
        project_name: project_name.to_string(),
        draft_date,
        approval_date,
        value,
        status,
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

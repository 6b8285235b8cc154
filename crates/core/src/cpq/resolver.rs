use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::configuration::GlobalConfiguration;
use crate::domain::template::{LeadTimeRule, ProductTemplate};

/// Effective unit price and lead time of a template under a configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTemplate {
    pub unit_price: Decimal,
    pub lead_time_weeks: u32,
}

pub trait TemplateResolver: Send + Sync {
    fn resolve(
        &self,
        template: &ProductTemplate,
        configuration: &GlobalConfiguration,
    ) -> ResolvedTemplate;
}

#[derive(Default)]
pub struct DeterministicTemplateResolver;

impl TemplateResolver for DeterministicTemplateResolver {
    fn resolve(
        &self,
        template: &ProductTemplate,
        configuration: &GlobalConfiguration,
    ) -> ResolvedTemplate {
        resolve_template(template, configuration)
    }
}

pub fn resolve_template(
    template: &ProductTemplate,
    configuration: &GlobalConfiguration,
) -> ResolvedTemplate {
    ResolvedTemplate {
        unit_price: resolve_unit_price(template, configuration),
        lead_time_weeks: resolve_lead_time(template, configuration),
    }
}

/// Base price times every applicable multiplier. A facet with no chosen
/// value, or a chosen value the template's table does not list, contributes
/// nothing; there is no error path.
pub fn resolve_unit_price(
    template: &ProductTemplate,
    configuration: &GlobalConfiguration,
) -> Decimal {
    let mut price = template.base_price;

    for (facet, multipliers) in &template.price_modifiers {
        let Some(chosen) = configuration.value(facet) else {
            continue;
        };
        if let Some(multiplier) = multipliers.get(chosen) {
            price *= *multiplier;
        }
    }

    price
}

/// Base lead time plus every applicable week delta. Flat rules apply
/// regardless of the chosen value; by-value rules only when the chosen value
/// is listed. The accumulated total floors at zero weeks.
pub fn resolve_lead_time(
    template: &ProductTemplate,
    configuration: &GlobalConfiguration,
) -> u32 {
    let mut weeks = i64::from(template.base_lead_time_weeks);

    for (facet, rule) in &template.lead_time_modifiers {
        match rule {
            LeadTimeRule::Flat(delta) => {
                weeks += i64::from(*delta);
            }
            LeadTimeRule::ByValue(deltas) => {
                let Some(chosen) = configuration.value(facet) else {
                    continue;
                };
                if let Some(delta) = deltas.get(chosen) {
                    weeks += i64::from(*delta);
                }
            }
        }
    }

    weeks.max(0).try_into().unwrap_or(u32::MAX)
}

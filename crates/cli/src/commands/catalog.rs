use epoch_core::{load_catalog, LoadOptions};

use crate::commands::CommandResult;

pub fn run(category: Option<&str>) -> CommandResult {
    let catalog = match load_catalog(LoadOptions::default()) {
        Ok(catalog) => catalog,
        Err(error) => return CommandResult::failure(format!("catalog load: {error}"), 2),
    };

    let templates = catalog.list_templates(category);
    tracing::debug!(
        event_name = "portal.catalog.listed",
        template_count = templates.len(),
        category = category.unwrap_or("<all>"),
        "catalog listing rendered"
    );

    if templates.is_empty() {
        let label = category.unwrap_or("<all>");
        return CommandResult::success(format!("no templates match category `{label}`"));
    }

    let mut lines =
        vec![format!("{:<10} {:<42} {:<15} {:>10} {:>6}", "ID", "NAME", "CATEGORY", "PRICE", "WEEKS")];
    for template in templates {
        lines.push(format!(
            "{:<10} {:<42} {:<15} {:>10} {:>6}",
            template.id.0,
            template.name,
            template.category,
            format!("${}", template.base_price),
            template.base_lead_time_weeks,
        ));
    }

    CommandResult::success(lines.join("\n"))
}

use epoch_core::{load_catalog, LoadOptions};

use crate::commands::CommandResult;

pub fn run(facet: Option<&str>) -> CommandResult {
    let catalog = match load_catalog(LoadOptions::default()) {
        Ok(catalog) => catalog,
        Err(error) => return CommandResult::failure(format!("catalog load: {error}"), 2),
    };

    let facets: Vec<String> = match facet {
        Some(name) => vec![name.to_string()],
        None => catalog.facet_names().into_iter().collect(),
    };

    let mut lines = Vec::with_capacity(facets.len());
    for name in facets {
        let values = catalog.facet_values(&name);
        if values.is_empty() {
            lines.push(format!("{name}: (no template declares this facet)"));
        } else {
            lines.push(format!(
                "{name}: {}",
                values.into_iter().collect::<Vec<_>>().join(", ")
            ));
        }
    }

    CommandResult::success(lines.join("\n"))
}

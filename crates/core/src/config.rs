use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::cpq::catalog::Catalog;
use crate::demo;
use crate::domain::template::ProductTemplate;

const CATALOG_PATH_VAR: &str = "EPOCH_CATALOG_PATH";

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub catalog_path: Option<PathBuf>,
    pub require_file: bool,
}

#[derive(Debug, Error)]
pub enum CatalogConfigError {
    #[error("could not read catalog file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse catalog file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required catalog file was not found: `{0}`")]
    MissingCatalogFile(PathBuf),
    #[error("catalog validation failed: {0}")]
    Validation(String),
}

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    templates: Vec<ProductTemplate>,
}

/// Loads the product catalog: an explicit path wins, then the
/// `EPOCH_CATALOG_PATH` environment variable, then the conventional file
/// locations. Without any file the built-in demo catalog is used, unless the
/// caller insists on a file.
pub fn load_catalog(options: LoadOptions) -> Result<Catalog, CatalogConfigError> {
    let maybe_path = resolve_catalog_path(options.catalog_path.as_deref());

    let Some(path) = maybe_path else {
        if options.require_file {
            let expected = options.catalog_path.unwrap_or_else(|| PathBuf::from("catalog.toml"));
            return Err(CatalogConfigError::MissingCatalogFile(expected));
        }
        return Ok(demo::demo_catalog());
    };

    let raw = fs::read_to_string(&path)
        .map_err(|source| CatalogConfigError::ReadFile { path: path.clone(), source })?;
    let file = toml::from_str::<CatalogFile>(&raw)
        .map_err(|source| CatalogConfigError::ParseFile { path: path.clone(), source })?;

    validate_templates(&file.templates)?;
    Ok(Catalog::new(file.templates))
}

fn resolve_catalog_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then(|| path.to_path_buf());
    }

    if let Some(value) = read_env(CATALOG_PATH_VAR) {
        let path = PathBuf::from(value);
        return path.exists().then_some(path);
    }

    [PathBuf::from("catalog.toml"), PathBuf::from("config/catalog.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn validate_templates(templates: &[ProductTemplate]) -> Result<(), CatalogConfigError> {
    let mut seen_ids: BTreeSet<&str> = BTreeSet::new();

    for template in templates {
        let id = template.id.0.trim();
        if id.is_empty() {
            return Err(CatalogConfigError::Validation(
                "every template needs a non-empty id".to_string(),
            ));
        }
        if !seen_ids.insert(id) {
            return Err(CatalogConfigError::Validation(format!(
                "duplicate template id `{id}`"
            )));
        }

        if template.name.trim().is_empty() {
            return Err(CatalogConfigError::Validation(format!(
                "template `{id}` needs a non-empty name"
            )));
        }
        if template.category.trim().is_empty() {
            return Err(CatalogConfigError::Validation(format!(
                "template `{id}` needs a non-empty category"
            )));
        }
        if template.base_price < Decimal::ZERO {
            return Err(CatalogConfigError::Validation(format!(
                "template `{id}` has a negative base_price"
            )));
        }

        for (facet, multipliers) in &template.price_modifiers {
            for (value, multiplier) in multipliers {
                if *multiplier <= Decimal::ZERO {
                    return Err(CatalogConfigError::Validation(format!(
                        "template `{id}` price modifier {facet}/{value} must be greater than zero"
                    )));
                }
            }
        }
    }

    Ok(())
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

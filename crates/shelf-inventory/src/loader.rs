//! # Inventory Loader
//!
//! Reads an inventory document and turns its records into [`Item`]s.
//!
//! ## File Layout
//! ```yaml
//! items:
//!   - name: dish soap
//!     price: 4
//!     hashtags: [soap, kitchen]
//!     description: Lemon scented
//!   - name: sponge
//!     price: "2"          # numeric strings are accepted
//! ```
//!
//! JSON files use the same shape. `hashtags` and `description` may be
//! omitted or null.
//!
//! ## Load Pipeline
//! ```text
//! read file ──► parse (YAML | JSON) ──► per-record checks ──► unique names
//!                                              │                    │
//!                                              └──── errors ────────┴──► Invalid(all)
//!                                                                   │
//!                                                 overlapping names ┴──► warn!
//! ```

use std::path::Path;

use serde::Deserialize;
use shelf_core::validation::{
    overlapping_names, validate_hashtags, validate_item_name, validate_total_price,
    validate_unique_names, RawPrice,
};
use shelf_core::{Item, Store, ValidationError};
use tracing::{debug, info, warn};

use crate::error::{InventoryError, InventoryResult};

/// Supported inventory document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryFormat {
    Yaml,
    Json,
}

impl InventoryFormat {
    /// Picks the format from the file extension; anything but `.json` is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InventoryFormat::Json,
            _ => InventoryFormat::Yaml,
        }
    }
}

/// Top-level document.
#[derive(Debug, Deserialize)]
struct InventoryDocument {
    items: Vec<RawItem>,
}

/// One record as written in the file, before coercion and validation.
#[derive(Debug, Deserialize)]
struct RawItem {
    name: String,
    price: RawPrice,
    #[serde(default)]
    hashtags: Option<Vec<String>>,
    #[serde(default)]
    description: Option<String>,
}

impl RawItem {
    fn into_item(self) -> Result<Item, ValidationError> {
        validate_item_name(&self.name)?;
        let price = self.price.to_price(&self.name)?;
        let hashtags = self.hashtags.unwrap_or_default();
        validate_hashtags(&self.name, &hashtags)?;

        Ok(Item::new(
            self.name,
            price,
            hashtags,
            self.description.unwrap_or_default(),
        ))
    }
}

/// Reads and validates the inventory file at `path`.
///
/// ## Errors
/// - [`InventoryError::Io`] if the file cannot be read
/// - [`InventoryError::Yaml`] / [`InventoryError::Json`] if it does not parse
/// - [`InventoryError::Invalid`] if any record breaks a rule
pub fn load_inventory(path: impl AsRef<Path>) -> InventoryResult<Vec<Item>> {
    let path = path.as_ref();
    let format = InventoryFormat::from_path(path);
    debug!(path = %path.display(), ?format, "Reading inventory");

    let content = std::fs::read_to_string(path).map_err(|source| InventoryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let items = parse_inventory(&content, format)?;
    info!(path = %path.display(), items = items.len(), "Inventory loaded");
    Ok(items)
}

/// Loads the inventory at `path` and opens a store over it.
pub fn open_store(path: impl AsRef<Path>) -> InventoryResult<Store> {
    load_inventory(path).map(Store::new)
}

/// Parses and validates an inventory document held in memory.
pub fn parse_inventory(content: &str, format: InventoryFormat) -> InventoryResult<Vec<Item>> {
    let document: InventoryDocument = match format {
        InventoryFormat::Yaml => serde_yaml::from_str(content)?,
        InventoryFormat::Json => serde_json::from_str(content)?,
    };

    let mut errors = Vec::new();
    let mut items = Vec::with_capacity(document.items.len());
    for raw in document.items {
        match raw.into_item() {
            Ok(item) => items.push(item),
            Err(e) => errors.push(e),
        }
    }
    errors.extend(validate_unique_names(&items));
    if let Err(e) = validate_total_price(&items) {
        errors.push(e);
    }

    if !errors.is_empty() {
        return Err(InventoryError::Invalid(errors));
    }

    for (shorter, longer) in overlapping_names(&items) {
        warn!(
            shorter = %shorter,
            longer = %longer,
            "Item name is contained in another item's name; exact name needed to pick it"
        );
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const YAML: &str = r#"
items:
  - name: dish soap
    price: 4
    hashtags: [soap, kitchen]
    description: Lemon scented
  - name: body soap
    price: 6.75
    hashtags:
      - soap
      - bath
    description: Unscented
  - name: sponge
    price: "2"
"#;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(InventoryFormat::from_path(Path::new("items.yml")), InventoryFormat::Yaml);
        assert_eq!(InventoryFormat::from_path(Path::new("items.yaml")), InventoryFormat::Yaml);
        assert_eq!(InventoryFormat::from_path(Path::new("items.JSON")), InventoryFormat::Json);
        assert_eq!(InventoryFormat::from_path(Path::new("items")), InventoryFormat::Yaml);
    }

    #[test]
    fn test_parse_yaml_coerces_and_defaults() {
        let items = parse_inventory(YAML, InventoryFormat::Yaml).unwrap();
        assert_eq!(items.len(), 3);

        assert_eq!(items[0].name(), "dish soap");
        assert_eq!(items[0].price(), 4);
        assert!(items[0].has_hashtag("kitchen"));
        assert_eq!(items[0].description(), "Lemon scented");

        assert_eq!(items[1].price(), 6);

        assert_eq!(items[2].price(), 2);
        assert!(items[2].hashtags().is_empty());
        assert_eq!(items[2].description(), "");
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{"items": [
            {"name": "Kettle", "price": 40, "hashtags": ["kitchen"], "description": "1.7 litres"},
            {"name": "Mug", "price": 5.5, "hashtags": null, "description": null}
        ]}"#;
        let items = parse_inventory(json, InventoryFormat::Json).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].price(), 5);
        assert!(items[1].hashtags().is_empty());
    }

    #[test]
    fn test_missing_items_key_is_malformed() {
        let err = parse_inventory("products: []", InventoryFormat::Yaml).unwrap_err();
        assert!(matches!(err, InventoryError::Yaml(_)));

        let err = parse_inventory("{", InventoryFormat::Json).unwrap_err();
        assert!(matches!(err, InventoryError::Json(_)));
    }

    #[test]
    fn test_invalid_records_are_all_reported() {
        let yaml = r#"
items:
  - name: Aaaa
    price: -1
  - name: ""
    price: 1
  - name: Bbbb
    price: 1
    hashtags: [H1, H1]
  - name: Cccc
    price: 1
  - name: Cccc
    price: 2
"#;
        let errors = match parse_inventory(yaml, InventoryFormat::Yaml).unwrap_err() {
            InventoryError::Invalid(errors) => errors,
            other => panic!("expected Invalid, got {other:?}"),
        };
        assert_eq!(errors.len(), 4);
        assert!(matches!(errors[0], ValidationError::Negative { .. }));
        assert!(matches!(errors[1], ValidationError::Required { .. }));
        assert!(matches!(errors[2], ValidationError::Duplicate { .. }));
        assert_eq!(errors[3].to_string(), "name 'Cccc' already exists");
    }

    #[test]
    fn test_overlapping_names_still_load() {
        let yaml = "items:\n  - {name: tea, price: 2}\n  - {name: green tea, price: 3}\n";
        let items = parse_inventory(yaml, InventoryFormat::Yaml).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(overlapping_names(&items), [("tea", "green tea")]);
    }

    #[test]
    fn test_inventory_total_price_must_fit() {
        let yaml = r#"
items:
  - {name: Aaaa, price: 9223372036854775807}
  - {name: Bbbb, price: 9223372036854775807}
  - {name: Cccc, price: 9223372036854775807}
"#;
        let errors = match parse_inventory(yaml, InventoryFormat::Yaml).unwrap_err() {
            InventoryError::Invalid(errors) => errors,
            other => panic!("expected Invalid, got {other:?}"),
        };
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], ValidationError::TotalOverflow { .. }));

        // Two of them still fit, so a full cart can be checked out.
        let yaml = r#"
items:
  - {name: Aaaa, price: 9223372036854775807}
  - {name: Bbbb, price: 9223372036854775807}
"#;
        let mut store = Store::new(parse_inventory(yaml, InventoryFormat::Yaml).unwrap());
        store.add("Aaaa").unwrap();
        store.add("Bbbb").unwrap();
        assert_eq!(store.checkout(), 18446744073709551614);
    }

    #[test]
    fn test_load_inventory_from_file() {
        let file = write_temp(".yml", YAML);
        let items = load_inventory(file.path()).unwrap();
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_open_store_from_json_file() {
        let file = write_temp(".json", r#"{"items": [{"name": "Mug", "price": 5}]}"#);
        let mut store = open_store(file.path()).unwrap();
        store.add("Mug").unwrap();
        assert_eq!(store.checkout(), 5);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nowhere.yml");
        let err = load_inventory(&path).unwrap_err();
        match err {
            InventoryError::Io { path: reported, source } => {
                assert_eq!(reported, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected Io, got {other:?}"),
        }
    }
}

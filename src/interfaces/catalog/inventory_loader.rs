use crate::domain::inventory::Inventory;
use crate::domain::item::Item;
use crate::domain::selection::Selection;
use crate::error::LoadError;
use crate::infrastructure::resources::ResourceLocator;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::str::FromStr;
use tracing::{debug, warn};

/// Serialization formats a catalog resource may use, chosen by resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// XML or binary property list.
    Plist,
    Json,
}

impl FromStr for CatalogFormat {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plist" => Ok(CatalogFormat::Plist),
            "json" => Ok(CatalogFormat::Json),
            _ => Err(LoadError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// What to do with a catalog entry the loader can't accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPolicy {
    /// Drop the entry and keep loading.
    Skip,
    /// Fail the whole load.
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Entries whose `price` or `quantity` is missing or invalid.
    pub malformed_entry: EntryPolicy,
    /// Entries whose key names no selection.
    pub unknown_selection: EntryPolicy,
    /// Entries whose selection an earlier key already stocked, e.g. both
    /// `dietSoda` and `diet-soda`.
    pub duplicate_selection: EntryPolicy,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            malformed_entry: EntryPolicy::Skip,
            unknown_selection: EntryPolicy::Reject,
            duplicate_selection: EntryPolicy::Reject,
        }
    }
}

impl LoaderOptions {
    /// Rejects anything that isn't a well-formed, known entry.
    pub fn strict() -> Self {
        Self {
            malformed_entry: EntryPolicy::Reject,
            unknown_selection: EntryPolicy::Reject,
            duplicate_selection: EntryPolicy::Reject,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum RawNumber {
    Integer(i128),
    Real(f64),
}

/// A catalog entry before validation. `None` fields were absent or not numbers.
#[derive(Debug, Default)]
struct RawRecord {
    price: Option<RawNumber>,
    quantity: Option<RawNumber>,
}

/// Builds an `Inventory` from a catalog resource.
///
/// The loader is only consulted at startup; once the machine is built it
/// owns its inventory.
#[derive(Debug, Clone)]
pub struct InventoryLoader {
    locator: ResourceLocator,
    options: LoaderOptions,
}

impl InventoryLoader {
    pub fn new(locator: ResourceLocator) -> Self {
        Self {
            locator,
            options: LoaderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: LoaderOptions) -> Self {
        self.options = options;
        self
    }

    /// Resolves `<name>.<kind>` under the resource root and loads it.
    pub fn load(&self, name: &str, kind: &str) -> Result<Inventory, LoadError> {
        let format: CatalogFormat = kind.parse()?;
        let path = self.locator.resolve(name, kind)?;
        debug!(path = %path.display(), "loading inventory");
        let file = File::open(&path)?;
        self.from_reader(BufReader::new(file), format)
    }

    /// Loads an inventory from an already-open source.
    pub fn from_reader<R: Read>(
        &self,
        mut source: R,
        format: CatalogFormat,
    ) -> Result<Inventory, LoadError> {
        let mut bytes = Vec::new();
        source.read_to_end(&mut bytes)?;

        let raw = match format {
            CatalogFormat::Plist => plist_records(&bytes)?,
            CatalogFormat::Json => json_records(&bytes)?,
        };

        let mut inventory = Inventory::new();
        for (key, record) in raw {
            let selection = match key.parse::<Selection>() {
                Ok(selection) => selection,
                Err(_) => match self.options.unknown_selection {
                    EntryPolicy::Reject => return Err(LoadError::UnknownSelection(key)),
                    EntryPolicy::Skip => {
                        warn!(key = %key, "skipping unknown selection");
                        continue;
                    }
                },
            };

            if inventory.contains(selection) {
                match self.options.duplicate_selection {
                    EntryPolicy::Reject => {
                        return Err(LoadError::DuplicateSelection { key, selection });
                    }
                    EntryPolicy::Skip => {
                        warn!(key = %key, selection = %selection, "skipping duplicate selection");
                        continue;
                    }
                }
            }

            let item = record
                .ok_or_else(|| "entry is not a dictionary".to_string())
                .and_then(validate);
            match item {
                Ok(item) => {
                    inventory.insert(selection, item);
                }
                Err(reason) => match self.options.malformed_entry {
                    EntryPolicy::Reject => return Err(LoadError::MalformedEntry { key, reason }),
                    EntryPolicy::Skip => {
                        warn!(key = %key, reason = %reason, "skipping malformed entry");
                    }
                },
            }
        }

        debug!(items = inventory.len(), "inventory loaded");
        Ok(inventory)
    }
}

fn validate(record: RawRecord) -> Result<Item, String> {
    let price = match record.price {
        Some(RawNumber::Integer(n)) => Decimal::from_i128(n),
        Some(RawNumber::Real(f)) if f.is_finite() => Decimal::from_f64(f),
        Some(RawNumber::Real(_)) => None,
        None => return Err("missing price".to_string()),
    }
    .ok_or_else(|| "price is not representable".to_string())?;

    let quantity = match record.quantity {
        Some(RawNumber::Integer(n)) => {
            u32::try_from(n).map_err(|_| format!("quantity {n} is out of range"))?
        }
        Some(RawNumber::Real(_)) => return Err("quantity is not an integer".to_string()),
        None => return Err("missing quantity".to_string()),
    };

    Item::new(price, quantity).ok_or_else(|| format!("price {price} is negative"))
}

fn plist_records(bytes: &[u8]) -> Result<Vec<(String, Option<RawRecord>)>, LoadError> {
    let root = plist::Value::from_reader(Cursor::new(bytes))?;
    let dict = root
        .into_dictionary()
        .ok_or_else(|| LoadError::MalformedContent("root is not a dictionary".to_string()))?;

    let number = |value: Option<&plist::Value>| -> Option<RawNumber> {
        let value = value?;
        if let Some(n) = value.as_signed_integer() {
            Some(RawNumber::Integer(n.into()))
        } else if let Some(n) = value.as_unsigned_integer() {
            Some(RawNumber::Integer(n.into()))
        } else {
            value.as_real().map(RawNumber::Real)
        }
    };

    Ok(dict
        .into_iter()
        .map(|(key, value)| {
            let record = value.as_dictionary().map(|fields| RawRecord {
                price: number(fields.get("price")),
                quantity: number(fields.get("quantity")),
            });
            (key, record)
        })
        .collect())
}

fn json_records(bytes: &[u8]) -> Result<Vec<(String, Option<RawRecord>)>, LoadError> {
    let root: serde_json::Value = serde_json::from_slice(bytes)?;
    let serde_json::Value::Object(map) = root else {
        return Err(LoadError::MalformedContent("root is not an object".to_string()));
    };

    let number = |value: Option<&serde_json::Value>| -> Option<RawNumber> {
        let value = value?;
        if let Some(n) = value.as_i64() {
            Some(RawNumber::Integer(n.into()))
        } else if let Some(n) = value.as_u64() {
            Some(RawNumber::Integer(n.into()))
        } else {
            value.as_f64().map(RawNumber::Real)
        }
    };

    Ok(map
        .into_iter()
        .map(|(key, value)| {
            let record = value.as_object().map(|fields| RawRecord {
                price: number(fields.get("price")),
                quantity: number(fields.get("quantity")),
            });
            (key, record)
        })
        .collect())
}

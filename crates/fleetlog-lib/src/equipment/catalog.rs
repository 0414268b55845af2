//! Equipment master catalog loading and management.
//!
//! This module handles loading equipment master data from CSV files and
//! provides lookup by master id.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use crate::error::{Error, Result};

use super::attributes::{EquipmentMaster, EquipmentParams, MasterId};
use super::category::EquipmentCategory;

/// Collection of equipment master rows loaded from a CSV file.
#[derive(Debug, Clone, Default)]
pub struct EquipmentCatalog {
    items: HashMap<MasterId, EquipmentMaster>,
    source: Option<PathBuf>,
}

impl EquipmentCatalog {
    /// Load an equipment catalog from a file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let mut catalog = Self::from_reader(file)?;
        catalog.source = Some(path.to_path_buf());
        debug!(
            items = catalog.len(),
            "loaded equipment catalog from {}",
            path.display()
        );
        Ok(catalog)
    }

    /// Load an equipment catalog from a reader (e.g., file or in-memory buffer).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|err| Error::EquipmentDataValidation {
                message: format!("failed to read equipment catalog headers: {err}"),
            })?
            .clone();

        let normalized_headers: Vec<String> = headers.iter().map(normalize_header).collect();

        // Canonical field name -> accepted header spellings (normalized).
        let synonyms: &[(&str, &[&str])] = &[
            ("id", &["id", "master_id", "slotitem_id", "api_id"]),
            ("name", &["name", "api_name"]),
            ("type1", &["type1", "api_type1"]),
            ("type2", &["type2", "api_type2", "category"]),
            ("attack", &["attack", "anti_air", "antiair", "aa", "taiku", "api_tyku"]),
            ("evasion", &["evasion", "interception", "kaihi", "api_houk"]),
            ("firepower", &["firepower", "anti_bomber", "antibomber", "houm", "api_houm"]),
            ("search", &["search", "los", "saku", "api_saku"]),
        ];

        let mut index_map: BTreeMap<&str, usize> = BTreeMap::new();
        for (canon, alts) in synonyms {
            'outer: for alt in *alts {
                let alt_n = normalize_header(alt);
                for (i, h) in normalized_headers.iter().enumerate() {
                    if h == &alt_n {
                        index_map.insert(*canon, i);
                        break 'outer;
                    }
                }
            }
        }

        let missing: Vec<&str> = synonyms
            .iter()
            .map(|(canon, _)| *canon)
            .filter(|c| !index_map.contains_key(c))
            .collect();

        if !missing.is_empty() {
            return Err(Error::EquipmentDataValidation {
                message: format!(
                    "equipment catalog missing required columns: {}. Available: {}",
                    missing.join(", "),
                    headers
                        .iter()
                        .map(|h| h.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            });
        }

        let mut items = HashMap::new();

        let mut row_num: usize = 1; // header is line 1
        for result in csv_reader.records() {
            row_num += 1;
            let record = result.map_err(|e| Error::EquipmentDataValidation {
                message: e.to_string(),
            })?;

            let get = |field: &str| {
                index_map
                    .get(field)
                    .and_then(|&i| record.get(i))
                    .map(str::trim)
            };

            let name = get("name").unwrap_or_default().to_string();
            let parse = |field: &str| -> Result<i64> {
                parse_number::<i64>(get(field), field, &name, row_num)
            };

            let id = u32::try_from(parse("id")?).map_err(|_| Error::EquipmentDataValidation {
                message: format!("id out of range for equipment '{}' at row {}", name, row_num),
            })?;
            let type1 = code_field(parse("type1")?, "type1", &name, row_num)?;
            let type2 = code_field(parse("type2")?, "type2", &name, row_num)?;

            let master = EquipmentMaster {
                id,
                name: name.clone(),
                type1,
                category: EquipmentCategory::from_type2(type2),
                params: EquipmentParams {
                    attack: stat_field(parse("attack")?, "attack", &name, row_num)?,
                    evasion: stat_field(parse("evasion")?, "evasion", &name, row_num)?,
                    firepower: stat_field(parse("firepower")?, "firepower", &name, row_num)?,
                    search: stat_field(parse("search")?, "search", &name, row_num)?,
                },
            };

            master.validate()?;

            if items.contains_key(&master.id) {
                return Err(Error::DuplicateEquipment { id: master.id });
            }
            items.insert(master.id, master);
        }

        Ok(Self {
            items,
            source: None,
        })
    }

    /// Build a catalog from already materialized master rows.
    pub fn from_masters<I>(masters: I) -> Result<Self>
    where
        I: IntoIterator<Item = EquipmentMaster>,
    {
        let mut items = HashMap::new();
        for master in masters {
            master.validate()?;
            if items.contains_key(&master.id) {
                return Err(Error::DuplicateEquipment { id: master.id });
            }
            items.insert(master.id, master);
        }
        Ok(Self {
            items,
            source: None,
        })
    }

    /// Get a master row by id.
    pub fn get(&self, id: MasterId) -> Option<&EquipmentMaster> {
        self.items.get(&id)
    }

    /// Number of master rows in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog holds no rows.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get all master rows sorted by id.
    pub fn items_sorted(&self) -> Vec<&EquipmentMaster> {
        let mut items: Vec<&EquipmentMaster> = self.items.values().collect();
        items.sort_by_key(|m| m.id);
        items
    }

    /// Get the source path if the catalog was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// Normalize header strings for robust matching.
fn normalize_header(s: &str) -> String {
    s.to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect::<String>()
}

fn parse_number<T>(raw: Option<&str>, field: &str, name: &str, row: usize) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = raw.ok_or_else(|| Error::EquipmentDataValidation {
        message: format!("missing {} for equipment '{}' at row {}", field, name, row),
    })?;
    raw.parse::<T>().map_err(|e| Error::EquipmentDataValidation {
        message: format!(
            "invalid {} for equipment '{}' at row {}: {}",
            field, name, row, e
        ),
    })
}

fn code_field(value: i64, field: &str, name: &str, row: usize) -> Result<u16> {
    u16::try_from(value).map_err(|_| Error::EquipmentDataValidation {
        message: format!(
            "{} must be between 0 and {} for equipment '{}' at row {}",
            field,
            u16::MAX,
            name,
            row
        ),
    })
}

fn stat_field(value: i64, field: &str, name: &str, row: usize) -> Result<i32> {
    i32::try_from(value).map_err(|_| Error::EquipmentDataValidation {
        message: format!("{} out of range for equipment '{}' at row {}", field, name, row),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn api_style_headers_are_accepted() {
        let csv = "api_id,api_name,api_type1,api_type2,api_tyku,api_houk,api_houm,api_saku\n\
                   20,Type 0 Fighter Model 21,3,6,5,0,0,0\n";
        let catalog = EquipmentCatalog::from_reader(Cursor::new(csv))
            .expect("should parse api-style headers via synonyms");
        let item = catalog.get(20).expect("item exists");
        assert_eq!(item.params.attack, 5);
        assert_eq!(item.category, EquipmentCategory::CarrierFighter);
    }

    #[test]
    fn missing_columns_are_reported() {
        let csv = "id,name,type1,type2\n1,Gun,1,1\n";
        let err = EquipmentCatalog::from_reader(Cursor::new(csv)).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("attack"), "{message}");
        assert!(message.contains("search"), "{message}");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let csv = "id,name,type1,type2,attack,evasion,firepower,search\n\
                   1,A,1,1,0,0,0,0\n\
                   1,B,1,1,0,0,0,0\n";
        let err = EquipmentCatalog::from_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, Error::DuplicateEquipment { id: 1 }));
    }

    #[test]
    fn non_numeric_stats_name_the_row() {
        let csv = "id,name,type1,type2,attack,evasion,firepower,search\n\
                   1,A,1,1,high,0,0,0\n";
        let err = EquipmentCatalog::from_reader(Cursor::new(csv)).unwrap_err();
        assert!(err.to_string().contains("row 2"));
    }
}

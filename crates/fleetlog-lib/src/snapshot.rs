//! Game state snapshot: owned equipment, fleets and land bases.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::airbase::{AirCorps, Airbase, AreaId, CorpsId};
use crate::equipment::{EquipmentCatalog, EquipmentInstance, Inventory};
use crate::error::{Error, Result};
use crate::fleet::{Fleet, Ship};

/// Everything the calculators need from one moment of play.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Admiral (HQ) level.
    #[serde(default)]
    pub hq_level: u32,
    #[serde(default)]
    pub equipment: Vec<EquipmentInstance>,
    #[serde(default)]
    pub fleets: Vec<Fleet>,
    #[serde(default)]
    pub airbase: Airbase,
}

impl Snapshot {
    /// Load a snapshot from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let snapshot = Self::from_reader(BufReader::new(file))?;
        debug!(
            path = %path.display(),
            fleets = snapshot.fleets.len(),
            equipment = snapshot.equipment.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    /// Decode a snapshot from JSON.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).map_err(|err| Error::SnapshotParse {
            message: err.to_string(),
        })
    }

    /// Join the owned equipment with master data.
    pub fn inventory(&self, catalog: &EquipmentCatalog) -> Inventory {
        Inventory::from_instances(catalog, &self.equipment)
    }

    /// Fleet by 1-based position, as numbered in game.
    pub fn fleet(&self, number: usize) -> Result<&Fleet> {
        number
            .checked_sub(1)
            .and_then(|index| self.fleets.get(index))
            .ok_or(Error::UnknownFleet { index: number })
    }

    /// Ship by 1-based position within a fleet.
    pub fn ship(&self, fleet: usize, position: usize) -> Result<&Ship> {
        self.fleet(fleet)?
            .ships
            .get(position.wrapping_sub(1))
            .ok_or(Error::UnknownShip {
                fleet,
                index: position,
            })
    }

    /// Air corps of an area, ordered by corps id.
    pub fn area(&self, area: AreaId) -> Result<Vec<&AirCorps>> {
        self.airbase
            .area(area)
            .map(|corps| corps.values().collect())
            .ok_or_else(|| Error::UnknownAirbaseArea {
                area,
                known: self.airbase.area_ids(),
            })
    }

    /// One air corps by area and id.
    pub fn air_corps(&self, area: AreaId, id: CorpsId) -> Result<&AirCorps> {
        self.airbase
            .area(area)
            .ok_or_else(|| Error::UnknownAirbaseArea {
                area,
                known: self.airbase.area_ids(),
            })?
            .get(&id)
            .ok_or(Error::UnknownAirCorps { area, id })
    }
}

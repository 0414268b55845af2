//! Lookup from owned equipment slot ids to resolved equipment.
//!
//! Calculators receive an [`EquipmentRegistry`] explicitly instead of reading
//! a process-wide item table, so the same snapshot can be evaluated from any
//! thread.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::attributes::{Equipment, MasterId, SlotId};
use super::catalog::EquipmentCatalog;

/// Read-only lookup of owned equipment.
pub trait EquipmentRegistry {
    /// Resolve a slot id. Absent ids contribute nothing to any calculation.
    fn lookup(&self, slot: SlotId) -> Option<&Equipment>;
}

impl EquipmentRegistry for HashMap<SlotId, Equipment> {
    fn lookup(&self, slot: SlotId) -> Option<&Equipment> {
        self.get(&slot)
    }
}

impl<R: EquipmentRegistry + ?Sized> EquipmentRegistry for &R {
    fn lookup(&self, slot: SlotId) -> Option<&Equipment> {
        (**self).lookup(slot)
    }
}

/// Owned equipment instance as it appears in a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentInstance {
    pub id: SlotId,
    pub master_id: MasterId,
    #[serde(default)]
    pub level: u8,
    #[serde(default)]
    pub alv: u8,
    #[serde(default)]
    pub locked: bool,
}

/// Owned equipment joined against an [`EquipmentCatalog`].
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: HashMap<SlotId, Equipment>,
}

impl Inventory {
    /// Resolve snapshot instances against the catalog.
    ///
    /// Instances whose master id is not in the catalog are skipped with a
    /// warning; later lookups of those slots are simply absent.
    pub fn from_instances<'a, I>(catalog: &EquipmentCatalog, instances: I) -> Self
    where
        I: IntoIterator<Item = &'a EquipmentInstance>,
    {
        let mut items = HashMap::new();
        for instance in instances {
            let Some(master) = catalog.get(instance.master_id) else {
                warn!(
                    slot_id = instance.id,
                    master_id = instance.master_id,
                    "equipment master id missing from catalog; slot will be ignored"
                );
                continue;
            };
            let mut item = Equipment::from_master(master, instance.id, instance.level, instance.alv);
            item.locked = instance.locked;
            items.insert(instance.id, item);
        }
        Self { items }
    }

    /// Number of resolved instances.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no instance could be resolved.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Resolved instances sorted by slot id.
    pub fn items_sorted(&self) -> Vec<&Equipment> {
        let mut items: Vec<&Equipment> = self.items.values().collect();
        items.sort_by_key(|item| item.slot_id);
        items
    }
}

impl EquipmentRegistry for Inventory {
    fn lookup(&self, slot: SlotId) -> Option<&Equipment> {
        self.items.get(&slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::{EquipmentCategory, EquipmentMaster, EquipmentParams};

    fn catalog() -> EquipmentCatalog {
        EquipmentCatalog::from_masters([EquipmentMaster {
            id: 54,
            name: "Saiun".to_string(),
            type1: 5,
            category: EquipmentCategory::CarrierRecon,
            params: EquipmentParams {
                search: 9,
                ..EquipmentParams::default()
            },
        }])
        .expect("valid catalog")
    }

    #[test]
    fn unknown_master_ids_are_skipped() {
        let instances = [
            EquipmentInstance {
                id: 1,
                master_id: 54,
                level: 2,
                alv: 7,
                locked: true,
            },
            EquipmentInstance {
                id: 2,
                master_id: 9999,
                level: 0,
                alv: 0,
                locked: false,
            },
        ];
        let inventory = Inventory::from_instances(&catalog(), &instances);

        assert_eq!(inventory.len(), 1);
        let saiun = inventory.lookup(1).expect("resolved");
        assert_eq!(saiun.params.search, 9);
        assert_eq!(saiun.level, 2);
        assert!(saiun.locked);
        assert!(inventory.lookup(2).is_none());
    }

    #[test]
    fn references_forward_lookups() {
        fn search_of<R: EquipmentRegistry>(registry: R, slot: SlotId) -> Option<i32> {
            registry.lookup(slot).map(|item| item.params.search)
        }

        let instances = [EquipmentInstance {
            id: 5,
            master_id: 54,
            level: 0,
            alv: 0,
            locked: false,
        }];
        let inventory = Inventory::from_instances(&catalog(), &instances);
        assert_eq!(search_of(&inventory, 5), Some(9));
        assert_eq!(search_of(&inventory, 6), None);
    }
}

//! Equipment domain methods on Store

use crate::models::{
    enums::EquipmentStatus,
    equipment::{CreateEquipment, Equipment, UpdateEquipment},
};

use super::Store;

impl Store {
    /// List all equipment in insertion order
    pub fn list_equipment(&self) -> Vec<Equipment> {
        self.read().equipment.values().cloned().collect()
    }

    /// Get equipment by id
    pub fn get_equipment(&self, id: &str) -> Option<Equipment> {
        self.read().equipment.get(id).cloned()
    }

    /// Insert a new equipment record with a fresh id
    pub fn add_equipment(&self, data: CreateEquipment) -> Equipment {
        let record = Equipment {
            id: self.next_id("eq"),
            name: data.name,
            serial_number: data.serial_number,
            department: data.department,
            owner: data.owner,
            location: data.location,
            purchase_date: data.purchase_date,
            warranty_expiry: data.warranty_expiry,
            maintenance_team_id: data.maintenance_team_id,
            default_technician_id: data.default_technician_id,
            status: data.status.unwrap_or(EquipmentStatus::Active),
            image: data.image.unwrap_or_default(),
        };
        self.write()
            .equipment
            .insert(record.id.clone(), record.clone());
        record
    }

    /// Merge the given fields into the matching equipment. Unknown id is a
    /// no-op (`None`).
    pub fn update_equipment(&self, id: &str, patch: &UpdateEquipment) -> Option<Equipment> {
        let mut collections = self.write();
        let equipment = collections.equipment.get_mut(id)?;
        if let Some(name) = &patch.name {
            equipment.name = name.clone();
        }
        if let Some(serial_number) = &patch.serial_number {
            equipment.serial_number = serial_number.clone();
        }
        if let Some(department) = &patch.department {
            equipment.department = department.clone();
        }
        if let Some(owner) = &patch.owner {
            equipment.owner = owner.clone();
        }
        if let Some(location) = &patch.location {
            equipment.location = location.clone();
        }
        if let Some(purchase_date) = patch.purchase_date {
            equipment.purchase_date = purchase_date;
        }
        if let Some(warranty_expiry) = patch.warranty_expiry {
            equipment.warranty_expiry = warranty_expiry;
        }
        if let Some(team_id) = &patch.maintenance_team_id {
            equipment.maintenance_team_id = team_id.clone();
        }
        if let Some(technician_id) = &patch.default_technician_id {
            equipment.default_technician_id = technician_id.clone();
        }
        if let Some(status) = patch.status {
            equipment.status = status;
        }
        if let Some(image) = &patch.image {
            equipment.image = image.clone();
        }
        Some(equipment.clone())
    }

    /// Set an equipment's status directly. Unknown id is a no-op (`None`).
    pub fn update_equipment_status(
        &self,
        id: &str,
        status: EquipmentStatus,
    ) -> Option<Equipment> {
        let mut collections = self.write();
        let equipment = collections.equipment.get_mut(id)?;
        equipment.status = status;
        Some(equipment.clone())
    }

    #[cfg(test)]
    pub(crate) fn insert_equipment(&self, record: Equipment) {
        self.write().equipment.insert(record.id.clone(), record);
    }
}

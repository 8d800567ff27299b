//! Request domain methods on Store

use crate::models::{
    enums::{EquipmentStatus, RequestStatus},
    request::{CreateRequest, MaintenanceRequest, UpdateRequest},
};

use super::Store;

impl Store {
    /// List all maintenance requests in insertion order
    pub fn list_requests(&self) -> Vec<MaintenanceRequest> {
        self.read().requests.values().cloned().collect()
    }

    /// Get a request by id
    pub fn get_request(&self, id: &str) -> Option<MaintenanceRequest> {
        self.read().requests.get(id).cloned()
    }

    /// Insert a new request. Assigns a fresh id, stamps `created_at` from
    /// the clock, and defaults the status to `new` when unspecified.
    pub fn add_request(&self, data: CreateRequest) -> MaintenanceRequest {
        let record = MaintenanceRequest {
            id: self.next_id("req"),
            subject: data.subject,
            description: data.description,
            equipment_id: data.equipment_id,
            kind: data.kind,
            status: data.status.unwrap_or(RequestStatus::New),
            scheduled_date: data.scheduled_date,
            duration: data.duration,
            team_id: data.team_id,
            assigned_technician_id: data.assigned_technician_id,
            time_spent: data.time_spent.unwrap_or(0.0),
            priority: data.priority,
            created_at: self.today(),
        };
        self.write()
            .requests
            .insert(record.id.clone(), record.clone());
        record
    }

    /// Merge the given fields into the matching request. Unknown id is a
    /// no-op (`None`); an empty patch leaves the record unchanged.
    pub fn update_request(&self, id: &str, patch: &UpdateRequest) -> Option<MaintenanceRequest> {
        let mut collections = self.write();
        let request = collections.requests.get_mut(id)?;
        if let Some(subject) = &patch.subject {
            request.subject = subject.clone();
        }
        if let Some(description) = &patch.description {
            request.description = description.clone();
        }
        if let Some(equipment_id) = &patch.equipment_id {
            request.equipment_id = equipment_id.clone();
        }
        if let Some(kind) = patch.kind {
            request.kind = kind;
        }
        if let Some(status) = patch.status {
            request.status = status;
        }
        if let Some(scheduled_date) = patch.scheduled_date {
            request.scheduled_date = scheduled_date;
        }
        if let Some(duration) = patch.duration {
            request.duration = duration;
        }
        if let Some(team_id) = &patch.team_id {
            request.team_id = Some(team_id.clone());
        }
        if let Some(technician_id) = &patch.assigned_technician_id {
            request.assigned_technician_id = Some(technician_id.clone());
        }
        if let Some(time_spent) = patch.time_spent {
            request.time_spent = time_spent;
        }
        if let Some(priority) = patch.priority {
            request.priority = priority;
        }
        Some(request.clone())
    }

    /// Set a request's status.
    ///
    /// Moving to `scrap` also marks the referenced equipment as scrapped,
    /// under the same write lock. The cascade is one-directional: no other
    /// transition touches equipment, and leaving `scrap` later does not
    /// revert the equipment status.
    pub fn update_request_status(
        &self,
        id: &str,
        status: RequestStatus,
    ) -> Option<MaintenanceRequest> {
        let mut collections = self.write();
        let request = collections.requests.get_mut(id)?;
        request.status = status;
        let updated = request.clone();
        if status == RequestStatus::Scrap {
            if let Some(equipment) = collections.equipment.get_mut(&updated.equipment_id) {
                equipment.status = EquipmentStatus::Scrapped;
            }
        }
        Some(updated)
    }

    /// Requests referencing the given equipment
    pub fn requests_for_equipment(&self, equipment_id: &str) -> Vec<MaintenanceRequest> {
        self.read()
            .requests
            .values()
            .filter(|r| r.equipment_id == equipment_id)
            .cloned()
            .collect()
    }

    /// Number of non-closed requests for the given equipment
    pub fn open_request_count(&self, equipment_id: &str) -> usize {
        self.read()
            .requests
            .values()
            .filter(|r| r.equipment_id == equipment_id && !r.status.is_closed())
            .count()
    }

    /// Number of requests assigned to the technician with status `new` or
    /// `in_progress`. Repaired and scrapped requests never count.
    pub fn active_task_count(&self, technician_id: &str) -> usize {
        self.read()
            .requests
            .values()
            .filter(|r| {
                r.assigned_technician_id.as_deref() == Some(technician_id)
                    && r.status.is_active()
            })
            .count()
    }

    #[cfg(test)]
    pub(crate) fn insert_request(&self, record: MaintenanceRequest) {
        self.write().requests.insert(record.id.clone(), record);
    }
}

//! Request lifecycle service
//!
//! Thin business layer over the store: input validation, not-found
//! mapping for the HTTP boundary, and transition logging. The store keeps
//! its silent no-op contract; this layer is where an unknown id becomes a
//! 404.

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::{EquipmentStatus, RequestStatus},
        equipment::{CreateEquipment, Equipment, UpdateEquipment},
        request::{CreateRequest, MaintenanceRequest, UpdateRequest},
        team::{CreateTeam, CreateTechnician, Team, Technician},
    },
    store::Store,
};

#[derive(Clone)]
pub struct LifecycleService {
    store: Store,
}

impl LifecycleService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    // -- requests ----------------------------------------------------------

    pub fn list_requests(&self) -> Vec<MaintenanceRequest> {
        self.store.list_requests()
    }

    pub fn get_request(&self, id: &str) -> AppResult<MaintenanceRequest> {
        self.store
            .get_request(id)
            .ok_or_else(|| AppError::NotFound(format!("Request {} not found", id)))
    }

    pub fn create_request(&self, data: CreateRequest) -> AppResult<MaintenanceRequest> {
        data.validate()?;
        let created = self.store.add_request(data);
        tracing::info!(request = %created.id, subject = %created.subject, "request created");
        Ok(created)
    }

    pub fn update_request(
        &self,
        id: &str,
        patch: &UpdateRequest,
    ) -> AppResult<MaintenanceRequest> {
        self.store
            .update_request(id, patch)
            .ok_or_else(|| AppError::NotFound(format!("Request {} not found", id)))
    }

    /// Move a request through the workflow. The scrap transition cascades
    /// to the referenced equipment inside the store.
    pub fn update_request_status(
        &self,
        id: &str,
        status: RequestStatus,
    ) -> AppResult<MaintenanceRequest> {
        let updated = self
            .store
            .update_request_status(id, status)
            .ok_or_else(|| AppError::NotFound(format!("Request {} not found", id)))?;
        if status == RequestStatus::Scrap {
            tracing::info!(
                request = id,
                equipment = %updated.equipment_id,
                "request scrapped, equipment marked as scrapped"
            );
        } else {
            tracing::debug!(request = id, status = %status, "request status changed");
        }
        Ok(updated)
    }

    // -- equipment ---------------------------------------------------------

    pub fn list_equipment(&self) -> Vec<Equipment> {
        self.store.list_equipment()
    }

    pub fn get_equipment(&self, id: &str) -> AppResult<Equipment> {
        self.store
            .get_equipment(id)
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    pub fn create_equipment(&self, data: CreateEquipment) -> AppResult<Equipment> {
        data.validate()?;
        Ok(self.store.add_equipment(data))
    }

    pub fn update_equipment(
        &self,
        id: &str,
        patch: &UpdateEquipment,
    ) -> AppResult<Equipment> {
        self.store
            .update_equipment(id, patch)
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    pub fn update_equipment_status(
        &self,
        id: &str,
        status: EquipmentStatus,
    ) -> AppResult<Equipment> {
        self.store
            .update_equipment_status(id, status)
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    pub fn requests_for_equipment(&self, id: &str) -> AppResult<Vec<MaintenanceRequest>> {
        // resolve the equipment first so an unknown id is a 404, not []
        self.get_equipment(id)?;
        Ok(self.store.requests_for_equipment(id))
    }

    // -- teams -------------------------------------------------------------

    pub fn list_teams(&self) -> Vec<Team> {
        self.store.list_teams()
    }

    pub fn get_team(&self, id: &str) -> AppResult<Team> {
        self.store
            .get_team(id)
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", id)))
    }

    pub fn create_team(&self, data: CreateTeam) -> AppResult<Team> {
        data.validate()?;
        for technician in &data.technicians {
            technician.validate()?;
        }
        Ok(self.store.add_team(data))
    }

    pub fn add_technician(
        &self,
        team_id: &str,
        data: CreateTechnician,
    ) -> AppResult<Technician> {
        data.validate()?;
        self.store
            .add_technician_to_team(team_id, data)
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", team_id)))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::models::enums::{MaintenanceType, Priority};
    use crate::store::testing::test_store;

    fn service() -> LifecycleService {
        LifecycleService::new(test_store())
    }

    fn draft(subject: &str) -> CreateRequest {
        CreateRequest {
            subject: subject.to_string(),
            description: String::new(),
            equipment_id: "eq-1".to_string(),
            kind: MaintenanceType::Corrective,
            status: None,
            scheduled_date: NaiveDate::from_ymd_opt(2024, 12, 30).unwrap(),
            duration: 5.0,
            team_id: None,
            assigned_technician_id: None,
            time_spent: None,
            priority: Priority::High,
        }
    }

    #[test]
    fn create_request_rejects_missing_subject() {
        let result = service().create_request(draft(""));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn create_request_defaults_to_new() {
        let created = service().create_request(draft("Hydraulic fluid leak")).unwrap();
        assert_eq!(created.status, RequestStatus::New);
    }

    #[test]
    fn mutations_on_unknown_ids_surface_not_found() {
        let svc = service();
        assert!(matches!(
            svc.update_request("req-ghost", &UpdateRequest::default()),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            svc.update_request_status("req-ghost", RequestStatus::Scrap),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            svc.update_equipment_status("eq-ghost", EquipmentStatus::Scrapped),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            svc.requests_for_equipment("eq-ghost"),
            Err(AppError::NotFound(_))
        ));
    }
}

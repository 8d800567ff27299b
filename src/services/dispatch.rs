//! Dispatch recommendation service
//!
//! Obtains advisory team/technician recommendations for a request and
//! applies them only on explicit confirmation. Fetching never mutates the
//! store; `apply` is the single path by which a recommendation changes
//! persisted state.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::{
    error::{AppError, AppResult},
    models::{
        equipment::{Equipment, UpdateEquipment},
        recommendation::{AnalyzeInput, DispatchInput, Recommendation, TeamAnalysis, TechnicianWorkload},
        request::{MaintenanceRequest, UpdateRequest},
        team::TeamSummary,
    },
    services::advisory::AdvisoryClient,
    store::Store,
};

#[derive(Clone)]
pub struct DispatchService {
    store: Store,
    advisory: Arc<dyn AdvisoryClient>,
    /// Per-request fetch generation. A result is only surfaced when its
    /// generation is still the latest for that request, so a stale fetch
    /// can never overwrite a newer one.
    fetches: Arc<Mutex<HashMap<String, u64>>>,
}

impl DispatchService {
    pub fn new(store: Store, advisory: Arc<dyn AdvisoryClient>) -> Self {
        Self {
            store,
            advisory,
            fetches: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Per-technician active task counts across all teams.
    /// Active means assigned with status `new` or `in_progress`.
    pub fn workload_snapshot(&self) -> Vec<TechnicianWorkload> {
        self.store
            .list_teams()
            .iter()
            .flat_map(|team| {
                team.technicians.iter().map(|tech| TechnicianWorkload {
                    id: tech.id.clone(),
                    name: tech.name.clone(),
                    team_id: team.id.clone(),
                    team_name: team.name.clone(),
                    active_tasks: self.store.active_task_count(&tech.id),
                })
            })
            .collect()
    }

    /// Fetch a full dispatch recommendation for the request.
    ///
    /// Read-only with respect to the store. Returns a superseded error when
    /// a newer fetch for the same request started while this one was in
    /// flight; the stale result is discarded, never surfaced.
    pub async fn recommend(&self, request_id: &str) -> AppResult<Recommendation> {
        let request = self
            .store
            .get_request(request_id)
            .ok_or_else(|| AppError::NotFound(format!("Request {} not found", request_id)))?;
        let input = self.dispatch_input(&request);

        let generation = self.begin_fetch(request_id);
        let result = self.advisory.recommend(&input).await;
        if !self.is_current(request_id, generation) {
            tracing::debug!(
                request = request_id,
                "discarding superseded dispatch recommendation"
            );
            return Err(AppError::Superseded(
                "A newer recommendation was requested for this request".to_string(),
            ));
        }
        Ok(result?)
    }

    /// Lighter team-validation call for the request
    pub async fn analyze(&self, request_id: &str) -> AppResult<TeamAnalysis> {
        let request = self
            .store
            .get_request(request_id)
            .ok_or_else(|| AppError::NotFound(format!("Request {} not found", request_id)))?;
        let input = self.analyze_input(&request);

        let generation = self.begin_fetch(request_id);
        let result = self.advisory.analyze(&input).await;
        if !self.is_current(request_id, generation) {
            return Err(AppError::Superseded(
                "A newer recommendation was requested for this request".to_string(),
            ));
        }
        Ok(result?)
    }

    /// Apply a recommendation to the request. Requires that the team exists
    /// and the technician belongs to it; otherwise fails without touching
    /// the store.
    pub fn apply(
        &self,
        request_id: &str,
        team_id: &str,
        technician_id: &str,
    ) -> AppResult<MaintenanceRequest> {
        let team = self
            .store
            .get_team(team_id)
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", team_id)))?;
        if !team.technicians.iter().any(|t| t.id == technician_id) {
            return Err(AppError::NotFound(format!(
                "Technician {} not found in team {}",
                technician_id, team.name
            )));
        }

        let patch = UpdateRequest {
            team_id: Some(team.id.clone()),
            assigned_technician_id: Some(technician_id.to_string()),
            ..Default::default()
        };
        let updated = self
            .store
            .update_request(request_id, &patch)
            .ok_or_else(|| AppError::NotFound(format!("Request {} not found", request_id)))?;
        self.clear_fetch(request_id);
        tracing::info!(
            request = request_id,
            team = %team.name,
            technician = technician_id,
            "dispatch recommendation applied"
        );
        Ok(updated)
    }

    /// Drop any in-flight fetch for the request so a late result is
    /// discarded silently.
    pub fn dismiss(&self, request_id: &str) {
        self.clear_fetch(request_id);
    }

    /// Apply a team-validation result to the equipment behind a request.
    /// The analysis identifies the team by name; an unknown name fails
    /// without touching the store.
    pub fn reassign_equipment_team(
        &self,
        equipment_id: &str,
        team_name: &str,
    ) -> AppResult<Equipment> {
        let team = self
            .store
            .list_teams()
            .into_iter()
            .find(|t| t.name == team_name)
            .ok_or_else(|| AppError::NotFound(format!("Team \"{}\" not found", team_name)))?;

        let patch = UpdateEquipment {
            maintenance_team_id: Some(team.id.clone()),
            default_technician_id: Some(
                team.technicians
                    .first()
                    .map(|t| t.id.clone())
                    .unwrap_or_default(),
            ),
            ..Default::default()
        };
        self.store
            .update_equipment(equipment_id, &patch)
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", equipment_id)))
    }

    fn dispatch_input(&self, request: &MaintenanceRequest) -> DispatchInput {
        let equipment = self.store.get_equipment(&request.equipment_id);
        let current_team = equipment
            .as_ref()
            .and_then(|eq| self.store.get_team(&eq.maintenance_team_id));
        let current_technician = request
            .assigned_technician_id
            .as_deref()
            .and_then(|id| self.store.find_technician(id));

        DispatchInput {
            equipment_name: equipment
                .as_ref()
                .map(|eq| eq.name.clone())
                .unwrap_or_else(|| "Unknown Equipment".to_string()),
            equipment_category: equipment
                .as_ref()
                .map(|eq| eq.department.clone())
                .unwrap_or_else(|| "General".to_string()),
            subject: request.subject.clone(),
            description: request.description.clone(),
            assigned_team: current_team.map(|t| t.name).unwrap_or_default(),
            assigned_technician: current_technician.map(|t| t.name).unwrap_or_default(),
            technicians_workload: self.workload_snapshot(),
            teams: self
                .store
                .list_teams()
                .iter()
                .map(TeamSummary::from)
                .collect(),
        }
    }

    fn analyze_input(&self, request: &MaintenanceRequest) -> AnalyzeInput {
        let equipment = self.store.get_equipment(&request.equipment_id);
        let current_team = equipment
            .as_ref()
            .and_then(|eq| self.store.get_team(&eq.maintenance_team_id));

        AnalyzeInput {
            equipment_name: equipment
                .as_ref()
                .map(|eq| eq.name.clone())
                .unwrap_or_else(|| "Unknown Equipment".to_string()),
            equipment_category: equipment
                .as_ref()
                .map(|eq| eq.department.clone())
                .unwrap_or_else(|| "General".to_string()),
            subject: request.subject.clone(),
            description: request.description.clone(),
            assigned_team: current_team.map(|t| t.name).unwrap_or_default(),
        }
    }

    fn begin_fetch(&self, request_id: &str) -> u64 {
        let mut fetches = self
            .fetches
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let generation = fetches.entry(request_id.to_string()).or_insert(0);
        *generation += 1;
        *generation
    }

    fn is_current(&self, request_id: &str, generation: u64) -> bool {
        let fetches = self
            .fetches
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        fetches.get(request_id) == Some(&generation)
    }

    fn clear_fetch(&self, request_id: &str) {
        let mut fetches = self
            .fetches
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        fetches.remove(request_id);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use async_trait::async_trait;
    use chrono::NaiveDate;
    use mockall::predicate::always;
    use tokio::sync::{mpsc, oneshot};

    use super::*;
    use crate::models::enums::{
        EquipmentStatus, MaintenanceType, Priority, RequestStatus,
    };
    use crate::models::equipment::Equipment;
    use crate::models::request::MaintenanceRequest;
    use crate::models::team::{Team, Technician};
    use crate::services::advisory::{AdvisoryError, MockAdvisoryClient};
    use crate::store::testing::{fixed_date, test_store};

    fn technician(id: &str, name: &str, team_id: &str) -> Technician {
        Technician {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@gearguard.io", id),
            avatar: String::new(),
            team_id: team_id.to_string(),
        }
    }

    fn fixture_store() -> Store {
        let store = test_store();
        store.insert_team(Team {
            id: "team-1".to_string(),
            name: "Mechanics".to_string(),
            description: "Heavy machinery and mechanical systems".to_string(),
            color: "#3B82F6".to_string(),
            technicians: vec![
                technician("tech-1", "John Carter", "team-1"),
                technician("tech-2", "Sarah Miller", "team-1"),
            ],
        });
        store.insert_team(Team {
            id: "team-2".to_string(),
            name: "Electricians".to_string(),
            description: "Electrical systems and wiring".to_string(),
            color: "#F59E0B".to_string(),
            technicians: vec![technician("tech-3", "Mike Chen", "team-2")],
        });
        store.insert_equipment(Equipment {
            id: "eq-1".to_string(),
            name: "Industrial Robot Arm".to_string(),
            serial_number: "ROB-2024-042".to_string(),
            department: "Assembly".to_string(),
            owner: "Automation Team".to_string(),
            location: "Building A - Floor 1".to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2023, 6, 20).unwrap(),
            warranty_expiry: NaiveDate::from_ymd_opt(2025, 6, 20).unwrap(),
            maintenance_team_id: "team-1".to_string(),
            default_technician_id: "tech-1".to_string(),
            status: EquipmentStatus::Active,
            image: String::new(),
        });
        for (id, technician_id, status) in [
            ("req-1", Some("tech-1"), RequestStatus::New),
            ("req-2", Some("tech-1"), RequestStatus::InProgress),
            ("req-3", Some("tech-1"), RequestStatus::Repaired),
            ("req-4", Some("tech-1"), RequestStatus::Scrap),
            ("req-5", Some("tech-3"), RequestStatus::New),
            ("req-6", None, RequestStatus::New),
        ] {
            store.insert_request(MaintenanceRequest {
                id: id.to_string(),
                subject: "Motor overheating issue".to_string(),
                description: "Temperature warnings during operation".to_string(),
                equipment_id: "eq-1".to_string(),
                kind: MaintenanceType::Corrective,
                status,
                scheduled_date: NaiveDate::from_ymd_opt(2024, 12, 28).unwrap(),
                duration: 6.0,
                team_id: Some("team-1".to_string()),
                assigned_technician_id: technician_id.map(str::to_string),
                time_spent: 0.0,
                priority: Priority::High,
                created_at: fixed_date(),
            });
        }
        store
    }

    fn recommendation(team_id: &str, technician_id: &str) -> Recommendation {
        Recommendation {
            is_correct_team: false,
            recommended_team: "Electricians".to_string(),
            recommended_team_id: team_id.to_string(),
            recommended_technician: "Mike Chen".to_string(),
            recommended_technician_id: technician_id.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn workload_snapshot_counts_only_active_statuses() {
        let store = fixture_store();
        let mock = MockAdvisoryClient::new();
        let service = DispatchService::new(store, Arc::new(mock));

        let snapshot = service.workload_snapshot();
        let by_id: HashMap<_, _> = snapshot
            .iter()
            .map(|w| (w.id.as_str(), w.active_tasks))
            .collect();

        // tech-1 has one new + one in_progress; repaired and scrap excluded
        assert_eq!(by_id["tech-1"], 2);
        assert_eq!(by_id["tech-2"], 0);
        assert_eq!(by_id["tech-3"], 1);
        assert_eq!(snapshot.len(), 3);
        let mike = snapshot.iter().find(|w| w.id == "tech-3").unwrap();
        assert_eq!(mike.team_name, "Electricians");
    }

    #[tokio::test]
    async fn recommend_never_mutates_the_store() {
        let store = fixture_store();
        let mut mock = MockAdvisoryClient::new();
        mock.expect_recommend()
            .with(always())
            .returning(|_| Ok(recommendation("team-2", "tech-3")));
        let service = DispatchService::new(store.clone(), Arc::new(mock));

        let requests_before = store.list_requests();
        let equipment_before = store.list_equipment();

        let rec = service.recommend("req-1").await.unwrap();
        assert_eq!(rec.recommended_team_id, "team-2");

        let requests_after = store.list_requests();
        assert_eq!(requests_before.len(), requests_after.len());
        for (before, after) in requests_before.iter().zip(&requests_after) {
            assert_eq!(before.team_id, after.team_id);
            assert_eq!(
                before.assigned_technician_id,
                after.assigned_technician_id
            );
            assert_eq!(before.status, after.status);
        }
        assert_eq!(equipment_before.len(), store.list_equipment().len());
    }

    #[tokio::test]
    async fn recommend_unknown_request_is_not_found() {
        let service =
            DispatchService::new(fixture_store(), Arc::new(MockAdvisoryClient::new()));
        assert!(matches!(
            service.recommend("req-ghost").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn recommend_surfaces_gateway_errors() {
        let mut mock = MockAdvisoryClient::new();
        mock.expect_recommend()
            .returning(|_| Err(AdvisoryError::RateLimited));
        let service = DispatchService::new(fixture_store(), Arc::new(mock));

        assert!(matches!(
            service.recommend("req-1").await,
            Err(AppError::Advisory(AdvisoryError::RateLimited))
        ));
    }

    #[test]
    fn apply_sets_team_and_technician() {
        let store = fixture_store();
        let service =
            DispatchService::new(store.clone(), Arc::new(MockAdvisoryClient::new()));

        let updated = service.apply("req-1", "team-2", "tech-3").unwrap();

        assert_eq!(updated.team_id.as_deref(), Some("team-2"));
        assert_eq!(updated.assigned_technician_id.as_deref(), Some("tech-3"));
        // only assignment fields change
        assert_eq!(updated.status, RequestStatus::New);
        assert_eq!(updated.subject, "Motor overheating issue");
    }

    #[test]
    fn apply_with_unknown_team_fails_cleanly() {
        let store = fixture_store();
        let service =
            DispatchService::new(store.clone(), Arc::new(MockAdvisoryClient::new()));

        let result = service.apply("req-1", "team-ghost", "tech-x");

        assert!(matches!(result, Err(AppError::NotFound(_))));
        let request = store.get_request("req-1").unwrap();
        assert_eq!(request.team_id.as_deref(), Some("team-1"));
        assert_eq!(request.assigned_technician_id.as_deref(), Some("tech-1"));
    }

    #[test]
    fn apply_with_technician_outside_team_fails_cleanly() {
        let store = fixture_store();
        let service =
            DispatchService::new(store.clone(), Arc::new(MockAdvisoryClient::new()));

        // tech-1 belongs to team-1, not team-2
        let result = service.apply("req-1", "team-2", "tech-1");

        assert!(matches!(result, Err(AppError::NotFound(_))));
        let request = store.get_request("req-1").unwrap();
        assert_eq!(request.team_id.as_deref(), Some("team-1"));
    }

    #[test]
    fn reassign_equipment_team_resolves_by_name() {
        let store = fixture_store();
        let service =
            DispatchService::new(store.clone(), Arc::new(MockAdvisoryClient::new()));

        let updated = service
            .reassign_equipment_team("eq-1", "Electricians")
            .unwrap();

        assert_eq!(updated.maintenance_team_id, "team-2");
        assert_eq!(updated.default_technician_id, "tech-3");
    }

    #[test]
    fn reassign_equipment_team_with_unknown_name_fails_cleanly() {
        let store = fixture_store();
        let service =
            DispatchService::new(store.clone(), Arc::new(MockAdvisoryClient::new()));

        let result = service.reassign_equipment_team("eq-1", "Plumbers");

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(
            store.get_equipment("eq-1").unwrap().maintenance_team_id,
            "team-1"
        );
    }

    /// Advisory fake whose replies are released manually, for exercising
    /// overlapping fetches.
    struct QueuedAdvisory {
        started: mpsc::UnboundedSender<()>,
        pending: Mutex<VecDeque<oneshot::Receiver<Recommendation>>>,
    }

    #[async_trait]
    impl AdvisoryClient for QueuedAdvisory {
        async fn recommend(
            &self,
            _input: &DispatchInput,
        ) -> Result<Recommendation, AdvisoryError> {
            let rx = self
                .pending
                .lock()
                .unwrap()
                .pop_front()
                .expect("queued reply");
            self.started.send(()).expect("test listener alive");
            Ok(rx.await.expect("reply released"))
        }

        async fn analyze(
            &self,
            _input: &AnalyzeInput,
        ) -> Result<TeamAnalysis, AdvisoryError> {
            unreachable!("not used in these tests")
        }
    }

    #[tokio::test]
    async fn stale_fetch_is_discarded() {
        let store = fixture_store();
        let (started_tx, mut started_rx) = mpsc::unbounded_channel();
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        let advisory = QueuedAdvisory {
            started: started_tx,
            pending: Mutex::new(VecDeque::from([first_rx, second_rx])),
        };
        let service = DispatchService::new(store, Arc::new(advisory));

        let first = {
            let service = service.clone();
            tokio::spawn(async move { service.recommend("req-1").await })
        };
        started_rx.recv().await.expect("first fetch started");

        let second = {
            let service = service.clone();
            tokio::spawn(async move { service.recommend("req-1").await })
        };
        started_rx.recv().await.expect("second fetch started");

        first_tx
            .send(recommendation("team-1", "tech-1"))
            .expect("first receiver alive");
        second_tx
            .send(recommendation("team-2", "tech-3"))
            .expect("second receiver alive");

        let first_result = first.await.unwrap();
        let second_result = second.await.unwrap();

        assert!(matches!(first_result, Err(AppError::Superseded(_))));
        let live = second_result.unwrap();
        assert_eq!(live.recommended_team_id, "team-2");
    }

    #[tokio::test]
    async fn dismissed_fetch_is_discarded() {
        let store = fixture_store();
        let (started_tx, mut started_rx) = mpsc::unbounded_channel();
        let (reply_tx, reply_rx) = oneshot::channel();
        let advisory = QueuedAdvisory {
            started: started_tx,
            pending: Mutex::new(VecDeque::from([reply_rx])),
        };
        let service = DispatchService::new(store, Arc::new(advisory));

        let fetch = {
            let service = service.clone();
            tokio::spawn(async move { service.recommend("req-1").await })
        };
        started_rx.recv().await.expect("fetch started");

        service.dismiss("req-1");
        reply_tx
            .send(recommendation("team-2", "tech-3"))
            .expect("receiver alive");

        assert!(matches!(
            fetch.await.unwrap(),
            Err(AppError::Superseded(_))
        ));
    }

    #[tokio::test]
    async fn fetches_for_distinct_requests_do_not_interfere() {
        let store = fixture_store();
        let mut mock = MockAdvisoryClient::new();
        mock.expect_recommend()
            .returning(|_| Ok(recommendation("team-2", "tech-3")));
        let service = DispatchService::new(store, Arc::new(mock));

        let a = service.recommend("req-1").await;
        let b = service.recommend("req-5").await;
        assert!(a.is_ok());
        assert!(b.is_ok());
    }
}

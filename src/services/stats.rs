//! Dashboard statistics service

use crate::{api::stats::DashboardStats, store::Store};

#[derive(Clone)]
pub struct StatsService {
    store: Store,
}

impl StatsService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Headline counters for the dashboard. Open means not repaired and
    /// not scrapped; overdue means open with a scheduled date before
    /// today; critical means critical priority and not yet repaired.
    pub fn dashboard(&self) -> DashboardStats {
        let today = self.store.today();
        let requests = self.store.list_requests();
        let equipment = self.store.list_equipment();

        DashboardStats {
            total_equipment: equipment.len(),
            active_equipment: equipment
                .iter()
                .filter(|e| e.status == crate::models::EquipmentStatus::Active)
                .count(),
            open_requests: requests.iter().filter(|r| !r.status.is_closed()).count(),
            completed_requests: requests
                .iter()
                .filter(|r| r.status == crate::models::RequestStatus::Repaired)
                .count(),
            overdue_requests: requests
                .iter()
                .filter(|r| !r.status.is_closed() && r.scheduled_date < today)
                .count(),
            critical_requests: requests
                .iter()
                .filter(|r| {
                    r.priority == crate::models::Priority::Critical
                        && r.status != crate::models::RequestStatus::Repaired
                })
                .count(),
        }
    }
}

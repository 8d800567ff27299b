//! Demo dataset
//!
//! Seeds the store with the stock GearGuard roster so a fresh process has
//! something to show. State is per-process; the dataset is reloaded on
//! every restart.

use chrono::NaiveDate;

use crate::models::{
    enums::{EquipmentStatus, MaintenanceType, Priority, RequestStatus},
    equipment::Equipment,
    request::MaintenanceRequest,
    team::{Team, Technician},
};

use super::Store;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn technician(id: &str, name: &str, email: &str, team_id: &str) -> Technician {
    Technician {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        avatar: String::new(),
        team_id: team_id.to_string(),
    }
}

fn team(
    id: &str,
    name: &str,
    description: &str,
    color: &str,
    technicians: Vec<Technician>,
) -> Team {
    Team {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        color: color.to_string(),
        technicians,
    }
}

#[allow(clippy::too_many_arguments)]
fn equipment(
    id: &str,
    name: &str,
    serial_number: &str,
    department: &str,
    owner: &str,
    location: &str,
    purchase_date: NaiveDate,
    warranty_expiry: NaiveDate,
    maintenance_team_id: &str,
    default_technician_id: &str,
    status: EquipmentStatus,
) -> Equipment {
    Equipment {
        id: id.to_string(),
        name: name.to_string(),
        serial_number: serial_number.to_string(),
        department: department.to_string(),
        owner: owner.to_string(),
        location: location.to_string(),
        purchase_date,
        warranty_expiry,
        maintenance_team_id: maintenance_team_id.to_string(),
        default_technician_id: default_technician_id.to_string(),
        status,
        image: String::new(),
    }
}

#[allow(clippy::too_many_arguments)]
fn request(
    id: &str,
    subject: &str,
    description: &str,
    equipment_id: &str,
    kind: MaintenanceType,
    status: RequestStatus,
    scheduled_date: NaiveDate,
    duration: f64,
    team_id: &str,
    assigned_technician_id: Option<&str>,
    time_spent: f64,
    priority: Priority,
    created_at: NaiveDate,
) -> MaintenanceRequest {
    MaintenanceRequest {
        id: id.to_string(),
        subject: subject.to_string(),
        description: description.to_string(),
        equipment_id: equipment_id.to_string(),
        kind,
        status,
        scheduled_date,
        duration,
        team_id: Some(team_id.to_string()),
        assigned_technician_id: assigned_technician_id.map(str::to_string),
        time_spent,
        priority,
        created_at,
    }
}

impl Store {
    /// Load the demo roster: 6 teams, 11 technicians, 6 equipment records,
    /// 8 maintenance requests.
    pub fn load_demo(&self) {
        let teams = vec![
            team(
                "team-1",
                "Mechanics",
                "Heavy machinery and mechanical systems",
                "#3B82F6",
                vec![
                    technician("tech-1", "John Carter", "john@gearguard.io", "team-1"),
                    technician("tech-2", "Sarah Miller", "sarah@gearguard.io", "team-1"),
                ],
            ),
            team(
                "team-2",
                "Electricians",
                "Electrical systems and wiring",
                "#F59E0B",
                vec![
                    technician("tech-3", "Mike Chen", "mike@gearguard.io", "team-2"),
                    technician("tech-4", "Emma Wilson", "emma@gearguard.io", "team-2"),
                ],
            ),
            team(
                "team-3",
                "IT Support",
                "Computing and network equipment",
                "#10B981",
                vec![
                    technician("tech-5", "Alex Johnson", "alex@gearguard.io", "team-3"),
                    technician("tech-6", "Lisa Park", "lisa@gearguard.io", "team-3"),
                ],
            ),
            team(
                "team-4",
                "HVAC Specialists",
                "Heating, ventilation, and air conditioning",
                "#8B5CF6",
                vec![technician(
                    "tech-7",
                    "David Brown",
                    "david@gearguard.io",
                    "team-4",
                )],
            ),
            team(
                "team-5",
                "Housekeeping & Sanitation",
                "Cleaning equipment and waste management systems",
                "#EC4899",
                vec![
                    technician("tech-8", "Maria Garcia", "maria@gearguard.io", "team-5"),
                    technician("tech-9", "James Thompson", "james@gearguard.io", "team-5"),
                ],
            ),
            team(
                "team-6",
                "Security Systems",
                "CCTV, access control, and alarm systems",
                "#06B6D4",
                vec![
                    technician("tech-10", "Kevin Lee", "kevin@gearguard.io", "team-6"),
                    technician("tech-11", "Rachel Adams", "rachel@gearguard.io", "team-6"),
                ],
            ),
        ];

        let equipment_records = vec![
            equipment(
                "eq-1",
                "CNC Milling Machine",
                "CNC-2024-001",
                "Manufacturing",
                "Production Team",
                "Building A - Floor 2",
                date(2023, 3, 15),
                date(2026, 3, 15),
                "team-1",
                "tech-1",
                EquipmentStatus::Active,
            ),
            equipment(
                "eq-2",
                "Industrial Robot Arm",
                "ROB-2024-042",
                "Assembly",
                "Automation Team",
                "Building A - Floor 1",
                date(2023, 6, 20),
                date(2025, 6, 20),
                "team-2",
                "tech-3",
                EquipmentStatus::Active,
            ),
            equipment(
                "eq-3",
                "Server Rack Unit #12",
                "SRV-2022-012",
                "IT",
                "Infrastructure Team",
                "Data Center - Row 3",
                date(2022, 1, 10),
                date(2025, 1, 10),
                "team-3",
                "tech-5",
                EquipmentStatus::Maintenance,
            ),
            equipment(
                "eq-4",
                "Central HVAC Unit",
                "HVAC-2021-001",
                "Facilities",
                "Building Management",
                "Rooftop - Building B",
                date(2021, 8, 5),
                date(2024, 8, 5),
                "team-4",
                "tech-7",
                EquipmentStatus::Active,
            ),
            equipment(
                "eq-5",
                "Hydraulic Press #3",
                "HYD-2020-003",
                "Manufacturing",
                "Production Team",
                "Building C - Ground Floor",
                date(2020, 11, 12),
                date(2023, 11, 12),
                "team-1",
                "tech-2",
                EquipmentStatus::Active,
            ),
            equipment(
                "eq-6",
                "Laser Cutter XL",
                "LAS-2024-007",
                "Manufacturing",
                "Fabrication Team",
                "Building A - Floor 3",
                date(2024, 2, 1),
                date(2027, 2, 1),
                "team-2",
                "tech-4",
                EquipmentStatus::Active,
            ),
        ];

        let requests = vec![
            request(
                "req-1",
                "Spindle alignment check",
                "Regular spindle alignment verification and adjustment if needed",
                "eq-1",
                MaintenanceType::Preventive,
                RequestStatus::New,
                date(2025, 1, 5),
                4.0,
                "team-1",
                None,
                0.0,
                Priority::Medium,
                date(2024, 12, 20),
            ),
            request(
                "req-2",
                "Motor overheating issue",
                "Robot arm motor showing temperature warnings during operation",
                "eq-2",
                MaintenanceType::Corrective,
                RequestStatus::InProgress,
                date(2024, 12, 28),
                6.0,
                "team-2",
                Some("tech-3"),
                2.0,
                Priority::High,
                date(2024, 12, 25),
            ),
            request(
                "req-3",
                "Server cooling fan replacement",
                "Multiple cooling fans showing degraded performance",
                "eq-3",
                MaintenanceType::Corrective,
                RequestStatus::InProgress,
                date(2024, 12, 27),
                2.0,
                "team-3",
                Some("tech-5"),
                1.0,
                Priority::Critical,
                date(2024, 12, 26),
            ),
            request(
                "req-4",
                "Quarterly filter replacement",
                "Replace all air filters as part of quarterly maintenance",
                "eq-4",
                MaintenanceType::Preventive,
                RequestStatus::Repaired,
                date(2024, 12, 15),
                3.0,
                "team-4",
                Some("tech-7"),
                2.5,
                Priority::Low,
                date(2024, 12, 1),
            ),
            request(
                "req-5",
                "Hydraulic fluid leak",
                "Minor leak detected in main hydraulic line",
                "eq-5",
                MaintenanceType::Corrective,
                RequestStatus::New,
                date(2024, 12, 30),
                5.0,
                "team-1",
                Some("tech-2"),
                0.0,
                Priority::High,
                date(2024, 12, 27),
            ),
            request(
                "req-6",
                "Laser calibration",
                "Annual laser calibration and power output verification",
                "eq-6",
                MaintenanceType::Preventive,
                RequestStatus::New,
                date(2025, 1, 10),
                4.0,
                "team-2",
                None,
                0.0,
                Priority::Medium,
                date(2024, 12, 20),
            ),
            request(
                "req-7",
                "Belt tensioner adjustment",
                "CNC belt showing signs of slack, needs tensioning",
                "eq-1",
                MaintenanceType::Corrective,
                RequestStatus::Repaired,
                date(2024, 12, 22),
                2.0,
                "team-1",
                Some("tech-1"),
                1.5,
                Priority::Medium,
                date(2024, 12, 21),
            ),
            request(
                "req-8",
                "Wiring inspection",
                "Complete wiring inspection after power surge",
                "eq-2",
                MaintenanceType::Corrective,
                RequestStatus::Scrap,
                date(2024, 12, 10),
                8.0,
                "team-2",
                Some("tech-4"),
                8.0,
                Priority::Critical,
                date(2024, 12, 8),
            ),
        ];

        let mut collections = self.write();
        for record in teams {
            collections.teams.insert(record.id.clone(), record);
        }
        for record in equipment_records {
            collections.equipment.insert(record.id.clone(), record);
        }
        for record in requests {
            collections.requests.insert(record.id.clone(), record);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::store::testing::test_store;

    #[test]
    fn demo_dataset_is_consistent() {
        let store = test_store();
        store.load_demo();

        assert_eq!(store.list_teams().len(), 6);
        assert_eq!(store.list_equipment().len(), 6);
        assert_eq!(store.list_requests().len(), 8);

        // every weak reference resolves
        for eq in store.list_equipment() {
            assert!(store.get_team(&eq.maintenance_team_id).is_some());
            assert!(store.find_technician(&eq.default_technician_id).is_some());
        }
        for req in store.list_requests() {
            assert!(store.get_equipment(&req.equipment_id).is_some());
            if let Some(team_id) = &req.team_id {
                assert!(store.get_team(team_id).is_some());
            }
            if let Some(tech_id) = &req.assigned_technician_id {
                assert!(store.find_technician(tech_id).is_some());
            }
        }
    }
}

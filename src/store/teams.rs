//! Team domain methods on Store

use crate::models::team::{CreateTeam, CreateTechnician, Team, Technician};

use super::Store;

/// Placeholder avatar derived from the technician's name
fn default_avatar(name: &str) -> String {
    let seed: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    format!("https://api.dicebear.com/7.x/initials/svg?seed={}", seed)
}

impl Store {
    /// List all teams in insertion order
    pub fn list_teams(&self) -> Vec<Team> {
        self.read().teams.values().cloned().collect()
    }

    /// Get a team by id
    pub fn get_team(&self, id: &str) -> Option<Team> {
        self.read().teams.get(id).cloned()
    }

    /// Find a technician by id across all teams
    pub fn find_technician(&self, id: &str) -> Option<Technician> {
        self.read()
            .teams
            .values()
            .flat_map(|team| team.technicians.iter())
            .find(|tech| tech.id == id)
            .cloned()
    }

    /// Insert a new team. Each incoming technician receives a fresh id and
    /// a back-reference to the new team.
    pub fn add_team(&self, data: CreateTeam) -> Team {
        let team_id = self.next_id("team");
        let technicians = data
            .technicians
            .into_iter()
            .map(|tech| self.build_technician(tech, &team_id))
            .collect();
        let record = Team {
            id: team_id,
            name: data.name,
            description: data.description,
            color: data.color,
            technicians,
        };
        self.write().teams.insert(record.id.clone(), record.clone());
        record
    }

    /// Append a technician to an existing team. Unknown team id is a
    /// no-op (`None`).
    pub fn add_technician_to_team(
        &self,
        team_id: &str,
        data: CreateTechnician,
    ) -> Option<Technician> {
        let technician = self.build_technician(data, team_id);
        let mut collections = self.write();
        let team = collections.teams.get_mut(team_id)?;
        team.technicians.push(technician.clone());
        Some(technician)
    }

    fn build_technician(&self, data: CreateTechnician, team_id: &str) -> Technician {
        Technician {
            id: self.next_id("tech"),
            avatar: data
                .avatar
                .unwrap_or_else(|| default_avatar(&data.name)),
            name: data.name,
            email: data.email.unwrap_or_default(),
            team_id: team_id.to_string(),
        }
    }

    #[cfg(test)]
    pub(crate) fn insert_team(&self, record: Team) {
        self.write().teams.insert(record.id.clone(), record);
    }
}

#[cfg(test)]
mod tests {
    use crate::models::team::{CreateTeam, CreateTechnician};
    use crate::store::testing::test_store;

    fn technician(name: &str, email: &str) -> CreateTechnician {
        CreateTechnician {
            name: name.to_string(),
            email: Some(email.to_string()),
            avatar: None,
        }
    }

    #[test]
    fn add_team_assigns_scoped_ids_and_back_references() {
        let store = test_store();

        let team = store.add_team(CreateTeam {
            name: "Mechanics".to_string(),
            description: "Heavy machinery and mechanical systems".to_string(),
            color: "#3B82F6".to_string(),
            technicians: vec![
                technician("John Carter", "john@gearguard.io"),
                technician("Sarah Miller", "sarah@gearguard.io"),
            ],
        });

        assert_eq!(team.technicians.len(), 2);
        for tech in &team.technicians {
            assert_eq!(tech.team_id, team.id);
            assert!(tech.id.starts_with("tech-"));
        }
        let ids: Vec<_> = team.technicians.iter().map(|t| &t.id).collect();
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn add_technician_defaults_avatar_and_email() {
        let store = test_store();
        let team = store.add_team(CreateTeam {
            name: "Electricians".to_string(),
            description: String::new(),
            color: String::new(),
            technicians: vec![],
        });

        let tech = store
            .add_technician_to_team(
                &team.id,
                CreateTechnician {
                    name: "Mike Chen".to_string(),
                    email: None,
                    avatar: None,
                },
            )
            .unwrap();

        assert_eq!(tech.email, "");
        assert!(tech.avatar.contains("dicebear.com"));
        assert!(tech.avatar.contains("Mike-Chen"));
        assert_eq!(store.get_team(&team.id).unwrap().technicians.len(), 1);
    }

    #[test]
    fn add_technician_to_unknown_team_is_a_noop() {
        let store = test_store();
        store.add_team(CreateTeam {
            name: "IT Support".to_string(),
            description: String::new(),
            color: String::new(),
            technicians: vec![],
        });

        let result = store.add_technician_to_team(
            "team-ghost",
            CreateTechnician {
                name: "Alex Johnson".to_string(),
                email: None,
                avatar: None,
            },
        );

        assert!(result.is_none());
        let teams = store.list_teams();
        assert_eq!(teams.len(), 1);
        assert!(teams[0].technicians.is_empty());
    }

    #[test]
    fn find_technician_scans_all_teams() {
        let store = test_store();
        store.add_team(CreateTeam {
            name: "Mechanics".to_string(),
            description: String::new(),
            color: String::new(),
            technicians: vec![technician("John Carter", "john@gearguard.io")],
        });
        let second = store.add_team(CreateTeam {
            name: "HVAC Specialists".to_string(),
            description: String::new(),
            color: String::new(),
            technicians: vec![technician("David Brown", "david@gearguard.io")],
        });

        let found = store
            .find_technician(&second.technicians[0].id)
            .expect("technician present");
        assert_eq!(found.name, "David Brown");
        assert!(store.find_technician("tech-ghost").is_none());
    }
}

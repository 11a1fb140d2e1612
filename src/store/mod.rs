//! Team store: persistence layer for team documents.
//!
//! Each team is one YAML document keyed by its join token:
//!
//! ```text
//! <root>/
//!   └── teams/
//!       └── <TOKEN>.yaml
//! ```
//!
//! All I/O goes through the `FileSystem` port, so the store works
//! unchanged against the in-memory adapter in tests. Saving rewrites
//! the whole document at once; that whole-file replacement is the
//! transactional boundary for team updates.

use std::path::{Path, PathBuf};

use crate::context::ServiceContext;
use crate::model::Team;

/// Persistence layer for team documents.
pub struct TeamStore<'a> {
    ctx: &'a ServiceContext,
    root: PathBuf,
}

impl<'a> TeamStore<'a> {
    /// Creates a new store rooted at the given path.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, root: &Path) -> Self {
        Self { ctx, root: root.to_path_buf() }
    }

    /// Saves a team as YAML in `<root>/teams/<TOKEN>.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    pub fn save_team(&self, team: &Team) -> Result<(), String> {
        let yaml = serde_yaml::to_string(team)
            .map_err(|e| format!("Failed to serialize team {}: {e}", team.token))?;
        let path = self.team_path(&team.token);
        self.ctx
            .fs
            .write(&path, &yaml)
            .map_err(|e| format!("Failed to write team {}: {e}", team.token))
    }

    /// Loads a team by join token.
    ///
    /// # Errors
    ///
    /// Returns an error if no team with that token exists or the
    /// document cannot be parsed.
    pub fn load_team(&self, token: &str) -> Result<Team, String> {
        let path = self.team_path(token);
        if !self.ctx.fs.exists(&path) {
            return Err(format!("Team not found for token {token}"));
        }
        let contents = self
            .ctx
            .fs
            .read_to_string(&path)
            .map_err(|e| format!("Failed to read team {token}: {e}"))?;
        serde_yaml::from_str(&contents).map_err(|e| format!("Failed to parse team {token}: {e}"))
    }

    /// Returns `true` if a team with the given token is stored.
    #[must_use]
    pub fn team_exists(&self, token: &str) -> bool {
        self.ctx.fs.exists(&self.team_path(token))
    }

    /// Lists the join tokens of every stored team.
    ///
    /// # Errors
    ///
    /// Returns an error if the teams directory cannot be listed.
    pub fn list_tokens(&self) -> Result<Vec<String>, String> {
        let teams_dir = self.root.join("teams");
        if !self.ctx.fs.exists(&teams_dir) {
            return Ok(Vec::new());
        }
        let entries = self
            .ctx
            .fs
            .list_dir(&teams_dir)
            .map_err(|e| format!("Failed to list teams directory: {e}"))?;
        Ok(entries
            .into_iter()
            .filter_map(|name| name.strip_suffix(".yaml").map(String::from))
            .collect())
    }

    fn team_path(&self, token: &str) -> PathBuf {
        self.root.join("teams").join(format!("{token}.yaml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Participant;

    fn sample_team(token: &str) -> Team {
        Team {
            id: format!("team-{token}"),
            name: format!("Team {token}"),
            company_name: None,
            event_date: "2024-12-24T00:00:00Z".parse().unwrap(),
            token: token.to_string(),
            budget: None,
            currency: "MYR".into(),
            is_locked: false,
            draw_complete: false,
            created_at: "2024-11-01T09:00:00Z".parse().unwrap(),
            participants: vec![Participant {
                id: "p-0001".into(),
                display_name: "Alice".into(),
                email: None,
                is_organizer: true,
                wishlist: Vec::new(),
            }],
            exclusions: Vec::new(),
            assignments: Vec::new(),
        }
    }

    #[test]
    fn save_and_load_round_trips() {
        let ctx = ServiceContext::deterministic(0);
        let store = TeamStore::new(&ctx, Path::new("/store"));

        let team = sample_team("AAAA2222BB");
        store.save_team(&team).unwrap();
        let loaded = store.load_team("AAAA2222BB").unwrap();

        assert_eq!(team, loaded);
    }

    #[test]
    fn load_unknown_token_is_an_error() {
        let ctx = ServiceContext::deterministic(0);
        let store = TeamStore::new(&ctx, Path::new("/store"));

        let result = store.load_team("NOPE");
        assert!(result.unwrap_err().contains("Team not found"));
    }

    #[test]
    fn team_exists_tracks_saves() {
        let ctx = ServiceContext::deterministic(0);
        let store = TeamStore::new(&ctx, Path::new("/store"));

        assert!(!store.team_exists("AAAA2222BB"));
        store.save_team(&sample_team("AAAA2222BB")).unwrap();
        assert!(store.team_exists("AAAA2222BB"));
    }

    #[test]
    fn list_tokens_returns_all_saved() {
        let ctx = ServiceContext::deterministic(0);
        let store = TeamStore::new(&ctx, Path::new("/store"));

        store.save_team(&sample_team("AAAA")).unwrap();
        store.save_team(&sample_team("BBBB")).unwrap();

        let mut tokens = store.list_tokens().unwrap();
        tokens.sort();
        assert_eq!(tokens, vec!["AAAA", "BBBB"]);
    }

    #[test]
    fn list_tokens_empty_store() {
        let ctx = ServiceContext::deterministic(0);
        let store = TeamStore::new(&ctx, Path::new("/store"));

        assert!(store.list_tokens().unwrap().is_empty());
    }
}

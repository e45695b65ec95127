//! Build state owner.
//!
//! [`BuildStore`] holds the current [`BuildState`] and its derived
//! [`BuildStats`]. Actions are applied one at a time through the pure
//! [`forge_core::transition`]; the stats snapshot is recomputed only when the
//! resulting state differs from the previous one.

use std::sync::Arc;

use forge_core::{BuildAction, BuildState, BuildStats, compute_stats, render_report, transition};

use crate::export::BuildExport;
use crate::oracle::OracleManager;
use crate::repository::{SavedBuild, SavedBuildRepository};

pub struct BuildStore {
    oracles: OracleManager,
    state: Arc<BuildState>,
    stats: Arc<BuildStats>,
    computations: u64,
}

impl BuildStore {
    pub fn new(oracles: OracleManager) -> Self {
        Self::with_state(oracles, BuildState::new())
    }

    pub fn with_state(oracles: OracleManager, state: BuildState) -> Self {
        let stats = compute_stats(&state, &oracles.as_build_env());
        Self {
            oracles,
            state: Arc::new(state),
            stats: Arc::new(stats),
            computations: 1,
        }
    }

    pub fn state(&self) -> Arc<BuildState> {
        Arc::clone(&self.state)
    }

    pub fn stats(&self) -> Arc<BuildStats> {
        Arc::clone(&self.stats)
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    /// Number of full stat recomputations so far.
    pub fn computations(&self) -> u64 {
        self.computations
    }

    /// Applies one action; returns whether the state changed.
    pub fn dispatch(&mut self, action: BuildAction) -> bool {
        let next = transition(&self.state, &action);
        if next == *self.state {
            tracing::debug!(action = action.name(), "action left the build unchanged");
            return false;
        }

        self.stats = Arc::new(compute_stats(&next, &self.oracles.as_build_env()));
        self.state = Arc::new(next);
        self.computations += 1;

        tracing::debug!(
            action = action.name(),
            true_raw = self.stats.true_raw,
            efr = self.stats.efr,
            "recomputed build stats"
        );
        true
    }

    /// Applies actions in order; returns how many changed the state.
    pub fn dispatch_all(&mut self, actions: impl IntoIterator<Item = BuildAction>) -> usize {
        actions
            .into_iter()
            .map(|action| self.dispatch(action))
            .filter(|changed| *changed)
            .count()
    }

    pub fn reset(&mut self) -> bool {
        self.dispatch(BuildAction::Reset)
    }

    /// Markdown report of the current build.
    pub fn report(&self) -> String {
        render_report(&self.state, &self.stats, &self.oracles.as_build_env())
    }

    pub fn export(&self) -> BuildExport {
        BuildExport::new(&self.state, &self.stats, &self.oracles.as_build_env())
    }

    /// Saves the current build. Failures are logged and yield `None`.
    pub fn save_to(&self, repository: &dyn SavedBuildRepository, name: &str) -> Option<SavedBuild> {
        match repository.save(name, &self.state) {
            Ok(Some(saved)) => {
                tracing::debug!(id = %saved.id, name = %saved.name, "saved build");
                Some(saved)
            }
            Ok(None) => {
                tracing::warn!("saved build limit reached; build not saved");
                None
            }
            Err(error) => {
                tracing::warn!(%error, "failed to save build");
                None
            }
        }
    }

    /// Replaces the current build with a saved one.
    ///
    /// Unknown ids and repository failures leave the current build untouched.
    pub fn load_from(&mut self, repository: &dyn SavedBuildRepository, id: &str) -> bool {
        match repository.load(id) {
            Ok(Some(state)) => {
                self.dispatch(BuildAction::Load {
                    state: Box::new(state),
                });
                true
            }
            Ok(None) => {
                tracing::warn!(id, "saved build not found");
                false
            }
            Err(error) => {
                tracing::warn!(%error, id, "failed to load build");
                false
            }
        }
    }
}

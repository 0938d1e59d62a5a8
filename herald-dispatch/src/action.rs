//! The action trait and registry surface exposed to the rule engine.

use std::{fmt, sync::Arc};

use async_trait::async_trait;

use crate::{
    error::ActionError, outcome::DispatchReport, params::ActionParameters, schema::ParameterSchema,
};

/// A rule-engine action.
///
/// Collaborators (transport, resolver, notifier, site configuration) are
/// wired in at construction time; `execute` owns no state across
/// invocations.
#[async_trait]
pub trait Action: Send + Sync {
    /// Stable machine-readable action id (e.g. `herald.send_mail`).
    fn id(&self) -> &'static str;

    /// Human-readable summary line.
    fn label(&self) -> &'static str;

    /// The parameters this action accepts.
    fn schema(&self) -> ParameterSchema;

    /// Run the action against a validated parameter bundle.
    ///
    /// # Errors
    /// Returns [`ActionError`] for bad input or a resolution backend
    /// failure; transport-level failures are folded into the report.
    async fn execute(&self, params: &ActionParameters) -> Result<DispatchReport, ActionError>;
}

/// Registry of actions keyed by id.
///
/// Explicit-wiring replacement for annotation-based plugin discovery: the
/// host constructs each action with its collaborators and registers it here
/// for the rule engine to look up.
#[derive(Clone, Default)]
pub struct ActionRegistry {
    actions: ahash::AHashMap<&'static str, Arc<dyn Action>>,
}

impl ActionRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an action under its own id, replacing any previous
    /// registration with the same id.
    pub fn register(&mut self, action: Arc<dyn Action>) {
        self.actions.insert(action.id(), action);
    }

    /// Look up an action by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Arc<dyn Action>> {
        self.actions.get(id)
    }

    /// The registered action ids, sorted.
    #[must_use]
    pub fn ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.actions.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Number of registered actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether no actions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("ids", &self.ids())
            .finish()
    }
}

//! Document store with typed updates and change notification
//!
//! Updates never mutate a published snapshot. [`apply`] is a pure reducer
//! from one state to the next; [`DocumentStore`] keeps the latest snapshot,
//! stamps it with a version and hands it to every subscriber after each
//! dispatch.

use crate::document_state::{
    DocumentState, EnvironmentVariable, Feature, NEW_FEATURE_EMOJI,
};
use std::sync::Arc;

/// A single wizard edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    SetProjectName(String),
    SetDescription(String),
    SetLogo(String),
    /// Select the badge if absent, deselect it if present
    ToggleBadge(String),
    /// Append an empty feature
    AddFeature,
    UpdateFeatureText { index: usize, text: String },
    UpdateFeatureEmoji { index: usize, emoji: String },
    RemoveFeature(usize),
    SetInstallation(String),
    SetEnvironmentVariables(Vec<EnvironmentVariable>),
    AddEnvironmentVariable(EnvironmentVariable),
    RemoveEnvironmentVariable(usize),
    SetProjectStructure(String),
    SetAuthorName(String),
    SetAuthorLink(String),
    /// Return to the fresh-session defaults
    Reset,
}

/// Apply an update, producing the next state
///
/// Indices outside the current list leave the state unchanged.
pub fn apply(state: &DocumentState, update: Update) -> DocumentState {
    let mut next = state.clone();

    match update {
        Update::SetProjectName(name) => next.project_name = name,
        Update::SetDescription(description) => next.project_description = description,
        Update::SetLogo(logo) => next.project_logo = logo,
        Update::ToggleBadge(id) => {
            if let Some(position) = next.badges.iter().position(|b| *b == id) {
                next.badges.remove(position);
            } else {
                next.badges.push(id);
            }
        }
        Update::AddFeature => next.features.push(Feature::new(NEW_FEATURE_EMOJI, "")),
        Update::UpdateFeatureText { index, text } => {
            if let Some(feature) = next.features.get_mut(index) {
                feature.text = text;
            }
        }
        Update::UpdateFeatureEmoji { index, emoji } => {
            if let Some(feature) = next.features.get_mut(index) {
                feature.emoji = emoji;
            }
        }
        Update::RemoveFeature(index) => {
            if index < next.features.len() {
                next.features.remove(index);
            }
        }
        Update::SetInstallation(installation) => next.installation = installation,
        Update::SetEnvironmentVariables(variables) => next.environment_variables = variables,
        Update::AddEnvironmentVariable(variable) => next.environment_variables.push(variable),
        Update::RemoveEnvironmentVariable(index) => {
            if index < next.environment_variables.len() {
                next.environment_variables.remove(index);
            }
        }
        Update::SetProjectStructure(structure) => next.project_structure = structure,
        Update::SetAuthorName(name) => next.author.name = name,
        Update::SetAuthorLink(link) => next.author.link = link,
        Update::Reset => next = DocumentState::default(),
    }

    next
}

/// An immutable, versioned view of the document
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Incremented once per dispatched update; a new store starts at 0
    pub version: u64,
    pub state: Arc<DocumentState>,
}

/// Handle returned by [`DocumentStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Snapshot)>;

/// Owner of the current document snapshot
pub struct DocumentStore {
    current: Snapshot,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl DocumentStore {
    /// Create a store holding a fresh session
    pub fn new() -> Self {
        Self::with_state(DocumentState::default())
    }

    /// Create a store seeded with an existing state (e.g. a loaded snapshot)
    pub fn with_state(state: DocumentState) -> Self {
        Self {
            current: Snapshot {
                version: 0,
                state: Arc::new(state),
            },
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current snapshot; cheap to clone and safe to hold across updates
    pub fn snapshot(&self) -> Snapshot {
        self.current.clone()
    }

    pub fn version(&self) -> u64 {
        self.current.version
    }

    /// Apply an update and notify subscribers with the new snapshot
    pub fn dispatch(&mut self, update: Update) -> Snapshot {
        log::debug!("Dispatching {:?}", update);
        let next = apply(&self.current.state, update);
        self.current = Snapshot {
            version: self.current.version + 1,
            state: Arc::new(next),
        };

        for (_, listener) in &mut self.listeners {
            listener(&self.current);
        }

        self.current.clone()
    }

    /// Register a callback fired after every dispatch
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Snapshot) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a callback
    ///
    /// # Returns
    /// * `true` - The subscription existed and was removed
    /// * `false` - Unknown or already removed subscription
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentStore")
            .field("current", &self.current)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

//! Ledger store: owns the state, applies actions, persists every change

use crate::domain::{hydrate, reduce, Action, AppState, RegistryResult, StorageError, STATE_KEY};
use crate::ports::StateStorage;
use parking_lot::RwLock;
use tracing::debug;

/// Single owner of the ledger state.
///
/// Every change is reduced into a candidate state and persisted as a whole
/// under [`STATE_KEY`]; the in-memory state only advances once the write
/// succeeded.
pub struct LedgerStore<S: StateStorage> {
    state: RwLock<AppState>,
    storage: S,
}

impl<S: StateStorage> LedgerStore<S> {
    /// Load and repair the persisted state, or start fresh.
    pub fn open(storage: S) -> RegistryResult<Self> {
        let saved = storage.get(STATE_KEY)?;
        let state = hydrate(saved.as_deref());
        Ok(Self {
            state: RwLock::new(state),
            storage,
        })
    }

    /// Snapshot of the current state.
    pub fn snapshot(&self) -> AppState {
        self.state.read().clone()
    }

    /// Read the current state without cloning it.
    pub fn read<T>(&self, f: impl FnOnce(&AppState) -> T) -> T {
        f(&self.state.read())
    }

    /// Apply one action.
    pub fn dispatch(&self, action: Action) -> RegistryResult<AppState> {
        self.update(|_| Ok((vec![action], ()))).map(|(state, ())| state)
    }

    /// Derive actions from the current state and apply them atomically.
    ///
    /// `plan` runs under the write lock, so the state it validates against
    /// is the state its actions are applied to. When `plan` fails nothing
    /// is applied.
    pub fn update<T>(
        &self,
        plan: impl FnOnce(&AppState) -> RegistryResult<(Vec<Action>, T)>,
    ) -> RegistryResult<(AppState, T)> {
        let mut guard = self.state.write();
        let (actions, value) = plan(&guard)?;

        let mut next = guard.clone();
        for action in actions {
            debug!(action = action.name(), "Dispatching");
            next = reduce(next, action);
        }

        let json = serde_json::to_string(&next).map_err(StorageError::from)?;
        self.storage.set(STATE_KEY, &json)?;

        *guard = next.clone();
        Ok((next, value))
    }
}

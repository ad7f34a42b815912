//! The goal store seam.

use std::cell::RefCell;

use crate::error::Result;

use super::state::AppState;

/// Loads and saves the whole application document.
///
/// The streak engine never sees a store; the application loads a goal,
/// runs the engine, and saves the result.
pub trait GoalStore {
    fn load(&self) -> Result<AppState>;
    fn save(&self, state: &AppState) -> Result<()>;
}

/// In-process store, mostly for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RefCell<AppState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            state: RefCell::new(state),
        }
    }

    pub fn snapshot(&self) -> AppState {
        self.state.borrow().clone()
    }
}

impl GoalStore for MemoryStore {
    fn load(&self) -> Result<AppState> {
        Ok(self.state.borrow().clone())
    }

    fn save(&self, state: &AppState) -> Result<()> {
        *self.state.borrow_mut() = state.clone();
        Ok(())
    }
}

impl<S: GoalStore + ?Sized> GoalStore for &S {
    fn load(&self) -> Result<AppState> {
        (**self).load()
    }

    fn save(&self, state: &AppState) -> Result<()> {
        (**self).save(state)
    }
}

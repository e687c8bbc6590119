use std::path::PathBuf;

use log::{info, warn};
use thiserror::Error;

use crate::core::{AccountNumber, AccountStore};

#[derive(Debug, Error)]
pub enum BackendError {
    /// Nothing has been saved at this location yet.
    #[error("no data file at {0}")]
    Missing(PathBuf),
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error
    },
    #[error("malformed data file: {0}")]
    Parse(#[from] serde_json::Error),
    /// The file was written by a newer schema than this build understands.
    #[error("data file has schema version {found}, only {supported} is supported")]
    UnsupportedVersion {
        found: u32,
        supported: u32
    },
    #[error("account number {0} appears more than once")]
    DuplicateAccount(AccountNumber)
}

pub type Result<T> = std::result::Result<T, BackendError>;

/// What came out of reading the persisted accounts at startup.
#[derive(Debug)]
pub enum LoadOutcome {
    Restored(AccountStore),
    Missing,
    Unreadable(BackendError)
}

impl LoadOutcome {
    pub fn into_store(self) -> AccountStore {
        match self {
            LoadOutcome::Restored(store) => store,
            _ => AccountStore::new()
        }
    }
}

pub trait StoreBackend {
    fn read(&self) -> Result<AccountStore>;
    fn save(&self, store: &AccountStore) -> Result<()>;

    /// Reads the saved store, falling back to an empty one when there is
    /// nothing usable on disk.
    fn load(&self) -> LoadOutcome {
        match self.read() {
            Ok(store) => {
                info!("restored {} accounts", store.len());
                LoadOutcome::Restored(store)
            },
            Err(BackendError::Missing(path)) => {
                info!("no saved accounts at {}", path.display());
                LoadOutcome::Missing
            },
            Err(err) => {
                warn!("ignoring unreadable saved accounts: {}", err);
                LoadOutcome::Unreadable(err)
            }
        }
    }
}

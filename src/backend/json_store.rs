use std::{fs, io, path::{Path, PathBuf}};

use chrono::{DateTime, Utc};
use log::info;
use serde::{Serialize, Deserialize};

use crate::backend::interface::{BackendError, Result, StoreBackend};
use crate::core::{Account, AccountNumber, AccountStore, Amount};

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct AccountRecord {
    holder: String,
    number: AccountNumber,
    balance: Amount
}

#[derive(Deserialize)]
struct SchemaHeader {
    version: u32
}

#[derive(Serialize, Deserialize)]
struct StoreFile {
    version: u32,
    saved_at: DateTime<Utc>,
    accounts: Vec<AccountRecord>
}

/// Serializes the whole store, records ordered by account number.
pub fn encode(store: &AccountStore, saved_at: DateTime<Utc>) -> Result<String> {
    let accounts = store.list_all().into_iter()
        .map(|account| AccountRecord {
            holder: account.holder.clone(),
            number: account.number,
            balance: account.balance
        })
        .collect();

    let file = StoreFile { version: SCHEMA_VERSION, saved_at, accounts };
    return Ok(serde_json::to_string_pretty(&file)?);
}

pub fn decode(content: &str) -> Result<AccountStore> {
    let header: SchemaHeader = serde_json::from_str(content)?;
    if header.version > SCHEMA_VERSION {
        return Err(BackendError::UnsupportedVersion { found: header.version, supported: SCHEMA_VERSION });
    }

    let file: StoreFile = serde_json::from_str(content)?;
    let mut store = AccountStore::new();
    for record in file.accounts {
        let number = record.number;
        if !store.insert(Account::new(&record.holder, number, record.balance)) {
            return Err(BackendError::DuplicateAccount(number));
        }
    }
    return Ok(store);
}

pub struct JsonStore {
    path: PathBuf
}

impl JsonStore {
    pub fn new(path: impl AsRef<Path>) -> JsonStore {
        JsonStore { path: path.as_ref().to_path_buf() }
    }
}

impl StoreBackend for JsonStore {
    fn read(&self) -> Result<AccountStore> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound =>
                return Err(BackendError::Missing(self.path.clone())),
            Err(source) =>
                return Err(BackendError::Io { path: self.path.clone(), source })
        };
        decode(&content)
    }

    fn save(&self, store: &AccountStore) -> Result<()> {
        let content = encode(store, Utc::now())?;
        fs::write(&self.path, content)
            .map_err(|source| BackendError::Io { path: self.path.clone(), source })?;
        info!("saved {} accounts to {}", store.len(), self.path.display());
        return Ok(());
    }
}

//! Session Identity Mirror
//!
//! Copies the signed-in user's id and role into local key-value storage for the
//! push-notification integration. Writes happen only when the stored value differs.

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

use crate::session::SessionIdentity;

/// Key-value storage errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Storage is not available (private browsing, no window...)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to write {key}: {error}")]
    Write { key: String, error: String },
}

/// Persistent string key-value storage (browser `localStorage` or in-memory)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Storage keys used by the notification integration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityKeys {
    pub user_id: String,
    pub user_role: String,
}

impl Default for IdentityKeys {
    fn default() -> Self {
        Self {
            user_id: "onesignalUserId".to_string(),
            user_role: "onesignalUserRole".to_string(),
        }
    }
}

/// Which entries a sync actually wrote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyncOutcome {
    pub user_id_written: bool,
    pub role_written: bool,
}

impl SyncOutcome {
    pub fn wrote_anything(&self) -> bool {
        self.user_id_written || self.role_written
    }
}

/// Mirror `identity` into `store`. The role is only written once known.
pub fn sync_identity<S: KeyValueStore + ?Sized>(
    store: &S,
    keys: &IdentityKeys,
    identity: &SessionIdentity,
) -> Result<SyncOutcome, StoreError> {
    let mut outcome = SyncOutcome::default();

    outcome.user_id_written = write_if_changed(store, &keys.user_id, &identity.user_id)?;
    if let Some(role) = identity.role {
        outcome.role_written = write_if_changed(store, &keys.user_role, role.as_str())?;
    }

    if outcome.wrote_anything() {
        tracing::debug!(
            user_id = %identity.user_id,
            role = ?identity.role,
            "Mirrored session identity"
        );
    }

    Ok(outcome)
}

fn write_if_changed<S: KeyValueStore + ?Sized>(
    store: &S,
    key: &str,
    value: &str,
) -> Result<bool, StoreError> {
    if store.get(key)?.as_deref() == Some(value) {
        return Ok(false);
    }
    store.set(key, value)?;
    Ok(true)
}

/// In-memory store, counting writes
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    writes: RefCell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> usize {
        *self.writes.borrow()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionStatus;
    use crate::user::{Role, UserStatus};

    #[test]
    fn test_first_sync_writes_both() {
        let store = MemoryStore::new();
        let keys = IdentityKeys::default();
        let identity = SessionIdentity::new("user_1", Some(Role::Maintenance));

        let outcome = sync_identity(&store, &keys, &identity).unwrap();
        assert!(outcome.user_id_written && outcome.role_written);
        assert_eq!(store.get("onesignalUserId").unwrap().as_deref(), Some("user_1"));
        assert_eq!(
            store.get("onesignalUserRole").unwrap().as_deref(),
            Some("maintenance")
        );
    }

    #[test]
    fn test_repeat_sync_is_idempotent() {
        let store = MemoryStore::new();
        let keys = IdentityKeys::default();
        let identity = SessionIdentity::new("user_1", Some(Role::Admin));

        sync_identity(&store, &keys, &identity).unwrap();
        let outcome = sync_identity(&store, &keys, &identity).unwrap();
        assert!(!outcome.wrote_anything());
        assert_eq!(store.writes(), 2);
    }

    #[test]
    fn test_role_written_once_known() {
        let store = MemoryStore::new();
        let keys = IdentityKeys::default();

        let outcome = sync_identity(&store, &keys, &SessionIdentity::new("user_1", None)).unwrap();
        assert_eq!(
            outcome,
            SyncOutcome {
                user_id_written: true,
                role_written: false
            }
        );
        assert_eq!(store.get("onesignalUserRole").unwrap(), None);

        let outcome =
            sync_identity(&store, &keys, &SessionIdentity::new("user_1", Some(Role::User)))
                .unwrap();
        assert_eq!(
            outcome,
            SyncOutcome {
                user_id_written: false,
                role_written: true
            }
        );
    }

    #[test]
    fn test_banned_role_is_not_mirrored() {
        let store = MemoryStore::new();
        let keys = IdentityKeys::default();
        let session = SessionStatus::signed_in("u_banned");
        let lookup = UserStatus::new(Role::Admin).banned();

        let identity = SessionIdentity::from_lookup(&session, Some(&lookup)).unwrap();
        let outcome = sync_identity(&store, &keys, &identity).unwrap();
        assert!(outcome.user_id_written);
        assert!(!outcome.role_written);
        assert_eq!(store.get("onesignalUserId").unwrap().as_deref(), Some("u_banned"));
        assert_eq!(store.get("onesignalUserRole").unwrap(), None);
    }

    #[test]
    fn test_custom_keys() {
        let store = MemoryStore::new();
        let keys = IdentityKeys {
            user_id: "uid".to_string(),
            user_role: "urole".to_string(),
        };
        sync_identity(&store, &keys, &SessionIdentity::new("u", Some(Role::User))).unwrap();
        assert_eq!(store.get("uid").unwrap().as_deref(), Some("u"));
        assert_eq!(store.get("urole").unwrap().as_deref(), Some("user"));
    }
}

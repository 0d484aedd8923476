//! `localStorage` adapter for the core's key-value store trait.

use venue_hub::{KeyValueStore, StoreError};

/// Browser `localStorage`
#[derive(Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage(&self) -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Write {
                key: key.to_string(),
                error: format!("{:?}", e),
            })
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use venue_hub::{sync_identity, IdentityKeys, Role, SessionIdentity};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_store_round_trip() {
        LocalStore.set("venue_hub_test_key", "value").unwrap();
        assert_eq!(
            LocalStore.get("venue_hub_test_key").unwrap().as_deref(),
            Some("value")
        );
    }

    #[wasm_bindgen_test]
    fn test_identity_mirror_writes_once() {
        let keys = IdentityKeys {
            user_id: "test_push_user_id".to_string(),
            user_role: "test_push_user_role".to_string(),
        };
        let identity = SessionIdentity::new("user_wasm", Some(Role::Maintenance));

        sync_identity(&LocalStore, &keys, &identity).unwrap();
        let second = sync_identity(&LocalStore, &keys, &identity).unwrap();

        assert!(!second.wrote_anything());
        assert_eq!(
            LocalStore.get("test_push_user_role").unwrap().as_deref(),
            Some("maintenance")
        );
    }
}

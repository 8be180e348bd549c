//! localStorage に保存する設定ストア

use ediscan_common::{Error, PreferenceStore, Result};
use web_sys::Storage;

#[derive(Debug, Clone, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Result<Storage> {
        web_sys::window()
            .ok_or_else(|| Error::Storage("no window object".to_string()))?
            .local_storage()
            .map_err(|e| Error::Storage(format!("localStorage access error: {:?}", e)))?
            .ok_or_else(|| Error::Storage("localStorage not available".to_string()))
    }
}

impl PreferenceStore for LocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }
}

//! 自動コピー設定の永続化
//!
//! 値は文字列 `"true"` で保存し、それ以外はすべて無効扱い。

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::Result;

/// キー/値ストレージ（ブラウザでは localStorage）
pub trait PreferenceStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// メモリ上のストア
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }
}

/// 自動コピー設定
#[derive(Debug)]
pub struct AutoCopyPreference<S> {
    store: S,
    key: String,
}

impl<S: PreferenceStore> AutoCopyPreference<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// 読み取り失敗は無効扱い
    pub fn is_enabled(&self) -> bool {
        match self.store.get_item(&self.key) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                log::warn!("failed to read {}: {}", self.key, e);
                false
            }
        }
    }

    pub fn set_enabled(&self, enabled: bool) -> Result<()> {
        let value = if enabled { "true" } else { "false" };
        self.store.set_item(&self.key, value)?;
        log::info!("{} = {}", self.key, value);
        Ok(())
    }
}

/// 読み込み時に自動コピーするか（空白だけのテキストは対象外）
pub fn should_auto_copy(enabled: bool, text: Option<&str>) -> bool {
    enabled && text.is_some_and(|t| !t.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_disabled() {
        let store = MemoryStore::new();
        let pref = AutoCopyPreference::new(&store, "autoCopy");
        assert!(!pref.is_enabled());
        assert_eq!(store.get_item("autoCopy").unwrap(), None);
    }

    #[test]
    fn test_persists_across_reload() {
        let store = MemoryStore::new();

        AutoCopyPreference::new(&store, "autoCopy")
            .set_enabled(true)
            .unwrap();
        // 再読み込み相当: 新しいインスタンスで同じストアを読む
        assert!(AutoCopyPreference::new(&store, "autoCopy").is_enabled());
        assert_eq!(store.get_item("autoCopy").unwrap().as_deref(), Some("true"));

        AutoCopyPreference::new(&store, "autoCopy")
            .set_enabled(false)
            .unwrap();
        assert!(!AutoCopyPreference::new(&store, "autoCopy").is_enabled());
    }

    #[test]
    fn test_non_true_values_disabled() {
        let store = MemoryStore::new();
        store.set_item("autoCopy", "TRUE").unwrap();
        assert!(!AutoCopyPreference::new(&store, "autoCopy").is_enabled());
        store.set_item("autoCopy", "1").unwrap();
        assert!(!AutoCopyPreference::new(&store, "autoCopy").is_enabled());
    }

    #[test]
    fn test_should_auto_copy() {
        assert!(should_auto_copy(true, Some("Bonjour")));
        assert!(!should_auto_copy(true, Some("  \n ")));
        assert!(!should_auto_copy(true, None));
        assert!(!should_auto_copy(false, Some("Bonjour")));
    }
}

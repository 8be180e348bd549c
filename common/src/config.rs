//! UI設定
//!
//! テンプレートが `<script id="ediscan-config" type="application/json">` を
//! 埋め込んだ場合だけ上書きされる。省略した項目は既定値。

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UiConfig {
    pub toast_duration_ms: u32,
    pub copy_feedback_ms: u32,
    pub auto_copy_delay_ms: u32,
    pub quick_step_ms: u32,
    pub standard_step_ms: u32,
    pub auto_copy_key: String,
    pub download_file_name: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 3000,
            copy_feedback_ms: 2000,
            auto_copy_delay_ms: 500,
            quick_step_ms: 400,
            standard_step_ms: 800,
            auto_copy_key: "autoCopy".into(),
            download_file_name: "ediscan-texte-extrait.txt".into(),
        }
    }
}

impl UiConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 埋め込み設定を読む。不正なJSONは既定値に戻す
    pub fn from_embedded(json: Option<&str>) -> Self {
        match json.map(str::trim).filter(|s| !s.is_empty()) {
            Some(json) => Self::from_json(json).unwrap_or_else(|e| {
                log::warn!("invalid embedded config, using defaults: {}", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }
}

//! サーバーが埋め込むバッチ結果の型

use serde::{Deserialize, Serialize};

/// ファイルごとの統計
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchStats {
    pub word_count: u64,
    pub line_count: u64,
    pub char_count: u64,
    pub detection_count: u64,
}

/// バッチ結果の1件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchEntry {
    pub original_filename: String,
    pub text: String,
    pub stats: BatchStats,
}

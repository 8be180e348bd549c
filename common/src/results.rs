//! 結果ページ
//!
//! 画像タブ切り替え、バッチ結果の選択、コピー/ダウンロード用テキストの組み立て。

use crate::dom::{class, ElementId, PageView};
use crate::types::BatchEntry;

/// ダウンロードファイルのMIMEタイプ
pub const DOWNLOAD_MIME: &str = "text/plain;charset=utf-8";

/// 画像タブ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageTab {
    Original,
    Detected,
}

impl ImageTab {
    fn tab(&self) -> ElementId {
        match self {
            ImageTab::Original => ElementId::TabOriginal,
            ImageTab::Detected => ElementId::TabDetected,
        }
    }

    fn image(&self) -> ElementId {
        match self {
            ImageTab::Original => ElementId::OriginalImage,
            ImageTab::Detected => ElementId::DetectedImage,
        }
    }

    fn other(&self) -> ImageTab {
        match self {
            ImageTab::Original => ImageTab::Detected,
            ImageTab::Detected => ImageTab::Original,
        }
    }
}

/// 指定タブだけを表示する
pub fn show_image<V: PageView>(view: &V, tab: ImageTab) {
    let other = tab.other();
    view.remove_class(other.tab(), class::ACTIVE);
    view.add_class(tab.tab(), class::ACTIVE);
    view.add_class(other.image(), class::HIDDEN);
    view.remove_class(tab.image(), class::HIDDEN);
}

/// サーバーが返したバッチ結果（読み取り専用）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResults {
    entries: Vec<BatchEntry>,
}

impl BatchResults {
    pub fn new(entries: Vec<BatchEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&BatchEntry> {
        self.entries.get(index)
    }

    /// 全件を `=== ファイル名 ===` 見出し付きで連結（空行区切り）
    pub fn copy_all_text(&self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }
        let text = self
            .entries
            .iter()
            .map(|e| format!("=== {} ===\n{}", e.original_filename, e.text))
            .collect::<Vec<_>>()
            .join("\n\n");
        Some(text)
    }
}

/// 結果ページの状態
#[derive(Debug, Default)]
pub struct ResultsController {
    batch: BatchResults,
    selected: Option<usize>,
}

impl ResultsController {
    pub fn new(batch: BatchResults) -> Self {
        Self {
            batch,
            selected: None,
        }
    }

    pub fn batch(&self) -> &BatchResults {
        &self.batch
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// ページ読み込み時: バッチがあれば先頭を選択
    pub fn init<V: PageView>(&mut self, view: &V) {
        if !self.batch.is_empty() {
            self.select(view, 0);
        }
    }

    /// 範囲外のインデックスは無視して `false`
    pub fn select<V: PageView>(&mut self, view: &V, index: usize) -> bool {
        let Some(entry) = self.batch.get(index) else {
            log::warn!("batch index {} out of range ({})", index, self.batch.len());
            return false;
        };

        view.set_text(ElementId::TextOutput, &entry.text);
        view.set_text(ElementId::StatWords, &entry.stats.word_count.to_string());
        view.set_text(ElementId::StatLines, &entry.stats.line_count.to_string());
        view.set_text(ElementId::StatChars, &entry.stats.char_count.to_string());
        view.set_text(
            ElementId::StatDetections,
            &entry.stats.detection_count.to_string(),
        );

        for i in 0..self.batch.len() {
            view.toggle_class(ElementId::BatchItem(i), class::ACTIVE, i == index);
        }
        self.selected = Some(index);
        true
    }
}

/// 表示中の抽出テキスト（要素が無い場合は `None`）
pub fn current_text<V: PageView>(view: &V) -> Option<String> {
    view.text(ElementId::TextOutput)
}

/// コピー対象ボタン
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyButton {
    Copy,
    QuickCopy,
}

impl CopyButton {
    pub fn element(&self) -> ElementId {
        match self {
            CopyButton::Copy => ElementId::CopyButton,
            CopyButton::QuickCopy => ElementId::QuickCopyButton,
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            CopyButton::Copy => crate::toast::MSG_COPIED,
            CopyButton::QuickCopy => crate::toast::MSG_QUICK_COPIED,
        }
    }

    fn copied_html(&self) -> &'static str {
        match self {
            CopyButton::Copy => "<span>✅</span><span>Copié!</span>",
            CopyButton::QuickCopy => r#"<span class="icon">✅</span><span>Copié !</span>"#,
        }
    }

    fn idle_html(&self) -> &'static str {
        match self {
            CopyButton::Copy => "<span>📋</span><span>Copier</span>",
            CopyButton::QuickCopy => {
                r#"<span class="icon">📋</span><span>Copie Rapide</span><span class="shortcut">Ctrl+Shift+C</span>"#
            }
        }
    }

    /// コピー成功表示
    pub fn mark_copied<V: PageView>(&self, view: &V) {
        let id = self.element();
        if *self == CopyButton::QuickCopy {
            view.remove_class(id, class::PULSE);
        }
        view.add_class(id, class::COPIED);
        view.set_html(id, self.copied_html());
    }

    /// 一定時間後に元へ戻す
    pub fn reset<V: PageView>(&self, view: &V) {
        let id = self.element();
        view.remove_class(id, class::COPIED);
        view.set_html(id, self.idle_html());
    }
}

//! ページ要素の識別子と操作トレイト
//!
//! サーバーテンプレートとこのモジュールの固定IDが唯一の契約。
//! ロジックは `PageView` だけを通してDOMに触れるので、テストでは
//! メモリ上の実装に差し替えられる。

/// 進捗ステップ数
pub const STEP_COUNT: usize = 4;

/// 画面要素
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementId {
    // アップロード
    DropZone,
    FileInput,
    SubmitButton,
    QuickButton,
    UploadForm,
    QuickModeInput,
    ConfidenceSlider,
    ConfidenceValue,
    FileCount,
    FileList,
    // ローディング
    Loading,
    LoadingText,
    /// 0始まりのステップ番号
    Step(usize),
    // 画像表示
    PreviewDisplay,
    ImageEmpty,
    PreviewMulti,
    OriginalImage,
    DetectedImage,
    TabOriginal,
    TabDetected,
    // 結果
    TextOutput,
    StatWords,
    StatLines,
    StatChars,
    StatDetections,
    BatchItem(usize),
    CopyButton,
    QuickCopyButton,
    DownloadButton,
    CopyAllButton,
    ClearButton,
    AutoCopyToggle,
    // トースト
    Toast,
    ToastMessage,
    ToastIcon,
}

impl ElementId {
    /// `.display-img` に相当する画像要素
    pub const DISPLAY_IMAGES: [ElementId; 3] = [
        ElementId::PreviewDisplay,
        ElementId::OriginalImage,
        ElementId::DetectedImage,
    ];

    /// ページに1つずつしかない要素（ステップを含み、バッチ項目は含まない）
    pub fn fixed() -> Vec<ElementId> {
        let mut ids = vec![
            ElementId::DropZone,
            ElementId::FileInput,
            ElementId::SubmitButton,
            ElementId::QuickButton,
            ElementId::UploadForm,
            ElementId::QuickModeInput,
            ElementId::ConfidenceSlider,
            ElementId::ConfidenceValue,
            ElementId::FileCount,
            ElementId::FileList,
            ElementId::Loading,
            ElementId::LoadingText,
            ElementId::PreviewDisplay,
            ElementId::ImageEmpty,
            ElementId::PreviewMulti,
            ElementId::OriginalImage,
            ElementId::DetectedImage,
            ElementId::TabOriginal,
            ElementId::TabDetected,
            ElementId::TextOutput,
            ElementId::StatWords,
            ElementId::StatLines,
            ElementId::StatChars,
            ElementId::StatDetections,
            ElementId::CopyButton,
            ElementId::QuickCopyButton,
            ElementId::DownloadButton,
            ElementId::CopyAllButton,
            ElementId::ClearButton,
            ElementId::AutoCopyToggle,
            ElementId::Toast,
            ElementId::ToastMessage,
            ElementId::ToastIcon,
        ];
        ids.extend((0..STEP_COUNT).map(ElementId::Step));
        ids
    }

    /// CSSセレクタ
    pub fn selector(&self) -> String {
        let fixed = match self {
            ElementId::DropZone => "#drop-zone",
            ElementId::FileInput => "#file-input",
            ElementId::SubmitButton => "#submit-btn",
            ElementId::QuickButton => "#quick-btn",
            ElementId::UploadForm => "#upload-form",
            ElementId::QuickModeInput => "#quick-mode-input",
            ElementId::ConfidenceSlider => "#confidence-slider",
            ElementId::ConfidenceValue => "#confidence-value",
            ElementId::FileCount => "#file-count",
            ElementId::FileList => "#file-list",
            ElementId::Loading => "#loading",
            ElementId::LoadingText => "#loading .loading-text",
            ElementId::Step(i) => return format!("#step-{}", i + 1),
            ElementId::PreviewDisplay => "#preview-display",
            ElementId::ImageEmpty => "#image-empty",
            ElementId::PreviewMulti => "#preview-multi",
            ElementId::OriginalImage => "#original-img",
            ElementId::DetectedImage => "#detected-img",
            ElementId::TabOriginal => "#tab-original",
            ElementId::TabDetected => "#tab-detected",
            ElementId::TextOutput => "#text-output",
            ElementId::StatWords => "#stat-words",
            ElementId::StatLines => "#stat-lines",
            ElementId::StatChars => "#stat-chars",
            ElementId::StatDetections => "#stat-detections",
            ElementId::BatchItem(i) => return format!("#batch-item-{}", i),
            ElementId::CopyButton => "#copy-btn",
            ElementId::QuickCopyButton => "#quick-copy-btn",
            ElementId::DownloadButton => "#download-btn",
            ElementId::CopyAllButton => "#copy-all-btn",
            ElementId::ClearButton => "#clear-btn",
            ElementId::AutoCopyToggle => "#auto-copy-toggle",
            ElementId::Toast => "#toast",
            ElementId::ToastMessage => "#toast .toast-message",
            ElementId::ToastIcon => "#toast .toast-icon",
        };
        fixed.to_string()
    }
}

/// CSSクラス名
pub mod class {
    pub const HIDDEN: &str = "image-hidden";
    pub const ACTIVE: &str = "active";
    pub const DONE: &str = "done";
    pub const VISIBLE: &str = "visible";
    pub const DRAGOVER: &str = "dragover";
    pub const COPIED: &str = "copied";
    pub const SUCCESS: &str = "success";
    pub const PULSE: &str = "pulse";
}

/// DOM操作の境界
///
/// 要素が存在しない場合、書き込み系は何もせず、読み取り系は `None` を返す。
pub trait PageView {
    fn exists(&self, id: ElementId) -> bool;
    fn text(&self, id: ElementId) -> Option<String>;
    fn set_text(&self, id: ElementId, text: &str);
    /// 静的マークアップ専用（利用者入力を渡さないこと）
    fn set_html(&self, id: ElementId, html: &str);
    fn add_class(&self, id: ElementId, class: &str);
    fn remove_class(&self, id: ElementId, class: &str);
    fn set_disabled(&self, id: ElementId, disabled: bool);
    /// `style.display` の切り替え
    fn set_shown(&self, id: ElementId, shown: bool);
    fn set_image_src(&self, id: ElementId, src: &str);
    fn value(&self, id: ElementId) -> Option<String>;
    fn set_value(&self, id: ElementId, value: &str);
    fn set_checked(&self, id: ElementId, checked: bool);
    /// 子要素を `<li>` の並びで置き換える
    fn render_list(&self, id: ElementId, items: &[String]);
    fn navigate(&self, path: &str);

    fn toggle_class(&self, id: ElementId, class: &str, on: bool) {
        if on {
            self.add_class(id, class);
        } else {
            self.remove_class(id, class);
        }
    }
}

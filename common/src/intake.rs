//! ファイル受け付け
//!
//! クリック選択・ドラッグ&ドロップ・クリップボード貼り付けの3経路から
//! 来たファイルを同じ手順で検証し、画面に反映する。

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::dom::{class, ElementId, PageView};
use crate::error::{Error, Result};

/// 受け付ける画像サブタイプ
pub const ALLOWED_SUBTYPES: [&str; 6] = ["png", "jpeg", "jpg", "bmp", "tiff", "webp"];

/// 受け付け候補のファイル
///
/// WASM側では `web_sys::File`、テストでは単純な構造体が実装する。
pub trait Candidate {
    fn name(&self) -> String;
    fn mime_type(&self) -> String;
}

/// 宣言されたMIMEタイプが許可リストのいずれかを含むか
pub fn is_supported(mime_type: &str) -> bool {
    ALLOWED_SUBTYPES.iter().any(|subtype| mime_type.contains(subtype))
}

/// 許可された形式のファイルだけを残す
///
/// 入力が空なら `EmptySelection`、1件も残らなければ `UnsupportedFormat`。
pub fn filter_supported<F: Candidate>(files: Vec<F>) -> Result<Vec<F>> {
    if files.is_empty() {
        return Err(Error::EmptySelection);
    }
    let valid: Vec<F> = files
        .into_iter()
        .filter(|f| is_supported(&f.mime_type()))
        .collect();
    if valid.is_empty() {
        return Err(Error::UnsupportedFormat);
    }
    Ok(valid)
}

/// 件数表示
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 image sélectionnée".to_string()
    } else {
        format!("{} images sélectionnées", count)
    }
}

/// 複数選択時のプレースホルダ
pub fn multi_placeholder(count: usize) -> String {
    format!("📚 {} images prêtes pour le scan", count)
}

/// プレビュー表示用のData URL
pub fn data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

/// クリップボード画像に付けるファイル名
pub fn pasted_file_name(timestamp_ms: u64, mime_type: &str) -> String {
    let extension = match mime_type.split_once('/').map(|(_, sub)| sub) {
        Some("jpeg") => "jpg",
        Some(sub) if is_supported(sub) => sub,
        _ => "png",
    };
    format!("capture-{}.{}", timestamp_ms, extension)
}

/// 受け付け後に必要なプレビュー処理
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preview {
    /// 1枚: 非同期で読み込んで `show_preview` に渡す
    Single { generation: u64 },
    /// 複数: プレースホルダ表示済み
    Multiple { count: usize },
}

/// 選択中ファイルの保持と画面反映
#[derive(Debug)]
pub struct Intake<F> {
    selected: Vec<F>,
    generation: u64,
}

impl<F> Default for Intake<F> {
    fn default() -> Self {
        Self {
            selected: Vec::new(),
            generation: 0,
        }
    }
}

impl<F: Candidate> Intake<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &[F] {
        &self.selected
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// 新しい選択で以前の選択を丸ごと置き換える
    ///
    /// 拒否された場合も以前の選択は破棄され、送信ボタンは無効になる。
    pub fn accept<V: PageView>(&mut self, view: &V, files: Vec<F>) -> Result<Preview> {
        self.generation += 1;
        self.selected.clear();

        let valid = match filter_supported(files) {
            Ok(valid) => valid,
            Err(e) => {
                clear_selection(view);
                set_submit_enabled(view, false);
                return Err(e);
            }
        };

        let count = valid.len();
        let names: Vec<String> = valid.iter().map(|f| f.name()).collect();
        log::info!("accepted {} file(s): {:?}", count, names);

        view.set_text(ElementId::FileCount, &count_label(count));
        view.render_list(ElementId::FileList, &names);
        self.selected = valid;

        let preview = if count == 1 {
            // 読み込み失敗時に前回の複数選択表示が残らないように
            view.set_shown(ElementId::PreviewMulti, false);
            Preview::Single {
                generation: self.generation,
            }
        } else {
            hide_display_images(view);
            view.set_shown(ElementId::ImageEmpty, false);
            view.set_text(ElementId::PreviewMulti, &multi_placeholder(count));
            view.set_shown(ElementId::PreviewMulti, true);
            Preview::Multiple { count }
        };

        set_submit_enabled(view, true);
        Ok(preview)
    }

    /// 読み込み完了したプレビューを表示する
    ///
    /// 読み込み中に新しい選択があった場合は破棄して `false` を返す。
    pub fn show_preview<V: PageView>(&self, view: &V, generation: u64, data_url: &str) -> bool {
        if generation != self.generation || self.selected.len() != 1 {
            log::debug!("stale preview dropped (generation {})", generation);
            return false;
        }
        hide_display_images(view);
        view.set_shown(ElementId::ImageEmpty, false);
        view.set_shown(ElementId::PreviewMulti, false);
        view.set_image_src(ElementId::PreviewDisplay, data_url);
        view.remove_class(ElementId::PreviewDisplay, class::HIDDEN);
        true
    }
}

fn hide_display_images<V: PageView>(view: &V) {
    for id in ElementId::DISPLAY_IMAGES {
        view.add_class(id, class::HIDDEN);
    }
}

/// 件数・一覧・プレビューを未選択の状態に戻す
fn clear_selection<V: PageView>(view: &V) {
    view.set_text(ElementId::FileCount, "");
    view.render_list(ElementId::FileList, &[]);
    hide_display_images(view);
    view.set_shown(ElementId::PreviewMulti, false);
    view.set_shown(ElementId::ImageEmpty, true);
}

fn set_submit_enabled<V: PageView>(view: &V, enabled: bool) {
    view.set_disabled(ElementId::SubmitButton, !enabled);
    view.set_disabled(ElementId::QuickButton, !enabled);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake_view::FakeView;

    #[derive(Debug, Clone)]
    struct TestFile(&'static str, &'static str);

    impl Candidate for TestFile {
        fn name(&self) -> String {
            self.0.to_string()
        }

        fn mime_type(&self) -> String {
            self.1.to_string()
        }
    }

    fn visible_previews(view: &FakeView) -> usize {
        ElementId::DISPLAY_IMAGES
            .iter()
            .filter(|id| !view.has_class(**id, class::HIDDEN))
            .count()
    }

    #[test]
    fn test_is_supported() {
        assert!(is_supported("image/png"));
        assert!(is_supported("image/jpeg"));
        assert!(is_supported("image/webp"));
        assert!(is_supported("image/tiff"));
        assert!(!is_supported("application/pdf"));
        assert!(!is_supported("image/gif"));
        assert!(!is_supported(""));
    }

    #[test]
    fn test_filter_keeps_order() {
        let files = vec![
            TestFile("a.png", "image/png"),
            TestFile("doc.pdf", "application/pdf"),
            TestFile("b.jpg", "image/jpeg"),
        ];
        let valid = filter_supported(files).unwrap();
        let names: Vec<_> = valid.iter().map(|f| f.0).collect();
        assert_eq!(names, vec!["a.png", "b.jpg"]);
    }

    #[test]
    fn test_filter_errors() {
        assert!(matches!(
            filter_supported(Vec::<TestFile>::new()),
            Err(Error::EmptySelection)
        ));
        assert!(matches!(
            filter_supported(vec![TestFile("x.gif", "image/gif")]),
            Err(Error::UnsupportedFormat)
        ));
    }

    #[test]
    fn test_pdf_drop_is_rejected() {
        let view = FakeView::with_all();
        let mut intake = Intake::new();

        let result = intake.accept(&view, vec![TestFile("scan.pdf", "application/pdf")]);

        assert!(matches!(result, Err(Error::UnsupportedFormat)));
        assert!(view.is_disabled(ElementId::SubmitButton));
        assert!(view.is_disabled(ElementId::QuickButton));
        assert!(intake.selected().is_empty());
        assert_eq!(view.get(ElementId::PreviewDisplay).src, "");
    }

    #[test]
    fn test_rejection_invalidates_previous_selection() {
        let view = FakeView::with_all();
        let mut intake = Intake::new();
        intake
            .accept(&view, vec![TestFile("a.png", "image/png")])
            .unwrap();
        assert!(!view.is_disabled(ElementId::SubmitButton));

        let _ = intake.accept(&view, vec![TestFile("a.txt", "text/plain")]);
        assert!(intake.selected().is_empty());
        assert!(view.is_disabled(ElementId::SubmitButton));
    }

    #[test]
    fn test_rejection_clears_displayed_selection() {
        let view = FakeView::with_all();
        let mut intake = Intake::new();
        let generation = match intake
            .accept(&view, vec![TestFile("a.png", "image/png")])
            .unwrap()
        {
            Preview::Single { generation } => generation,
            other => panic!("expected single preview, got {:?}", other),
        };
        assert!(intake.show_preview(&view, generation, "data:a"));

        let result = intake.accept(&view, vec![TestFile("scan.pdf", "application/pdf")]);

        assert!(matches!(result, Err(Error::UnsupportedFormat)));
        assert_eq!(view.text_of(ElementId::FileCount), "");
        assert!(view.get(ElementId::FileList).items.is_empty());
        assert_eq!(visible_previews(&view), 0);
        assert_eq!(view.get(ElementId::PreviewMulti).shown, Some(false));
        assert_eq!(view.get(ElementId::ImageEmpty).shown, Some(true));
        assert!(view.is_disabled(ElementId::SubmitButton));
        assert!(view.is_disabled(ElementId::QuickButton));
    }

    #[test]
    fn test_single_after_multi_hides_placeholder() {
        let view = FakeView::with_all();
        let mut intake = Intake::new();
        intake
            .accept(
                &view,
                vec![TestFile("a.png", "image/png"), TestFile("b.png", "image/png")],
            )
            .unwrap();
        assert_eq!(view.get(ElementId::PreviewMulti).shown, Some(true));

        // プレビュー読み込み前（または失敗時）でもプレースホルダは消えている
        intake
            .accept(&view, vec![TestFile("c.png", "image/png")])
            .unwrap();
        assert_eq!(view.get(ElementId::PreviewMulti).shown, Some(false));
        assert_eq!(view.text_of(ElementId::FileCount), "1 image sélectionnée");
    }

    #[test]
    fn test_single_file_produces_one_preview() {
        let view = FakeView::with_all();
        let mut intake = Intake::new();

        let preview = intake
            .accept(&view, vec![TestFile("photo.png", "image/png")])
            .unwrap();
        let Preview::Single { generation } = preview else {
            panic!("expected single preview");
        };

        assert!(intake.show_preview(&view, generation, "data:image/png;base64,AA=="));
        assert_eq!(visible_previews(&view), 1);
        assert_eq!(
            view.get(ElementId::PreviewDisplay).src,
            "data:image/png;base64,AA=="
        );
        assert_eq!(view.get(ElementId::ImageEmpty).shown, Some(false));
        assert_eq!(view.text_of(ElementId::FileCount), "1 image sélectionnée");
        assert_eq!(view.get(ElementId::FileList).items, vec!["photo.png"]);
        assert!(!view.is_disabled(ElementId::SubmitButton));
        assert!(!view.is_disabled(ElementId::QuickButton));
    }

    #[test]
    fn test_multiple_files_show_placeholder() {
        let view = FakeView::with_all();
        let mut intake = Intake::new();

        let preview = intake
            .accept(
                &view,
                vec![
                    TestFile("a.png", "image/png"),
                    TestFile("b.bmp", "image/bmp"),
                    TestFile("c.webp", "image/webp"),
                ],
            )
            .unwrap();

        assert_eq!(preview, Preview::Multiple { count: 3 });
        assert_eq!(visible_previews(&view), 0);
        assert_eq!(view.get(ElementId::PreviewMulti).shown, Some(true));
        assert!(view.text_of(ElementId::PreviewMulti).contains('3'));
        assert_eq!(view.text_of(ElementId::FileCount), "3 images sélectionnées");
        assert!(!view.is_disabled(ElementId::SubmitButton));
    }

    #[test]
    fn test_stale_preview_is_dropped() {
        let view = FakeView::with_all();
        let mut intake = Intake::new();

        let first = intake
            .accept(&view, vec![TestFile("old.png", "image/png")])
            .unwrap();
        let second = intake
            .accept(&view, vec![TestFile("new.png", "image/png")])
            .unwrap();

        let (Preview::Single { generation: old }, Preview::Single { generation: new }) =
            (first, second)
        else {
            panic!("expected single previews");
        };

        assert!(!intake.show_preview(&view, old, "data:old"));
        assert!(intake.show_preview(&view, new, "data:new"));
        assert_eq!(view.get(ElementId::PreviewDisplay).src, "data:new");
    }

    #[test]
    fn test_preview_dropped_after_multi_selection() {
        let view = FakeView::with_all();
        let mut intake = Intake::new();
        intake
            .accept(&view, vec![TestFile("a.png", "image/png")])
            .unwrap();
        let generation = intake.generation();
        intake
            .accept(
                &view,
                vec![TestFile("a.png", "image/png"), TestFile("b.png", "image/png")],
            )
            .unwrap();

        assert!(!intake.show_preview(&view, generation, "data:a"));
        assert_eq!(visible_previews(&view), 0);
    }

    #[test]
    fn test_data_url() {
        assert_eq!(data_url("image/png", b"hi"), "data:image/png;base64,aGk=");
    }

    #[test]
    fn test_pasted_file_name() {
        assert_eq!(pasted_file_name(1700000000000, "image/png"), "capture-1700000000000.png");
        assert_eq!(pasted_file_name(42, "image/jpeg"), "capture-42.jpg");
        assert_eq!(pasted_file_name(42, "image/webp"), "capture-42.webp");
        assert_eq!(pasted_file_name(42, "image/gif"), "capture-42.png");
        assert_eq!(pasted_file_name(42, ""), "capture-42.png");
    }
}

//! ページ単位のコーディネータ
//!
//! ページ読み込みごとに1つ作り、イベント登録後は破棄しない。

use std::cell::RefCell;
use std::rc::Rc;

use ediscan_common::{
    AutoCopyPreference, BatchEntry, BatchResults, Candidate, ElementId, Intake, KeyChord,
    PageView, ResultsController, Shortcut, Toast, UiConfig,
};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, KeyboardEvent};

use crate::dom::DomView;
use crate::storage::LocalStore;

/// サーバーテンプレートが埋め込むグローバル変数
const BATCH_GLOBAL: &str = "batchResults";
/// 設定JSONを置く script 要素
const CONFIG_ELEMENT: &str = "ediscan-config";

/// `web_sys::File` を受け付け候補として扱う
#[derive(Debug, Clone)]
pub struct WebFile(pub web_sys::File);

impl Candidate for WebFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn mime_type(&self) -> String {
        self.0.type_()
    }
}

pub struct Coordinator {
    pub(crate) view: DomView,
    pub(crate) config: UiConfig,
    pub(crate) intake: RefCell<Intake<WebFile>>,
    pub(crate) results: RefCell<ResultsController>,
    pub(crate) auto_copy: AutoCopyPreference<LocalStore>,
    toast_timer: RefCell<Option<Timeout>>,
}

impl Coordinator {
    pub fn new(document: Document, config: UiConfig, batch: BatchResults) -> Rc<Self> {
        let view = DomView::new(document, batch.len());
        let auto_copy = AutoCopyPreference::new(LocalStore, config.auto_copy_key.clone());
        Rc::new(Self {
            view,
            config,
            intake: RefCell::new(Intake::new()),
            results: RefCell::new(ResultsController::new(batch)),
            auto_copy,
            toast_timer: RefCell::new(None),
        })
    }

    /// 設定とバッチ結果を読み込み、全イベントを登録する
    pub fn mount(document: Document) {
        let config = UiConfig::from_embedded(
            document
                .get_element_by_id(CONFIG_ELEMENT)
                .and_then(|el| el.text_content())
                .as_deref(),
        );
        let batch = read_batch_global();
        log::info!("EdiScan UI starting ({} batch result(s))", batch.len());

        let this = Self::new(document, config, batch);
        this.wire_upload();
        this.wire_submit();
        this.wire_results();
        this.wire_shortcuts();
        this.init_results();
    }

    /// トーストを表示し、既存の消去タイマーを置き換える
    pub fn notify(&self, toast: Toast) {
        if toast.kind == ediscan_common::ToastKind::Error {
            log::warn!("{}", toast.message);
        }
        toast.show(&self.view);
        let view = self.view.clone();
        let timer = Timeout::new(self.config.toast_duration_ms, move || {
            ediscan_common::toast::hide(&view);
        });
        // 古いタイマーはdropで取り消される
        self.toast_timer.replace(Some(timer));
    }

    /// 要素があればリスナーを登録し、ページの寿命まで保持する
    pub(crate) fn listen<F>(&self, id: ElementId, event: &'static str, callback: F)
    where
        F: FnMut(&Event) + 'static,
    {
        if let Some(element) = self.view.element(id) {
            EventListener::new(element, event, callback).forget();
        }
    }

    /// `preventDefault` が必要なイベント用
    pub(crate) fn listen_active<F>(&self, id: ElementId, event: &'static str, callback: F)
    where
        F: FnMut(&Event) + 'static,
    {
        if let Some(element) = self.view.element(id) {
            EventListener::new_with_options(
                element,
                event,
                EventListenerOptions::enable_prevent_default(),
                callback,
            )
            .forget();
        }
    }

    fn wire_shortcuts(self: &Rc<Self>) {
        let this = Rc::clone(self);
        EventListener::new_with_options(
            self.view.document(),
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let key = event.key();
                let chord = KeyChord {
                    key: &key,
                    ctrl: event.ctrl_key(),
                    shift: event.shift_key(),
                    alt: event.alt_key(),
                    meta: event.meta_key(),
                };
                match Shortcut::matching(&chord) {
                    Some(Shortcut::QuickCopy) if this.view.exists(ElementId::TextOutput) => {
                        event.prevent_default();
                        let this = Rc::clone(&this);
                        spawn_local(async move {
                            this.copy(ediscan_common::CopyButton::QuickCopy).await;
                        });
                    }
                    Some(Shortcut::PasteImage) if this.view.exists(ElementId::DropZone) => {
                        event.prevent_default();
                        let this = Rc::clone(&this);
                        spawn_local(async move {
                            this.paste_from_clipboard().await;
                        });
                    }
                    _ => {}
                }
            },
        )
        .forget();
    }
}

/// `window.batchResults` を型付きで読む（無い・壊れている場合は空）
fn read_batch_global() -> BatchResults {
    let Some(window) = web_sys::window() else {
        return BatchResults::default();
    };
    let value = match js_sys::Reflect::get(&window, &BATCH_GLOBAL.into()) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => return BatchResults::default(),
    };
    match serde_wasm_bindgen::from_value::<Vec<BatchEntry>>(value) {
        Ok(entries) => BatchResults::new(entries),
        Err(e) => {
            log::warn!("ignoring malformed {}: {}", BATCH_GLOBAL, e);
            BatchResults::default()
        }
    }
}

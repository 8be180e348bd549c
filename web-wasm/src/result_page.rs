//! 結果ページ: タブ、バッチ選択、コピー、ダウンロード、自動コピー

use std::rc::Rc;

use ediscan_common::preferences::should_auto_copy;
use ediscan_common::results::{current_text, show_image, DOWNLOAD_MIME};
use ediscan_common::toast::{MSG_ALL_COPIED, MSG_AUTO_COPIED, MSG_DOWNLOADED};
use ediscan_common::{routes, CopyButton, ElementId, ImageTab, PageView, Toast};
use gloo::file::{Blob, ObjectUrl};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlAnchorElement;

use crate::app::Coordinator;
use crate::bridge;

/// 履歴エントリのセレクタとID属性
const HISTORY_SELECTOR: &str = ".history-item";
const HISTORY_ID_ATTR: &str = "data-entry-id";

impl Coordinator {
    pub(crate) fn wire_results(self: &Rc<Self>) {
        for tab in [ImageTab::Original, ImageTab::Detected] {
            let id = match tab {
                ImageTab::Original => ElementId::TabOriginal,
                ImageTab::Detected => ElementId::TabDetected,
            };
            let view = self.view.clone();
            self.listen(id, "click", move |_| show_image(&view, tab));
        }

        let batch_len = self.results.borrow().batch().len();
        for index in 0..batch_len {
            let this = Rc::clone(self);
            self.listen(ElementId::BatchItem(index), "click", move |_| {
                this.results.borrow_mut().select(&this.view, index);
            });
        }

        for button in [CopyButton::Copy, CopyButton::QuickCopy] {
            let this = Rc::clone(self);
            self.listen(button.element(), "click", move |_| {
                let this = Rc::clone(&this);
                spawn_local(async move {
                    this.copy(button).await;
                });
            });
        }

        {
            let this = Rc::clone(self);
            self.listen(ElementId::CopyAllButton, "click", move |_| {
                let this = Rc::clone(&this);
                spawn_local(async move {
                    this.copy_all().await;
                });
            });
        }

        {
            let this = Rc::clone(self);
            self.listen(ElementId::DownloadButton, "click", move |_| this.download());
        }

        {
            let view = self.view.clone();
            self.listen(ElementId::ClearButton, "click", move |_| routes::clear_all(&view));
        }

        self.wire_history();

        let this = Rc::clone(self);
        self.listen(ElementId::AutoCopyToggle, "change", move |_| {
            let checked = this
                .view
                .input(ElementId::AutoCopyToggle)
                .map(|input| input.checked())
                .unwrap_or(false);
            if let Err(e) = this.auto_copy.set_enabled(checked) {
                this.notify(e.toast());
            }
        });
    }

    fn wire_history(&self) {
        let Ok(entries) = self.view.document().query_selector_all(HISTORY_SELECTOR) else {
            return;
        };
        for i in 0..entries.length() {
            let Some(entry) = entries.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok())
            else {
                continue;
            };
            let entry_id = entry.get_attribute(HISTORY_ID_ATTR).unwrap_or_default();
            let view = self.view.clone();
            gloo::events::EventListener::new(&entry, "click", move |_| {
                routes::open_history(&view, &entry_id);
            })
            .forget();
        }
    }

    /// 読み込み時: 先頭バッチの選択、設定の反映、自動コピー
    pub(crate) fn init_results(self: &Rc<Self>) {
        self.results.borrow_mut().init(&self.view);

        let enabled = self.auto_copy.is_enabled();
        self.view.set_checked(ElementId::AutoCopyToggle, enabled);

        if should_auto_copy(enabled, current_text(&self.view).as_deref()) {
            let this = Rc::clone(self);
            Timeout::new(self.config.auto_copy_delay_ms, move || {
                spawn_local(async move {
                    if this.copy(CopyButton::QuickCopy).await {
                        this.notify(Toast::success(MSG_AUTO_COPIED));
                    }
                });
            })
            .forget();
        }
    }

    /// 表示中のテキストをコピーし、ボタンを一時的に切り替える
    pub(crate) async fn copy(self: &Rc<Self>, button: CopyButton) -> bool {
        let Some(text) = current_text(&self.view) else {
            return false;
        };
        match bridge::write_text(&text).await {
            Ok(()) => {
                button.mark_copied(&self.view);
                self.notify(Toast::success(button.success_message()));
                let view = self.view.clone();
                Timeout::new(self.config.copy_feedback_ms, move || button.reset(&view)).forget();
                true
            }
            Err(e) => {
                log::warn!("copy failed: {}", e);
                self.notify(e.toast());
                false
            }
        }
    }

    async fn copy_all(self: &Rc<Self>) {
        let Some(text) = self.results.borrow().batch().copy_all_text() else {
            return;
        };
        match bridge::write_text(&text).await {
            Ok(()) => self.notify(Toast::success(MSG_ALL_COPIED)),
            Err(e) => {
                log::warn!("copy all failed: {}", e);
                self.notify(e.toast());
            }
        }
    }

    fn download(&self) {
        let Some(text) = current_text(&self.view) else {
            return;
        };
        let Some(body) = self.view.document().body() else {
            return;
        };
        let url = ObjectUrl::from(Blob::new_with_options(text.as_str(), Some(DOWNLOAD_MIME)));

        let anchor = match self
            .view
            .document()
            .create_element("a")
            .map(|el| el.dyn_into::<HtmlAnchorElement>())
        {
            Ok(Ok(anchor)) => anchor,
            _ => return,
        };
        anchor.set_href(&url);
        anchor.set_download(&self.config.download_file_name);
        if body.append_child(&anchor).is_ok() {
            anchor.click();
            let _ = body.remove_child(&anchor);
            self.notify(Toast::success(MSG_DOWNLOADED));
        }
        // url のdropで revokeObjectURL
    }
}

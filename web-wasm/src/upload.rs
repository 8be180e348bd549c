//! ファイル選択・ドラッグ&ドロップ・貼り付け

use std::rc::Rc;

use ediscan_common::dom::class;
use ediscan_common::intake::{data_url, pasted_file_name};
use ediscan_common::{ElementId, Error, PageView, Preview, Result, Toast};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DataTransfer, DragEvent, File, FileList, FilePropertyBag};

use crate::app::{Coordinator, WebFile};
use crate::bridge;

impl Coordinator {
    pub(crate) fn wire_upload(self: &Rc<Self>) {
        if !self.view.exists(ElementId::DropZone) {
            return;
        }
        // 有効なファイルが選ばれるまで送信不可
        self.view.set_disabled(ElementId::SubmitButton, true);
        self.view.set_disabled(ElementId::QuickButton, true);

        {
            let view = self.view.clone();
            self.listen(ElementId::DropZone, "click", move |_| {
                if let Some(input) = view.input(ElementId::FileInput) {
                    input.click();
                }
            });
        }

        {
            let view = self.view.clone();
            self.listen_active(ElementId::DropZone, "dragover", move |event| {
                event.prevent_default();
                view.add_class(ElementId::DropZone, class::DRAGOVER);
            });
        }

        {
            let view = self.view.clone();
            self.listen(ElementId::DropZone, "dragleave", move |_| {
                view.remove_class(ElementId::DropZone, class::DRAGOVER);
            });
        }

        {
            let this = Rc::clone(self);
            self.listen_active(ElementId::DropZone, "drop", move |event| {
                event.prevent_default();
                this.view.remove_class(ElementId::DropZone, class::DRAGOVER);
                let files = event
                    .dyn_ref::<DragEvent>()
                    .and_then(|e| e.data_transfer())
                    .and_then(|dt| dt.files());
                // テキストやリンクのドロップはファイルを含まないので無視する
                if let Some(files) = files {
                    if files.length() > 0 {
                        this.receive_files(file_list(&files));
                    }
                }
            });
        }

        {
            let this = Rc::clone(self);
            self.listen(ElementId::FileInput, "change", move |_| {
                let files = this
                    .view
                    .input(ElementId::FileInput)
                    .and_then(|input| input.files());
                if let Some(files) = files {
                    if files.length() > 0 {
                        this.receive_files(file_list(&files));
                    }
                }
            });
        }

        // ネイティブの貼り付け（Ctrl+V）
        let this = Rc::clone(self);
        gloo::events::EventListener::new(self.view.document(), "paste", move |event| {
            let Some(event) = event.dyn_ref::<ClipboardEvent>() else {
                return;
            };
            let Some(data) = event.clipboard_data() else {
                return;
            };
            if let Some(file) = image_from_transfer(&data) {
                let file = rename_blob(&file, &file.type_()).unwrap_or(file);
                this.receive_pasted(file);
            }
        })
        .forget();
    }

    /// 3経路共通の受け付け処理
    pub(crate) fn receive_files(self: &Rc<Self>, files: Vec<File>) {
        let candidates = files.into_iter().map(WebFile).collect();
        let outcome = self.intake.borrow_mut().accept(&self.view, candidates);

        match outcome {
            Ok(preview) => {
                self.sync_file_input();
                if let Preview::Single { generation } = preview {
                    self.load_preview(generation);
                }
            }
            Err(e) => {
                if let Some(input) = self.view.input(ElementId::FileInput) {
                    input.set_value("");
                }
                self.notify(e.toast());
            }
        }
    }

    /// Ctrl+Shift+V: 非同期クリップボードから画像を読む
    pub(crate) async fn paste_from_clipboard(self: &Rc<Self>) {
        match bridge::read_image().await.and_then(|blob| {
            let mime = blob.type_();
            rename_blob(&blob, &mime)
        }) {
            Ok(file) => self.receive_pasted(file),
            Err(e) => {
                log::error!("clipboard paste failed: {}", e);
                self.notify(e.toast());
            }
        }
    }

    fn receive_pasted(self: &Rc<Self>, file: File) {
        self.receive_files(vec![file]);
        if !self.intake.borrow().selected().is_empty() {
            self.notify(Toast::success(ediscan_common::toast::MSG_IMAGE_PASTED));
        }
    }

    /// 有効なファイルだけをフォームの file input に戻す
    fn sync_file_input(&self) {
        let Some(input) = self.view.input(ElementId::FileInput) else {
            return;
        };
        let Ok(transfer) = DataTransfer::new() else {
            return;
        };
        for file in self.intake.borrow().selected() {
            if let Err(e) = transfer.items().add_with_file(&file.0) {
                log::warn!("could not attach {} to the form: {:?}", file.0.name(), e);
            }
        }
        input.set_files(transfer.files().as_ref());
    }

    fn load_preview(self: &Rc<Self>, generation: u64) {
        let Some(file) = self.intake.borrow().selected().first().cloned() else {
            return;
        };
        let this = Rc::clone(self);
        spawn_local(async move {
            let blob = gloo::file::Blob::from(web_sys::Blob::from(file.0.clone()));
            match gloo::file::futures::read_as_bytes(&blob).await {
                Ok(bytes) => {
                    let url = data_url(&file.0.type_(), &bytes);
                    this.intake.borrow().show_preview(&this.view, generation, &url);
                }
                Err(e) => log::warn!("preview read failed for {}: {}", file.0.name(), e),
            }
        });
    }
}

fn file_list(files: &FileList) -> Vec<File> {
    (0..files.length()).filter_map(|i| files.get(i)).collect()
}

/// 貼り付けデータから最初の画像ファイルを取り出す
fn image_from_transfer(data: &DataTransfer) -> Option<File> {
    let items = data.items();
    (0..items.length())
        .filter_map(|i| items.get(i))
        .filter(|item| item.kind() == "file" && item.type_().starts_with("image/"))
        .find_map(|item| item.get_as_file().ok().flatten())
}

/// タイムスタンプ付きの一意な名前でファイル化する
fn rename_blob(blob: &web_sys::Blob, mime: &str) -> Result<File> {
    let name = pasted_file_name(js_sys::Date::now() as u64, mime);
    let options = FilePropertyBag::new();
    options.set_type(mime);
    File::new_with_blob_sequence_and_options(&js_sys::Array::of1(blob), &name, &options)
        .map_err(|e| Error::Clipboard(format!("{:?}", e)))
}

//! 非同期クリップボードAPIのJavaScriptブリッジ

use ediscan_common::{Error, Result};
use wasm_bindgen::prelude::*;
use web_sys::Blob;

#[wasm_bindgen(module = "/js/clipboard-bridge.js")]
extern "C" {
    #[wasm_bindgen(js_name = "writeText", catch)]
    async fn write_text_js(text: &str) -> std::result::Result<JsValue, JsValue>;

    /// クリップボード先頭の画像Blob（無ければnull）
    #[wasm_bindgen(js_name = "readImage", catch)]
    async fn read_image_js() -> std::result::Result<JsValue, JsValue>;
}

pub async fn write_text(text: &str) -> Result<()> {
    write_text_js(text)
        .await
        .map(|_| ())
        .map_err(|e| Error::Clipboard(format!("{:?}", e)))
}

pub async fn read_image() -> Result<Blob> {
    let value = read_image_js()
        .await
        .map_err(|e| Error::Clipboard(format!("{:?}", e)))?;
    if value.is_null() || value.is_undefined() {
        return Err(Error::ClipboardEmpty);
    }
    value
        .dyn_into::<Blob>()
        .map_err(|_| Error::ClipboardEmpty)
}

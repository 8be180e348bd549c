//! EdiScan Upload/Result Coordinator (WASM)
//!
//! サーバーが描画したページにイベントを結び付ける。判断ロジックは
//! `ediscan_common` にあり、このクレートはDOM・タイマー・クリップボードを担当する。

mod app;
mod bridge;
mod result_page;
mod submit;
mod upload;

pub mod dom;
pub mod storage;

use gloo::events::EventListener;
use wasm_bindgen::prelude::*;

pub use app::{Coordinator, WebFile};

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() == "loading" {
        let target = document.clone();
        EventListener::once(&target, "DOMContentLoaded", move |_| {
            Coordinator::mount(document);
        })
        .forget();
    } else {
        Coordinator::mount(document);
    }
}

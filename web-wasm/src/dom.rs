//! `PageView` のDOM実装
//!
//! 要素はページ読み込み時に一度だけ解決して保持する。

use std::collections::HashMap;
use std::rc::Rc;

use ediscan_common::{ElementId, PageView};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlImageElement, HtmlInputElement};

#[derive(Clone)]
pub struct DomView {
    document: Document,
    elements: Rc<HashMap<ElementId, HtmlElement>>,
}

impl DomView {
    /// 固定要素と `batch_len` 件のバッチ項目を解決する
    pub fn new(document: Document, batch_len: usize) -> Self {
        let ids = ElementId::fixed()
            .into_iter()
            .chain((0..batch_len).map(ElementId::BatchItem));

        let mut elements = HashMap::new();
        for id in ids {
            if let Some(element) = lookup(&document, id) {
                elements.insert(id, element);
            }
        }
        log::debug!("resolved {} page element(s)", elements.len());

        Self {
            document,
            elements: Rc::new(elements),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn element(&self, id: ElementId) -> Option<&HtmlElement> {
        self.elements.get(&id)
    }

    pub fn input(&self, id: ElementId) -> Option<HtmlInputElement> {
        self.element(id)?.dyn_ref::<HtmlInputElement>().cloned()
    }
}

fn lookup(document: &Document, id: ElementId) -> Option<HtmlElement> {
    document
        .query_selector(&id.selector())
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()
}

impl PageView for DomView {
    fn exists(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    fn text(&self, id: ElementId) -> Option<String> {
        Some(self.element(id)?.text_content().unwrap_or_default())
    }

    fn set_text(&self, id: ElementId, text: &str) {
        if let Some(el) = self.element(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_html(&self, id: ElementId, html: &str) {
        if let Some(el) = self.element(id) {
            el.set_inner_html(html);
        }
    }

    fn add_class(&self, id: ElementId, class: &str) {
        if let Some(el) = self.element(id) {
            let _ = el.class_list().add_1(class);
        }
    }

    fn remove_class(&self, id: ElementId, class: &str) {
        if let Some(el) = self.element(id) {
            let _ = el.class_list().remove_1(class);
        }
    }

    fn set_disabled(&self, id: ElementId, disabled: bool) {
        if let Some(el) = self.element(id) {
            let _ = el.toggle_attribute_with_force("disabled", disabled);
        }
    }

    fn set_shown(&self, id: ElementId, shown: bool) {
        if let Some(el) = self.element(id) {
            let display = if shown { "block" } else { "none" };
            let _ = el.style().set_property("display", display);
        }
    }

    fn set_image_src(&self, id: ElementId, src: &str) {
        let Some(el) = self.element(id) else {
            return;
        };
        match el.dyn_ref::<HtmlImageElement>() {
            Some(img) => img.set_src(src),
            None => {
                let _ = el.set_attribute("src", src);
            }
        }
    }

    fn value(&self, id: ElementId) -> Option<String> {
        self.input(id).map(|input| input.value())
    }

    fn set_value(&self, id: ElementId, value: &str) {
        if let Some(input) = self.input(id) {
            input.set_value(value);
        }
    }

    fn set_checked(&self, id: ElementId, checked: bool) {
        if let Some(input) = self.input(id) {
            input.set_checked(checked);
        }
    }

    fn render_list(&self, id: ElementId, items: &[String]) {
        let Some(list) = self.element(id) else {
            return;
        };
        list.set_inner_html("");
        for item in items {
            if let Ok(li) = self.document.create_element("li") {
                li.set_text_content(Some(item));
                let _ = list.append_child(&li);
            }
        }
    }

    fn navigate(&self, path: &str) {
        if let Some(location) = self.document.location() {
            if let Err(e) = location.set_href(path) {
                log::error!("navigation to {} failed: {:?}", path, e);
            }
        }
    }
}

//! テスト用のメモリ上 `PageView`

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use crate::dom::{ElementId, PageView};

#[derive(Debug, Clone, Default)]
pub struct FakeElement {
    pub text: String,
    pub html: String,
    pub classes: BTreeSet<String>,
    pub disabled: bool,
    pub shown: Option<bool>,
    pub src: String,
    pub value: String,
    pub checked: bool,
    pub items: Vec<String>,
}

#[derive(Debug, Default)]
pub struct FakeView {
    elements: RefCell<BTreeMap<ElementId, FakeElement>>,
    touched: RefCell<Vec<ElementId>>,
    navigated: RefCell<Vec<String>>,
}

impl FakeView {
    pub fn empty() -> Self {
        Self::default()
    }

    /// 固定要素をすべて持つページ（バッチ項目は含まない）
    pub fn with_all() -> Self {
        let view = Self::default();
        for id in ElementId::fixed() {
            view.insert(id);
        }
        // 送信ボタンは初期状態で無効
        view.with(ElementId::SubmitButton, |e| e.disabled = true);
        view.with(ElementId::QuickButton, |e| e.disabled = true);
        view
    }

    pub fn insert(&self, id: ElementId) {
        self.elements.borrow_mut().entry(id).or_default();
    }

    pub fn get(&self, id: ElementId) -> FakeElement {
        self.elements.borrow().get(&id).cloned().unwrap_or_default()
    }

    pub fn text_of(&self, id: ElementId) -> String {
        self.get(id).text
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.get(id).classes.contains(class)
    }

    pub fn is_disabled(&self, id: ElementId) -> bool {
        self.get(id).disabled
    }

    pub fn touched(&self) -> Vec<ElementId> {
        self.touched.borrow().clone()
    }

    pub fn navigated(&self) -> Vec<String> {
        self.navigated.borrow().clone()
    }

    fn with(&self, id: ElementId, f: impl FnOnce(&mut FakeElement)) {
        if let Some(element) = self.elements.borrow_mut().get_mut(&id) {
            f(element);
            self.touched.borrow_mut().push(id);
        }
    }
}

impl PageView for FakeView {
    fn exists(&self, id: ElementId) -> bool {
        self.elements.borrow().contains_key(&id)
    }

    fn text(&self, id: ElementId) -> Option<String> {
        self.elements.borrow().get(&id).map(|e| e.text.clone())
    }

    fn set_text(&self, id: ElementId, text: &str) {
        self.with(id, |e| e.text = text.to_string());
    }

    fn set_html(&self, id: ElementId, html: &str) {
        self.with(id, |e| e.html = html.to_string());
    }

    fn add_class(&self, id: ElementId, class: &str) {
        self.with(id, |e| {
            e.classes.insert(class.to_string());
        });
    }

    fn remove_class(&self, id: ElementId, class: &str) {
        self.with(id, |e| {
            e.classes.remove(class);
        });
    }

    fn set_disabled(&self, id: ElementId, disabled: bool) {
        self.with(id, |e| e.disabled = disabled);
    }

    fn set_shown(&self, id: ElementId, shown: bool) {
        self.with(id, |e| e.shown = Some(shown));
    }

    fn set_image_src(&self, id: ElementId, src: &str) {
        self.with(id, |e| e.src = src.to_string());
    }

    fn value(&self, id: ElementId) -> Option<String> {
        self.elements.borrow().get(&id).map(|e| e.value.clone())
    }

    fn set_value(&self, id: ElementId, value: &str) {
        self.with(id, |e| e.value = value.to_string());
    }

    fn set_checked(&self, id: ElementId, checked: bool) {
        self.with(id, |e| e.checked = checked);
    }

    fn render_list(&self, id: ElementId, items: &[String]) {
        self.with(id, |e| e.items = items.to_vec());
    }

    fn navigate(&self, path: &str) {
        self.navigated.borrow_mut().push(path.to_string());
    }
}

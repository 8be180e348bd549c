//! トースト通知
//!
//! 表示は `PageView` 経由、消去タイマーはWASM側が持つ。

use crate::dom::{class, ElementId, PageView};

pub const MSG_UNSUPPORTED_FORMAT: &str = "Format non supporté";
pub const MSG_CLIPBOARD_FAILED: &str =
    "Impossible de copier. Sélectionnez le texte et utilisez Ctrl+C";
pub const MSG_CLIPBOARD_EMPTY: &str =
    "Aucune image dans le presse-papier. Essayez Ctrl+V sur la page";
pub const MSG_STORAGE_FAILED: &str = "Préférence non enregistrée";
pub const MSG_COPIED: &str = "Texte copié dans le presse-papier !";
pub const MSG_QUICK_COPIED: &str = "📋 Texte copié dans le presse-papier !";
pub const MSG_ALL_COPIED: &str = "📚 Tous les textes copiés !";
pub const MSG_DOWNLOADED: &str = "Fichier téléchargé !";
pub const MSG_AUTO_COPIED: &str = "⚡ Copie automatique effectuée !";
pub const MSG_IMAGE_PASTED: &str = "📋 Image collée depuis le presse-papier";

/// トースト種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✅",
            ToastKind::Error => "❌",
        }
    }
}

/// トースト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
        }
    }

    /// トーストを表示する（トースト要素が無ければ何もしない）
    pub fn show<V: PageView>(&self, view: &V) {
        if !view.exists(ElementId::Toast) {
            return;
        }
        view.set_text(ElementId::ToastMessage, &self.message);
        view.set_text(ElementId::ToastIcon, self.kind.icon());
        view.toggle_class(ElementId::Toast, class::SUCCESS, self.kind == ToastKind::Success);
        view.add_class(ElementId::Toast, class::VISIBLE);
    }
}

/// トーストを隠す
pub fn hide<V: PageView>(view: &V) {
    view.remove_class(ElementId::Toast, class::VISIBLE);
}

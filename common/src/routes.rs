//! 画面遷移先

use crate::dom::PageView;

pub const HOME: &str = "/";

/// 履歴エントリのページ（空のIDは `None`）
pub fn history_path(entry_id: &str) -> Option<String> {
    let id = entry_id.trim();
    if id.is_empty() {
        return None;
    }
    Some(format!("/history/{}", id))
}

/// 履歴エントリを開く
pub fn open_history<V: PageView>(view: &V, entry_id: &str) {
    match history_path(entry_id) {
        Some(path) => view.navigate(&path),
        None => log::warn!("history entry without id"),
    }
}

/// 結果を捨ててトップへ戻る
pub fn clear_all<V: PageView>(view: &V) {
    view.navigate(HOME);
}

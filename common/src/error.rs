//! エラー型定義

use thiserror::Error;

use crate::toast::Toast;

/// 共通エラー型
///
/// どのエラーもページを止めない。利用者にはトーストで通知する。
#[derive(Error, Debug)]
pub enum Error {
    #[error("unsupported format")]
    UnsupportedFormat,

    #[error("no file selected")]
    EmptySelection,

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("clipboard has no image")]
    ClipboardEmpty,

    #[error("storage error: {0}")]
    Storage(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// 利用者に見せるトースト
    pub fn toast(&self) -> Toast {
        match self {
            Error::UnsupportedFormat | Error::EmptySelection => {
                Toast::error(crate::toast::MSG_UNSUPPORTED_FORMAT)
            }
            Error::Clipboard(_) => Toast::error(crate::toast::MSG_CLIPBOARD_FAILED),
            Error::ClipboardEmpty => Toast::error(crate::toast::MSG_CLIPBOARD_EMPTY),
            Error::Storage(_) => Toast::error(crate::toast::MSG_STORAGE_FAILED),
            Error::Json(_) => Toast::error(crate::toast::MSG_STORAGE_FAILED),
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

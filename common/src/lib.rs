//! EdiScan UI Common Library
//!
//! アップロード/結果画面の判断ロジック。DOMには `PageView` 経由でのみ触れるため、
//! ブラウザなしでテストできる。

pub mod config;
pub mod dom;
pub mod error;
pub mod intake;
pub mod preferences;
pub mod results;
pub mod routes;
pub mod shortcuts;
pub mod submission;
pub mod toast;
pub mod types;

#[cfg(test)]
mod fake_view;

pub use config::UiConfig;
pub use dom::{ElementId, PageView};
pub use error::{Error, Result};
pub use intake::{Candidate, Intake, Preview};
pub use preferences::{AutoCopyPreference, MemoryStore, PreferenceStore};
pub use results::{BatchResults, CopyButton, ImageTab, ResultsController};
pub use shortcuts::{KeyChord, Shortcut};
pub use submission::{ProgressAnimation, StepFrame, SubmitMode};
pub use toast::{Toast, ToastKind};
pub use types::{BatchEntry, BatchStats};

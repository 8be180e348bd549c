//! フォーム送信と進捗表示
//!
//! 進捗アニメーションは見た目だけ。実際の処理完了はページ遷移で分かるので、
//! 表示が先に終わることも、遷移の方が先に来ることもある。

use crate::config::UiConfig;
use crate::dom::{class, ElementId, PageView, STEP_COUNT};

/// 送信モード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    /// 前処理を省略する
    Quick,
    Standard,
}

impl SubmitMode {
    /// hiddenフィールドの値から判定（"on" 以外は通常）
    pub fn from_flag(flag: &str) -> Self {
        if flag == "on" {
            SubmitMode::Quick
        } else {
            SubmitMode::Standard
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            SubmitMode::Quick => "on",
            SubmitMode::Standard => "off",
        }
    }

    pub fn step_delay_ms(&self, config: &UiConfig) -> u32 {
        match self {
            SubmitMode::Quick => config.quick_step_ms,
            SubmitMode::Standard => config.standard_step_ms,
        }
    }

    pub fn status_message(&self, file_count: usize) -> String {
        match (self, file_count) {
            (SubmitMode::Quick, 0 | 1) => "⚡ Scan rapide en cours...".to_string(),
            (SubmitMode::Quick, n) => format!("⚡ Scan rapide de {} images en cours...", n),
            (SubmitMode::Standard, 0 | 1) => "Analyse en cours...".to_string(),
            (SubmitMode::Standard, n) => format!("Analyse de {} images en cours...", n),
        }
    }

    /// 2番目（前処理）ステップの表示
    pub fn preprocessing_label(&self) -> &'static str {
        match self {
            SubmitMode::Quick => "⏭️ Prétraitement ignoré",
            SubmitMode::Standard => "✨ Prétraitement",
        }
    }
}

/// 送信ボタンの種類をhiddenフィールドに反映する
pub fn set_mode<V: PageView>(view: &V, mode: SubmitMode) {
    view.set_value(ElementId::QuickModeInput, mode.flag());
}

/// 信頼度スライダーの表示 (0.456 -> "46%")
pub fn confidence_label(raw: &str) -> Option<String> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(format!("{}%", (value * 100.0).round() as i64))
}

/// 1ティック分の変化
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepFrame {
    pub done: Option<usize>,
    pub active: Option<usize>,
}

/// 4ステップの進捗アニメーション
///
/// ティックごとに直前のステップを完了、次のステップを実行中にする。
/// 最後のステップの後にもう1ティックあり、そこで最後が完了になる。
#[derive(Debug, Clone)]
pub struct ProgressAnimation {
    mode: SubmitMode,
    delay_ms: u32,
    current: usize,
    finished: bool,
}

impl ProgressAnimation {
    pub fn new(mode: SubmitMode, config: &UiConfig) -> Self {
        Self {
            mode,
            delay_ms: mode.step_delay_ms(config),
            current: 0,
            finished: false,
        }
    }

    pub fn mode(&self) -> SubmitMode {
        self.mode
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// 全ステップの状態を消し、前処理ラベルを設定する
    pub fn reset<V: PageView>(&self, view: &V) {
        for i in 0..STEP_COUNT {
            view.remove_class(ElementId::Step(i), class::ACTIVE);
            view.remove_class(ElementId::Step(i), class::DONE);
        }
        view.set_text(ElementId::Step(1), self.mode.preprocessing_label());
    }

    pub fn apply<V: PageView>(view: &V, frame: StepFrame) {
        if let Some(done) = frame.done {
            view.remove_class(ElementId::Step(done), class::ACTIVE);
            view.add_class(ElementId::Step(done), class::DONE);
        }
        if let Some(active) = frame.active {
            view.add_class(ElementId::Step(active), class::ACTIVE);
        }
    }
}

impl Iterator for ProgressAnimation {
    type Item = StepFrame;

    fn next(&mut self) -> Option<StepFrame> {
        if self.finished {
            return None;
        }
        let done = self.current.checked_sub(1);
        let active = if self.current < STEP_COUNT {
            self.current += 1;
            Some(self.current - 1)
        } else {
            self.finished = true;
            None
        };
        Some(StepFrame { done, active })
    }
}

/// 送信開始: 状態文言とオーバーレイを出し、アニメーションを返す
///
/// 戻り値は呼び出し側が投げっぱなしのタイマーで進める。
pub fn begin<V: PageView>(view: &V, file_count: usize, config: &UiConfig) -> ProgressAnimation {
    let flag = view.value(ElementId::QuickModeInput).unwrap_or_default();
    let mode = SubmitMode::from_flag(&flag);
    log::info!("submitting {} file(s) in {:?} mode", file_count, mode);

    view.set_text(ElementId::LoadingText, &mode.status_message(file_count));
    view.add_class(ElementId::Loading, class::VISIBLE);

    let animation = ProgressAnimation::new(mode, config);
    animation.reset(view);
    animation
}

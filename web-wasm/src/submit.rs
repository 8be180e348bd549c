//! 送信と進捗アニメーション

use std::rc::Rc;

use ediscan_common::submission::{self, confidence_label};
use ediscan_common::{ElementId, PageView, ProgressAnimation, SubmitMode};
use futures::StreamExt;
use gloo::timers::future::IntervalStream;
use wasm_bindgen_futures::spawn_local;

use crate::app::Coordinator;
use crate::dom::DomView;

impl Coordinator {
    pub(crate) fn wire_submit(self: &Rc<Self>) {
        {
            let view = self.view.clone();
            self.listen(ElementId::QuickButton, "click", move |_| {
                submission::set_mode(&view, SubmitMode::Quick);
            });
        }

        {
            let view = self.view.clone();
            self.listen(ElementId::SubmitButton, "click", move |_| {
                submission::set_mode(&view, SubmitMode::Standard);
            });
        }

        {
            let this = Rc::clone(self);
            // フォームは通常どおり送信させる（preventDefaultしない）
            self.listen(ElementId::UploadForm, "submit", move |_| {
                let count = this.intake.borrow().selected().len();
                let animation = submission::begin(&this.view, count, &this.config);
                spawn_local(animate(this.view.clone(), animation));
            });
        }

        let view = self.view.clone();
        self.listen(ElementId::ConfidenceSlider, "input", move |_| {
            let raw = view.value(ElementId::ConfidenceSlider).unwrap_or_default();
            if let Some(label) = confidence_label(&raw) {
                view.set_text(ElementId::ConfidenceValue, &label);
            }
        });
    }
}

/// 投げっぱなしの装飾タイマー
///
/// 取り消しは無い。ページ遷移でタスクごと消える。
async fn animate(view: DomView, animation: ProgressAnimation) {
    let mut ticks = IntervalStream::new(animation.delay_ms());
    for frame in animation {
        if ticks.next().await.is_none() {
            break;
        }
        ProgressAnimation::apply(&view, frame);
    }
}

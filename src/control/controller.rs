use std::time::Instant;
use tracing::{debug, info};

use crate::classify::{Classifier, Label};
use crate::config::{ControllerSettings, Variant};
use crate::error::Result;
use crate::input::InputInjector;
use crate::pose::KeypointSnapshot;

use super::confirm::ConfirmationFilter;
use super::cooldown::CooldownGate;
use super::dispatch::{ActionDispatcher, ControlEvent};
use super::scroll::{ScrollEvent, ScrollTracker};

/// 1ティックの結果（描画用）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    pub label: Label,
    /// このティック終了時点でスクロールモード中か
    pub scroll_mode: bool,
    /// 実際に送出したイベント
    pub fired: Option<ControlEvent>,
}

impl TickOutcome {
    fn idle(label: Label, scroll_mode: bool) -> Self {
        Self {
            label,
            scroll_mode,
            fired: None,
        }
    }
}

/// 分類 → フィルタ → ディスパッチの状態を全て持つコントローラ
///
/// 状態はこの構造体だけが所有し、`tick` で毎フレーム更新する。
pub struct Controller {
    settings: ControllerSettings,
    classifier: Classifier,
    filter: ConfirmationFilter,
    cooldown: CooldownGate,
    scroll: Option<ScrollTracker>,
    dispatcher: ActionDispatcher,
}

impl Controller {
    pub fn new(settings: ControllerSettings) -> Self {
        let scroll = settings
            .variant
            .has_continuous_mode()
            .then(|| ScrollTracker::new(&settings.scroll));
        Self {
            classifier: Classifier::new(settings.thumb_side, settings.pose),
            filter: ConfirmationFilter::new(settings.confirm_frames),
            cooldown: CooldownGate::new(settings.cooldown),
            dispatcher: ActionDispatcher::new(settings.variant, settings.shortcuts),
            scroll,
            settings,
        }
    }

    pub fn variant(&self) -> Variant {
        self.settings.variant
    }

    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    pub fn is_scrolling(&self) -> bool {
        self.scroll.as_ref().is_some_and(|s| s.is_active())
    }

    pub fn filter(&self) -> &ConfirmationFilter {
        &self.filter
    }

    /// 1フレーム分の処理
    pub fn tick<I: InputInjector>(
        &mut self,
        snapshot: Option<&KeypointSnapshot>,
        now: Instant,
        injector: &mut I,
    ) -> Result<TickOutcome> {
        let Some(snapshot) = snapshot else {
            self.lose_subject();
            return Ok(TickOutcome::idle(Label::None, false));
        };

        let label = self.classifier.classify(snapshot);
        match snapshot {
            KeypointSnapshot::Hand(hand) => {
                debug!(label = %label, pinch = hand.pinch_distance(), "classified");
            }
            KeypointSnapshot::Body(_) => debug!(label = %label, "classified"),
        }

        if let Some(tracker) = self.scroll.as_mut() {
            match tracker.observe(label, snapshot.hand_center()) {
                ScrollEvent::Entered => {
                    self.filter.reset();
                    info!("scroll mode: ON");
                    return Ok(TickOutcome::idle(label, true));
                }
                ScrollEvent::Holding => return Ok(TickOutcome::idle(label, true)),
                ScrollEvent::Scrolled(amount) => {
                    let event = ControlEvent::Continuous(amount);
                    self.dispatcher.dispatch(event, injector)?;
                    return Ok(TickOutcome {
                        label,
                        scroll_mode: true,
                        fired: Some(event),
                    });
                }
                ScrollEvent::Exited => {
                    self.filter.reset();
                    info!("scroll mode: OFF");
                }
                ScrollEvent::Idle => {}
            }
        }

        let fired = self.discrete(label, now, injector)?;
        Ok(TickOutcome {
            label,
            scroll_mode: false,
            fired,
        })
    }

    /// 確定 → 重複チェック → クールダウンの順に通ったものだけ送出する
    fn discrete<I: InputInjector>(
        &mut self,
        label: Label,
        now: Instant,
        injector: &mut I,
    ) -> Result<Option<ControlEvent>> {
        let Some(confirmed) = self.filter.observe(label) else {
            return Ok(None);
        };
        if !self.dispatcher.accepts(confirmed) || !self.cooldown.try_fire(now) {
            return Ok(None);
        }

        let event = ControlEvent::Discrete(confirmed);
        if self.dispatcher.dispatch(event, injector)? {
            self.filter.reset();
            Ok(Some(event))
        } else {
            Ok(None)
        }
    }

    /// 被写体を見失ったときの後始末
    fn lose_subject(&mut self) {
        if let Some(tracker) = self.scroll.as_mut() {
            if tracker.exit() {
                info!("scroll mode: OFF");
            }
        }
        self.filter.reset();
        self.dispatcher.reset();
    }
}

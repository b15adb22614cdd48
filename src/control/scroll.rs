use crate::classify::{HandGesture, Label};
use crate::config::ScrollConfig;
use crate::pose::Landmark;

/// スクロールモードの状態。アンカーは Active の間だけ存在する
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollState {
    Inactive,
    Active { anchor: Landmark },
}

/// 1フレーム分の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollEvent {
    /// 連続モード外で、何もしない
    Idle,
    /// 連続モードに入った
    Entered,
    /// 連続モード中だが移動量がしきい値以下
    Holding,
    /// スクロール量（符号付き）
    Scrolled(i32),
    /// 連続モードを抜けた
    Exited,
}

/// 握りこぶしを保持している間、手の上下移動をスクロールに変換する
pub struct ScrollTracker {
    hold: Label,
    state: ScrollState,
    scale_factor: f32,
    motion_threshold: f32,
    sensitivity: f32,
}

impl ScrollTracker {
    pub fn new(config: &ScrollConfig) -> Self {
        Self {
            hold: Label::Hand(HandGesture::Fist),
            state: ScrollState::Inactive,
            scale_factor: config.scale_factor,
            motion_threshold: config.motion_threshold,
            sensitivity: config.sensitivity,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, ScrollState::Active { .. })
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// ラベルと手の中心位置を1フレーム分反映する
    ///
    /// 移動量はしきい値を超えたかどうかに関係なく毎フレームアンカーを更新するので、
    /// 入った時点からの累積ではなくフレーム間の差分になる。
    pub fn observe(&mut self, label: Label, position: Option<Landmark>) -> ScrollEvent {
        if label != self.hold {
            return if self.exit() { ScrollEvent::Exited } else { ScrollEvent::Idle };
        }
        let Some(current) = position else {
            return if self.exit() { ScrollEvent::Exited } else { ScrollEvent::Idle };
        };

        match self.state {
            ScrollState::Inactive => {
                self.state = ScrollState::Active { anchor: current };
                ScrollEvent::Entered
            }
            ScrollState::Active { anchor } => {
                self.state = ScrollState::Active { anchor: current };
                let dy = (current.y - anchor.y) * self.scale_factor;
                if dy.abs() > self.motion_threshold {
                    ScrollEvent::Scrolled((dy * self.sensitivity).round() as i32)
                } else {
                    ScrollEvent::Holding
                }
            }
        }
    }

    /// 強制的に Inactive へ。直前が Active なら true
    pub fn exit(&mut self) -> bool {
        let was_active = self.is_active();
        self.state = ScrollState::Inactive;
        was_active
    }
}

use crate::error::Result;

use super::keypoint::KeypointSnapshot;

/// 検出器の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorProfile {
    /// 片手のランドマーク
    Hand,
    /// 体の姿勢
    Body,
}

impl DetectorProfile {
    /// (検出しきい値, 追跡しきい値)
    pub fn default_thresholds(&self) -> (f32, f32) {
        match self {
            DetectorProfile::Hand => (0.7, 0.7),
            DetectorProfile::Body => (0.5, 0.5),
        }
    }
}

/// フレームからキーポイントを取り出す外部検出器
///
/// 被写体が見つからないフレームは `Ok(None)`。
pub trait KeypointDetector<F> {
    fn detect(&mut self, frame: &F) -> Result<Option<KeypointSnapshot>>;
}

/// 検出/追跡しきい値の切り替え
///
/// 前フレームで被写体を追跡していれば追跡しきい値、そうでなければ検出しきい値を使う。
#[derive(Debug, Clone)]
pub struct PresenceGate {
    detection: f32,
    tracking: f32,
    tracking_active: bool,
}

impl PresenceGate {
    pub fn new(detection: f32, tracking: f32) -> Self {
        Self {
            detection,
            tracking,
            tracking_active: false,
        }
    }

    pub fn threshold(&self) -> f32 {
        if self.tracking_active {
            self.tracking
        } else {
            self.detection
        }
    }

    /// スコアが現在のしきい値を満たすか判定し、追跡状態を更新する
    pub fn accept(&mut self, score: f32) -> bool {
        let present = score >= self.threshold();
        self.tracking_active = present;
        present
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking_active
    }
}

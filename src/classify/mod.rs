//! Frame-level geometric classification.
//!
//! Pure functions over a single snapshot: no history, no timing.

pub mod body;
pub mod hand;
pub mod label;

pub use body::classify_body;
pub use hand::{classify_hand, count_extended_fingers, ThumbSide};
pub use label::{HandGesture, Label, PoseAction};

use crate::config::PoseThresholds;
use crate::pose::KeypointSnapshot;

/// スナップショット → ラベルの変換器
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    pub thumb_side: ThumbSide,
    pub pose: PoseThresholds,
}

impl Classifier {
    pub fn new(thumb_side: ThumbSide, pose: PoseThresholds) -> Self {
        Self { thumb_side, pose }
    }

    pub fn classify(&self, snapshot: &KeypointSnapshot) -> Label {
        match snapshot {
            KeypointSnapshot::Hand(hand) => Label::Hand(classify_hand(hand, self.thumb_side)),
            KeypointSnapshot::Body(body) => Label::Pose(classify_body(body, &self.pose)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::{BodyLandmark, BodyPose, HandLandmark, HandPose, Landmark};

    #[test]
    fn test_hand_snapshot_gives_hand_label() {
        // 全点同じ位置: どの指も伸びていない
        let hand = HandPose::new([Landmark::new(0.5, 0.5); HandLandmark::COUNT]);
        let label = Classifier::default().classify(&KeypointSnapshot::Hand(hand));
        assert_eq!(label, Label::Hand(HandGesture::Fist));
    }

    #[test]
    fn test_body_snapshot_gives_pose_label() {
        let body = BodyPose::new([Landmark::new(0.5, 0.5); BodyLandmark::COUNT]);
        let snapshot = KeypointSnapshot::Body(body);
        let label = Classifier::default().classify(&snapshot);
        // 全点が一致すると手首が反対の肩のすぐ横にあり、鼻と同じ高さなので交差ではない
        assert_eq!(label, Label::Pose(PoseAction::Neutral));
    }
}

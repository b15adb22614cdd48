use crate::pose::{HandLandmark, HandPose};

use super::label::HandGesture;

/// 親指の伸展を判定する向き
///
/// 鏡像フレームでは、右手の親指は先端が関節より左（x が小さい）にあるとき伸びている。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThumbSide {
    #[default]
    Left,
    Right,
}

/// 伸びている指の本数
///
/// - 親指: 先端 (4) のx座標が第2関節 (3) より外側
/// - 他の4本: 先端のy座標が2関節下より上（小さい）
pub fn count_extended_fingers(hand: &HandPose, thumb_side: ThumbSide) -> usize {
    let tip = hand.get(HandLandmark::ThumbTip);
    let joint = hand.get(HandLandmark::ThumbIp);
    let thumb = match thumb_side {
        ThumbSide::Left => tip.x < joint.x,
        ThumbSide::Right => tip.x > joint.x,
    };

    let fingers = HandLandmark::FINGER_TIPS
        .iter()
        .filter(|(tip, pip)| hand.get(*tip).y < hand.get(*pip).y)
        .count();

    fingers + usize::from(thumb)
}

pub fn classify_hand(hand: &HandPose, thumb_side: ThumbSide) -> HandGesture {
    HandGesture::from_count(count_extended_fingers(hand, thumb_side))
}

use crate::pose::{BodyLandmark, HandLandmark, KeypointSnapshot};

/// 手の接続定義 (開始ランドマーク, 終了ランドマーク)
pub const HAND_CONNECTIONS: [(HandLandmark, HandLandmark); 21] = [
    // 親指
    (HandLandmark::Wrist, HandLandmark::ThumbCmc),
    (HandLandmark::ThumbCmc, HandLandmark::ThumbMcp),
    (HandLandmark::ThumbMcp, HandLandmark::ThumbIp),
    (HandLandmark::ThumbIp, HandLandmark::ThumbTip),
    // 人差し指
    (HandLandmark::Wrist, HandLandmark::IndexMcp),
    (HandLandmark::IndexMcp, HandLandmark::IndexPip),
    (HandLandmark::IndexPip, HandLandmark::IndexDip),
    (HandLandmark::IndexDip, HandLandmark::IndexTip),
    // 中指
    (HandLandmark::MiddleMcp, HandLandmark::MiddlePip),
    (HandLandmark::MiddlePip, HandLandmark::MiddleDip),
    (HandLandmark::MiddleDip, HandLandmark::MiddleTip),
    // 薬指
    (HandLandmark::RingMcp, HandLandmark::RingPip),
    (HandLandmark::RingPip, HandLandmark::RingDip),
    (HandLandmark::RingDip, HandLandmark::RingTip),
    // 小指
    (HandLandmark::Wrist, HandLandmark::PinkyMcp),
    (HandLandmark::PinkyMcp, HandLandmark::PinkyPip),
    (HandLandmark::PinkyPip, HandLandmark::PinkyDip),
    (HandLandmark::PinkyDip, HandLandmark::PinkyTip),
    // 手のひら
    (HandLandmark::IndexMcp, HandLandmark::MiddleMcp),
    (HandLandmark::MiddleMcp, HandLandmark::RingMcp),
    (HandLandmark::RingMcp, HandLandmark::PinkyMcp),
];

/// 骨格の接続定義 (開始キーポイント, 終了キーポイント)
pub const SKELETON_CONNECTIONS: [(BodyLandmark, BodyLandmark); 16] = [
    // 顔
    (BodyLandmark::LeftEar, BodyLandmark::LeftEye),
    (BodyLandmark::LeftEye, BodyLandmark::Nose),
    (BodyLandmark::Nose, BodyLandmark::RightEye),
    (BodyLandmark::RightEye, BodyLandmark::RightEar),
    // 上半身
    (BodyLandmark::LeftShoulder, BodyLandmark::RightShoulder),
    (BodyLandmark::LeftShoulder, BodyLandmark::LeftElbow),
    (BodyLandmark::LeftElbow, BodyLandmark::LeftWrist),
    (BodyLandmark::RightShoulder, BodyLandmark::RightElbow),
    (BodyLandmark::RightElbow, BodyLandmark::RightWrist),
    // 胴体
    (BodyLandmark::LeftShoulder, BodyLandmark::LeftHip),
    (BodyLandmark::RightShoulder, BodyLandmark::RightHip),
    (BodyLandmark::LeftHip, BodyLandmark::RightHip),
    // 下半身
    (BodyLandmark::LeftHip, BodyLandmark::LeftKnee),
    (BodyLandmark::LeftKnee, BodyLandmark::LeftAnkle),
    (BodyLandmark::RightHip, BodyLandmark::RightKnee),
    (BodyLandmark::RightKnee, BodyLandmark::RightAnkle),
];

/// ランドマークの色 (RGB)
pub const KEYPOINT_COLOR: u32 = 0x00FF00; // 緑

/// 接続線の色 (RGB)
pub const SKELETON_COLOR: u32 = 0xFFFF00; // 黄色

/// スナップショットに対応する接続をインデックスの組で返す
pub fn connections(snapshot: &KeypointSnapshot) -> Vec<(usize, usize)> {
    match snapshot {
        KeypointSnapshot::Hand(_) => HAND_CONNECTIONS
            .iter()
            .map(|(a, b)| (*a as usize, *b as usize))
            .collect(),
        KeypointSnapshot::Body(_) => SKELETON_CONNECTIONS
            .iter()
            .map(|(a, b)| (*a as usize, *b as usize))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::{BodyPose, HandPose, Landmark};

    #[test]
    fn test_connections_stay_in_range() {
        let hand = KeypointSnapshot::Hand(HandPose::new([Landmark::default(); HandLandmark::COUNT]));
        let body = KeypointSnapshot::Body(BodyPose::new([Landmark::default(); BodyLandmark::COUNT]));
        for snapshot in [hand, body] {
            let n = snapshot.landmarks().len();
            let pairs = connections(&snapshot);
            assert!(!pairs.is_empty());
            assert!(pairs.iter().all(|(a, b)| *a < n && *b < n));
        }
    }
}

use crate::config::PoseThresholds;
use crate::pose::{BodyLandmark, BodyPose};

use super::label::PoseAction;

/// 上半身キーポイントから動作を判定
///
/// 上から順に評価し、最初に一致したものを返す。
/// 両手挙げは片手挙げより先に判定する（後に置くと片手の判定に隠れて到達しない）。
pub fn classify_body(body: &BodyPose, thresholds: &PoseThresholds) -> PoseAction {
    let left_shoulder = body.get(BodyLandmark::LeftShoulder);
    let right_shoulder = body.get(BodyLandmark::RightShoulder);
    let left_wrist = body.get(BodyLandmark::LeftWrist);
    let right_wrist = body.get(BodyLandmark::RightWrist);
    let nose = body.get(BodyLandmark::Nose);

    let left_up = left_wrist.y < left_shoulder.y - thresholds.hand_up_margin;
    let right_up = right_wrist.y < right_shoulder.y - thresholds.hand_up_margin;

    if left_up && right_up {
        return PoseAction::BothHandsUp;
    }
    if left_up {
        return PoseAction::LeftHandUp;
    }
    if right_up {
        return PoseAction::RightHandUp;
    }

    if left_shoulder.y < right_shoulder.y - thresholds.lean_margin {
        return PoseAction::LeanLeft;
    }
    if right_shoulder.y < left_shoulder.y - thresholds.lean_margin {
        return PoseAction::LeanRight;
    }

    let crossed = (left_wrist.x - right_shoulder.x).abs() < thresholds.cross_margin
        && (right_wrist.x - left_shoulder.x).abs() < thresholds.cross_margin
        && left_wrist.y > nose.y
        && right_wrist.y > nose.y;
    if crossed {
        return PoseAction::ArmsCrossed;
    }

    PoseAction::Neutral
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::Landmark;

    /// 肩の高さ0.4、手首は腰の横（0.7）に下ろした立ち姿勢
    fn standing() -> BodyPose {
        let mut landmarks = [Landmark::new(0.5, 0.5); BodyLandmark::COUNT];
        landmarks[BodyLandmark::Nose as usize] = Landmark::new(0.5, 0.2);
        landmarks[BodyLandmark::LeftShoulder as usize] = Landmark::new(0.6, 0.4);
        landmarks[BodyLandmark::RightShoulder as usize] = Landmark::new(0.4, 0.4);
        landmarks[BodyLandmark::LeftElbow as usize] = Landmark::new(0.65, 0.55);
        landmarks[BodyLandmark::RightElbow as usize] = Landmark::new(0.35, 0.55);
        landmarks[BodyLandmark::LeftWrist as usize] = Landmark::new(0.8, 0.7);
        landmarks[BodyLandmark::RightWrist as usize] = Landmark::new(0.2, 0.7);
        BodyPose::new(landmarks)
    }

    fn set(body: &mut BodyPose, index: BodyLandmark, x: f32, y: f32) {
        body.landmarks[index as usize] = Landmark::new(x, y);
    }

    #[test]
    fn test_neutral() {
        assert_eq!(classify_body(&standing(), &PoseThresholds::default()), PoseAction::Neutral);
    }

    #[test]
    fn test_single_hand_up() {
        let t = PoseThresholds::default();
        let mut body = standing();
        set(&mut body, BodyLandmark::LeftWrist, 0.7, 0.2);
        assert_eq!(classify_body(&body, &t), PoseAction::LeftHandUp);

        let mut body = standing();
        set(&mut body, BodyLandmark::RightWrist, 0.3, 0.2);
        assert_eq!(classify_body(&body, &t), PoseAction::RightHandUp);
    }

    #[test]
    fn test_both_hands_up_takes_priority() {
        let mut body = standing();
        set(&mut body, BodyLandmark::LeftWrist, 0.7, 0.2);
        set(&mut body, BodyLandmark::RightWrist, 0.3, 0.2);
        assert_eq!(classify_body(&body, &PoseThresholds::default()), PoseAction::BothHandsUp);
    }

    #[test]
    fn test_hand_up_needs_margin() {
        let mut body = standing();
        // 肩より0.05だけ上ではまだ挙げていない
        set(&mut body, BodyLandmark::LeftWrist, 0.7, 0.35);
        assert_eq!(classify_body(&body, &PoseThresholds::default()), PoseAction::Neutral);
    }

    #[test]
    fn test_lean() {
        let t = PoseThresholds::default();
        let mut body = standing();
        set(&mut body, BodyLandmark::LeftShoulder, 0.6, 0.32);
        assert_eq!(classify_body(&body, &t), PoseAction::LeanLeft);

        let mut body = standing();
        set(&mut body, BodyLandmark::RightShoulder, 0.4, 0.32);
        assert_eq!(classify_body(&body, &t), PoseAction::LeanRight);
    }

    #[test]
    fn test_arms_crossed() {
        let mut body = standing();
        set(&mut body, BodyLandmark::LeftWrist, 0.45, 0.55);
        set(&mut body, BodyLandmark::RightWrist, 0.55, 0.55);
        assert_eq!(classify_body(&body, &PoseThresholds::default()), PoseAction::ArmsCrossed);
    }

    #[test]
    fn test_crossed_wrists_above_nose_is_not_crossed() {
        let mut body = standing();
        set(&mut body, BodyLandmark::Nose, 0.5, 0.6);
        set(&mut body, BodyLandmark::LeftWrist, 0.45, 0.55);
        set(&mut body, BodyLandmark::RightWrist, 0.55, 0.55);
        assert_eq!(classify_body(&body, &PoseThresholds::default()), PoseAction::Neutral);
    }

    #[test]
    fn test_custom_thresholds() {
        let mut body = standing();
        set(&mut body, BodyLandmark::LeftWrist, 0.7, 0.35);
        let loose = PoseThresholds {
            hand_up_margin: 0.02,
            ..PoseThresholds::default()
        };
        assert_eq!(classify_body(&body, &loose), PoseAction::LeftHandUp);
    }
}

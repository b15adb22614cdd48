use std::fmt;

/// 指の本数から決まる手のジェスチャー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandGesture {
    Fist,
    One,
    Two,
    Three,
    Four,
    Five,
    Unknown,
}

impl HandGesture {
    /// 伸びている指の本数から変換
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => Self::Fist,
            1 => Self::One,
            2 => Self::Two,
            3 => Self::Three,
            4 => Self::Four,
            5 => Self::Five,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fist => "fist",
            Self::One => "one",
            Self::Two => "two",
            Self::Three => "three",
            Self::Four => "four",
            Self::Five => "five",
            Self::Unknown => "unknown",
        }
    }
}

/// 体の姿勢から決まる動作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoseAction {
    LeftHandUp,
    RightHandUp,
    BothHandsUp,
    LeanLeft,
    LeanRight,
    ArmsCrossed,
    Neutral,
}

impl PoseAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LeftHandUp => "left_hand_up",
            Self::RightHandUp => "right_hand_up",
            Self::BothHandsUp => "both_hands_up",
            Self::LeanLeft => "lean_left",
            Self::LeanRight => "lean_right",
            Self::ArmsCrossed => "arms_crossed",
            Self::Neutral => "neutral",
        }
    }
}

/// 1フレームにつき1つのラベル。被写体なしは `None`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Hand(HandGesture),
    Pose(PoseAction),
    None,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Hand(gesture) => gesture.as_str(),
            Label::Pose(action) => action.as_str(),
            Label::None => "none",
        }
    }

    /// unknown / neutral / none は決して操作にならない
    pub fn is_actionable(&self) -> bool {
        !matches!(
            self,
            Label::Hand(HandGesture::Unknown) | Label::Pose(PoseAction::Neutral) | Label::None
        )
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

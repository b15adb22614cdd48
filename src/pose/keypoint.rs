/// MediaPipe Hands の 21 ランドマークインデックス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum HandLandmark {
    Wrist = 0,
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,
    IndexMcp = 5,
    IndexPip = 6,
    IndexDip = 7,
    IndexTip = 8,
    MiddleMcp = 9,
    MiddlePip = 10,
    MiddleDip = 11,
    MiddleTip = 12,
    RingMcp = 13,
    RingPip = 14,
    RingDip = 15,
    RingTip = 16,
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

impl HandLandmark {
    pub const COUNT: usize = 21;

    /// 親指以外の指先と、その2関節下（PIP）の組
    pub const FINGER_TIPS: [(HandLandmark, HandLandmark); 4] = [
        (HandLandmark::IndexTip, HandLandmark::IndexPip),
        (HandLandmark::MiddleTip, HandLandmark::MiddlePip),
        (HandLandmark::RingTip, HandLandmark::RingPip),
        (HandLandmark::PinkyTip, HandLandmark::PinkyPip),
    ];
}

/// MoveNet の 17 キーポイントインデックス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum BodyLandmark {
    Nose = 0,
    LeftEye = 1,
    RightEye = 2,
    LeftEar = 3,
    RightEar = 4,
    LeftShoulder = 5,
    RightShoulder = 6,
    LeftElbow = 7,
    RightElbow = 8,
    LeftWrist = 9,
    RightWrist = 10,
    LeftHip = 11,
    RightHip = 12,
    LeftKnee = 13,
    RightKnee = 14,
    LeftAnkle = 15,
    RightAnkle = 16,
}

impl BodyLandmark {
    pub const COUNT: usize = 17;

    /// 姿勢判定に使う上半身キーポイント
    pub const UPPER_BODY: [BodyLandmark; 7] = [
        BodyLandmark::Nose,
        BodyLandmark::LeftShoulder,
        BodyLandmark::RightShoulder,
        BodyLandmark::LeftElbow,
        BodyLandmark::RightElbow,
        BodyLandmark::LeftWrist,
        BodyLandmark::RightWrist,
    ];
}

/// 正規化座標 (0.0〜1.0) の2D点
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// ユークリッド距離（正規化座標）
    pub fn distance(&self, other: &Landmark) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// ピクセル座標に変換
    pub fn to_pixel(&self, width: u32, height: u32) -> (i32, i32) {
        let px = (self.x * width as f32) as i32;
        let py = (self.y * height as f32) as i32;
        (px, py)
    }
}

/// 片手分のランドマーク
#[derive(Debug, Clone, PartialEq)]
pub struct HandPose {
    pub landmarks: [Landmark; HandLandmark::COUNT],
}

impl HandPose {
    pub fn new(landmarks: [Landmark; HandLandmark::COUNT]) -> Self {
        Self { landmarks }
    }

    pub fn get(&self, index: HandLandmark) -> &Landmark {
        &self.landmarks[index as usize]
    }

    /// 手の中心。手首の位置を使う
    pub fn center(&self) -> Landmark {
        *self.get(HandLandmark::Wrist)
    }

    /// 親指先と人差し指先の距離
    pub fn pinch_distance(&self) -> f32 {
        self.get(HandLandmark::ThumbTip)
            .distance(self.get(HandLandmark::IndexTip))
    }
}

/// 一人分の体キーポイント
#[derive(Debug, Clone, PartialEq)]
pub struct BodyPose {
    pub landmarks: [Landmark; BodyLandmark::COUNT],
}

impl BodyPose {
    pub fn new(landmarks: [Landmark; BodyLandmark::COUNT]) -> Self {
        Self { landmarks }
    }

    pub fn get(&self, index: BodyLandmark) -> &Landmark {
        &self.landmarks[index as usize]
    }
}

/// 1フレーム分の検出結果。被写体は常に1つ
#[derive(Debug, Clone, PartialEq)]
pub enum KeypointSnapshot {
    Hand(HandPose),
    Body(BodyPose),
}

impl KeypointSnapshot {
    /// ランドマークを (名前順の) スライスで返す
    pub fn landmarks(&self) -> &[Landmark] {
        match self {
            Self::Hand(hand) => &hand.landmarks,
            Self::Body(body) => &body.landmarks,
        }
    }

    /// 連続モードのアンカーに使う位置。体の場合は持たない
    pub fn hand_center(&self) -> Option<Landmark> {
        match self {
            Self::Hand(hand) => Some(hand.center()),
            Self::Body(_) => None,
        }
    }
}

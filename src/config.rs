use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

use crate::classify::ThumbSide;
use crate::error::ControlError;
use crate::pose::DetectorProfile;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub controller: ControllerConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub pose: PoseThresholds,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub detector: DetectorConfig,
    #[serde(default)]
    pub browser: BrowserConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ControllerConfig {
    /// 確定に必要な連続同一ラベル数
    #[serde(default = "default_confirm_frames")]
    pub confirm_frames: usize,
    /// クールダウン（秒）。未指定ならバリアントの既定値
    #[serde(default)]
    pub cooldown_secs: Option<f32>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    /// 正規化座標の差分を整数レンジへ拡大する係数
    #[serde(default = "default_scale_factor")]
    pub scale_factor: f32,
    /// この値を超える移動量でのみスクロール
    #[serde(default = "default_motion_threshold")]
    pub motion_threshold: f32,
    #[serde(default = "default_sensitivity")]
    pub sensitivity: f32,
}

/// 姿勢判定のしきい値（正規化座標）
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct PoseThresholds {
    /// 手首が肩よりこれ以上上なら「手を挙げた」
    #[serde(default = "default_hand_up_margin")]
    pub hand_up_margin: f32,
    /// 左右の肩の高さの差がこれ以上なら「傾いた」
    #[serde(default = "default_lean_margin")]
    pub lean_margin: f32,
    /// 手首と反対側の肩のX距離がこれ未満なら「交差」
    #[serde(default = "default_cross_margin")]
    pub cross_margin: f32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CameraConfig {
    #[serde(default)]
    pub index: i32,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    /// 左右反転（鏡像）
    #[serde(default = "default_mirror")]
    pub mirror: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DetectorConfig {
    #[serde(default = "default_hand_model")]
    pub hand_model: String,
    #[serde(default = "default_pose_model")]
    pub pose_model: String,
    #[serde(default = "default_hand_input")]
    pub hand_input: String,
    #[serde(default = "default_hand_landmarks_output")]
    pub hand_landmarks_output: String,
    #[serde(default = "default_hand_score_output")]
    pub hand_score_output: String,
    /// 未指定ならプロファイルの既定値
    #[serde(default)]
    pub detection_confidence: Option<f32>,
    #[serde(default)]
    pub tracking_confidence: Option<f32>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct BrowserConfig {
    /// ブラウザ操作ショートカット（戻る・進む・更新・タブ）を有効化
    #[serde(default)]
    pub shortcuts: bool,
}

fn default_confirm_frames() -> usize { 5 }
fn default_scale_factor() -> f32 { 1000.0 }
fn default_motion_threshold() -> f32 { 20.0 }
fn default_sensitivity() -> f32 { 10.0 }
fn default_hand_up_margin() -> f32 { 0.1 }
fn default_lean_margin() -> f32 { 0.05 }
fn default_cross_margin() -> f32 { 0.15 }
fn default_mirror() -> bool { true }
fn default_hand_model() -> String { "models/hand_landmark.onnx".to_string() }
fn default_pose_model() -> String { "models/movenet_lightning.onnx".to_string() }
fn default_hand_input() -> String { "input_1".to_string() }
fn default_hand_landmarks_output() -> String { "Identity".to_string() }
fn default_hand_score_output() -> String { "Identity_1".to_string() }

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            confirm_frames: default_confirm_frames(),
            cooldown_secs: None,
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            scale_factor: default_scale_factor(),
            motion_threshold: default_motion_threshold(),
            sensitivity: default_sensitivity(),
        }
    }
}

impl Default for PoseThresholds {
    fn default() -> Self {
        Self {
            hand_up_margin: default_hand_up_margin(),
            lean_margin: default_lean_margin(),
            cross_margin: default_cross_margin(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            index: 0,
            width: None,
            height: None,
            mirror: default_mirror(),
        }
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            hand_model: default_hand_model(),
            pose_model: default_pose_model(),
            hand_input: default_hand_input(),
            hand_landmarks_output: default_hand_landmarks_output(),
            hand_score_output: default_hand_score_output(),
            detection_confidence: None,
            tracking_confidence: None,
        }
    }
}

/// コントローラの種類。同じコアを設定違いで使う
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// 指の本数 → 矢印キー等
    Gesture,
    /// 体の姿勢 → WASD等
    Pose,
    /// 握りこぶしスクロール（＋任意でブラウザショートカット）
    Browser,
}

impl Variant {
    pub fn profile(&self) -> DetectorProfile {
        match self {
            Variant::Gesture | Variant::Browser => DetectorProfile::Hand,
            Variant::Pose => DetectorProfile::Body,
        }
    }

    pub fn default_cooldown(&self) -> Duration {
        match self {
            Variant::Gesture => Duration::ZERO,
            Variant::Pose => Duration::from_millis(500),
            Variant::Browser => Duration::from_millis(800),
        }
    }

    /// 握りこぶしで連続（スクロール）モードに入るか
    pub fn has_continuous_mode(&self) -> bool {
        matches!(self, Variant::Browser)
    }

    pub fn window_title(&self) -> &'static str {
        match self {
            Variant::Gesture => "Gesture Control",
            Variant::Pose => "Pose Control",
            Variant::Browser => "Browser Gesture Control",
        }
    }
}

/// 構築時に渡す、解決済みのコントローラ設定
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerSettings {
    pub variant: Variant,
    pub confirm_frames: usize,
    pub cooldown: Duration,
    pub scroll: ScrollConfig,
    pub pose: PoseThresholds,
    pub shortcuts: bool,
    /// 鏡像フレームなら Left、非鏡像なら Right
    pub thumb_side: ThumbSide,
}

impl ControllerSettings {
    /// バリアントの既定値
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            variant,
            confirm_frames: default_confirm_frames(),
            cooldown: variant.default_cooldown(),
            scroll: ScrollConfig::default(),
            pose: PoseThresholds::default(),
            shortcuts: false,
            thumb_side: ThumbSide::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ControlError> {
        if self.confirm_frames == 0 {
            return Err(ControlError::Config("confirm_frames must be at least 1".into()));
        }
        let scroll = &self.scroll;
        let finite = [scroll.scale_factor, scroll.motion_threshold, scroll.sensitivity]
            .iter()
            .all(|v| v.is_finite());
        if !finite || scroll.scale_factor <= 0.0 || scroll.motion_threshold < 0.0 || scroll.sensitivity < 0.0 {
            return Err(ControlError::Config(format!("invalid scroll settings: {:?}", scroll)));
        }
        let pose = &self.pose;
        let margins = [pose.hand_up_margin, pose.lean_margin, pose.cross_margin];
        if margins.iter().any(|m| !m.is_finite() || *m < 0.0) {
            return Err(ControlError::Config(format!("invalid pose threshold: {:?}", pose)));
        }
        Ok(())
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// ファイルが無ければ既定値、壊れていれば警告して既定値
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            debug!("{} not found, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("failed to load {}: {:#}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// バリアントに対する設定を解決して検証する
    pub fn settings(&self, variant: Variant) -> Result<ControllerSettings, ControlError> {
        let cooldown = match self.controller.cooldown_secs {
            Some(secs) => Duration::try_from_secs_f32(secs)
                .map_err(|e| ControlError::Config(format!("invalid cooldown_secs {}: {}", secs, e)))?,
            None => variant.default_cooldown(),
        };
        let settings = ControllerSettings {
            variant,
            confirm_frames: self.controller.confirm_frames,
            cooldown,
            scroll: self.scroll,
            pose: self.pose,
            shortcuts: self.browser.shortcuts,
            thumb_side: if self.camera.mirror {
                ThumbSide::Left
            } else {
                ThumbSide::Right
            },
        };
        settings.validate()?;
        Ok(settings)
    }

    /// 検出しきい値 (detection, tracking)
    pub fn detector_thresholds(&self, profile: DetectorProfile) -> (f32, f32) {
        let (detection, tracking) = profile.default_thresholds();
        (
            self.detector.detection_confidence.unwrap_or(detection),
            self.detector.tracking_confidence.unwrap_or(tracking),
        )
    }
}

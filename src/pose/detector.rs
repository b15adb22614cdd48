use anyhow::Context;
use ndarray::Array4;
use opencv::core::Mat;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::Tensor;
use std::path::Path;

use super::keypoint::{BodyLandmark, BodyPose, HandLandmark, HandPose, KeypointSnapshot, Landmark};
use super::preprocess::{preprocess_rgb, HAND_INPUT_SIZE, MOVENET_INPUT_SIZE};
use super::profile::{KeypointDetector, PresenceGate};
use crate::config::DetectorConfig;
use crate::error::{ControlError, Result};

fn build_session(model_path: &Path) -> anyhow::Result<Session> {
    let session = Session::builder()?
        .with_optimization_level(GraphOptimizationLevel::Level3)?
        .commit_from_file(model_path)
        .with_context(|| format!("Failed to load ONNX model {}", model_path.display()))?;
    Ok(session)
}

fn detection_error(e: impl std::fmt::Display) -> ControlError {
    ControlError::Detection(e.to_string())
}

/// MediaPipe ハンドランドマークモデル（ONNX変換版）による片手検出器
///
/// 入力: [1, 224, 224, 3] (RGB, 0.0〜1.0)
/// 出力: ランドマーク [1, 63] (x, y, z ピクセル単位), 手の存在スコア [1, 1]
pub struct HandDetector {
    session: Session,
    input_name: String,
    landmarks_output: String,
    score_output: String,
    gate: PresenceGate,
}

impl HandDetector {
    pub fn new<P: AsRef<Path>>(model_path: P, config: &DetectorConfig, gate: PresenceGate) -> anyhow::Result<Self> {
        Ok(Self {
            session: build_session(model_path.as_ref())?,
            input_name: config.hand_input.clone(),
            landmarks_output: config.hand_landmarks_output.clone(),
            score_output: config.hand_score_output.clone(),
            gate,
        })
    }

    fn infer(&mut self, input: Array4<f32>) -> anyhow::Result<(f32, HandPose)> {
        let input_tensor = Tensor::from_array(input)?;
        let outputs = self
            .session
            .run(ort::inputs![self.input_name.as_str() => input_tensor])
            .context("Hand landmark inference failed")?;

        let score: ndarray::ArrayViewD<f32> = outputs[self.score_output.as_str()]
            .try_extract_array()
            .context("Failed to extract hand score")?;
        let raw: ndarray::ArrayViewD<f32> = outputs[self.landmarks_output.as_str()]
            .try_extract_array()
            .context("Failed to extract hand landmarks")?;

        // スコアはロジットで出力されるモデルがあるため、範囲外ならシグモイドを通す
        let raw_score = score.iter().next().copied().unwrap_or(0.0);
        let score = if (0.0..=1.0).contains(&raw_score) {
            raw_score
        } else {
            1.0 / (1.0 + (-raw_score).exp())
        };

        let values: Vec<f32> = raw.iter().copied().collect();
        if values.len() < HandLandmark::COUNT * 3 {
            anyhow::bail!("unexpected hand landmark output length {}", values.len());
        }

        let size = HAND_INPUT_SIZE as f32;
        let mut landmarks = [Landmark::default(); HandLandmark::COUNT];
        for (i, landmark) in landmarks.iter_mut().enumerate() {
            *landmark = Landmark::new(values[i * 3] / size, values[i * 3 + 1] / size);
        }

        Ok((score, HandPose::new(landmarks)))
    }
}

impl KeypointDetector<Mat> for HandDetector {
    fn detect(&mut self, frame: &Mat) -> Result<Option<KeypointSnapshot>> {
        let input = preprocess_rgb(frame, HAND_INPUT_SIZE, 1.0 / 255.0).map_err(detection_error)?;
        let (score, hand) = self.infer(input).map_err(detection_error)?;

        if self.gate.accept(score) {
            Ok(Some(KeypointSnapshot::Hand(hand)))
        } else {
            Ok(None)
        }
    }
}

/// MoveNet を使用した体の姿勢検出器
///
/// 入力: [1, 192, 192, 3] (RGB, 0.0〜255.0)
/// 出力: [1, 1, 17, 3] (y, x, confidence)
pub struct BodyDetector {
    session: Session,
    gate: PresenceGate,
}

impl BodyDetector {
    pub fn new<P: AsRef<Path>>(model_path: P, gate: PresenceGate) -> anyhow::Result<Self> {
        Ok(Self {
            session: build_session(model_path.as_ref())?,
            gate,
        })
    }

    fn infer(&mut self, input: Array4<f32>) -> anyhow::Result<([f32; BodyLandmark::COUNT], BodyPose)> {
        let input_tensor = Tensor::from_array(input)?;
        let outputs = self
            .session
            .run(ort::inputs!["serving_default_input_0" => input_tensor])
            .context("Inference failed")?;

        let output: ndarray::ArrayViewD<f32> = outputs["StatefulPartitionedCall_0"]
            .try_extract_array()
            .context("Failed to extract output tensor")?;

        let mut landmarks = [Landmark::default(); BodyLandmark::COUNT];
        let mut confidences = [0.0f32; BodyLandmark::COUNT];

        for i in 0..BodyLandmark::COUNT {
            let y = output[[0, 0, i, 0]];
            let x = output[[0, 0, i, 1]];
            landmarks[i] = Landmark::new(x, y);
            confidences[i] = output[[0, 0, i, 2]];
        }

        Ok((confidences, BodyPose::new(landmarks)))
    }
}

impl KeypointDetector<Mat> for BodyDetector {
    fn detect(&mut self, frame: &Mat) -> Result<Option<KeypointSnapshot>> {
        let input = preprocess_rgb(frame, MOVENET_INPUT_SIZE, 1.0).map_err(detection_error)?;
        let (confidences, body) = self.infer(input).map_err(detection_error)?;

        // 判定に使う上半身キーポイントの平均信頼度で在/不在を決める
        let sum: f32 = BodyLandmark::UPPER_BODY
            .iter()
            .map(|&idx| confidences[idx as usize])
            .sum();
        let score = sum / BodyLandmark::UPPER_BODY.len() as f32;

        if self.gate.accept(score) {
            Ok(Some(KeypointSnapshot::Body(body)))
        } else {
            Ok(None)
        }
    }
}

use anyhow::Context;
use opencv::{
    core::{self, Mat},
    prelude::*,
    videoio::{self, VideoCapture, VideoCaptureAPIs, VideoCaptureTrait},
};
use tracing::info;

use super::CaptureSource;
use crate::config::CameraConfig;
use crate::error::{ControlError, Result};

/// OpenCVを使用したカメラキャプチャ
pub struct OpenCvCamera {
    capture: VideoCapture,
    width: u32,
    height: u32,
    mirror: bool,
}

impl OpenCvCamera {
    /// 解像度を指定してカメラを開く
    pub fn open(index: i32, width: Option<u32>, height: Option<u32>) -> anyhow::Result<Self> {
        let mut capture =
            VideoCapture::new(index, VideoCaptureAPIs::CAP_ANY as i32).context("Failed to open camera")?;

        if !capture.is_opened()? {
            anyhow::bail!("Camera {} is not available", index);
        }

        if let Some(w) = width {
            capture.set(videoio::CAP_PROP_FRAME_WIDTH, w as f64)?;
        }
        if let Some(h) = height {
            capture.set(videoio::CAP_PROP_FRAME_HEIGHT, h as f64)?;
        }
        capture.set(videoio::CAP_PROP_BUFFERSIZE, 1.0)?;

        let actual_width = capture.get(videoio::CAP_PROP_FRAME_WIDTH)? as u32;
        let actual_height = capture.get(videoio::CAP_PROP_FRAME_HEIGHT)? as u32;
        info!("camera {}: {}x{}", index, actual_width, actual_height);

        Ok(Self {
            capture,
            width: actual_width,
            height: actual_height,
            mirror: true,
        })
    }

    pub fn from_config(config: &CameraConfig) -> anyhow::Result<Self> {
        Ok(Self::open(config.index, config.width, config.height)?.with_mirror(config.mirror))
    }

    /// 左右反転して返すか（自分の左右と画面の左右を一致させる）
    pub fn with_mirror(mut self, mirror: bool) -> Self {
        self.mirror = mirror;
        self
    }

    /// 解像度を取得
    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// フレームを読み込む（BGR形式）。空フレームは None
    pub fn read_frame(&mut self) -> anyhow::Result<Option<Mat>> {
        let mut frame = Mat::default();
        let ok = self
            .capture
            .read(&mut frame)
            .context("Failed to read frame")?;

        if !ok || frame.empty() {
            return Ok(None);
        }

        if self.mirror {
            let mut flipped = Mat::default();
            core::flip(&frame, &mut flipped, 1)?;
            return Ok(Some(flipped));
        }
        Ok(Some(frame))
    }
}

impl CaptureSource for OpenCvCamera {
    type Frame = Mat;

    fn next_frame(&mut self) -> Result<Option<Mat>> {
        self.read_frame()
            .map_err(|e| ControlError::Capture(format!("{:#}", e)))
    }

    fn release(&mut self) {
        if let Err(e) = self.capture.release() {
            tracing::warn!("failed to release camera: {}", e);
        }
    }
}

use minifb::{Key, Window, WindowOptions};
use opencv::core::{Mat, Point, Scalar, Vec3b};
use opencv::imgproc;
use opencv::prelude::*;

use super::skeleton::{connections, KEYPOINT_COLOR, SKELETON_COLOR};
use super::{Anchor, OverlayStyle, Renderer};
use crate::error::{ControlError, Result};
use crate::pose::KeypointSnapshot;

fn render_err(e: impl std::fmt::Display) -> ControlError {
    ControlError::Render(e.to_string())
}

/// RGB の u32 を OpenCV の BGR Scalar に変換
fn to_scalar(rgb: u32) -> Scalar {
    let r = ((rgb >> 16) & 0xFF) as f64;
    let g = ((rgb >> 8) & 0xFF) as f64;
    let b = (rgb & 0xFF) as f64;
    Scalar::new(b, g, r, 0.0)
}

/// minifbを使用したレンダラー
///
/// 描画は OpenCV で Mat 上に行い、表示時にバッファへコピーする。
pub struct MinifbRenderer {
    window: Window,
    buffer: Vec<u32>,
    width: usize,
    height: usize,
}

impl MinifbRenderer {
    /// ウィンドウを作成
    pub fn new(title: &str, width: usize, height: usize) -> anyhow::Result<Self> {
        let window = Window::new(
            title,
            width,
            height,
            WindowOptions {
                resize: false,
                ..WindowOptions::default()
            },
        )?;

        let buffer = vec![0u32; width * height];

        Ok(Self {
            window,
            buffer,
            width,
            height,
        })
    }

    /// BGR Mat をバッファにコピー
    fn copy_frame(&mut self, frame: &Mat) -> opencv::Result<()> {
        let frame_width = frame.cols() as usize;
        let frame_height = frame.rows() as usize;

        // サイズが異なる場合はクロップ
        for y in 0..self.height.min(frame_height) {
            for x in 0..self.width.min(frame_width) {
                let pixel = frame.at_2d::<Vec3b>(y as i32, x as i32)?;
                let r = pixel[2] as u32;
                let g = pixel[1] as u32;
                let b = pixel[0] as u32;
                self.buffer[y * self.width + x] = (r << 16) | (g << 8) | b;
            }
        }
        Ok(())
    }
}

impl Renderer<Mat> for MinifbRenderer {
    fn draw_landmarks(&mut self, frame: &mut Mat, snapshot: &KeypointSnapshot) -> Result<()> {
        let w = frame.cols() as u32;
        let h = frame.rows() as u32;
        let landmarks = snapshot.landmarks();

        for (start, end) in connections(snapshot) {
            let (x1, y1) = landmarks[start].to_pixel(w, h);
            let (x2, y2) = landmarks[end].to_pixel(w, h);
            imgproc::line(
                frame,
                Point::new(x1, y1),
                Point::new(x2, y2),
                to_scalar(SKELETON_COLOR),
                2,
                imgproc::LINE_8,
                0,
            )
            .map_err(render_err)?;
        }

        for lm in landmarks {
            let (px, py) = lm.to_pixel(w, h);
            imgproc::circle(
                frame,
                Point::new(px, py),
                4,
                to_scalar(KEYPOINT_COLOR),
                -1,
                imgproc::LINE_8,
                0,
            )
            .map_err(render_err)?;
        }
        Ok(())
    }

    fn draw_overlay(&mut self, frame: &mut Mat, text: &str, anchor: Anchor, style: &OverlayStyle) -> Result<()> {
        let (x, y) = anchor.resolve(frame.cols(), frame.rows());
        imgproc::put_text(
            frame,
            text,
            Point::new(x, y),
            imgproc::FONT_HERSHEY_SIMPLEX,
            style.scale,
            to_scalar(style.color),
            style.thickness,
            imgproc::LINE_AA,
            false,
        )
        .map_err(render_err)
    }

    fn show(&mut self, frame: &Mat) -> Result<()> {
        self.copy_frame(frame).map_err(render_err)?;
        self.window
            .update_with_buffer(&self.buffer, self.width, self.height)
            .map_err(render_err)
    }

    fn poll_quit_key(&mut self) -> bool {
        !self.window.is_open() || self.window.is_key_down(Key::Q)
    }
}

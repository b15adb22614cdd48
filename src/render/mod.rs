pub mod skeleton;
#[cfg(feature = "desktop")]
pub mod window;

pub use skeleton::{HAND_CONNECTIONS, SKELETON_CONNECTIONS};
#[cfg(feature = "desktop")]
pub use window::MinifbRenderer;

use crate::error::Result;
use crate::pose::KeypointSnapshot;

/// オーバーレイ文字列の配置。左下基準は下端からの距離
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft(i32, i32),
    BottomLeft(i32, i32),
}

impl Anchor {
    /// フレームサイズを与えてピクセル座標に変換
    pub fn resolve(&self, _width: i32, height: i32) -> (i32, i32) {
        match *self {
            Anchor::TopLeft(x, y) => (x, y),
            Anchor::BottomLeft(x, dy) => (x, height - dy),
        }
    }
}

/// 文字描画のスタイル。色は RGB
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    pub color: u32,
    pub scale: f64,
    pub thickness: i32,
}

impl OverlayStyle {
    /// ラベル表示（緑）
    pub const LABEL: OverlayStyle = OverlayStyle {
        color: 0x00FF00,
        scale: 1.0,
        thickness: 2,
    };

    /// スクロールモード表示（赤）
    pub const SCROLL: OverlayStyle = OverlayStyle {
        color: 0xFF0000,
        scale: 1.0,
        thickness: 2,
    };

    /// 操作説明（白）
    pub const HINT: OverlayStyle = OverlayStyle {
        color: 0xFFFFFF,
        scale: 0.6,
        thickness: 2,
    };
}

/// 画面表示と終了キー監視
pub trait Renderer<F> {
    fn draw_landmarks(&mut self, frame: &mut F, snapshot: &KeypointSnapshot) -> Result<()>;

    fn draw_overlay(&mut self, frame: &mut F, text: &str, anchor: Anchor, style: &OverlayStyle) -> Result<()>;

    fn show(&mut self, frame: &F) -> Result<()>;

    /// 終了キー（q/Q）が押されたか、ウィンドウが閉じられたか
    fn poll_quit_key(&mut self) -> bool;

    fn release(&mut self) {}
}

#[cfg(feature = "desktop")]
pub mod capture;

#[cfg(feature = "desktop")]
pub use capture::OpenCvCamera;

use crate::error::Result;

/// フレーム供給元
///
/// `Ok(None)` はストリーム終端、`Err` は取得失敗。どちらもセッションを終了させる。
pub trait CaptureSource {
    type Frame;

    fn next_frame(&mut self) -> Result<Option<Self::Frame>>;

    /// デバイスを解放する
    fn release(&mut self) {}
}

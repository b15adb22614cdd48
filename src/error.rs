use thiserror::Error;

/// コラボレータ境界で発生するエラー
///
/// 被写体なし・未知ラベルはエラーではなく、ここには含めない。
#[derive(Debug, Error)]
pub enum ControlError {
    /// カメラからフレームを取得できない（セッション終了）
    #[error("capture failure: {0}")]
    Capture(String),
    #[error("keypoint detection failed: {0}")]
    Detection(String),
    #[error("input injection failed: {0}")]
    Injection(String),
    #[error("render failed: {0}")]
    Render(String),
    #[error("invalid config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ControlError>;

#[cfg(feature = "desktop")]
pub mod detector;
pub mod keypoint;
#[cfg(feature = "desktop")]
pub mod preprocess;
pub mod profile;

#[cfg(feature = "desktop")]
pub use detector::{BodyDetector, HandDetector};
pub use keypoint::{BodyLandmark, BodyPose, HandLandmark, HandPose, KeypointSnapshot, Landmark};
#[cfg(feature = "desktop")]
pub use preprocess::preprocess_rgb;
pub use profile::{DetectorProfile, KeypointDetector, PresenceGate};

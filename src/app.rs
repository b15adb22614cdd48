use anyhow::Result;
use tracing::info;

use crate::camera::OpenCvCamera;
use crate::config::{Config, Variant};
use crate::control::Controller;
use crate::input::EnigoInjector;
use crate::pose::{BodyDetector, DetectorProfile, HandDetector, PresenceGate};
use crate::render::MinifbRenderer;
use crate::session::{Session, StopReason};

/// カメラ・検出器・ウィンドウ・入力を組み立ててセッションを回す
pub fn run(variant: Variant, config: &Config) -> Result<StopReason> {
    let settings = config.settings(variant)?;
    info!(
        "confirm_frames={}, cooldown={:?}",
        settings.confirm_frames, settings.cooldown
    );

    let camera = OpenCvCamera::from_config(&config.camera)?;
    let (width, height) = camera.resolution();

    let renderer = MinifbRenderer::new(variant.window_title(), width as usize, height as usize)?;
    let injector = EnigoInjector::new()?;
    let controller = Controller::new(settings);

    let profile = variant.profile();
    let (detection, tracking) = config.detector_thresholds(profile);
    let gate = PresenceGate::new(detection, tracking);

    let reason = match profile {
        DetectorProfile::Hand => {
            info!("loading model from {}", config.detector.hand_model);
            let detector = HandDetector::new(&config.detector.hand_model, &config.detector, gate)?;
            Session::new(camera, detector, renderer, injector, controller).run()?
        }
        DetectorProfile::Body => {
            info!("loading model from {}", config.detector.pose_model);
            let detector = BodyDetector::new(&config.detector.pose_model, gate)?;
            Session::new(camera, detector, renderer, injector, controller).run()?
        }
    };
    Ok(reason)
}

/// RUST_LOG が無ければ gesture_pilot=info
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gesture_pilot=info".into()),
        )
        .init();
}

use std::time::Instant;
use tracing::{info, warn};

use crate::camera::CaptureSource;
use crate::config::Variant;
use crate::control::{Controller, TickOutcome};
use crate::error::Result;
use crate::input::InputInjector;
use crate::pose::{KeypointDetector, KeypointSnapshot};
use crate::render::{Anchor, OverlayStyle, Renderer};

/// セッション終了の理由
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    QuitKey,
    EndOfStream,
}

/// 取得 → 検出 → 判定 → 描画 を1フレームずつ回すループ
pub struct Session<C, D, R, I> {
    capture: C,
    detector: D,
    renderer: R,
    injector: I,
    controller: Controller,
}

impl<C, D, R, I> Session<C, D, R, I>
where
    C: CaptureSource,
    D: KeypointDetector<C::Frame>,
    R: Renderer<C::Frame>,
    I: InputInjector,
{
    pub fn new(capture: C, detector: D, renderer: R, injector: I, controller: Controller) -> Self {
        Self {
            capture,
            detector,
            renderer,
            injector,
            controller,
        }
    }

    /// 終了までループする。どの経路で抜けてもカメラとウィンドウは解放する
    pub fn run(&mut self) -> Result<StopReason> {
        info!("session start: {:?}", self.controller.variant());

        let result = loop {
            match self.step(Instant::now()) {
                Ok(Some(reason)) => break Ok(reason),
                Ok(None) => {}
                Err(e) => break Err(e),
            }
        };

        self.capture.release();
        self.renderer.release();

        match &result {
            Ok(reason) => info!("session stop: {:?}", reason),
            Err(e) => warn!("session aborted: {}", e),
        }
        result
    }

    /// 1ティック。終了すべきなら理由を返す
    pub fn step(&mut self, now: Instant) -> Result<Option<StopReason>> {
        let Some(mut frame) = self.capture.next_frame()? else {
            warn!("capture ended");
            return Ok(Some(StopReason::EndOfStream));
        };

        let snapshot = self.detector.detect(&frame)?;
        let outcome = self
            .controller
            .tick(snapshot.as_ref(), now, &mut self.injector)?;

        self.draw(&mut frame, snapshot.as_ref(), &outcome)?;
        self.renderer.show(&frame)?;

        if self.renderer.poll_quit_key() {
            return Ok(Some(StopReason::QuitKey));
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut C::Frame, snapshot: Option<&KeypointSnapshot>, outcome: &TickOutcome) -> Result<()> {
        let variant = self.controller.variant();

        if let Some(snapshot) = snapshot {
            self.renderer.draw_landmarks(frame, snapshot)?;
            let (text, style) = overlay_text(variant, outcome);
            self.renderer
                .draw_overlay(frame, &text, Anchor::TopLeft(10, 50), &style)?;
        }

        if variant == Variant::Browser {
            self.renderer.draw_overlay(
                frame,
                "Press 'Q' to quit",
                Anchor::BottomLeft(10, 20),
                &OverlayStyle::HINT,
            )?;
        }
        Ok(())
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn capture(&self) -> &C {
        &self.capture
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn injector(&self) -> &I {
        &self.injector
    }
}

/// 左上に出す文字列とスタイル
fn overlay_text(variant: Variant, outcome: &TickOutcome) -> (String, OverlayStyle) {
    if outcome.scroll_mode {
        return ("SCROLL MODE".to_string(), OverlayStyle::SCROLL);
    }
    let text = match variant {
        Variant::Pose => format!("Action: {}", outcome.label),
        Variant::Gesture | Variant::Browser => format!("Gesture: {}", outcome.label),
    };
    (text, OverlayStyle::LABEL)
}

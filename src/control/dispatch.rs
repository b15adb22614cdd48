use tracing::info;

use crate::classify::{HandGesture, Label, PoseAction};
use crate::config::Variant;
use crate::error::Result;
use crate::input::{InputInjector, Key, KeyAction};

/// ディスパッチャに渡すイベント
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    Discrete(Label),
    Continuous(i32),
}

fn gesture_action(gesture: HandGesture) -> Option<KeyAction> {
    match gesture {
        HandGesture::One => Some(KeyAction::Press(Key::Up)),
        HandGesture::Two => Some(KeyAction::Press(Key::Down)),
        HandGesture::Three => Some(KeyAction::Press(Key::Left)),
        HandGesture::Four => Some(KeyAction::Press(Key::Right)),
        HandGesture::Five => Some(KeyAction::Press(Key::Space)),
        HandGesture::Fist => Some(KeyAction::Press(Key::Enter)),
        HandGesture::Unknown => None,
    }
}

fn pose_action(action: PoseAction) -> Option<KeyAction> {
    match action {
        PoseAction::LeftHandUp => Some(KeyAction::Press(Key::Char('w'))),
        PoseAction::RightHandUp => Some(KeyAction::Press(Key::Char('s'))),
        PoseAction::BothHandsUp => Some(KeyAction::Press(Key::Space)),
        PoseAction::LeanLeft => Some(KeyAction::Press(Key::Char('a'))),
        PoseAction::LeanRight => Some(KeyAction::Press(Key::Char('d'))),
        PoseAction::ArmsCrossed => Some(KeyAction::Press(Key::Enter)),
        PoseAction::Neutral => None,
    }
}

/// ブラウザ操作。握りこぶしはスクロール用なので割り当てない
fn browser_action(gesture: HandGesture) -> Option<KeyAction> {
    match gesture {
        HandGesture::One => Some(KeyAction::Hotkey(Key::Alt, Key::Left)),
        HandGesture::Two => Some(KeyAction::Hotkey(Key::Alt, Key::Right)),
        HandGesture::Three => Some(KeyAction::Press(Key::F5)),
        HandGesture::Four => Some(KeyAction::Hotkey(Key::Ctrl, Key::Char('t'))),
        HandGesture::Five => Some(KeyAction::Hotkey(Key::Ctrl, Key::Char('w'))),
        HandGesture::Fist | HandGesture::Unknown => None,
    }
}

/// 確定ラベル・スクロール量を外部入力に変換する
///
/// 離散操作は直前に送出したラベルと同じなら何もしない（ポーズを保持しても連打にならない）。
pub struct ActionDispatcher {
    variant: Variant,
    shortcuts: bool,
    last_dispatched: Option<Label>,
}

impl ActionDispatcher {
    pub fn new(variant: Variant, shortcuts: bool) -> Self {
        Self {
            variant,
            shortcuts,
            last_dispatched: None,
        }
    }

    /// ラベルに対応する操作。対応が無ければ None
    pub fn action_for(&self, label: Label) -> Option<KeyAction> {
        if !label.is_actionable() {
            return None;
        }
        match (self.variant, label) {
            (Variant::Gesture, Label::Hand(gesture)) => gesture_action(gesture),
            (Variant::Pose, Label::Pose(action)) => pose_action(action),
            (Variant::Browser, Label::Hand(gesture)) if self.shortcuts => browser_action(gesture),
            _ => None,
        }
    }

    /// 送出すれば実際に入力が発生するか
    pub fn accepts(&self, label: Label) -> bool {
        self.last_dispatched != Some(label) && self.action_for(label).is_some()
    }

    /// イベントを送出する。入力が発生したら true
    pub fn dispatch<I: InputInjector>(&mut self, event: ControlEvent, injector: &mut I) -> Result<bool> {
        match event {
            ControlEvent::Discrete(label) => {
                if self.last_dispatched == Some(label) {
                    return Ok(false);
                }
                let Some(action) = self.action_for(label) else {
                    return Ok(false);
                };
                match action {
                    KeyAction::Press(key) => injector.press(key)?,
                    KeyAction::Hotkey(modifier, key) => injector.hotkey(modifier, key)?,
                }
                self.last_dispatched = Some(label);
                info!("action: {} -> {}", label, action);
                Ok(true)
            }
            ControlEvent::Continuous(amount) => {
                injector.scroll(amount)?;
                info!("scroll: {}", amount);
                Ok(true)
            }
        }
    }

    pub fn last_dispatched(&self) -> Option<Label> {
        self.last_dispatched
    }

    /// 重複抑止の記憶を消す
    pub fn reset(&mut self) {
        self.last_dispatched = None;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::ControlError;

    /// 送出された入力を記録するだけのインジェクタ
    #[derive(Default)]
    pub(crate) struct RecordingInjector {
        pub presses: Vec<Key>,
        pub hotkeys: Vec<(Key, Key)>,
        pub scrolls: Vec<i32>,
        pub fail: bool,
    }

    impl InputInjector for RecordingInjector {
        fn press(&mut self, key: Key) -> Result<()> {
            if self.fail {
                return Err(ControlError::Injection("test".into()));
            }
            self.presses.push(key);
            Ok(())
        }

        fn hotkey(&mut self, modifier: Key, key: Key) -> Result<()> {
            self.hotkeys.push((modifier, key));
            Ok(())
        }

        fn scroll(&mut self, amount: i32) -> Result<()> {
            self.scrolls.push(amount);
            Ok(())
        }
    }

    const ONE: Label = Label::Hand(HandGesture::One);
    const TWO: Label = Label::Hand(HandGesture::Two);

    #[test]
    fn test_duplicate_discrete_fires_once() {
        let mut d = ActionDispatcher::new(Variant::Gesture, false);
        let mut inj = RecordingInjector::default();
        assert!(d.dispatch(ControlEvent::Discrete(ONE), &mut inj).unwrap());
        assert!(!d.dispatch(ControlEvent::Discrete(ONE), &mut inj).unwrap());
        assert_eq!(inj.presses, vec![Key::Up]);
    }

    #[test]
    fn test_different_label_or_reset_rearms() {
        let mut d = ActionDispatcher::new(Variant::Gesture, false);
        let mut inj = RecordingInjector::default();
        d.dispatch(ControlEvent::Discrete(ONE), &mut inj).unwrap();
        d.dispatch(ControlEvent::Discrete(TWO), &mut inj).unwrap();
        d.dispatch(ControlEvent::Discrete(ONE), &mut inj).unwrap();
        d.reset();
        d.dispatch(ControlEvent::Discrete(ONE), &mut inj).unwrap();
        assert_eq!(inj.presses, vec![Key::Up, Key::Down, Key::Up, Key::Up]);
    }

    #[test]
    fn test_unmapped_labels_never_dispatch() {
        let mut d = ActionDispatcher::new(Variant::Pose, false);
        let mut inj = RecordingInjector::default();
        for label in [Label::Pose(PoseAction::Neutral), Label::None, ONE] {
            assert!(!d.dispatch(ControlEvent::Discrete(label), &mut inj).unwrap());
        }
        assert!(inj.presses.is_empty());
        assert_eq!(d.last_dispatched(), None);
    }

    #[test]
    fn test_unknown_does_not_clear_dedup() {
        let mut d = ActionDispatcher::new(Variant::Gesture, false);
        let mut inj = RecordingInjector::default();
        d.dispatch(ControlEvent::Discrete(ONE), &mut inj).unwrap();
        d.dispatch(ControlEvent::Discrete(Label::Hand(HandGesture::Unknown)), &mut inj).unwrap();
        d.dispatch(ControlEvent::Discrete(ONE), &mut inj).unwrap();
        assert_eq!(inj.presses.len(), 1);
    }

    #[test]
    fn test_non_actionable_labels_have_no_action() {
        for variant in [Variant::Gesture, Variant::Pose, Variant::Browser] {
            let d = ActionDispatcher::new(variant, true);
            for label in [
                Label::None,
                Label::Hand(HandGesture::Unknown),
                Label::Pose(PoseAction::Neutral),
            ] {
                assert_eq!(d.action_for(label), None);
                assert!(!d.accepts(label));
            }
        }
    }

    #[test]
    fn test_gesture_table() {
        let d = ActionDispatcher::new(Variant::Gesture, false);
        let expected = [
            (HandGesture::One, Key::Up),
            (HandGesture::Two, Key::Down),
            (HandGesture::Three, Key::Left),
            (HandGesture::Four, Key::Right),
            (HandGesture::Five, Key::Space),
            (HandGesture::Fist, Key::Enter),
        ];
        for (gesture, key) in expected {
            assert_eq!(d.action_for(Label::Hand(gesture)), Some(KeyAction::Press(key)));
        }
    }

    #[test]
    fn test_pose_table() {
        let d = ActionDispatcher::new(Variant::Pose, false);
        let expected = [
            (PoseAction::LeftHandUp, Key::Char('w')),
            (PoseAction::RightHandUp, Key::Char('s')),
            (PoseAction::BothHandsUp, Key::Space),
            (PoseAction::LeanLeft, Key::Char('a')),
            (PoseAction::LeanRight, Key::Char('d')),
            (PoseAction::ArmsCrossed, Key::Enter),
        ];
        for (action, key) in expected {
            assert_eq!(d.action_for(Label::Pose(action)), Some(KeyAction::Press(key)));
        }
    }

    #[test]
    fn test_browser_shortcuts_opt_in() {
        let off = ActionDispatcher::new(Variant::Browser, false);
        assert_eq!(off.action_for(ONE), None);

        let on = ActionDispatcher::new(Variant::Browser, true);
        assert_eq!(on.action_for(ONE), Some(KeyAction::Hotkey(Key::Alt, Key::Left)));
        assert_eq!(on.action_for(Label::Hand(HandGesture::Three)), Some(KeyAction::Press(Key::F5)));
        assert_eq!(on.action_for(Label::Hand(HandGesture::Fist)), None);
    }

    #[test]
    fn test_hotkey_dispatch() {
        let mut d = ActionDispatcher::new(Variant::Browser, true);
        let mut inj = RecordingInjector::default();
        d.dispatch(ControlEvent::Discrete(Label::Hand(HandGesture::Four)), &mut inj).unwrap();
        assert_eq!(inj.hotkeys, vec![(Key::Ctrl, Key::Char('t'))]);
    }

    #[test]
    fn test_continuous_not_deduplicated() {
        let mut d = ActionDispatcher::new(Variant::Browser, false);
        let mut inj = RecordingInjector::default();
        d.dispatch(ControlEvent::Continuous(300), &mut inj).unwrap();
        d.dispatch(ControlEvent::Continuous(300), &mut inj).unwrap();
        assert_eq!(inj.scrolls, vec![300, 300]);
    }

    #[test]
    fn test_failed_injection_is_not_remembered() {
        let mut d = ActionDispatcher::new(Variant::Gesture, false);
        let mut inj = RecordingInjector {
            fail: true,
            ..RecordingInjector::default()
        };
        assert!(d.dispatch(ControlEvent::Discrete(ONE), &mut inj).is_err());
        assert_eq!(d.last_dispatched(), None);
        assert!(d.accepts(ONE));
    }
}

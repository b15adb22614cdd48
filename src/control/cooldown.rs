use std::time::{Duration, Instant};

/// 前回の発火から一定時間が経つまで次の操作を抑止するゲート
///
/// フレーム数ではなく時刻で比較するので、フレームレートが揺れても間隔は変わらない。
pub struct CooldownGate {
    duration: Duration,
    last_fired: Option<Instant>,
}

impl CooldownGate {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            last_fired: None,
        }
    }

    /// 発火可能なら now を記録して true。不可なら状態を変えず false
    pub fn try_fire(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_fired {
            if now.saturating_duration_since(last) < self.duration {
                return false;
            }
        }
        self.last_fired = Some(now);
        true
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn last_fired(&self) -> Option<Instant> {
        self.last_fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(base: Instant, secs: f32) -> Instant {
        base + Duration::from_secs_f32(secs)
    }

    #[test]
    fn test_cooldown_sequence() {
        let base = Instant::now();
        let mut gate = CooldownGate::new(Duration::from_millis(500));
        assert!(gate.try_fire(at(base, 0.0)));
        assert!(!gate.try_fire(at(base, 0.3)));
        assert!(gate.try_fire(at(base, 0.6)));
    }

    #[test]
    fn test_rejected_attempt_does_not_extend() {
        let base = Instant::now();
        let mut gate = CooldownGate::new(Duration::from_millis(500));
        assert!(gate.try_fire(at(base, 0.0)));
        assert!(!gate.try_fire(at(base, 0.4)));
        assert_eq!(gate.last_fired(), Some(base));
        assert!(gate.try_fire(at(base, 0.5)));
    }

    #[test]
    fn test_zero_duration_always_fires() {
        let base = Instant::now();
        let mut gate = CooldownGate::new(Duration::ZERO);
        assert!(gate.try_fire(base));
        assert!(gate.try_fire(base));
    }

    #[test]
    fn test_clock_going_backwards_is_blocked() {
        let base = Instant::now();
        let mut gate = CooldownGate::new(Duration::from_millis(800));
        assert!(gate.try_fire(at(base, 1.0)));
        assert!(!gate.try_fire(base));
    }
}

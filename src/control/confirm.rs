use std::collections::VecDeque;

use crate::classify::Label;

/// 直近 N フレームが全て同じラベルのときだけ確定させるフィルタ
pub struct ConfirmationFilter {
    window: usize,
    history: VecDeque<Label>,
    confirmed: Option<Label>,
}

impl ConfirmationFilter {
    /// window は 1 以上
    pub fn new(window: usize) -> Self {
        let window = window.max(1);
        Self {
            window,
            history: VecDeque::with_capacity(window),
            confirmed: None,
        }
    }

    /// ラベルを1つ追加し、確定したらそのラベルを返す
    pub fn observe(&mut self, label: Label) -> Option<Label> {
        self.history.push_back(label);
        if self.history.len() > self.window {
            self.history.pop_front();
        }

        let full = self.history.len() == self.window;
        self.confirmed = if full && self.history.iter().all(|l| *l == label) {
            Some(label)
        } else {
            None
        };
        self.confirmed
    }

    pub fn reset(&mut self) {
        self.history.clear();
        self.confirmed = None;
    }

    pub fn confirmed(&self) -> Option<Label> {
        self.confirmed
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn window(&self) -> usize {
        self.window
    }
}

use enigo::{Axis, Direction, Enigo, Keyboard, Mouse, Settings};

use super::{InputInjector, Key};
use crate::error::{ControlError, Result};

fn injection_error(e: impl std::fmt::Debug) -> ControlError {
    ControlError::Injection(format!("{:?}", e))
}

fn to_enigo(key: Key) -> enigo::Key {
    match key {
        Key::Up => enigo::Key::UpArrow,
        Key::Down => enigo::Key::DownArrow,
        Key::Left => enigo::Key::LeftArrow,
        Key::Right => enigo::Key::RightArrow,
        Key::Space => enigo::Key::Space,
        Key::Enter => enigo::Key::Return,
        Key::F5 => enigo::Key::F5,
        Key::Alt => enigo::Key::Alt,
        Key::Ctrl => enigo::Key::Control,
        Key::Char(c) => enigo::Key::Unicode(c),
    }
}

/// enigo でキー・スクロールを送出する
pub struct EnigoInjector {
    enigo: Enigo,
}

impl EnigoInjector {
    pub fn new() -> Result<Self> {
        let enigo = Enigo::new(&Settings::default()).map_err(injection_error)?;
        Ok(Self { enigo })
    }
}

impl InputInjector for EnigoInjector {
    fn press(&mut self, key: Key) -> Result<()> {
        self.enigo
            .key(to_enigo(key), Direction::Click)
            .map_err(injection_error)
    }

    fn hotkey(&mut self, modifier: Key, key: Key) -> Result<()> {
        let modifier = to_enigo(modifier);
        self.enigo.key(modifier, Direction::Press).map_err(injection_error)?;
        let clicked = self.enigo.key(to_enigo(key), Direction::Click);
        // 修飾キーは送出の成否に関係なく離す
        self.enigo.key(modifier, Direction::Release).map_err(injection_error)?;
        clicked.map_err(injection_error)
    }

    /// 正の値で上スクロール。enigo は正で下なので符号を反転する
    fn scroll(&mut self, amount: i32) -> Result<()> {
        self.enigo
            .scroll(-amount, Axis::Vertical)
            .map_err(injection_error)
    }
}

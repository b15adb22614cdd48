#[cfg(feature = "desktop")]
pub mod injector;

#[cfg(feature = "desktop")]
pub use injector::EnigoInjector;

use std::fmt;

use crate::error::Result;

/// 送出するキー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Space,
    Enter,
    F5,
    Alt,
    Ctrl,
    Char(char),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Up => f.write_str("up"),
            Key::Down => f.write_str("down"),
            Key::Left => f.write_str("left"),
            Key::Right => f.write_str("right"),
            Key::Space => f.write_str("space"),
            Key::Enter => f.write_str("enter"),
            Key::F5 => f.write_str("f5"),
            Key::Alt => f.write_str("alt"),
            Key::Ctrl => f.write_str("ctrl"),
            Key::Char(c) => write!(f, "{}", c),
        }
    }
}

/// 離散操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Press(Key),
    Hotkey(Key, Key),
}

impl fmt::Display for KeyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyAction::Press(key) => write!(f, "{}", key),
            KeyAction::Hotkey(modifier, key) => write!(f, "{}+{}", modifier, key),
        }
    }
}

/// OSのフォアグラウンドアプリへ入力を送る外部コラボレータ
///
/// 送りっぱなしで応答は無い。失敗はセッション終了扱い。
pub trait InputInjector {
    fn press(&mut self, key: Key) -> Result<()>;
    fn hotkey(&mut self, modifier: Key, key: Key) -> Result<()>;
    fn scroll(&mut self, amount: i32) -> Result<()>;
}

pub mod confirm;
pub mod controller;
pub mod cooldown;
pub mod dispatch;
pub mod scroll;

pub use confirm::ConfirmationFilter;
pub use controller::{Controller, TickOutcome};
pub use cooldown::CooldownGate;
pub use dispatch::{ActionDispatcher, ControlEvent};
pub use scroll::{ScrollEvent, ScrollState, ScrollTracker};

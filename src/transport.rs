//! Transport control: the play/pause/skip state machine, the refresh timer
//! and the `m:s` time format shown in the UI.

mod controller;
mod state;
mod timefmt;
mod timer;

pub use controller::TransportController;
pub use state::{DisplayState, PlayerState, TransportEvent};

// App module for judge_stats_tui
// Holds dashboard state and turns key presses and port calls into state changes

pub mod input;
pub mod port;
pub mod state;

pub use input::{handle_key, InputAction};
pub use port::{ChannelPort, Snapshot, SnapshotPort, UiCommand};
pub use state::App;

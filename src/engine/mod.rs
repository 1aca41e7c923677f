pub mod config;
pub mod random;
pub mod scheduler;
pub mod timing;

pub use config::{Config, PlaybackConfig, SpeechConfig, SPEED_RANGE, SPEED_STEP};
pub use random::{IndexSource, RngIndexSource};
pub use scheduler::{PlaybackScheduler, PlaybackStatus, TickOutcome};
pub use timing::RepeatingTimer;

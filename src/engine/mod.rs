pub mod clock;
pub mod config;
pub mod frame;
pub mod playback;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{Config, ReaderConfig, ThemeConfig, ThemeMode, TimingConfig};
pub use frame::{FrameRecorder, RenderFrame, RenderSink};
pub use playback::{PendingAdvance, PlaybackEngine, PlaybackStatus};

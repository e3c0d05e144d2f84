pub mod confirm;
pub mod levels;
pub mod ohlc;
pub mod peaks;
pub mod types;

pub use confirm::{DEFAULT_CONFIRM_TOLERANCE, confirm_levels};
pub use levels::LevelDetector;
pub use ohlc::OhlcBar;
pub use peaks::{find_peaks, find_troughs};
pub use types::Interval;

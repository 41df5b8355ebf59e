pub mod error;
pub mod instant;
pub mod timespan;

pub use instant::Instant;
pub use timespan::Timespan;

pub mod error;
pub mod ffmpeg;
pub mod orientation;
pub mod ratio;
pub mod summary;

pub use error::{Error, Result};
pub use ffmpeg::Tools;
pub use orientation::{classify, Orientation};
pub use ratio::{reduce, AspectRatio};

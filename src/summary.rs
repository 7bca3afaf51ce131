use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{
    error::Result,
    ffmpeg::{probe::video_aspect_ratio, Tools},
    orientation::{classify, Orientation},
    ratio::AspectRatio,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoSummary {
    pub path: PathBuf,
    pub aspect_ratio: AspectRatio,
    pub orientation: Orientation,
}

/// Probes `input` and classifies its aspect ratio.
pub fn summarize(tools: &Tools, input: &Path) -> Result<VideoSummary> {
    let aspect_ratio = video_aspect_ratio(tools, input)?;
    let orientation = classify(&aspect_ratio.to_string())?;

    Ok(VideoSummary {
        path: input.to_path_buf(),
        aspect_ratio,
        orientation,
    })
}

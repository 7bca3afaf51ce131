use std::{ffi::OsString, path::Path, process::Command};

use log::{info, warn};
use serde::Deserialize;

use super::{run, Tools};
use crate::{
    error::{Error, Result},
    ratio::{reduce, AspectRatio},
};

#[derive(Debug, Deserialize)]
pub struct ProbeOutput {
    #[serde(default)]
    pub streams: Vec<StreamInfo>,
}

/// One entry of ffprobe's `streams` array. Audio and data streams carry no
/// dimensions and read as 0x0.
#[derive(Debug, Deserialize)]
pub struct StreamInfo {
    #[serde(default)]
    pub index: Option<u64>,
    #[serde(default)]
    pub codec_type: Option<String>,
    #[serde(default)]
    pub width: u64,
    #[serde(default)]
    pub height: u64,
}

pub fn probe_args(input: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = ["-v", "error", "-print_format", "json", "-show_streams"]
        .into_iter()
        .map(OsString::from)
        .collect();
    args.push(input.into());
    args
}

pub fn parse_probe_output(stdout: &[u8]) -> Result<ProbeOutput> {
    serde_json::from_slice(stdout)
        .map_err(|e| Error::tool("ffprobe", format!("unreadable output: {}", e)))
}

pub fn probe_streams(tools: &Tools, input: &Path) -> Result<ProbeOutput> {
    let mut cmd = Command::new(&tools.ffprobe);
    cmd.args(probe_args(input));

    let output = run(&mut cmd)?;

    parse_probe_output(&output.stdout)
}

/// Reduced `width:height` of the first stream ffprobe reports for `input`.
pub fn video_aspect_ratio(tools: &Tools, input: &Path) -> Result<AspectRatio> {
    let info = probe_streams(tools, input)?;
    let stream = info.streams.first().ok_or(Error::NoStreamsFound)?;

    if info.streams.len() > 1 {
        warn!(
            "{} reports {} streams, using the first ({})",
            input.display(),
            info.streams.len(),
            stream.codec_type.as_deref().unwrap_or("unknown type")
        );
    }

    let ratio = reduce(stream.width, stream.height)?;
    info!(
        "{}: {}x{} -> {}",
        input.display(),
        stream.width,
        stream.height,
        ratio
    );
    Ok(ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_args() {
        let args = probe_args(Path::new("in.mp4"));
        assert_eq!(
            args,
            ["-v", "error", "-print_format", "json", "-show_streams", "in.mp4"]
                .map(OsString::from)
        );
    }

    #[test]
    fn test_parse_probe_output() {
        let json = br#"{
            "streams": [
                {"index": 0, "codec_name": "h264", "codec_type": "video", "width": 1920, "height": 1080, "r_frame_rate": "30/1"},
                {"index": 1, "codec_name": "aac", "codec_type": "audio", "sample_rate": "48000"}
            ]
        }"#;
        let info = parse_probe_output(json).unwrap();
        assert_eq!(info.streams.len(), 2);
        assert_eq!(info.streams[0].width, 1920);
        assert_eq!(info.streams[0].height, 1080);
        assert_eq!(info.streams[0].codec_type.as_deref(), Some("video"));
        assert_eq!(info.streams[1].width, 0);
        assert_eq!(info.streams[1].height, 0);
    }

    #[test]
    fn test_parse_probe_output_without_streams() {
        assert!(parse_probe_output(b"{}").unwrap().streams.is_empty());
        assert!(parse_probe_output(br#"{"streams": []}"#)
            .unwrap()
            .streams
            .is_empty());
    }

    #[test]
    fn test_parse_probe_output_malformed() {
        assert!(matches!(
            parse_probe_output(b"not json"),
            Err(Error::ExternalToolFailure { .. })
        ));
        assert!(matches!(
            parse_probe_output(br#"{"streams": [{"width": -1, "height": 2}]}"#),
            Err(Error::ExternalToolFailure { .. })
        ));
    }
}

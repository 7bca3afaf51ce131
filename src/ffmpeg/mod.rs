use std::{
    ffi::OsStr,
    path::PathBuf,
    process::{Command, Output, Stdio},
};

use log::debug;

use crate::error::{Error, Result};

pub mod faststart;
pub mod probe;

/// Programs used for probing and rewriting. Names are resolved from `PATH`
/// unless a path is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tools {
    pub ffprobe: PathBuf,
    pub ffmpeg: PathBuf,
}

impl Default for Tools {
    fn default() -> Self {
        Self {
            ffprobe: PathBuf::from("ffprobe"),
            ffmpeg: PathBuf::from("ffmpeg"),
        }
    }
}

impl Tools {
    pub fn new(ffprobe: impl Into<PathBuf>, ffmpeg: impl Into<PathBuf>) -> Self {
        Self {
            ffprobe: ffprobe.into(),
            ffmpeg: ffmpeg.into(),
        }
    }
}

fn tool_name(program: &OsStr) -> String {
    program.to_string_lossy().into_owned()
}

/// Runs `cmd` to completion with stdin detached and both output streams captured.
/// Spawn failures and non-zero exits become [`Error::ExternalToolFailure`].
fn run(cmd: &mut Command) -> Result<Output> {
    let tool = tool_name(cmd.get_program());
    debug!("running {:?}", cmd);

    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let output = cmd
        .output()
        .map_err(|e| Error::tool(&tool, format!("failed to execute: {}", e)))?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if !stderr.is_empty() {
        debug!("{} stderr: {}", tool, stderr);
    }

    if !output.status.success() {
        let reason = if stderr.is_empty() {
            format!("exited with {}", output.status)
        } else {
            format!("exited with {}: {}", output.status, stderr)
        };
        return Err(Error::tool(tool, reason));
    }

    Ok(output)
}

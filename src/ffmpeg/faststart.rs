use std::{
    ffi::OsString,
    io::ErrorKind,
    path::{Path, PathBuf},
    process::Command,
};

use log::info;

use super::{run, Tools};
use crate::error::{Error, Result};

pub const OUTPUT_SUFFIX: &str = ".processing";

/// `movie.mp4` becomes `movie.mp4.processing`.
pub fn fast_start_output_path(input: &Path) -> PathBuf {
    let mut path = input.as_os_str().to_owned();
    path.push(OUTPUT_SUFFIX);
    path.into()
}

pub fn fast_start_args(input: &Path, output: &Path) -> Vec<OsString> {
    let mut args = vec![OsString::from("-i"), input.into()];
    args.extend(
        ["-c", "copy", "-movflags", "faststart", "-f", "mp4"]
            .into_iter()
            .map(OsString::from),
    );
    args.push(output.into());
    args
}

/// Remuxes `input` into an MP4 with the moov atom moved to the front, without
/// re-encoding. Returns the path of the new file, which sits next to `input`.
pub fn process_for_fast_start(tools: &Tools, input: &Path) -> Result<PathBuf> {
    let output = fast_start_output_path(input);

    let mut cmd = Command::new(&tools.ffmpeg);
    cmd.args(fast_start_args(input, &output));
    run(&mut cmd)?;

    let size = match std::fs::metadata(&output) {
        Ok(meta) => meta.len(),
        Err(e) if e.kind() == ErrorKind::NotFound => 0,
        Err(source) => {
            return Err(Error::Io {
                path: output,
                source,
            })
        }
    };
    if size == 0 {
        return Err(Error::EmptyOutput(output));
    }

    info!("{} -> {} ({} bytes)", input.display(), output.display(), size);
    Ok(output)
}

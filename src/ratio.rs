use std::{fmt, str::FromStr};

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// A `width:height` pair, written the usual way (`16:9` is wide). Values
/// produced by [`reduce`] are in lowest terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AspectRatio {
    pub width: u64,
    pub height: u64,
}

impl AspectRatio {
    pub const fn new(width: u64, height: u64) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

impl FromStr for AspectRatio {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidFormat(s.to_string());

        let (width, height) = s.split_once(':').ok_or_else(invalid)?;
        if height.contains(':') {
            return Err(invalid());
        }

        Ok(Self {
            width: width.parse().map_err(|_| invalid())?,
            height: height.parse().map_err(|_| invalid())?,
        })
    }
}

impl Serialize for AspectRatio {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Divides both dimensions by their greatest common divisor. The pair keeps
/// its order: `reduce(1920, 1080)` is `16:9`, `reduce(1080, 1920)` is `9:16`.
pub fn reduce(width: u64, height: u64) -> Result<AspectRatio> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidInput { width, height });
    }

    let divisor = gcd(width, height);
    Ok(AspectRatio {
        width: width / divisor,
        height: height / divisor,
    })
}

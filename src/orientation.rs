use std::{cmp::Ordering, fmt};

use serde::Serialize;

use crate::{error::Result, ratio::AspectRatio};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
    /// Exactly square.
    Other,
}

impl Orientation {
    /// Taller than wide is portrait, wider than tall is landscape.
    pub fn from_ratio(ratio: &AspectRatio) -> Self {
        match ratio.height.cmp(&ratio.width) {
            Ordering::Greater => Self::Portrait,
            Ordering::Less => Self::Landscape,
            Ordering::Equal => Self::Other,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a `width:height` ratio string, so `16:9` is landscape.
pub fn classify(ratio: &str) -> Result<Orientation> {
    let ratio: AspectRatio = ratio.parse()?;
    Ok(Orientation::from_ratio(&ratio))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Error, ratio::reduce};

    #[test]
    fn test_classify() {
        assert_eq!(classify("9:16").unwrap(), Orientation::Portrait);
        assert_eq!(classify("16:9").unwrap(), Orientation::Landscape);
        assert_eq!(classify("1:1").unwrap(), Orientation::Other);
        assert_eq!(classify("1080:1080").unwrap(), Orientation::Other);
        assert_eq!(classify("1081:1080").unwrap(), Orientation::Landscape);
        assert_eq!(classify("1080:1081").unwrap(), Orientation::Portrait);
    }

    #[test]
    fn test_from_ratio_follows_field_names() {
        let tall = AspectRatio {
            width: 9,
            height: 16,
        };
        assert_eq!(Orientation::from_ratio(&tall), Orientation::Portrait);
        let wide = AspectRatio {
            width: 16,
            height: 9,
        };
        assert_eq!(Orientation::from_ratio(&wide), Orientation::Landscape);
    }

    #[test]
    fn test_classify_invalid() {
        assert!(matches!(classify("abc:16"), Err(Error::InvalidFormat(_))));
        assert!(matches!(classify("16"), Err(Error::InvalidFormat(_))));
        assert!(matches!(classify("16:9:4"), Err(Error::InvalidFormat(_))));
        assert!(matches!(classify("16x9"), Err(Error::InvalidFormat(_))));
    }

    #[test]
    fn test_reduce_then_classify() {
        let ratio = reduce(1920, 1080).unwrap();
        assert_eq!(ratio.to_string(), "16:9");
        assert_eq!(classify(&ratio.to_string()).unwrap(), Orientation::Landscape);

        let ratio = reduce(1080, 1920).unwrap();
        assert_eq!(classify(&ratio.to_string()).unwrap(), Orientation::Portrait);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Orientation::Portrait.to_string(), "portrait");
        assert_eq!(Orientation::Landscape.to_string(), "landscape");
        assert_eq!(Orientation::Other.to_string(), "other");
        assert_eq!(
            serde_json::to_string(&Orientation::Other).unwrap(),
            "\"other\""
        );
    }
}

/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Render quality tier requested from the SDK when attaching a video.
///
/// Discriminants match the SDK's `VideoQuality` enum values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VideoQuality {
    Video90P = 0,
    Video180P = 1,
    #[default]
    Video360P = 2,
    Video720P = 3,
    Video1080P = 4,
}

impl VideoQuality {
    /// Numeric value the SDK expects.
    pub fn as_sdk_value(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for VideoQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VideoQuality::Video90P => "90p",
            VideoQuality::Video180P => "180p",
            VideoQuality::Video360P => "360p",
            VideoQuality::Video720P => "720p",
            VideoQuality::Video1080P => "1080p",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sdk_values() {
        assert_eq!(VideoQuality::Video90P.as_sdk_value(), 0);
        assert_eq!(VideoQuality::Video360P.as_sdk_value(), 2);
        assert_eq!(VideoQuality::Video1080P.as_sdk_value(), 4);
        assert_eq!(VideoQuality::default(), VideoQuality::Video360P);
    }
}

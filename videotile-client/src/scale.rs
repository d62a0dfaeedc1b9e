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

//! Cover-style scaling of the remote tile.
//!
//! The SDK renders a participant's video at its native aspect ratio. To fill a
//! fixed-size tile without distortion the inner wrapper is scaled uniformly
//! and the outer tile clips the overflow, which gives the same result as
//! `object-fit: cover` on an element the SDK owns.

use crate::constants::{VIDEO_HEIGHT, VIDEO_WIDTH};

/// Float noise allowed before rounding up, in hundredths.
const CEIL_TOLERANCE: f64 = 1e-9;

/// Size of a video tile in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileSize {
    pub width: f64,
    pub height: f64,
}

impl TileSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl Default for TileSize {
    fn default() -> Self {
        Self::new(VIDEO_WIDTH as f64, VIDEO_HEIGHT as f64)
    }
}

/// Rounds up to two decimal places.
///
/// Values within `CEIL_TOLERANCE` hundredths of a boundary stay on it, so
/// `1.0000000000000002` is `1.0` and not `1.01`.
pub fn round_up_to_hundredths(value: f64) -> f64 {
    ((value * 100.0) - CEIL_TOLERANCE).ceil() / 100.0
}

/// Uniform scale that makes content with `content_aspect` (width / height)
/// cover `tile`.
///
/// Returns `1.0` when the aspect ratio is not known yet or any input is
/// degenerate (zero, negative, NaN, infinite).
pub fn cover_scale(tile: TileSize, content_aspect: Option<f64>) -> f64 {
    let Some(aspect) = content_aspect else {
        return 1.0;
    };
    if !tile.is_valid() || !aspect.is_finite() || aspect <= 0.0 {
        return 1.0;
    }

    let scale = if aspect > tile.aspect_ratio() {
        // content is wider than the tile: scale on height
        (aspect * tile.height) / tile.width
    } else {
        // content is taller than (or as wide as) the tile: scale on width
        tile.width / (aspect * tile.height)
    };

    round_up_to_hundredths(scale)
}

/// CSS `transform` value for a scale factor.
pub fn scale_transform(scale: f64) -> String {
    format!("scale({scale})")
}

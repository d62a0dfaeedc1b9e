use videotile_types::VideoQuality;

/// Width of both video tiles, in CSS pixels.
pub const VIDEO_WIDTH: u32 = 300;
/// Height of both video tiles, in CSS pixels.
pub const VIDEO_HEIGHT: u32 = 169;

/// Quality tier requested for every attached video.
pub const VIDEO_QUALITY: VideoQuality = VideoQuality::Video360P;

pub const DEFAULT_SDK_LANGUAGE: &str = "en-US";
/// Where the SDK loads its web assembly and worker assets from.
pub const DEFAULT_SDK_DEPENDENT_ASSETS: &str = "Global";

pub const DISPLAY_NAME_PREFIX: &str = "User-";

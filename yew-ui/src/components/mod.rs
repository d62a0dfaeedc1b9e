pub mod config_error;
pub mod video_room;

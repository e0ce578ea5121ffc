//! CLI command handlers, one per file.

mod excerpt;
mod reading_time;
mod slug;
mod transcript;
mod upload;
mod video_id;

pub use excerpt::run_excerpt;
pub use reading_time::run_reading_time;
pub use slug::run_slug;
pub use transcript::run_transcript;
pub use upload::run_upload;
pub use video_id::run_video_id;

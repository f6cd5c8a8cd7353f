pub mod file_input;
pub mod panel;
pub mod video_entry;

pub mod api_utils;
pub mod browser_storage;
pub mod config;
pub mod date_utils;
pub mod dialog;
pub mod format;
pub mod list_utils;
pub mod modal_frame;

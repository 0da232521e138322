pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod draft_storage;
pub mod export;
pub mod icons;
pub mod list_utils;
pub mod notify;
pub mod page_frame;
pub mod page_standard;

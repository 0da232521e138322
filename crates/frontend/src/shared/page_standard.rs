//! Standard page categories used by [`PageFrame`](crate::shared::page_frame).

pub const PAGE_CAT_LIST: &str = "list";
pub const PAGE_CAT_DETAIL: &str = "detail";
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";
pub const PAGE_CAT_SYSTEM: &str = "system";

pub mod atoms;
pub mod footer;
pub mod header;
pub mod layout;
pub mod molecules;
pub mod scroll_indicator;
pub mod table;
pub mod text_utils;

pub mod json;

pub use json::{LayoutEntry, layout_entries, layout_json};

use edtable::app::ports::TableSource;
use edtable::domain::TableSpec;
use edtable::infra::adapters::TomlTableSource;

pub use edtable::app::test_support::instance_spec;

/// Three columns that fit any 80-cell table: fixed id, bounded name, free note.
pub const CONTACTS_TOML: &str = r#"
version = 1
title = "contacts"

[[columns]]
key = "id"
label = "ID"
width = 60

[[columns]]
key = "name"
label = "Name"
min_width = 100
resizeable = true

[[columns]]
key = "note"
label = "Note"
resizeable = true

[[rows]]
id = 1
name = "Ada"
note = "prefers email"

[[rows]]
id = 2
name = "Grace"
"#;

pub fn contacts_spec() -> TableSpec {
    TomlTableSource::inline("contacts", CONTACTS_TOML)
        .load()
        .unwrap()
}

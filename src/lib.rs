pub use edtable_app as app;
pub use edtable_domain as domain;
pub use edtable_infra as infra;
pub use edtable_ui as ui;

pub mod error;

pub mod log_dir;
pub mod table_file;

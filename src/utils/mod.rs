pub mod fs;

pub use fs::validate_file_size;

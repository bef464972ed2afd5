pub mod extractor;
pub mod file_magic;
pub mod parameter_error_handler;
pub mod validate;

pub use extractor::{SafeIDI64, SafeStudentIdI64, SafeUserIdI64};
pub use file_magic::validate_magic_bytes;
pub use parameter_error_handler::{json_error_handler, path_error_handler, query_error_handler};
pub use validate::is_safe_file_name;

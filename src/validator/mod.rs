//! Validation of ForSure files: file-level policy, content checks and a
//! sequential batch driver.

mod balance;
mod batch;
mod content;
mod file;
mod result;

pub use balance::{BraceCheckResult, Imbalance, check_balance};
pub use batch::{
    BatchValidator, DiskFile, FileHandle, MemoryFile, ValidationProgress, validate_many,
    validate_many_with_progress,
};
pub use content::{ContentValidator, validate_content};
pub use file::{
    FileMeta, FileRules, MAX_FILE_SIZE, VALID_EXTENSIONS, file_extension, format_file_size,
    validate_file,
};
pub use result::{BatchSummary, BatchValidationResult, ValidationResult, summarize_batch};

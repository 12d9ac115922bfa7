pub mod context;
pub mod format;
pub mod init;
pub mod validate;

pub use context::{color_choice_to_mode, load_config, write_report};
pub use format::{run_format, run_format_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use validate::{run_validate, run_validate_impl};

pub mod layout;
pub mod path;

pub use layout::{center_popup, create_standard_layout};
pub use path::{get_config_dir, get_config_path, get_log_dir, get_preferences_path};

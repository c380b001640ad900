use std::path::PathBuf;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "QUIZDECK_CONFIG_DIR";

/// Get the home directory, with fallback to "/"
pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Get the config directory path (~/.config/quizdeck unless overridden)
pub fn get_config_dir() -> PathBuf {
    match std::env::var_os(CONFIG_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => get_home_dir().join(".config").join("quizdeck"),
    }
}

/// Get the config file path
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Get the key-value preferences file path (holds the theme)
pub fn get_preferences_path() -> PathBuf {
    get_config_dir().join("preferences.toml")
}

/// Get the directory log files are written to
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(get_home_dir)
        .join("quizdeck")
}

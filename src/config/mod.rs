mod loader;

pub use loader::{load_config, CurlstringConfig, LoadedConfig, CONFIG_FILE_NAME};

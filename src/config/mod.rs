mod filesystem;
mod loader;
mod model;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME};
pub use model::{
    CONFIG_VERSION, ChartConfig, Config, DEFAULT_FUNCTION_COLUMN, DEFAULT_INPUT_PATH,
    DEFAULT_MEAN_COLUMN, DEFAULT_OUTPUT_PATH, DEFAULT_TOTAL_COLUMN, InputConfig, LegendPosition,
    OutputConfig,
};
pub use validation::{MAX_DIMENSION, validate_config_semantics, validate_image_size};

/// Name used for the configuration directory and environment variables.
pub const APP_NAME: &str = "gamedist";

/// Environment variable that overrides the configuration file location.
pub const CONFIG_ENV: &str = "GAMEDIST_CONFIG";

/// File name of the configuration inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Engine source checkout used when the configuration does not name one.
pub const DEFAULT_ENGINE_SOURCE_DIR: &str = "nCine";

/// CMake executable used when the configuration does not name one.
pub const DEFAULT_CMAKE_PROGRAM: &str = "cmake";

/// Build configuration used for packaged builds.
pub const RELEASE_CONFIG: &str = "release";

/// Build configuration used for development builds.
pub const DEBUG_CONFIG: &str = "debug";

/// CMake target that produces the distributable package.
pub const PACKAGE_TARGET: &str = "package";

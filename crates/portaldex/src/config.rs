//! Configuration constants for portaldex

/// Application metadata
pub mod app {
    /// Application name (used for config directory, etc.)
    pub const NAME: &str = "portaldex";
}

/// Remote catalog configuration
pub mod api {
    /// Default catalog API server
    pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";

    /// First page number reported by the API
    pub const FIRST_PAGE: u32 = 1;
}

/// Network configuration
pub mod network {
    /// User agent sent with every request
    pub const USER_AGENT: &str = concat!("portaldex/", env!("CARGO_PKG_VERSION"));

    /// TCP connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Read timeout in seconds
    pub const READ_TIMEOUT_SECS: u64 = 30;
}

/// Storage keys
pub mod storage {
    /// Key under which the favorites set is persisted
    pub const FAVORITES_KEY: &str = "favorites";

    /// Key under which the theme preference is persisted
    pub const THEME_KEY: &str = "appTheme";
}

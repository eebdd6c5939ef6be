//! Version and usage text.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn usage() -> String {
    format!(
        "listdeck {VERSION}
Browse users and products from the dummyjson demo API.

USAGE:
    listdeck [OPTIONS]

OPTIONS:
        --products          Start on the product list
        --dark              Start with the dark theme
        --base-url <URL>    API base URL (default: https://dummyjson.com)
    -V, --version           Print version
    -h, --help              Print this help

ENVIRONMENT:
    LISTDECK_BASE_URL       API base URL
    LISTDECK_DEBOUNCE_MS    Search quiet interval in milliseconds (default: 500)
    LISTDECK_LOG            Log filter directive (default: listdeck=info)
    LISTDECK_LOG_FILE       Log file path"
    )
}

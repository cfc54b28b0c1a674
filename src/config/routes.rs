//! Route list parsing for command-line input.

use url::Url;

use crate::config::loader::{parse_route, ConfigError};

/// Parse a comma-separated list of route URLs.
///
/// Whitespace around each entry is ignored, as are empty entries.
pub fn routes_from_str(routes: &str) -> Result<Vec<Url>, ConfigError> {
    routes
        .split(',')
        .map(str::trim)
        .filter(|route| !route.is_empty())
        .map(parse_route)
        .collect()
}

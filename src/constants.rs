//! Defaults and fixed REST paths shared by all the tools.

use std::time::Duration;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 9200;

/// Overall timeout applied to every HTTP call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub const ENV_HOST: &str = "ELASTIC_HOST";
pub const ENV_PORT: &str = "ELASTIC_PORT";
pub const ENV_AUTH_FILE: &str = "ELASTIC_AUTH_FILE";

pub const LICENSE_PATH: &str = "/_xpack/license";
pub const SNAPSHOT_PATH: &str = "/_snapshot";
pub const TEMPLATE_PATH: &str = "/_template";
pub const WATCH_PATH: &str = "/_xpack/watcher/watch";
pub const WATCH_SEARCH_PATH: &str = "/.watches/_search";

/// Storage backend recorded in the snapshot settings.
pub const AZURE_SNAPSHOT_TYPE: &str = "azure";

/// Path query selecting the watch ids out of a `.watches` search response.
pub const WATCH_ID_QUERY: &str = "$.hits.hits[*]._id";

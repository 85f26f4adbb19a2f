use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;

use crate::health::HealthConfig;

/// Address used when neither the config file nor the CLI sets one
pub const DEFAULT_LISTEN_ADDRESS: SocketAddr = SocketAddr::new(std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED), 8000);

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub listen_address: Option<SocketAddr>,
    /// HTML file served at `/` instead of the bundled landing page
    #[serde(default)]
    pub index_page: Option<PathBuf>,
    #[serde(default)]
    pub health: HealthConfig,
}

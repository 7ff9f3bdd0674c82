//! Generated client modules and the composition root that lists them.
//!
//! Each module exposes one `ModuleRegistrar`. Participation and order are
//! decided here, explicitly, rather than by whatever happens to be linked in.

pub mod fdio;
pub mod route;
pub mod util;

use crate::config::{CliConfig, FdioConfig};
use crate::error::{BuildError, HandlerError};
use crate::registrar::ModuleRegistrar;
use crate::tree::{CommandRegistry, TreeBuilder};
use serde::Serialize;
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

/// Root command name.
pub const PROGRAM: &str = "vppcli";

/// Root command summary.
pub const ABOUT: &str = "Command-line client for fdio data-plane services";

/// The registrars run at startup, in order.
pub fn default_registrars(config: &CliConfig) -> Vec<Box<dyn ModuleRegistrar>> {
    vec![
        Box::new(fdio::InterfaceClientRegistrar::new(config.fdio.clone())),
        // attaches beneath `fdio`, so it must follow the interface client
        Box::new(route::RouteClientRegistrar::new(config.fdio.clone())),
        Box::new(util::UtilRegistrar::new(config.clone())),
    ]
}

/// Build and freeze the process command tree from `default_registrars`.
pub fn build_command_tree(config: &CliConfig) -> Result<CommandRegistry, BuildError> {
    TreeBuilder::with_registrars(default_registrars(config))
        .build(CommandRegistry::new(PROGRAM, ABOUT))
}

/// Request envelope a client handler renders in place of the transport call.
#[derive(Debug, Serialize)]
struct ClientRequest<'a, T: Serialize> {
    endpoint: &'a str,
    timeout_ms: u64,
    service: &'a str,
    method: &'a str,
    message: T,
}

pub(crate) fn render_request<T: Serialize>(
    config: &FdioConfig,
    service: &str,
    method: &str,
    message: T,
) -> Result<String, HandlerError> {
    let request = ClientRequest {
        endpoint: &config.endpoint,
        timeout_ms: config.timeout_ms,
        service,
        method,
        message,
    };
    serde_json::to_string_pretty(&request).map_err(|e| HandlerError::Failed(e.into()))
}

/// An address with prefix length, e.g. `10.0.0.1/24` or `2001:db8::/32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prefix {
    pub address: IpAddr,
    pub len: u8,
}

impl Prefix {
    pub fn is_ipv6(&self) -> bool {
        self.address.is_ipv6()
    }
}

impl FromStr for Prefix {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr, len) = s
            .split_once('/')
            .ok_or_else(|| format!("expected ADDRESS/LEN, got '{}'", s))?;
        let address: IpAddr = addr
            .parse()
            .map_err(|_| format!("invalid IP address '{}'", addr))?;
        let len: u8 = len
            .parse()
            .map_err(|_| format!("invalid prefix length '{}'", len))?;
        let max = if address.is_ipv6() { 128 } else { 32 };
        if len > max {
            return Err(format!("prefix length {} exceeds {}", len, max));
        }
        Ok(Self { address, len })
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.len)
    }
}

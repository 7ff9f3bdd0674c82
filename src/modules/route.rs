//! fdio route client: `fdio route` commands.
//!
//! Attaches beneath the `fdio` group, so it depends on the interface client
//! registering first.

use crate::config::FdioConfig;
use crate::error::{HandlerError, RegistryError};
use crate::handler::{handler, Handler};
use crate::modules::fdio::GROUP;
use crate::modules::{render_request, Prefix};
use crate::registrar::ModuleRegistrar;
use crate::tree::{CommandNode, CommandPath, CommandSink};
use clap::Parser;
use serde::Serialize;
use std::net::IpAddr;
use std::sync::Arc;

pub const MODULE_ID: &str = "fdio-route";

const SERVICE: &str = "fdio.Route";

/// `~0` in the data-plane API: no next-hop interface.
const NO_INTERFACE: u32 = u32::MAX;

pub struct RouteClientRegistrar {
    config: Arc<FdioConfig>,
}

impl RouteClientRegistrar {
    pub fn new(config: FdioConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl ModuleRegistrar for RouteClientRegistrar {
    fn id(&self) -> &str {
        MODULE_ID
    }

    fn register(&self, sink: &mut dyn CommandSink) -> Result<(), RegistryError> {
        let route = CommandNode::group("route", "Route service").with_child(
            CommandNode::new("create", "Add or delete an IP route")
                .alias("add")
                .handler(create(Arc::clone(&self.config))),
        )?;
        sink.attach(&CommandPath::from([GROUP]), route)
    }
}

#[derive(Parser, Debug)]
struct CreateArgs {
    /// Destination prefix, e.g. 10.1.0.0/16
    #[arg(long)]
    prefix: Prefix,

    /// Next-hop address
    #[arg(long)]
    next_hop: Option<IpAddr>,

    /// Next-hop interface index
    #[arg(long)]
    sw_if_index: Option<u32>,

    /// FIB table
    #[arg(long, default_value_t = 0)]
    table_id: u32,

    /// Delete the route instead of adding it
    #[arg(long)]
    del: bool,
}

#[derive(Serialize)]
struct IpAddDelRoute {
    is_add: u8,
    is_ipv6: u8,
    table_id: u32,
    dst_address: String,
    dst_address_length: u8,
    next_hop_address: Option<String>,
    next_hop_sw_if_index: u32,
}

fn create(config: Arc<FdioConfig>) -> Handler {
    handler(move |inv| {
        let args: CreateArgs = inv.parse_args()?;

        if args.next_hop.is_none() && args.sw_if_index.is_none() {
            return Err(HandlerError::Usage(
                "one of --next-hop or --sw-if-index is required".to_string(),
            ));
        }
        if let Some(next_hop) = args.next_hop {
            if next_hop.is_ipv6() != args.prefix.is_ipv6() {
                return Err(HandlerError::Usage(format!(
                    "next hop {} and prefix {} are different address families",
                    next_hop, args.prefix
                )));
            }
        }

        let message = IpAddDelRoute {
            is_add: u8::from(!args.del),
            is_ipv6: u8::from(args.prefix.is_ipv6()),
            table_id: args.table_id,
            dst_address: args.prefix.address.to_string(),
            dst_address_length: args.prefix.len,
            next_hop_address: args.next_hop.map(|a| a.to_string()),
            next_hop_sw_if_index: args.sw_if_index.unwrap_or(NO_INTERFACE),
        };
        render_request(&config, SERVICE, "Create", message)
    })
}

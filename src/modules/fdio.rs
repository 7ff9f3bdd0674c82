//! fdio interface client: the `fdio` command group and its `interface` commands.

use crate::config::FdioConfig;
use crate::error::{HandlerError, RegistryError};
use crate::handler::{handler, Handler};
use crate::modules::{render_request, Prefix};
use crate::registrar::ModuleRegistrar;
use crate::tree::{CommandNode, CommandPath, CommandSink};
use clap::{ArgGroup, Parser};
use serde::Serialize;
use std::sync::Arc;

pub const MODULE_ID: &str = "fdio";

/// Root group shared by all fdio client modules.
pub const GROUP: &str = "fdio";

const SERVICE: &str = "fdio.Interface";

pub struct InterfaceClientRegistrar {
    config: Arc<FdioConfig>,
}

impl InterfaceClientRegistrar {
    pub fn new(config: FdioConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl ModuleRegistrar for InterfaceClientRegistrar {
    fn id(&self) -> &str {
        MODULE_ID
    }

    fn register(&self, sink: &mut dyn CommandSink) -> Result<(), RegistryError> {
        let interface = CommandNode::group("interface", "Interface service")
            .alias("intf")
            .with_child(
                CommandNode::new("create-loopback", "Create a loopback interface")
                    .handler(create_loopback(Arc::clone(&self.config))),
            )?
            .with_child(
                CommandNode::new("set-state", "Set interface admin state up or down")
                    .handler(set_state(Arc::clone(&self.config))),
            )?
            .with_child(
                CommandNode::new("set-address", "Add or delete an interface address")
                    .detail("With --del-all every address on the interface is removed.")
                    .handler(set_address(Arc::clone(&self.config))),
            )?
            .with_child(
                CommandNode::new("list", "List interfaces")
                    .alias("ls")
                    .handler(list(Arc::clone(&self.config))),
            )?;

        let fdio = CommandNode::group(GROUP, "fdio data-plane client").with_child(interface)?;
        sink.attach(&CommandPath::root(), fdio)
    }
}

#[derive(Parser, Debug)]
struct CreateLoopbackArgs {
    /// MAC address (aa:bb:cc:dd:ee:ff); all zeros lets the data plane choose
    #[arg(long, value_parser = parse_mac)]
    mac: Option<[u8; 6]>,
}

#[derive(Serialize)]
struct CreateLoopback {
    mac_address: [u8; 6],
}

fn create_loopback(config: Arc<FdioConfig>) -> Handler {
    handler(move |inv| {
        let args: CreateLoopbackArgs = inv.parse_args()?;
        let message = CreateLoopback {
            mac_address: args.mac.unwrap_or_default(),
        };
        render_request(&config, SERVICE, "CreateLoopback", message)
    })
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("state").required(true).args(["up", "down"])))]
struct SetStateArgs {
    /// Interface index
    #[arg(long)]
    sw_if_index: u32,

    #[arg(long)]
    up: bool,

    #[arg(long)]
    down: bool,
}

#[derive(Serialize)]
struct SwInterfaceSetFlags {
    sw_if_index: u32,
    admin_up_down: u8,
}

fn set_state(config: Arc<FdioConfig>) -> Handler {
    handler(move |inv| {
        let args: SetStateArgs = inv.parse_args()?;
        let message = SwInterfaceSetFlags {
            sw_if_index: args.sw_if_index,
            admin_up_down: u8::from(args.up),
        };
        render_request(&config, SERVICE, "SetState", message)
    })
}

#[derive(Parser, Debug)]
struct SetAddressArgs {
    /// Interface index
    #[arg(long)]
    sw_if_index: u32,

    /// Address with prefix length, e.g. 10.0.0.1/24
    #[arg(long, required_unless_present = "del_all")]
    address: Option<Prefix>,

    /// Delete the address instead of adding it
    #[arg(long)]
    del: bool,

    /// Delete every address on the interface
    #[arg(long, conflicts_with = "address")]
    del_all: bool,
}

#[derive(Serialize)]
struct SwInterfaceAddDelAddress {
    sw_if_index: u32,
    is_add: u8,
    is_ipv6: u8,
    del_all: u8,
    address_length: u8,
    address: Option<String>,
}

fn set_address(config: Arc<FdioConfig>) -> Handler {
    handler(move |inv| {
        let args: SetAddressArgs = inv.parse_args()?;
        let message = SwInterfaceAddDelAddress {
            sw_if_index: args.sw_if_index,
            is_add: u8::from(!args.del && !args.del_all),
            is_ipv6: u8::from(args.address.map_or(false, |p| p.is_ipv6())),
            del_all: u8::from(args.del_all),
            address_length: args.address.map_or(0, |p| p.len),
            address: args.address.map(|p| p.address.to_string()),
        };
        render_request(&config, SERVICE, "SetAddress", message)
    })
}

#[derive(Parser, Debug)]
struct ListArgs {
    /// Only list interfaces whose name contains this string
    #[arg(long)]
    name: Option<String>,
}

#[derive(Serialize)]
struct SwInterfaceDump {
    name_filter_valid: u8,
    name_filter: String,
}

fn list(config: Arc<FdioConfig>) -> Handler {
    handler(move |inv| {
        let args: ListArgs = inv.parse_args()?;
        if args.name.as_deref().is_some_and(str::is_empty) {
            return Err(HandlerError::Usage("--name cannot be empty".to_string()));
        }
        let message = SwInterfaceDump {
            name_filter_valid: u8::from(args.name.is_some()),
            name_filter: args.name.unwrap_or_default(),
        };
        render_request(&config, SERVICE, "List", message)
    })
}

fn parse_mac(s: &str) -> Result<[u8; 6], String> {
    let mut mac = [0u8; 6];
    let mut octets = s.split(':');
    for byte in mac.iter_mut() {
        let octet = octets
            .next()
            .ok_or_else(|| format!("MAC address '{}' has fewer than 6 octets", s))?;
        if octet.len() != 2 {
            return Err(format!("invalid MAC octet '{}'", octet));
        }
        *byte = u8::from_str_radix(octet, 16).map_err(|_| format!("invalid MAC octet '{}'", octet))?;
    }
    if octets.next().is_some() {
        return Err(format!("MAC address '{}' has more than 6 octets", s));
    }
    Ok(mac)
}

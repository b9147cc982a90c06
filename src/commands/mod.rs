//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod encode_command;
pub mod decode_command;
pub mod inspect_command;
mod tests;

pub use command_traits::{Command, CommandFactory};
pub use encode_command::EncodeCommand;
pub use decode_command::DecodeCommand;
pub use inspect_command::InspectCommand;

use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};
use crate::utils::io_utils::read_input;
use crate::utils::logger::Logger;
use crate::polyline::errors::{PolylineError, PolylineResult};

/// Build the command-line interface definition
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("PolylineKit")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Encode and decode Google Encoded Polylines")
        .arg(
            Arg::new("input")
                .help("Coordinate text '(lat,lon)' or '[(lat,lon),...]', or a polyline with --decode")
                .required(true)
                .allow_hyphen_values(true)
                .index(1),
        )
        .arg(
            Arg::new("encode")
                .short('e')
                .long("encode")
                .help("Encode a coordinate list into a polyline")
                .action(ArgAction::SetTrue)
                .conflicts_with("decode"),
        )
        .arg(
            Arg::new("decode")
                .short('d')
                .long("decode")
                .help("Decode a polyline into a coordinate list")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .help("Treat INPUT as the path of a file holding the input text")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file (defaults to stdout)")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("TOML configuration file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
}

/// Resolve the input text and output destination shared by every command
pub(crate) fn resolve_io(args: &ArgMatches) -> PolylineResult<(String, Option<String>)> {
    let input = args.get_one::<String>("input")
        .ok_or(PolylineError::NullInput("input"))?;
    let input = read_input(input, args.get_flag("file"))?;
    let output_file = args.get_one::<String>("output").cloned();

    Ok((input, output_file))
}

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct PolylineCommandFactory;

impl PolylineCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        PolylineCommandFactory
    }
}

impl Default for PolylineCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for PolylineCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> PolylineResult<Box<dyn Command + 'a>> {
        if args.get_flag("encode") {
            Ok(Box::new(EncodeCommand::new(args, logger)?))
        } else if args.get_flag("decode") {
            Ok(Box::new(DecodeCommand::new(args, logger)?))
        } else {
            // Default to inspect command
            Ok(Box::new(InspectCommand::new(args, logger)?))
        }
    }
}

//! Polyline encoding command
//!
//! This module implements the command that turns a `[(lat,lon),...]`
//! coordinate list into a Google Encoded Polyline.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::resolve_io;
use crate::coordinate::CoordinateList;
use crate::polyline::{self, PolylineResult};
use crate::utils::io_utils::write_output;
use crate::utils::logger::Logger;

/// Command for encoding a coordinate list
pub struct EncodeCommand<'a> {
    /// Coordinate list text
    input: String,
    /// Path to the output file, stdout when absent
    output_file: Option<String>,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> EncodeCommand<'a> {
    /// Create a new encode command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new EncodeCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> PolylineResult<Self> {
        let (input, output_file) = resolve_io(args)?;

        Ok(EncodeCommand {
            input,
            output_file,
            logger,
        })
    }
}

impl<'a> Command for EncodeCommand<'a> {
    fn run(&self) -> PolylineResult<String> {
        let coordinates = CoordinateList::parse(&self.input)?;
        info!("Encoding {} coordinates", coordinates.len());
        self.logger.log_coordinates("Encoding", &coordinates)?;

        Ok(polyline::encode(coordinates.as_slice()))
    }

    fn execute(&self) -> PolylineResult<()> {
        let encoded = self.run()?;
        write_output(&encoded, self.output_file.as_deref())?;

        info!("Polyline encoding successful");
        self.logger.log("Polyline encoding successful")?;

        Ok(())
    }
}

//! Polyline decoding command

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::resolve_io;
use crate::coordinate::CoordinateList;
use crate::polyline::{self, PolylineResult};
use crate::utils::io_utils::write_output;
use crate::utils::logger::Logger;

/// Command for decoding a polyline into a coordinate list
pub struct DecodeCommand<'a> {
    /// Encoded polyline
    input: String,
    /// Path to the output file, stdout when absent
    output_file: Option<String>,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> DecodeCommand<'a> {
    /// Create a new decode command from CLI arguments
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> PolylineResult<Self> {
        let (input, output_file) = resolve_io(args)?;

        Ok(DecodeCommand {
            input,
            output_file,
            logger,
        })
    }
}

impl<'a> Command for DecodeCommand<'a> {
    fn run(&self) -> PolylineResult<String> {
        info!("Decoding polyline of {} characters", self.input.len());
        let coordinates = CoordinateList::from(polyline::decode(&self.input)?);
        self.logger.log_coordinates("Decoded", &coordinates)?;

        Ok(coordinates.to_string())
    }

    fn execute(&self) -> PolylineResult<()> {
        let decoded = self.run()?;
        write_output(&decoded, self.output_file.as_deref())?;

        info!("Polyline decoding successful");
        self.logger.log("Polyline decoding successful")?;

        Ok(())
    }
}

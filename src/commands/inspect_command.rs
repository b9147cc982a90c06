//! Coordinate inspection command
//!
//! This module implements the default command, which validates a single
//! coordinate or a coordinate list and reports its canonical forms.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::resolve_io;
use crate::polyline::PolylineResult;
use crate::utils::coordinate_utils::{parse_coordinate_text, summarize};
use crate::utils::io_utils::write_output;
use crate::utils::logger::Logger;

/// Command for inspecting coordinate text
pub struct InspectCommand<'a> {
    /// Coordinate `(lat,lon)` or list `[...]` text
    input: String,
    /// Path to the output file, stdout when absent
    output_file: Option<String>,
    /// Whether to list every coordinate
    verbose: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> InspectCommand<'a> {
    /// Create a new inspect command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new InspectCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> PolylineResult<Self> {
        let (input, output_file) = resolve_io(args)?;
        let verbose = args.get_flag("verbose");

        Ok(InspectCommand {
            input,
            output_file,
            verbose,
            logger,
        })
    }
}

impl<'a> Command for InspectCommand<'a> {
    fn run(&self) -> PolylineResult<String> {
        let coordinates = parse_coordinate_text(&self.input)?;
        self.logger.log_coordinates("Inspected", &coordinates)?;

        Ok(summarize(&coordinates, self.verbose))
    }

    fn execute(&self) -> PolylineResult<()> {
        let summary = self.run()?;
        write_output(&summary, self.output_file.as_deref())?;

        info!("Inspection successful");
        Ok(())
    }
}

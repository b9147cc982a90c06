use log::{debug, info};
use crate::coordinate::{Coordinate, CoordinateList};
use crate::polyline::{self, PolylineError, PolylineResult};
use crate::utils::coordinate_utils::{parse_coordinate_text, summarize};
use crate::utils::logger::Logger;

/// Main interface to the PolylineKit library
pub struct PolylineKit {
    logger: Logger,
}

impl PolylineKit {
    /// Create a new PolylineKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to a log file; `None` keeps no log file
    ///
    /// # Returns
    /// A PolylineKit instance or an error if the log file cannot be created
    pub fn new(log_file: Option<&str>) -> PolylineResult<Self> {
        let logger = match log_file {
            Some(path) => Logger::new(path)?,
            None => Logger::without_file(),
        };
        Ok(PolylineKit { logger })
    }

    /// Encode coordinates into a polyline string
    pub fn encode(&self, coordinates: &[Coordinate]) -> PolylineResult<String> {
        let encoded = polyline::encode(coordinates);
        self.logger.log(&format!("Encoded {} points into '{}'", coordinates.len(), encoded))?;
        Ok(encoded)
    }

    /// Decode a polyline string into coordinates
    pub fn decode(&self, encoded: &str) -> PolylineResult<CoordinateList> {
        let coordinates = CoordinateList::from(polyline::decode(encoded)?);
        self.logger.log_coordinates(&format!("Decoded '{}'", encoded), &coordinates)?;
        Ok(coordinates)
    }

    /// Encode a `[(lat,lon),...]` list into a polyline string
    ///
    /// # Arguments
    /// * `list_text` - Coordinate list text
    ///
    /// # Returns
    /// The polyline, or an error if the list is malformed or out of range
    pub fn encode_text(&self, list_text: &str) -> PolylineResult<String> {
        let list_text = require_input(list_text, "coordinate list")?;
        info!("Encoding coordinate list of {} characters", list_text.len());

        let coordinates = CoordinateList::parse(list_text)?;
        self.encode(coordinates.as_slice())
    }

    /// Decode a polyline into `[(lat,lon),...]` text
    ///
    /// An empty polyline decodes to `[]`.
    pub fn decode_to_text(&self, encoded: &str) -> PolylineResult<String> {
        let encoded = encoded.trim();
        info!("Decoding polyline of {} characters", encoded.len());

        let coordinates = self.decode(encoded)?;
        Ok(coordinates.to_string())
    }

    /// Parse a coordinate `(lat,lon)` or a list `[...]` and describe it
    ///
    /// # Returns
    /// A multi-line summary with the point count, the canonical text form
    /// and the polyline encoding
    pub fn inspect(&self, text: &str) -> PolylineResult<String> {
        let text = require_input(text, "coordinate text")?;

        let coordinates = parse_coordinate_text(text)?;
        debug!("Inspecting {} coordinates", coordinates.len());
        self.logger.log_coordinates("Inspected", &coordinates)?;

        Ok(summarize(&coordinates, false))
    }
}

fn require_input<'a>(text: &'a str, name: &'static str) -> PolylineResult<&'a str> {
    let text = text.trim();
    if text.is_empty() {
        return Err(PolylineError::NullInput(name));
    }
    Ok(text)
}

//! Output records and the coordinate transform

// femtools modules
use femtools_format::NumFormat;

// external crates
use nalgebra::Vector3;

/// Mesh coordinates are in m, output in km
const M_TO_KM: f64 = 0.001;

/// Width of every output column
const FIELD_WIDTH: usize = 15;

/// Digits after the decimal point for scientific output
const PRECISION: usize = 6;

/// Re-base a mesh coordinate on the origin and convert to output axes in km
///
/// FEMTIC meshes use x to the north and y to the east, while the origin and
/// the output are (easting, northing). The mesh y is therefore shifted by the
/// origin x and becomes the first output axis, and the mesh x is shifted by
/// the origin y and becomes the second. Depth is only converted to km.
///
/// Returns (easting, northing, depth) in km.
///
/// ```rust
/// # use femtools_xyz::reproject_to_output_frame;
/// # use nalgebra::Vector3;
/// // origin at 1 km east, 2 km north
/// let origin = [1000.0, 2000.0, 0.0];
/// // 1 km north of the origin, 500 m down
/// let center = Vector3::new(1000.0, 0.0, 500.0);
///
/// let p = reproject_to_output_frame(&center, &origin);
/// assert_eq!(p, Vector3::new(1.0, 3.0, 0.5));
/// ```
pub fn reproject_to_output_frame(center: &Vector3<f64>, origin: &[f64; 3]) -> Vector3<f64> {
    Vector3::new(
        (center.y + origin[0]) * M_TO_KM,
        (center.x + origin[1]) * M_TO_KM,
        center.z * M_TO_KM,
    )
}

/// A single line of the XYZ output
///
/// The [Display](std::fmt::Display) implementation is the exact line format:
/// every field right-justified in 15 characters, floats in scientific notation
/// with 6 digits after the decimal point.
///
/// ```rust
/// # use femtools_xyz::OutputRecord;
/// let record = OutputRecord {
///     easting: 1.0,
///     northing: 2.0,
///     depth: 0.0,
///     log10_resistivity: 1.0,
///     block: 0,
/// };
///
/// assert_eq!(
///     record.to_string(),
///     "   1.000000e+00   2.000000e+00   0.000000e+00   1.000000e+00              0"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OutputRecord {
    /// Easting \[km\]
    pub easting: f64,
    /// Northing \[km\]
    pub northing: f64,
    /// Depth \[km\]
    pub depth: f64,
    /// log10 of the block resistivity
    pub log10_resistivity: f64,
    /// Resistivity block of the element
    pub block: u32,
}

impl OutputRecord {
    /// Record from an output frame position (see [reproject_to_output_frame])
    pub fn new(position: &Vector3<f64>, log10_resistivity: f64, block: u32) -> Self {
        Self {
            easting: position.x,
            northing: position.y,
            depth: position.z,
            log10_resistivity,
            block,
        }
    }
}

impl std::fmt::Display for OutputRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}{}{:>width$}",
            self.easting.sci_field(FIELD_WIDTH, PRECISION),
            self.northing.sci_field(FIELD_WIDTH, PRECISION),
            self.depth.sci_field(FIELD_WIDTH, PRECISION),
            self.log10_resistivity.sci_field(FIELD_WIDTH, PRECISION),
            self.block,
            width = FIELD_WIDTH
        )
    }
}

//! Run parameters and the parameter file reader

// crate modules
use crate::error::{Error, Result};

// femtools modules
use femtools_utils::{f, Tokens};

// standard library
use std::path::Path;
use std::str::FromStr;

// external crates
use log::{debug, info, warn};

/// Origin coordinates are given in km but applied in m
const KM_TO_M: f64 = 1000.0;

/// Parameters for a single conversion run
///
/// Usually read from a parameter file with [read_parameter_file()], but may
/// equally be parsed from a string.
///
/// ```rust
/// # use femtools_xyz::RunConfig;
/// let config: RunConfig = "3\n1.0 2.0 0.0\n2\n5 7\n".parse().unwrap();
///
/// assert_eq!(config.iteration, 3);
/// assert_eq!(config.origin, [1000.0, 2000.0, 0.0]);
/// assert_eq!(config.excluded_blocks, vec![5, 7]);
/// assert!(!config.apply_exclusions);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunConfig {
    /// Inversion iteration to convert
    pub iteration: u32,
    /// Origin (x, y, z) in metres, x being the easting
    pub origin: [f64; 3],
    /// Blocks listed for exclusion, in file order
    pub excluded_blocks: Vec<u32>,
    /// Skip elements of excluded blocks
    ///
    /// Off by default, in which case the exclusion list is read but every
    /// element is written.
    pub apply_exclusions: bool,
}

impl RunConfig {
    /// Origin converted back to km, as given in the parameter file
    pub fn origin_km(&self) -> [f64; 3] {
        self.origin.map(|v| v / KM_TO_M)
    }
}

impl FromStr for RunConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut tokens = Tokens::new(s);

        let iteration = tokens.next_u32("iteration number")?;
        info!("Iteration number : {iteration}");

        let x = tokens.next_f64("origin x")?;
        let y = tokens.next_f64("origin y")?;
        let z = tokens.next_f64("origin z")?;
        info!("Center coord (km) : (X, Y, Z) = ({x}, {y}, {z})");

        let n = tokens.next_usize("number of excluded blocks")?;
        let mut excluded_blocks = Vec::new();
        for i in 1..=n {
            excluded_blocks.push(tokens.next_u32(&f!("excluded block {i} of {n}"))?);
        }
        debug!("Excluded blocks: {excluded_blocks:?}");

        let trailing = tokens.skip_remaining();
        if trailing > 0 {
            warn!("Ignored {trailing} tokens after the excluded blocks");
        }

        Ok(Self {
            iteration,
            origin: [x * KM_TO_M, y * KM_TO_M, z * KM_TO_M],
            excluded_blocks,
            apply_exclusions: false,
        })
    }
}

/// Read a parameter file
///
/// The file is a list of whitespace separated tokens in a fixed order:
///
/// ```text
/// <iteration>
/// <origin x km> <origin y km> <origin z km>
/// <number of excluded blocks>
/// <block id> <block id> ...
/// ```
///
/// Any missing or malformed value is an error.
///
/// Example
/// ```rust, no_run
/// # use femtools_xyz::read_parameter_file;
/// let config = read_parameter_file("param.dat").unwrap();
/// ```
pub fn read_parameter_file<P: AsRef<Path>>(path: P) -> Result<RunConfig> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| Error::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    text.parse()
}

//! Read operations for resistivity block files

// crate modules
use crate::block::{Block, ResistivityBlock};
use crate::error::{Error, Result};
use crate::parsers;

// femtools modules
use femtools_utils::f;

// standard library
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

// external crates
use log::{debug, info, warn};

/// File name FEMTIC uses for the resistivity blocks of an iteration
///
/// ```rust
/// # use femtools_resistivity::block_file_name;
/// assert_eq!(block_file_name(12), "resistivity_block_iter12.dat");
/// ```
pub fn block_file_name(iteration: u32) -> String {
    f!("resistivity_block_iter{iteration}.dat")
}

/// Read a resistivity block file
///
/// Returns a result containing the [ResistivityBlock] of the file at `path`,
/// tagged with the `iteration` it belongs to.
///
/// - `path` - Path to the file, can be [&str], [String], [Path], etc...
/// - `iteration` - Inversion iteration the file was written for
///
/// Example
/// ```rust, no_run
/// # use femtools_resistivity::read_resistivity_block;
/// let blocks = read_resistivity_block("resistivity_block_iter3.dat", 3).unwrap();
/// ```
pub fn read_resistivity_block<P: AsRef<Path>>(path: P, iteration: u32) -> Result<ResistivityBlock> {
    info!("Reading {}", path.as_ref().display());
    read_resistivity_block_from(BufReader::new(File::open(path)?), iteration)
}

/// Read resistivity blocks from an open file or any other buffered reader
///
/// ```rust
/// # use femtools_resistivity::read_resistivity_block_from;
/// let bytes: &[u8] = b"1 1\n0 0\n0 2.5e+01\n";
/// let blocks = read_resistivity_block_from(bytes, 1).unwrap();
/// assert_eq!(blocks.resistivity(0, 1).unwrap(), 25.0);
/// ```
pub fn read_resistivity_block_from<R: BufRead>(reader: R, iteration: u32) -> Result<ResistivityBlock> {
    parse(reader.lines(), iteration)
}

/// Read resistivity blocks from text already in memory
///
/// ```rust
/// # use femtools_resistivity::read_resistivity_block_str;
/// let text = "3 2
///     0 0
///     1 1
///     2 1
///     0 1.0e+10
///     1 1.0e+02";
///
/// let blocks = read_resistivity_block_str(text, 5).unwrap();
/// assert_eq!(blocks.number_of_elements(), 3);
/// assert_eq!(blocks.resistivity(blocks.block_id(2).unwrap(), 5).unwrap(), 100.0);
/// ```
pub fn read_resistivity_block_str(text: &str, iteration: u32) -> Result<ResistivityBlock> {
    parse(text.lines().map(|l| Ok(l.to_string())), iteration)
}

/// Line-by-line parsing of the file content
///
/// Blank lines are skipped anywhere in the file.
fn parse<I>(lines: I, iteration: u32) -> Result<ResistivityBlock>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    let mut lines = Lines::new(lines);

    let (line, n) = lines.next_record("number of elements and blocks")?;
    let (_, (n_elements, n_blocks)) = parsers::counts(&line).map_err(|_| Error::ParseError {
        line: n,
        expected: "number of elements and blocks".into(),
        found: line.clone(),
    })?;
    // block ids are u32, so larger counts cannot be valid
    let n_blocks = u32::try_from(n_blocks).map_err(|_| Error::ParseError {
        line: n,
        expected: "number of blocks".into(),
        found: line.clone(),
    })?;
    debug!("Expecting {n_elements} elements and {n_blocks} blocks");

    // counts are not trusted for allocation, a corrupt header must fail to parse
    let mut element_blocks = Vec::new();
    for index in 0..n_elements {
        let expected = f!("block of element {index}");
        let (line, n) = lines.next_record(&expected)?;
        let (_, (id, block)) =
            parsers::element_block(&line).map_err(|_| Error::ParseError {
                line: n,
                expected,
                found: line.clone(),
            })?;
        if id != index {
            warn!("Found element id {id} at position {index}, using position");
        }
        element_blocks.push(block);
    }

    let mut blocks = Vec::new();
    for index in 0..n_blocks {
        let expected = f!("resistivity of block {index}");
        let (line, n) = lines.next_record(&expected)?;
        let (_, (id, resistivity)) =
            parsers::block_value(&line).map_err(|_| Error::ParseError {
                line: n,
                expected,
                found: line.clone(),
            })?;
        if id != index {
            return Err(Error::UnexpectedBlockId {
                expected: index,
                found: id,
            });
        }
        blocks.push(Block { id, resistivity });
    }

    let trailing = lines.count_remaining()?;
    if trailing > 0 {
        warn!("Ignored {trailing} lines after the last block");
    }

    info!(
        "Read {} elements in {} blocks for iteration {iteration}",
        element_blocks.len(),
        blocks.len()
    );

    Ok(ResistivityBlock {
        iteration,
        element_blocks,
        blocks,
    })
}

/// Non-blank lines with their 1-based line number
struct Lines<I> {
    inner: I,
    number: usize,
}

impl<I: Iterator<Item = std::io::Result<String>>> Lines<I> {
    fn new(inner: I) -> Self {
        Self { inner, number: 0 }
    }

    /// Next non-blank line, trimmed of trailing whitespace and `\r`
    fn next_record(&mut self, expected: &str) -> Result<(String, usize)> {
        for line in self.inner.by_ref() {
            self.number += 1;
            let line = line?;
            let line = line.trim_end();
            if !line.trim_start().is_empty() {
                return Ok((line.to_string(), self.number));
            }
        }
        Err(Error::UnexpectedEndOfFile(expected.to_string()))
    }

    /// Number of non-blank lines left
    fn count_remaining(&mut self) -> Result<usize> {
        let mut n = 0;
        for line in self.inner.by_ref() {
            if !line?.trim().is_empty() {
                n += 1;
            }
        }
        Ok(n)
    }
}

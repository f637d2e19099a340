// crate modules
use crate::error::{Error, Result};

/// A single resistivity block
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Block {
    /// Block id, also its position in the file
    pub id: u32,
    /// Resistivity \[Ohm.m\]
    pub resistivity: f64,
}

/// Element to block assignment and block resistivities for one iteration
///
/// This is the content of a single `resistivity_block_iter<N>.dat` file.
/// Lookups are bounds checked and return errors rather than panicking, since
/// block files and meshes are easily mixed up between runs.
///
/// ```rust
/// # use femtools_resistivity::{Block, ResistivityBlock};
/// let blocks = ResistivityBlock {
///     iteration: 2,
///     element_blocks: vec![0, 1, 1],
///     blocks: vec![
///         Block { id: 0, resistivity: 1.0e10 },
///         Block { id: 1, resistivity: 100.0 },
///     ],
/// };
///
/// assert_eq!(blocks.block_id(2).unwrap(), 1);
/// assert_eq!(blocks.resistivity(1, 2).unwrap(), 100.0);
///
/// // only iteration 2 is known
/// assert!(blocks.resistivity(1, 3).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResistivityBlock {
    /// Inversion iteration the values belong to
    pub iteration: u32,
    /// Block id of every element, indexed by element
    pub element_blocks: Vec<u32>,
    /// Resistivity blocks, indexed by block id
    pub blocks: Vec<Block>,
}

impl ResistivityBlock {
    /// Number of elements with a block assignment
    pub fn number_of_elements(&self) -> usize {
        self.element_blocks.len()
    }

    /// Number of resistivity blocks
    pub fn number_of_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// Block id assigned to an element
    pub fn block_id(&self, element: usize) -> Result<u32> {
        self.element_blocks
            .get(element)
            .copied()
            .ok_or(Error::ElementOutOfRange {
                index: element,
                number_of_elements: self.number_of_elements(),
            })
    }

    /// Get a block by id
    pub fn block(&self, block: u32) -> Result<&Block> {
        self.blocks
            .get(block as usize)
            .ok_or(Error::BlockOutOfRange {
                block,
                number_of_blocks: self.number_of_blocks(),
            })
    }

    /// Resistivity of a block at an iteration
    ///
    /// Only the iteration that was read is available.
    pub fn resistivity(&self, block: u32, iteration: u32) -> Result<f64> {
        if iteration != self.iteration {
            return Err(Error::IterationNotLoaded {
                requested: iteration,
                loaded: self.iteration,
            });
        }
        Ok(self.block(block)?.resistivity)
    }
}

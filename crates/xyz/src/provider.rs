//! Sources of element geometry and resistivity
//!
//! The converter only needs two lookups per element, so any mesh or model
//! representation can be converted by implementing these traits. The FEMTIC
//! file readers from `femtools-mesh` and `femtools-resistivity` are supported
//! out of the box.
//!
//! Providers are shared between worker threads and must therefore be `Sync`.

// crate modules
use crate::error::Result;

// femtools modules
use femtools_mesh::HexaMesh;
use femtools_resistivity::ResistivityBlock;

// external crates
use nalgebra::Vector3;

/// Element geometry
pub trait GeometryProvider: Sync {
    /// Total number of elements, all indices below this must be valid
    fn number_of_elements(&self) -> usize;

    /// Gravity center of an element in the mesh frame \[m\]
    fn gravity_center(&self, element: usize) -> Result<Vector3<f64>>;
}

/// Element to block mapping and block resistivities
pub trait ResistivityProvider: Sync {
    /// Block containing an element
    fn block_id(&self, element: usize) -> Result<u32>;

    /// Resistivity of a block at an inversion iteration \[Ohm.m\]
    fn resistivity(&self, block: u32, iteration: u32) -> Result<f64>;
}

impl GeometryProvider for HexaMesh {
    fn number_of_elements(&self) -> usize {
        HexaMesh::number_of_elements(self)
    }

    fn gravity_center(&self, element: usize) -> Result<Vector3<f64>> {
        Ok(HexaMesh::gravity_center(self, element)?)
    }
}

impl ResistivityProvider for ResistivityBlock {
    fn block_id(&self, element: usize) -> Result<u32> {
        Ok(ResistivityBlock::block_id(self, element)?)
    }

    fn resistivity(&self, block: u32, iteration: u32) -> Result<f64> {
        Ok(ResistivityBlock::resistivity(self, block, iteration)?)
    }
}

// crate modules
use crate::error::{Error, Result};
use crate::mesh::{Face, HexaElement, HexaMesh};

// femtools modules
use femtools_utils::Tokens;

// standard library
use std::fs::File;
use std::io::Read;
use std::path::Path;

// external crates
use kdam::{Bar, BarBuilder, BarExt};
use log::{debug, info, trace, warn};
use nalgebra::Vector3;

/// Keyword on the first line of a non-conforming hexahedral mesh
const MESH_TYPE: &str = "DHEXA";

/// A reader for FEMTIC non-conforming hexahedral mesh files
///
/// The whole file is tokenised in one go and every value is parsed
/// explicitly, so a truncated or corrupt mesh fails with the position and
/// meaning of the offending token rather than silently reading zeros.
///
/// Minimal Example:
/// ```rust, no_run
/// # use femtools_mesh::reader::HexaMeshReader;
/// # use std::path::Path;
/// let path = Path::new("path/to/mesh.dat");
/// let mesh = HexaMeshReader::new().parse(path).unwrap();
/// ```
#[derive(Debug, Default)]
pub struct HexaMeshReader {
    /// Disable progress bar?
    disable_progress: bool,
}

// ! ------------------------------------------------------------------------
// !                                Public API
// ! ------------------------------------------------------------------------

impl HexaMeshReader {
    /// Just calls Default::default(), nothing special to be initialised
    pub fn new() -> Self {
        Default::default()
    }

    /// Do not print the progress indicators
    pub fn disable_progress(&mut self) {
        self.disable_progress = true;
    }

    /// Parses the mesh file at `path`
    pub fn parse(&self, path: &Path) -> Result<HexaMesh> {
        info!("Reading {}", path.display());
        self.parse_reader(File::open(path)?)
    }

    /// Parses mesh data from an open file or any other reader
    pub fn parse_reader<R: Read>(&self, mut reader: R) -> Result<HexaMesh> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        self.parse_str(&text)
    }

    /// Parses mesh data already read into memory
    pub fn parse_str(&self, text: &str) -> Result<HexaMesh> {
        let mut tokens = Tokens::new(text);

        Self::check_mesh_type(&mut tokens)?;
        let nodes = Self::parse_nodes(&mut tokens)?;
        let elements = self.parse_elements(&mut tokens, nodes.len())?;

        // boundary planes and anything else are not needed here
        let ignored = tokens.skip_remaining();
        trace!("Ignored {ignored} trailing tokens");

        let mesh = HexaMesh { nodes, elements };
        debug!("{mesh}");
        Ok(mesh)
    }
}

// ! ------------------------------------------------------------------------
// !                               Sections
// ! ------------------------------------------------------------------------

impl HexaMeshReader {
    /// Only the non-conforming hexahedral type is supported
    fn check_mesh_type(tokens: &mut Tokens) -> Result<()> {
        let mesh_type = tokens.next_token("mesh type")?;
        if mesh_type != MESH_TYPE {
            return Err(Error::UnsupportedMeshType(mesh_type.to_string()));
        }
        Ok(())
    }

    /// Node coordinates, ids are positional
    fn parse_nodes(tokens: &mut Tokens) -> Result<Vec<Vector3<f64>>> {
        let n = tokens.next_usize("number of nodes")?;
        // counts are not trusted for allocation, a corrupt header must fail to parse
        let mut nodes = Vec::new();

        for index in 0..n {
            let id = tokens.next_usize("node id")?;
            Self::check_id("node", index, id);
            let x = tokens.next_f64("node x coordinate")?;
            let y = tokens.next_f64("node y coordinate")?;
            let z = tokens.next_f64("node z coordinate")?;
            nodes.push(Vector3::new(x, y, z));
        }

        debug!("Read {n} nodes");
        Ok(nodes)
    }

    /// Element definitions and face neighbours
    fn parse_elements(&self, tokens: &mut Tokens, n_nodes: usize) -> Result<Vec<HexaElement>> {
        let n = tokens.next_usize("number of elements")?;
        let mut elements = Vec::new();
        let mut progress_bar = self.init_progress_bar(n)?;

        if !self.disable_progress {
            progress_bar.refresh()?;
        };

        for index in 0..n {
            progress_bar.update(1)?;
            elements.push(Self::parse_element(tokens, index, n_nodes)?);
        }

        // need an extra line for clean spacing if the progress bar is printed
        if !self.disable_progress {
            eprintln!()
        };

        debug!("Read {n} elements");
        Ok(elements)
    }

    /// A single element record
    fn parse_element(tokens: &mut Tokens, index: usize, n_nodes: usize) -> Result<HexaElement> {
        let id = tokens.next_usize("element id")?;
        Self::check_id("element", index, id);

        let mut element = HexaElement::default();
        for node in element.nodes.iter_mut() {
            *node = tokens.next_usize("element node")?;
            if *node >= n_nodes {
                return Err(Error::NodeOutOfRange {
                    element: index,
                    node: *node,
                    number_of_nodes: n_nodes,
                });
            }
        }

        for face in Face::ALL {
            let count = tokens.next_usize("number of face neighbours")?;
            let neighbours = &mut element.neighbours[face as usize];
            for _ in 0..count {
                let neighbour = tokens.next_i64("face neighbour")?;
                // negative ids are placeholders for the outer boundary
                if let Ok(neighbour) = usize::try_from(neighbour) {
                    neighbours.push(neighbour);
                }
            }
        }

        Ok(element)
    }
}

// ! ------------------------------------------------------------------------
// !                               Helpers
// ! ------------------------------------------------------------------------

impl HexaMeshReader {
    /// Ids are ignored in favour of file order, but mismatches are suspicious
    fn check_id(kind: &str, index: usize, id: usize) {
        if index != id {
            warn!("Found {kind} id {id} at position {index}, using position");
        }
    }

    /// Initialise the progress bar, if wanted
    fn init_progress_bar(&self, total: usize) -> Result<Bar> {
        BarBuilder::default()
            .total(total)
            .unit(" elements")
            .unit_scale(true)
            .disable(self.disable_progress)
            .bar_format("{count} elements [{rate} elements/s]   ")
            .build()
            .map_err(Error::ProgressBar)
    }
}

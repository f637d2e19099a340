//! Module for mesh-related data and implementations

// crate modules
use crate::error::{Error, Result};

// femtools modules
use femtools_format::{f, NumFormat};

// external crates
use nalgebra::Vector3;

/// Faces of a hexahedral element in FEMTIC order
///
/// The discriminant is the position of the face in the element record of the
/// mesh file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    /// Face normal to -x
    XMinus = 0,
    /// Face normal to +x
    XPlus = 1,
    /// Face normal to -y
    YMinus = 2,
    /// Face normal to +y
    YPlus = 3,
    /// Face normal to -z
    ZMinus = 4,
    /// Face normal to +z
    ZPlus = 5,
}

impl Face {
    /// All faces in file order
    pub const ALL: [Face; 6] = [
        Face::XMinus,
        Face::XPlus,
        Face::YMinus,
        Face::YPlus,
        Face::ZMinus,
        Face::ZPlus,
    ];
}

/// A single hexahedral element of a [HexaMesh]
///
/// Elements are defined by their eight corner nodes. Faces of a
/// non-conforming mesh may border more than one smaller element, so every face
/// keeps a list of neighbours. Faces on the outer boundary have none.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HexaElement {
    /// Indices of the eight corner nodes
    pub nodes: [usize; 8],
    /// Neighbouring elements across each face, see [Face] for ordering
    pub neighbours: [Vec<usize>; 6],
}

impl HexaElement {
    /// Neighbouring elements across `face`
    ///
    /// ```rust
    /// # use femtools_mesh::{Face, HexaElement};
    /// let mut element = HexaElement::default();
    /// element.neighbours[Face::XPlus as usize] = vec![4, 5];
    ///
    /// assert_eq!(element.neighbours(Face::XPlus), &[4, 5]);
    /// assert!(element.neighbours(Face::XMinus).is_empty());
    /// ```
    pub fn neighbours(&self, face: Face) -> &[usize] {
        &self.neighbours[face as usize]
    }

    /// True if `face` lies on the outer boundary of the mesh
    pub fn is_boundary(&self, face: Face) -> bool {
        self.neighbours(face).is_empty()
    }
}

/// Non-conforming hexahedral mesh (FEMTIC `DHEXA`)
///
/// Coordinates are kept exactly as given in the mesh file, which for FEMTIC
/// means metres with x to the north, y to the east, and z positive downwards.
///
/// Node and element indices are positional, i.e. the order they appear in the
/// file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HexaMesh {
    /// Node coordinates
    pub nodes: Vec<Vector3<f64>>,
    /// Hexahedral elements
    pub elements: Vec<HexaElement>,
}

impl HexaMesh {
    /// Total number of nodes
    pub fn number_of_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of elements
    pub fn number_of_elements(&self) -> usize {
        self.elements.len()
    }

    /// Get an element by index
    pub fn element(&self, index: usize) -> Result<&HexaElement> {
        self.elements.get(index).ok_or(Error::ElementOutOfRange {
            index,
            number_of_elements: self.number_of_elements(),
        })
    }

    /// Gravity center of an element
    ///
    /// The arithmetic mean of the eight corner nodes.
    ///
    /// ```rust
    /// # use femtools_mesh::{HexaElement, HexaMesh};
    /// # use nalgebra::Vector3;
    /// let mut mesh = HexaMesh::default();
    /// for z in [0.0, 2.0] {
    ///     mesh.nodes.push(Vector3::new(0.0, 0.0, z));
    ///     mesh.nodes.push(Vector3::new(2.0, 0.0, z));
    ///     mesh.nodes.push(Vector3::new(2.0, 2.0, z));
    ///     mesh.nodes.push(Vector3::new(0.0, 2.0, z));
    /// }
    /// mesh.elements.push(HexaElement {
    ///     nodes: [0, 1, 2, 3, 4, 5, 6, 7],
    ///     ..Default::default()
    /// });
    ///
    /// assert_eq!(mesh.gravity_center(0).unwrap(), Vector3::new(1.0, 1.0, 1.0));
    /// assert!(mesh.gravity_center(1).is_err());
    /// ```
    pub fn gravity_center(&self, index: usize) -> Result<Vector3<f64>> {
        let element = self.element(index)?;
        let mut sum: Vector3<f64> = Vector3::zeros();
        for &node in &element.nodes {
            sum += self.node(index, node)?;
        }
        Ok(sum / element.nodes.len() as f64)
    }

    /// Axis aligned bounding box of all nodes as (min, max)
    ///
    /// Returns `None` for a mesh without nodes.
    pub fn bounds(&self) -> Option<(Vector3<f64>, Vector3<f64>)> {
        let first = self.nodes.first()?;
        Some(self.nodes.iter().fold((*first, *first), |(lo, hi), n| {
            (lo.inf(n), hi.sup(n))
        }))
    }

    /// Node coordinate, checked against the node list
    fn node(&self, element: usize, node: usize) -> Result<&Vector3<f64>> {
        self.nodes.get(node).ok_or(Error::NodeOutOfRange {
            element,
            node,
            number_of_nodes: self.number_of_nodes(),
        })
    }
}

impl std::fmt::Display for HexaMesh {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = "HexaMesh {\n".to_string();
        s += &f!("    nodes: {}\n", self.number_of_nodes());
        s += &f!("    elements: {}\n", self.number_of_elements());
        if let Some((lo, hi)) = self.bounds() {
            s += &f!(
                "    min: ({}, {}, {})\n",
                lo.x.sci(4, 2),
                lo.y.sci(4, 2),
                lo.z.sci(4, 2)
            );
            s += &f!(
                "    max: ({}, {}, {})\n",
                hi.x.sci(4, 2),
                hi.y.sci(4, 2),
                hi.z.sci(4, 2)
            );
        }
        s += "}";

        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_cube(offset: f64) -> HexaMesh {
        let mut mesh = HexaMesh::default();
        for z in [0.0, 1.0] {
            for (x, y) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)] {
                mesh.nodes.push(Vector3::new(x + offset, y, z));
            }
        }
        mesh.elements.push(HexaElement {
            nodes: [0, 1, 2, 3, 4, 5, 6, 7],
            ..Default::default()
        });
        mesh
    }

    #[test]
    fn gravity_center_is_mean_of_nodes() {
        let mesh = unit_cube(10.0);
        assert_eq!(mesh.gravity_center(0).unwrap(), Vector3::new(10.5, 0.5, 0.5));
    }

    #[test]
    fn dangling_node_reference() {
        let mut mesh = unit_cube(0.0);
        mesh.elements[0].nodes[7] = 99;
        match mesh.gravity_center(0) {
            Err(Error::NodeOutOfRange {
                element: 0,
                node: 99,
                number_of_nodes: 8,
            }) => (),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn bounds_cover_all_nodes() {
        let mesh = unit_cube(-2.0);
        let (lo, hi) = mesh.bounds().unwrap();
        assert_eq!(lo, Vector3::new(-2.0, 0.0, 0.0));
        assert_eq!(hi, Vector3::new(-1.0, 1.0, 1.0));
        assert!(HexaMesh::default().bounds().is_none());
    }

    #[test]
    fn boundary_faces() {
        let mut element = HexaElement::default();
        element.neighbours[Face::ZPlus as usize] = vec![1];
        assert!(!element.is_boundary(Face::ZPlus));
        assert!(Face::ALL
            .iter()
            .filter(|&&face| face != Face::ZPlus)
            .all(|&face| element.is_boundary(face)));
    }

    #[test]
    fn summary_display() {
        let mesh = unit_cube(0.0);
        let s = mesh.to_string();
        assert!(s.contains("nodes: 8"));
        assert!(s.contains("elements: 1"));
        assert!(s.contains("max: (1.0000e+00, 1.0000e+00, 1.0000e+00)"));
    }
}

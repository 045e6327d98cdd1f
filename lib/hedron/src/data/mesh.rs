use num_traits::AsPrimitive;
use trisoup_common::ArrayIndex;

pub mod attribute;
mod dedup;

use attribute::{AttributeDescriptor, AttributeUsage, PointAttribute};

/// Three point indices, in winding order.
pub type Face<Idx> = [Idx; 3];

/// How an attribute varies across the elements of a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// One value per vertex, shared by every corner touching it.
    Vertex,
    /// Values may differ between the corners of a face.
    Corner,
    /// One value per face, shared by all of its corners.
    Face,
}

/// A set of points, triangular faces between them, and attributes describing each point.
///
/// Points carry no data of their own; each attribute maps every point onto one of its values.
///
/// # Invariants
///
/// * every explicit attribute mapping has exactly `num_points` entries
/// * `element_types.len()` == `attributes.len()`
#[derive(Debug, Clone)]
pub struct Mesh<Idx: ArrayIndex = u32> {
    name: Option<String>,
    num_points: usize,
    faces: Vec<Option<Face<Idx>>>,
    attributes: Vec<PointAttribute<Idx>>,
    element_types: Vec<Option<ElementType>>,
}

impl<Idx: ArrayIndex> Default for Mesh<Idx> {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl<Idx: ArrayIndex> Mesh<Idx> {
    /// Construct a mesh with `num_points` points and `num_faces` unassigned faces.
    ///
    /// # Panics
    ///
    /// * `num_points` points cannot be addressed by `Idx`
    pub fn new(num_points: usize, num_faces: usize) -> Self {
        assert!(
            Idx::can_address(num_points),
            "{num_points} points cannot be indexed by {}",
            std::any::type_name::<Idx>()
        );
        Self {
            name: None,
            num_points,
            faces: vec![None; num_faces],
            attributes: Vec::new(),
            element_types: Vec::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[inline]
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    #[inline(always)]
    pub fn num_points(&self) -> usize {
        self.num_points
    }

    #[inline(always)]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// The points of face `face`, or `None` if it hasn't been assigned.
    ///
    /// # Panics
    ///
    /// * `face` >= `self.num_faces()`
    #[inline]
    pub fn face(&self, face: usize) -> Option<Face<Idx>> {
        self.faces[face]
    }

    #[inline]
    pub fn faces(&self) -> &[Option<Face<Idx>>] {
        &self.faces
    }

    /// Whether every face has been assigned.
    pub fn is_complete(&self) -> bool {
        self.faces.iter().all(Option::is_some)
    }

    /// # Panics
    ///
    /// * `face` >= `self.num_faces()`
    /// * any point in `points` >= `self.num_points()`
    pub fn set_face(&mut self, face: usize, points: Face<Idx>) {
        for p in points {
            let p: usize = p.as_();
            assert!(
                p < self.num_points,
                "face {face} references point {p}, but the mesh has {} points",
                self.num_points
            );
        }
        self.faces[face] = Some(points);
    }

    /// Add an attribute with one zeroed value per point and an identity mapping, returning its
    /// index. The attribute's unique id defaults to that index.
    pub fn add_attribute(&mut self, desc: AttributeDescriptor) -> usize {
        let id = self.attributes.len();
        let mut attr = PointAttribute::new(desc, self.num_points);
        attr.set_unique_id(id as u32);
        self.attributes.push(attr);
        self.element_types.push(None);
        id
    }

    #[inline(always)]
    pub fn num_attributes(&self) -> usize {
        self.attributes.len()
    }

    /// # Panics
    ///
    /// * `id` >= `self.num_attributes()`
    #[inline]
    pub fn attribute(&self, id: usize) -> &PointAttribute<Idx> {
        &self.attributes[id]
    }

    /// # Panics
    ///
    /// * `id` >= `self.num_attributes()`
    #[inline]
    pub fn attribute_mut(&mut self, id: usize) -> &mut PointAttribute<Idx> {
        &mut self.attributes[id]
    }

    #[inline]
    pub fn attributes(&self) -> &[PointAttribute<Idx>] {
        &self.attributes
    }

    /// The first attribute with the given usage.
    pub fn named_attribute(&self, usage: AttributeUsage) -> Option<&PointAttribute<Idx>> {
        self.attributes.iter().find(|a| a.usage() == usage)
    }

    pub fn attribute_by_unique_id(&self, unique_id: u32) -> Option<&PointAttribute<Idx>> {
        self.attributes.iter().find(|a| a.unique_id() == unique_id)
    }

    /// How attribute `id` varies across the mesh, if known.
    ///
    /// # Panics
    ///
    /// * `id` >= `self.num_attributes()`
    #[inline]
    pub fn element_type(&self, id: usize) -> Option<ElementType> {
        self.element_types[id]
    }

    /// # Panics
    ///
    /// * `id` >= `self.num_attributes()`
    #[inline]
    pub fn set_element_type(&mut self, id: usize, element_type: ElementType) {
        self.element_types[id] = Some(element_type);
    }

    /// The raw value of attribute `attribute` at corner `corner` of face `face`, or `None` if the
    /// face hasn't been assigned.
    ///
    /// # Panics
    ///
    /// * `face` >= `self.num_faces()`
    /// * `corner` >= 3
    /// * `attribute` >= `self.num_attributes()`
    pub fn corner_value(&self, face: usize, corner: usize, attribute: usize) -> Option<&[u8]> {
        let point = self.faces[face]?[corner];
        Some(self.attributes[attribute].point_value(point.as_()))
    }
}

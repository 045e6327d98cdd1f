mod classify;
pub use classify::*;

use hedron::{AttributeDescriptor, AttributeUsage, AttributeValue, DataType, Mesh};
use trisoup_common::ArrayIndex;

use crate::Error;

/// Builds a [Mesh] from triangle soup: faces whose corners are supplied independently, with no
/// assumption that neighbouring faces share vertices.
///
/// Each face owns three points of its own (face `f` owns points `3f`, `3f + 1` and `3f + 2`)
/// until [finalize](Self::finalize) merges identical values and identical points.
///
/// # Sessions
///
/// A session begins with [start](Self::start) and ends with [finalize](Self::finalize), which
/// hands the finished mesh to the caller. Calling `start` again begins an unrelated session and
/// discards any unfinished one. Every other method requires an active session.
///
/// # Panics
///
/// Misuse of the builder is a programming error rather than a runtime condition, so the following
/// panic instead of returning errors:
///
/// * calling any method other than `start` outside of a session
/// * referring to an attribute or face which doesn't exist
/// * writing a value whose length isn't the attribute's stride
#[derive(Debug)]
pub struct TriangleSoupMeshBuilder<Idx: ArrayIndex = u32> {
    mesh: Option<Mesh<Idx>>,
    classifications: Vec<Classification>,
}

impl<Idx: ArrayIndex> Default for TriangleSoupMeshBuilder<Idx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Idx: ArrayIndex> TriangleSoupMeshBuilder<Idx> {
    /// Construct a builder with no active session.
    pub fn new() -> Self {
        Self {
            mesh: None,
            classifications: Vec::new(),
        }
    }

    /// Construct a builder and [start](Self::start) a session for `num_faces` faces.
    pub fn with_faces(num_faces: usize) -> Self {
        let mut res = Self::new();
        res.start(num_faces);
        res
    }

    /// Begin a session for a mesh of `num_faces` triangles, discarding any unfinished session.
    ///
    /// # Panics
    ///
    /// * `3 * num_faces` points cannot be indexed by `Idx`
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub fn start(&mut self, num_faces: usize) {
        let num_points = num_faces
            .checked_mul(3)
            .unwrap_or_else(|| panic!("{num_faces} faces is too many points to represent"));
        self.mesh = Some(Mesh::new(num_points, num_faces));
        self.classifications.clear();
    }

    /// Whether a session is active.
    #[inline]
    pub fn is_building(&self) -> bool {
        self.mesh.is_some()
    }

    /// The mesh under construction, if a session is active.
    #[inline]
    pub fn mesh(&self) -> Option<&Mesh<Idx>> {
        self.mesh.as_ref()
    }

    fn building(&self) -> &Mesh<Idx> {
        match &self.mesh {
            Some(mesh) => mesh,
            None => panic!("no active session; call `start` first"),
        }
    }

    fn building_mut(&mut self) -> &mut Mesh<Idx> {
        match &mut self.mesh {
            Some(mesh) => mesh,
            None => panic!("no active session; call `start` first"),
        }
    }

    /// Attach a display name to the mesh.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.building_mut().set_name(name);
    }

    /// Declare an attribute, returning its index.
    ///
    /// # Panics
    ///
    /// * `num_components` == 0
    pub fn add_attribute(
        &mut self,
        usage: AttributeUsage,
        num_components: u8,
        data_type: DataType,
    ) -> usize {
        self.add_normalized_attribute(usage, num_components, data_type, false)
    }

    /// Declare an attribute whose integer values are normalized when read as floats.
    pub fn add_normalized_attribute(
        &mut self,
        usage: AttributeUsage,
        num_components: u8,
        data_type: DataType,
        normalized: bool,
    ) -> usize {
        self.add_attribute_with(
            AttributeDescriptor::new(usage, num_components, data_type).normalized(normalized),
        )
    }

    /// Declare an attribute shaped like values of type `T`.
    pub fn add_typed_attribute<T: AttributeValue>(&mut self, usage: AttributeUsage) -> usize {
        self.add_attribute_with(AttributeDescriptor::of::<T>(usage))
    }

    /// Declare an attribute from a full descriptor.
    pub fn add_attribute_with(&mut self, desc: AttributeDescriptor) -> usize {
        let id = self.building_mut().add_attribute(desc);
        self.classifications.push(Classification::Unclassified);
        id
    }

    pub fn set_attribute_unique_id(&mut self, attribute: usize, unique_id: u32) {
        self.building_mut()
            .attribute_mut(attribute)
            .set_unique_id(unique_id);
    }

    pub fn set_attribute_name(&mut self, attribute: usize, name: impl Into<String>) {
        self.building_mut().attribute_mut(attribute).set_name(name);
    }

    /// How `attribute` has been written so far.
    ///
    /// # Panics
    ///
    /// * `attribute` hasn't been declared in this session
    #[inline]
    pub fn classification(&self, attribute: usize) -> Classification {
        self.classifications[attribute]
    }

    /// Write one value for each corner of `face`.
    ///
    /// Marks `attribute` as varying per corner for the rest of the session.
    pub fn set_attribute_values_for_face(
        &mut self,
        attribute: usize,
        face: usize,
        corner_0: &[u8],
        corner_1: &[u8],
        corner_2: &[u8],
    ) {
        self.write_face(attribute, face, [corner_0, corner_1, corner_2]);
        self.classifications[attribute].mark_corner();
    }

    /// Write a single value shared by every corner of `face`.
    ///
    /// Marks `attribute` as uniform per face, unless it has already been written per corner.
    pub fn set_per_face_attribute_value_for_face(
        &mut self,
        attribute: usize,
        face: usize,
        value: &[u8],
    ) {
        self.write_face(attribute, face, [value; 3]);
        self.classifications[attribute].mark_face();
    }

    /// Typed version of [set_attribute_values_for_face](Self::set_attribute_values_for_face).
    ///
    /// # Panics
    ///
    /// * `T` doesn't match the component count & data type of `attribute`
    pub fn set_corner_values<T: AttributeValue>(
        &mut self,
        attribute: usize,
        face: usize,
        values: [T; 3],
    ) {
        self.check_type::<T>(attribute);
        self.set_attribute_values_for_face(
            attribute,
            face,
            values[0].as_bytes(),
            values[1].as_bytes(),
            values[2].as_bytes(),
        );
    }

    /// Typed version of
    /// [set_per_face_attribute_value_for_face](Self::set_per_face_attribute_value_for_face).
    ///
    /// # Panics
    ///
    /// * `T` doesn't match the component count & data type of `attribute`
    pub fn set_face_value<T: AttributeValue>(&mut self, attribute: usize, face: usize, value: T) {
        self.check_type::<T>(attribute);
        self.set_per_face_attribute_value_for_face(attribute, face, value.as_bytes());
    }

    fn check_type<T: AttributeValue>(&self, attribute: usize) {
        let attr = self.building().attribute(attribute);
        assert!(
            attr.num_components() == T::COMPONENTS && attr.data_type() == T::DATA_TYPE,
            "attribute {attribute} holds {} x {:?}, but was written with {}",
            attr.num_components(),
            attr.data_type(),
            std::any::type_name::<T>()
        );
    }

    fn write_face(&mut self, attribute: usize, face: usize, values: [&[u8]; 3]) {
        let mesh = self.building_mut();
        assert!(
            face < mesh.num_faces(),
            "face {face} out of range; the mesh has {} faces",
            mesh.num_faces()
        );
        let start = 3 * face;
        let attr = mesh.attribute_mut(attribute);
        for (corner, value) in values.into_iter().enumerate() {
            attr.set_value(start + corner, value);
        }
        mesh.set_face(
            face,
            [
                Idx::from_usize(start),
                Idx::from_usize(start + 1),
                Idx::from_usize(start + 2),
            ],
        );
    }

    /// End the session, consolidating the soup and handing over the finished mesh.
    ///
    /// In order:
    /// 1. identical values within each attribute are merged
    /// 2. points using the same value in every attribute are merged
    /// 3. each attribute that was written is stamped with its [ElementType](hedron::ElementType)
    ///
    /// Attributes which were declared but never written keep their zeroed values and take part in
    /// deduplication like any other, but are left without an element type.
    ///
    /// # Errors
    ///
    /// Fails if attribute values cannot be deduplicated, e.g. because the mesh has no faces or an
    /// attribute has more than 4 components. The session is over either way.
    ///
    /// # Panics
    ///
    /// * no session is active (including when `finalize` has already been called)
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self), err))]
    pub fn finalize(&mut self) -> Result<Mesh<Idx>, Error> {
        let mut mesh = match self.mesh.take() {
            Some(mesh) => mesh,
            None => panic!("no active session; `finalize` may only be called once per `start`"),
        };
        let classifications = std::mem::take(&mut self.classifications);

        mesh.deduplicate_attribute_values()?;
        mesh.deduplicate_point_ids();
        for (attribute, class) in classifications.into_iter().enumerate() {
            if let Some(element_type) = class.element_type() {
                mesh.set_element_type(attribute, element_type);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            points = mesh.num_points(),
            faces = mesh.num_faces(),
            attributes = mesh.num_attributes(),
            "finalized triangle soup"
        );
        Ok(mesh)
    }
}

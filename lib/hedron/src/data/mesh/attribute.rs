use num_traits::AsPrimitive;
use trisoup_common::ArrayIndex;

mod storage;
pub use storage::*;

mod value;
pub use value::*;

/// The semantic meaning of an attribute channel.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeUsage {
    Position,
    Normal,
    Color,
    Texcoord,
    Tangent,
    Material,
    Joints,
    Weights,
    /// Anything not covered by the other usages.
    Generic,
}

/// The scalar type of each component of an attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
    Bool,
}

impl DataType {
    /// Size of a single component, in bytes.
    pub const fn size(self) -> usize {
        use std::mem::size_of;
        match self {
            DataType::I8 => size_of::<i8>(),
            DataType::U8 => size_of::<u8>(),
            DataType::I16 => size_of::<i16>(),
            DataType::U16 => size_of::<u16>(),
            DataType::I32 => size_of::<i32>(),
            DataType::U32 => size_of::<u32>(),
            DataType::I64 => size_of::<i64>(),
            DataType::U64 => size_of::<u64>(),
            DataType::F32 => size_of::<f32>(),
            DataType::F64 => size_of::<f64>(),
            DataType::Bool => size_of::<bool>(),
        }
    }

    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, DataType::F32 | DataType::F64)
    }
}

/// Everything needed to allocate an attribute channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttributeDescriptor {
    pub usage: AttributeUsage,
    pub num_components: u8,
    pub data_type: DataType,
    /// Whether integer values should be mapped to `0..=1` (or `-1..=1`) when read as floats.
    pub normalized: bool,
}

impl AttributeDescriptor {
    /// # Panics
    ///
    /// * `num_components` == 0
    pub fn new(usage: AttributeUsage, num_components: u8, data_type: DataType) -> Self {
        assert!(num_components >= 1, "attribute must have at least one component");
        Self {
            usage,
            num_components,
            data_type,
            normalized: false,
        }
    }

    /// Descriptor matching the layout of the value type `T`.
    pub fn of<T: AttributeValue>(usage: AttributeUsage) -> Self {
        Self::new(usage, T::COMPONENTS, T::DATA_TYPE)
    }

    #[inline]
    pub fn normalized(mut self, normalized: bool) -> Self {
        self.normalized = normalized;
        self
    }

    /// Size of one value, in bytes.
    #[inline]
    pub const fn stride(&self) -> usize {
        self.data_type.size() * self.num_components as usize
    }
}

/// How the points of a mesh are mapped onto the values of an attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointMapping<Idx: ArrayIndex> {
    /// Point `i` uses value `i`.
    Identity,
    /// Point `i` uses value `map[i]`.
    Explicit(Vec<Idx>),
}

/// A typed attribute channel: a dense array of values plus a mapping from points onto them.
#[derive(Debug, Clone)]
pub struct PointAttribute<Idx: ArrayIndex = u32> {
    desc: AttributeDescriptor,
    unique_id: u32,
    name: Option<String>,
    pub(crate) buffer: AttributeBuffer,
    pub(crate) mapping: PointMapping<Idx>,
}

impl<Idx: ArrayIndex> PointAttribute<Idx> {
    /// Construct an attribute with `num_values` zeroed values and an identity mapping.
    pub fn new(desc: AttributeDescriptor, num_values: usize) -> Self {
        Self {
            desc,
            unique_id: 0,
            name: None,
            buffer: AttributeBuffer::zeroed(desc.stride(), num_values),
            mapping: PointMapping::Identity,
        }
    }

    #[inline(always)]
    pub fn descriptor(&self) -> &AttributeDescriptor {
        &self.desc
    }

    #[inline(always)]
    pub fn usage(&self) -> AttributeUsage {
        self.desc.usage
    }

    #[inline(always)]
    pub fn num_components(&self) -> u8 {
        self.desc.num_components
    }

    #[inline(always)]
    pub fn data_type(&self) -> DataType {
        self.desc.data_type
    }

    #[inline(always)]
    pub fn normalized(&self) -> bool {
        self.desc.normalized
    }

    #[inline(always)]
    pub fn stride(&self) -> usize {
        self.desc.stride()
    }

    #[inline]
    pub fn unique_id(&self) -> u32 {
        self.unique_id
    }

    #[inline]
    pub fn set_unique_id(&mut self, unique_id: u32) {
        self.unique_id = unique_id;
    }

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[inline]
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// The number of values stored by this attribute; not necessarily the number of points.
    #[inline]
    pub fn num_values(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn mapping(&self) -> &PointMapping<Idx> {
        &self.mapping
    }

    #[inline]
    pub fn is_mapping_identity(&self) -> bool {
        matches!(self.mapping, PointMapping::Identity)
    }

    /// The raw bytes of the value at `value_index`.
    ///
    /// # Panics
    ///
    /// * `value_index` >= `self.num_values()`
    #[inline]
    pub fn value(&self, value_index: usize) -> &[u8] {
        self.buffer.get(value_index)
    }

    /// Overwrite the value at `value_index`.
    ///
    /// # Panics
    ///
    /// * `value_index` >= `self.num_values()`
    /// * `bytes.len()` != `self.stride()`
    #[inline]
    pub fn set_value(&mut self, value_index: usize, bytes: &[u8]) {
        self.buffer.set(value_index, bytes)
    }

    /// Read the value at `value_index` as a `T`.
    pub fn get<T: AttributeValue>(&self, value_index: usize) -> Result<T, DynamicAttributeError> {
        if T::COMPONENTS != self.desc.num_components {
            return Err(DynamicAttributeError::Width);
        }
        if T::DATA_TYPE != self.desc.data_type {
            return Err(DynamicAttributeError::Component);
        }
        let bytes = self
            .buffer
            .try_get(value_index)
            .ok_or(DynamicAttributeError::OutOfBounds(value_index))?;
        Ok(bytemuck::pod_read_unaligned(bytes))
    }

    /// The index of the value used by `point`.
    ///
    /// # Panics
    ///
    /// * the mapping is explicit and `point` is outside of it
    #[inline]
    pub fn mapped_index(&self, point: usize) -> Idx {
        match &self.mapping {
            PointMapping::Identity => Idx::from_usize(point),
            PointMapping::Explicit(map) => map[point],
        }
    }

    /// The raw bytes of the value used by `point`.
    #[inline]
    pub fn point_value(&self, point: usize) -> &[u8] {
        self.value(self.mapped_index(point).as_())
    }

    /// Replace the mapping with an explicit one covering `num_points` points, all of which map
    /// to value 0 until assigned with [Self::set_point_map_entry].
    pub fn set_explicit_mapping(&mut self, num_points: usize) {
        self.mapping = PointMapping::Explicit(vec![Idx::zero(); num_points]);
    }

    /// Point `point` at `value_index`.
    ///
    /// # Panics
    ///
    /// * the mapping is not explicit
    /// * `point` is outside of the explicit mapping
    pub fn set_point_map_entry(&mut self, point: usize, value_index: Idx) {
        match &mut self.mapping {
            PointMapping::Explicit(map) => map[point] = value_index,
            PointMapping::Identity => {
                panic!("cannot set a point map entry on an identity-mapped attribute")
            }
        }
    }
}

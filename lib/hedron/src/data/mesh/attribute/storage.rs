#[derive(Debug, thiserror::Error)]
pub enum DynamicAttributeError {
    #[error("cannot read attribute value as requested type (width mismatch)")]
    Width,
    #[error("cannot read attribute value as requested type (component mismatch)")]
    Component,
    #[error("attribute value index {0} out of bounds")]
    OutOfBounds(usize),
}

/// Untyped, densely packed storage for the values of one attribute.
///
/// # Invariants
///
/// * `data.len() % stride == 0`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeBuffer {
    data: Vec<u8>,
    stride: usize,
}

impl AttributeBuffer {
    /// # Panics
    ///
    /// * `stride` == 0
    pub fn zeroed(stride: usize, len: usize) -> Self {
        assert!(stride > 0, "attribute values must not be zero-sized");
        Self {
            data: vec![0; stride * len],
            stride,
        }
    }

    #[inline(always)]
    pub fn stride(&self) -> usize {
        self.stride
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len() / self.stride
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// # Panics
    ///
    /// * `index` >= `self.len()`
    #[inline]
    pub fn get(&self, index: usize) -> &[u8] {
        let start = index * self.stride;
        &self.data[start..start + self.stride]
    }

    #[inline]
    pub fn try_get(&self, index: usize) -> Option<&[u8]> {
        let start = index.checked_mul(self.stride)?;
        self.data.get(start..start.checked_add(self.stride)?)
    }

    /// # Panics
    ///
    /// * `index` >= `self.len()`
    /// * `value.len()` != `self.stride()`
    #[inline]
    pub fn set(&mut self, index: usize, value: &[u8]) {
        assert_eq!(
            value.len(),
            self.stride,
            "attribute value is {} bytes; expected {}",
            value.len(),
            self.stride
        );
        let start = index * self.stride;
        self.data[start..start + self.stride].copy_from_slice(value);
    }

    /// Iterate through each value in order.
    pub fn iter(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(self.stride)
    }

    /// Append a value to the end of the buffer.
    ///
    /// # Panics
    ///
    /// * `value.len()` != `self.stride()`
    pub(crate) fn push(&mut self, value: &[u8]) {
        assert_eq!(value.len(), self.stride);
        self.data.extend_from_slice(value);
    }

    /// An empty buffer with the same stride and room for `cap` values.
    pub(crate) fn empty_like(&self, cap: usize) -> Self {
        Self {
            data: Vec::with_capacity(cap * self.stride),
            stride: self.stride,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AttributeBuffer;

    #[test]
    fn access() {
        let mut buf = AttributeBuffer::zeroed(2, 3);
        assert_eq!(buf.len(), 3);
        buf.set(1, &[4, 5]);
        assert_eq!(buf.get(1), &[4, 5]);
        assert_eq!(buf.try_get(2), Some(&[0u8, 0][..]));
        assert_eq!(buf.try_get(3), None);
        assert_eq!(buf.iter().count(), 3);
    }

    #[test]
    #[should_panic]
    fn wrong_width() {
        let mut buf = AttributeBuffer::zeroed(4, 1);
        buf.set(0, &[1, 2, 3]);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds() {
        let mut buf = AttributeBuffer::zeroed(1, 1);
        buf.set(1, &[1]);
    }
}

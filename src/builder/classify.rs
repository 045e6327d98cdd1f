use hedron::ElementType;

/// What the writes made so far reveal about how an attribute varies across each face.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// No face has been written.
    #[default]
    Unclassified,
    /// At least one face was written with per-corner values.
    CornerVarying,
    /// Every face written so far was written with a single per-face value.
    FaceUniform,
}

impl Classification {
    /// Record a per-corner write. Always wins.
    #[inline]
    pub fn mark_corner(&mut self) {
        *self = Classification::CornerVarying;
    }

    /// Record a per-face write. Never overrides a previous classification.
    #[inline]
    pub fn mark_face(&mut self) {
        if let Classification::Unclassified = self {
            *self = Classification::FaceUniform;
        }
    }

    /// The element type to stamp onto the finished mesh, if any.
    pub fn element_type(self) -> Option<ElementType> {
        match self {
            Classification::Unclassified => None,
            Classification::CornerVarying => Some(ElementType::Corner),
            Classification::FaceUniform => Some(ElementType::Face),
        }
    }
}

use crate::DataType;

/// Trait for types which can be used as attribute values.
///
/// Implementing types must be laid out as `COMPONENTS` consecutive values of `DATA_TYPE`, with no
/// padding; the implementations in this module check that at compile time.
pub trait AttributeValue: bytemuck::Pod {
    const COMPONENTS: u8;
    const DATA_TYPE: DataType;

    #[inline]
    fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

mod _impl_value {
    use super::AttributeValue;
    use crate::DataType;
    use nalgebra::{Point2, Point3, Point4, Vector2, Vector3, Vector4};

    macro_rules! impl_value {
        ($n:literal, $dt:ident => $($Target:ty),+) => {
            $(
                const _: () = {
                    // "size of $Target == $n components of $dt"
                    static_assertions::const_assert_eq!(
                        std::mem::size_of::<$Target>(),
                        $n * DataType::$dt.size()
                    );
                    impl AttributeValue for $Target {
                        const COMPONENTS: u8 = $n;
                        const DATA_TYPE: DataType = DataType::$dt;
                    }
                };
            )+
        };
        ($C:ty: $dt:ident) => {
            impl_value!(1, $dt => $C, [$C; 1]);
            impl_value!(2, $dt => [$C; 2], Vector2<$C>, Point2<$C>);
            impl_value!(3, $dt => [$C; 3], Vector3<$C>, Point3<$C>);
            impl_value!(4, $dt => [$C; 4], Vector4<$C>, Point4<$C>);
        };
    }

    impl_value!(i8: I8);
    impl_value!(u8: U8);
    impl_value!(i16: I16);
    impl_value!(u16: U16);
    impl_value!(i32: I32);
    impl_value!(u32: U32);
    impl_value!(i64: I64);
    impl_value!(u64: U64);
    impl_value!(f32: F32);
    impl_value!(f64: F64);
}

pub type Position = nalgebra::Point3<f32>;
pub type Normal = nalgebra::Vector3<f32>;
pub type Texcoord<C> = nalgebra::Point2<C>;
pub type Rgb<C> = nalgebra::Point3<C>;
pub type Rgba<C> = nalgebra::Point4<C>;
pub type Joints<C> = [C; 4];
pub type Weights<C> = [C; 4];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout() {
        assert_eq!(<Position as AttributeValue>::COMPONENTS, 3);
        assert_eq!(<Position as AttributeValue>::DATA_TYPE, DataType::F32);
        assert_eq!(<Rgba<u8> as AttributeValue>::COMPONENTS, 4);
        assert_eq!(<u16 as AttributeValue>::DATA_TYPE, DataType::U16);
        assert_eq!(<Joints<u16> as AttributeValue>::DATA_TYPE, DataType::U16);
    }

    #[test]
    fn bytes() {
        let n = Normal::new(0.0, 0.0, 1.0);
        assert_eq!(n.as_bytes().len(), 12);
        assert_eq!(&n.as_bytes()[8..], &1.0f32.to_ne_bytes());
        assert_eq!(7u16.as_bytes(), &7u16.to_ne_bytes());
    }
}

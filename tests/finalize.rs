//! End-to-end behaviour of [TriangleSoupMeshBuilder::finalize].

use nalgebra::{Point3, Vector3};
use trisoup::{AttributeUsage, DataType, ElementType, Error, TriangleSoupMeshBuilder};

#[test]
fn distinct_positions_shared_material() {
    let mut builder = TriangleSoupMeshBuilder::<u32>::with_faces(2);
    let pos = builder.add_attribute(AttributeUsage::Position, 3, DataType::F32);
    let mat = builder.add_attribute(AttributeUsage::Material, 1, DataType::I32);

    let corners: Vec<Point3<f32>> = (0..6).map(|i| Point3::new(i as f32, 0.0, 0.0)).collect();
    for f in 0..2 {
        builder.set_corner_values(pos, f, [corners[3 * f], corners[3 * f + 1], corners[3 * f + 2]]);
        builder.set_per_face_attribute_value_for_face(mat, f, &5i32.to_ne_bytes());
    }
    let mesh = builder.finalize().unwrap();

    assert_eq!(mesh.attribute(mat).num_values(), 1);
    assert_eq!(mesh.attribute(mat).get::<i32>(0).unwrap(), 5);
    assert_eq!(mesh.element_type(mat), Some(ElementType::Face));
    assert_eq!(mesh.attribute(pos).num_values(), 6);
    assert_eq!(mesh.element_type(pos), Some(ElementType::Corner));
    // no shared vertices
    assert_eq!(mesh.num_points(), 6);
    assert_eq!(mesh.face(0), Some([0, 1, 2]));
    assert_eq!(mesh.face(1), Some([3, 4, 5]));
}

#[test]
fn shared_edge_merges_points() {
    let mut builder = TriangleSoupMeshBuilder::<u32>::with_faces(2);
    let normal = builder.add_typed_attribute::<Vector3<f32>>(AttributeUsage::Normal);
    let up = Vector3::new(0.0f32, 0.0, 1.0);
    let left = Vector3::new(-1.0f32, 0.0, 0.0);
    let right = Vector3::new(1.0f32, 0.0, 0.0);
    let down = Vector3::new(0.0f32, 0.0, -1.0);
    // corners 1 & 2 of face 0 are corners 0 & 2 of face 1
    builder.set_corner_values(normal, 0, [left, up, down]);
    builder.set_corner_values(normal, 1, [up, right, down]);
    let mesh = builder.finalize().unwrap();

    assert!(mesh.num_points() < 3 * mesh.num_faces());
    assert_eq!(mesh.num_points(), 4);
    let f0 = mesh.face(0).unwrap();
    let f1 = mesh.face(1).unwrap();
    assert_eq!(f0[1], f1[0]);
    assert_eq!(f0[2], f1[2]);
    for face in [f0, f1] {
        assert_ne!(face[0], face[1]);
        assert_ne!(face[1], face[2]);
        assert_ne!(face[0], face[2]);
    }
}

#[test]
fn unwritten_attribute() {
    let mut builder = TriangleSoupMeshBuilder::<u32>::with_faces(2);
    let pos = builder.add_typed_attribute::<[f32; 3]>(AttributeUsage::Position);
    let unused = builder.add_attribute(AttributeUsage::Color, 4, DataType::U8);
    builder.set_corner_values(pos, 0, [[0.0f32, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
    builder.set_corner_values(pos, 1, [[0.0f32, 0.0, 1.0], [1.0, 0.0, 1.0], [0.0, 1.0, 1.0]]);
    let mesh = builder.finalize().unwrap();

    assert_eq!(mesh.element_type(unused), None);
    assert_eq!(mesh.attribute(unused).num_values(), 1);
    assert_eq!(mesh.attribute(unused).value(0), &[0, 0, 0, 0]);
    assert_eq!(mesh.num_points(), 6);
}

#[test]
fn metadata() {
    let mut builder = TriangleSoupMeshBuilder::<u32>::with_faces(1);
    builder.set_name("quad");
    let att = builder.add_normalized_attribute(AttributeUsage::Color, 4, DataType::U8, true);
    builder.set_attribute_unique_id(att, 9);
    builder.set_attribute_name(att, "vertex_color");
    builder.set_per_face_attribute_value_for_face(att, 0, &[255, 0, 0, 255]);
    let mesh = builder.finalize().unwrap();

    assert_eq!(mesh.name(), Some("quad"));
    let attr = mesh.attribute_by_unique_id(9).unwrap();
    assert_eq!(attr.name(), Some("vertex_color"));
    assert!(attr.normalized());
    assert_eq!(attr.stride(), 4);
}

#[test]
fn empty_soup_fails() {
    let mut builder = TriangleSoupMeshBuilder::<u32>::with_faces(0);
    assert_eq!(builder.mesh().unwrap().num_points(), 0);
    assert_eq!(
        builder.finalize().unwrap_err(),
        Error::Deduplication(hedron::Error::NoPoints)
    );
    assert!(!builder.is_building());
}

#[test]
fn wide_attribute_fails() {
    let mut builder = TriangleSoupMeshBuilder::<u32>::with_faces(1);
    let att = builder.add_attribute(AttributeUsage::Generic, 16, DataType::F32);
    builder.set_per_face_attribute_value_for_face(att, 0, &[0; 64]);
    assert!(matches!(
        builder.finalize(),
        Err(Error::Deduplication(hedron::Error::UnsupportedComponents {
            attribute: 0,
            num_components: 16
        }))
    ));
}

#[test]
#[should_panic]
fn finalize_twice() {
    let mut builder = TriangleSoupMeshBuilder::<u32>::with_faces(1);
    let att = builder.add_attribute(AttributeUsage::Generic, 1, DataType::U8);
    builder.set_per_face_attribute_value_for_face(att, 0, &[1]);
    builder.finalize().unwrap();
    let _ = builder.finalize();
}

#[test]
#[should_panic]
fn write_after_finalize() {
    let mut builder = TriangleSoupMeshBuilder::<u32>::with_faces(1);
    let att = builder.add_attribute(AttributeUsage::Generic, 1, DataType::U8);
    builder.set_per_face_attribute_value_for_face(att, 0, &[1]);
    builder.finalize().unwrap();
    builder.set_per_face_attribute_value_for_face(att, 0, &[1]);
}

#[test]
fn reuse_after_finalize() {
    let mut builder = TriangleSoupMeshBuilder::<u32>::with_faces(1);
    let att = builder.add_attribute(AttributeUsage::Generic, 1, DataType::U8);
    builder.set_attribute_values_for_face(att, 0, &[1], &[2], &[3]);
    let first = builder.finalize().unwrap();

    builder.start(1);
    let att = builder.add_attribute(AttributeUsage::Generic, 1, DataType::U8);
    builder.set_per_face_attribute_value_for_face(att, 0, &[4]);
    let second = builder.finalize().unwrap();

    assert_eq!(first.num_points(), 3);
    assert_eq!(second.num_points(), 1);
    assert_eq!(first.element_type(0), Some(ElementType::Corner));
    assert_eq!(second.element_type(0), Some(ElementType::Face));
}

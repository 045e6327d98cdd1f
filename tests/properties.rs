//! Properties which must hold for any triangle soup.

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use trisoup::{AttributeUsage, DataType, ElementType, Mesh, TriangleSoupMeshBuilder};

/// One face of an arbitrary soup: three corner values for each of two attributes, and whether each
/// attribute is written per face (using the first corner's value) rather than per corner.
type SoupFace = (Corners, Corners, bool, bool);
type Corners = (u8, u8, u8);

/// Small values, so that faces often share data.
fn squash((a, b, c): Corners) -> [[u8; 2]; 3] {
    [a, b, c].map(|c| [c % 3, 0])
}

fn write(
    builder: &mut TriangleSoupMeshBuilder,
    attribute: usize,
    face: usize,
    v: Corners,
    per_face: bool,
) {
    let v = squash(v);
    if per_face {
        builder.set_per_face_attribute_value_for_face(attribute, face, &v[0]);
    } else {
        builder.set_attribute_values_for_face(attribute, face, &v[0], &v[1], &v[2]);
    }
}

fn build(soup: &[SoupFace]) -> TriangleSoupMeshBuilder {
    let mut builder = TriangleSoupMeshBuilder::with_faces(soup.len());
    let a = builder.add_attribute(AttributeUsage::Generic, 2, DataType::U8);
    let b = builder.add_attribute(AttributeUsage::Generic, 2, DataType::U8);
    for (f, &(va, vb, fa, fb)) in soup.iter().enumerate() {
        write(&mut builder, a, f, va, fa);
        write(&mut builder, b, f, vb, fb);
    }
    builder
}

fn expected(v: Corners, per_face: bool) -> [[u8; 2]; 3] {
    let v = squash(v);
    if per_face {
        [v[0]; 3]
    } else {
        v
    }
}

/// Everything observable about a finished mesh.
fn summary(mesh: &Mesh) -> (usize, Vec<Option<[u32; 3]>>, Vec<(Vec<u8>, Vec<u32>)>) {
    let attrs = mesh
        .attributes()
        .iter()
        .map(|a| {
            let values = (0..a.num_values()).flat_map(|v| a.value(v).to_vec()).collect();
            let map = (0..mesh.num_points()).map(|p| a.mapped_index(p)).collect();
            (values, map)
        })
        .collect();
    (mesh.num_points(), mesh.faces().to_vec(), attrs)
}

#[quickcheck]
fn start_sizes(num_faces: u16) -> bool {
    let builder = TriangleSoupMeshBuilder::<u32>::with_faces(num_faces as usize);
    let mesh = builder.mesh().unwrap();
    mesh.num_faces() == num_faces as usize && mesh.num_points() == 3 * num_faces as usize
}

#[quickcheck]
fn corner_values_recoverable(soup: Vec<SoupFace>) -> TestResult {
    if soup.is_empty() {
        return TestResult::discard();
    }
    let mesh = build(&soup).finalize().unwrap();
    for (f, &(va, vb, fa, fb)) in soup.iter().enumerate() {
        let (ea, eb) = (expected(va, fa), expected(vb, fb));
        for c in 0..3 {
            if mesh.corner_value(f, c, 0) != Some(&ea[c][..])
                || mesh.corner_value(f, c, 1) != Some(&eb[c][..])
            {
                return TestResult::failed();
            }
        }
    }
    TestResult::passed()
}

#[quickcheck]
fn classification(soup: Vec<SoupFace>) -> TestResult {
    if soup.is_empty() {
        return TestResult::discard();
    }
    let mesh = build(&soup).finalize().unwrap();
    let expect = |any_corner: bool| {
        if any_corner {
            ElementType::Corner
        } else {
            ElementType::Face
        }
    };
    let a = expect(soup.iter().any(|f| !f.2));
    let b = expect(soup.iter().any(|f| !f.3));
    TestResult::from_bool(mesh.element_type(0) == Some(a) && mesh.element_type(1) == Some(b))
}

/// A single per-corner write anywhere in the sequence wins, regardless of where it falls.
#[quickcheck]
fn corner_write_order_independent(per_face: Vec<bool>, corner_at: usize) -> TestResult {
    if per_face.is_empty() {
        return TestResult::discard();
    }
    let corner_at = corner_at % per_face.len();
    let mut builder = TriangleSoupMeshBuilder::<u32>::with_faces(per_face.len());
    let att = builder.add_attribute(AttributeUsage::Generic, 1, DataType::U8);
    for (f, &face_mode) in per_face.iter().enumerate() {
        if face_mode && f != corner_at {
            builder.set_per_face_attribute_value_for_face(att, f, &[1]);
        } else {
            builder.set_attribute_values_for_face(att, f, &[1], &[2], &[3]);
        }
    }
    let mesh = builder.finalize().unwrap();
    TestResult::from_bool(mesh.element_type(att) == Some(ElementType::Corner))
}

#[quickcheck]
fn rewrite_idempotent(soup: Vec<SoupFace>) -> TestResult {
    if soup.is_empty() {
        return TestResult::discard();
    }
    let once = build(&soup).finalize().unwrap();

    let mut twice = build(&soup);
    for (f, &(va, vb, fa, fb)) in soup.iter().enumerate() {
        write(&mut twice, 0, f, va, fa);
        write(&mut twice, 1, f, vb, fb);
    }
    let twice = twice.finalize().unwrap();

    TestResult::from_bool(
        summary(&once) == summary(&twice)
            && once.element_type(0) == twice.element_type(0)
            && once.element_type(1) == twice.element_type(1),
    )
}

//! Procedural triangle soup: a gently curved grid, emitted one triangle at a time.

use nalgebra::{Point2, Point3, Vector3};
use trisoup::{AttributeUsage, TriangleSoupMeshBuilder};

use crate::cli::Shading;

pub struct Grid {
    width: u32,
    height: u32,
}

/// Attribute indices within the builder.
pub struct Channels {
    pub position: usize,
    pub normal: usize,
    pub texcoord: usize,
    pub material: usize,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn num_faces(&self) -> usize {
        2 * self.width as usize * self.height as usize
    }

    fn position(&self, x: u32, y: u32) -> Point3<f32> {
        let (x, y) = (x as f32, y as f32);
        Point3::new(x, y, 0.05 * (x * x + y * y))
    }

    // gradient of the height function
    fn smooth_normal(&self, x: u32, y: u32) -> Vector3<f32> {
        Vector3::new(-0.1 * x as f32, -0.1 * y as f32, 1.0).normalize()
    }

    fn texcoord(&self, x: u32, y: u32) -> Point2<u16> {
        let scale = |v: u32, max: u32| (u16::MAX as u64 * v as u64 / max.max(1) as u64) as u16;
        Point2::new(scale(x, self.width), scale(y, self.height))
    }

    /// Feed every triangle of the grid into `builder`, starting a new session.
    #[tracing::instrument(skip(self, builder), fields(width = self.width, height = self.height))]
    pub fn emit(
        &self,
        builder: &mut TriangleSoupMeshBuilder,
        materials: u16,
        shading: Shading,
    ) -> Channels {
        builder.start(self.num_faces());
        builder.set_name(format!("grid_{}x{}", self.width, self.height));
        let channels = Channels {
            position: builder.add_typed_attribute::<Point3<f32>>(AttributeUsage::Position),
            normal: builder.add_typed_attribute::<Vector3<f32>>(AttributeUsage::Normal),
            texcoord: builder.add_typed_attribute::<Point2<u16>>(AttributeUsage::Texcoord),
            material: builder.add_typed_attribute::<u16>(AttributeUsage::Material),
        };
        builder.set_attribute_name(channels.material, "material");

        let mut face = 0;
        for y in 0..self.height {
            for x in 0..self.width {
                let material = ((x + y) % materials as u32) as u16;
                let quad = [(x, y), (x + 1, y), (x + 1, y + 1), (x, y + 1)];
                for tri in [[quad[0], quad[1], quad[2]], [quad[0], quad[2], quad[3]]] {
                    let pos = tri.map(|(x, y)| self.position(x, y));
                    builder.set_corner_values(channels.position, face, pos);
                    match shading {
                        Shading::Smooth => builder.set_corner_values(
                            channels.normal,
                            face,
                            tri.map(|(x, y)| self.smooth_normal(x, y)),
                        ),
                        Shading::Flat => builder.set_face_value(
                            channels.normal,
                            face,
                            (pos[1] - pos[0]).cross(&(pos[2] - pos[0])).normalize(),
                        ),
                    }
                    builder.set_corner_values(
                        channels.texcoord,
                        face,
                        tri.map(|(x, y)| self.texcoord(x, y)),
                    );
                    builder.set_face_value(channels.material, face, material);
                    face += 1;
                }
            }
        }
        tracing::debug!(faces = face, "emitted triangle soup");
        channels
    }
}

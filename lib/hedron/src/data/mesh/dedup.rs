//! Consolidation of per-corner data into shared values and shared points.

use std::collections::HashMap;

use num_traits::AsPrimitive;
use trisoup_common::ArrayIndex;

use crate::{Error, Mesh, PointAttribute, PointMapping};

impl<Idx: ArrayIndex> PointAttribute<Idx> {
    /// Collapse byte-identical values into a single value and remap points accordingly,
    /// returning the number of remaining values.
    ///
    /// Values keep the order in which they first occur.
    fn deduplicate_values(&mut self) -> usize {
        let num_values = self.buffer.len();
        let mut unique: HashMap<&[u8], Idx> = HashMap::with_capacity(num_values);
        let mut remap: Vec<Idx> = Vec::with_capacity(num_values);
        let mut values = self.buffer.empty_like(num_values);
        for value in self.buffer.iter() {
            let next = Idx::from_usize(unique.len());
            let index = *unique.entry(value).or_insert_with(|| {
                values.push(value);
                next
            });
            remap.push(index);
        }
        let num_unique = unique.len();
        if num_unique == num_values {
            return num_unique;
        }

        self.buffer = values;
        self.mapping = match std::mem::replace(&mut self.mapping, PointMapping::Identity) {
            // identity => value index == point index
            PointMapping::Identity => PointMapping::Explicit(remap),
            PointMapping::Explicit(map) => {
                PointMapping::Explicit(
                    map.into_iter()
                        .map(|v| remap[AsPrimitive::<usize>::as_(v)])
                        .collect(),
                )
            }
        };
        num_unique
    }

    /// The number of points covered by this attribute's mapping.
    fn mapped_points(&self) -> usize {
        match &self.mapping {
            PointMapping::Identity => self.num_values(),
            PointMapping::Explicit(map) => map.len(),
        }
    }
}

impl<Idx: ArrayIndex> Mesh<Idx> {
    /// Merge byte-identical values within each attribute.
    ///
    /// Every attribute is checked before any is modified, so on error the mesh is unchanged.
    ///
    /// # Errors
    ///
    /// * the mesh has no points
    /// * an attribute has more than 4 components
    /// * an attribute's mapping doesn't cover exactly `self.num_points()` points
    pub fn deduplicate_attribute_values(&mut self) -> Result<(), Error> {
        if self.num_points == 0 {
            return Err(Error::NoPoints);
        }
        for (attribute, attr) in self.attributes.iter().enumerate() {
            let num_components = attr.num_components();
            if !(1..=4).contains(&num_components) {
                return Err(Error::UnsupportedComponents {
                    attribute,
                    num_components,
                });
            }
            let mapped = attr.mapped_points();
            if mapped != self.num_points {
                return Err(Error::RaggedAttribute {
                    attribute,
                    mapped,
                    points: self.num_points,
                });
            }
        }

        for (attribute, attr) in self.attributes.iter_mut().enumerate() {
            let before = attr.num_values();
            let after = attr.deduplicate_values();
            tracing::trace!(attribute, before, after, "deduplicated attribute values");
        }
        Ok(())
    }

    /// Merge points which use the same value in every attribute, rewriting faces to reference
    /// the merged points.
    ///
    /// The first occurrence of each distinct point survives, and surviving points keep their
    /// relative order. If the mesh has no attributes, every point is considered identical.
    pub fn deduplicate_point_ids(&mut self) {
        let mut unique: HashMap<Vec<Idx>, Idx> = HashMap::with_capacity(self.num_points);
        // old point -> new point
        let mut point_map: Vec<Idx> = Vec::with_capacity(self.num_points);
        // new point -> first old point
        let mut survivors: Vec<usize> = Vec::new();
        for point in 0..self.num_points {
            let key: Vec<Idx> = self
                .attributes
                .iter()
                .map(|a| a.mapped_index(point))
                .collect();
            let next = Idx::from_usize(survivors.len());
            let index = *unique.entry(key).or_insert_with(|| {
                survivors.push(point);
                next
            });
            point_map.push(index);
        }

        let num_unique = survivors.len();
        if num_unique == self.num_points {
            return;
        }

        for attr in &mut self.attributes {
            let map = survivors.iter().map(|&p| attr.mapped_index(p)).collect();
            attr.mapping = PointMapping::Explicit(map);
        }
        for face in self.faces.iter_mut().flatten() {
            for p in face.iter_mut() {
                let old: usize = p.as_();
                *p = point_map[old];
            }
        }
        tracing::debug!(
            before = self.num_points,
            after = num_unique,
            "deduplicated point ids"
        );
        self.num_points = num_unique;
    }
}

//! Bundle up parameters and their values in a generic way.
//!
//! A **ParamSet** is a list of named, typed values. The factories in
//! [api](crate::core::api) look up what they need by name and fall
//! back to defaults for everything which is missing.

// pbrt
use crate::core::geometry::{Point3f, Vector3f};
use crate::core::pbrt::{Float, Spectrum};

#[derive(Debug, Clone)]
pub struct ParamSetItem<T> {
    pub name: String,
    pub values: Vec<T>,
}

impl<T> ParamSetItem<T> {
    pub fn new(name: String, values: Vec<T>) -> Self {
        ParamSetItem { name, values }
    }
    pub fn n_values(&self) -> usize {
        self.values.len()
    }
}

#[derive(Debug, Default, Clone)]
pub struct ParamSet {
    pub bools: Vec<ParamSetItem<bool>>,
    pub ints: Vec<ParamSetItem<i32>>,
    pub floats: Vec<ParamSetItem<Float>>,
    pub point3fs: Vec<ParamSetItem<Point3f>>,
    pub vector3fs: Vec<ParamSetItem<Vector3f>>,
    pub spectra: Vec<ParamSetItem<Spectrum>>,
}

impl ParamSet {
    pub fn add_bool(&mut self, name: String, value: bool) {
        self.bools.push(ParamSetItem::new(name, vec![value]));
    }
    pub fn add_int(&mut self, name: String, value: i32) {
        self.ints.push(ParamSetItem::new(name, vec![value]));
    }
    pub fn add_ints(&mut self, name: String, values: Vec<i32>) {
        self.ints.push(ParamSetItem::new(name, values));
    }
    pub fn add_float(&mut self, name: String, value: Float) {
        self.floats.push(ParamSetItem::new(name, vec![value]));
    }
    pub fn add_floats(&mut self, name: String, values: Vec<Float>) {
        self.floats.push(ParamSetItem::new(name, values));
    }
    pub fn add_point3f(&mut self, name: String, value: Point3f) {
        self.point3fs.push(ParamSetItem::new(name, vec![value]));
    }
    /// Flat list of coordinates, three per point.
    pub fn add_point3fs(&mut self, name: String, values: Vec<Float>) {
        assert!(
            values.len() % 3 == 0,
            "point parameters need 3 coordinates ({} found for {:?})",
            values.len(),
            name
        );
        let points: Vec<Point3f> = values
            .chunks(3)
            .map(|c| Point3f::new(c[0], c[1], c[2]))
            .collect();
        self.point3fs.push(ParamSetItem::new(name, points));
    }
    pub fn add_vector3f(&mut self, name: String, value: Vector3f) {
        self.vector3fs.push(ParamSetItem::new(name, vec![value]));
    }
    /// Flat list of components, three per vector.
    pub fn add_vector3fs(&mut self, name: String, values: Vec<Float>) {
        assert!(
            values.len() % 3 == 0,
            "vector parameters need 3 components ({} found for {:?})",
            values.len(),
            name
        );
        let vectors: Vec<Vector3f> = values
            .chunks(3)
            .map(|c| Vector3f::new(c[0], c[1], c[2]))
            .collect();
        self.vector3fs.push(ParamSetItem::new(name, vectors));
    }
    pub fn add_rgb_spectrum(&mut self, name: String, value: Spectrum) {
        self.spectra.push(ParamSetItem::new(name, vec![value]));
    }
    pub fn find_one_bool(&self, name: &str, d: bool) -> bool {
        lookup_one(&self.bools, name, d)
    }
    pub fn find_one_int(&self, name: &str, d: i32) -> i32 {
        lookup_one(&self.ints, name, d)
    }
    pub fn find_one_float(&self, name: &str, d: Float) -> Float {
        lookup_one(&self.floats, name, d)
    }
    pub fn find_one_point3f(&self, name: &str, d: Point3f) -> Point3f {
        lookup_one(&self.point3fs, name, d)
    }
    pub fn find_one_vector3f(&self, name: &str, d: Vector3f) -> Vector3f {
        lookup_one(&self.vector3fs, name, d)
    }
    pub fn find_one_spectrum(&self, name: &str, d: Spectrum) -> Spectrum {
        lookup_one(&self.spectra, name, d)
    }
    /// All values of a list parameter (empty if missing).
    pub fn find_float(&self, name: &str) -> Vec<Float> {
        lookup_all(&self.floats, name)
    }
    pub fn find_int(&self, name: &str) -> Vec<i32> {
        lookup_all(&self.ints, name)
    }
    pub fn find_point3f(&self, name: &str) -> Vec<Point3f> {
        lookup_all(&self.point3fs, name)
    }
    pub fn find_vector3f(&self, name: &str) -> Vec<Vector3f> {
        lookup_all(&self.vector3fs, name)
    }
}

/// The single value stored under *name*, or *d*. Lists of more than
/// one value don't count.
pub fn lookup_one<T>(items: &[ParamSetItem<T>], name: &str, d: T) -> T
where
    T: Clone,
{
    for v in items {
        if v.name == name && v.n_values() == 1_usize {
            return v.values[0].clone();
        }
    }
    d
}

fn lookup_all<T>(items: &[ParamSetItem<T>], name: &str) -> Vec<T>
where
    T: Clone,
{
    items
        .iter()
        .filter(|v| v.name == name)
        .flat_map(|v| v.values.iter().cloned())
        .collect()
}

// std
use std::sync::OnceLock;
// others
use log::debug;
// pbrt
use crate::core::geometry::{Bounds3f, Point3f, Ray, XYZEnum};
use crate::core::interaction::{Intersection, Intersections};
use crate::core::pbrt::Float;
use crate::core::shape::{Shape, ShapeId};
use crate::core::transform::Transform;

const N_BUCKETS: usize = 12;

#[derive(Debug, Copy, Clone)]
struct BucketInfo {
    count: usize,
    bounds: Bounds3f,
}

impl Default for BucketInfo {
    fn default() -> Self {
        BucketInfo {
            count: 0_usize,
            bounds: Bounds3f::default(),
        }
    }
}

/// A node of the bounding volume hierarchy. The children are owned by
/// the group; their bounds (in the space of the group) are merged and
/// cached on first use.
#[derive(Debug, Clone, Default)]
pub struct Group {
    children: Vec<Shape>,
    bounds: OnceLock<Bounds3f>,
}

impl Group {
    /// The children are linked to the owning [Shape] by
    /// [Shape::group], not here.
    pub fn new(children: Vec<Shape>) -> Self {
        Group {
            children,
            bounds: OnceLock::new(),
        }
    }
    pub fn children(&self) -> &[Shape] {
        &self.children
    }
    pub(crate) fn children_mut(&mut self) -> &mut [Shape] {
        self.bounds = OnceLock::new();
        &mut self.children
    }
    pub(crate) fn push(&mut self, child: Shape) {
        self.bounds = OnceLock::new();
        self.children.push(child);
    }
    pub fn len(&self) -> usize {
        self.children.len()
    }
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
    /// Union of the children's bounds, each transformed into the
    /// space of the group. An empty group has an empty box.
    pub fn bounds(&self) -> Bounds3f {
        *self.bounds.get_or_init(|| {
            self.children
                .iter()
                .fold(Bounds3f::empty(), |b, child| {
                    b.union(&child.parent_space_bounds())
                })
        })
    }
    /// Object space intersection with all children, merged and
    /// sorted. Nothing is tested if the ray misses the bounds.
    pub fn intersect(&self, ray: &Ray) -> Intersections<'_> {
        let mut xs: Intersections<'_> = Intersections::new();
        if !self.bounds().intersect_p(ray) {
            return xs;
        }
        for child in &self.children {
            xs.extend(child.intersect(ray));
        }
        Intersection::sort(&mut xs);
        xs
    }
    /// Split the children in two until no group holds more than
    /// *threshold* of them. *owner* and *owner_world* describe the
    /// [Shape] this group belongs to; new sub-groups are linked to it.
    pub(crate) fn divide(&mut self, threshold: usize, owner: ShapeId, owner_world: &Transform) {
        if self.children.len() > threshold {
            let n_children: usize = self.children.len();
            let children: Vec<Shape> = std::mem::take(&mut self.children);
            match split(children) {
                Ok((left, right)) => {
                    debug!(
                        "divide group {}: {} children -> {} + {}",
                        owner,
                        n_children,
                        left.len(),
                        right.len()
                    );
                    for mut side in vec![left, right] {
                        if side.len() == 1 {
                            self.children.append(&mut side);
                        } else {
                            self.children.push(Shape::group(side));
                        }
                    }
                    for child in self.children.iter_mut() {
                        child.set_parent(owner, owner_world);
                    }
                }
                Err(children) => {
                    debug!(
                        "group {}: {} children can't be split any further",
                        owner, n_children
                    );
                    self.children = children;
                }
            }
            self.bounds = OnceLock::new();
        }
        for child in self.children.iter_mut() {
            child.divide(threshold);
        }
    }
}

/// Partition *children* into two non-empty halves along the longest
/// axis of their centroids. Gives the children back untouched if all
/// centroids coincide on that axis.
fn split(children: Vec<Shape>) -> Result<(Vec<Shape>, Vec<Shape>), Vec<Shape>> {
    let info: Vec<(Bounds3f, Point3f)> = children
        .iter()
        .map(|child| {
            let b: Bounds3f = child.parent_space_bounds();
            (b, b.centroid())
        })
        .collect();
    let centroid_bounds: Bounds3f = info
        .iter()
        .fold(Bounds3f::empty(), |b, (_, c)| b.union_point(c));
    let dim: XYZEnum = centroid_bounds.maximum_extent();
    let extent: Float = centroid_bounds.p_max[dim] - centroid_bounds.p_min[dim];
    if extent.is_nan() || extent <= 0.0 as Float {
        return Err(children);
    }
    let bucket_of = |c: &Point3f| -> usize {
        let b: usize = (N_BUCKETS as Float * centroid_bounds.offset(c)[dim]) as usize;
        b.min(N_BUCKETS - 1)
    };
    let bounds: Bounds3f = info
        .iter()
        .fold(Bounds3f::empty(), |acc, (b, _)| acc.union(b));
    match sah_split_bucket(&info, &bounds, &bucket_of) {
        Some(split_bucket) => {
            let (left, right): (Vec<(Shape, usize)>, Vec<(Shape, usize)>) = children
                .into_iter()
                .zip(info.iter().map(|(_, c)| bucket_of(c)))
                .partition(|(_, b)| *b <= split_bucket);
            Ok((
                left.into_iter().map(|(s, _)| s).collect(),
                right.into_iter().map(|(s, _)| s).collect(),
            ))
        }
        None => {
            // median of the centroids
            let mut sorted: Vec<(Shape, Float)> = children
                .into_iter()
                .zip(info.iter().map(|(_, c)| c[dim]))
                .collect();
            sorted.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
            let mut left: Vec<Shape> = sorted.into_iter().map(|(s, _)| s).collect();
            let right: Vec<Shape> = left.split_off(left.len() / 2);
            Ok((left, right))
        }
    }
}

/// The bucket after which splitting minimizes the surface area
/// heuristic, `None` if no split leaves both sides populated at a
/// finite cost.
fn sah_split_bucket<F>(info: &[(Bounds3f, Point3f)], bounds: &Bounds3f, bucket_of: &F) -> Option<usize>
where
    F: Fn(&Point3f) -> usize,
{
    let mut buckets: [BucketInfo; N_BUCKETS] = [BucketInfo::default(); N_BUCKETS];
    for (b, c) in info {
        let i: usize = bucket_of(c);
        buckets[i].count += 1;
        buckets[i].bounds = buckets[i].bounds.union(b);
    }
    let total_area: Float = bounds.surface_area();
    let mut best: Option<(usize, Float)> = None;
    for i in 0..(N_BUCKETS - 1) {
        let mut b0: Bounds3f = Bounds3f::default();
        let mut b1: Bounds3f = Bounds3f::default();
        let mut count0: usize = 0;
        let mut count1: usize = 0;
        for bucket in &buckets[..=i] {
            b0 = b0.union(&bucket.bounds);
            count0 += bucket.count;
        }
        for bucket in &buckets[(i + 1)..] {
            b1 = b1.union(&bucket.bounds);
            count1 += bucket.count;
        }
        if count0 == 0 || count1 == 0 {
            continue;
        }
        let cost: Float = 1.0
            + (count0 as Float * b0.surface_area() + count1 as Float * b1.surface_area())
                / total_area;
        if !cost.is_finite() {
            continue;
        }
        match best {
            Some((_, min_cost)) if min_cost <= cost => {}
            _ => best = Some((i, cost)),
        }
    }
    best.map(|(i, _)| i)
}

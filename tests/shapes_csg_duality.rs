use rs_raykernel::core::geometry::{pnt3_distance, Point3f, Ray, Vector3f};
use rs_raykernel::core::pbrt::{float_eq, Float};
use rs_raykernel::core::rng::Rng;
use rs_raykernel::core::shape::Shape;
use rs_raykernel::core::transform::Transform;
use rs_raykernel::shapes::csg::CsgOperation;
use strum::IntoEnumIterator;

const TOLERANCE: Float = 1e-6;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sphere_at(center: &Point3f, radius: Float) -> Shape {
    Shape::sphere().with_transform(
        Transform::translate(&Vector3f::from(*center)) * Transform::scale(radius, radius, radius),
    )
}

fn hits(shape: &Shape, ray: &Ray) -> Vec<Float> {
    shape.intersect(ray).iter().map(|x| x.t).collect()
}

#[test]
fn overlapping_spheres() {
    let c = Point3f::new(0.0, 0.0, 0.5);
    let ray = Ray::new(Point3f::new(0.0, 0.0, -5.0), Vector3f::new(0.0, 0.0, 1.0));
    let expected: [(CsgOperation, [Float; 2]); 3] = [
        (CsgOperation::Union, [4.0, 6.5]),
        (CsgOperation::Intersection, [4.5, 6.0]),
        (CsgOperation::Difference, [4.0, 4.5]),
    ];
    for (op, ts) in expected.iter() {
        let shape = Shape::csg(*op, Shape::sphere(), sphere_at(&c, 1.0));
        let xs = hits(&shape, &ray);
        assert_eq!(xs.len(), 2, "{:?}", op);
        assert!(float_eq(xs[0], ts[0]) && float_eq(xs[1], ts[1]), "{:?}: {:?}", op, xs);
    }
}

// every surviving hit of a sphere lies outside (union, difference)
// or inside (intersection, subtracted part of a difference) the other
#[test]
fn surviving_hits_respect_the_other_operand() {
    init();
    let mut rng = Rng::with_sequence(99);
    for _ in 0..100 {
        let ca = Point3f::new(rng.uniform_float_range(-1.0, 1.0), 0.0, 0.0);
        let cb = Point3f::new(0.0, rng.uniform_float_range(-1.0, 1.0), 0.0);
        let (ra, rb) = (rng.uniform_float_range(0.5, 1.5), rng.uniform_float_range(0.5, 1.5));
        let o = Point3f::new(
            rng.uniform_float_range(-2.0, 2.0),
            rng.uniform_float_range(-2.0, 2.0),
            -10.0,
        );
        let ray = Ray::new(o, Vector3f::new(0.0, 0.0, 1.0));
        for op in CsgOperation::iter() {
            let shape = Shape::csg(op, sphere_at(&ca, ra), sphere_at(&cb, rb));
            let csg = shape.as_csg().unwrap();
            for x in shape.intersect(&ray).iter() {
                let p = ray.position(x.t);
                let from_left = csg.left().includes(x.shape);
                let (other_center, other_radius) = if from_left { (cb, rb) } else { (ca, ra) };
                let d = pnt3_distance(&p, &other_center);
                let inside_other = d < other_radius + TOLERANCE;
                let outside_other = d > other_radius - TOLERANCE;
                match (op, from_left) {
                    (CsgOperation::Union, _) => assert!(outside_other),
                    (CsgOperation::Intersection, _) => assert!(inside_other),
                    (CsgOperation::Difference, true) => assert!(outside_other),
                    (CsgOperation::Difference, false) => assert!(inside_other),
                }
            }
        }
    }
}

#[test]
fn union_and_intersection_commute() {
    let mut rng = Rng::with_sequence(1);
    for _ in 0..50 {
        let a = sphere_at(&Point3f::new(rng.uniform_float_range(-1.0, 1.0), 0.0, 0.0), 1.0);
        let b = Shape::cube().with_transform(Transform::rotate_y(rng.uniform_float_range(0.0, 90.0)));
        let o = Point3f::new(rng.uniform_float_range(-2.0, 2.0), rng.uniform_float_range(-2.0, 2.0), -10.0);
        let ray = Ray::new(o, Vector3f::new(0.0, 0.0, 1.0));
        for op in [CsgOperation::Union, CsgOperation::Intersection].iter() {
            let ab = hits(&Shape::csg(*op, a.clone(), b.clone()), &ray);
            let ba = hits(&Shape::csg(*op, b.clone(), a.clone()), &ray);
            assert_eq!(ab.len(), ba.len());
            for (x, y) in ab.iter().zip(ba.iter()) {
                assert!(float_eq(*x, *y));
            }
        }
    }
}

#[test]
fn difference_with_a_disjoint_shape() {
    let a = Shape::sphere();
    let b = sphere_at(&Point3f::new(5.0, 0.0, 0.0), 1.0);
    let shape = Shape::difference(a, b);
    let ray = Ray::new(Point3f::new(0.0, 0.0, -5.0), Vector3f::new(0.0, 0.0, 1.0));
    let xs = hits(&shape, &ray);
    assert_eq!(xs.len(), 2);
    assert!(float_eq(xs[0], 4.0) && float_eq(xs[1], 6.0));
}

fn assert_same_hits(got: &[Float], expected: &[Float]) {
    assert_eq!(got.len(), expected.len(), "{:?} vs {:?}", got, expected);
    for (x, y) in got.iter().zip(expected.iter()) {
        assert!(float_eq(*x, *y), "{:?} vs {:?}", got, expected);
    }
}

#[test]
fn difference_and_intersection_rebuild_the_operand() {
    init();
    let a = Shape::sphere();
    let b = sphere_at(&Point3f::new(0.0, 0.0, 0.5), 1.0);
    let rebuilt = Shape::union(
        Shape::difference(a.clone(), b.clone()),
        Shape::intersection(a.clone(), b),
    );
    let ray = Ray::new(Point3f::new(0.0, 0.0, -5.0), Vector3f::new(0.0, 0.0, 1.0));
    assert_same_hits(&hits(&rebuilt, &ray), &hits(&a, &ray));
}

#[test]
fn difference_and_intersection_rebuild_the_operand_for_random_rays() {
    init();
    let mut rng = Rng::with_sequence(7);
    for _ in 0..100 {
        let a = sphere_at(
            &Point3f::new(rng.uniform_float_range(-0.5, 0.5), rng.uniform_float_range(-0.5, 0.5), 0.0),
            rng.uniform_float_range(0.75, 1.5),
        );
        let b = Shape::cube().with_transform(Transform::rotate_y(rng.uniform_float_range(0.0, 90.0)));
        let rebuilt = Shape::union(
            Shape::difference(a.clone(), b.clone()),
            Shape::intersection(a.clone(), b),
        );
        let o = Point3f::new(rng.uniform_float_range(-2.0, 2.0), rng.uniform_float_range(-2.0, 2.0), -10.0);
        let ray = Ray::new(o, Vector3f::new(0.0, 0.0, 1.0));
        assert_same_hits(&hits(&rebuilt, &ray), &hits(&a, &ray));
    }
}

#[test]
fn union_with_itself_is_the_operand() {
    init();
    let a = sphere_at(&Point3f::new(0.3, -0.2, 0.0), 1.2);
    let ray = Ray::new(Point3f::new(0.1, 0.1, -5.0), Vector3f::new(0.0, 0.0, 1.0));
    let twice = Shape::union(a.clone(), a.clone());
    assert_same_hits(&hits(&twice, &ray), &hits(&a, &ray));
}

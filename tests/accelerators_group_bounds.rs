use rs_raykernel::core::geometry::{Point3f, Ray, Vector3f};
use rs_raykernel::core::pbrt::{float_eq, Float};
use rs_raykernel::core::rng::Rng;
use rs_raykernel::core::shape::Shape;
use rs_raykernel::core::transform::Transform;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_vector(rng: &mut Rng, extent: Float) -> Vector3f {
    Vector3f::new(
        rng.uniform_float_range(-extent, extent),
        rng.uniform_float_range(-extent, extent),
        rng.uniform_float_range(-extent, extent),
    )
}

fn random_shape(rng: &mut Rng) -> Shape {
    let shape = match rng.uniform_uint32_bounded(4) {
        0 => Shape::sphere(),
        1 => Shape::cube(),
        2 => Shape::truncated_cylinder(-1.0, 1.0, true).unwrap(),
        _ => Shape::torus(1.0, 0.25).unwrap(),
    };
    let s = rng.uniform_float_range(0.2, 1.5);
    let transform = Transform::translate(&random_vector(rng, 20.0))
        * Transform::rotate_x(rng.uniform_float_range(0.0, 360.0))
        * Transform::rotate_y(rng.uniform_float_range(0.0, 360.0))
        * Transform::scale(s, s, s);
    shape.with_transform(transform)
}

#[test]
fn bounds_contain_every_child() {
    init();
    let mut rng = Rng::with_sequence(11);
    let shapes: Vec<Shape> = (0..50).map(|_| random_shape(&mut rng)).collect();
    let group = Shape::group(shapes);
    let bounds = group.bounds();
    for child in group.as_group().unwrap().children() {
        assert!(bounds.contains_bounds(&child.parent_space_bounds()));
    }
}

#[test]
fn grown_box_contains_the_point() {
    let mut rng = Rng::with_sequence(5);
    let mut b = rs_raykernel::core::geometry::Bounds3f::empty();
    for _ in 0..100 {
        let p = Point3f::from(random_vector(&mut rng, 100.0));
        let grown = b.union_point(&p);
        assert!(grown.contains_point(&p));
        assert!(grown.contains_bounds(&b));
        b = grown;
    }
}

#[test]
fn divide_keeps_all_hits() {
    init();
    let mut rng = Rng::with_sequence(23);
    let shapes: Vec<Shape> = (0..60).map(|_| random_shape(&mut rng)).collect();
    let flat = Shape::group(shapes.clone());
    let mut divided = Shape::group(shapes);
    divided.divide(4);
    for _ in 0..200 {
        let o = Point3f::from(random_vector(&mut rng, 30.0));
        let target = Point3f::from(random_vector(&mut rng, 20.0));
        let d = target - o;
        if d.length() < 1e-3 {
            continue;
        }
        let ray = Ray::new(o, d.normalize());
        let a: Vec<Float> = flat.intersect(&ray).iter().map(|x| x.t).collect();
        let b: Vec<Float> = divided.intersect(&ray).iter().map(|x| x.t).collect();
        assert_eq!(a.len(), b.len());
        for (ta, tb) in a.iter().zip(b.iter()) {
            assert!(float_eq(*ta, *tb), "{} != {}", ta, tb);
        }
    }
}

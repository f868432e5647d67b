use approx::assert_relative_eq;
use rs_raykernel::core::geometry::{Point3f, Ray, Vector3f};
use rs_raykernel::core::pbrt::Float;
use rs_raykernel::core::rng::Rng;
use rs_raykernel::core::shape::Shape;
use rs_raykernel::core::transform::Transform;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_point(rng: &mut Rng, extent: Float) -> Point3f {
    Point3f::new(
        rng.uniform_float_range(-extent, extent),
        rng.uniform_float_range(-extent, extent),
        rng.uniform_float_range(-extent, extent),
    )
}

#[test]
fn roots_lie_on_the_surface() {
    init();
    let sphere = Shape::sphere();
    let mut rng = Rng::with_sequence(42);
    let mut n_hits: usize = 0;
    for _ in 0..1000 {
        let o = random_point(&mut rng, 5.0);
        let target = random_point(&mut rng, 1.2);
        let d = target - o;
        if d.length() < 1e-3 {
            continue;
        }
        let ray = Ray::new(o, d.normalize());
        let xs = sphere.intersect(&ray);
        assert!(xs.is_empty() || xs.len() == 2, "{} roots", xs.len());
        for x in xs.iter() {
            let p = ray.position(x.t);
            assert_relative_eq!(Vector3f::from(p).length(), 1.0, epsilon = 1e-6);
        }
        if !xs.is_empty() {
            assert!(xs[0].t <= xs[1].t);
            n_hits += 1;
        }
    }
    assert!(n_hits > 100);
}

#[test]
fn tangent_ray_counts_twice() {
    let sphere = Shape::sphere();
    let ray = Ray::new(Point3f::new(0.0, 1.0, -5.0), Vector3f::new(0.0, 0.0, 1.0));
    let xs = sphere.intersect(&ray);
    assert_eq!(xs.len(), 2);
    assert_relative_eq!(xs[0].t, 5.0, epsilon = 1e-6);
    assert_relative_eq!(xs[1].t, 5.0, epsilon = 1e-6);
}

#[test]
fn ray_behind_the_sphere() {
    let sphere = Shape::sphere();
    let ray = Ray::new(Point3f::new(0.0, 0.0, 5.0), Vector3f::new(0.0, 0.0, 1.0));
    let xs = sphere.intersect(&ray);
    assert_eq!(xs.len(), 2);
    assert_relative_eq!(xs[0].t, -6.0);
    assert_relative_eq!(xs[1].t, -4.0);
}

#[test]
fn normals_are_unit_and_translation_invariant() {
    init();
    let sphere = Shape::sphere();
    let mut rng = Rng::with_sequence(7);
    for _ in 0..500 {
        let v = Vector3f::from(random_point(&mut rng, 1.0));
        if v.length() < 1e-3 {
            continue;
        }
        let p = Point3f::from(v.normalize());
        let n = sphere.normal_at(&p, None);
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-9);
        let offset = Vector3f::from(random_point(&mut rng, 10.0));
        let moved = Shape::sphere().with_transform(Transform::translate(&offset));
        let m = moved.normal_at(&(p + offset), None);
        assert_eq!(n, m);
    }
}

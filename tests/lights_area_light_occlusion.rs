use rs_raykernel::core::geometry::{Point3f, Vector3f};
use rs_raykernel::core::light::Light;
use rs_raykernel::core::material::Material;
use rs_raykernel::core::pbrt::Spectrum;
use rs_raykernel::core::rng::Rng;
use rs_raykernel::core::scene::Scene;
use rs_raykernel::core::shape::Shape;
use rs_raykernel::core::transform::Transform;
use rs_raykernel::lights::area::AreaLight;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn area_light() -> Light {
    AreaLight::new(
        Point3f::new(-1.0, 10.0, -1.0),
        Vector3f::new(2.0, 0.0, 0.0),
        8,
        Vector3f::new(0.0, 0.0, 2.0),
        8,
        Spectrum::white(),
    )
    .unwrap()
    .into()
}

fn slab(center: Vector3f, half_x: f64) -> Shape {
    Shape::cube().with_transform(Transform::translate(&center) * Transform::scale(half_x, 0.1, 5.0))
}

#[test]
fn fully_blocked_and_unblocked() {
    init();
    let light = area_light();
    let p = Point3f::origin();
    let open = Scene::new(vec![], vec![light.clone()], 4);
    assert_eq!(light.occlusion(&p, &open, 0.0), 0.0);
    let blocked = Scene::new(vec![slab(Vector3f::new(0.0, 5.0, 0.0), 5.0)], vec![light.clone()], 4);
    assert_eq!(light.occlusion(&p, &blocked, 0.0), 1.0);
}

#[test]
fn half_blocked_gives_a_penumbra() {
    // covers x > 0 halfway up, which hides 4 of the 8 columns
    let light = area_light();
    let scene = Scene::new(vec![slab(Vector3f::new(3.0, 5.0, 0.0), 3.0)], vec![light.clone()], 4);
    assert_eq!(light.occlusion(&Point3f::origin(), &scene, 0.0), 0.5);
}

#[test]
fn non_casters_let_light_through() {
    let light = area_light();
    let glass = slab(Vector3f::new(0.0, 5.0, 0.0), 5.0)
        .with_material(Material::default().with_casts_shadow(false));
    let scene = Scene::new(vec![glass], vec![light.clone()], 4);
    assert_eq!(light.occlusion(&Point3f::origin(), &scene, 0.0), 0.0);
}

#[test]
fn occluder_behind_the_light_is_ignored() {
    let light = area_light();
    let scene = Scene::new(vec![slab(Vector3f::new(0.0, 15.0, 0.0), 5.0)], vec![light.clone()], 4);
    assert_eq!(light.occlusion(&Point3f::origin(), &scene, 0.0), 0.0);
}

#[test]
fn jittered_occlusion_stays_between_the_extremes() {
    let light = area_light();
    let scene = Scene::new(vec![slab(Vector3f::new(3.0, 5.0, 0.0), 3.0)], vec![light.clone()], 4);
    let mut rng = Rng::with_sequence(17);
    for _ in 0..20 {
        let samples = light.samples_jittered(&mut rng);
        assert_eq!(samples.len(), 64);
        let f = rs_raykernel::core::light::occlusion_of(&samples, &Point3f::origin(), &scene, 0.0);
        // one column may straddle the edge of the blocker
        assert!(f >= 0.375 && f <= 0.625, "{}", f);
    }
}

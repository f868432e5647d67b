use approx::assert_relative_eq;
use rs_raykernel::core::api::make_light;
use rs_raykernel::core::geometry::{Normal3f, Point3f, Vector3f};
use rs_raykernel::core::material::Material;
use rs_raykernel::core::paramset::ParamSet;
use rs_raykernel::core::pbrt::{Float, Spectrum};
use rs_raykernel::core::reflection::lighting;
use rs_raykernel::core::shape::Shape;

fn point_light_at(p: Point3f) -> rs_raykernel::core::light::Light {
    let mut ps = ParamSet::default();
    ps.add_point3f(String::from("from"), p);
    make_light("point", &ps).unwrap()
}

#[test]
fn eye_between_light_and_surface() {
    let _ = env_logger::builder().is_test(true).try_init();
    let light = point_light_at(Point3f::new(0.0, 0.0, -10.0));
    let c = lighting(
        &Material::default(),
        &Shape::sphere(),
        &light,
        &Point3f::origin(),
        &Vector3f::new(0.0, 0.0, -1.0),
        &Normal3f::new(0.0, 0.0, -1.0),
        0.0,
    );
    for i in 0..3 {
        assert_relative_eq!(c[i], 1.9, epsilon = 1e-9);
    }
}

#[test]
fn coloured_light_tints_everything() {
    let mut ps = ParamSet::default();
    ps.add_point3f(String::from("from"), Point3f::new(0.0, 0.0, -10.0));
    ps.add_rgb_spectrum(String::from("I"), Spectrum::rgb(1.0, 0.5, 0.0));
    let light = make_light("point", &ps).unwrap();
    let c = lighting(
        &Material::default(),
        &Shape::sphere(),
        &light,
        &Point3f::origin(),
        &Vector3f::new(0.0, 0.0, -1.0),
        &Normal3f::new(0.0, 0.0, -1.0),
        0.0,
    );
    assert_relative_eq!(c.r(), 1.9, epsilon = 1e-9);
    assert_relative_eq!(c.g(), 0.95, epsilon = 1e-9);
    assert_relative_eq!(c.b(), 0.0, epsilon = 1e-9);
}

#[test]
fn shadow_fraction_scales_diffuse_and_specular() {
    let light = point_light_at(Point3f::new(0.0, 0.0, -10.0));
    for (shadow, expected) in [(0.0, 1.9), (0.25, 1.45), (1.0, 0.1)].iter() {
        let c = lighting(
            &Material::default(),
            &Shape::sphere(),
            &light,
            &Point3f::origin(),
            &Vector3f::new(0.0, 0.0, -1.0),
            &Normal3f::new(0.0, 0.0, -1.0),
            *shadow as Float,
        );
        assert_relative_eq!(c.g(), *expected, epsilon = 1e-9);
    }
}

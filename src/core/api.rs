//! Factories which turn a name plus a [ParamSet] into shapes and
//! lights. Parameter names follow the pbrt scene description where a
//! counterpart exists. Every value is checked here, so a scene which
//! was built through these functions never contains a shape or light
//! with nonsensical dimensions.

// pbrt
use crate::core::error::{KernelError, Result};
use crate::core::geometry::{Normal3f, Point3f, Vector3f};
use crate::core::light::Light;
use crate::core::material::Material;
use crate::core::paramset::ParamSet;
use crate::core::pbrt::{Float, Spectrum, INFINITY};
use crate::core::shape::Shape;
use crate::core::transform::Transform;
use crate::lights::area::AreaLight;
use crate::lights::areaspot::AreaSpotLight;
use crate::lights::point::PointLight;
use crate::lights::spot::SpotLight;

/// Create a shape by name:
///
/// - `"sphere"`: `radius` (1)
/// - `"plane"`
/// - `"cube"`
/// - `"cylinder"`, `"cone"`: `radius` (1), `ymin` (-∞), `ymax` (∞),
///   `closed` (false)
/// - `"triangle"`: three points `P`, optionally three normals `N`
/// - `"trianglemesh"`: points `P`, `indices` (three per triangle),
///   optionally one normal `N` per point
/// - `"torus"`: `majorradius` (1), `minorradius` (0.25)
///
/// *object_to_world* is applied after the scaling implied by
/// `radius`.
pub fn make_shape(
    name: &str,
    object_to_world: &Transform,
    material: &Material,
    ps: &ParamSet,
) -> Result<Shape> {
    let (shape, local): (Shape, Transform) = match name {
        "sphere" => {
            let radius: Float = positive(ps, "radius", 1.0)?;
            (Shape::sphere(), Transform::scale(radius, radius, radius))
        }
        "plane" => (Shape::plane(), Transform::default()),
        "cube" => (Shape::cube(), Transform::default()),
        "cylinder" | "cone" => {
            let radius: Float = positive(ps, "radius", 1.0)?;
            let y_min: Float = ps.find_one_float("ymin", -INFINITY);
            let y_max: Float = ps.find_one_float("ymax", INFINITY);
            let closed: bool = ps.find_one_bool("closed", false);
            let shape: Shape = if name == "cylinder" {
                Shape::truncated_cylinder(y_min, y_max, closed)?
            } else {
                Shape::truncated_cone(y_min, y_max, closed)?
            };
            (shape, Transform::scale(radius, 1.0, radius))
        }
        "triangle" => {
            let p: Vec<Point3f> = ps.find_point3f("P");
            if p.len() != 3 {
                return Err(KernelError::invalid(
                    "P",
                    format!("a triangle needs 3 points, got {}", p.len()),
                ));
            }
            let n: Vec<Vector3f> = ps.find_vector3f("N");
            if !n.is_empty() && n.len() != 3 {
                return Err(KernelError::invalid(
                    "N",
                    format!("a triangle needs 3 normals, got {}", n.len()),
                ));
            }
            (make_triangle(&p, &n, [0, 1, 2])?, Transform::default())
        }
        "trianglemesh" => (make_triangle_mesh(ps)?, Transform::default()),
        "torus" => {
            let major_radius: Float = positive(ps, "majorradius", 1.0)?;
            let minor_radius: Float = positive(ps, "minorradius", 0.25)?;
            (
                Shape::torus(major_radius, minor_radius)?,
                Transform::default(),
            )
        }
        _ => {
            return Err(KernelError::UnknownName {
                kind: "shape",
                name: name.to_string(),
            })
        }
    };
    Ok(shape
        .with_transform(*object_to_world * local)
        .with_material(material.clone()))
}

fn make_triangle(p: &[Point3f], n: &[Vector3f], vi: [usize; 3]) -> Result<Shape> {
    if n.is_empty() {
        Shape::triangle(p[vi[0]], p[vi[1]], p[vi[2]])
    } else {
        Shape::smooth_triangle(
            p[vi[0]],
            p[vi[1]],
            p[vi[2]],
            Normal3f::from(n[vi[0]]),
            Normal3f::from(n[vi[1]]),
            Normal3f::from(n[vi[2]]),
        )
    }
}

fn make_triangle_mesh(ps: &ParamSet) -> Result<Shape> {
    let p: Vec<Point3f> = ps.find_point3f("P");
    let n: Vec<Vector3f> = ps.find_vector3f("N");
    let indices: Vec<i32> = ps.find_int("indices");
    if indices.is_empty() || indices.len() % 3 != 0 {
        return Err(KernelError::invalid(
            "indices",
            format!("{} indices don't make whole triangles", indices.len()),
        ));
    }
    if !n.is_empty() && n.len() != p.len() {
        return Err(KernelError::invalid(
            "N",
            format!("{} normals for {} points", n.len(), p.len()),
        ));
    }
    let mut triangles: Vec<Shape> = Vec::with_capacity(indices.len() / 3);
    for tri in indices.chunks(3) {
        let mut vi: [usize; 3] = [0; 3];
        for (i, index) in tri.iter().enumerate() {
            if *index < 0 || *index as usize >= p.len() {
                return Err(KernelError::invalid(
                    "indices",
                    format!("{} is out of range for {} points", index, p.len()),
                ));
            }
            vi[i] = *index as usize;
        }
        triangles.push(make_triangle(&p, &n, vi)?);
    }
    Ok(Shape::triangle_mesh(triangles))
}

/// Create a light by name:
///
/// - `"point"`: `from` (0,0,0), `I` (white)
/// - `"spot"`: `from` (0,0,0), `to` (0,0,1), `coneangle` (30),
///   `conedeltaangle` (5), `I`
/// - `"area"`: `corner` (0,0,0), `u` (1,0,0), `usteps` (1), `v`
///   (0,0,1), `vsteps` (1), `I`
/// - `"areaspot"`: everything of `"area"` plus `direction` (0,-1,0),
///   `coneangle` and `conedeltaangle`
///
/// The spot cone has full strength up to `coneangle - conedeltaangle`
/// degrees from its axis and none beyond `coneangle`.
pub fn make_light(name: &str, ps: &ParamSet) -> Result<Light> {
    let intensity: Spectrum = ps.find_one_spectrum("I", Spectrum::white());
    match name {
        "point" => {
            let from: Point3f = ps.find_one_point3f("from", Point3f::origin());
            Ok(PointLight::new(from, intensity).into())
        }
        "spot" => {
            let from: Point3f = ps.find_one_point3f("from", Point3f::origin());
            let to: Point3f = ps.find_one_point3f("to", Point3f::new(0.0, 0.0, 1.0));
            let (falloff_start, total_width) = cone_angles(ps)?;
            Ok(SpotLight::new(from, &(to - from), falloff_start, total_width, intensity)?.into())
        }
        "area" => {
            let (corner, u, usteps, v, vsteps) = area_params(ps)?;
            Ok(AreaLight::new(corner, u, usteps, v, vsteps, intensity)?.into())
        }
        "areaspot" => {
            let (corner, u, usteps, v, vsteps) = area_params(ps)?;
            let direction: Vector3f = ps.find_one_vector3f("direction", Vector3f::new(0.0, -1.0, 0.0));
            let (falloff_start, total_width) = cone_angles(ps)?;
            Ok(AreaSpotLight::new(
                corner,
                u,
                usteps,
                v,
                vsteps,
                &direction,
                falloff_start,
                total_width,
                intensity,
            )?
            .into())
        }
        _ => Err(KernelError::UnknownName {
            kind: "light",
            name: name.to_string(),
        }),
    }
}

fn positive(ps: &ParamSet, name: &str, d: Float) -> Result<Float> {
    let value: Float = ps.find_one_float(name, d);
    if value > 0.0 as Float {
        Ok(value)
    } else {
        Err(KernelError::invalid(name, format!("{} is not positive", value)))
    }
}

fn steps(ps: &ParamSet, name: &str) -> Result<usize> {
    let value: i32 = ps.find_one_int(name, 1);
    if value > 0 {
        Ok(value as usize)
    } else {
        Err(KernelError::invalid(name, format!("{} steps", value)))
    }
}

fn area_params(ps: &ParamSet) -> Result<(Point3f, Vector3f, usize, Vector3f, usize)> {
    Ok((
        ps.find_one_point3f("corner", Point3f::origin()),
        ps.find_one_vector3f("u", Vector3f::new(1.0, 0.0, 0.0)),
        steps(ps, "usteps")?,
        ps.find_one_vector3f("v", Vector3f::new(0.0, 0.0, 1.0)),
        steps(ps, "vsteps")?,
    ))
}

fn cone_angles(ps: &ParamSet) -> Result<(Float, Float)> {
    let cone_angle: Float = ps.find_one_float("coneangle", 30.0);
    let cone_delta: Float = ps.find_one_float("conedeltaangle", 5.0);
    if cone_delta < 0.0 as Float || cone_delta > cone_angle {
        return Err(KernelError::invalid(
            "conedeltaangle",
            format!("{} doesn't fit into a cone of {} degrees", cone_delta, cone_angle),
        ));
    }
    Ok((cone_angle - cone_delta, cone_angle))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::geometry::Ray;
    use crate::core::pbrt::float_eq;
    use crate::core::shape::ShapeKind;

    fn ps_with_float(name: &str, value: Float) -> ParamSet {
        let mut ps = ParamSet::default();
        ps.add_float(name.to_string(), value);
        ps
    }

    #[test]
    fn sphere_radius_scales() {
        let s = make_shape(
            "sphere",
            &Transform::default(),
            &Material::default(),
            &ps_with_float("radius", 2.0),
        )
        .unwrap();
        let r = Ray::new(Point3f::new(0.0, 0.0, -5.0), Vector3f::new(0.0, 0.0, 1.0));
        let xs = s.intersect(&r);
        assert!(float_eq(xs[0].t, 3.0));
    }

    #[test]
    fn invalid_dimensions() {
        let m = Material::default();
        let t = Transform::default();
        assert!(make_shape("sphere", &t, &m, &ps_with_float("radius", -1.0)).is_err());
        assert!(make_shape("torus", &t, &m, &ps_with_float("minorradius", 0.0)).is_err());
        let mut ps = ParamSet::default();
        ps.add_float(String::from("ymin"), 2.0);
        ps.add_float(String::from("ymax"), 1.0);
        assert!(make_shape("cylinder", &t, &m, &ps).is_err());
        let mut ps = ParamSet::default();
        ps.add_point3fs(String::from("P"), vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 2.0, 0.0, 0.0]);
        assert!(matches!(
            make_shape("triangle", &t, &m, &ps),
            Err(KernelError::DegenerateGeometry(_))
        ));
        assert!(matches!(
            make_shape("teapot", &t, &m, &ParamSet::default()),
            Err(KernelError::UnknownName { .. })
        ));
    }

    #[test]
    fn mesh_of_two_triangles() {
        let mut ps = ParamSet::default();
        ps.add_point3fs(
            String::from("P"),
            vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0],
        );
        ps.add_ints(String::from("indices"), vec![0, 1, 2, 0, 2, 3]);
        let mesh = make_shape("trianglemesh", &Transform::default(), &Material::default(), &ps).unwrap();
        let group = mesh.as_group().unwrap();
        assert_eq!(group.len(), 2);
        assert!(matches!(group.children()[0].kind(), ShapeKind::Triangle(_)));
        ps.add_ints(String::from("indices"), vec![0, 1, 7]);
        assert!(make_shape("trianglemesh", &Transform::default(), &Material::default(), &ps).is_err());
    }

    #[test]
    fn triangle_normals_must_match_corners() {
        let t = Transform::default();
        let m = Material::default();
        let mut ps = ParamSet::default();
        ps.add_point3fs(String::from("P"), vec![0.0, 1.0, 0.0, -1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
        ps.add_vector3fs(String::from("N"), vec![0.0, 0.0, -1.0]);
        assert!(matches!(
            make_shape("triangle", &t, &m, &ps),
            Err(KernelError::InvalidParameter { .. })
        ));
        let mut ps = ParamSet::default();
        ps.add_point3fs(String::from("P"), vec![0.0, 1.0, 0.0, -1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
        ps.add_vector3fs(
            String::from("N"),
            vec![0.0, 0.0, -1.0, 0.0, 0.0, -1.0, 0.0, 0.0, -1.0],
        );
        let s = make_shape("triangle", &t, &m, &ps).unwrap();
        assert!(matches!(s.kind(), ShapeKind::SmoothTriangle(_)));
    }

    #[test]
    fn closed_cylinder_is_solid() {
        let mut ps = ParamSet::default();
        ps.add_float(String::from("ymin"), 0.0);
        ps.add_float(String::from("ymax"), 2.0);
        ps.add_bool(String::from("closed"), true);
        let s = make_shape("cylinder", &Transform::default(), &Material::default(), &ps).unwrap();
        assert!(s.is_solid());
        // down the axis through both caps
        let r = Ray::new(Point3f::new(0.0, 5.0, 0.0), Vector3f::new(0.0, -1.0, 0.0));
        let ts: Vec<Float> = s.intersect(&r).iter().map(|x| x.t).collect();
        assert_eq!(ts.len(), 2);
        assert!(float_eq(ts[0], 3.0) && float_eq(ts[1], 5.0));
    }

    #[test]
    fn material_reaches_the_shape() {
        let m = Material::default().with_ambient(0.5);
        let s = make_shape("cube", &Transform::default(), &m, &ParamSet::default()).unwrap();
        assert_eq!(s.material().ambient, 0.5);
    }

    #[test]
    fn lights_by_name() {
        let mut ps = ParamSet::default();
        ps.add_point3f(String::from("from"), Point3f::new(1.0, 2.0, 3.0));
        let l = make_light("point", &ps).unwrap();
        assert_eq!(l.position(), Point3f::new(1.0, 2.0, 3.0));
        let mut ps = ParamSet::default();
        ps.add_int(String::from("usteps"), 4);
        ps.add_int(String::from("vsteps"), 2);
        assert_eq!(make_light("area", &ps).unwrap().n_samples(), 8);
        assert!(matches!(make_light("spot", &ParamSet::default()), Ok(Light::Spot(_))));
        assert!(matches!(make_light("areaspot", &ParamSet::default()), Ok(Light::AreaSpot(_))));
    }

    #[test]
    fn invalid_lights() {
        let mut ps = ParamSet::default();
        ps.add_int(String::from("usteps"), 0);
        assert!(make_light("area", &ps).is_err());
        let mut ps = ParamSet::default();
        ps.add_float(String::from("coneangle"), 10.0);
        ps.add_float(String::from("conedeltaangle"), 20.0);
        assert!(make_light("spot", &ps).is_err());
        assert!(make_light("infinite", &ParamSet::default()).is_err());
    }
}

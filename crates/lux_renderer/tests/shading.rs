//! Shading behavior of the Whitted tracer on hand-built scenes.

use lux_core::{
    AmbientLight, Geometries, Geometry, Intersectable, Material, Plane, PointLight, Scene,
    SceneBuilder, Sphere, Triangle, Tube,
};
use lux_math::{Color, Point3, Ray, Vector3};
use lux_renderer::{
    render, Camera, DiffuseMode, ImageBuffer, RayTracer, RenderConfig, Sampling, TracerConfig,
    WhittedTracer,
};

const TOLERANCE: f64 = 1e-9;

fn forward_ray() -> Ray {
    Ray::new(Point3::ZERO, Vector3::NEG_Z)
}

/// Diffuse floor at z = -5 lit from above, optionally with a sphere
/// sitting on the shadow ray of the point seen head-on.
fn shadow_scene(occluder: Option<f64>) -> Scene {
    let mut builder = SceneBuilder::new("shadow")
        .add_geometry(
            Geometry::new(Plane::new(Point3::new(0.0, 0.0, -5.0), Vector3::Z))
                .with_material(Material::new().with_kd(1.0)),
        )
        .add_light(PointLight::new(Color::WHITE, Point3::new(0.0, 4.0, -1.0)));

    if let Some(kt) = occluder {
        builder = builder.add_geometry(
            Geometry::new(Sphere::new(Point3::new(0.0, 2.0, -3.0), 0.5))
                .with_material(Material::new().with_kt(kt)),
        );
    }
    builder.build()
}

#[test]
fn shadow_attenuation() {
    let lit = std::f64::consts::FRAC_1_SQRT_2;
    let shade = |occluder| {
        let scene = shadow_scene(occluder);
        WhittedTracer::new(&scene).trace_ray(&forward_ray())
    };

    assert!(shade(None).max_difference(Color::new(lit, lit, lit)) < TOLERANCE);
    // Opaque occluder blocks the light entirely
    assert_eq!(shade(Some(0.0)), Color::BLACK);
    // Fully transparent occluder changes nothing
    assert!(shade(Some(1.0)).max_difference(shade(None)) < TOLERANCE);
    // Half transparent: the shadow ray crosses two surfaces
    let quarter = lit * 0.25;
    assert!(shade(Some(0.5)).max_difference(Color::new(quarter, quarter, quarter)) < TOLERANCE);
}

#[test]
fn diffuse_modes_differ_on_back_faces() {
    // Normal points away from both the viewer and the light
    let scene = SceneBuilder::new("back face")
        .add_geometry(
            Geometry::new(Plane::new(Point3::new(0.0, 0.0, -2.0), Vector3::NEG_Z))
                .with_material(Material::new().with_kd(1.0)),
        )
        .add_light(PointLight::new(Color::WHITE, Point3::ZERO))
        .build();

    let two_sided = WhittedTracer::new(&scene).trace_ray(&forward_ray());
    assert!(two_sided.max_difference(Color::WHITE) < TOLERANCE);

    let one_sided = WhittedTracer::new(&scene)
        .with_config(TracerConfig {
            diffuse: DiffuseMode::OneSided,
            ..TracerConfig::default()
        })
        .trace_ray(&forward_ray());
    assert_eq!(one_sided, Color::BLACK);
}

#[test]
fn mirror_corridor_energy_is_bounded() {
    // Two facing emissive half-mirrors: depth L yields E * (2 - 2 * 0.5^L)
    let emission = Color::new(0.2, 0.1, 0.05);
    let mirror = Material::new().with_kr(0.5);
    let scene = SceneBuilder::new("corridor")
        .with_background(Color::new(5.0, 5.0, 5.0))
        .add_geometry(
            Geometry::new(Plane::new(Point3::new(0.0, 0.0, -1.0), Vector3::Z))
                .with_emission(emission)
                .with_material(mirror),
        )
        .add_geometry(
            Geometry::new(Plane::new(Point3::new(0.0, 0.0, 1.0), Vector3::NEG_Z))
                .with_emission(emission)
                .with_material(mirror),
        )
        .build();

    let mut previous = Color::BLACK;
    for level in 1..=10 {
        let tracer = WhittedTracer::new(&scene).with_config(TracerConfig {
            max_level: level,
            ..TracerConfig::default()
        });
        let color = tracer.trace_ray(&forward_ray());
        let expected = emission * (2.0 - 2.0 * 0.5f64.powi(level as i32));
        assert!(color.max_difference(expected) < TOLERANCE, "level {level}");
        assert!(color.r() >= previous.r());
        assert!(color.r() <= 2.0 * emission.r());
        previous = color;
    }

    // Past the attenuation cutoff deeper recursion adds nothing
    let deep = WhittedTracer::new(&scene)
        .with_config(TracerConfig {
            max_level: 30,
            ..TracerConfig::default()
        })
        .trace_ray(&forward_ray());
    assert!(deep.max_difference(previous) < TOLERANCE);
}

#[test]
fn refraction_passes_scaled_color() {
    // Half-transparent pane at z = -2 in front of a red emitter
    let scene = SceneBuilder::new("pane")
        .add_geometry(
            Geometry::new(Plane::new(Point3::new(0.0, 0.0, -2.0), Vector3::Z))
                .with_material(Material::new().with_kt(0.5)),
        )
        .add_geometry(
            Geometry::new(Sphere::new(Point3::new(0.0, 0.0, -5.0), 1.0))
                .with_emission(Color::new(1.0, 0.0, 0.0)),
        )
        .build();

    let color = WhittedTracer::new(&scene).trace_ray(&forward_ray());
    assert!(color.max_difference(Color::new(0.5, 0.0, 0.0)) < TOLERANCE);

    // Without recursion only the pane's own (black) color remains
    let shallow = WhittedTracer::new(&scene)
        .with_config(TracerConfig {
            max_level: 1,
            ..TracerConfig::default()
        })
        .trace_ray(&forward_ray());
    assert_eq!(shallow, Color::BLACK);
}

#[test]
fn grazing_hit_keeps_reflection_without_local_light() {
    // Tube of radius 1 around the vertical line x = 1, z = -3: the forward
    // ray touches it at (0, 0, -3) where the normal is perpendicular to it
    let axis = Ray::new(Point3::new(1.0, 0.0, -3.0), Vector3::Y);
    let scene = SceneBuilder::new("grazing")
        .with_background(Color::new(0.0, 1.0, 0.0))
        .add_geometry(
            Geometry::new(Tube::new(axis, 1.0))
                .with_emission(Color::new(0.3, 0.0, 0.0))
                .with_material(Material::new().with_kd(1.0).with_kr(0.5)),
        )
        .add_light(PointLight::new(Color::WHITE, Point3::new(-2.0, 0.0, -3.0)))
        .build();

    let hit = scene.geometries().find_closest(&forward_ray()).unwrap();
    assert!((hit.point.z() + 3.0).abs() < TOLERANCE);

    // Emission plus kR times the background seen past the tube
    let color = WhittedTracer::new(&scene).trace_ray(&forward_ray());
    assert!(color.max_difference(Color::new(0.3, 0.5, 0.0)) < TOLERANCE);
}

fn cluttered_geometries() -> Geometries {
    let mut geometries = Geometries::new();
    for i in 0..6 {
        for j in 0..4 {
            let center = Point3::new(-2.5 + i as f64, -1.5 + j as f64, -6.0 - (i + j) as f64 * 0.3);
            let material = Material::new()
                .with_kd(0.6)
                .with_ks(0.3)
                .with_shininess(20)
                .with_kr(if (i + j) % 3 == 0 { 0.4 } else { 0.0 });
            geometries.add(Geometry::new(Sphere::new(center, 0.35)).with_material(material));
        }
    }
    geometries.add(
        Geometry::new(
            Triangle::new(
                Point3::new(-3.0, -2.0, -4.5),
                Point3::new(0.0, 2.0, -4.5),
                Point3::new(-1.0, -2.0, -4.5),
            )
            .unwrap(),
        )
        .with_material(Material::new().with_kd(0.2).with_kt(0.5)),
    );
    geometries.add(
        Geometry::new(Plane::new(Point3::new(0.0, -2.0, 0.0), Vector3::Y))
            .with_material(Material::new().with_kd(0.5).with_kr(0.2)),
    );
    geometries
}

fn cluttered_scene(culling: bool, hierarchy: bool) -> Scene {
    let mut geometries = cluttered_geometries();
    geometries.set_culling(culling);
    SceneBuilder::new("clutter")
        .with_background(Color::new(0.1, 0.1, 0.3))
        .with_ambient_light(AmbientLight::new(Color::WHITE, 0.05))
        .with_geometries(geometries)
        .with_hierarchy(hierarchy)
        .add_light(PointLight::new(Color::new(0.9, 0.8, 0.7), Point3::new(3.0, 4.0, 0.0)))
        .build()
}

fn render_scene(scene: &Scene, camera: &Camera, config: &RenderConfig) -> ImageBuffer {
    let mut image = ImageBuffer::new(24, 16);
    render(camera, &WhittedTracer::new(scene), &mut image, config).unwrap();
    image
}

fn clutter_camera(sampling: Sampling) -> Camera {
    Camera::builder()
        .with_position(Point3::new(0.0, 0.0, 2.0))
        .with_direction(Vector3::NEG_Z, Vector3::Y)
        .with_view_plane_size(3.0, 2.0)
        .with_view_plane_distance(1.0)
        .with_sampling(sampling)
        .build()
        .unwrap()
}

#[test]
fn acceleration_does_not_change_the_image() {
    let camera = clutter_camera(Sampling::Single);
    let config = RenderConfig::default();

    let reference = render_scene(&cluttered_scene(false, false), &camera, &config);
    for (culling, hierarchy) in [(true, false), (true, true)] {
        let image = render_scene(&cluttered_scene(culling, hierarchy), &camera, &config);
        for y in 0..16 {
            for x in 0..24 {
                let difference = image.get(x, y).max_difference(reference.get(x, y));
                assert!(difference < TOLERANCE, "pixel ({x}, {y}) differs by {difference}");
            }
        }
    }
}

#[test]
fn stochastic_render_is_reproducible() {
    let scene = cluttered_scene(true, true);
    let camera = clutter_camera(Sampling::Stochastic { samples: 4 });

    let config = RenderConfig {
        bucket_size: 5,
        threads: 1,
        seed: 42,
    };
    let first = render_scene(&scene, &camera, &config);
    let second = render_scene(
        &scene,
        &camera,
        &RenderConfig {
            threads: 3,
            ..config
        },
    );
    assert_eq!(first, second);

    let reseeded = render_scene(
        &scene,
        &camera,
        &RenderConfig {
            seed: 7,
            ..config
        },
    );
    assert_ne!(first, reseeded);
}

#[test]
fn adaptive_sampling_on_uniform_view_matches_single() {
    // Nothing to hit: every sample sees the background
    let scene = SceneBuilder::new("flat")
        .with_background(Color::new(0.3, 0.3, 0.3))
        .build();
    let single = render_scene(&scene, &clutter_camera(Sampling::Single), &RenderConfig::default());
    let adaptive = render_scene(
        &scene,
        &clutter_camera(Sampling::Adaptive {
            max_depth: 3,
            threshold: 0.01,
        }),
        &RenderConfig::default(),
    );
    for y in 0..16 {
        for x in 0..24 {
            assert!(adaptive.get(x, y).max_difference(single.get(x, y)) < TOLERANCE);
        }
    }
}

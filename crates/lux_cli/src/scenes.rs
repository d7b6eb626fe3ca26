//! Built-in demo scenes, each paired with the camera that frames it.

use anyhow::Result;
use clap::ValueEnum;
use lux_core::{
    AmbientLight, Cylinder, DirectionalLight, Geometry, Material, Plane, PointLight, Polygon,
    Scene, SceneBuilder, Sphere, SpotLight, Triangle,
};
use lux_math::{Color, Point3, Ray, Vector3};
use lux_renderer::{Camera, CameraAxis, Sampling};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoScene {
    /// A glassy sphere around a red core under a spot light
    Spheres,
    /// Nested spheres reflected in two triangular mirrors
    Mirrors,
    /// Open cylinders on a reflective polygon floor
    Columns,
}

pub fn build(demo: DemoScene, sampling: Sampling) -> Result<(Scene, Camera)> {
    match demo {
        DemoScene::Spheres => spheres(sampling),
        DemoScene::Mirrors => mirrors(sampling),
        DemoScene::Columns => columns(sampling),
    }
}

fn spheres(sampling: Sampling) -> Result<(Scene, Camera)> {
    let center = Point3::new(0.0, 0.0, -50.0);
    let scene = SceneBuilder::new("spheres")
        .with_ambient_light(AmbientLight::new(Color::WHITE, 0.1))
        .add_geometry(
            Geometry::new(Sphere::new(center, 50.0))
                .with_emission(Color::new(0.0, 0.0, 0.4))
                .with_material(
                    Material::new()
                        .with_kd(0.4)
                        .with_ks(0.3)
                        .with_shininess(100)
                        .with_kt(0.3),
                ),
        )
        .add_geometry(
            Geometry::new(Sphere::new(center, 25.0))
                .with_emission(Color::new(0.4, 0.0, 0.0))
                .with_material(Material::new().with_kd(0.5).with_ks(0.5).with_shininess(100)),
        )
        .add_light(
            SpotLight::new(
                Color::new(1.0, 0.8, 0.4),
                Point3::new(-100.0, -100.0, 500.0),
                Vector3::new(-1.0, -1.0, -2.0)?,
            )
            .with_kl(0.0004)
            .with_kq(0.000_000_6),
        )
        .build();

    let camera = Camera::builder()
        .with_position(Point3::new(0.0, 0.0, 1000.0))
        .with_direction(Vector3::NEG_Z, Vector3::Y)
        .with_view_plane_size(150.0, 150.0)
        .with_view_plane_distance(1000.0)
        .with_sampling(sampling)
        .build()?;

    Ok((scene, camera))
}

fn mirrors(sampling: Sampling) -> Result<(Scene, Camera)> {
    let mirror = Material::new().with_kr(1.0);
    let scene = SceneBuilder::new("mirrors")
        .with_ambient_light(AmbientLight::new(Color::WHITE, 0.1))
        .with_hierarchy(true)
        .add_geometry(
            Geometry::new(Sphere::new(Point3::new(-950.0, -900.0, -1000.0), 400.0))
                .with_emission(Color::new(0.0, 0.5, 1.0))
                .with_material(
                    Material::new()
                        .with_kd(0.25)
                        .with_ks(0.25)
                        .with_shininess(20)
                        .with_kt([0.5, 0.0, 0.0]),
                ),
        )
        .add_geometry(
            Geometry::new(Sphere::new(Point3::new(-950.0, -900.0, -1000.0), 200.0))
                .with_emission(Color::new(0.4, 0.1, 0.3))
                .with_material(Material::new().with_kd(0.25).with_ks(0.25).with_shininess(20)),
        )
        .add_geometry(
            Geometry::new(Triangle::new(
                Point3::new(1500.0, -1500.0, -1500.0),
                Point3::new(-1500.0, 1500.0, -1500.0),
                Point3::new(670.0, 670.0, 3000.0),
            )?)
            .with_emission(Color::new(0.08, 0.08, 0.08))
            .with_material(mirror),
        )
        .add_geometry(
            Geometry::new(Triangle::new(
                Point3::new(1500.0, -1500.0, -1500.0),
                Point3::new(-1500.0, 1500.0, -1500.0),
                Point3::new(-1500.0, -1500.0, -2000.0),
            )?)
            .with_emission(Color::new(0.08, 0.08, 0.08))
            .with_material(Material::new().with_kr([0.0, 0.5, 0.0])),
        )
        .add_light(
            SpotLight::new(
                Color::new(1.0, 0.8, 0.4),
                Point3::new(-750.0, -750.0, -150.0),
                Vector3::new(-1.0, -1.0, -4.0)?,
            )
            .with_kl(0.00001)
            .with_kq(0.000005),
        )
        .build();

    let camera = Camera::builder()
        .with_position(Point3::new(0.0, 0.0, 10000.0))
        .with_direction(Vector3::NEG_Z, Vector3::Y)
        .with_view_plane_size(2500.0, 2500.0)
        .with_view_plane_distance(10000.0)
        .with_sampling(sampling)
        .build()?;

    Ok((scene, camera))
}

fn columns(sampling: Sampling) -> Result<(Scene, Camera)> {
    let stone = Material::new().with_kd(0.6).with_ks(0.2).with_shininess(30);
    let mut builder = SceneBuilder::new("columns")
        .with_background(Color::new(0.05, 0.05, 0.1))
        .with_ambient_light(AmbientLight::new(Color::WHITE, 0.15))
        .with_hierarchy(true)
        .add_geometry(
            Geometry::new(Polygon::new(vec![
                Point3::new(-60.0, 0.0, -60.0),
                Point3::new(-60.0, 0.0, 60.0),
                Point3::new(60.0, 0.0, 60.0),
                Point3::new(60.0, 0.0, -60.0),
            ])?)
            .with_emission(Color::new(0.05, 0.05, 0.05))
            .with_material(Material::new().with_kd(0.5).with_kr(0.3)),
        )
        .add_geometry(
            Geometry::new(Plane::new(Point3::new(0.0, 0.0, -80.0), Vector3::Z))
                .with_emission(Color::new(0.1, 0.1, 0.2))
                .with_material(Material::new().with_kd(0.3)),
        );

    for i in 0..5 {
        let x = -40.0 + 20.0 * i as f64;
        let base = Ray::new(Point3::new(x, 0.0, -20.0), Vector3::Y);
        builder = builder.add_geometry(
            Geometry::new(Cylinder::new(base, 4.0, 30.0 + 5.0 * i as f64))
                .with_emission(Color::new(0.2, 0.15, 0.1))
                .with_material(stone),
        );
    }

    let scene = builder
        .add_geometry(
            Geometry::new(Sphere::new(Point3::new(0.0, 8.0, 10.0), 8.0))
                .with_emission(Color::new(0.1, 0.0, 0.0))
                .with_material(
                    Material::new()
                        .with_kd(0.2)
                        .with_ks(0.8)
                        .with_shininess(200)
                        .with_kt(0.5),
                ),
        )
        .add_light(
            PointLight::new(Color::new(0.8, 0.8, 0.7), Point3::new(30.0, 60.0, 40.0))
                .with_kl(0.001),
        )
        .add_light(DirectionalLight::new(
            Color::new(0.2, 0.2, 0.3),
            Vector3::new(-1.0, -1.0, -1.0)?,
        ))
        .build();

    let mut camera = Camera::builder()
        .with_position(Point3::new(0.0, 20.0, 120.0))
        .with_direction(Vector3::NEG_Z, Vector3::Y)
        .with_view_plane_size(160.0, 100.0)
        .with_view_plane_distance(120.0)
        .with_sampling(sampling)
        .build()?;
    camera.rotate(CameraAxis::Right, -5.0)?;

    Ok((scene, camera))
}

use std::io::prelude::*;
use std::time::Instant;

use hikari::{
    geometries::{Intersectable, Sphere},
    integrators::{RayTracer, Whitted},
    math::{Point3, Ray, Vec3},
    scene::{demo, LoadedScene},
};

const ITERATIONS: usize = 5000000;
const RENDER_SIZE: u32 = 200;

fn bench_sphere(sphere: &Sphere, ray: &Ray) {
    let start = Instant::now();
    for _ in 0..ITERATIONS {
        if sphere.find_geo_intersections(ray).is_none() {
            panic!("We only wanted to force the loop to be executed!")
        }
    }
    let elapsed_ns = start.elapsed().as_nanos();
    let elapsed_ms = (elapsed_ns as f64) * 1e-6;
    let ns_per_hit = (elapsed_ns as f64) / (ITERATIONS as f64);
    println!(
        "Sphere   took {:4.1} ms total, {:0.4} ns per intersection",
        elapsed_ms, ns_per_hit
    );
}

fn bench_demo() {
    let LoadedScene {
        scene,
        camera,
        tracer,
        ..
    } = demo().unwrap();
    let camera = camera.build().unwrap();
    let tracer = Whitted::new(std::sync::Arc::new(scene), tracer);

    let start = Instant::now();
    let mut black_pixels = 0;
    for i in 0..RENDER_SIZE {
        for j in 0..RENDER_SIZE {
            let ray = camera.construct_ray(RENDER_SIZE, RENDER_SIZE, j, i).unwrap();
            if tracer.trace_ray(&ray).unwrap().is_black() {
                black_pixels += 1;
            }
        }
    }
    let elapsed_ns = start.elapsed().as_nanos();
    let elapsed_ms = (elapsed_ns as f64) * 1e-6;
    let us_per_pixel = (elapsed_ns as f64) * 1e-3 / ((RENDER_SIZE * RENDER_SIZE) as f64);
    println!(
        "Demo     took {:4.1} ms total, {:0.4} us per pixel, {} black",
        elapsed_ms, us_per_pixel, black_pixels
    );
}

fn main() {
    let sphere = Sphere::new(Point3::new(0.0, 0.0, -3.0), 1.0).unwrap();
    let ray = Ray::new(
        Point3::new(0.1, 0.2, 0.0),
        Vec3::new(0.0, 0.0, -1.0).unwrap(),
    )
    .unwrap();

    println!("Sphere");
    bench_sphere(&sphere, &ray);

    println!("Demo, single thread");
    bench_demo();

    println!("Press enter to quit...");
    // Read a single byte and discard
    let _ = std::io::stdin().read(&mut [0u8]).unwrap();
}

use serde::{Deserialize, Serialize};

use std::sync::Arc;

use super::RayTracer;
use crate::{
    error::Result,
    geometries::{GeoPoint, Intersectable},
    hikari_debug,
    lights::Light,
    materials::Material,
    math::{align_zero, Color, Point3, Ray, Triple, Vec3},
    scene::Scene,
};

#[derive(Copy, Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Params {
    /// Number of surface interactions a camera ray is followed through
    pub max_level: u32,
    /// Contributions attenuated below this on every channel are skipped
    pub min_k: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            max_level: 10,
            min_k: 0.001,
        }
    }
}

/// Recursive ray tracer with Phong lighting, transparent shadows, reflection and refraction.
pub struct Whitted {
    scene: Arc<Scene>,
    max_level: u32,
    min_k: f64,
}

impl Whitted {
    pub fn new(scene: Arc<Scene>, params: Params) -> Self {
        hikari_debug!(
            "Whitted: max_level {}, min_k {}",
            params.max_level,
            params.min_k
        );
        Self {
            scene,
            max_level: params.max_level,
            min_k: params.min_k,
        }
    }

    fn find_closest_intersection(&self, ray: &Ray) -> Option<GeoPoint<'_>> {
        let hits = self.scene.geometries().find_geo_intersections(ray)?;
        ray.find_closest_geo_point(&hits)
    }

    fn calc_color(&self, gp: &GeoPoint, ray: &Ray, level: u32, k: Triple) -> Result<Color> {
        let color = self.calc_local_effects(gp, ray, k)?;
        if level <= 1 {
            Ok(color)
        } else {
            Ok(color + self.calc_global_effects(gp, ray, level, k)?)
        }
    }

    fn calc_local_effects(&self, gp: &GeoPoint, ray: &Ray, k: Triple) -> Result<Color> {
        let v = ray.direction();
        let n = gp.geometry.normal(gp.point)?;
        let mut color = gp.geometry.emission();

        // Grazing view sees no lit side
        let nv = align_zero(n.dot(v));
        if nv == 0.0 {
            return Ok(color);
        }

        let material = gp.geometry.material();
        for light in self.scene.lights() {
            // Surface point at the light itself gets nothing from it
            let Ok(l) = light.direction_toward(gp.point) else {
                continue;
            };

            // Lit only if light and viewer are on the same side
            let nl = align_zero(n.dot(l));
            if nl * nv > 0.0 {
                let ktr = self.transparency(gp.point, light.as_ref(), l, n)?;
                if !(ktr * k).lower_than(self.min_k) {
                    let il = light.intensity_at(gp.point) * ktr;
                    color += il * (diffuse(material, nl) + specular(material, n, l, nl, v));
                }
            }
        }

        Ok(color)
    }

    /// Returns the product of the transparencies of everything between `p` and `light`.
    fn transparency(&self, p: Point3, light: &dyn Light, l: Vec3, n: Vec3) -> Result<Triple> {
        let light_ray = Ray::offset(p, -l, n)?;
        // Measured from the moved head, only hits strictly before the light occlude
        let head = light_ray.head();
        let light_distance = light.distance_to(head);

        let Some(hits) = self.scene.geometries().intersect(&light_ray, light_distance) else {
            return Ok(Triple::ONE);
        };
        let occluders = hits
            .into_iter()
            .filter(|hit| align_zero(head.distance(hit.point) - light_distance) < 0.0);

        let mut ktr = Triple::ONE;
        for occluder in occluders {
            ktr = ktr * occluder.geometry.material().kt;
            if ktr.lower_than(self.min_k) {
                return Ok(Triple::ZERO);
            }
        }
        Ok(ktr)
    }

    fn calc_global_effects(&self, gp: &GeoPoint, ray: &Ray, level: u32, k: Triple) -> Result<Color> {
        let v = ray.direction();
        let n = gp.geometry.normal(gp.point)?;
        let material = gp.geometry.material();

        let refracted = Ray::offset(gp.point, v, n)?;
        let reflected = Ray::offset(gp.point, v.reflect(n)?, n)?;

        Ok(self.calc_global_effect(&refracted, level, k, material.kt)?
            + self.calc_global_effect(&reflected, level, k, material.kr)?)
    }

    fn calc_global_effect(&self, ray: &Ray, level: u32, k: Triple, kx: Triple) -> Result<Color> {
        let kkx = k * kx;
        if kkx.lower_than(self.min_k) {
            return Ok(Color::BLACK);
        }

        let color = match self.find_closest_intersection(ray) {
            Some(gp) => self.calc_color(&gp, ray, level - 1, kkx)?,
            None => self.scene.background(),
        };
        Ok(color * kx)
    }
}

fn diffuse(material: &Material, nl: f64) -> Triple {
    material.kd * nl.abs()
}

fn specular(material: &Material, n: Vec3, l: Vec3, nl: f64, v: Vec3) -> Triple {
    let r = l.xyz() - n.xyz() * (2.0 * nl);
    let minus_vr = -align_zero(r.dot(v.xyz()));
    if minus_vr <= 0.0 {
        Triple::ZERO
    } else {
        material.ks * minus_vr.powi(material.shininess)
    }
}

impl RayTracer for Whitted {
    fn trace_ray(&self, ray: &Ray) -> Result<Color> {
        match self.find_closest_intersection(ray) {
            Some(gp) => Ok(self.calc_color(&gp, ray, self.max_level, Triple::ONE)?
                + self.scene.ambient_light().intensity()),
            None => Ok(self.scene.background()),
        }
    }
}

use crate::math::{Aabb, Vec3};
use crate::prop::Prop;

/// Reichweite fuer Strahlen ohne explizites Limit (z.B. Sichtpruefung).
pub const DEFAULT_RAY_DISTANCE: f32 = 1000.0;

const PARALLEL_EPS: f32 = 1e-6;
const FACE_EPS: f32 = 0.001;

/// Statisches Hindernis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Solid {
    pub bounds: Aabb,
}

impl Solid {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            bounds: Aabb::new(min, max),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub distance: f32,
    pub point: Vec3,
    /// Zeigt vom getroffenen Quader weg; Null, wenn keine Flaeche passt.
    pub normal: Vec3,
}

/// Statische Welt: nach dem Laden nur noch lesend benutzt.
#[derive(Clone, Debug, Default)]
pub struct World {
    solids: Vec<Solid>,
    props: Vec<Prop>,
    bounds: Aabb,
}

impl World {
    pub fn new(bounds: Aabb, solids: Vec<Solid>) -> Self {
        Self {
            solids,
            props: Vec::new(),
            bounds,
        }
    }

    pub fn with_props(mut self, props: Vec<Prop>) -> Self {
        self.props = props;
        self
    }

    pub fn solids(&self) -> &[Solid] {
        &self.solids
    }

    pub fn props(&self) -> &[Prop] {
        &self.props
    }

    /// Nur fuer Anzeige; Kollision ignoriert das.
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    // Solids zuerst, dann Props (Reihenfolge entscheidet Gleichstand beim Raycast)
    fn boxes(&self) -> impl Iterator<Item = Aabb> + '_ {
        self.solids
            .iter()
            .map(|s| s.bounds)
            .chain(self.props.iter().map(Prop::bounds))
    }

    pub fn is_solid(&self, point: Vec3) -> bool {
        self.boxes().any(|b| b.contains(point))
    }

    pub fn collides(&self, aabb: &Aabb) -> bool {
        self.boxes().any(|b| b.intersects(aabb))
    }

    /// Naechster Treffer entlang des Strahls, `None` bei Fehlschuss.
    ///
    /// `direction` wird intern normalisiert.
    pub fn raycast(&self, origin: Vec3, direction: Vec3, max_dist: f32) -> Option<RayHit> {
        let dir = direction.normalize_or_zero();
        let mut closest: Option<RayHit> = None;

        for b in self.boxes() {
            if let Some(hit) = ray_vs_aabb(origin, dir, &b, max_dist) {
                // bei Gleichstand gewinnt der fruehere Quader
                if closest.is_none_or(|c| hit.distance < c.distance) {
                    closest = Some(hit);
                }
            }
        }
        closest
    }

    /// Grobe Sichtbarkeitsschaetzung: `rays_h` x `rays_v` Strahlen ueber das
    /// Sichtfeld verteilt, Treffer in Zeilenreihenfolge.
    pub fn visible_surfaces(
        &self,
        origin: Vec3,
        forward: Vec3,
        fov_h: f32,
        fov_v: f32,
        rays_h: usize,
        rays_v: usize,
    ) -> Vec<RayHit> {
        let right = Vec3::Y.cross(forward).normalize_or_zero();
        let up = forward.cross(right);

        let mut hits = Vec::new();
        for y in 0..rays_v {
            let pitch = (grid_fraction(y, rays_v) - 0.5) * fov_v;
            for x in 0..rays_h {
                let yaw = (grid_fraction(x, rays_h) - 0.5) * fov_h;

                let dir = (forward + right * yaw.tan() + up * pitch.tan()).normalize_or_zero();
                if let Some(hit) = self.raycast(origin, dir, DEFAULT_RAY_DISTANCE) {
                    hits.push(hit);
                }
            }
        }
        hits
    }
}

// Ein einzelner Strahl liegt in der Mitte (kein Teilen durch 0)
fn grid_fraction(i: usize, n: usize) -> f32 {
    if n > 1 {
        i as f32 / (n - 1) as f32
    } else {
        0.5
    }
}

// Slab-Methode
fn ray_vs_aabb(origin: Vec3, dir: Vec3, b: &Aabb, max_dist: f32) -> Option<RayHit> {
    let mut t_min = 0.0_f32;
    let mut t_max = max_dist;

    for axis in 0..3 {
        let o = origin[axis];
        let d = dir[axis];
        let b_min = b.min[axis];
        let b_max = b.max[axis];

        if d.abs() < PARALLEL_EPS {
            if o < b_min || o > b_max {
                return None;
            }
        } else {
            let mut t1 = (b_min - o) / d;
            let mut t2 = (b_max - o) / d;
            if t1 > t2 {
                std::mem::swap(&mut t1, &mut t2);
            }
            t_min = t_min.max(t1);
            t_max = t_max.min(t2);
            if t_min > t_max {
                return None;
            }
        }
    }

    if t_min < 0.0 {
        return None;
    }

    let point = origin + dir * t_min;
    Some(RayHit {
        distance: t_min,
        point,
        normal: face_normal(point, b),
    })
}

// Feste Reihenfolge -X, +X, -Y, +Y, -Z, +Z; erste passende Flaeche gewinnt
fn face_normal(p: Vec3, b: &Aabb) -> Vec3 {
    let faces = [
        (p.x - b.min.x, Vec3::NEG_X),
        (p.x - b.max.x, Vec3::X),
        (p.y - b.min.y, Vec3::NEG_Y),
        (p.y - b.max.y, Vec3::Y),
        (p.z - b.min.z, Vec3::NEG_Z),
        (p.z - b.max.z, Vec3::Z),
    ];
    faces
        .iter()
        .find(|(delta, _)| delta.abs() < FACE_EPS)
        .map_or(Vec3::ZERO, |&(_, n)| n)
}

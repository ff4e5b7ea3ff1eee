use crate::math::{Aabb, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Einrichtungsgegenstand (Kiste, Tisch, ...), kollidiert wie ein Solid.
#[derive(Clone, Debug, PartialEq)]
pub struct Prop {
    pub kind: String,
    /// Mitte der Grundflaeche
    pub position: Vec3,
    pub size: Vec3,
    pub color: Option<Rgba>,
}

impl Prop {
    pub fn new(kind: impl Into<String>, position: Vec3, size: Vec3) -> Self {
        Self {
            kind: kind.into(),
            position,
            size,
            color: None,
        }
    }

    pub fn bounds(&self) -> Aabb {
        let half_x = self.size.x / 2.0;
        let half_z = self.size.z / 2.0;
        Aabb::new(
            Vec3::new(self.position.x - half_x, self.position.y, self.position.z - half_z),
            Vec3::new(
                self.position.x + half_x,
                self.position.y + self.size.y,
                self.position.z + half_z,
            ),
        )
    }

    pub fn display_color(&self) -> Rgba {
        self.color.unwrap_or_else(|| default_prop_color(&self.kind))
    }
}

pub fn default_prop_color(kind: &str) -> Rgba {
    match kind {
        "desk" => Rgba::new(139, 90, 43, 255),
        "chair" => Rgba::new(101, 67, 33, 255),
        "computer" => Rgba::new(50, 50, 60, 255),
        "screen" => Rgba::new(0, 200, 200, 255),
        "panel" => Rgba::new(180, 180, 190, 255),
        "window" => Rgba::new(20, 20, 40, 200),
        "crate" => Rgba::new(194, 178, 128, 255),
        "pipe" => Rgba::new(160, 170, 180, 255),
        "light_fixture" => Rgba::new(240, 240, 250, 255),
        "bed" => Rgba::new(120, 130, 150, 255),
        _ => Rgba::new(200, 200, 200, 255),
    }
}

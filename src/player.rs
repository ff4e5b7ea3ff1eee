use crate::input::PlayerInput;
use crate::math::{Aabb, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    /// Augenhoehe, nicht Fuesse
    pub position: Vec3,

    // Blickwinkel in Radiant, yaw 0 = Blick nach -Z
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, Self::EYE_HEIGHT, 0.0),
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

impl Player {
    /// Meter pro Sekunde
    pub const MOVE_SPEED: f32 = 3.0;
    /// Radiant pro Pixel Mausbewegung
    pub const MOUSE_SENSITIVITY: f32 = 0.002;
    /// ~86°
    pub const MAX_PITCH: f32 = 1.5;

    pub const EYE_HEIGHT: f32 = 1.7;
    pub const HALF_WIDTH: f32 = 0.25;
    pub const HEAD_CLEARANCE: f32 = 0.1;
    /// Hebt die Box knapp ueber den Boden, sonst kollidiert man im Stehen.
    pub const FLOOR_EPS: f32 = 0.01;

    pub fn with_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn forward(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(sy * cp, sp, -cy * cp)
    }

    /// Immer horizontal, unabhaengig von pitch.
    pub fn right(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        Vec3::new(cy, 0.0, sy)
    }

    /// Kollisionsbox ~0.5m x 1.8m um die Augenposition.
    pub fn bounds(&self) -> Aabb {
        let p = self.position;
        Aabb::new(
            Vec3::new(
                p.x - Self::HALF_WIDTH,
                p.y - Self::EYE_HEIGHT + Self::FLOOR_EPS,
                p.z - Self::HALF_WIDTH,
            ),
            Vec3::new(
                p.x + Self::HALF_WIDTH,
                p.y + Self::HEAD_CLEARANCE,
                p.z + Self::HALF_WIDTH,
            ),
        )
    }

    /// Blick und Bewegung fuer einen Frame, ohne Kollision.
    pub fn update(mut self, input: &PlayerInput, dt: f32) -> Player {
        self.yaw += input.look_yaw;
        self.pitch = (self.pitch + input.look_pitch).clamp(-Self::MAX_PITCH, Self::MAX_PITCH);

        // Bewegung nur in XZ
        let mut move_dir = Vec3::ZERO;
        if input.move_z != 0.0 {
            let mut fwd = self.forward();
            fwd.y = 0.0;
            move_dir += fwd.normalize_or_zero() * input.move_z;
        }
        if input.move_x != 0.0 {
            move_dir += self.right() * input.move_x;
        }

        // Diagonal nicht schneller
        if move_dir.length() > 0.0 {
            self.position += move_dir.normalize_or_zero() * Self::MOVE_SPEED * dt;
        }

        self
    }
}

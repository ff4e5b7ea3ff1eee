use crate::input::PlayerInput;
use crate::map::MapData;
use crate::math::Vec3;
use crate::player::Player;
use crate::world::World;

#[derive(Debug, Clone)]
pub struct GameState {
    pub player: Player,
    pub world: World,
    /// Summe aller dt, auch negative
    pub time: f32,
}

impl GameState {
    pub fn new(world: World, player_start: Vec3) -> Self {
        Self {
            player: Player::with_position(player_start),
            world,
            time: 0.0,
        }
    }

    pub fn from_map(map: MapData) -> Self {
        Self::new(map.world, map.player_start)
    }

    /// Ein Frame. Kollidiert die neue Position, wird die ganze Bewegung
    /// verworfen (kein Gleiten), der Blick bleibt aber aktualisiert.
    pub fn step(mut self, input: &PlayerInput, dt: f32) -> GameState {
        let old_pos = self.player.position;

        self.player = self.player.update(input, dt);

        if self.world.collides(&self.player.bounds()) {
            log::debug!(
                "move rejected at x={:.2} y={:.2} z={:.2}",
                self.player.position.x,
                self.player.position.y,
                self.player.position.z
            );
            self.player.position = old_pos;
        }

        self.time += dt;
        self
    }
}

pub fn step(state: GameState, input: &PlayerInput, dt: f32) -> GameState {
    state.step(input, dt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Aabb;
    use crate::world::Solid;
    use approx::assert_relative_eq;

    fn forward() -> PlayerInput {
        PlayerInput {
            move_z: 1.0,
            ..PlayerInput::default()
        }
    }

    fn open_world() -> World {
        World::new(Aabb::new(Vec3::splat(-10.0), Vec3::splat(10.0)), Vec::new())
    }

    #[test]
    fn test_new_places_player() {
        let state = GameState::new(open_world(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(state.player.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(state.player.yaw, 0.0);
        assert_eq!(state.time, 0.0);
    }

    #[test]
    fn test_time_accumulates() {
        let mut state = GameState::new(open_world(), Vec3::ZERO);
        for dt in [0.1, 0.2, 0.3] {
            state = state.step(&PlayerInput::default(), dt);
        }
        assert_relative_eq!(state.time, 0.6, epsilon = 1e-3);
    }

    #[test]
    fn test_negative_dt_rewinds_time() {
        let state = GameState::new(open_world(), Vec3::ZERO)
            .step(&PlayerInput::default(), 0.5)
            .step(&PlayerInput::default(), -0.75);
        assert_relative_eq!(state.time, -0.25);
    }

    #[test]
    fn test_zero_dt_keeps_position() {
        let state = GameState::new(open_world(), Vec3::new(0.0, 1.7, 0.0));
        let next = step(state.clone(), &forward(), 0.0);
        assert_eq!(next.player.position, state.player.position);
    }

    #[test]
    fn test_blocked_move_keeps_look() {
        // Wand direkt vor dem Spieler
        let wall = Solid::new(Vec3::new(-5.0, 0.0, -0.4), Vec3::new(5.0, 3.0, -0.3));
        let world = World::new(Aabb::default(), vec![wall]);
        let state = GameState::new(world, Vec3::new(0.0, 1.7, 0.0));

        let input = PlayerInput {
            move_z: 1.0,
            look_yaw: 0.01,
            look_pitch: 0.02,
            ..PlayerInput::default()
        };
        let next = state.step(&input, 0.1);

        assert_eq!(next.player.position, Vec3::new(0.0, 1.7, 0.0));
        assert_relative_eq!(next.player.yaw, 0.01);
        assert_relative_eq!(next.player.pitch, 0.02);
        assert_relative_eq!(next.time, 0.1);
    }

    #[test]
    fn test_diagonal_blocked_on_one_axis_reverts_both() {
        // nur die X-Bewegung trifft die Wand, trotzdem bleibt alles stehen
        let wall = Solid::new(Vec3::new(0.3, 0.0, -5.0), Vec3::new(0.4, 3.0, 5.0));
        let world = World::new(Aabb::default(), vec![wall]);
        let state = GameState::new(world, Vec3::new(0.0, 1.7, 0.0));

        let input = PlayerInput {
            move_x: 1.0,
            move_z: 1.0,
            ..PlayerInput::default()
        };
        let next = state.step(&input, 0.1);
        assert_eq!(next.player.position, Vec3::new(0.0, 1.7, 0.0));
    }

    #[test]
    fn test_standing_on_floor_is_not_a_collision() {
        let floor = Solid::new(Vec3::new(-5.0, -0.1, -5.0), Vec3::new(5.0, 0.0, 5.0));
        let world = World::new(Aabb::default(), vec![floor]);
        let state = GameState::new(world, Vec3::new(0.0, 1.7, 0.0));

        let next = state.step(&forward(), 0.1);
        assert_relative_eq!(next.player.position.z, -0.3, epsilon = 1e-5);
    }
}

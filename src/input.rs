/// Steuerung fuer genau einen Frame.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PlayerInput {
    /// -1 links, +1 rechts
    pub move_x: f32,
    /// -1 zurueck, +1 vorwaerts
    pub move_z: f32,
    /// Radiant, bereits mit Empfindlichkeit skaliert
    pub look_yaw: f32,
    pub look_pitch: f32,
}

/// Rohzustand von Tastatur und Maus zwischen zwei Ticks.
#[derive(Debug, Default, Clone, Copy)]
pub struct InputState {
    // --- Held keys (bleiben true solange gedrueckt) ---
    pub move_fwd: bool,
    pub move_back: bool,
    pub move_left: bool,
    pub move_right: bool,

    // --- Mausbewegung in Pixeln, seit dem letzten Tick aufsummiert ---
    mouse_dx: f32,
    mouse_dy: f32,
}

impl InputState {
    pub fn add_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.mouse_dx += dx;
        self.mouse_dy += dy;
    }

    /// Nach jedem Tick aufrufen: Tasten bleiben, Mausweg wird verbraucht.
    pub fn clear_mouse_delta(&mut self) {
        self.mouse_dx = 0.0;
        self.mouse_dy = 0.0;
    }

    /// Gegenlaeufige Tasten heben sich auf; Maus nach oben = Blick nach oben.
    pub fn to_player_input(&self, sensitivity: f32) -> PlayerInput {
        PlayerInput {
            move_x: axis(self.move_right, self.move_left),
            move_z: axis(self.move_fwd, self.move_back),
            look_yaw: self.mouse_dx * sensitivity,
            look_pitch: -self.mouse_dy * sensitivity,
        }
    }
}

fn axis(positive: bool, negative: bool) -> f32 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_idle_is_zero() {
        assert_eq!(InputState::default().to_player_input(0.002), PlayerInput::default());
    }

    #[test]
    fn test_keys_map_to_axes() {
        let state = InputState {
            move_fwd: true,
            move_left: true,
            ..InputState::default()
        };
        let input = state.to_player_input(0.002);
        assert_eq!(input.move_z, 1.0);
        assert_eq!(input.move_x, -1.0);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let state = InputState {
            move_fwd: true,
            move_back: true,
            move_left: true,
            move_right: true,
            ..InputState::default()
        };
        let input = state.to_player_input(0.002);
        assert_eq!(input.move_x, 0.0);
        assert_eq!(input.move_z, 0.0);
    }

    #[test]
    fn test_mouse_accumulates_and_inverts_y() {
        let mut state = InputState::default();
        state.add_mouse_delta(10.0, 5.0);
        state.add_mouse_delta(-4.0, 5.0);

        let input = state.to_player_input(0.01);
        assert_relative_eq!(input.look_yaw, 0.06, epsilon = 1e-6);
        assert_relative_eq!(input.look_pitch, -0.1, epsilon = 1e-6);

        state.clear_mouse_delta();
        let input = state.to_player_input(0.01);
        assert_eq!(input.look_yaw, 0.0);
        assert_eq!(input.look_pitch, 0.0);
    }
}

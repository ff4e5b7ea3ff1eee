use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use log::info;

use discovery_one::world::DEFAULT_RAY_DISTANCE;
use discovery_one::{GameState, InputState, Player, load_map};

struct RunConfig {
    map_path: PathBuf,
    ticks: u64,
    tick_dt: Duration,
    sensitivity: f32,
    /// Simulierte Mausbewegung pro Tick (Pixel)
    turn_per_tick: f32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            map_path: PathBuf::from("maps/test_corridor.json"),
            ticks: 200,
            tick_dt: Duration::from_millis(50), // 20 TPS
            sensitivity: Player::MOUSE_SENSITIVITY,
            turn_per_tick: 2.0,
        }
    }
}

impl RunConfig {
    // discovery_one [MAP_PATH] [TICKS] [SENSITIVITY] [TURN_PER_TICK]
    fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut config = Self::default();
        let mut args = args.into_iter();

        if let Some(path) = args.next() {
            config.map_path = PathBuf::from(path);
        }
        if let Some(ticks) = args.next() {
            config.ticks = ticks
                .parse()
                .with_context(|| format!("invalid tick count '{ticks}'"))?;
        }
        if let Some(sens) = args.next() {
            config.sensitivity = sens
                .parse()
                .with_context(|| format!("invalid sensitivity '{sens}'"))?;
        }
        if let Some(turn) = args.next() {
            config.turn_per_tick = turn
                .parse()
                .with_context(|| format!("invalid turn per tick '{turn}'"))?;
        }
        if let Some(extra) = args.next() {
            bail!("unexpected argument '{extra}'");
        }
        Ok(config)
    }
}

fn log_state(tick: u64, game: &GameState) {
    let p = &game.player;
    let ahead = game
        .world
        .raycast(p.position, p.forward(), DEFAULT_RAY_DISTANCE)
        .map(|hit| hit.distance);

    info!(
        "tick {tick} t={:.2}s POS x={:.2} y={:.2} z={:.2} yaw={:.2} pitch={:.2} ahead={:?}",
        game.time, p.position.x, p.position.y, p.position.z, p.yaw, p.pitch, ahead
    );
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = RunConfig::from_args(std::env::args().skip(1))?;
    let map = load_map(&config.map_path)
        .with_context(|| format!("loading {}", config.map_path.display()))?;

    info!(
        "map '{}': {} solids, {} props, start {:?}",
        map.name,
        map.world.solids().len(),
        map.world.props().len(),
        map.player_start
    );

    let mut game = GameState::from_map(map);
    let dt = config.tick_dt.as_secs_f32();

    // W gedrueckt halten, leicht nach rechts drehen
    let mut input = InputState::default();
    input.move_fwd = true;

    for tick in 1..=config.ticks {
        input.add_mouse_delta(config.turn_per_tick, 0.0);
        game = game.step(&input.to_player_input(config.sensitivity), dt);
        input.clear_mouse_delta();

        if tick % 20 == 0 {
            log_state(tick, &game);
        }
    }

    let p = &game.player;
    let visible = game
        .world
        .visible_surfaces(p.position, p.forward(), 1.2, 0.8, 16, 9);
    info!(
        "done after {} ticks ({:.2}s), {} of {} sample rays hit",
        config.ticks,
        game.time,
        visible.len(),
        16 * 9
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults_without_args() {
        let config = RunConfig::from_args(Vec::new()).unwrap();
        assert_eq!(config.map_path, PathBuf::from("maps/test_corridor.json"));
        assert_eq!(config.ticks, 200);
        assert_eq!(config.sensitivity, Player::MOUSE_SENSITIVITY);
        assert_eq!(config.turn_per_tick, 2.0);
    }

    #[test]
    fn test_all_positional_overrides() {
        let config = RunConfig::from_args(args(&["room.json", "50", "0.01", "-3.5"])).unwrap();
        assert_eq!(config.map_path, PathBuf::from("room.json"));
        assert_eq!(config.ticks, 50);
        assert_eq!(config.sensitivity, 0.01);
        assert_eq!(config.turn_per_tick, -3.5);
    }

    #[test]
    fn test_bad_or_extra_args_fail() {
        assert!(RunConfig::from_args(args(&["room.json", "many"])).is_err());
        assert!(RunConfig::from_args(args(&["room.json", "5", "fast"])).is_err());
        assert!(RunConfig::from_args(args(&["room.json", "5", "0.1", "1", "extra"])).is_err());
    }
}

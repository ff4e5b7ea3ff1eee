//! First-person corridor simulation: player look/move, a world of static
//! axis-aligned boxes, raycasts and collision rejection per frame.

pub mod game;
pub mod input;
pub mod map;
pub mod math;
pub mod player;
pub mod prop;
pub mod world;

pub use game::{GameState, step};
pub use input::{InputState, PlayerInput};
pub use map::{MapData, MapError, load_map, load_map_from_str};
pub use math::{Aabb, Vec3};
pub use player::Player;
pub use prop::{Prop, Rgba};
pub use world::{RayHit, Solid, World};

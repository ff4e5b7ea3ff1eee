//! JSON-Karten laden.
//!
//! ```json
//! {
//!   "name": "Test Room",
//!   "player_start": [0, 1.7, -5],
//!   "bounds": {"min": [-2, 0, -10], "max": [2, 3, 0]},
//!   "solids": [{"min": [-2, -0.1, -10], "max": [2, 0, 0]}],
//!   "objects": [{"type": "crate", "position": [0, 0, -6], "size": [1, 1, 1]}]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::math::{Aabb, Vec3};
use crate::prop::{Prop, Rgba};
use crate::world::{Solid, World};

#[derive(Debug, Error)]
pub enum MapError {
    #[error("failed to read map {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid map json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("color needs 3 or 4 channels, got {len}")]
    Color { len: usize },
}

#[derive(Debug, Clone)]
pub struct MapData {
    pub name: String,
    pub player_start: Vec3,
    pub world: World,
}

#[derive(Deserialize)]
struct MapFile {
    #[serde(default = "unnamed")]
    name: String,
    player_start: [f32; 3],
    bounds: BoxFile,
    solids: Vec<BoxFile>,
    #[serde(default)]
    objects: Vec<ObjectFile>,
}

#[derive(Deserialize)]
struct BoxFile {
    min: [f32; 3],
    max: [f32; 3],
}

#[derive(Deserialize)]
struct ObjectFile {
    #[serde(rename = "type")]
    kind: String,
    position: [f32; 3],
    size: [f32; 3],
    color: Option<Vec<u8>>,
}

fn unnamed() -> String {
    "unnamed".to_string()
}

impl BoxFile {
    fn to_aabb(&self) -> Aabb {
        Aabb::new(Vec3::from_array(self.min), Vec3::from_array(self.max))
    }
}

impl ObjectFile {
    fn into_prop(self) -> Result<Prop, MapError> {
        let color = self.color.as_deref().map(parse_color).transpose()?;
        Ok(Prop {
            kind: self.kind,
            position: Vec3::from_array(self.position),
            size: Vec3::from_array(self.size),
            color,
        })
    }
}

// Alpha optional, Standard 255
fn parse_color(c: &[u8]) -> Result<Rgba, MapError> {
    match *c {
        [r, g, b] => Ok(Rgba::new(r, g, b, 255)),
        [r, g, b, a] => Ok(Rgba::new(r, g, b, a)),
        _ => Err(MapError::Color { len: c.len() }),
    }
}

pub fn load_map_from_str(json: &str) -> Result<MapData, MapError> {
    let file: MapFile = serde_json::from_str(json)?;

    let solids = file
        .solids
        .iter()
        .map(|s| Solid { bounds: s.to_aabb() })
        .collect();
    let props = file
        .objects
        .into_iter()
        .map(ObjectFile::into_prop)
        .collect::<Result<Vec<_>, _>>()?;

    let world = World::new(file.bounds.to_aabb(), solids).with_props(props);
    log::debug!(
        "map '{}': {} solids, {} props",
        file.name,
        world.solids().len(),
        world.props().len()
    );

    Ok(MapData {
        name: file.name,
        player_start: Vec3::from_array(file.player_start),
        world,
    })
}

pub fn load_map(path: impl AsRef<Path>) -> Result<MapData, MapError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| MapError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_map_from_str(&json)
}

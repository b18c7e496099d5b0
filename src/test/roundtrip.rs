use std::io::{Read, Write};

use flate2::{read::GzDecoder, write::GzEncoder, Compression};
use serde::Serialize;

use crate::{encode, to_value, to_writer, ByteArray, EncodeOpts, IntArray, LongArray};

use super::reader::read_root;

#[derive(Serialize)]
struct Level {
    #[serde(rename = "LevelName")]
    level_name: String,
    version: i32,
    seed: i64,
    raining: bool,
    spawn: [i32; 3],
    game_rules: Option<GameRules>,
    player: Option<Player>,
    heightmap: LongArray,
    biomes: IntArray,
    light: ByteArray,
    servers: Vec<Server>,
}

#[derive(Serialize)]
struct GameRules {
    #[serde(rename = "doDaylightCycle")]
    daylight: String,
    #[serde(rename = "keepInventory")]
    keep_inventory: String,
}

#[derive(Serialize)]
struct Player {
    health: f32,
    pos: Vec<f64>,
    inventory: Vec<Item>,
}

#[derive(Serialize)]
struct Item {
    id: String,
    count: i8,
    slot: i8,
}

#[derive(Serialize)]
struct Server {
    ip: String,
    name: String,
}

fn level() -> Level {
    Level {
        level_name: "New World".to_owned(),
        version: 19133,
        seed: -4_658_934_121_234_567,
        raining: false,
        spawn: [0, 64, -16],
        game_rules: Some(GameRules {
            daylight: "true".to_owned(),
            keep_inventory: "false".to_owned(),
        }),
        player: Some(Player {
            health: 20.0,
            pos: vec![0.5, 64.0, -15.5],
            inventory: vec![
                Item {
                    id: "minecraft:stone".to_owned(),
                    count: 64,
                    slot: 0,
                },
                Item {
                    id: "minecraft:torch".to_owned(),
                    count: 12,
                    slot: 8,
                },
            ],
        }),
        heightmap: LongArray::new((0..37).map(|i| i * 0x0101_0101).collect()),
        biomes: IntArray::new(vec![1; 64]),
        light: ByteArray::new((0..16).map(|i| i - 8).collect()),
        servers: vec![Server {
            ip: "mc.example.com".to_owned(),
            name: "Example server".to_owned(),
        }],
    }
}

#[test]
fn level_reads_back() {
    let level = level();
    let bytes = encode(&level, Some("")).unwrap();

    let (name, read) = read_root(&bytes);
    assert_eq!("", name);
    assert_eq!(to_value(&level).unwrap(), read);
}

#[test]
fn missing_player_reads_back() {
    let mut level = level();
    level.player = None;
    level.game_rules = None;
    let bytes = encode(&level, Some("Data")).unwrap();

    let (name, read) = read_root(&bytes);
    assert_eq!("Data", name);
    let compound = read.as_compound().unwrap();
    assert!(!compound.contains_key("player"));
    assert!(!compound.contains_key("game_rules"));
    assert_eq!(to_value(&level).unwrap(), read);
}

#[test]
fn gzip_roundtrip() {
    let level = level();

    let mut gz = GzEncoder::new(Vec::new(), Compression::default());
    to_writer(&mut gz, &level, EncodeOpts::new().root_name("")).unwrap();
    gz.flush().unwrap();
    let compressed = gz.finish().unwrap();

    let mut decoder = GzDecoder::new(compressed.as_slice());
    let mut bytes = Vec::new();
    decoder.read_to_end(&mut bytes).unwrap();

    assert_eq!(encode(&level, Some("")).unwrap(), bytes);
    let (_, read) = read_root(&bytes);
    assert_eq!(to_value(&level).unwrap(), read);
}

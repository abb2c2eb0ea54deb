//! World loading.
//!
//! [`load`] reads from any `Read` source, so tests can pass `&[u8]` and
//! hosts a `File`. Doors are collected while the rooms are read and
//! attached once every room exists, since a door may lead to a room that
//! appears later in the file.

use std::io::{BufRead, BufReader, Read};

use crate::config::LoadConfig;
use crate::error::FormatError;
use tesser_core::{Direction, RoomId, Tile, Transform};
use tesser_space::{Door, Room, World};

/// Load a world with the default [`LoadConfig`].
pub fn load<R: Read>(reader: R) -> Result<World, FormatError> {
    load_with(reader, &LoadConfig::default())
}

/// Load a world from an in-memory string.
pub fn from_str(text: &str) -> Result<World, FormatError> {
    load(text.as_bytes())
}

/// Load a world, refusing inputs larger than `config` allows.
pub fn load_with<R: Read>(reader: R, config: &LoadConfig) -> Result<World, FormatError> {
    config.validate()?;
    let mut lines = Lines::new(BufReader::new(reader));

    let (line, text) = lines.expect("room count")?;
    let [count] = fields::<1>(line, &text)?;
    let count = u32::try_from(count)
        .map_err(|_| FormatError::parse(line, format!("invalid room count {count}")))?;
    if count as u64 > config.max_rooms as u64 {
        return Err(FormatError::LimitExceeded {
            what: "rooms",
            requested: count as u64,
            max: config.max_rooms as u64,
        });
    }

    let mut world = World::new();
    let mut doors: Vec<(usize, RoomId, Door)> = Vec::new();
    let mut cells_total: u64 = 0;

    for index in 0..count {
        let from = RoomId(index);
        let (dims_line, (width, height, depth)) = loop {
            let (line, text) = lines.expect("dimension line")?;
            let values = split(line, &text)?;
            match values.len() {
                5 => doors.push((line, from, parse_door(line, &values, count)?)),
                3 => break (line, parse_dims(line, &values)?),
                n => {
                    return Err(FormatError::parse(
                        line,
                        format!("expected 5 door fields or 3 dimension fields, found {n}"),
                    ))
                }
            }
        };

        let cells = (width as u64)
            .checked_mul(height as u64)
            .and_then(|n| n.checked_mul(depth as u64))
            .unwrap_or(u64::MAX);
        cells_total = cells_total.saturating_add(cells);
        if cells_total > config.max_cells as u64 {
            return Err(FormatError::LimitExceeded {
                what: "cells",
                requested: cells_total,
                max: config.max_cells as u64,
            });
        }

        let mut tiles = Vec::with_capacity(cells as usize);
        if cells > 0 {
            for _ in 0..height as u64 * depth as u64 {
                let (line, text) = lines.expect("tile row")?;
                read_row(line, &text, width, &mut tiles)?;
            }
        }
        let room = Room::from_tiles(width, height, depth, tiles)
            .map_err(|e| FormatError::parse(dims_line, e.to_string()))?;
        world
            .push_room(room)
            .map_err(|e| FormatError::parse(dims_line, e.to_string()))?;
    }

    if let Some((line, _)) = lines.next_content()? {
        return Err(FormatError::parse(line, "content after the last room"));
    }

    let door_count = doors.len();
    for (line, from, door) in doors {
        world
            .attach_door(from, door)
            .map_err(|e| FormatError::parse(line, e.to_string()))?;
    }
    if let Err(e) = world.check_door_pairs() {
        log::warn!("loaded world is not fully paired: {e}");
    }
    log::debug!(
        "loaded world: {} rooms, {door_count} doors, {cells_total} cells",
        world.len()
    );
    Ok(world)
}

fn parse_door(line: usize, values: &[i64], rooms: u32) -> Result<Door, FormatError> {
    let coord = |v: i64| {
        i32::try_from(v)
            .ok()
            .filter(|c| c.unsigned_abs() <= Room::MAX_DIM)
            .ok_or_else(|| FormatError::parse(line, format!("door offset {v} out of range")))
    };
    let (x, y, z) = (coord(values[0])?, coord(values[1])?, coord(values[2])?);
    let rotation =
        Direction::try_from(values[3]).map_err(|e| FormatError::parse(line, e.to_string()))?;
    let target = values[4];
    if !(0..rooms as i64).contains(&target) {
        return Err(FormatError::parse(
            line,
            format!("door target {target} out of range (world has {rooms} rooms)"),
        ));
    }
    Ok(Door::new(
        RoomId(target as u32),
        Transform::new(x, y, z, rotation),
    ))
}

fn parse_dims(line: usize, values: &[i64]) -> Result<(u32, u32, u32), FormatError> {
    let dim = |name: &str, v: i64| {
        if v < 0 {
            return Err(FormatError::parse(line, format!("negative {name} {v}")));
        }
        u32::try_from(v)
            .ok()
            .filter(|&v| v <= Room::MAX_DIM)
            .ok_or_else(|| {
                FormatError::parse(line, format!("{name} {v} exceeds {}", Room::MAX_DIM))
            })
    };
    Ok((
        dim("width", values[0])?,
        dim("height", values[1])?,
        dim("depth", values[2])?,
    ))
}

fn read_row(line: usize, text: &str, width: u32, out: &mut Vec<Tile>) -> Result<(), FormatError> {
    let values = split(line, text)?;
    if values.len() != width as usize {
        return Err(FormatError::parse(
            line,
            format!("expected {width} tiles, found {}", values.len()),
        ));
    }
    for v in values {
        let tile = i32::try_from(v)
            .map_err(|_| FormatError::parse(line, format!("tile {v} out of range")))?;
        out.push(Tile(tile));
    }
    Ok(())
}

/// Split a comma separated line into integers.
fn split(line: usize, text: &str) -> Result<Vec<i64>, FormatError> {
    text.split(',')
        .map(|field| {
            let field = field.trim();
            field
                .parse::<i64>()
                .map_err(|e| FormatError::parse(line, format!("bad integer {field:?}: {e}")))
        })
        .collect()
}

/// Split a line that must have exactly `N` fields.
fn fields<const N: usize>(line: usize, text: &str) -> Result<[i64; N], FormatError> {
    let values = split(line, text)?;
    let found = values.len();
    values
        .try_into()
        .map_err(|_| FormatError::parse(line, format!("expected {N} fields, found {found}")))
}

/// Line reader that skips blank lines and tracks line numbers.
struct Lines<R> {
    inner: R,
    line: usize,
    buf: String,
}

impl<R: BufRead> Lines<R> {
    fn new(inner: R) -> Self {
        Self {
            inner,
            line: 0,
            buf: String::new(),
        }
    }

    /// The next non-blank line, trimmed, with its 1-based number.
    fn next_content(&mut self) -> Result<Option<(usize, String)>, FormatError> {
        loop {
            self.buf.clear();
            if self.inner.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            let text = self.buf.trim();
            if !text.is_empty() {
                return Ok(Some((self.line, text.to_owned())));
            }
        }
    }

    fn expect(&mut self, expected: &'static str) -> Result<(usize, String), FormatError> {
        self.next_content()?
            .ok_or(FormatError::UnexpectedEof { expected })
    }
}

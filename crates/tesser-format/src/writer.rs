//! World saving.

use std::convert::Infallible;
use std::io::Write;

use crate::error::FormatError;
use tesser_space::World;

/// Write `world` to any `Write` sink.
///
/// Door lines come out in each room's stored order, so loading the output
/// gives back an equal world.
pub fn save<W: Write>(world: &World, mut writer: W) -> Result<(), FormatError> {
    render(world, |line| writeln!(writer, "{line}"))?;
    writer.flush()?;
    Ok(())
}

/// Render `world` as a string.
pub fn to_string(world: &World) -> String {
    let mut out = String::new();
    let Ok(()) = render(world, |line| {
        out.push_str(line);
        out.push('\n');
        Ok::<(), Infallible>(())
    });
    out
}

fn render<E>(world: &World, mut emit: impl FnMut(&str) -> Result<(), E>) -> Result<(), E> {
    emit(&world.len().to_string())?;
    emit("")?;
    for (_, room) in world.iter() {
        for door in room.doors() {
            let t = door.transform;
            emit(&format!(
                "{}, {}, {}, {}, {}",
                t.x,
                t.y,
                t.z,
                t.rotation.code(),
                door.target
            ))?;
        }
        let (w, h, d) = room.dims();
        emit(&format!("{w}, {h}, {d}"))?;
        if room.is_empty() {
            continue;
        }
        let layer = w as usize * h as usize;
        for tiles in room.tiles().chunks(layer) {
            for row in tiles.chunks(w as usize) {
                let row: Vec<String> = row.iter().map(|t| t.to_string()).collect();
                emit(&row.join(", "))?;
            }
            emit("")?;
        }
    }
    Ok(())
}

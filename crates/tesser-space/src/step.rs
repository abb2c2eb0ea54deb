//! Unit steps: one cell along one direction, crossing doors as needed.

use crate::room::Room;
use crate::world::World;
use tesser_core::{Direction, Located, Orientation, Transform};

impl World {
    /// Move one cell along `dir`, read relative to the mover's facing.
    ///
    /// Sentinels propagate unchanged, and a `Located` start outside its room
    /// is `OutOfBounds`. A step that stays in the room keeps room and
    /// rotation. A step off the room is offered to every door of the room;
    /// a door accepts when the reprojected position lands inside the door's
    /// target; a door whose reprojection overflows `i32` does not accept.
    /// No accepting door gives `OutOfBounds`, accepting doors that
    /// disagree give `Ambiguous`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tesser_core::{Direction::*, Orientation};
    /// use tesser_space::World;
    ///
    /// let mut world = World::new();
    /// let a = world.add_room(2, 1, 1).unwrap();
    /// let b = world.add_room(2, 1, 1).unwrap();
    /// // Leaving `a` through +x enters `b` at x = 0.
    /// world.add_door(a, Orientation::at(b, -2, 0, 0, XPlus)).unwrap();
    ///
    /// let edge = world.orientation(a, 1, 0, 0, XPlus);
    /// assert_eq!(world.unit_step(edge, XPlus), Orientation::at(b, 0, 0, 0, XPlus));
    /// ```
    pub fn unit_step(&self, from: Orientation, dir: Direction) -> Orientation {
        let loc = match self.settle(from) {
            Orientation::Located(loc) => loc,
            sentinel => return sentinel,
        };
        let Some(room) = self.room(loc.room) else {
            return Orientation::OutOfBounds;
        };
        let Some(candidate) = loc.transform.checked_advance(dir) else {
            return Orientation::OutOfBounds;
        };
        if room.contains(&candidate) {
            return Orientation::located(loc.room, candidate);
        }
        self.cross(loc, room, candidate)
    }

    /// Offer an off-room `candidate` to each door of `room`.
    fn cross(&self, from: Located, room: &Room, candidate: Transform) -> Orientation {
        let mut landed: Option<Located> = None;
        for door in room.doors() {
            let Some(there) = door.reproject(candidate) else {
                continue;
            };
            if !self.contains(there.room, &there.transform) {
                continue;
            }
            match landed {
                Some(prev) if prev != there => {
                    log::trace!(
                        "doors of room {} disagree leaving {}: room {} at {} vs room {} at {}",
                        from.room,
                        from.transform,
                        prev.room,
                        prev.transform,
                        there.room,
                        there.transform
                    );
                    return Orientation::Ambiguous;
                }
                _ => landed = Some(there),
            }
        }
        landed.map_or(Orientation::OutOfBounds, Orientation::Located)
    }
}

//! Multi-step resolution over every order of a move batch.
//!
//! Moves do not commute once doors are involved: `[+x, +y]` taken as
//! "+x then +y" can cross a different door, and end in a different room,
//! than "+y then +x". Rather than pick an order, the resolver tries each
//! distinct direction as the first move, resolves the rest the same way,
//! and only returns a location when every branch that stays in the world
//! lands on the same one.
//!
//! Repeated occurrences of one direction are treated as interchangeable,
//! so a batch of `n` moves over `k` distinct directions branches `k` ways
//! per level rather than `n`. That is an approximation: it is not proven
//! to catch every order dependence for every door topology.

use crate::batch::MoveBatch;
use crate::config::{ConfigError, ResolveConfig};
use crate::error::StepError;
use crate::world::World;
use indexmap::IndexSet;
use std::collections::HashMap;
use tesser_core::{Direction, Located, Orientation};

/// Resolves move batches against a borrowed world.
///
/// The world cannot change while a resolver holds it, so results are
/// cached per `(position, remaining batch)` and reused across calls.
///
/// # Examples
///
/// ```
/// use tesser_core::{Direction::*, Orientation};
/// use tesser_space::{ResolveConfig, StepError, StepResolver, World};
///
/// let mut world = World::new();
/// let room = world.add_room(3, 3, 1).unwrap();
/// let start = world.orientation(room, 0, 0, 0, XPlus);
///
/// let config = ResolveConfig { max_moves: Some(4), ..Default::default() };
/// let mut resolver = StepResolver::with_config(&world, config).unwrap();
/// assert_eq!(
///     resolver.resolve(start, &[XPlus, YPlus, XPlus]),
///     Ok(Orientation::at(room, 2, 1, 0, XPlus)),
/// );
/// assert_eq!(
///     resolver.resolve(start, &[XPlus; 5]),
///     Err(StepError::BatchTooLarge { len: 5, max: 4 }),
/// );
/// ```
#[derive(Debug)]
pub struct StepResolver<'w> {
    world: &'w World,
    config: ResolveConfig,
    memo: HashMap<(Located, MoveBatch), Orientation>,
}

impl<'w> StepResolver<'w> {
    /// A resolver with the default configuration.
    pub fn new(world: &'w World) -> Self {
        Self {
            world,
            config: ResolveConfig::default(),
            memo: HashMap::new(),
        }
    }

    /// A resolver with a validated configuration.
    pub fn with_config(world: &'w World, config: ResolveConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            world,
            config,
            memo: HashMap::new(),
        })
    }

    /// The world being resolved against.
    pub fn world(&self) -> &'w World {
        self.world
    }

    /// Active configuration.
    pub fn config(&self) -> &ResolveConfig {
        &self.config
    }

    /// Number of cached sub-results.
    pub fn cached(&self) -> usize {
        self.memo.len()
    }

    /// Resolve `moves` from `start`. The order of `moves` is ignored.
    pub fn resolve(
        &mut self,
        start: Orientation,
        moves: &[Direction],
    ) -> Result<Orientation, StepError> {
        self.resolve_batch(start, MoveBatch::from_moves(moves))
    }

    /// Resolve a pre-counted batch from `start`.
    pub fn resolve_batch(
        &mut self,
        start: Orientation,
        batch: MoveBatch,
    ) -> Result<Orientation, StepError> {
        if let Some(max) = self.config.max_moves {
            let len = batch.len();
            if len > max {
                return Err(StepError::BatchTooLarge { len, max });
            }
        }
        Ok(self.walk(start, batch))
    }

    /// Drop every cached sub-result.
    ///
    /// The cache only grows while a resolver lives; long-lived resolvers
    /// that see many unrelated starts should clear it now and then.
    pub fn clear_cache(&mut self) {
        self.memo.clear();
    }

    /// Resolve every order of `batch` from `start`.
    ///
    /// Branches are explored depth first on an explicit stack, so batch
    /// length does not bound the call depth.
    fn walk(&mut self, start: Orientation, batch: MoveBatch) -> Orientation {
        let root = match self.visit(start, batch) {
            Visit::Done(result) => return result,
            Visit::Open(frame) => frame,
        };
        let mut stack = vec![root];
        let mut branch: Option<Orientation> = None;
        while let Some(frame) = stack.last_mut() {
            let decided = match branch.take() {
                Some(result) => frame.absorb(result),
                None => None,
            };
            if decided.is_none() {
                if let Some((dir, rest)) = frame.next_move() {
                    let first = self.world.unit_step(Orientation::Located(frame.loc), dir);
                    match self.visit(first, rest) {
                        Visit::Done(result) => branch = Some(result),
                        Visit::Open(child) => stack.push(child),
                    }
                    continue;
                }
            }
            let result = decided.unwrap_or_else(|| frame.outcome());
            let key = (frame.loc, frame.batch);
            stack.pop();
            if self.config.memoize {
                self.memo.insert(key, result);
            }
            branch = Some(result);
        }
        branch.unwrap_or(Orientation::OutOfBounds)
    }

    /// Settle `start` and answer `batch` directly when no branching is
    /// needed.
    fn visit(&self, start: Orientation, batch: MoveBatch) -> Visit {
        let loc = match self.world.settle(start) {
            Orientation::Located(loc) => loc,
            sentinel => return Visit::Done(sentinel),
        };
        // One direction has a single order.
        if let Some((dir, count)) = batch.uniform() {
            let mut at = Orientation::Located(loc);
            for _ in 0..count {
                at = self.world.unit_step(at, dir);
                if !at.is_located() {
                    break;
                }
            }
            return Visit::Done(at);
        }
        if batch.is_empty() {
            return Visit::Done(Orientation::Located(loc));
        }
        if self.config.memoize {
            if let Some(&hit) = self.memo.get(&(loc, batch)) {
                return Visit::Done(hit);
            }
        }
        Visit::Open(Frame::new(loc, batch))
    }
}

enum Visit {
    Done(Orientation),
    Open(Frame),
}

/// A position whose batch is being tried with each distinct direction
/// first.
struct Frame {
    loc: Located,
    batch: MoveBatch,
    /// Index into [`Direction::ALL`] of the next first move to try.
    next: usize,
    landings: IndexSet<Located>,
}

impl Frame {
    fn new(loc: Located, batch: MoveBatch) -> Self {
        Self {
            loc,
            batch,
            next: 0,
            landings: IndexSet::new(),
        }
    }

    /// Next untried first move and the batch left after it.
    fn next_move(&mut self) -> Option<(Direction, MoveBatch)> {
        while let Some(&dir) = Direction::ALL.get(self.next) {
            self.next += 1;
            if let Some(rest) = self.batch.without(dir) {
                return Some((dir, rest));
            }
        }
        None
    }

    /// Fold in one finished branch. `Some` once the outcome is settled.
    fn absorb(&mut self, branch: Orientation) -> Option<Orientation> {
        match branch {
            Orientation::Ambiguous => Some(Orientation::Ambiguous),
            Orientation::OutOfBounds => None,
            Orientation::Located(end) => {
                self.landings.insert(end);
                if self.landings.len() > 1 {
                    log::debug!(
                        "move batch {} from room {} at {} is order dependent: {:?}",
                        self.batch,
                        self.loc.room,
                        self.loc.transform,
                        self.landings
                    );
                    return Some(Orientation::Ambiguous);
                }
                None
            }
        }
    }

    /// Outcome once every first move has been tried.
    fn outcome(&self) -> Orientation {
        self.landings
            .first()
            .copied()
            .map_or(Orientation::OutOfBounds, Orientation::Located)
    }
}

impl World {
    /// Resolve a move batch from `start`, trying every order of its
    /// distinct directions.
    ///
    /// - no moves: `start`, settled;
    /// - one move: [`unit_step`](Self::unit_step);
    /// - otherwise: `Ambiguous` if any order is ambiguous or two orders
    ///   that stay in the world end in different places, `OutOfBounds` if
    ///   every order leaves the world, else the agreed location.
    ///
    /// The order of `moves` carries no meaning. A batch in one direction
    /// is walked cell by cell.
    pub fn step(&self, start: Orientation, moves: &[Direction]) -> Orientation {
        StepResolver::new(self).walk(start, MoveBatch::from_moves(moves))
    }
}

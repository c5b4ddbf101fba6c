//! The host world a script acts on.

use bee_types::{Direction, EntityRef, Vec3};
use serde::{Deserialize, Serialize};

/// Which entities [`World::entity_count`] counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityFilter {
    All,
    Enemies,
}

/// Effect and query surface the interpreter drives.
///
/// Implemented by the host (a game scene, a simulator, a test double).
/// Effect methods are called at most once per executed statement and are
/// never called when the statement fails before dispatch.
pub trait World {
    /// Look up an entity the script did not bind itself.
    fn resolve(&self, name: &str) -> Option<EntityRef>;

    /// Move an entity by a relative offset.
    fn translate(&mut self, entity: EntityRef, delta: Vec3);

    /// Place an entity at an absolute position.
    fn set_position(&mut self, entity: EntityRef, position: Vec3);

    /// Whether the cell next to `entity` in `direction` is impassable.
    fn path_blocked(&self, entity: EntityRef, direction: Direction) -> bool;

    fn entity_count(&self, filter: EntityFilter) -> i64;

    fn report_attack(&mut self, attacker: EntityRef, target: EntityRef);

    /// World-space offset of one step in `direction`.
    fn direction_vector(&self, direction: Direction) -> Vec3 {
        direction.unit_vector()
    }
}

impl<W: World + ?Sized> World for &mut W {
    fn resolve(&self, name: &str) -> Option<EntityRef> {
        (**self).resolve(name)
    }

    fn translate(&mut self, entity: EntityRef, delta: Vec3) {
        (**self).translate(entity, delta)
    }

    fn set_position(&mut self, entity: EntityRef, position: Vec3) {
        (**self).set_position(entity, position)
    }

    fn path_blocked(&self, entity: EntityRef, direction: Direction) -> bool {
        (**self).path_blocked(entity, direction)
    }

    fn entity_count(&self, filter: EntityFilter) -> i64 {
        (**self).entity_count(filter)
    }

    fn report_attack(&mut self, attacker: EntityRef, target: EntityRef) {
        (**self).report_attack(attacker, target)
    }

    fn direction_vector(&self, direction: Direction) -> Vec3 {
        (**self).direction_vector(direction)
    }
}

//! `GridWorld`: in-memory reference implementation of [`World`].
//!
//! Entities live on an integer grid. Cells can hold walls; a path is
//! blocked when the neighbouring cell is a wall. Every effect call is
//! recorded as a [`WorldEvent`] so callers can see what a script did.

use std::collections::{BTreeMap, HashSet};

use bee_types::{Direction, EntityRef, Vec3};
use serde::{Deserialize, Serialize};

use crate::world::{EntityFilter, World};

/// One effect applied to a [`GridWorld`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WorldEvent {
    Translated {
        entity: EntityRef,
        delta: Vec3,
        to: Vec3,
    },
    Placed {
        entity: EntityRef,
        to: Vec3,
    },
    Attacked {
        attacker: EntityRef,
        target: EntityRef,
    },
}

#[derive(Debug, Clone)]
struct GridEntity {
    name: String,
    position: Vec3,
    enemy: bool,
    defeated: bool,
}

#[derive(Debug, Clone, Default)]
pub struct GridWorld {
    entities: BTreeMap<EntityRef, GridEntity>,
    walls: HashSet<Vec3>,
    events: Vec<WorldEvent>,
    next_id: u64,
}

impl GridWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named entity. Names need not be unique; `resolve` returns the
    /// first one spawned.
    pub fn spawn(&mut self, name: impl Into<String>, position: Vec3) -> EntityRef {
        self.insert(name.into(), position, false)
    }

    /// Add an entity counted by [`EntityFilter::Enemies`] until attacked.
    pub fn spawn_enemy(&mut self, name: impl Into<String>, position: Vec3) -> EntityRef {
        self.insert(name.into(), position, true)
    }

    fn insert(&mut self, name: String, position: Vec3, enemy: bool) -> EntityRef {
        self.next_id += 1;
        let entity = EntityRef(self.next_id);
        self.entities.insert(
            entity,
            GridEntity {
                name,
                position,
                enemy,
                defeated: false,
            },
        );
        entity
    }

    pub fn add_wall(&mut self, cell: Vec3) {
        self.walls.insert(cell);
    }

    pub fn is_wall(&self, cell: Vec3) -> bool {
        self.walls.contains(&cell)
    }

    pub fn position(&self, entity: EntityRef) -> Option<Vec3> {
        self.entities.get(&entity).map(|e| e.position)
    }

    pub fn name(&self, entity: EntityRef) -> Option<&str> {
        self.entities.get(&entity).map(|e| e.name.as_str())
    }

    /// `true` once an enemy has been attacked.
    pub fn is_defeated(&self, entity: EntityRef) -> bool {
        self.entities.get(&entity).is_some_and(|e| e.defeated)
    }

    /// Effects applied so far, oldest first.
    pub fn events(&self) -> &[WorldEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<WorldEvent> {
        std::mem::take(&mut self.events)
    }
}

impl World for GridWorld {
    fn resolve(&self, name: &str) -> Option<EntityRef> {
        self.entities
            .iter()
            .find(|(_, e)| e.name == name)
            .map(|(id, _)| *id)
    }

    fn translate(&mut self, entity: EntityRef, delta: Vec3) {
        let Some(e) = self.entities.get_mut(&entity) else {
            tracing::warn!(%entity, "translate on unknown entity");
            return;
        };
        e.position = e.position.offset(delta);
        let to = e.position;
        self.events.push(WorldEvent::Translated { entity, delta, to });
    }

    fn set_position(&mut self, entity: EntityRef, position: Vec3) {
        let Some(e) = self.entities.get_mut(&entity) else {
            tracing::warn!(%entity, "set_position on unknown entity");
            return;
        };
        e.position = position;
        self.events.push(WorldEvent::Placed {
            entity,
            to: position,
        });
    }

    fn path_blocked(&self, entity: EntityRef, direction: Direction) -> bool {
        self.position(entity)
            .is_some_and(|p| self.is_wall(p.offset(self.direction_vector(direction))))
    }

    fn entity_count(&self, filter: EntityFilter) -> i64 {
        let count = match filter {
            EntityFilter::All => self.entities.len(),
            EntityFilter::Enemies => self
                .entities
                .values()
                .filter(|e| e.enemy && !e.defeated)
                .count(),
        };
        i64::try_from(count).unwrap_or(i64::MAX)
    }

    fn report_attack(&mut self, attacker: EntityRef, target: EntityRef) {
        if let Some(e) = self.entities.get_mut(&target) {
            if e.enemy {
                e.defeated = true;
            }
        }
        self.events.push(WorldEvent::Attacked { attacker, target });
    }
}

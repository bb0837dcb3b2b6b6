//! # EntityManager — The Authoritative Entity Population
//!
//! Owns every entity, indexed by tag, and reconciles structural changes
//! (creation, destruction) at exactly one point per frame.
//!
//! ## The Synchronization Point
//!
//! Systems iterate the population freely during a frame. If creation or
//! destruction took effect immediately, a system could invalidate the
//! iteration of a later system in the same frame, or two systems could
//! observe different populations. So structural changes are buffered:
//!
//! - [`add`](EntityManager::add) enqueues the new entity; it becomes visible
//!   to queries only after the next [`update`](EntityManager::update).
//! - [`Entity::destroy`] flips a flag; the entity stays visible for the rest
//!   of the frame and is removed at the next `update`.
//!
//! `update` purges **before** it admits. The ordering is load-bearing: an
//! entity born this frame can never be swept up by a stale dead flag, and no
//! system ever observes a structural change made earlier in the same frame.
//!
//! ## Ordering
//!
//! `entities` keeps arrival order, and purging is position-stable (`retain`,
//! not swap-remove), so iteration order is deterministic across frames — the
//! scenario tests depend on it.

use std::collections::{HashMap, VecDeque};

use super::entity::{Entity, EntityId, Tag};
use super::error::EcsError;

/// How many live entities a tag may have at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// Exactly 0 or 1 live instance (e.g. the player).
    Unique,
    /// 0..N live instances (e.g. bullets, enemies).
    Multi,
}

/// Per-tag projection of the population, consistent as of the last
/// synchronization point.
#[derive(Debug)]
enum TagBucket {
    Unique(Option<EntityId>),
    Multi(Vec<EntityId>),
}

impl TagBucket {
    fn empty(cardinality: Cardinality) -> Self {
        match cardinality {
            Cardinality::Unique => TagBucket::Unique(None),
            Cardinality::Multi => TagBucket::Multi(Vec::new()),
        }
    }

    fn forget(&mut self, id: EntityId) {
        match self {
            TagBucket::Unique(slot) => {
                if *slot == Some(id) {
                    *slot = None;
                }
            }
            TagBucket::Multi(ids) => ids.retain(|&i| i != id),
        }
    }
}

/// Owns the entity population and its tag index; applies deferred structural
/// changes at one defined point per frame.
pub struct EntityManager {
    /// Authoritative population, arrival order.
    entities: Vec<Entity>,
    /// Entity id → slot in `entities`. Rebuilt whenever a purge shifts slots.
    slots: HashMap<EntityId, usize>,
    /// Tag → live entities of that tag, as of the last synchronization point.
    tag_index: HashMap<Tag, TagBucket>,
    /// Entities awaiting admission, FIFO.
    pending: VecDeque<Entity>,
    /// Next id to hand out. Monotonic, never reused.
    next_id: u32,
}

impl EntityManager {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            slots: HashMap::new(),
            tag_index: HashMap::new(),
            pending: VecDeque::new(),
            next_id: 0,
        }
    }

    /// Declare a tag and its cardinality policy. Must precede any
    /// [`add`](EntityManager::add) of that tag. Re-registering resets the
    /// tag's index.
    pub fn register(&mut self, tag: Tag, cardinality: Cardinality) {
        self.tag_index.insert(tag, TagBucket::empty(cardinality));
    }

    /// Whether a tag has been registered.
    pub fn is_registered(&self, tag: Tag) -> bool {
        self.tag_index.contains_key(&tag)
    }

    /// Create an entity of the given tag and enqueue it for admission at the
    /// next synchronization point. The returned borrow lets the caller attach
    /// components before the entity becomes queryable.
    pub fn add(&mut self, tag: Tag) -> Result<&mut Entity, EcsError> {
        if !self.tag_index.contains_key(&tag) {
            return Err(EcsError::UnknownTag(tag));
        }
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.pending.push_back(Entity::new(id, tag));
        Ok(self.pending.back_mut().unwrap())
    }

    /// The live entity of a unique tag, or `None` if no instance has been
    /// admitted. Errors on multi or unregistered tags.
    pub fn unique(&self, tag: Tag) -> Result<Option<&Entity>, EcsError> {
        match self.tag_index.get(&tag) {
            None => Err(EcsError::UnknownTag(tag)),
            Some(TagBucket::Multi(_)) => Err(EcsError::NotUnique(tag)),
            Some(TagBucket::Unique(slot)) => Ok(slot.and_then(|id| self.get(id))),
        }
    }

    /// Mutable variant of [`unique`](EntityManager::unique).
    pub fn unique_mut(&mut self, tag: Tag) -> Result<Option<&mut Entity>, EcsError> {
        let slot = match self.tag_index.get(&tag) {
            None => return Err(EcsError::UnknownTag(tag)),
            Some(TagBucket::Multi(_)) => return Err(EcsError::NotUnique(tag)),
            Some(TagBucket::Unique(slot)) => *slot,
        };
        Ok(slot.and_then(|id| self.get_mut(id)))
    }

    /// The live entity of a unique tag, treating absence as a contract
    /// violation. Convenience for systems that require the entity to exist.
    pub fn expect_unique(&self, tag: Tag) -> Result<&Entity, EcsError> {
        self.unique(tag)?.ok_or(EcsError::MissingEntity(tag))
    }

    /// Mutable variant of [`expect_unique`](EntityManager::expect_unique).
    pub fn expect_unique_mut(&mut self, tag: Tag) -> Result<&mut Entity, EcsError> {
        self.unique_mut(tag)?.ok_or(EcsError::MissingEntity(tag))
    }

    /// Ids of the live entities of a multi tag, in arrival order. Errors on
    /// unique or unregistered tags.
    ///
    /// Returns an owned snapshot so callers can mutate entities through
    /// [`get_mut`](EntityManager::get_mut) while walking the list; the
    /// snapshot stays valid because structure is frozen until the next
    /// synchronization point.
    pub fn tagged(&self, tag: Tag) -> Result<Vec<EntityId>, EcsError> {
        match self.tag_index.get(&tag) {
            None => Err(EcsError::UnknownTag(tag)),
            Some(TagBucket::Unique(_)) => Err(EcsError::NotMulti(tag)),
            Some(TagBucket::Multi(ids)) => Ok(ids.clone()),
        }
    }

    /// The full admitted population in arrival order. Dead-but-unpurged
    /// entities are included until the next synchronization point.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Ids of the full admitted population, arrival order. Owned snapshot,
    /// same rationale as [`tagged`](EntityManager::tagged).
    pub fn ids(&self) -> Vec<EntityId> {
        self.entities.iter().map(|e| e.id()).collect()
    }

    /// Look up an admitted entity by id.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.slots.get(&id).map(|&slot| &self.entities[slot])
    }

    /// Mutable lookup of an admitted entity by id.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        match self.slots.get(&id) {
            Some(&slot) => Some(&mut self.entities[slot]),
            None => None,
        }
    }

    /// Number of admitted entities (including dead-but-unpurged).
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// The single per-frame synchronization point: purge dead entities, then
    /// admit pending ones. Call once at the top of each frame, before any
    /// system runs. No system may call this itself.
    pub fn update(&mut self) {
        self.purge();
        self.admit();
    }

    /// Remove every entity whose dead flag is set, position-stably, from both
    /// the population and its tag bucket.
    fn purge(&mut self) {
        let tag_index = &mut self.tag_index;
        let mut purged = 0usize;
        self.entities.retain(|e| {
            if e.is_active() {
                return true;
            }
            if let Some(bucket) = tag_index.get_mut(&e.tag()) {
                bucket.forget(e.id());
            }
            purged += 1;
            false
        });
        if purged > 0 {
            // Surviving entities shifted; rebuild the slot index.
            self.slots.clear();
            for (slot, e) in self.entities.iter().enumerate() {
                self.slots.insert(e.id(), slot);
            }
            log::debug!("purged {purged} dead entities");
        }
    }

    /// Drain the pending queue in FIFO order into the population and the tag
    /// index. For unique tags the first writer wins: a later admission while
    /// the slot is occupied is dropped.
    fn admit(&mut self) {
        while let Some(entity) = self.pending.pop_front() {
            let id = entity.id();
            let tag = entity.tag();
            match self.tag_index.get_mut(&tag) {
                Some(TagBucket::Unique(slot)) => {
                    if slot.is_some() {
                        log::warn!("dropping {id}: unique tag `{tag}` is already occupied");
                        continue;
                    }
                    *slot = Some(id);
                }
                Some(TagBucket::Multi(ids)) => ids.push(id),
                // `add` checked registration; re-registering mid-frame could
                // only replace the bucket, never remove it.
                None => unreachable!("tag `{tag}` vanished from the index"),
            }
            self.slots.insert(id, self.entities.len());
            self.entities.push(entity);
        }
    }
}

impl Default for EntityManager {
    fn default() -> Self {
        Self::new()
    }
}

//! # Entity — An Identity Plus a Set of Components
//!
//! An [`Entity`] is an id, a [`Tag`] category, a liveness flag, and one
//! component slot per [`ComponentKind`](super::component::ComponentKind).
//! Ids are handed out monotonically by the
//! [`EntityManager`](super::manager::EntityManager) and never reused, so a
//! stale [`EntityId`] can never silently alias a newer entity.
//!
//! Destruction is a two-phase affair: [`Entity::destroy`] only flips the
//! liveness flag. The entity stays visible (components readable) for the rest
//! of the frame, and is physically removed at the next synchronization point.
//! Systems that care must gate on [`Entity::is_active`].

use super::component::{Component, ComponentKind, ComponentSet};
use super::error::EcsError;
use crate::ecs::component::{
    Damage, Health, Input, Polygon, Position, Score, Speed, Sprite, Velocity,
};

/// Monotonic entity identifier. Never reused within a manager's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub(crate) u32);

impl EntityId {
    /// The raw id. Useful for diagnostics.
    pub fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Entity category. Determines which tag bucket an entity lands in and which
/// query cardinality applies (player is unique; bullets and enemies are
/// multi).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Player,
    Bullet,
    Enemy,
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tag::Player => "player",
            Tag::Bullet => "bullet",
            Tag::Enemy => "enemy",
        };
        f.write_str(name)
    }
}

/// An identity with a tag and a set of components.
#[derive(Debug, Clone)]
pub struct Entity {
    id: EntityId,
    tag: Tag,
    alive: bool,
    components: ComponentSet,
}

impl Entity {
    pub(crate) fn new(id: EntityId, tag: Tag) -> Self {
        Self {
            id,
            tag,
            alive: true,
            components: ComponentSet::default(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Whether the entity is still alive. Dead entities remain queryable
    /// until the next synchronization point.
    pub fn is_active(&self) -> bool {
        self.alive
    }

    /// Mark the entity dead. Idempotent; component data stays readable until
    /// physical removal.
    pub fn destroy(&mut self) {
        self.alive = false;
    }

    /// Attach a component, overwriting any existing one of the same kind.
    /// O(1). The [`Component`] enum makes unknown kinds unrepresentable.
    pub fn set(&mut self, component: Component) {
        self.components.set(component);
    }

    /// Whether a component of the given kind is attached.
    pub fn has(&self, kind: ComponentKind) -> bool {
        self.components.has(kind)
    }

    /// Detach the component of the given kind. No-op when absent.
    pub fn remove(&mut self, kind: ComponentKind) {
        self.components.remove(kind);
    }
}

/// Generate the typed accessor quartet for one component kind:
/// optional shared/mutable getters, and `require_*` variants that turn
/// absence into [`EcsError::MissingComponent`] for lookups the caller
/// considers mandatory.
macro_rules! typed_accessors {
    ($($kind:ident => $field:ident: $ty:ty [$get:ident, $get_mut:ident, $req:ident, $req_mut:ident]),+ $(,)?) => {
        impl Entity {
            $(
                pub fn $get(&self) -> Option<&$ty> {
                    self.components.$field.as_ref()
                }

                pub fn $get_mut(&mut self) -> Option<&mut $ty> {
                    self.components.$field.as_mut()
                }

                pub fn $req(&self) -> Result<&$ty, EcsError> {
                    self.components.$field.as_ref().ok_or(EcsError::MissingComponent {
                        id: self.id,
                        kind: ComponentKind::$kind,
                    })
                }

                pub fn $req_mut(&mut self) -> Result<&mut $ty, EcsError> {
                    let id = self.id;
                    self.components.$field.as_mut().ok_or(EcsError::MissingComponent {
                        id,
                        kind: ComponentKind::$kind,
                    })
                }
            )+
        }
    };
}

typed_accessors! {
    Position => position: Position [position, position_mut, require_position, require_position_mut],
    Velocity => velocity: Velocity [velocity, velocity_mut, require_velocity, require_velocity_mut],
    Speed => speed: Speed [speed, speed_mut, require_speed, require_speed_mut],
    Input => input: Input [input, input_mut, require_input, require_input_mut],
    Sprite => sprite: Sprite [sprite, sprite_mut, require_sprite, require_sprite_mut],
    Score => score: Score [score, score_mut, require_score, require_score_mut],
    Health => health: Health [health, health_mut, require_health, require_health_mut],
    Damage => damage: Damage [damage, damage_mut, require_damage, require_damage_mut],
    Polygon => polygon: Polygon [polygon, polygon_mut, require_polygon, require_polygon_mut],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;

    fn entity() -> Entity {
        Entity::new(EntityId(0), Tag::Enemy)
    }

    #[test]
    fn set_and_get() {
        let mut e = entity();
        e.set(Component::Position(Position(Vec2::new(1.0, 2.0))));
        assert_eq!(e.position(), Some(&Position(Vec2::new(1.0, 2.0))));
        assert!(e.velocity().is_none());
    }

    #[test]
    fn set_overwrites() {
        let mut e = entity();
        e.set(Component::Health(Health { value: 5 }));
        e.set(Component::Health(Health { value: 1 }));
        assert_eq!(e.health().map(|h| h.value), Some(1));
    }

    #[test]
    fn require_reports_missing_component() {
        let e = entity();
        assert_eq!(
            e.require_health(),
            Err(EcsError::MissingComponent {
                id: EntityId(0),
                kind: ComponentKind::Health,
            })
        );
    }

    #[test]
    fn mutate_through_accessor() {
        let mut e = entity();
        e.set(Component::Score(Score { value: 0 }));
        e.require_score_mut().unwrap().value += 7;
        assert_eq!(e.score().map(|s| s.value), Some(7));
    }

    #[test]
    fn destroy_is_idempotent_and_keeps_components() {
        let mut e = entity();
        e.set(Component::Damage(Damage { value: 3 }));
        assert!(e.is_active());
        e.destroy();
        e.destroy();
        assert!(!e.is_active());
        // Component data survives the flag flip.
        assert_eq!(e.damage().map(|d| d.value), Some(3));
    }

    #[test]
    fn remove_is_noop_when_absent() {
        let mut e = entity();
        e.remove(ComponentKind::Polygon);
        e.set(Component::Polygon(Polygon::regular(10.0, 3)));
        assert!(e.has(ComponentKind::Polygon));
        e.remove(ComponentKind::Polygon);
        assert!(!e.has(ComponentKind::Polygon));
    }
}

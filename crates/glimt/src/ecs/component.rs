//! # Components — Pure Data Attached to Entities
//!
//! A component is a plain data record with no behavior. Systems give the data
//! meaning by reading and mutating it each frame.
//!
//! ## Design: A Closed Enumeration
//!
//! Rather than keying component lookups by strings or `TypeId`, the full set
//! of kinds is a closed enum ([`ComponentKind`]) and every entity carries a
//! fixed-size record ([`ComponentSet`]) with one optional slot per kind. This
//! buys:
//!
//! - Compile-time exhaustiveness — adding a kind forces every `match` to be
//!   revisited.
//! - O(1) access with no hashing and no downcasts.
//! - An unrepresentable "unknown component" state: [`Entity::set`] cannot be
//!   handed a kind the store doesn't know about.
//!
//! The trade-off is that the set of kinds is fixed at compile time, which is
//! exactly right for a game this size.

use crate::math::Vec2;

/// Every component kind the simulation knows about.
///
/// Used for presence checks, removal, and error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Position,
    Velocity,
    Speed,
    Input,
    Sprite,
    Score,
    Health,
    Damage,
    Polygon,
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ComponentKind::Position => "Position",
            ComponentKind::Velocity => "Velocity",
            ComponentKind::Speed => "Speed",
            ComponentKind::Input => "Input",
            ComponentKind::Sprite => "Sprite",
            ComponentKind::Score => "Score",
            ComponentKind::Health => "Health",
            ComponentKind::Damage => "Damage",
            ComponentKind::Polygon => "Polygon",
        };
        f.write_str(name)
    }
}

/// World-space position. Semantically a vector, but a distinct kind from
/// [`Velocity`] — kinematics needs both on the same entity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position(pub Vec2);

/// Per-frame displacement. One unit of velocity moves the entity one unit per
/// frame (the frame is the time unit).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity(pub Vec2);

/// Scalar movement speed, applied when resolving directional input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Speed {
    pub value: f32,
}

/// Directional movement flags, held down or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Movement {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Mouse state as the input producer last reported it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Mouse {
    pub position: Vec2,
    pub left_click: bool,
    pub right_click: bool,
}

/// Input state for a controllable entity. An external event source sets the
/// flags; the input system consumes them once per frame and clears the
/// edge-triggered ones (`left_click`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Input {
    pub movement: Movement,
    pub mouse: Mouse,
}

/// Opaque handle to an externally loaded image. The simulation never touches
/// pixels; the presenter resolves the handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteId(pub u32);

/// A drawable image reference plus its on-screen size. The size doubles as
/// the entity's bounding box for clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub image: SpriteId,
    pub width: f32,
    pub height: f32,
}

/// Accumulated score (player) or score awarded on kill (enemy).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub value: i32,
}

/// Remaining hit points. Signed: damage can push it below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub value: i32,
}

/// Hit points subtracted from whatever this entity damages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Damage {
    pub value: i32,
}

/// A polygon outline: radius, current rotation, and vertex offsets relative
/// to the entity's position.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub radius: f32,
    pub rotation: f32,
    pub vertices: Vec<Vec2>,
}

impl Polygon {
    /// Build a regular polygon with `n` vertices. Vertex `i` sits at angle
    /// `i * 2π/n` on the circle of the given radius, rotation starting at 0.
    pub fn regular(radius: f32, n: usize) -> Self {
        let delta = std::f32::consts::TAU / n as f32;
        let vertices = (0..n)
            .map(|i| {
                let theta = delta * i as f32;
                Vec2::new(radius * theta.cos(), radius * theta.sin())
            })
            .collect();
        Self {
            radius,
            rotation: 0.0,
            vertices,
        }
    }
}

/// A component value of any kind, ready to be attached to an entity.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Position(Position),
    Velocity(Velocity),
    Speed(Speed),
    Input(Input),
    Sprite(Sprite),
    Score(Score),
    Health(Health),
    Damage(Damage),
    Polygon(Polygon),
}

impl Component {
    /// The kind this value belongs to.
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Position(_) => ComponentKind::Position,
            Component::Velocity(_) => ComponentKind::Velocity,
            Component::Speed(_) => ComponentKind::Speed,
            Component::Input(_) => ComponentKind::Input,
            Component::Sprite(_) => ComponentKind::Sprite,
            Component::Score(_) => ComponentKind::Score,
            Component::Health(_) => ComponentKind::Health,
            Component::Damage(_) => ComponentKind::Damage,
            Component::Polygon(_) => ComponentKind::Polygon,
        }
    }
}

/// Fixed-size per-entity component record: one optional slot per kind.
#[derive(Debug, Clone, Default)]
pub(crate) struct ComponentSet {
    pub(crate) position: Option<Position>,
    pub(crate) velocity: Option<Velocity>,
    pub(crate) speed: Option<Speed>,
    pub(crate) input: Option<Input>,
    pub(crate) sprite: Option<Sprite>,
    pub(crate) score: Option<Score>,
    pub(crate) health: Option<Health>,
    pub(crate) damage: Option<Damage>,
    pub(crate) polygon: Option<Polygon>,
}

impl ComponentSet {
    /// Store a component, overwriting any existing value of the same kind.
    pub fn set(&mut self, component: Component) {
        match component {
            Component::Position(c) => self.position = Some(c),
            Component::Velocity(c) => self.velocity = Some(c),
            Component::Speed(c) => self.speed = Some(c),
            Component::Input(c) => self.input = Some(c),
            Component::Sprite(c) => self.sprite = Some(c),
            Component::Score(c) => self.score = Some(c),
            Component::Health(c) => self.health = Some(c),
            Component::Damage(c) => self.damage = Some(c),
            Component::Polygon(c) => self.polygon = Some(c),
        }
    }

    /// Whether a component of the given kind is present.
    pub fn has(&self, kind: ComponentKind) -> bool {
        match kind {
            ComponentKind::Position => self.position.is_some(),
            ComponentKind::Velocity => self.velocity.is_some(),
            ComponentKind::Speed => self.speed.is_some(),
            ComponentKind::Input => self.input.is_some(),
            ComponentKind::Sprite => self.sprite.is_some(),
            ComponentKind::Score => self.score.is_some(),
            ComponentKind::Health => self.health.is_some(),
            ComponentKind::Damage => self.damage.is_some(),
            ComponentKind::Polygon => self.polygon.is_some(),
        }
    }

    /// Drop the component of the given kind. No-op when absent.
    pub fn remove(&mut self, kind: ComponentKind) {
        match kind {
            ComponentKind::Position => self.position = None,
            ComponentKind::Velocity => self.velocity = None,
            ComponentKind::Speed => self.speed = None,
            ComponentKind::Input => self.input = None,
            ComponentKind::Sprite => self.sprite = None,
            ComponentKind::Score => self.score = None,
            ComponentKind::Health => self.health = None,
            ComponentKind::Damage => self.damage = None,
            ComponentKind::Polygon => self.polygon = None,
        }
    }
}

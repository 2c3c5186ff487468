//! Circle overlap and near-miss predicates
//!
//! Every entity in the arena is a circle, so one pair of predicates covers
//! player/enemy, enemy/enemy and entity/special-area checks.

use glam::DVec2;

use crate::consts::DODGE_MARGIN;

/// Anything with a circular footprint
pub trait Body {
    fn pos(&self) -> DVec2;
    fn radius(&self) -> f64;
}

/// True iff the circles overlap. Exact tangency is not a collision.
#[inline]
pub fn is_colliding(a: &impl Body, b: &impl Body) -> bool {
    a.pos().distance(b.pos()) < a.radius() + b.radius()
}

/// True iff the circles are apart but within `DODGE_MARGIN` of touching
#[inline]
pub fn is_dodging(a: &impl Body, b: &impl Body) -> bool {
    let distance = a.pos().distance(b.pos());
    let contact = a.radius() + b.radius();
    distance >= contact && distance < contact + DODGE_MARGIN
}

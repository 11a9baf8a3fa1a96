//! Collision detection between oriented rectangles in 2D, based on the separating axis theorem.
//!
//! Create one or more [`HitBox`](util::collision::HitBox) values to match the shape of a sprite,
//! move, rotate and flip them as the sprite changes, and call
//! [`collide`](util::collision::collide) to test two of them against each other. Every public
//! method of [`HitBox`](util::collision::HitBox) is thread safe.
//!
//! Coordinate system: x increases going right, y increases going down.

pub mod core;
pub mod util;

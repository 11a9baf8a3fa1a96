use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicUsize, Ordering};

pub mod config;
pub mod prelude;

static NEXT_HITBOX_ID: AtomicUsize = AtomicUsize::new(0);

/// A unique identifier for hit boxes.
///
/// [`HitBoxId`] uses an atomic counter, so every hit box created in the process (including clones)
/// gets a distinct value. The ordering of ids is what [`collide`](crate::util::collision::collide)
/// uses to decide which lock to take first, so two threads colliding the same pair in opposite
/// argument order cannot deadlock.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct HitBoxId(usize);

impl HitBoxId {
    pub(crate) fn next() -> Self {
        HitBoxId(NEXT_HITBOX_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl Display for HitBoxId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "HitBox#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct_and_increasing() {
        let a = HitBoxId::next();
        let b = HitBoxId::next();
        assert_ne!(a, b);
        assert!(a < b);
    }
}

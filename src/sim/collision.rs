//! Pairwise collision resolution
//!
//! A snowball and an enemy that overlap annihilate each other. Same-kind
//! overlaps (snowball/snowball, enemy/enemy) are ignored.

use super::entity::Entity;

/// Outcome of one collision pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Every colliding pair `(i, j)` with `i < j`
    pub pairs: Vec<(usize, usize)>,
    /// Indices to remove, ascending, each at most once
    pub removed: Vec<usize>,
}

/// True if the two entities overlap and exactly one is a projectile
#[inline]
pub fn annihilates(a: &Entity, b: &Entity) -> bool {
    (a.is_projectile() ^ b.is_projectile()) && a.intersects(b)
}

/// Scan every unordered pair and mark annihilating pairs for removal.
///
/// O(n²), fine at the entity counts a session reaches.
pub fn detect_collisions(entities: &[Entity]) -> CollisionReport {
    let mut marked = vec![false; entities.len()];
    let mut pairs = Vec::new();

    for (i, a) in entities.iter().enumerate() {
        for (j, b) in entities.iter().enumerate().skip(i + 1) {
            if annihilates(a, b) {
                marked[i] = true;
                marked[j] = true;
                pairs.push((i, j));
            }
        }
    }

    let removed = marked
        .iter()
        .enumerate()
        .filter_map(|(i, &m)| m.then_some(i))
        .collect();
    CollisionReport { pairs, removed }
}

/// Build the surviving collection, dropping every index in `removed`
///
/// `removed` must be ascending, as produced by [`detect_collisions`].
pub fn retain_survivors(entities: Vec<Entity>, removed: &[usize]) -> Vec<Entity> {
    let mut survivors = Vec::with_capacity(entities.len() - removed.len());
    let mut removed = removed.iter().peekable();
    for (i, entity) in entities.into_iter().enumerate() {
        if removed.next_if_eq(&&i).is_some() {
            log::debug!("Destroyed {:?} #{}", entity.kind, entity.id);
            continue;
        }
        survivors.push(entity);
    }
    survivors
}

//! Round-robin turn order.

use std::collections::VecDeque;

use super::EntityId;
use crate::error::{ErrorSeverity, GameError};

/// Errors that can occur during turn operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnError {
    #[error("no actors are queued for a turn")]
    NoActiveActors,
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        // Asking an empty queue for its head is a driver bug.
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        "TURN_NO_ACTIVE_ACTORS"
    }
}

/// Ordered collection of turn-taking actors; the head is the actor whose turn is current.
///
/// Every live, turn-taking actor appears exactly once. The queue is mutated only by
/// the single-threaded driver between ticks and by death resolution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnQueue {
    order: VecDeque<EntityId>,
}

impl TurnQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the actor whose turn is current.
    pub fn current_actor(&self) -> Result<EntityId, TurnError> {
        self.order.front().copied().ok_or(TurnError::NoActiveActors)
    }

    /// Appends an actor at the tail. Returns false (and leaves the queue untouched)
    /// if the actor is already queued.
    pub fn push_actor(&mut self, actor: EntityId) -> bool {
        if self.contains(actor) {
            return false;
        }
        self.order.push_back(actor);
        true
    }

    /// Removes and returns the head.
    pub fn pop_actor(&mut self) -> Option<EntityId> {
        self.order.pop_front()
    }

    /// Priority insertion: the actor becomes the head. An actor already queued
    /// is moved rather than duplicated.
    pub fn push_actor_to_front(&mut self, actor: EntityId) {
        self.remove_actor(actor);
        self.order.push_front(actor);
    }

    /// Removes an actor wherever it sits. Returns whether it was found.
    pub fn remove_actor(&mut self, actor: EntityId) -> bool {
        match self.order.iter().position(|&queued| queued == actor) {
            Some(index) => {
                self.order.remove(index);
                true
            }
            None => false,
        }
    }

    /// Canonical round-robin step: the current actor moves to the tail and the
    /// new head is returned.
    pub fn advance(&mut self) -> Result<EntityId, TurnError> {
        let current = self.pop_actor().ok_or(TurnError::NoActiveActors)?;
        self.order.push_back(current);
        self.current_actor()
    }

    pub fn contains(&self, actor: EntityId) -> bool {
        self.order.contains(&actor)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.order.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue_of(ids: &[u32]) -> TurnQueue {
        let mut queue = TurnQueue::new();
        for &id in ids {
            queue.push_actor(EntityId(id));
        }
        queue
    }

    #[test]
    fn empty_queue_reports_precondition_violation() {
        let mut queue = TurnQueue::new();
        assert_eq!(queue.current_actor(), Err(TurnError::NoActiveActors));
        assert_eq!(queue.advance(), Err(TurnError::NoActiveActors));
        assert_eq!(queue.pop_actor(), None);
    }

    #[test]
    fn push_rejects_duplicates() {
        let mut queue = queue_of(&[0, 1]);
        assert!(!queue.push_actor(EntityId(1)));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn push_to_front_moves_instead_of_duplicating() {
        let mut queue = queue_of(&[0, 1, 2]);
        queue.push_actor_to_front(EntityId(2));
        assert_eq!(
            queue.iter().collect::<Vec<_>>(),
            vec![EntityId(2), EntityId(0), EntityId(1)]
        );
    }

    #[test]
    fn a_full_rotation_visits_everyone_once_and_restores_the_order() {
        let mut queue = queue_of(&[4, 1, 7, 2]);
        let before = queue.clone();

        let mut heads = vec![queue.current_actor().unwrap()];
        for _ in 1..queue.len() {
            heads.push(queue.advance().unwrap());
        }
        assert_eq!(heads, before.iter().collect::<Vec<_>>());

        queue.advance().unwrap();
        assert_eq!(queue, before);
        assert_eq!(queue.len(), 4);
    }

    #[test]
    fn remove_reports_whether_found() {
        let mut queue = queue_of(&[0, 1, 2]);
        assert!(queue.remove_actor(EntityId(1)));
        assert!(!queue.remove_actor(EntityId(1)));
        assert_eq!(queue.advance(), Ok(EntityId(2)));
    }
}

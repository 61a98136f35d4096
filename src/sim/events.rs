//! Event port for pocket hits and scoring
//!
//! The simulation keeps no score of its own. Whatever the caller passes to
//! `ParticleSystem::update` receives the events synchronously, in the order
//! they happen.

use serde::{Deserialize, Serialize};

use super::pocket::Corner;

/// Something that happened during an update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimEvent {
    /// A ball dropped into a pocket (play the cue)
    PocketHit { particle: usize, corner: Corner },
    /// Score changed by `delta` (+1 right pocket, -1 wrong pocket)
    Score { delta: i32 },
}

/// Receiver for simulation events
pub trait EventSink {
    fn on_pocket_hit(&mut self, particle: usize, corner: Corner);
    fn on_score(&mut self, delta: i32);
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn on_pocket_hit(&mut self, particle: usize, corner: Corner) {
        (**self).on_pocket_hit(particle, corner);
    }

    fn on_score(&mut self, delta: i32) {
        (**self).on_score(delta);
    }
}

/// Records every event
impl EventSink for Vec<SimEvent> {
    fn on_pocket_hit(&mut self, particle: usize, corner: Corner) {
        self.push(SimEvent::PocketHit { particle, corner });
    }

    fn on_score(&mut self, delta: i32) {
        self.push(SimEvent::Score { delta });
    }
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn on_pocket_hit(&mut self, _particle: usize, _corner: Corner) {}
    fn on_score(&mut self, _delta: i32) {}
}

/// Running score for a session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTally {
    pub score: i64,
    /// Balls pocketed in total
    pub pocket_hits: u32,
    /// Balls that went into their own pocket
    pub matches: u32,
}

impl ScoreTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Balls that went into someone else's pocket
    pub fn misses(&self) -> u32 {
        self.pocket_hits.saturating_sub(self.matches)
    }
}

impl EventSink for ScoreTally {
    fn on_pocket_hit(&mut self, _particle: usize, _corner: Corner) {
        self.pocket_hits += 1;
    }

    fn on_score(&mut self, delta: i32) {
        self.score += i64::from(delta);
        if delta > 0 {
            self.matches += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_counts() {
        let mut tally = ScoreTally::new();
        tally.on_pocket_hit(0, Corner::TopLeft);
        tally.on_score(1);
        tally.on_pocket_hit(3, Corner::BottomRight);
        tally.on_score(-1);
        tally.on_pocket_hit(4, Corner::BottomRight);
        tally.on_score(-1);

        assert_eq!(tally.score, -1);
        assert_eq!(tally.pocket_hits, 3);
        assert_eq!(tally.matches, 1);
        assert_eq!(tally.misses(), 2);
    }

    #[test]
    fn test_misses_without_pocket_hit() {
        let mut tally = ScoreTally::new();
        tally.on_score(1);
        assert_eq!(tally.score, 1);
        assert_eq!(tally.misses(), 0);
    }

    #[test]
    fn test_forwarding_through_mut_ref() {
        fn feed(mut sink: impl EventSink) {
            sink.on_pocket_hit(2, Corner::TopRight);
            sink.on_score(1);
        }

        let mut events: Vec<SimEvent> = Vec::new();
        feed(&mut events);
        assert_eq!(
            events,
            vec![
                SimEvent::PocketHit {
                    particle: 2,
                    corner: Corner::TopRight
                },
                SimEvent::Score { delta: 1 },
            ]
        );
    }
}

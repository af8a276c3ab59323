/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Rolling history of dominant speakers.
//!
//! The strip would reshuffle every time the transport's audio heuristic picks
//! a new speaker. Ordering recent speakers ahead of everyone else keeps the
//! people who have actually been talking on screen.

use videocall_layout_types::{Participant, ParticipantId};

/// Ordered set of participants that have been the dominant speaker,
/// most recent first. Contains each participant at most once.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DominantSpeakerHistory {
    speakers: Vec<ParticipantId>,
}

impl DominantSpeakerHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves `speaker` to the front, keeping the relative order of the rest.
    /// Returns `true` if the history changed.
    pub fn record(&mut self, speaker: &ParticipantId) -> bool {
        if self.speakers.first() == Some(speaker) {
            return false;
        }
        self.speakers.retain(|s| s != speaker);
        self.speakers.insert(0, speaker.clone());
        true
    }

    /// Forgets everyone who is no longer in the call.
    pub fn retain_present(&mut self, local: &ParticipantId, participants: &[Participant]) {
        self.speakers
            .retain(|s| s == local || participants.iter().any(|p| &p.id == s));
    }

    pub fn as_slice(&self) -> &[ParticipantId] {
        &self.speakers
    }

    pub fn contains(&self, id: &ParticipantId) -> bool {
        self.speakers.contains(id)
    }

    pub fn len(&self) -> usize {
        self.speakers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.speakers.is_empty()
    }

    pub fn clear(&mut self) {
        self.speakers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ParticipantId {
        ParticipantId::from(s)
    }

    fn history_of(h: &DominantSpeakerHistory) -> Vec<&str> {
        h.as_slice().iter().map(|s| s.as_str()).collect()
    }

    #[test]
    fn test_returning_speaker_moves_to_front() {
        let mut history = DominantSpeakerHistory::new();
        history.record(&id("A"));
        history.record(&id("B"));
        history.record(&id("A"));
        assert_eq!(history_of(&history), vec!["A", "B"]);
    }

    #[test]
    fn test_repeat_of_front_is_noop() {
        let mut history = DominantSpeakerHistory::new();
        assert!(history.record(&id("A")));
        assert!(!history.record(&id("A")));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_relative_order_of_remainder_is_kept() {
        let mut history = DominantSpeakerHistory::new();
        for s in ["A", "B", "C", "D"] {
            history.record(&id(s));
        }
        history.record(&id("B"));
        assert_eq!(history_of(&history), vec!["B", "D", "C", "A"]);
    }

    #[test]
    fn test_disconnected_speakers_are_evicted() {
        let mut history = DominantSpeakerHistory::new();
        history.record(&id("B"));
        history.record(&id("A"));
        let remaining = vec![Participant::new("A")];
        history.retain_present(&id("me"), &remaining);
        assert_eq!(history_of(&history), vec!["A"]);
        assert!(!history.contains(&id("B")));
    }

    #[test]
    fn test_local_participant_survives_eviction() {
        let mut history = DominantSpeakerHistory::new();
        history.record(&id("me"));
        history.record(&id("A"));
        history.retain_present(&id("me"), &[]);
        assert_eq!(history_of(&history), vec!["me"]);
        history.clear();
        assert!(history.is_empty());
    }
}

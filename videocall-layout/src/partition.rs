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

//! Splits the call into the participants rendered in the strip and the ones
//! summarised by the "+N more" indicator.

use serde::Serialize;
use std::collections::HashSet;
use videocall_layout_types::{Participant, ParticipantId};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayPartition {
    /// Rendered tiles, highest priority first.
    pub displayable: Vec<ParticipantId>,
    /// Connected participants without a tile, in transport order.
    pub overflow: Vec<ParticipantId>,
}

impl DisplayPartition {
    pub fn overflow_count(&self) -> usize {
        self.overflow.len()
    }

    pub fn is_displayed(&self, id: &ParticipantId) -> bool {
        self.displayable.contains(id)
    }
}

/// Builds the strip.
///
/// Candidates are taken in priority order: local, selected, screen share,
/// recent dominant speakers, participants with live camera video, then
/// everyone else. Each participant keeps only its first position, and the
/// result is cut to `max_count`. Within a group transport order is kept.
pub fn partition_participants(
    local: &ParticipantId,
    selected: Option<&ParticipantId>,
    screen_share: Option<&ParticipantId>,
    dominant_history: &[ParticipantId],
    participants: &[Participant],
    max_count: usize,
) -> DisplayPartition {
    let with_video = participants
        .iter()
        .filter(|p| p.has_active_video())
        .map(|p| &p.id);

    let candidates = [Some(local), selected, screen_share]
        .into_iter()
        .flatten()
        .chain(dominant_history)
        .chain(with_video)
        .chain(participants.iter().map(|p| &p.id));

    let mut seen = HashSet::new();
    let displayable: Vec<ParticipantId> = candidates
        .filter(|id| seen.insert(*id))
        .take(max_count)
        .cloned()
        .collect();

    let shown: HashSet<&ParticipantId> = displayable.iter().collect();
    let overflow = participants
        .iter()
        .map(|p| &p.id)
        .filter(|id| !shown.contains(id))
        .cloned()
        .collect();

    DisplayPartition {
        displayable,
        overflow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use videocall_layout_types::TrackInfo;

    fn id(s: &str) -> ParticipantId {
        ParticipantId::from(s)
    }

    fn names(ids: &[ParticipantId]) -> Vec<&str> {
        ids.iter().map(|i| i.as_str()).collect()
    }

    /// a, c and e publish camera video; b and d are audio only.
    fn call() -> Vec<Participant> {
        vec![
            Participant::new("a").with_track(TrackInfo::video("camera")),
            Participant::new("b").with_track(TrackInfo::audio("mic")),
            Participant::new("c").with_track(TrackInfo::video("camera")),
            Participant::new("d"),
            Participant::new("e").with_track(TrackInfo::video("camera")),
        ]
    }

    #[test]
    fn test_priority_groups_in_order() {
        let history = vec![id("d")];
        let partition = partition_participants(
            &id("me"),
            Some(&id("b")),
            None,
            &history,
            &call(),
            10,
        );
        assert_eq!(
            names(&partition.displayable),
            vec!["me", "b", "d", "a", "c", "e"]
        );
        assert!(partition.overflow.is_empty());
    }

    #[test]
    fn test_participant_in_several_groups_appears_once() {
        // c is selected, in the history and has video
        let history = vec![id("c")];
        let partition = partition_participants(
            &id("me"),
            Some(&id("c")),
            Some(&id("c")),
            &history,
            &call(),
            10,
        );
        assert_eq!(
            names(&partition.displayable),
            vec!["me", "c", "a", "e", "b", "d"]
        );
    }

    #[test]
    fn test_truncation_moves_rest_to_overflow() {
        let partition = partition_participants(&id("me"), None, None, &[], &call(), 3);
        assert_eq!(names(&partition.displayable), vec!["me", "a", "c"]);
        assert_eq!(names(&partition.overflow), vec!["b", "d", "e"]);
        assert_eq!(partition.overflow_count(), 3);
        assert!(partition.is_displayed(&id("a")));
        assert!(!partition.is_displayed(&id("e")));
    }

    #[test]
    fn test_zero_max_count() {
        let partition = partition_participants(
            &id("me"),
            Some(&id("a")),
            None,
            &[id("c")],
            &call(),
            0,
        );
        assert!(partition.displayable.is_empty());
        assert_eq!(names(&partition.overflow), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_switched_off_video_counts_as_no_video() {
        let mut participants = call();
        participants[0].tracks[0].switched_off = true;
        let partition = partition_participants(&id("me"), None, None, &[], &participants, 3);
        assert_eq!(names(&partition.displayable), vec!["me", "c", "e"]);
    }

    #[test]
    fn test_bounded_and_lossless() {
        let participants = call();
        let history = vec![id("e"), id("b")];
        for max_count in 0..8 {
            let partition = partition_participants(
                &id("me"),
                Some(&id("d")),
                None,
                &history,
                &participants,
                max_count,
            );
            assert!(partition.displayable.len() <= max_count);

            let mut all: Vec<&str> = names(&partition.displayable);
            all.extend(names(&partition.overflow));
            let unique: HashSet<&str> = all.iter().copied().collect();
            assert_eq!(unique.len(), all.len(), "duplicate at max_count {max_count}");

            let mut expected: HashSet<&str> = participants.iter().map(|p| p.id.as_str()).collect();
            if max_count > 0 {
                expected.insert("me");
            }
            assert_eq!(unique, expected, "max_count {max_count}");
        }
    }

    #[test]
    fn test_idempotent() {
        let participants = call();
        let history = vec![id("b")];
        let first = partition_participants(&id("me"), None, Some(&id("e")), &history, &participants, 4);
        let second = partition_participants(&id("me"), None, Some(&id("e")), &history, &participants, 4);
        assert_eq!(first, second);
    }
}

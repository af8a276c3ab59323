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

//! An immutable snapshot of everything the selector reads.
//!
//! UI code rebuilds a frame whenever any input changes and evaluates it;
//! nothing in here holds state between evaluations.

use crate::main_participant::{resolve_main_participant, MainParticipant};
use crate::partition::{partition_participants, DisplayPartition};
use crate::screen_share::{find_screen_share_participant, remote_screen_share};
use serde::Serialize;
use videocall_layout_types::{Participant, ParticipantId};

#[derive(Clone, Copy, Debug)]
pub struct LayoutFrame<'a> {
    pub local: &'a Participant,
    /// Remote participants in transport order.
    pub participants: &'a [Participant],
    pub dominant_speaker: Option<&'a ParticipantId>,
    pub selected: Option<&'a ParticipantId>,
    pub max_count: usize,
}

/// Result of one evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub main: MainParticipant,
    pub partition: DisplayPartition,
}

impl<'a> LayoutFrame<'a> {
    pub fn screen_share(&self) -> Option<&'a ParticipantId> {
        find_screen_share_participant(self.local, self.participants)
    }

    pub fn evaluate(&self, dominant_history: &[ParticipantId]) -> Layout {
        let screen_share = self.screen_share();
        let main = resolve_main_participant(
            self.local,
            remote_screen_share(&self.local.id, screen_share),
            self.dominant_speaker,
            self.participants,
            self.selected,
        );
        let partition = partition_participants(
            &self.local.id,
            self.selected,
            screen_share,
            dominant_history,
            self.participants,
            self.max_count,
        );
        Layout { main, partition }
    }
}

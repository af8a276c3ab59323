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

//! Input and output messages of the layout controller.
//!
//! Every transport notification or user interaction becomes one
//! [`LayoutEvent`]; applying it triggers one full re-evaluation, which may be
//! published to subscribers as a [`LayoutUpdate`].

use crate::frame::Layout;
use crate::main_participant::MainParticipant;
use serde::{Deserialize, Serialize};
use videocall_layout_types::{Participant, ParticipantId, TrackInfo};

/// Notifications consumed by [`ParticipantLayoutController`](crate::ParticipantLayoutController).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum LayoutEvent {
    // === Transport events ===
    /// A remote participant joined the call
    ParticipantConnected(Participant),

    /// A remote participant left the call
    ParticipantDisconnected(ParticipantId),

    /// The transport's audio heuristic picked a new speaker, or nobody
    DominantSpeakerChanged(Option<ParticipantId>),

    TrackPublished {
        participant: ParticipantId,
        track: TrackInfo,
    },

    TrackUnpublished {
        participant: ParticipantId,
        track_name: String,
    },

    /// The transport stopped or resumed forwarding a track to us
    TrackSwitched {
        participant: ParticipantId,
        track_name: String,
        switched_off: bool,
    },

    /// The publisher muted or unmuted a track
    TrackEnabled {
        participant: ParticipantId,
        track_name: String,
        enabled: bool,
    },

    /// Only forces a re-evaluation
    TrackDimensionsChanged(ParticipantId),

    /// The local user's own published tracks changed
    LocalTracksChanged(Vec<TrackInfo>),

    // === User interaction ===
    /// Pin a participant; pinning the pinned participant again unpins
    Pin(ParticipantId),

    Unpin,
}

/// Published on the layout event bus whenever the layout changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutUpdate {
    pub main: MainParticipant,
    pub displayable: Vec<ParticipantId>,
    pub overflow_count: usize,
}

impl From<&Layout> for LayoutUpdate {
    fn from(layout: &Layout) -> Self {
        Self {
            main: layout.main.clone(),
            displayable: layout.partition.displayable.clone(),
            overflow_count: layout.partition.overflow_count(),
        }
    }
}

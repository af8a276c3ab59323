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

//! Picks the participant shown in the large viewport.

use serde::Serialize;
use videocall_layout_types::{Participant, ParticipantId, VideoPriority};

/// Which of the main participant's tracks should be rendered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "source", content = "trackName", rename_all = "camelCase")]
pub enum MainTrack {
    ScreenShare(String),
    /// Camera track, if the participant publishes one.
    Camera(Option<String>),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MainParticipant {
    pub participant: ParticipantId,
    pub track: MainTrack,
    /// `Some(High)` when the user pinned this participant or they are sharing
    /// their screen; `None` leaves allocation to the transport.
    pub video_priority: Option<VideoPriority>,
}

/// Resolves the main participant. First present input wins:
///
/// 1. `selected` (pinned by the user)
/// 2. `remote_screen_share`
/// 3. `dominant_speaker`
/// 4. the first of `participants`, in transport order
/// 5. `local`
///
/// Stale ids (no longer connected) are honoured as given; the caller owns
/// their lifecycle.
pub fn resolve_main_participant(
    local: &Participant,
    remote_screen_share: Option<&ParticipantId>,
    dominant_speaker: Option<&ParticipantId>,
    participants: &[Participant],
    selected: Option<&ParticipantId>,
) -> MainParticipant {
    let main = selected
        .or(remote_screen_share)
        .or(dominant_speaker)
        .or_else(|| participants.first().map(|p| &p.id))
        .unwrap_or(&local.id);

    let video_priority = (Some(main) == selected || Some(main) == remote_screen_share)
        .then_some(VideoPriority::High);

    MainParticipant {
        participant: main.clone(),
        track: main_track(main, local, remote_screen_share, participants),
        video_priority,
    }
}

fn main_track(
    main: &ParticipantId,
    local: &Participant,
    remote_screen_share: Option<&ParticipantId>,
    participants: &[Participant],
) -> MainTrack {
    let participant = if *main == local.id {
        Some(local)
    } else {
        participants.iter().find(|p| &p.id == main)
    };
    let Some(participant) = participant else {
        return MainTrack::Camera(None);
    };

    if Some(main) == remote_screen_share {
        if let Some(track) = participant.screen_share_track() {
            return MainTrack::ScreenShare(track.name.clone());
        }
    }
    MainTrack::Camera(participant.camera_track().map(|t| t.name.clone()))
}

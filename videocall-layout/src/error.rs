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

//! Error types for the layout controller and configuration.

use thiserror::Error;
use videocall_layout_types::ParticipantId;

/// Errors returned when an input message or configuration cannot be applied.
///
/// The pure selection functions never fail; only the stateful
/// [`ParticipantLayoutController`](crate::ParticipantLayoutController) and
/// [`LayoutConfig`](crate::LayoutConfig) report errors.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The event refers to a participant that is not connected.
    #[error("Unknown participant: {0}")]
    UnknownParticipant(ParticipantId),

    /// The event refers to a track the participant does not publish.
    #[error("Participant {participant} has no track named {track_name}")]
    UnknownTrack {
        participant: ParticipantId,
        track_name: String,
    },

    /// A remote participant was reported with the local participant's identity.
    #[error("Participant {0} is the local participant")]
    DuplicateLocalParticipant(ParticipantId),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse layout configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

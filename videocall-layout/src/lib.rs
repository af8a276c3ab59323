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

//! Decides what a videocall.rs client shows: which participant fills the main
//! viewport (and with which bandwidth hint), and which participants get a tile
//! in the strip versus the "+N more" overflow.
//!
//! This crate makes no assumptions about the UI framework or the transport.
//! Callers translate their transport notifications into [`LayoutEvent`]s and
//! render whatever [`Layout`] comes back.
//!
//! # Outline of usage
//!
//! ## Stateless evaluation
//!
//! Every decision is a pure function of a [`LayoutFrame`]:
//!
//! ```
//! use videocall_layout::{LayoutFrame, Participant};
//!
//! let local = Participant::new("me");
//! let remotes = vec![Participant::new("alice"), Participant::new("bob")];
//! let frame = LayoutFrame {
//!     local: &local,
//!     participants: &remotes,
//!     dominant_speaker: None,
//!     selected: None,
//!     max_count: 6,
//! };
//! let layout = frame.evaluate(&[]);
//! assert_eq!(layout.main.participant.as_str(), "alice");
//! ```
//!
//! ## Event-driven controller
//!
//! [`ParticipantLayoutController`] keeps the inputs and the dominant-speaker
//! history between events:
//!
//! ```
//! use videocall_layout::{LayoutConfig, LayoutEvent, Participant, ParticipantLayoutController};
//!
//! # fn main() -> Result<(), videocall_layout::LayoutError> {
//! let mut controller =
//!     ParticipantLayoutController::new(Participant::new("me"), LayoutConfig::default())?;
//! controller.handle(LayoutEvent::ParticipantConnected(Participant::new("alice")))?;
//! let layout = controller.handle(LayoutEvent::DominantSpeakerChanged(Some("alice".into())))?;
//! println!("main: {}", layout.main.participant);
//! # Ok(())
//! # }
//! ```
//!
//! ## Subscribing to updates
//!
//! ```ignore
//! let mut rx = videocall_layout::subscribe_layout_updates();
//! while let Ok(update) = rx.recv().await { /* re-render */ }
//! ```

mod config;
mod constants;
mod controller;
mod dominant_speaker_history;
mod error;
mod event_bus;
mod events;
mod frame;
mod main_participant;
mod partition;
mod roster;
mod screen_share;

#[cfg(feature = "diagnostics")]
pub mod diagnostics;

pub use config::{platform_max_participants, LayoutConfig};
pub use constants::{DESKTOP_MAX_PARTICIPANTS, MAX_PARTICIPANTS_CEILING, MOBILE_MAX_PARTICIPANTS};
pub use controller::ParticipantLayoutController;
pub use dominant_speaker_history::DominantSpeakerHistory;
pub use error::LayoutError;
pub use event_bus::{emit_layout_update, global_layout_sender, subscribe_layout_updates};
pub use events::{LayoutEvent, LayoutUpdate};
pub use frame::{Layout, LayoutFrame};
pub use main_participant::{resolve_main_participant, MainParticipant, MainTrack};
pub use partition::{partition_participants, DisplayPartition};
pub use roster::ParticipantRoster;
pub use screen_share::{find_screen_share_participant, remote_screen_share};
pub use videocall_layout_types::{
    Participant, ParticipantId, Platform, TrackInfo, TrackKind, VideoPriority,
};

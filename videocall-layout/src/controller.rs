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

//! Event-driven owner of the layout state.
//!
//! The controller holds the latest snapshot of the call (who is connected,
//! who is speaking, who is pinned) plus the dominant-speaker history. Each
//! [`LayoutEvent`] is applied and followed by one complete, synchronous
//! re-evaluation. There is no incremental path.
//!
//! ```ignore
//! let mut layout = ParticipantLayoutController::new(local, LayoutConfig::default())?;
//! layout.handle(LayoutEvent::ParticipantConnected(alice))?;
//! let current = layout.handle(LayoutEvent::DominantSpeakerChanged(Some(alice_id)))?;
//! render(&current.main, &current.partition);
//! ```

use crate::config::LayoutConfig;
#[cfg(feature = "diagnostics")]
use crate::diagnostics;
use crate::dominant_speaker_history::DominantSpeakerHistory;
use crate::error::LayoutError;
use crate::event_bus::emit_layout_update;
use crate::events::{LayoutEvent, LayoutUpdate};
use crate::frame::{Layout, LayoutFrame};
use crate::roster::ParticipantRoster;
use log::{debug, info, warn};
use videocall_layout_types::{Participant, ParticipantId, TrackInfo};

#[derive(Debug)]
pub struct ParticipantLayoutController {
    config: LayoutConfig,
    local: Participant,
    roster: ParticipantRoster,
    dominant_speaker: Option<ParticipantId>,
    pinned: Option<ParticipantId>,
    history: DominantSpeakerHistory,
    layout: Layout,
}

impl ParticipantLayoutController {
    pub fn new(local: Participant, config: LayoutConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        info!(
            "Layout controller for {} (platform {:?}, up to {} tiles)",
            local.id,
            config.platform,
            config.max_count()
        );
        let roster = ParticipantRoster::new();
        let history = DominantSpeakerHistory::new();
        let layout = LayoutFrame {
            local: &local,
            participants: roster.as_slice(),
            dominant_speaker: None,
            selected: None,
            max_count: config.max_count(),
        }
        .evaluate(history.as_slice());
        Ok(Self {
            config,
            local,
            roster,
            dominant_speaker: None,
            pinned: None,
            history,
            layout,
        })
    }

    //
    // Accessors
    //

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn local(&self) -> &Participant {
        &self.local
    }

    pub fn participants(&self) -> &[Participant] {
        self.roster.as_slice()
    }

    pub fn dominant_speaker(&self) -> Option<&ParticipantId> {
        self.dominant_speaker.as_ref()
    }

    pub fn pinned(&self) -> Option<&ParticipantId> {
        self.pinned.as_ref()
    }

    pub fn history(&self) -> &[ParticipantId] {
        self.history.as_slice()
    }

    /// Snapshot of the current inputs.
    pub fn frame(&self) -> LayoutFrame<'_> {
        LayoutFrame {
            local: &self.local,
            participants: self.roster.as_slice(),
            dominant_speaker: self.dominant_speaker.as_ref(),
            selected: self.pinned.as_ref(),
            max_count: self.config.max_count(),
        }
    }

    //
    // Event handling
    //

    /// Applies one event and re-evaluates. A rejected event leaves the state
    /// and the layout untouched.
    pub fn handle(&mut self, event: LayoutEvent) -> Result<&Layout, LayoutError> {
        debug!("Applying layout event {event:?}");
        if let Err(e) = self.apply(event) {
            warn!("Rejected layout event: {e}");
            return Err(e);
        }
        Ok(self.reevaluate())
    }

    fn apply(&mut self, event: LayoutEvent) -> Result<(), LayoutError> {
        match event {
            LayoutEvent::ParticipantConnected(participant) => {
                if participant.id == self.local.id {
                    return Err(LayoutError::DuplicateLocalParticipant(participant.id));
                }
                self.roster.insert(participant);
                self.on_roster_changed();
            }
            LayoutEvent::ParticipantDisconnected(id) => {
                if self.roster.remove(&id).is_none() {
                    debug!("Ignoring disconnect of unknown participant {id}");
                    return Ok(());
                }
                if self.pinned.as_ref() == Some(&id) {
                    debug!("Pinned participant {id} left, clearing pin");
                    self.pinned = None;
                }
                if self.dominant_speaker.as_ref() == Some(&id) {
                    self.dominant_speaker = None;
                }
                self.on_roster_changed();
            }
            LayoutEvent::DominantSpeakerChanged(Some(id)) => {
                self.ensure_known(&id)?;
                self.history.record(&id);
                self.dominant_speaker = Some(id);
            }
            LayoutEvent::DominantSpeakerChanged(None) => {
                if !self.config.retain_last_speaker {
                    self.dominant_speaker = None;
                }
            }
            LayoutEvent::TrackPublished { participant, track } => {
                let publisher = self.participant_mut(&participant)?;
                match publisher.track_mut(&track.name) {
                    Some(existing) => *existing = track,
                    None => publisher.tracks.push(track),
                }
            }
            LayoutEvent::TrackUnpublished {
                participant,
                track_name,
            } => {
                let publisher = self.participant_mut(&participant)?;
                let before = publisher.tracks.len();
                publisher.tracks.retain(|t| t.name != track_name);
                if publisher.tracks.len() == before {
                    return Err(LayoutError::UnknownTrack {
                        participant,
                        track_name,
                    });
                }
            }
            LayoutEvent::TrackSwitched {
                participant,
                track_name,
                switched_off,
            } => {
                self.track_mut(participant, track_name)?.switched_off = switched_off;
            }
            LayoutEvent::TrackEnabled {
                participant,
                track_name,
                enabled,
            } => {
                self.track_mut(participant, track_name)?.enabled = enabled;
            }
            LayoutEvent::TrackDimensionsChanged(id) => {
                self.ensure_known(&id)?;
            }
            LayoutEvent::LocalTracksChanged(tracks) => {
                self.local.tracks = tracks;
            }
            LayoutEvent::Pin(id) => {
                self.ensure_known(&id)?;
                if self.pinned.as_ref() == Some(&id) {
                    self.pinned = None;
                } else {
                    self.pinned = Some(id);
                }
            }
            LayoutEvent::Unpin => {
                self.pinned = None;
            }
        }
        Ok(())
    }

    fn reevaluate(&mut self) -> &Layout {
        let next = self.frame().evaluate(self.history.as_slice());
        #[cfg(feature = "diagnostics")]
        diagnostics::report_layout(self.local.id.as_str(), &next, self.history.len());
        if next != self.layout {
            debug!(
                "Layout changed: main {} ({} shown, {} overflow)",
                next.main.participant,
                next.partition.displayable.len(),
                next.partition.overflow_count()
            );
            emit_layout_update(LayoutUpdate::from(&next));
            self.layout = next;
        }
        &self.layout
    }

    fn on_roster_changed(&mut self) {
        self.history
            .retain_present(&self.local.id, self.roster.as_slice());
    }

    fn ensure_known(&self, id: &ParticipantId) -> Result<(), LayoutError> {
        if *id == self.local.id || self.roster.contains(id) {
            Ok(())
        } else {
            Err(LayoutError::UnknownParticipant(id.clone()))
        }
    }

    fn participant_mut(&mut self, id: &ParticipantId) -> Result<&mut Participant, LayoutError> {
        if *id == self.local.id {
            return Ok(&mut self.local);
        }
        self.roster
            .get_mut(id)
            .ok_or_else(|| LayoutError::UnknownParticipant(id.clone()))
    }

    fn track_mut(
        &mut self,
        participant: ParticipantId,
        track_name: String,
    ) -> Result<&mut TrackInfo, LayoutError> {
        let publisher = self.participant_mut(&participant)?;
        match publisher.track_mut(&track_name) {
            Some(track) => Ok(track),
            None => Err(LayoutError::UnknownTrack {
                participant,
                track_name,
            }),
        }
    }
}

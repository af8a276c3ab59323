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

//! Shared data model for the videocall.rs participant layout selector.
//!
//! These types describe what the transport layer tells us about a call:
//! who is connected and which tracks each participant publishes. They are
//! plain serde-serialisable values so that any frontend (Yew, Dioxus, a
//! native client) can build them from its own SDK objects.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Substring that marks a published video track as a screen capture.
pub const SCREEN_SHARE_TRACK_MARKER: &str = "screen";

/// Opaque identity of a connected endpoint, unique within a call.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ParticipantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for ParticipantId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    Audio,
    Video,
}

/// Metadata for a single published track.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackInfo {
    pub name: String,
    pub kind: TrackKind,
    /// The publisher has the track turned on.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// The transport stopped forwarding this track to us (bandwidth profile).
    #[serde(default)]
    pub switched_off: bool,
}

fn default_enabled() -> bool {
    true
}

impl TrackInfo {
    pub fn new(name: impl Into<String>, kind: TrackKind) -> Self {
        Self {
            name: name.into(),
            kind,
            enabled: true,
            switched_off: false,
        }
    }

    pub fn audio(name: impl Into<String>) -> Self {
        Self::new(name, TrackKind::Audio)
    }

    pub fn video(name: impl Into<String>) -> Self {
        Self::new(name, TrackKind::Video)
    }

    /// A video track whose name carries the screen-share marker.
    pub fn is_screen_share(&self) -> bool {
        self.kind == TrackKind::Video
            && self
                .name
                .to_ascii_lowercase()
                .contains(SCREEN_SHARE_TRACK_MARKER)
    }

    pub fn is_camera(&self) -> bool {
        self.kind == TrackKind::Video && !self.is_screen_share()
    }

    /// Camera video that is currently reaching us.
    pub fn is_active_camera(&self) -> bool {
        self.is_camera() && self.enabled && !self.switched_off
    }
}

/// A participant as reported by the transport layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    #[serde(default)]
    pub tracks: Vec<TrackInfo>,
}

impl Participant {
    pub fn new(id: impl Into<ParticipantId>) -> Self {
        Self {
            id: id.into(),
            tracks: Vec::new(),
        }
    }

    /// Builder-style helper, mostly handy in tests and demos.
    pub fn with_track(mut self, track: TrackInfo) -> Self {
        self.tracks.push(track);
        self
    }

    pub fn track(&self, name: &str) -> Option<&TrackInfo> {
        self.tracks.iter().find(|t| t.name == name)
    }

    pub fn track_mut(&mut self, name: &str) -> Option<&mut TrackInfo> {
        self.tracks.iter_mut().find(|t| t.name == name)
    }

    pub fn screen_share_track(&self) -> Option<&TrackInfo> {
        self.tracks.iter().find(|t| t.is_screen_share())
    }

    pub fn camera_track(&self) -> Option<&TrackInfo> {
        self.tracks.iter().find(|t| t.is_camera())
    }

    pub fn is_sharing_screen(&self) -> bool {
        self.screen_share_track().is_some()
    }

    pub fn has_active_video(&self) -> bool {
        self.tracks.iter().any(TrackInfo::is_active_camera)
    }
}

/// Hint passed to the transport's bandwidth allocator for a rendered track.
/// Tracks without a hint are left to the transport's default allocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoPriority {
    High,
}

impl fmt::Display for VideoPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoPriority::High => write!(f, "high"),
        }
    }
}

/// Client class, used to pick how many tiles the strip may hold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Mobile,
    #[default]
    Desktop,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_share_detection_is_case_insensitive() {
        assert!(TrackInfo::video("Screen-1234").is_screen_share());
        assert!(TrackInfo::video("my-screen").is_screen_share());
        assert!(!TrackInfo::video("camera-1234").is_screen_share());
        // audio named "screen" is screen-share audio, not a screen track
        assert!(!TrackInfo::audio("screen-audio").is_screen_share());
    }

    #[test]
    fn active_video_ignores_switched_off_and_screen_tracks() {
        let mut cam = TrackInfo::video("camera");
        cam.switched_off = true;
        let p = Participant::new("alice")
            .with_track(cam)
            .with_track(TrackInfo::video("screen"));
        assert!(!p.has_active_video());
        assert!(p.is_sharing_screen());

        let q = Participant::new("bob").with_track(TrackInfo::video("camera"));
        assert!(q.has_active_video());
    }

    #[test]
    fn participant_deserializes_with_defaults() {
        let json = r#"{"id":"alice","tracks":[{"name":"camera","kind":"video"}]}"#;
        let p: Participant = serde_json::from_str(json).unwrap();
        assert_eq!(p.id.as_str(), "alice");
        assert!(p.tracks[0].enabled);
        assert!(!p.tracks[0].switched_off);
    }

    #[test]
    fn priority_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&VideoPriority::High).unwrap(),
            "\"high\""
        );
        assert_eq!(VideoPriority::High.to_string(), "high");
    }
}

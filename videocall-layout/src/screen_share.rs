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

use videocall_layout_types::{Participant, ParticipantId};

/// Finds whoever is publishing a screen-share track. Remote participants are
/// scanned first in transport order, then the local participant.
pub fn find_screen_share_participant<'a>(
    local: &'a Participant,
    participants: &'a [Participant],
) -> Option<&'a ParticipantId> {
    participants
        .iter()
        .chain(std::iter::once(local))
        .find(|p| p.is_sharing_screen())
        .map(|p| &p.id)
}

/// The local user's own screen share is never promoted to the main viewport.
pub fn remote_screen_share<'a>(
    local: &ParticipantId,
    screen_share: Option<&'a ParticipantId>,
) -> Option<&'a ParticipantId> {
    screen_share.filter(|id| *id != local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use videocall_layout_types::TrackInfo;

    #[test]
    fn test_no_one_sharing() {
        let local = Participant::new("me").with_track(TrackInfo::video("camera"));
        let remotes = vec![Participant::new("a").with_track(TrackInfo::video("camera"))];
        assert_eq!(find_screen_share_participant(&local, &remotes), None);
    }

    #[test]
    fn test_remote_sharer_found() {
        let local = Participant::new("me");
        let remotes = vec![
            Participant::new("a"),
            Participant::new("b").with_track(TrackInfo::video("screen")),
        ];
        let sharer = find_screen_share_participant(&local, &remotes);
        assert_eq!(sharer.map(|id| id.as_str()), Some("b"));
        assert_eq!(remote_screen_share(&local.id, sharer), sharer);
    }

    #[test]
    fn test_local_sharer_is_filtered_from_remote() {
        let local = Participant::new("me").with_track(TrackInfo::video("screen"));
        let sharer = find_screen_share_participant(&local, &[]);
        assert_eq!(sharer.map(|id| id.as_str()), Some("me"));
        assert_eq!(remote_screen_share(&local.id, sharer), None);
    }
}

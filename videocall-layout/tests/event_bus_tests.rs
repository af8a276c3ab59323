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
 */

//! Integration tests for the layout event bus.

use async_broadcast::TryRecvError;
use videocall_layout::{
    emit_layout_update, global_layout_sender, subscribe_layout_updates, LayoutConfig, LayoutEvent,
    LayoutUpdate, MainParticipant, MainTrack, Participant, ParticipantId,
    ParticipantLayoutController,
};

fn drain(rx: &mut async_broadcast::Receiver<LayoutUpdate>) -> Vec<LayoutUpdate> {
    let mut updates = Vec::new();
    loop {
        match rx.try_recv() {
            Ok(update) => updates.push(update),
            Err(TryRecvError::Overflowed(_)) => continue,
            Err(_) => break,
        }
    }
    updates
}

#[test]
fn test_emit_without_subscribers_does_not_panic() {
    emit_layout_update(LayoutUpdate {
        main: MainParticipant {
            participant: ParticipantId::from("nobody-listening"),
            track: MainTrack::Camera(None),
            video_priority: None,
        },
        displayable: vec![],
        overflow_count: 0,
    });
}

#[test]
fn test_every_subscriber_receives_each_update() {
    let mut rx1 = subscribe_layout_updates();
    let mut rx2 = subscribe_layout_updates();
    assert_eq!(global_layout_sender().capacity(), rx1.capacity());

    let marker = ParticipantId::from("fan-out-marker");
    emit_layout_update(LayoutUpdate {
        main: MainParticipant {
            participant: marker.clone(),
            track: MainTrack::Camera(None),
            video_priority: None,
        },
        displayable: vec![marker.clone()],
        overflow_count: 0,
    });

    for rx in [&mut rx1, &mut rx2] {
        let matching = drain(rx)
            .into_iter()
            .filter(|u| u.main.participant == marker)
            .count();
        assert_eq!(matching, 1);
    }
}

#[test]
fn test_emitted_update_reaches_subscriber() {
    let mut rx = subscribe_layout_updates();
    let marker = ParticipantId::from("bus-direct-marker");
    emit_layout_update(LayoutUpdate {
        main: MainParticipant {
            participant: marker.clone(),
            track: MainTrack::Camera(None),
            video_priority: None,
        },
        displayable: vec![marker.clone()],
        overflow_count: 2,
    });

    let received = futures::executor::block_on(async {
        loop {
            match rx.recv().await {
                Ok(update) if update.main.participant == marker => break Some(update),
                Ok(_) => continue,
                Err(async_broadcast::RecvError::Overflowed(_)) => continue,
                Err(async_broadcast::RecvError::Closed) => break None,
            }
        }
    });
    let update = received.expect("update delivered");
    assert_eq!(update.overflow_count, 2);
}

#[test]
fn test_controller_publishes_layout_changes() -> anyhow::Result<()> {
    let mut rx = subscribe_layout_updates();
    let mut controller = ParticipantLayoutController::new(
        Participant::new("bus-local"),
        LayoutConfig::default(),
    )?;
    controller.handle(LayoutEvent::ParticipantConnected(Participant::new(
        "bus-remote",
    )))?;

    let ours: Vec<LayoutUpdate> = drain(&mut rx)
        .into_iter()
        .filter(|u| u.displayable.contains(&ParticipantId::from("bus-local")))
        .collect();
    let last = ours.last().expect("layout change published");
    assert_eq!(last.main.participant.as_str(), "bus-remote");
    assert_eq!(last.displayable.len(), 2);
    Ok(())
}

#[test]
fn test_unchanged_layout_is_not_republished() -> anyhow::Result<()> {
    let mut controller = ParticipantLayoutController::new(
        Participant::new("quiet-local"),
        LayoutConfig::default(),
    )?;
    controller.handle(LayoutEvent::ParticipantConnected(Participant::new(
        "quiet-remote",
    )))?;

    let mut rx = subscribe_layout_updates();
    controller.handle(LayoutEvent::TrackDimensionsChanged(ParticipantId::from(
        "quiet-remote",
    )))?;
    let ours = drain(&mut rx)
        .into_iter()
        .filter(|u| u.displayable.contains(&ParticipantId::from("quiet-local")))
        .count();
    assert_eq!(ours, 0);
    Ok(())
}

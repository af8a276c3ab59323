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

use std::collections::HashMap;
use videocall_layout_types::{Participant, ParticipantId};

/// Remote participants in the order the transport reported them.
///
/// Lookups go through an id index; iteration always follows connect order,
/// which is the tie-breaker for every ordering decision in the selector.
#[derive(Debug, Default, Clone)]
pub struct ParticipantRoster {
    participants: Vec<Participant>,
    index: HashMap<ParticipantId, usize>,
}

impl ParticipantRoster {
    pub fn new() -> Self {
        Self::default()
    }

    //
    // Lookups
    //

    pub fn get(&self, id: &ParticipantId) -> Option<&Participant> {
        self.index.get(id).map(|&i| &self.participants[i])
    }

    pub fn get_mut(&mut self, id: &ParticipantId) -> Option<&mut Participant> {
        match self.index.get(id) {
            Some(&i) => self.participants.get_mut(i),
            None => None,
        }
    }

    pub fn contains(&self, id: &ParticipantId) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn as_slice(&self) -> &[Participant] {
        &self.participants
    }

    pub fn ids(&self) -> impl Iterator<Item = &ParticipantId> {
        self.participants.iter().map(|p| &p.id)
    }

    //
    // Mutations, keeping the index in step with the ordered list
    //

    /// Adds a participant at the end. A participant that is already present
    /// is replaced in place and keeps its position.
    pub fn insert(&mut self, participant: Participant) -> Option<Participant> {
        match self.index.get(&participant.id) {
            Some(&i) => Some(std::mem::replace(&mut self.participants[i], participant)),
            None => {
                self.index
                    .insert(participant.id.clone(), self.participants.len());
                self.participants.push(participant);
                None
            }
        }
    }

    pub fn remove(&mut self, id: &ParticipantId) -> Option<Participant> {
        let i = self.index.remove(id)?;
        let removed = self.participants.remove(i);
        for slot in self.index.values_mut() {
            if *slot > i {
                *slot -= 1;
            }
        }
        Some(removed)
    }
}

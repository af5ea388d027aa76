// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Contact reports for free bodies
//!
//! Free bodies are moved by the application rather than by the integrator,
//! so instead of being bounced they receive the contacts that touched them.
//! The world gathers every contact of a free body during one step into a
//! single [`ContactEvent`] which the application drains afterwards.

use crate::body::BodyId;
use crate::collision::Contact;
use crate::math::Vector3;

/// One contact seen from the free body's side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyContact {
    /// World space contact point
    pub position: Vector3,
    /// Unit normal pointing toward the free body
    pub normal: Vector3,
    /// Signed separation, `<= 0` when touching
    pub depth: f64,
    /// Id of the body on the other side of the contact
    pub other: BodyId,
}

impl BodyContact {
    /// Wrap a contact whose normal already points toward the free body
    pub fn new(contact: &Contact, other: BodyId) -> Self {
        BodyContact {
            position: contact.position,
            normal: contact.normal,
            depth: contact.depth,
            other,
        }
    }
}

/// All contacts a free body received during one step
#[derive(Debug, Clone, PartialEq)]
pub struct ContactEvent {
    /// The free body the contacts belong to
    pub body: BodyId,
    /// Contacts from every partner, in the order they were found
    pub contacts: Vec<BodyContact>,
}

impl ContactEvent {
    /// Ids of the partners involved, without duplicates
    pub fn others(&self) -> Vec<BodyId> {
        let mut ids: Vec<BodyId> = self.contacts.iter().map(|c| c.other).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// The deepest contact, if any
    pub fn deepest(&self) -> Option<&BodyContact> {
        self.contacts
            .iter()
            .min_by(|a, b| a.depth.total_cmp(&b.depth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(depth: f64, other: BodyId) -> BodyContact {
        BodyContact::new(
            &Contact::new(Vector3::zero(), Vector3::new(0.0, 1.0, 0.0), depth),
            other,
        )
    }

    #[test]
    fn test_event_queries() {
        let event = ContactEvent {
            body: 1,
            contacts: vec![contact(-0.1, 3), contact(-0.4, 2), contact(0.0, 3)],
        };
        assert_eq!(event.others(), vec![2, 3]);
        assert_eq!(event.deepest().map(|c| c.other), Some(2));
    }
}

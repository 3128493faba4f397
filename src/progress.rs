// Copyright 2025 Fernando Borretti
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


use std::collections::BTreeMap;

use crate::error::Fallible;
use crate::storage::KeyValueStore;
use crate::types::card::Card;
use crate::types::card::CardId;
use crate::types::status::Status;

/// The storage slot progress is persisted under.
pub const PROGRESS_KEY: &str = "flashcard-progress";

/// Map of card IDs to their status. Only `Known` and `Revise` are stored;
/// any other card is `Unset`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Progress {
    entries: BTreeMap<CardId, Status>,
}

impl Progress {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn status(&self, id: &CardId) -> Status {
        self.entries.get(id).copied().unwrap_or_default()
    }

    pub fn card_status(&self, card: &Card) -> Status {
        self.status(card.id())
    }

    /// Return a copy with `id` set to `status`. Marking a card `Unset`
    /// removes its entry.
    pub fn mark(&self, id: &CardId, status: Status) -> Progress {
        let mut entries = self.entries.clone();
        match status {
            Status::Unset => {
                entries.remove(id);
            }
            Status::Known | Status::Revise => {
                entries.insert(id.clone(), status);
            }
        }
        Progress { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse the persisted form: a JSON object of card IDs to `"known"` or
    /// `"revise"`. Null values are skipped.
    pub fn from_json(json: &str) -> Fallible<Self> {
        let raw: BTreeMap<CardId, Option<Status>> = serde_json::from_str(json)?;
        let entries = raw
            .into_iter()
            .filter_map(|(id, status)| status.map(|status| (id, status)))
            .collect();
        Ok(Self { entries })
    }

    pub fn to_json(&self) -> Fallible<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    /// Read progress from the store. A missing, unreadable, or malformed
    /// value yields empty progress.
    pub fn load(store: &dyn KeyValueStore) -> Progress {
        let json = match store.get(PROGRESS_KEY) {
            Ok(Some(json)) => json,
            Ok(None) => {
                log::debug!("No saved progress.");
                return Progress::empty();
            }
            Err(e) => {
                log::warn!("Failed to read progress, starting empty: {e}");
                return Progress::empty();
            }
        };
        match Progress::from_json(&json) {
            Ok(progress) => {
                log::debug!("Loaded progress for {} cards.", progress.len());
                progress
            }
            Err(e) => {
                log::warn!("Ignoring malformed progress: {e}");
                Progress::empty()
            }
        }
    }

    /// Write the whole map to the store. Failures are logged and ignored.
    pub fn save(&self, store: &mut dyn KeyValueStore) {
        let result = self
            .to_json()
            .and_then(|json| store.set(PROGRESS_KEY, &json));
        if let Err(e) = result {
            log::warn!("Failed to save progress: {e}");
        }
    }
}

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


mod load;

use std::collections::HashSet;

use crate::error::Fallible;
use crate::error::fail;
use crate::types::card::Card;

pub use load::load_deck;
use load::parse_deck_file;

/// A named, ordered group of cards.
#[derive(Clone, Debug)]
pub struct Topic {
    name: String,
    label: String,
    cards: Vec<Card>,
}

impl Topic {
    pub fn new(name: impl Into<String>, label: Option<String>, cards: Vec<Card>) -> Self {
        let name = name.into();
        let label = label.unwrap_or_else(|| name.clone());
        Self { name, label, cards }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name shown in the topic selector.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// The read-only set of topics and cards a session studies.
#[derive(Clone, Debug)]
pub struct Dataset {
    topics: Vec<Topic>,
}

impl Dataset {
    /// Build a dataset, checking that it is non-empty, that topic names are
    /// unique, that no topic is empty, and that card IDs are unique across
    /// all topics.
    pub fn new(topics: Vec<Topic>) -> Fallible<Self> {
        if topics.is_empty() {
            return fail("deck has no topics.");
        }
        let mut names: HashSet<&str> = HashSet::new();
        let mut ids: HashSet<&str> = HashSet::new();
        for topic in &topics {
            if !names.insert(topic.name()) {
                return fail(format!("duplicate topic: {}", topic.name()));
            }
            if topic.cards().is_empty() {
                return fail(format!("topic has no cards: {}", topic.name()));
            }
            for card in topic.cards() {
                if !ids.insert(card.id().as_str()) {
                    return fail(format!("duplicate card ID: {}", card.id()));
                }
            }
        }
        Ok(Self { topics })
    }

    /// The dataset that ships with the binary.
    pub fn builtin() -> Fallible<Self> {
        let topics = parse_deck_file(include_str!("dataset/builtin.toml"))?;
        Self::new(topics)
    }

    /// Topic names, in order.
    pub fn topics(&self) -> Vec<&str> {
        self.topics.iter().map(|t| t.name()).collect()
    }

    pub fn all_topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn topic(&self, name: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.topic(name).is_some()
    }

    /// The cards of a topic. An unknown topic has no cards.
    pub fn cards(&self, topic: &str) -> &[Card] {
        match self.topic(topic) {
            Some(topic) => topic.cards(),
            None => &[],
        }
    }

    pub fn first_topic(&self) -> &str {
        // `new` rejects empty datasets.
        self.topics[0].name()
    }

    pub fn card_count(&self) -> usize {
        self.topics.iter().map(|t| t.cards().len()).sum()
    }
}

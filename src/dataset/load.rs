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


use std::fs::read_to_string;
use std::path::Path;

use serde::Deserialize;
use walkdir::WalkDir;

use crate::dataset::Dataset;
use crate::dataset::Topic;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;
use crate::types::card::Card;
use crate::types::card::CardId;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct DeckFile {
    #[serde(default)]
    topic: Vec<TopicEntry>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TopicEntry {
    name: String,
    label: Option<String>,
    #[serde(default)]
    card: Vec<CardEntry>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CardEntry {
    id: String,
    question: String,
    answer: String,
}

/// Parse the contents of a single deck file.
pub fn parse_deck_file(content: &str) -> Fallible<Vec<Topic>> {
    let file: DeckFile = toml::from_str(content)?;
    let topics = file
        .topic
        .into_iter()
        .map(|topic| {
            let cards = topic
                .card
                .into_iter()
                .map(|card| Card::new(CardId::new(card.id), card.question, card.answer))
                .collect();
            Topic::new(topic.name, topic.label, cards)
        })
        .collect();
    Ok(topics)
}

/// Load a dataset from a deck file, or from every `.toml` file under a
/// directory, in path order.
pub fn load_deck(path: &Path) -> Fallible<Dataset> {
    if !path.exists() {
        return fail("deck does not exist.");
    }
    let mut topics: Vec<Topic> = Vec::new();
    if path.is_file() {
        topics.extend(load_file(path)?);
    } else {
        for entry in WalkDir::new(path).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "toml") {
                topics.extend(load_file(path)?);
            }
        }
    }
    log::debug!("Loaded {} topics from {}.", topics.len(), path.display());
    Dataset::new(topics)
}

fn load_file(path: &Path) -> Fallible<Vec<Topic>> {
    let content = read_to_string(path)?;
    parse_deck_file(&content)
        .map_err(|e| ErrorReport::new(format!("failed to parse {}: {e}", path.display())))
}

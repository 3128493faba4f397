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


use serde::Serialize;

use crate::collection::Collection;
use crate::error::Fallible;
use crate::error::fail;
use crate::progress::Progress;
use crate::stats::topic_stats;

pub fn print_deck_stats(
    deck: Option<String>,
    data_dir: Option<String>,
    topic: Option<String>,
) -> Fallible<()> {
    let coll = Collection::new(deck, data_dir)?;
    let store = coll.open_store()?;
    let progress = Progress::load(&store);
    let stats = get_stats(&coll, &progress, topic.as_deref())?;
    let stats_json = serde_json::to_string_pretty(&stats)?;
    println!("{stats_json}");
    Ok(())
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TopicStats {
    topic: String,
    total: usize,
    known: usize,
    revise: usize,
}

fn get_stats(
    coll: &Collection,
    progress: &Progress,
    topic: Option<&str>,
) -> Fallible<Vec<TopicStats>> {
    if let Some(name) = topic {
        if !coll.dataset.contains(name) {
            return fail(format!("no such topic: {name}"));
        }
    }
    let stats = coll
        .dataset
        .all_topics()
        .iter()
        .filter(|t| topic.is_none_or(|name| t.name() == name))
        .map(|t| {
            let stats = topic_stats(t.cards(), progress);
            TopicStats {
                topic: t.name().to_string(),
                total: t.cards().len(),
                known: stats.known,
                revise: stats.revise,
            }
        })
        .collect();
    Ok(stats)
}

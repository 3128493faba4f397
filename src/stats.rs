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

use crate::progress::Progress;
use crate::types::card::Card;
use crate::types::status::Status;

/// Counts of marked cards in a topic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub known: usize,
    pub revise: usize,
}

pub fn topic_stats(cards: &[Card], progress: &Progress) -> Stats {
    let mut stats = Stats::default();
    for card in cards {
        match progress.card_status(card) {
            Status::Known => stats.known += 1,
            Status::Revise => stats.revise += 1,
            Status::Unset => {}
        }
    }
    stats
}

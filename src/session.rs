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


use std::sync::Arc;

use rand::Rng;
use rand::thread_rng;

use crate::dataset::Dataset;
use crate::progress::Progress;
use crate::stats::Stats;
use crate::stats::topic_stats;
use crate::storage::KeyValueStore;
use crate::types::card::Card;
use crate::types::status::Status;

/// Navigation state: the selected topic, the current card, and whether its
/// answer is showing. Not persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    topic: String,
    index: usize,
    revealed: bool,
}

/// A user intent.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    SelectTopic(String),
    Next,
    Previous,
    Shuffle,
    ToggleAnswer,
    Mark(Status),
}

impl Session {
    /// Start on `topic` if the dataset has it, otherwise on the first topic.
    pub fn new(dataset: &Dataset, topic: Option<&str>) -> Self {
        let topic = match topic {
            Some(topic) if dataset.contains(topic) => topic,
            Some(topic) => {
                log::warn!("Unknown topic {topic:?}, starting on the first topic.");
                dataset.first_topic()
            }
            None => dataset.first_topic(),
        };
        Self {
            topic: topic.to_string(),
            index: 0,
            revealed: false,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn current_card<'a>(&self, dataset: &'a Dataset) -> Option<&'a Card> {
        dataset.cards(&self.topic).get(self.index)
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self, dataset: &Dataset) -> bool {
        self.index + 1 >= dataset.cards(&self.topic).len()
    }

    /// Switch topics. Unknown topics are ignored.
    pub fn select_topic(&mut self, dataset: &Dataset, topic: &str) {
        if !dataset.contains(topic) {
            log::warn!("Ignoring unknown topic {topic:?}.");
            return;
        }
        self.topic = topic.to_string();
        self.index = 0;
        self.revealed = false;
    }

    pub fn next(&mut self, dataset: &Dataset) {
        if !self.is_last(dataset) {
            self.index += 1;
            self.revealed = false;
        }
    }

    pub fn previous(&mut self) {
        if !self.is_first() {
            self.index -= 1;
            self.revealed = false;
        }
    }

    /// Jump to a uniformly random card of the topic. May land on the
    /// current card.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, dataset: &Dataset, rng: &mut R) {
        let len = dataset.cards(&self.topic).len();
        if len == 0 {
            return;
        }
        self.index = rng.gen_range(0..len);
        self.revealed = false;
    }

    pub fn toggle_answer(&mut self) {
        self.revealed = !self.revealed;
    }
}

/// Owns everything a study session mutates: navigation, progress, and the
/// store progress is persisted to.
pub struct Controller {
    dataset: Arc<Dataset>,
    session: Session,
    progress: Progress,
    store: Box<dyn KeyValueStore>,
}

impl Controller {
    /// Hydrate progress from the store and start a session.
    pub fn open(
        dataset: Arc<Dataset>,
        store: Box<dyn KeyValueStore>,
        topic: Option<&str>,
    ) -> Self {
        let progress = Progress::load(store.as_ref());
        let session = Session::new(&dataset, topic);
        Self {
            dataset,
            session,
            progress,
            store,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.session.current_card(&self.dataset)
    }

    pub fn current_status(&self) -> Status {
        match self.current_card() {
            Some(card) => self.progress.card_status(card),
            None => Status::Unset,
        }
    }

    /// Stats for the selected topic.
    pub fn stats(&self) -> Stats {
        topic_stats(self.dataset.cards(self.session.topic()), &self.progress)
    }

    pub fn apply(&mut self, event: Event) {
        self.apply_with_rng(event, &mut thread_rng());
    }

    pub fn apply_with_rng<R: Rng + ?Sized>(&mut self, event: Event, rng: &mut R) {
        log::debug!("{event:?}");
        match event {
            Event::SelectTopic(topic) => self.session.select_topic(&self.dataset, &topic),
            Event::Next => self.session.next(&self.dataset),
            Event::Previous => self.session.previous(),
            Event::Shuffle => self.session.shuffle(&self.dataset, rng),
            Event::ToggleAnswer => self.session.toggle_answer(),
            Event::Mark(status) => self.mark_current(status),
        }
    }

    /// Set the current card's status and persist the result. Does nothing
    /// if the topic has no cards.
    pub fn mark_current(&mut self, status: Status) {
        let id = match self.current_card() {
            Some(card) => card.id().clone(),
            None => return,
        };
        log::debug!("{id} {status}");
        self.progress = self.progress.mark(&id, status);
        self.progress.save(self.store.as_mut());
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::dataset::Topic;
    use crate::error::Fallible;
    use crate::progress::PROGRESS_KEY;
    use crate::storage::MemoryStore;
    use crate::types::card::CardId;

    fn builtin() -> Arc<Dataset> {
        Arc::new(Dataset::builtin().unwrap())
    }

    fn controller() -> Controller {
        Controller::open(builtin(), Box::new(MemoryStore::new()), None)
    }

    #[test]
    fn test_starts_on_first_topic() {
        let dataset = builtin();
        let session = Session::new(&dataset, None);
        assert_eq!(session.topic(), "Java");
        assert_eq!(session.index(), 0);
        assert!(!session.revealed());
    }

    #[test]
    fn test_starts_on_requested_topic() {
        let dataset = builtin();
        assert_eq!(Session::new(&dataset, Some("SQL")).topic(), "SQL");
        assert_eq!(Session::new(&dataset, Some("COBOL")).topic(), "Java");
    }

    #[test]
    fn test_select_topic_resets() {
        let dataset = builtin();
        for topic in dataset.topics() {
            let mut session = Session::new(&dataset, None);
            session.next(&dataset);
            session.next(&dataset);
            session.toggle_answer();
            session.select_topic(&dataset, topic);
            assert_eq!(session.topic(), topic);
            assert_eq!(session.index(), 0);
            assert!(!session.revealed());
        }
    }

    #[test]
    fn test_select_unknown_topic_is_ignored() {
        let dataset = builtin();
        let mut session = Session::new(&dataset, None);
        session.next(&dataset);
        session.toggle_answer();
        let before = session.clone();
        session.select_topic(&dataset, "COBOL");
        assert_eq!(session, before);
    }

    #[test]
    fn test_next_then_previous() {
        let dataset = builtin();
        for start in 1..4 {
            let mut session = Session::new(&dataset, None);
            for _ in 0..start {
                session.next(&dataset);
            }
            session.toggle_answer();
            session.next(&dataset);
            assert_eq!(session.index(), start + 1);
            assert!(!session.revealed());
            session.previous();
            assert_eq!(session.index(), start);
            assert!(!session.revealed());
        }
    }

    #[test]
    fn test_boundaries_are_no_ops() {
        let dataset = builtin();
        let mut session = Session::new(&dataset, None);
        session.toggle_answer();
        session.previous();
        assert_eq!(session.index(), 0);
        // A no-op leaves the answer showing.
        assert!(session.revealed());
        for _ in 0..10 {
            session.next(&dataset);
        }
        assert_eq!(session.index(), 4);
        assert!(session.is_last(&dataset));
    }

    #[test]
    fn test_toggle_answer() {
        let dataset = builtin();
        let mut session = Session::new(&dataset, None);
        session.next(&dataset);
        session.toggle_answer();
        assert!(session.revealed());
        assert_eq!(session.index(), 1);
        session.toggle_answer();
        assert!(!session.revealed());
    }

    #[test]
    fn test_shuffle_stays_in_range() {
        let dataset = builtin();
        let mut rng = StdRng::seed_from_u64(42);
        let mut session = Session::new(&dataset, Some("DSA"));
        let mut seen = [false; 5];
        for _ in 0..200 {
            session.toggle_answer();
            session.shuffle(&dataset, &mut rng);
            assert!(session.index() < 5);
            assert!(!session.revealed());
            seen[session.index()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_shuffle_single_card_topic() -> Fallible<()> {
        let card = Card::new(CardId::new("only"), "Q", "A");
        let dataset = Dataset::new(vec![Topic::new("One", None, vec![card])])?;
        let mut session = Session::new(&dataset, None);
        session.shuffle(&dataset, &mut StdRng::seed_from_u64(7));
        assert_eq!(session.index(), 0);
        Ok(())
    }

    #[test]
    fn test_mark_current_persists() -> Fallible<()> {
        let dataset = builtin();
        let mut controller = controller();
        controller.apply(Event::Next);
        controller.apply(Event::ToggleAnswer);
        controller.apply(Event::Mark(Status::Known));
        // Navigation state is untouched.
        assert_eq!(controller.session().index(), 1);
        assert!(controller.session().revealed());
        assert_eq!(controller.current_status(), Status::Known);
        let saved = controller.store.get(PROGRESS_KEY)?;
        assert_eq!(saved, Some(r#"{"java-2":"known"}"#.to_string()));
        assert_eq!(dataset.cards("Java")[1].id().as_str(), "java-2");
        Ok(())
    }

    #[test]
    fn test_mark_last_write_wins() {
        let mut controller = controller();
        controller.apply(Event::Mark(Status::Known));
        controller.apply(Event::Mark(Status::Revise));
        assert_eq!(controller.current_status(), Status::Revise);
        assert_eq!(controller.stats(), Stats { known: 0, revise: 1 });
    }

    #[test]
    fn test_open_hydrates_progress() -> Fallible<()> {
        let mut store = MemoryStore::new();
        store.set(PROGRESS_KEY, r#"{"java-1":"revise","sql-1":"known"}"#)?;
        let controller = Controller::open(builtin(), Box::new(store), None);
        assert_eq!(controller.current_status(), Status::Revise);
        assert_eq!(controller.stats(), Stats { known: 0, revise: 1 });
        Ok(())
    }

    #[test]
    fn test_open_with_malformed_progress() -> Fallible<()> {
        let mut store = MemoryStore::new();
        store.set(PROGRESS_KEY, "derp")?;
        let controller = Controller::open(builtin(), Box::new(store), None);
        assert!(controller.progress().is_empty());
        Ok(())
    }

    #[test]
    fn test_java_walkthrough() {
        let mut controller = controller();
        assert_eq!(controller.session().topic(), "Java");
        assert_eq!(controller.dataset().cards("Java").len(), 5);
        for _ in 0..4 {
            controller.apply(Event::Next);
        }
        assert_eq!(controller.session().index(), 4);
        controller.apply(Event::Next);
        assert_eq!(controller.session().index(), 4);
        controller.apply(Event::Mark(Status::Known));
        assert_eq!(controller.stats(), Stats { known: 1, revise: 0 });
        controller.apply(Event::ToggleAnswer);
        controller.apply(Event::SelectTopic("SQL".to_string()));
        assert_eq!(controller.session().topic(), "SQL");
        assert_eq!(controller.session().index(), 0);
        assert!(!controller.session().revealed());
        assert_eq!(controller.dataset().cards("SQL").len(), 5);
        assert_eq!(controller.stats(), Stats { known: 0, revise: 0 });
    }
}

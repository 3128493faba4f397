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


use std::env::current_dir;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::dataset::Dataset;
use crate::dataset::load_deck;
use crate::db::SqliteStore;
use crate::error::Fallible;
use crate::error::fail;

/// The name of the progress database inside the data directory.
const DB_FILE_NAME: &str = "flashdeck.db";

/// A loaded dataset together with the location of its progress database.
pub struct Collection {
    pub dataset: Arc<Dataset>,
    pub db_path: PathBuf,
}

impl Collection {
    /// Load the deck at `deck`, or the built-in deck if none is given.
    /// Progress lives in `data_dir`, or the current directory.
    pub fn new(deck: Option<String>, data_dir: Option<String>) -> Fallible<Self> {
        let directory: PathBuf = match data_dir {
            Some(dir) => PathBuf::from(dir),
            None => current_dir()?,
        };
        let directory = if directory.is_dir() {
            directory.canonicalize()?
        } else {
            return fail("directory does not exist.");
        };

        let dataset = {
            log::debug!("Loading deck...");
            let start = Instant::now();
            let dataset = match deck {
                Some(path) => load_deck(&PathBuf::from(path))?,
                None => Dataset::builtin()?,
            };
            let end = Instant::now();
            let duration = end.duration_since(start).as_millis();
            log::debug!(
                "Deck loaded in {duration}ms: {} topics, {} cards.",
                dataset.topics().len(),
                dataset.card_count()
            );
            dataset
        };

        Ok(Self {
            dataset: Arc::new(dataset),
            db_path: directory.join(DB_FILE_NAME),
        })
    }

    pub fn open_store(&self) -> Fallible<SqliteStore> {
        log::debug!("Opening {}.", self.db_path.display());
        SqliteStore::new(&self.db_path)
    }
}

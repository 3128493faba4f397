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


use clap::Parser;

use crate::cmd::check::check_deck;
use crate::cmd::stats::print_deck_stats;
use crate::cmd::study::StudyOptions;
use crate::cmd::study::study;
use crate::error::Fallible;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Study flashcards in the browser.
    Study {
        /// Path to a deck file or a directory of deck files. Defaults to the
        /// built-in deck.
        #[arg(long)]
        deck: Option<String>,
        /// Directory holding the progress database. Defaults to the current
        /// directory.
        #[arg(long)]
        db: Option<String>,
        /// The topic to start on.
        #[arg(long)]
        topic: Option<String>,
        /// The port to serve on.
        #[arg(long, default_value_t = 8000)]
        port: u16,
        /// Don't save progress.
        #[arg(long)]
        ephemeral: bool,
        /// Don't open the browser.
        #[arg(long)]
        no_open: bool,
    },
    /// Print per-topic progress as JSON.
    Stats {
        /// Path to a deck file or a directory of deck files.
        #[arg(long)]
        deck: Option<String>,
        /// Directory holding the progress database.
        #[arg(long)]
        db: Option<String>,
        /// Only print this topic.
        #[arg(long)]
        topic: Option<String>,
    },
    /// Check that a deck loads.
    Check {
        /// Path to a deck file or a directory of deck files.
        #[arg(long)]
        deck: String,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Study {
            deck,
            db,
            topic,
            port,
            ephemeral,
            no_open,
        } => {
            let options = StudyOptions {
                deck,
                data_dir: db,
                topic,
                port,
                ephemeral,
                open_browser: !no_open,
            };
            study(options).await
        }
        Command::Stats { deck, db, topic } => print_deck_stats(deck, db, topic),
        Command::Check { deck } => check_deck(&deck),
    }
}

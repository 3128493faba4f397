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


use axum::Form;
use axum::extract::State;
use axum::response::Redirect;
use serde::Deserialize;

use crate::cmd::study::state::ServerState;
use crate::session::Event;
use crate::types::status::Status;

#[derive(Debug, Deserialize, PartialEq)]
enum Action {
    Select,
    Previous,
    Next,
    Shuffle,
    Toggle,
    Known,
    Revise,
}

#[derive(Deserialize)]
pub struct FormData {
    action: Action,
    topic: Option<String>,
}

impl FormData {
    fn into_event(self) -> Option<Event> {
        let event = match self.action {
            Action::Select => Event::SelectTopic(self.topic?),
            Action::Previous => Event::Previous,
            Action::Next => Event::Next,
            Action::Shuffle => Event::Shuffle,
            Action::Toggle => Event::ToggleAnswer,
            Action::Known => Event::Mark(Status::Known),
            Action::Revise => Event::Mark(Status::Revise),
        };
        Some(event)
    }
}

pub async fn post_handler(
    State(state): State<ServerState>,
    Form(form): Form<FormData>,
) -> Redirect {
    match form.into_event() {
        Some(event) => {
            let mut controller = state.mutable.lock().unwrap();
            controller.apply(event);
        }
        None => {
            log::error!("Select action without a topic.");
        }
    }
    Redirect::to("/")
}

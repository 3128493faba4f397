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


use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use maud::Markup;
use maud::html;

use crate::cmd::study::state::ServerState;
use crate::cmd::study::template::page_template;
use crate::session::Controller;
use crate::types::status::Status;

pub async fn get_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    let controller = state.mutable.lock().unwrap();
    let html = page_template(render_study(&controller));
    (StatusCode::OK, Html(html.into_string()))
}

pub fn render_study(controller: &Controller) -> Markup {
    html! {
        div.root {
            header {
                h1 { "Interview Flashcards" }
                p.subtitle { "Master your technical interview preparation" }
            }
            (render_topic_selector(controller))
            (render_card(controller))
            (render_stats(controller))
            footer {
                p { "Your progress is saved automatically." }
            }
        }
    }
}

fn render_topic_selector(controller: &Controller) -> Markup {
    let current = controller.session().topic();
    html! {
        form.topics action="/" method="post" {
            label for="topic-select" { "Select Topic" }
            select id="topic-select" name="topic" {
                @for topic in controller.dataset().all_topics() {
                    option value=(topic.name()) selected[topic.name() == current] {
                        (topic.label())
                    }
                }
            }
            input id="select" type="submit" name="action" value="Select";
        }
    }
}

fn render_card(controller: &Controller) -> Markup {
    let session = controller.session();
    let dataset = controller.dataset();
    let card = match controller.current_card() {
        Some(card) => card,
        None => {
            return html! {
                div.card {
                    p.empty { "This topic has no cards." }
                }
            };
        }
    };
    let total = dataset.cards(session.topic()).len();
    let status = controller.current_status();
    let first = session.is_first();
    let last = session.is_last(dataset);
    html! {
        div.card {
            div.header {
                span.progress {
                    (format!("Card {} of {}", session.index() + 1, total))
                }
                @if let Some(label) = status.label() {
                    span class=(format!("badge {status}")) { (label) }
                }
            }
            div.content {
                h2.question .rich-text {
                    (card.html_front())
                }
                @if session.revealed() {
                    div.answer .rich-text {
                        (card.html_back())
                    }
                }
            }
            form.controls action="/" method="post" {
                button id="toggle" type="submit" name="action" value="Toggle" {
                    @if session.revealed() { "Hide Answer" } @else { "Show Answer" }
                }
                div.navigation {
                    button id="previous" type="submit" name="action" value="Previous" disabled[first] {
                        "Previous"
                    }
                    button id="shuffle" type="submit" name="action" value="Shuffle" {
                        "Shuffle"
                    }
                    button id="next" type="submit" name="action" value="Next" disabled[last] {
                        "Next"
                    }
                }
                div.marks {
                    button id="known" type="submit" name="action" value="Known"
                        class=[(status == Status::Known).then_some("active")] {
                        "Know it"
                    }
                    button id="revise" type="submit" name="action" value="Revise"
                        class=[(status == Status::Revise).then_some("active")] {
                        "Revise later"
                    }
                }
            }
        }
    }
}

fn render_stats(controller: &Controller) -> Markup {
    let stats = controller.stats();
    html! {
        div.stats {
            h3 { "Progress Stats" }
            div.counts {
                div.count.known {
                    div.value { (stats.known) }
                    div.name { "Known" }
                }
                div.count.revise {
                    div.value { (stats.revise) }
                    div.name { "Revise Later" }
                }
            }
        }
    }
}

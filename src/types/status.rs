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


use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Serialize;

/// The study status of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The user knows the answer.
    Known,
    /// The user wants to see the card again.
    Revise,
    /// The card has not been marked. Never stored.
    #[default]
    #[serde(skip)]
    Unset,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Known => "known",
            Status::Revise => "revise",
            Status::Unset => "unset",
        }
    }

    /// The label shown on a card's status badge.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Status::Known => Some("Known"),
            Status::Revise => Some("Revise Later"),
            Status::Unset => None,
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

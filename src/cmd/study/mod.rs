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


mod get;
mod post;
pub mod server;
mod state;
mod template;

use crate::cmd::study::server::ServerConfig;
use crate::cmd::study::server::start_server;
use crate::collection::Collection;
use crate::error::Fallible;
use crate::session::Controller;
use crate::storage::KeyValueStore;
use crate::storage::MemoryStore;

pub struct StudyOptions {
    pub deck: Option<String>,
    pub data_dir: Option<String>,
    pub topic: Option<String>,
    pub port: u16,
    /// Keep progress in memory only.
    pub ephemeral: bool,
    pub open_browser: bool,
}

pub async fn study(options: StudyOptions) -> Fallible<()> {
    let coll = Collection::new(options.deck, options.data_dir)?;
    let store: Box<dyn KeyValueStore> = if options.ephemeral {
        log::info!("Progress will not be saved.");
        Box::new(MemoryStore::new())
    } else {
        Box::new(coll.open_store()?)
    };
    let controller = Controller::open(coll.dataset.clone(), store, options.topic.as_deref());
    let config = ServerConfig {
        port: options.port,
        open_browser: options.open_browser,
    };
    start_server(controller, config).await
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::time::Duration;

    use reqwest::StatusCode;
    use tokio::net::TcpStream;
    use tokio::spawn;
    use tokio::time::sleep;

    use super::*;
    use crate::db::SqliteStore;
    use crate::helper::create_tmp_directory;
    use crate::progress::Progress;
    use crate::types::card::CardId;
    use crate::types::status::Status;

    async fn spawn_server(directory: &Path) -> Fallible<u16> {
        let port = portpicker::pick_unused_port().unwrap();
        let options = StudyOptions {
            deck: None,
            data_dir: Some(directory.display().to_string()),
            topic: None,
            port,
            ephemeral: false,
            open_browser: false,
        };
        spawn(async move { study(options).await });
        loop {
            if let Ok(stream) = TcpStream::connect(format!("127.0.0.1:{port}")).await {
                drop(stream);
                break;
            }
            sleep(Duration::from_millis(1)).await;
        }
        Ok(port)
    }

    async fn act(port: u16, form: &[(&str, &str)]) -> Fallible<String> {
        let response = reqwest::Client::new()
            .post(format!("http://127.0.0.1:{port}/"))
            .form(form)
            .send()
            .await
            .unwrap();
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );
        Ok(response.text().await.unwrap())
    }

    #[tokio::test]
    async fn test_study_on_non_existent_directory() {
        let options = StudyOptions {
            deck: None,
            data_dir: Some("./derpherp".to_string()),
            topic: None,
            port: 0,
            ephemeral: true,
            open_browser: false,
        };
        let err = study(options).await.err().unwrap();
        assert_eq!(err.to_string(), "error: directory does not exist.");
    }

    #[tokio::test]
    async fn test_static_endpoints() -> Fallible<()> {
        let directory = create_tmp_directory()?;
        let port = spawn_server(&directory).await?;
        let base = format!("http://127.0.0.1:{port}");

        let response = reqwest::get(format!("{base}/style.css")).await.unwrap();
        assert!(response.status().is_success());
        assert_eq!(response.headers().get("content-type").unwrap(), "text/css");

        let response = reqwest::get(format!("{base}/script.js")).await.unwrap();
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/javascript"
        );

        let response = reqwest::get(format!("{base}/herp-derp")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = reqwest::get(format!("{base}/")).await.unwrap();
        assert!(response.status().is_success());
        let html = response.text().await.unwrap();
        assert!(html.contains("Card 1 of 5"));
        Ok(())
    }

    #[tokio::test]
    async fn test_e2e() -> Fallible<()> {
        let directory = create_tmp_directory()?;
        let port = spawn_server(&directory).await?;

        let html = act(port, &[("action", "Toggle")]).await?;
        assert!(html.contains("Hide Answer"));
        assert!(html.contains("JDK (Java Development Kit)"));

        for _ in 0..5 {
            act(port, &[("action", "Next")]).await?;
        }
        let html = act(port, &[("action", "Known")]).await?;
        assert!(html.contains("Card 5 of 5"));
        assert!(html.contains(r#"<span class="badge known">Known</span>"#));

        let html = act(port, &[("action", "Previous")]).await?;
        assert!(html.contains("Card 4 of 5"));

        let html = act(port, &[("action", "Shuffle")]).await?;
        assert!(html.contains("Show Answer"));

        let html = act(port, &[("action", "Select"), ("topic", "SQL")]).await?;
        assert!(html.contains("Card 1 of 5"));
        assert!(html.contains("What is the difference between WHERE and HAVING clauses?"));

        // Unknown topics leave the session alone.
        let html = act(port, &[("action", "Select"), ("topic", "COBOL")]).await?;
        assert!(html.contains(r#"<option value="SQL" selected>SQL</option>"#));

        act(port, &[("action", "Revise")]).await?;

        // Progress was written to the database.
        let store = SqliteStore::new(&directory.join("flashdeck.db"))?;
        let progress = Progress::load(&store);
        assert_eq!(progress.status(&CardId::new("java-5")), Status::Known);
        assert_eq!(progress.status(&CardId::new("sql-1")), Status::Revise);
        Ok(())
    }

    #[tokio::test]
    async fn test_bad_action() -> Fallible<()> {
        let directory = create_tmp_directory()?;
        let port = spawn_server(&directory).await?;
        let response = reqwest::Client::new()
            .post(format!("http://127.0.0.1:{port}/"))
            .form(&[("action", "Derp")])
            .send()
            .await
            .unwrap();
        assert!(response.status().is_client_error());
        Ok(())
    }

    #[tokio::test]
    async fn test_progress_survives_restart() -> Fallible<()> {
        let directory = create_tmp_directory()?;
        {
            let mut store = SqliteStore::new(&directory.join("flashdeck.db"))?;
            Progress::empty()
                .mark(&CardId::new("java-1"), Status::Revise)
                .save(&mut store);
        }
        let port = spawn_server(&directory).await?;
        let html = reqwest::get(format!("http://127.0.0.1:{port}/"))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert!(html.contains(r#"<span class="badge revise">Revise Later</span>"#));
        Ok(())
    }
}

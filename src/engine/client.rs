use std::io::Read;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::model::wizard::StatusPayload;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("story stream read failed: {0}")]
    Stream(#[from] std::io::Error),
}

/// The four endpoints the game server exposes. The engine only talks to
/// this trait; tests drive it with an in-memory fake.
pub trait GameServer: Send {
    /// `POST /start_game`. The body only matters insofar as it is JSON.
    fn start_game(&self) -> Result<(), ServerError>;

    /// `GET /get_wizard_status`.
    fn wizard_status(&self) -> Result<StatusPayload, ServerError>;

    /// `POST /get_story` with `choice=<index>`; `-1` means no prior choice.
    /// Returns the raw plain-text body for incremental reading.
    fn open_story(&self, choice: i32) -> Result<Box<dyn Read + Send>, ServerError>;

    /// `GET /get_choices`.
    fn fetch_choices(&self) -> Result<Vec<String>, ServerError>;
}

#[derive(Deserialize)]
struct ChoicesPayload {
    choices: Vec<String>,
}

/// Blocking HTTP implementation against the real server.
pub struct HttpGameServer {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpGameServer {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl GameServer for HttpGameServer {
    fn start_game(&self) -> Result<(), ServerError> {
        self.client
            .post(self.url("/start_game"))
            .send()?
            .error_for_status()?
            .json::<serde_json::Value>()?;
        Ok(())
    }

    fn wizard_status(&self) -> Result<StatusPayload, ServerError> {
        let payload = self
            .client
            .get(self.url("/get_wizard_status"))
            .send()?
            .error_for_status()?
            .json::<StatusPayload>()?;
        Ok(payload)
    }

    fn open_story(&self, choice: i32) -> Result<Box<dyn Read + Send>, ServerError> {
        let response = self
            .client
            .post(self.url("/get_story"))
            .form(&[("choice", choice.to_string())])
            .send()?
            .error_for_status()?;
        Ok(Box::new(response))
    }

    fn fetch_choices(&self) -> Result<Vec<String>, ServerError> {
        let payload = self
            .client
            .get(self.url("/get_choices"))
            .send()?
            .error_for_status()?
            .json::<ChoicesPayload>()?;
        Ok(payload.choices)
    }
}

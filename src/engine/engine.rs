use std::sync::mpsc::{Receiver, Sender};

use tracing::{debug, error, warn};

use crate::engine::client::GameServer;
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::engine::stream::ChunkDecoder;

/// Network worker. Owns the server connection and handles one command at a
/// time, so two story streams can never interleave no matter how fast the
/// player clicks.
pub struct Engine<S: GameServer> {
    rx: Receiver<EngineCommand>,
    tx: Sender<EngineResponse>,
    server: S,
}

impl<S: GameServer> Engine<S> {
    pub fn new(rx: Receiver<EngineCommand>, tx: Sender<EngineResponse>, server: S) -> Self {
        Self { rx, tx, server }
    }

    /// Runs until the command channel closes (UI thread gone).
    pub fn run(&mut self) {
        while let Ok(cmd) = self.rx.recv() {
            match cmd {
                EngineCommand::StartGame => self.handle_start(),
                EngineCommand::RefreshStatus => self.handle_status(),
                EngineCommand::RequestStory { cycle, choice } => self.handle_story(cycle, choice),
                EngineCommand::FetchChoices => self.handle_choices(),
            }
        }
    }

    fn handle_start(&self) {
        match self.server.start_game() {
            Ok(()) => {
                let _ = self.tx.send(EngineResponse::GameStarted);
            }
            Err(e) => {
                error!("start_game failed: {e}");
                let _ = self.tx.send(EngineResponse::StartFailed);
            }
        }
    }

    fn handle_status(&self) {
        let payload = match self.server.wizard_status() {
            Ok(p) => p,
            Err(e) => {
                // Status panel keeps its previous contents.
                warn!("wizard status fetch failed: {e}");
                return;
            }
        };

        match payload.into_status() {
            Some(status) => {
                let _ = self.tx.send(EngineResponse::Status(status));
            }
            None => debug!("status payload missing name or health, update skipped"),
        }
    }

    fn handle_story(&self, cycle: u64, choice: i32) {
        let mut reader = match self.server.open_story(choice) {
            Ok(r) => r,
            Err(e) => {
                error!("story request failed (choice {choice}): {e}");
                let _ = self.tx.send(EngineResponse::StoryFailed { cycle });
                return;
            }
        };

        let mut decoder = ChunkDecoder::default();
        let mut buf = [0u8; 8192];

        loop {
            let n = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) => {
                    error!("story stream read failed: {e}");
                    let _ = self.tx.send(EngineResponse::StoryFailed { cycle });
                    return;
                }
            };

            let text = decoder.push(&buf[..n]);
            if !text.is_empty() {
                let _ = self.tx.send(EngineResponse::StoryChunk { cycle, text });
            }

            if decoder.at_capacity() {
                warn!("story stream hit size cap, truncating");
                break;
            }
        }

        let tail = decoder.finish();
        if !tail.is_empty() {
            let _ = self.tx.send(EngineResponse::StoryChunk { cycle, text: tail });
        }

        let _ = self.tx.send(EngineResponse::StoryDone { cycle });
    }

    fn handle_choices(&self) {
        match self.server.fetch_choices() {
            Ok(choices) => {
                let _ = self.tx.send(EngineResponse::Choices(choices));
            }
            // Logged only: the player is left without choices, by contract.
            Err(e) => error!("choices fetch failed: {e}"),
        }
    }
}

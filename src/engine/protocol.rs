use crate::model::wizard::WizardStatus;

/// Sent by the UI thread, handled sequentially by the engine.
#[derive(Debug)]
pub enum EngineCommand {
    StartGame,
    RefreshStatus,
    RequestStory { cycle: u64, choice: i32 },
    FetchChoices,
}

/// Sent by the engine, drained by the UI at the top of every frame.
///
/// Story responses echo the cycle id from their command so the UI can drop
/// anything that belongs to a superseded cycle.
#[derive(Debug)]
pub enum EngineResponse {
    GameStarted,
    StartFailed,
    Status(WizardStatus),
    StoryChunk { cycle: u64, text: String },
    StoryDone { cycle: u64 },
    StoryFailed { cycle: u64 },
    Choices(Vec<String>),
}

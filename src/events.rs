#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    EngineEvent(EngineEvent),
    AppEvent(AppEvent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// Advance the grid by `n` generations
    Advance(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Stop or resume advancing the grid every frame
    TogglePause,

    /// The terminal changed size
    Resize { cols: u16, rows: u16 },

    /// Exit the application
    Exit,
}

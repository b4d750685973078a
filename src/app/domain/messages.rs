use crate::app::infrastructure::timers::TimerToken;

/// Delayed actions the puzzle schedules on itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// End of the red flash after a wrong code.
    FailureFlashElapsed,
    /// The entry UI has faded out; show the riddle.
    RevealRiddle,
    TypewriterTick,
    HideCursor,
    /// End of the inline cue on the settings code field.
    CodeFieldCueElapsed,
    LongPressElapsed,
}

/// Modifier state and character of a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub ctrl: bool,
    pub meta: bool,
    pub key: char,
}

/// All messages that can be sent through the FLTK channel.
/// Each widget callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // Code pad
    CellInput(usize, String),
    CellBackspace(usize),
    CellEnter(usize),
    CellFocused(usize),
    Submit,

    // Reveal gesture
    KeyPressed(KeyChord),
    /// Press on the window background, never on an input, button or selector.
    PressStarted,
    PressCancelled,

    // Settings panel
    OpenSettings,
    CloseSettings,
    PreviewTheme(String),
    SaveSettings,
    ResetSettings,

    Timer(TimerToken, TimerEvent),
    Quit,
}

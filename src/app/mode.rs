/// Top-level view the app is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// The RSVP display with its playback controls.
    Reader,
    /// Typing source text directly.
    TextEntry,
    /// Typing a path to load (plain text or PDF).
    FileEntry,
    /// Statistics dashboard behind the admin gate.
    Admin,
    Quit,
}

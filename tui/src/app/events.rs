#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary button ("Next" / "Get Started").
    Next,
    /// On-screen back button.
    Back,
    Skip,
    /// Esc: pop the back stack, exiting at the root.
    SystemBack,
    MouseClick(u16, u16),
    Resized(u16, u16),
    AttemptQuit,
    Quit,
}

/// Why the notification toast is being closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// Click outside the toast. Ignored, the toast stays open.
    ClickAway,
    /// Auto-hide timer elapsed
    Timeout,
    /// Explicit close button
    Dismissed,
}

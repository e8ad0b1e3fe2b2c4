/// Custom user events for the GUI event loop.
///
/// These events allow the render workers to wake the main UI thread.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// Signals that a new frame or render error may be waiting in a panel adapter.
    ///
    /// Note: Receiving this event does NOT automatically trigger a redraw.
    /// The handler drains the adapters and requests a redraw only if
    /// something was actually shown.
    Wake,
}

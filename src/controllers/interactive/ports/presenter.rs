use crate::controllers::interactive::events::render::RenderEvent;

/// Receives render outcomes for one panel.
///
/// Called from the controller's worker thread, never from the UI thread.
pub trait InteractiveControllerPresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}

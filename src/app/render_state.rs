use crate::engine::{RenderFrame, RenderSink};

/// Latest frame from the playback engine, kept for the next redraw.
#[derive(Debug, Default)]
pub struct RenderState {
    pub frame: RenderFrame,
    /// Progress bar fill in `[0, 1]`
    pub progress: f64,
}

impl RenderState {
    pub fn progress_percent(&self) -> u16 {
        (self.progress.clamp(0.0, 1.0) * 100.0).round() as u16
    }
}

impl RenderSink for RenderState {
    fn render_frame(&mut self, frame: &RenderFrame) {
        self.frame = frame.clone();
        self.progress = frame.progress;
    }

    fn reset_progress(&mut self) {
        self.progress = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::tokenize;

    #[test]
    fn test_render_state_empty() {
        let state = RenderState::default();
        assert!(state.frame.is_blank());
        assert_eq!(state.progress_percent(), 0);
    }

    #[test]
    fn test_render_state_keeps_latest_frame() {
        let words = tokenize("one two three four");
        let mut state = RenderState::default();
        state.render_frame(&RenderFrame::at(&words, 0).unwrap());
        state.render_frame(&RenderFrame::at(&words, 2).unwrap());
        assert_eq!(state.frame.word(), "three");
        assert_eq!(state.progress_percent(), 75);
    }

    #[test]
    fn test_render_state_reset_progress_keeps_word() {
        let words = tokenize("one two");
        let mut state = RenderState::default();
        state.render_frame(&RenderFrame::at(&words, 0).unwrap());
        state.reset_progress();
        assert_eq!(state.frame.word(), "one");
        assert_eq!(state.progress, 0.0);
    }
}

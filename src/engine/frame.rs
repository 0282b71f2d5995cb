use crate::reading::{split_word, WordList};

/// What the display shows for one word.
///
/// `left + anchor + right` is always the word itself. `position` is 1-based;
/// a blank frame has position 0.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderFrame {
    pub left: String,
    pub anchor: String,
    pub right: String,
    /// Fraction of the text shown so far, in `[0, 1]`
    pub progress: f64,
    pub position: usize,
    pub total: usize,
}

impl RenderFrame {
    /// Frame for the word at `cursor`, or `None` past the end of the list.
    pub fn at(words: &WordList, cursor: usize) -> Option<Self> {
        let word = words.get(cursor)?;
        let (left, anchor, right) = split_word(word);
        let total = words.len();

        Some(Self {
            left,
            anchor,
            right,
            progress: (cursor + 1) as f64 / total as f64,
            position: cursor + 1,
            total,
        })
    }

    /// Empty frame shown when there is nothing to read.
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn is_blank(&self) -> bool {
        self.position == 0
    }

    pub fn word(&self) -> String {
        format!("{}{}{}", self.left, self.anchor, self.right)
    }
}

/// Receives every frame the playback engine produces.
pub trait RenderSink {
    fn render_frame(&mut self, frame: &RenderFrame);

    /// Called after a stop or reset, once the reset frame has been rendered.
    fn reset_progress(&mut self) {}
}

/// Sink that keeps every frame, for inspecting playback after the fact.
#[derive(Debug, Default)]
pub struct FrameRecorder {
    pub frames: Vec<RenderFrame>,
    pub progress_resets: usize,
}

impl FrameRecorder {
    pub fn last(&self) -> Option<&RenderFrame> {
        self.frames.last()
    }

    pub fn words(&self) -> Vec<String> {
        self.frames.iter().map(RenderFrame::word).collect()
    }
}

impl RenderSink for FrameRecorder {
    fn render_frame(&mut self, frame: &RenderFrame) {
        self.frames.push(frame.clone());
    }

    fn reset_progress(&mut self) {
        self.progress_resets += 1;
    }
}

use crate::config::QuizConfig;
use crate::store::RecordStore;
use crate::timer::TimerHandle;

pub const CATEGORY_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryEntry {
    pub prompt: String,
    pub answer: String,
    pub teaching: Option<String>,
}

/// One quiz card: an id plus one prompt/answer/teaching entry per category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: u32,
    pub entries: [CategoryEntry; CATEGORY_COUNT],
}

impl Record {
    pub fn entry(&self, index: usize) -> Option<&CategoryEntry> {
        self.entries.get(index)
    }

    pub fn prompt(&self, index: usize) -> Option<&str> {
        self.entry(index).map(|e| e.prompt.as_str())
    }

    pub fn answer(&self, index: usize) -> Option<&str> {
        self.entry(index).map(|e| e.answer.as_str())
    }

    pub fn teaching(&self, index: usize) -> Option<&str> {
        self.entry(index).and_then(|e| e.teaching.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealContent {
    pub category: usize,
    pub answer: String,
    pub teaching: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed(RevealContent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Armed,
    Revealed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrgencyPhase {
    Normal,
    UrgentOn,
    UrgentOff,
    Expired,
}

impl UrgencyPhase {
    pub fn is_blinking(self) -> bool {
        matches!(self, UrgencyPhase::UrgentOn | UrgencyPhase::UrgentOff)
    }
}

#[derive(Debug)]
pub struct QuizSession {
    pub(crate) config: &'static QuizConfig,
    pub(crate) store: RecordStore,
    pub(crate) current_id: Option<u32>,
    pub(crate) active_category: Option<usize>,
    pub(crate) remaining_seconds: u32,
    pub(crate) reveal: RevealState,
    pub(crate) countdown: Option<TimerHandle>,
    pub(crate) blink: Option<TimerHandle>,
    pub(crate) blink_on: bool,
    pub(crate) next_timer_id: u64,
    pub jump_buffer: String,
    pub jump_input_active: bool,
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Running,
    Quit,
}

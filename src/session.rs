use crate::config::{DEFAULT_CONFIG, QuizConfig};
use crate::logger;
use crate::models::{
    AppState, CATEGORY_COUNT, Direction, Phase, QuizSession, Record, RevealContent, RevealState,
    UrgencyPhase,
};
use crate::store::RecordStore;
use crate::timer::{TimerHandle, TimerId, TimerKind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::seq::SliceRandom;

impl QuizSession {
    pub fn new(store: RecordStore) -> Self {
        Self::with_config(store, &DEFAULT_CONFIG)
    }

    pub fn with_config(store: RecordStore, config: &'static QuizConfig) -> Self {
        let current_id = store.first().map(|r| r.id);
        Self {
            config,
            store,
            current_id,
            active_category: None,
            remaining_seconds: config.countdown_seconds,
            reveal: RevealState::Hidden,
            countdown: None,
            blink: None,
            blink_on: false,
            next_timer_id: 0,
            jump_buffer: String::new(),
            jump_input_active: false,
        }
    }

    pub fn config(&self) -> &'static QuizConfig {
        self.config
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn current_id(&self) -> Option<u32> {
        self.current_id
    }

    pub fn current_record(&self) -> Option<&Record> {
        self.current_id.and_then(|id| self.store.find(id))
    }

    pub fn active_category(&self) -> Option<usize> {
        self.active_category
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn reveal_state(&self) -> &RevealState {
        &self.reveal
    }

    pub fn reveal_content(&self) -> Option<&RevealContent> {
        match &self.reveal {
            RevealState::Revealed(content) => Some(content),
            RevealState::Hidden => None,
        }
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self.reveal, RevealState::Revealed(_))
    }

    pub fn countdown_handle(&self) -> Option<TimerHandle> {
        self.countdown
    }

    pub fn blink_handle(&self) -> Option<TimerHandle> {
        self.blink
    }

    pub fn phase(&self) -> Phase {
        if self.is_revealed() {
            Phase::Revealed
        } else if self.active_category.is_some() {
            Phase::Armed
        } else {
            Phase::Idle
        }
    }

    pub fn urgency(&self) -> UrgencyPhase {
        if self.active_category.is_some() && self.remaining_seconds == 0 {
            UrgencyPhase::Expired
        } else if self.blink.is_some() {
            if self.blink_on {
                UrgencyPhase::UrgentOn
            } else {
                UrgencyPhase::UrgentOff
            }
        } else {
            UrgencyPhase::Normal
        }
    }

    /// Jumps to the record with exactly this id. Unknown ids are ignored, as
    /// is any navigation while a category is active.
    pub fn select_record(&mut self, id: u32) {
        if self.active_category.is_some() || !self.store.contains(id) {
            return;
        }
        self.show_record(id);
    }

    pub fn go_to_adjacent(&mut self, direction: Direction) {
        if self.active_category.is_some() {
            return;
        }
        self.step(direction);
    }

    /// Jumps to a random record other than the current one.
    pub fn random_record(&mut self) {
        if self.active_category.is_some() || self.store.len() < 2 {
            return;
        }
        let candidates: Vec<u32> = self
            .store
            .records()
            .iter()
            .map(|r| r.id)
            .filter(|id| Some(*id) != self.current_id)
            .collect();
        if let Some(id) = candidates.choose(&mut rand::thread_rng()) {
            self.show_record(*id);
        }
    }

    /// First press arms a category, a second press on the same category
    /// reveals it, a press on another category re-arms with a fresh countdown.
    /// Indices outside the five categories are ignored.
    pub fn press_category(&mut self, index: usize) {
        if index >= CATEGORY_COUNT || self.is_revealed() || self.current_record().is_none() {
            return;
        }
        match self.active_category {
            Some(active) if active == index => self.reveal(index),
            _ => self.arm(index),
        }
    }

    pub fn tick(&mut self) {
        if self.phase() != Phase::Armed {
            return;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            if let Some(index) = self.active_category {
                self.reveal(index);
            }
        } else {
            self.sync_blink();
        }
    }

    pub fn toggle_blink(&mut self) {
        if self.blink.is_some() {
            self.blink_on = !self.blink_on;
        }
    }

    /// Routes a timer firing to the operation its handle drives. Firings from
    /// cancelled handles are dropped; returns whether the firing was live.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if self.countdown.is_some_and(|h| h.id == id) {
            self.tick();
            true
        } else if self.blink.is_some_and(|h| h.id == id) {
            self.toggle_blink();
            true
        } else {
            logger::log(&format!("Ignoring firing from cancelled timer {}", id.0));
            false
        }
    }

    /// Closes the reveal and moves on to the next record.
    pub fn dismiss_reveal(&mut self) {
        if !self.is_revealed() {
            return;
        }
        self.reset_to_idle();
        self.step(Direction::Next);
    }

    pub fn open_jump_input(&mut self) {
        if self.phase() == Phase::Idle {
            self.jump_input_active = true;
        }
    }

    pub fn close_jump_input(&mut self) {
        self.jump_input_active = false;
        self.jump_buffer.clear();
    }

    pub fn jump_input_push(&mut self, c: char) {
        if self.active_category.is_none() && c.is_ascii_digit() {
            self.jump_buffer.push(c);
        }
    }

    pub fn jump_input_backspace(&mut self) {
        self.jump_buffer.pop();
    }

    pub fn submit_jump(&mut self) {
        if self.active_category.is_some() || self.jump_buffer.is_empty() {
            return;
        }
        if let Ok(id) = self.jump_buffer.parse::<u32>() {
            self.select_record(id);
        }
        self.jump_buffer.clear();
    }

    fn step(&mut self, direction: Direction) {
        let len = self.store.len();
        if len == 0 {
            return;
        }
        let position = self
            .current_id
            .and_then(|id| self.store.position_of(id))
            .unwrap_or(0);
        let target = match direction {
            Direction::Previous => (position + len - 1) % len,
            Direction::Next => (position + 1) % len,
        };
        if let Some(id) = self.store.get(target).map(|r| r.id) {
            self.show_record(id);
        }
    }

    fn show_record(&mut self, id: u32) {
        self.current_id = Some(id);
        self.reset_to_idle();
        logger::log(&format!("Showing record #{}", id));
    }

    fn reset_to_idle(&mut self) {
        self.active_category = None;
        self.remaining_seconds = self.config.countdown_seconds;
        self.reveal = RevealState::Hidden;
        self.countdown = None;
        self.sync_blink();
    }

    fn arm(&mut self, index: usize) {
        self.active_category = Some(index);
        self.remaining_seconds = self.config.countdown_seconds;
        self.countdown = Some(self.new_timer(TimerKind::Countdown));
        // Category changes always drop the current blink cycle.
        self.blink = None;
        self.sync_blink();
    }

    fn reveal(&mut self, index: usize) {
        let Some(entry) = self.current_record().and_then(|r| r.entry(index)) else {
            return;
        };
        self.reveal = RevealState::Revealed(RevealContent {
            category: index,
            answer: entry.answer.clone(),
            teaching: entry.teaching.clone(),
        });
        self.countdown = None;
        self.sync_blink();
    }

    /// Starts or stops the blink timer depending on whether the countdown is
    /// inside the urgency band.
    fn sync_blink(&mut self) {
        let in_band = self.phase() == Phase::Armed
            && (1..=self.config.urgency_threshold).contains(&self.remaining_seconds);
        if in_band {
            if self.blink.is_none() {
                self.blink = Some(self.new_timer(TimerKind::Blink));
                self.blink_on = true;
            }
        } else {
            self.blink = None;
            self.blink_on = false;
        }
    }

    fn new_timer(&mut self, kind: TimerKind) -> TimerHandle {
        self.next_timer_id += 1;
        let period = match kind {
            TimerKind::Countdown => self.config.tick_period,
            TimerKind::Blink => self.config.blink_period,
        };
        TimerHandle {
            id: TimerId(self.next_timer_id),
            kind,
            period,
        }
    }
}

fn category_key(c: char) -> Option<usize> {
    c.to_digit(10)
        .filter(|d| (1..=CATEGORY_COUNT as u32).contains(d))
        .map(|d| d as usize - 1)
}

pub fn handle_quiz_input(session: &mut QuizSession, key: KeyEvent, app_state: &mut AppState) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        *app_state = AppState::Quit;
        return;
    }

    // While the id box is open every character is typed into it
    if key.code == KeyCode::Char('q') && !session.jump_input_active {
        *app_state = AppState::Quit;
        return;
    }

    if session.is_revealed() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            session.dismiss_reveal();
        }
        return;
    }

    if session.jump_input_active {
        match key.code {
            KeyCode::Char(c) => session.jump_input_push(c),
            KeyCode::Backspace => session.jump_input_backspace(),
            KeyCode::Enter => {
                session.submit_jump();
                session.close_jump_input();
            }
            KeyCode::Esc => session.close_jump_input(),
            _ => {}
        }
        return;
    }

    match (session.phase(), key.code) {
        (Phase::Idle, KeyCode::Left | KeyCode::Char('h')) => {
            session.go_to_adjacent(Direction::Previous)
        }
        (Phase::Idle, KeyCode::Right | KeyCode::Char('l')) => {
            session.go_to_adjacent(Direction::Next)
        }
        (Phase::Idle, KeyCode::Char('r')) => session.random_record(),
        (Phase::Idle, KeyCode::Char('g' | '/')) => session.open_jump_input(),
        (Phase::Armed, KeyCode::Enter | KeyCode::Char(' ')) => {
            if let Some(index) = session.active_category {
                session.press_category(index);
            }
        }
        (_, KeyCode::Char(c)) => {
            if let Some(index) = category_key(c) {
                session.press_category(index);
            }
        }
        _ => {}
    }
}

use category_flashcards::{
    AppPaths, AppState, InputEvent, QuizSession, RecordStore, TimerDriver, TimerId, TimerKind,
    draw_app, handle_quiz_input, logger, spawn_input_worker,
};
use crossbeam_channel::{select, unbounded};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;

fn main() -> io::Result<()> {
    let paths = AppPaths::from_env(std::env::args().skip(1));
    logger::init(&paths.log_file);

    let store = RecordStore::load_or_empty(&paths.data_file);
    let mut session = QuizSession::new(store);

    enable_raw_mode()?;
    let result = run_terminal(&mut session);
    let restored = restore_terminal();

    result.and(restored)
}

fn run_terminal(session: &mut QuizSession) -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    run_quiz(&mut terminal, session)
}

/// Runs on every exit path once raw mode is on, including partial setup.
fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, Show);
    raw.and(screen)
}

fn run_quiz<B: Backend>(terminal: &mut Terminal<B>, session: &mut QuizSession) -> io::Result<()> {
    let (input_tx, input_rx) = unbounded();
    let _input_worker = spawn_input_worker(input_tx)?;

    let mut timers = TimerDriver::new();
    let mut app_state = AppState::Running;

    while app_state == AppState::Running {
        timers.sync(session.countdown_handle(), session.blink_handle());
        terminal.draw(|f| draw_app(f, session))?;

        let (countdown_id, countdown_rx) = timers.receiver(TimerKind::Countdown);
        let (blink_id, blink_rx) = timers.receiver(TimerKind::Blink);

        select! {
            recv(input_rx) -> msg => match msg {
                Ok(InputEvent::Key(key)) => handle_quiz_input(session, key, &mut app_state),
                Ok(InputEvent::Resize) => {}
                Err(_) => {
                    logger::log("Input worker stopped, leaving quiz");
                    app_state = AppState::Quit;
                }
            },
            recv(countdown_rx) -> _ => fire(session, countdown_id),
            recv(blink_rx) -> _ => fire(session, blink_id),
        }
    }

    Ok(())
}

fn fire(session: &mut QuizSession, id: Option<TimerId>) {
    if let Some(id) = id {
        session.on_timer(id);
    }
}

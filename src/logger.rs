use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

struct LogFile {
    path: PathBuf,
    file: File,
}

lazy_static::lazy_static! {
    static ref LOGGER: Mutex<Option<LogFile>> = Mutex::new(None);
}

/// Opens the log file. Only the first successful call takes effect.
pub fn init(path: &Path) {
    let Ok(mut logger) = LOGGER.lock() else {
        return;
    };
    if logger.is_none()
        && let Ok(file) = OpenOptions::new().create(true).append(true).open(path)
    {
        *logger = Some(LogFile {
            path: path.to_path_buf(),
            file,
        });
    }
}

/// Path of the open log file, if `init` succeeded.
pub fn log_path() -> Option<PathBuf> {
    LOGGER
        .lock()
        .ok()
        .and_then(|guard| guard.as_ref().map(|log| log.path.clone()))
}

pub fn log(message: &str) {
    if let Ok(mut guard) = LOGGER.lock()
        && let Some(log) = guard.as_mut()
    {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let _ = writeln!(log.file, "[{}] {}", timestamp, message);
    }
}

/// Every test shares one process-wide log file, so they all open it through
/// here and read back from whatever path won.
#[cfg(test)]
pub(crate) fn init_for_tests() -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "category-flashcards-test-{}.log",
        std::process::id()
    ));
    init(&path);
    log_path().unwrap_or(path)
}

#[cfg(test)]
pub(crate) fn read_test_log() -> String {
    std::fs::read_to_string(init_for_tests()).unwrap_or_default()
}

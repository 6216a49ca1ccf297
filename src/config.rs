use ratatui::style::Color;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_DATA_FILE: &str = "questions.csv";
pub const DEFAULT_LOG_FILE: &str = "quiz_debug.log";

#[derive(Debug)]
pub struct Category {
    pub label: &'static str,
    pub color: Color,
}

#[derive(Debug)]
pub struct QuizConfig {
    pub title: &'static str,
    pub title_colors: &'static [Color],
    pub categories: [Category; 5],
    pub countdown_seconds: u32,
    /// Remaining seconds at or below which the countdown blinks.
    pub urgency_threshold: u32,
    pub tick_period: Duration,
    pub blink_period: Duration,
}

impl QuizConfig {
    pub fn category(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }
}

const PASTEL_COLORS: [Color; 6] = [
    Color::Rgb(255, 179, 186), // red
    Color::Rgb(186, 255, 201), // green
    Color::Rgb(186, 225, 255), // blue
    Color::Rgb(255, 255, 186), // yellow
    Color::Rgb(224, 187, 228), // purple
    Color::Rgb(255, 223, 186), // orange
];

pub const DEFAULT_CONFIG: QuizConfig = QuizConfig {
    title: "聖經知識遊戲",
    title_colors: &PASTEL_COLORS,
    categories: [
        Category {
            label: "教會生活",
            color: Color::Rgb(76, 175, 80),
        },
        Category {
            label: "使命旅程",
            color: Color::Rgb(229, 57, 53),
        },
        Category {
            label: "天國君王",
            color: Color::Rgb(142, 68, 173),
        },
        Category {
            label: "律法之約",
            color: Color::Rgb(141, 110, 99),
        },
        Category {
            label: "預言啟示",
            color: Color::Rgb(30, 136, 229),
        },
    ],
    countdown_seconds: 60,
    urgency_threshold: 5,
    tick_period: Duration::from_secs(1),
    blink_period: Duration::from_millis(500),
};

#[derive(Debug, Clone, PartialEq)]
pub struct AppPaths {
    pub data_file: PathBuf,
    pub log_file: PathBuf,
}

impl AppPaths {
    /// Data file: first argument, then `QUIZ_CSV`, then `questions.csv`.
    /// Log file: `QUIZ_LOG`, then `quiz_debug.log`.
    pub fn from_env(mut args: impl Iterator<Item = String>) -> Self {
        let data_file = non_empty(args.next())
            .or_else(|| non_empty(std::env::var("QUIZ_CSV").ok()))
            .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());
        let log_file =
            std::env::var("QUIZ_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        Self {
            data_file: PathBuf::from(data_file),
            log_file: PathBuf::from(log_file),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_five_labeled_categories() {
        assert_eq!(DEFAULT_CONFIG.categories.len(), 5);
        for category in &DEFAULT_CONFIG.categories {
            assert!(!category.label.is_empty());
        }
        assert!(DEFAULT_CONFIG.category(5).is_none());
    }

    #[test]
    fn test_default_timings() {
        assert_eq!(DEFAULT_CONFIG.countdown_seconds, 60);
        assert_eq!(DEFAULT_CONFIG.urgency_threshold, 5);
        assert_eq!(DEFAULT_CONFIG.blink_period, Duration::from_millis(500));
    }

    #[test]
    fn test_paths_prefer_first_argument() {
        let paths = AppPaths::from_env(vec!["deck.csv".to_string()].into_iter());
        assert_eq!(paths.data_file, PathBuf::from("deck.csv"));
    }

    #[test]
    fn test_blank_argument_falls_through_to_env_then_default() {
        let expected = non_empty(std::env::var("QUIZ_CSV").ok())
            .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());
        for arg in ["", "   "] {
            let paths = AppPaths::from_env(vec![arg.to_string()].into_iter());
            assert_eq!(paths.data_file, PathBuf::from(&expected));
        }
        let paths = AppPaths::from_env(std::iter::empty());
        assert_eq!(paths.data_file, PathBuf::from(&expected));
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some(" ".to_string())), None);
        assert_eq!(non_empty(Some("a.csv".to_string())), Some("a.csv".to_string()));
    }
}

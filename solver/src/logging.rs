use colog::format::CologStyle;
use colored::Colorize;
use log::{Level, LevelFilter};

/// colog style with a wall-clock timestamp in front of the level token
pub struct Logger;

impl Logger {
    pub fn init(level: LevelFilter) {
        Self::builder(level).init();
    }

    pub fn builder(level: LevelFilter) -> env_logger::Builder {
        let mut builder = colog::basic_builder();
        builder.format(colog::formatter(Logger));
        builder.filter_level(level);
        builder
    }
}

impl CologStyle for Logger {
    fn prefix_token(&self, level: &Level) -> String {
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        format!(
            "{} {}{}{}",
            timestamp.as_str().dimmed(),
            "[".blue().bold(),
            self.level_color(level, self.level_token(level)),
            "]".blue().bold(),
        )
    }
}

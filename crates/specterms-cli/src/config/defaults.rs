use super::models::OutputFormat;
use specterms::engine::config::DEFAULT_MAX_ROWS;

pub struct DefaultsConfig {
    pub max_rows: u64,
    pub format: OutputFormat,
    pub page_size: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            format: OutputFormat::Text,
            page_size: 50,
        }
    }
}

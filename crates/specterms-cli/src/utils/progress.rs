use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use specterms::engine::progress::{Progress, ProgressCallback};
use std::time::Duration;
use tracing::info;

const PHASE_TEMPLATE: &str = "{spinner:.green} {msg}";
const BATCH_TEMPLATE: &str = "{msg:<16} [{bar:40.cyan/blue}] {pos}/{len} ({elapsed})";

/// Shows the running analysis phase as a spinner, or a bar of finished
/// configurations during batch runs.
#[derive(Clone)]
pub struct CliProgressHandler {
    bar: ProgressBar,
}

impl CliProgressHandler {
    /// A hidden handler keeps its state but draws nothing; used with `-q` and JSON output.
    pub fn new(visible: bool) -> Self {
        let target = if visible {
            ProgressDrawTarget::stderr()
        } else {
            ProgressDrawTarget::hidden()
        };
        Self {
            bar: ProgressBar::with_draw_target(None, target),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let bar = self.bar.clone();

        Box::new(move |progress: Progress| match progress {
            Progress::PhaseStart { name } => {
                bar.reset();
                bar.set_style(style(PHASE_TEMPLATE));
                bar.set_message(name);
                bar.enable_steady_tick(Duration::from_millis(80));
            }
            Progress::PhaseFinish => {
                let done = format!("✓ {}", bar.message());
                bar.finish_with_message(done);
            }
            Progress::TaskStart { total_steps } => {
                bar.reset();
                bar.set_style(style(BATCH_TEMPLATE).progress_chars("=> "));
                bar.set_length(total_steps);
                bar.set_message("Configurations");
            }
            Progress::TaskIncrement => bar.inc(1),
            Progress::TaskFinish => bar.finish_and_clear(),
            Progress::Message(msg) => info!("{}", msg),
        })
    }
}

fn style(template: &str) -> ProgressStyle {
    ProgressStyle::with_template(template).unwrap_or_else(|_| ProgressStyle::default_bar())
}

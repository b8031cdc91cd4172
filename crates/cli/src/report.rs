use nswalk_application::ports::WalkObserver;
use nswalk_domain::{DomainError, WalkStep};
use std::io::Write;
use std::sync::Mutex;

const NEXT_HOP: &str = " ➡️ ";
const OTHER: &str = " - ";

/// Prints each zone level as soon as it is resolved.
pub struct ConsoleReporter {
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleReporter {
    pub fn stdout() -> Self {
        Self::with_writer(Box::new(std::io::stdout()))
    }

    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }
}

impl WalkObserver for ConsoleReporter {
    fn on_step(&self, step: &WalkStep) -> Result<(), DomainError> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| DomainError::Output("report writer poisoned".to_string()))?;

        out.write_all(render_step(step).as_bytes())
            .and_then(|_| out.flush())
            .map_err(|e| DomainError::Output(e.to_string()))
    }
}

pub fn render_step(step: &WalkStep) -> String {
    let mut text = if step.zone.is_root() {
        "Retrieving list of root nameservers:\n".to_string()
    } else {
        format!(
            "\nFinding nameservers for zone '{}' using parent nameserver '{}'\n",
            step.zone, step.parent_nameserver
        )
    };

    for server in step.nameservers.sorted() {
        let prefix = if step.is_next_hop(&server) {
            NEXT_HOP
        } else {
            OTHER
        };
        text.push_str(prefix);
        text.push_str(&server);
        text.push('\n');
    }

    text
}

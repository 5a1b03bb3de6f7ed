use anyhow::{Context, Result};
use colored::Colorize;
use contact_form::{
    Config, FieldId, FormController, FormEvent, FormSnapshot, FormView, HideTicket,
    SubmissionOutcome, TimerQueue,
};
use serde::Deserialize;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// One line of a replay script
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Step {
    /// Let virtual time pass so pending timers fire
    Wait { wait_ms: u64 },
    Event(FormEvent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Error,
    Ok,
}

/// Renders UI effects as lines of text
#[derive(Debug, Default)]
pub struct TerminalView {
    pub lines: Vec<(Tone, String)>,
    timers: TimerQueue,
}

impl TerminalView {
    fn say(&mut self, tone: Tone, line: String) {
        self.lines.push((tone, line));
    }
}

impl FormView for TerminalView {
    fn show_error(&mut self, field: FieldId, message: &str) {
        self.say(Tone::Error, format!("{}: {}", field, message));
    }

    fn clear_error(&mut self, field: FieldId) {
        self.say(Tone::Plain, format!("{}: ok", field));
    }

    fn show_success(&mut self, submission: &FormSnapshot) {
        self.say(Tone::Ok, "Thank you! Your message has been received.".to_string());
        for (field, value) in submission.iter() {
            self.say(Tone::Ok, format!("  {}: {}", field, value));
        }
    }

    fn hide_success(&mut self) {
        self.say(Tone::Plain, "success message hidden".to_string());
    }

    fn reset_form(&mut self) {
        self.say(Tone::Plain, "form reset".to_string());
    }

    fn focus_field(&mut self, field: FieldId) {
        self.say(Tone::Plain, format!("focus -> {}", field));
    }

    fn schedule_success_hide(&mut self, after: Duration, ticket: HideTicket) {
        self.timers.schedule(after, ticket);
    }

    fn set_value(&mut self, field: FieldId, value: &str) {
        self.say(Tone::Plain, format!("{} <- {:?}", field, value));
    }

    fn announce(&mut self, message: &str) {
        self.say(Tone::Error, format!("alert: {}", message));
    }
}

/// Parse JSON lines; blank lines and `#` comments are skipped
pub fn parse_script(input: &str) -> Result<Vec<Step>> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(index, line)| {
            serde_json::from_str(line)
                .with_context(|| format!("Invalid step on line {}: {}", index + 1, line.trim()))
        })
        .collect()
}

/// Drive a controller through the script and return what the page showed
pub fn run(steps: Vec<Step>, config: &Config) -> Vec<(Tone, String)> {
    let mut form = FormController::new(TerminalView::default(), config);

    for step in steps {
        match step {
            Step::Wait { wait_ms } => {
                let fired = form
                    .view_mut()
                    .timers
                    .advance(Duration::from_millis(wait_ms));
                for ticket in fired {
                    form.dispatch(FormEvent::SuccessExpired { ticket });
                }
            }
            Step::Event(event) => {
                tracing::debug!(?event, "replaying");
                if let Some(SubmissionOutcome::Invalid { errors, .. }) = form.dispatch(event) {
                    let summary = format!("submission rejected ({} invalid)", errors.len());
                    form.view_mut().say(Tone::Error, summary);
                }
            }
        }
    }

    form.into_view().lines
}

pub fn execute(file: Option<&Path>, config: Option<&Path>) -> Result<()> {
    let config = match config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };

    let script = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read script: {:?}", path))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read script from stdin")?;
            buffer
        }
    };

    let steps = parse_script(&script)?;
    println!("{}", format!("Replaying {} steps", steps.len()).bold());

    for (tone, line) in run(steps, &config) {
        match tone {
            Tone::Plain => println!("{}", line.dimmed()),
            Tone::Error => println!("{}", line.red()),
            Tone::Ok => println!("{}", line.green()),
        }
    }

    Ok(())
}

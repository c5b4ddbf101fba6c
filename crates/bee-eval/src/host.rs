//! Host feedback: the user-facing console and audio cues.

use serde::{Deserialize, Serialize};

/// User-facing log lines, oldest first.
///
/// The interpreter appends the message of every aborted run; the host
/// renders the lines and decides when to clear them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Console {
    lines: Vec<String>,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

/// Sound played when a run ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    Success,
    Failure,
}

pub trait AudioSink {
    fn play(&mut self, cue: Cue);
}

/// Plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl AudioSink for Silent {
    fn play(&mut self, _cue: Cue) {}
}

impl<F: FnMut(Cue)> AudioSink for F {
    fn play(&mut self, cue: Cue) {
        self(cue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_log_and_clear() {
        let mut console = Console::new();
        assert!(console.is_empty());
        console.log("undefined variable 'n'");
        console.log(String::from("division by zero"));
        assert_eq!(console.lines().len(), 2);
        assert_eq!(console.last(), Some("division by zero"));
        console.clear();
        assert!(console.is_empty());
        assert_eq!(console.last(), None);
    }

    #[test]
    fn test_console_serializes_as_list() {
        let mut console = Console::new();
        console.log("a");
        assert_eq!(serde_json::to_string(&console).unwrap(), r#"["a"]"#);
    }

    #[test]
    fn test_closure_sink() {
        let mut played = Vec::new();
        {
            let mut sink = |cue: Cue| played.push(cue);
            sink.play(Cue::Success);
            sink.play(Cue::Failure);
        }
        assert_eq!(played, vec![Cue::Success, Cue::Failure]);
        Silent.play(Cue::Success);
    }
}

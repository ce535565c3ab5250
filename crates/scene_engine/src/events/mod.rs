//! Event sources feeding the frame loop
//!
//! Events may arrive at any time but are only applied between frames: the
//! engine drains its source once per frame, before `update`. All state stays
//! on the loop thread.

use std::collections::{BTreeMap, VecDeque};
use std::io::BufRead;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use crate::application::AppEvent;
use crate::input::{Direction, KeyCode};

/// A source of application events, drained once per frame
pub trait EventSource {
    /// Return every event that arrived since the previous poll
    fn poll(&mut self) -> Vec<AppEvent>;
}

/// Events scheduled by frame number
///
/// Poll `n` (zero-based) returns the events registered for frame `n`. Useful
/// for tests and scripted autopilot runs.
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    schedule: BTreeMap<u64, Vec<AppEvent>>,
    polls: u64,
}

impl ScriptedEvents {
    /// Create an empty script
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule an event before frame `frame` (builder style)
    pub fn at(mut self, frame: u64, event: AppEvent) -> Self {
        self.push(frame, event);
        self
    }

    /// Schedule a key press and release before frame `frame`
    pub fn key_tap(self, frame: u64, key: KeyCode) -> Self {
        self.at(frame, AppEvent::KeyInput { key, pressed: true })
            .at(frame, AppEvent::KeyInput { key, pressed: false })
    }

    /// Schedule an event before frame `frame`
    pub fn push(&mut self, frame: u64, event: AppEvent) {
        self.schedule.entry(frame).or_default().push(event);
    }

    /// Events not yet delivered
    pub fn remaining(&self) -> usize {
        self.schedule.values().map(Vec::len).sum()
    }
}

impl EventSource for ScriptedEvents {
    fn poll(&mut self) -> Vec<AppEvent> {
        let events = self.schedule.remove(&self.polls).unwrap_or_default();
        self.polls += 1;
        events
    }
}

/// Line-oriented commands read from standard input
///
/// A reader thread parses each line with [`parse_command`] and sends the
/// resulting events over a channel; `poll` drains the channel without
/// blocking. End of input is reported as a close request.
pub struct ConsoleEvents {
    receiver: Receiver<AppEvent>,
    pending: VecDeque<AppEvent>,
    closed: bool,
}

impl ConsoleEvents {
    /// Spawn the stdin reader thread
    pub fn spawn() -> Self {
        Self::from_reader(std::io::stdin())
    }

    /// Read commands from any line source (stdin, a file, a byte slice)
    pub fn from_reader<R>(reader: R) -> Self
    where
        R: std::io::Read + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            for line in std::io::BufReader::new(reader).lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        log::warn!("Console input failed: {}", e);
                        break;
                    }
                };
                match parse_command(&line) {
                    Ok(events) => {
                        for event in events {
                            if sender.send(event).is_err() {
                                return;
                            }
                        }
                    }
                    Err(e) => log::warn!("{}", e),
                }
            }
            let _ = sender.send(AppEvent::WindowCloseRequested);
        });

        Self {
            receiver,
            pending: VecDeque::new(),
            closed: false,
        }
    }
}

impl EventSource for ConsoleEvents {
    fn poll(&mut self) -> Vec<AppEvent> {
        if !self.closed {
            loop {
                match self.receiver.try_recv() {
                    Ok(event) => self.pending.push_back(event),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        self.closed = true;
                        break;
                    }
                }
            }
        }
        self.pending.drain(..).collect()
    }
}

/// A console line that could not be understood
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unrecognized command '{0}' (try: up, down, left, right, tap <dir>, +, -, drag <dx> <dy>, resize <w> <h>, quit)")]
pub struct UnknownCommand(pub String);

/// Parse one console line into application events
///
/// Blank lines produce no events. Key commands expand to a press followed by
/// a release so each line is exactly one discrete command.
pub fn parse_command(line: &str) -> Result<Vec<AppEvent>, UnknownCommand> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(Vec::new());
    };
    let args: Vec<&str> = words.collect();
    let unknown = || UnknownCommand(line.trim().to_string());

    let key = match command.to_ascii_lowercase().as_str() {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "w" => KeyCode::W,
        "a" => KeyCode::A,
        "s" => KeyCode::S,
        "d" => KeyCode::D,
        "+" | "=" | "zoom-in" => KeyCode::Plus,
        "-" | "zoom-out" => KeyCode::Minus,
        "space" => KeyCode::Space,
        "q" | "quit" | "exit" => return Ok(vec![AppEvent::WindowCloseRequested]),
        "tap" => {
            let direction = match args.first().copied() {
                Some("up") => Direction::Up,
                Some("down") => Direction::Down,
                Some("left") => Direction::Left,
                Some("right") => Direction::Right,
                _ => return Err(unknown()),
            };
            return Ok(vec![AppEvent::TouchTap(direction)]);
        }
        "drag" => {
            let [dx, dy] = parse_pair::<f64>(&args).ok_or_else(unknown)?;
            return Ok(vec![AppEvent::MouseDrag { dx, dy }]);
        }
        "resize" => {
            let [width, height] = parse_pair::<u32>(&args).ok_or_else(unknown)?;
            return Ok(vec![AppEvent::WindowResized { width, height }]);
        }
        _ => return Err(unknown()),
    };

    Ok(vec![
        AppEvent::KeyInput { key, pressed: true },
        AppEvent::KeyInput { key, pressed: false },
    ])
}

fn parse_pair<T: std::str::FromStr>(args: &[&str]) -> Option<[T; 2]> {
    match args {
        [a, b] => Some([a.parse().ok()?, b.parse().ok()?]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_commands_press_and_release() {
        let events = parse_command("left").unwrap();
        assert_eq!(events, vec![
            AppEvent::KeyInput { key: KeyCode::Left, pressed: true },
            AppEvent::KeyInput { key: KeyCode::Left, pressed: false },
        ]);
        assert_eq!(parse_command("  UP ").unwrap()[0], AppEvent::KeyInput { key: KeyCode::Up, pressed: true });
    }

    #[test]
    fn test_argument_commands() {
        assert_eq!(parse_command("tap right").unwrap(), vec![AppEvent::TouchTap(Direction::Right)]);
        assert_eq!(parse_command("drag 12 -3.5").unwrap(), vec![AppEvent::MouseDrag { dx: 12.0, dy: -3.5 }]);
        assert_eq!(
            parse_command("resize 800 600").unwrap(),
            vec![AppEvent::WindowResized { width: 800, height: 600 }]
        );
        assert_eq!(parse_command("quit").unwrap(), vec![AppEvent::WindowCloseRequested]);
    }

    #[test]
    fn test_blank_and_unknown_lines() {
        assert!(parse_command("   ").unwrap().is_empty());
        assert!(parse_command("jump").is_err());
        assert!(parse_command("tap sideways").is_err());
        assert!(parse_command("resize 800").is_err());
    }

    #[test]
    fn test_scripted_events_delivered_by_frame() {
        let mut events = ScriptedEvents::new()
            .at(1, AppEvent::TouchTap(Direction::Up))
            .key_tap(3, KeyCode::Right);
        assert_eq!(events.remaining(), 3);

        assert!(events.poll().is_empty());
        assert_eq!(events.poll(), vec![AppEvent::TouchTap(Direction::Up)]);
        assert!(events.poll().is_empty());
        assert_eq!(events.poll().len(), 2);
        assert_eq!(events.remaining(), 0);
    }

    #[test]
    fn test_console_events_end_with_close_request() {
        let mut console = ConsoleEvents::from_reader(std::io::Cursor::new(b"up\nbogus\ntap left\n".to_vec()));

        let mut received = Vec::new();
        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
        while !received.contains(&AppEvent::WindowCloseRequested) && std::time::Instant::now() < deadline {
            received.extend(console.poll());
            std::thread::yield_now();
        }

        assert_eq!(received, vec![
            AppEvent::KeyInput { key: KeyCode::Up, pressed: true },
            AppEvent::KeyInput { key: KeyCode::Up, pressed: false },
            AppEvent::TouchTap(Direction::Left),
            AppEvent::WindowCloseRequested,
        ]);
    }
}

use std::collections::HashMap;
use std::io;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

// --- SimulatedInput for headless debug runs ---
pub struct SimulatedInput {
    events: HashMap<u64, Vec<Event>>,
    current_frame: u64,
}

impl SimulatedInput {
    pub fn new(events: HashMap<u64, Vec<Event>>) -> Self {
        SimulatedInput { events, current_frame: 0 }
    }

    pub fn schedule(&mut self, frame: u64, event: Event) {
        self.events.entry(frame).or_default().push(event);
    }

    pub fn poll(&mut self, frame_count: u64) -> io::Result<bool> {
        self.current_frame = frame_count;
        Ok(self.events.get(&frame_count).is_some_and(|queued| !queued.is_empty()))
    }

    pub fn read(&mut self) -> io::Result<Event> {
        match self.events.get_mut(&self.current_frame) {
            Some(queued) if !queued.is_empty() => Ok(queued.remove(0)),
            _ => Ok(Event::Key(KeyCode::Null.into())),
        }
    }

    pub fn demo_script() -> Self {
        let mut input = SimulatedInput::new(HashMap::new());
        input.schedule(1, press(KeyCode::Up));
        input.schedule(6, release(KeyCode::Up));
        input.schedule(7, press(KeyCode::Left));
        input.schedule(12, release(KeyCode::Left));
        input.schedule(13, press(KeyCode::Char(' ')));
        input.schedule(14, release(KeyCode::Char(' ')));
        input.schedule(20, press(KeyCode::Char('g')));
        input.schedule(21, release(KeyCode::Char('g')));
        input.schedule(90, press(KeyCode::Char('q')));
        input
    }
}

pub fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press))
}

pub fn release(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release))
}

// --- Terminal teardown ---
// `restore` runs whether or not `run` failed. The earlier error wins.
pub fn with_restore<S, T>(
    state: &mut S,
    run: impl FnOnce(&mut S) -> io::Result<T>,
    restore: impl FnOnce(&mut S) -> io::Result<()>,
) -> io::Result<T> {
    let outcome = run(state);
    let restored = restore(state);
    let value = outcome?;
    restored?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_runs_after_a_failed_run_and_keeps_its_error() {
        let mut steps: Vec<&str> = Vec::new();
        let result: io::Result<u64> = with_restore(
            &mut steps,
            |steps| {
                steps.push("run");
                Err(io::Error::other("lost the tty"))
            },
            |steps| {
                steps.push("restore");
                Err(io::Error::other("could not show cursor"))
            },
        );
        assert_eq!(steps, vec!["run", "restore"]);
        assert_eq!(result.unwrap_err().to_string(), "lost the tty");
    }

    #[test]
    fn restore_failure_surfaces_after_a_clean_run() {
        let mut restored = false;
        let result = with_restore(
            &mut restored,
            |_| Ok(42u64),
            |restored| {
                *restored = true;
                Err(io::Error::other("raw mode stuck"))
            },
        );
        assert!(restored);
        assert_eq!(result.unwrap_err().to_string(), "raw mode stuck");

        let result = with_restore(&mut (), |_| Ok(7u64), |_| Ok(()));
        assert_eq!(result.unwrap(), 7);
    }

    #[test]
    fn events_are_delivered_on_their_frame_in_order() {
        let mut input = SimulatedInput::new(HashMap::new());
        input.schedule(3, press(KeyCode::Up));
        input.schedule(3, release(KeyCode::Up));

        assert!(!input.poll(2).unwrap());
        assert!(input.poll(3).unwrap());
        assert_eq!(input.read().unwrap(), press(KeyCode::Up));
        assert!(input.poll(3).unwrap());
        assert_eq!(input.read().unwrap(), release(KeyCode::Up));
        assert!(!input.poll(3).unwrap());
    }
}

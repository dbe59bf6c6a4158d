use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Outcome of a single [`TypingTask::tick`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing was due yet.
    Waiting,
    /// One or more characters were revealed; more remain.
    Revealed,
    /// The last character was revealed (or the text was empty). Reported
    /// exactly once per task; later ticks return `Waiting`.
    Finished,
}

/// Character-by-character reveal of a fully received story text.
///
/// The task owns its queue, so a new story cycle can simply replace the
/// task to cancel it; the old completion never fires. The first character
/// is due immediately, each following one after `interval`.
pub struct TypingTask {
    queue: VecDeque<char>,
    revealed: String,
    interval: Duration,
    next_due: Instant,
    reported_done: bool,
}

impl TypingTask {
    pub fn new(text: &str, interval: Duration, now: Instant) -> Self {
        Self {
            queue: text.chars().collect(),
            revealed: String::with_capacity(text.len()),
            interval,
            next_due: now,
            reported_done: false,
        }
    }

    /// Reveal every character that is due at `now`. Late frames catch up
    /// rather than stretching the animation.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        if self.reported_done {
            return TickOutcome::Waiting;
        }

        let mut revealed_any = false;
        while now >= self.next_due {
            let Some(ch) = self.queue.pop_front() else {
                break;
            };
            self.revealed.push(ch);
            self.next_due += self.interval;
            revealed_any = true;
        }

        if self.queue.is_empty() {
            self.reported_done = true;
            TickOutcome::Finished
        } else if revealed_any {
            TickOutcome::Revealed
        } else {
            TickOutcome::Waiting
        }
    }

    pub fn revealed(&self) -> &str {
        &self.revealed
    }

    pub fn is_done(&self) -> bool {
        self.reported_done
    }

    /// Time until the next character is due, for repaint scheduling.
    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: Duration = Duration::from_millis(30);

    fn run_to_completion(text: &str) -> (String, usize, usize) {
        let now = Instant::now();
        let mut task = TypingTask::new(text, STEP, now);
        let mut reveal_steps = 0;
        let mut finished_count = 0;

        for i in 0..(text.chars().count() + 2) {
            let before = task.revealed().chars().count();
            match task.tick(now + STEP * i as u32) {
                TickOutcome::Finished => finished_count += 1,
                _ => {}
            }
            reveal_steps += task.revealed().chars().count() - before;
        }

        (task.revealed().to_string(), reveal_steps, finished_count)
    }

    #[test]
    fn reveals_one_char_per_tick() {
        let now = Instant::now();
        let mut task = TypingTask::new("abc", STEP, now);

        assert_eq!(task.tick(now), TickOutcome::Revealed);
        assert_eq!(task.revealed(), "a");

        // Not due yet.
        assert_eq!(task.tick(now + Duration::from_millis(10)), TickOutcome::Waiting);
        assert_eq!(task.revealed(), "a");

        assert_eq!(task.tick(now + STEP), TickOutcome::Revealed);
        assert_eq!(task.revealed(), "ab");

        assert_eq!(task.tick(now + STEP * 2), TickOutcome::Finished);
        assert_eq!(task.revealed(), "abc");
        assert!(task.is_done());
    }

    #[test]
    fn emits_exactly_len_steps_and_finishes_once() {
        for text in ["You enter a dark cave.\n", "", "\n\n\n", "a"] {
            let (revealed, steps, finished) = run_to_completion(text);
            assert_eq!(revealed, text);
            assert_eq!(steps, text.chars().count());
            assert_eq!(finished, 1, "continuation must fire exactly once for {text:?}");
        }
    }

    #[test]
    fn empty_text_finishes_immediately() {
        let now = Instant::now();
        let mut task = TypingTask::new("", STEP, now);
        assert_eq!(task.tick(now), TickOutcome::Finished);
        assert_eq!(task.tick(now + STEP), TickOutcome::Waiting);
        assert_eq!(task.revealed(), "");
    }

    #[test]
    fn late_frame_catches_up() {
        let now = Instant::now();
        let mut task = TypingTask::new("abcd", STEP, now);

        // A frame arriving three intervals late reveals everything due.
        assert_eq!(task.tick(now + STEP * 2), TickOutcome::Revealed);
        assert_eq!(task.revealed(), "abc");

        assert_eq!(task.tick(now + STEP * 3), TickOutcome::Finished);
        assert_eq!(task.revealed(), "abcd");
    }

    #[test]
    fn newlines_pass_through_verbatim() {
        let (revealed, steps, _) = run_to_completion("line one\nline two\n");
        assert_eq!(revealed, "line one\nline two\n");
        assert_eq!(steps, 18);
    }
}

//! Timer-driven text animations: stat counters and the typewriter tagline.
//!
//! Both are modeled as plain steppers advanced by one timer tick at a time, so
//! the component owns the `gloo-timers` interval and this module owns the
//! arithmetic.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_TICK_MS: u32 = 16;
pub const TYPEWRITER_START_DELAY_MS: u32 = 2200;
pub const TYPEWRITER_CHAR_MS: u32 = 50;

/// Linear count from a start value to a target over a fixed number of ticks.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    current: f64,
    target: f64,
    increment: f64,
    done: bool,
}

impl CounterAnimation {
    #[must_use]
    pub fn new(start: i64, target: i64, duration_ms: u32, tick_ms: u32) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let (start, target) = (start as f64, target as f64);
        let ticks = f64::from(duration_ms) / f64::from(tick_ms.max(1));
        let increment = if ticks > 0.0 { (target - start) / ticks } else { target - start };
        Self { current: start, target, increment, done: increment == 0.0 }
    }

    /// Advance one tick and return the value to display.
    pub fn tick(&mut self) -> i64 {
        if !self.done {
            self.current += self.increment;
            let reached = (self.increment > 0.0 && self.current >= self.target)
                || (self.increment < 0.0 && self.current <= self.target);
            if reached {
                self.current = self.target;
                self.done = true;
            }
        }
        #[allow(clippy::cast_possible_truncation)]
        let shown = self.current.floor() as i64;
        shown
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }
}

/// Leading integer of a text node, like `"42+"` → `42`. Non-numeric → `None`.
#[must_use]
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['-', '+']));
    let digits = trimmed[sign_len..]
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(trimmed.len(), |(i, _)| i + sign_len);
    trimmed[..digits].parse().ok()
}

/// Reveals a string one character per tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    chars: Vec<char>,
    revealed: usize,
}

impl Typewriter {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self { chars: text.chars().collect(), revealed: 0 }
    }

    /// Reveal one more character; `None` once the full text is visible.
    pub fn next_frame(&mut self) -> Option<String> {
        if self.revealed >= self.chars.len() {
            return None;
        }
        self.revealed += 1;
        Some(self.chars[..self.revealed].iter().collect())
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.revealed >= self.chars.len()
    }
}

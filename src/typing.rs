//! Character-by-character typing and deleting over a cyclic phrase list.
//!
//! The machine is pure: every `tick` returns the text to render and how long
//! to wait before the next tick. Scheduling lives in the browser driver.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingTimings {
    pub typing_ms: u32,
    pub deleting_ms: u32,
    pub hold_full_ms: u32,
    pub hold_empty_ms: u32,
}

impl Default for TypingTimings {
    fn default() -> Self {
        Self {
            typing_ms: 100,
            deleting_ms: 50,
            hold_full_ms: 2_000,
            hold_empty_ms: 500,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingMode {
    Typing,
    Deleting,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Clone, Debug)]
pub struct TypingMachine {
    phrases: Vec<Vec<char>>,
    timings: TypingTimings,
    index: usize,
    offset: usize,
    mode: TypingMode,
}

impl TypingMachine {
    /// Returns `None` when there is nothing to type.
    pub fn new(phrases: &[String], timings: TypingTimings) -> Option<Self> {
        let phrases: Vec<Vec<char>> = phrases
            .iter()
            .filter(|phrase| !phrase.is_empty())
            .map(|phrase| phrase.chars().collect())
            .collect();

        if phrases.is_empty() {
            return None;
        }

        Some(Self {
            phrases,
            timings,
            index: 0,
            offset: 0,
            mode: TypingMode::Typing,
        })
    }

    #[cfg(test)]
    pub fn mode(&self) -> TypingMode {
        self.mode
    }

    #[cfg(test)]
    pub fn phrase_index(&self) -> usize {
        self.index
    }

    pub fn tick(&mut self) -> TypingFrame {
        let phrase = &self.phrases[self.index];

        let mut delay_ms = match self.mode {
            TypingMode::Typing => {
                self.offset = (self.offset + 1).min(phrase.len());
                self.timings.typing_ms
            }
            TypingMode::Deleting => {
                self.offset = self.offset.saturating_sub(1);
                self.timings.deleting_ms
            }
        };

        let text: String = phrase[..self.offset].iter().collect();

        match self.mode {
            TypingMode::Typing if self.offset == phrase.len() => {
                self.mode = TypingMode::Deleting;
                delay_ms = self.timings.hold_full_ms;
            }
            TypingMode::Deleting if self.offset == 0 => {
                self.mode = TypingMode::Typing;
                self.index = (self.index + 1) % self.phrases.len();
                delay_ms = self.timings.hold_empty_ms;
            }
            _ => {}
        }

        TypingFrame { text, delay_ms }
    }
}

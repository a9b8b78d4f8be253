pub const COUNTER_DURATION_MS: u32 = 2_000;
pub const COUNTER_STEPS: u32 = 50;

/// Count-up animation for a stat label such as `1500+`.
///
/// The magnitude is built from the digits of the label in order and the suffix
/// from every other character, so `"10k+"` animates as `10` with suffix `"k+"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterAnimation {
    original: String,
    target: u64,
    suffix: String,
    steps: u32,
    step: u32,
}

impl CounterAnimation {
    /// Returns `None` for labels with no digits or a magnitude beyond `u64`.
    pub fn parse(text: &str, steps: u32) -> Option<Self> {
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        let target = digits.parse::<u64>().ok()?;
        let suffix = text.chars().filter(|c| !c.is_ascii_digit()).collect();

        Some(Self {
            original: text.to_string(),
            target,
            suffix,
            steps: steps.max(1),
            step: 0,
        })
    }

    #[cfg(test)]
    pub fn target(&self) -> u64 {
        self.target
    }

    #[cfg(test)]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn step_interval_ms(&self, duration_ms: u32) -> u32 {
        duration_ms / self.steps
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.steps
    }
}

impl Iterator for CounterAnimation {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.is_finished() {
            return None;
        }
        self.step += 1;

        if self.is_finished() {
            return Some(self.original.clone());
        }

        let current = (self.target as f64 / f64::from(self.steps)) * f64::from(self.step);
        Some(format!("{}{}", current.floor() as u64, self.suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leading_number(frame: &str) -> u64 {
        frame
            .chars()
            .take_while(char::is_ascii_digit)
            .collect::<String>()
            .parse()
            .expect("frame starts with digits")
    }

    #[test]
    fn splits_digits_from_suffix() {
        let counter = CounterAnimation::parse("1500+", COUNTER_STEPS).expect("digits present");

        assert_eq!(counter.target(), 1500);
        assert_eq!(counter.suffix(), "+");
        assert_eq!(counter.step_interval_ms(COUNTER_DURATION_MS), 40);
    }

    #[test]
    fn ends_on_the_exact_original_text() {
        let frames: Vec<String> = CounterAnimation::parse("1500+", COUNTER_STEPS)
            .expect("digits present")
            .collect();

        assert_eq!(frames.len(), COUNTER_STEPS as usize);
        assert_eq!(frames.last().map(String::as_str), Some("1500+"));
        assert_eq!(frames[0], "30+");
    }

    #[test]
    fn intermediate_frames_never_decrease() {
        let frames: Vec<u64> = CounterAnimation::parse("97%", COUNTER_STEPS)
            .expect("digits present")
            .map(|frame| leading_number(&frame))
            .collect();

        assert!(frames.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(frames.last(), Some(&97));
    }

    #[test]
    fn label_without_digits_is_not_animated() {
        assert!(CounterAnimation::parse("many", COUNTER_STEPS).is_none());
        assert!(CounterAnimation::parse("99999999999999999999999", COUNTER_STEPS).is_none());
    }

    #[test]
    fn zero_steps_still_finishes() {
        let frames: Vec<String> = CounterAnimation::parse("7 yrs", 0).expect("digits present").collect();

        assert_eq!(frames, ["7 yrs"]);
    }
}

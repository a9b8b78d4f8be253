pub const REVEAL_STAGGER_MS: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
    /// Stop observing a target after its first reveal.
    pub once: bool,
}

impl RevealOptions {
    pub const NAV_SECTIONS: Self = Self { threshold: 0.3, root_margin: "-100px", once: false };
    pub const CARDS: Self = Self { threshold: 0.1, root_margin: "0px 0px -50px 0px", once: true };
    pub const SECTIONS_3D: Self = Self { threshold: 0.15, root_margin: "0px 0px -100px 0px", once: false };
    pub const COUNTERS: Self = Self { threshold: 0.5, root_margin: "0px", once: true };
    pub const LAZY_IMAGES: Self = Self { threshold: 0.0, root_margin: "0px", once: true };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
    Ignore,
    Reveal { unobserve: bool },
}

/// Tracks which observed targets have already been revealed.
#[derive(Debug)]
pub struct RevealLedger<T> {
    once: bool,
    targets: Vec<(T, bool)>,
}

impl<T: PartialEq> RevealLedger<T> {
    pub fn new(once: bool) -> Self {
        Self { once, targets: Vec::new() }
    }

    pub fn track(&mut self, target: T) {
        if !self.targets.iter().any(|(known, _)| *known == target) {
            self.targets.push((target, false));
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn admit(&mut self, target: &T, intersecting: bool) -> Admission {
        if !intersecting {
            return Admission::Ignore;
        }

        let Some((_, revealed)) = self.targets.iter_mut().find(|(known, _)| known == target) else {
            return Admission::Ignore;
        };

        if self.once && *revealed {
            return Admission::Ignore;
        }

        *revealed = true;
        Admission::Reveal { unobserve: self.once }
    }
}

pub fn stagger_delay_ms(batch_index: usize) -> u32 {
    u32::try_from(batch_index)
        .unwrap_or(u32::MAX)
        .saturating_mul(REVEAL_STAGGER_MS)
}

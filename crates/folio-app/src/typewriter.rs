//! Rotating-text engine (the hero section's typewriter effect)
//!
//! Cycles through a fixed phrase list: types each phrase character by
//! character, holds it, deletes it with an accelerating delay, then advances
//! to the next phrase (wrapping). The engine never schedules anything itself;
//! every [`Typewriter::tick`] returns the delay until the next tick and the
//! host owns the timer (and its cancellation).

/// Base delay between typing ticks, in milliseconds.
pub const DEFAULT_TYPE_DELAY_MS: u64 = 150;
/// How long a fully-typed phrase is held before deletion starts.
pub const DEFAULT_HOLD_MS: u64 = 1000;

/// Each deleting tick divides the delay by this factor. There is no floor:
/// deletion speed grows without bound on long phrases. That mirrors the
/// observed behavior of the effect this was modeled on; see DESIGN.md.
const DELETE_ACCELERATION: f64 = 1.5;

/// Engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypewriterMode {
    /// Appending one character per tick.
    #[default]
    Typing,
    /// Full phrase shown; the next tick (after the hold) starts deletion.
    Paused,
    /// Removing one character per tick, accelerating.
    Deleting,
}

/// The typewriter state machine.
///
/// An empty phrase list is valid: the engine renders an empty string and
/// stays idle ([`Typewriter::tick`] returns `None`, so nothing is ever
/// scheduled).
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    index: usize,
    rendered: String,
    mode: TypewriterMode,
    base_delay_ms: u64,
    hold_ms: u64,
    next_delay_ms: u64,
}

impl Typewriter {
    pub fn new(phrases: Vec<String>, base_delay_ms: u64, hold_ms: u64) -> Self {
        Self {
            phrases,
            index: 0,
            rendered: String::new(),
            mode: TypewriterMode::Typing,
            base_delay_ms,
            hold_ms,
            next_delay_ms: base_delay_ms,
        }
    }

    /// The text currently on screen.
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    pub fn mode(&self) -> TypewriterMode {
        self.mode
    }

    /// True when there is nothing to animate (empty phrase list).
    pub fn is_idle(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Delay until the next tick should fire, or `None` when idle.
    ///
    /// Used for the initial schedule and to resume after the hero section
    /// remounts (route pop).
    pub fn next_delay(&self) -> Option<u64> {
        if self.is_idle() {
            None
        } else {
            Some(self.next_delay_ms)
        }
    }

    /// Advance the state machine one step.
    ///
    /// Returns the delay in milliseconds until the next tick, or `None` when
    /// idle (the host must not schedule another tick in that case).
    pub fn tick(&mut self) -> Option<u64> {
        if self.is_idle() {
            return None;
        }

        let phrase = self.phrases[self.index].clone();
        match self.mode {
            TypewriterMode::Typing => {
                let typed = self.rendered.chars().count();
                if let Some(c) = phrase.chars().nth(typed) {
                    self.rendered.push(c);
                }
                if self.rendered == phrase {
                    self.mode = TypewriterMode::Paused;
                    self.next_delay_ms = self.hold_ms;
                } else {
                    self.next_delay_ms = self.base_delay_ms;
                }
            }
            TypewriterMode::Paused => {
                // Hold elapsed; deletion starts on the following ticks.
                self.mode = TypewriterMode::Deleting;
                self.next_delay_ms = self.base_delay_ms;
            }
            TypewriterMode::Deleting => {
                self.rendered.pop();
                if self.rendered.is_empty() {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.mode = TypewriterMode::Typing;
                    self.next_delay_ms = self.base_delay_ms;
                } else {
                    self.next_delay_ms =
                        (self.next_delay_ms as f64 / DELETE_ACCELERATION) as u64;
                }
            }
        }

        Some(self.next_delay_ms)
    }
}

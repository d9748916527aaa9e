//! Typing / deleting title animation.
//!
//! ```text
//!   Typing ──(phrase complete)──> PausedFull ──(hold)──> Deleting
//!     ^                                                     │
//!     └──────── PausedEmpty <──(empty, next phrase)─────────┘
//! ```
//!
//! [`Typewriter::tick`] performs one transition and returns the text to show
//! plus the delay before the next tick; the mount function just reschedules
//! itself with that delay forever.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::Element;

use crate::config::TypewriterConfig;
use crate::dom::Page;
use crate::error::PortfolioError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeState {
    Typing,
    PausedFull,
    Deleting,
    PausedEmpty,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeStep {
    pub text: String,
    pub next_delay_ms: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypeTimings {
    pub type_ms: u32,
    pub delete_ms: u32,
    pub hold_ms: u32,
}

impl From<&TypewriterConfig> for TypeTimings {
    fn from(cfg: &TypewriterConfig) -> Self {
        Self { type_ms: cfg.type_ms, delete_ms: cfg.delete_ms, hold_ms: cfg.hold_ms }
    }
}

pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    timings: TypeTimings,
    index: usize, // current phrase
    shown: usize, // characters of the current phrase on screen
    state: TypeState,
}

impl Typewriter {
    /// `None` when there is nothing to type.
    pub fn new<S: AsRef<str>>(phrases: &[S], timings: TypeTimings) -> Option<Self> {
        if phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases: phrases.iter().map(|p| p.as_ref().chars().collect()).collect(),
            timings,
            index: 0,
            shown: 0,
            state: TypeState::Typing,
        })
    }

    pub fn state(&self) -> TypeState {
        self.state
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    pub fn tick(&mut self) -> TypeStep {
        let len = self.phrases[self.index].len();
        let next_delay_ms = match self.state {
            TypeState::Typing | TypeState::PausedEmpty => {
                self.shown = (self.shown + 1).min(len);
                if self.shown == len {
                    self.state = TypeState::PausedFull;
                    self.timings.hold_ms
                } else {
                    self.state = TypeState::Typing;
                    self.timings.type_ms
                }
            }
            TypeState::PausedFull | TypeState::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.state = TypeState::PausedEmpty;
                    self.timings.type_ms
                } else {
                    self.state = TypeState::Deleting;
                    self.timings.delete_ms
                }
            }
        };
        TypeStep { text: self.text(), next_delay_ms }
    }

    fn text(&self) -> String {
        self.phrases[self.index][..self.shown].iter().collect()
    }
}

// --- DOM wiring -------------------------------------------------------------

fn schedule(machine: Rc<RefCell<Typewriter>>, target: Element, delay_ms: u32) {
    Timeout::new(delay_ms, move || {
        let step = machine.borrow_mut().tick();
        target.set_text_content(Some(&step.text));
        schedule(machine, target, step.next_delay_ms);
    })
    .forget();
}

pub fn mount(page: &Page, cfg: &TypewriterConfig) -> Result<bool, PortfolioError> {
    let Some(target) = page.by_id(&cfg.element_id) else {
        debug!("typewriter: #{} not present", cfg.element_id);
        return Ok(false);
    };
    let Some(machine) = Typewriter::new(&cfg.phrases, cfg.into()) else {
        debug!("typewriter: no phrases configured");
        return Ok(false);
    };
    schedule(Rc::new(RefCell::new(machine)), target, cfg.start_delay_ms);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: TypeTimings = TypeTimings { type_ms: 100, delete_ms: 50, hold_ms: 2000 };

    fn texts(tw: &mut Typewriter, n: usize) -> Vec<String> {
        (0..n).map(|_| tw.tick().text).collect()
    }

    #[test]
    fn test_empty_list_is_none() {
        assert!(Typewriter::new::<&str>(&[], T).is_none());
    }

    #[test]
    fn test_types_then_holds() {
        let mut tw = Typewriter::new(&["Hey"], T).unwrap();
        assert_eq!(tw.tick(), TypeStep { text: "H".into(), next_delay_ms: 100 });
        assert_eq!(tw.tick(), TypeStep { text: "He".into(), next_delay_ms: 100 });
        assert_eq!(tw.tick(), TypeStep { text: "Hey".into(), next_delay_ms: 2000 });
        assert_eq!(tw.state(), TypeState::PausedFull);
    }

    #[test]
    fn test_deletes_then_advances() {
        let mut tw = Typewriter::new(&["ab", "xyz"], T).unwrap();
        texts(&mut tw, 2);
        assert_eq!(tw.tick(), TypeStep { text: "a".into(), next_delay_ms: 50 });
        assert_eq!(tw.state(), TypeState::Deleting);
        let step = tw.tick();
        assert_eq!(step.text, "");
        assert_eq!(step.next_delay_ms, 100);
        assert_eq!(tw.state(), TypeState::PausedEmpty);
        assert_eq!(tw.phrase_index(), 1);
        assert_eq!(texts(&mut tw, 3), vec!["x", "xy", "xyz"]);
    }

    #[test]
    fn test_wraps_forever() {
        let mut tw = Typewriter::new(&["a", "b"], T).unwrap();
        // a, "", b, "", a ...
        assert_eq!(texts(&mut tw, 5), vec!["a", "", "b", "", "a"]);
        assert_eq!(tw.phrase_index(), 0);
    }

    #[test]
    fn test_multibyte_phrase() {
        let mut tw = Typewriter::new(&["日本"], T).unwrap();
        assert_eq!(texts(&mut tw, 3), vec!["日", "日本", "日"]);
    }

    #[test]
    fn test_empty_phrase_does_not_stall() {
        let mut tw = Typewriter::new(&["", "z"], T).unwrap();
        let first = tw.tick();
        assert_eq!(first.text, "");
        assert_eq!(tw.state(), TypeState::PausedFull);
        tw.tick();
        assert_eq!(tw.phrase_index(), 1);
        assert_eq!(tw.tick().text, "z");
    }
}

//! Stats counters animating from 0 to their `data-target` once half visible.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::{debug, warn};

use crate::config::CounterConfig;
use crate::dom::Page;
use crate::error::PortfolioError;
use crate::reveal;

/// Leading-integer parse of an attribute value: optional whitespace and
/// sign, then digits; trailing garbage is ignored. `None` without digits.
pub fn parse_target(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (neg, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let value: i64 = rest[..digits].parse().ok()?;
    Some(if neg { -value } else { value })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterTick {
    pub display: i64,
    pub done: bool,
}

#[derive(Clone, Debug)]
pub struct CounterAnimation {
    current: f64,
    target: i64,
    step: f64, // added every frame
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: i64, duration_ms: u32, frame_ms: u32) -> Self {
        let frames = f64::from(duration_ms) / f64::from(frame_ms.max(1));
        Self {
            current: 0.0,
            target,
            step: target as f64 / frames.max(1.0),
            done: false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance one frame; clamps to the target exactly on the last one.
    pub fn tick(&mut self) -> CounterTick {
        if !self.done {
            self.current += self.step;
            if self.current >= self.target as f64 {
                self.current = self.target as f64;
                self.done = true;
            }
        }
        CounterTick { display: self.current.floor() as i64, done: self.done }
    }
}

pub fn mount(page: &Page, cfg: &CounterConfig) -> Result<bool, PortfolioError> {
    let counters = page.query_all(&cfg.selector)?;
    if counters.is_empty() {
        debug!("counter: no `{}` elements", cfg.selector);
        return Ok(false);
    }

    let attr = cfg.target_attr.clone();
    let (duration_ms, frame_ms) = (cfg.duration_ms, cfg.frame_ms);
    let obs = reveal::observer(cfg.threshold, move |entry, obs| {
        if !entry.is_intersecting() {
            return;
        }
        let el = entry.target();
        obs.unobserve(&el);
        let Some(target) = el.get_attribute(&attr).as_deref().and_then(parse_target) else {
            warn!("counter: element has no numeric {attr}");
            return;
        };

        let mut anim = CounterAnimation::new(target, duration_ms, frame_ms);
        let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
        let slot = handle.clone();
        let interval = Interval::new(frame_ms, move || {
            let tick = anim.tick();
            el.set_text_content(Some(&tick.display.to_string()));
            if tick.done {
                // Dropping the Interval cancels it.
                slot.borrow_mut().take();
            }
        });
        *handle.borrow_mut() = Some(interval);
    })?;
    for el in &counters {
        obs.observe(el);
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target("100"), Some(100));
        assert_eq!(parse_target("  42+"), Some(42));
        assert_eq!(parse_target("15k"), Some(15));
        assert_eq!(parse_target("-3"), Some(-3));
        assert_eq!(parse_target("abc"), None);
        assert_eq!(parse_target(""), None);
        assert_eq!(parse_target("-"), None);
    }

    #[test]
    fn test_reaches_exact_target_monotonically() {
        let mut anim = CounterAnimation::new(100, 2000, 16);
        let mut last = 0;
        let mut frames = 0;
        loop {
            let t = anim.tick();
            frames += 1;
            assert!(t.display >= last);
            assert!(t.display <= 100);
            last = t.display;
            if t.done {
                break;
            }
        }
        assert_eq!(last, 100);
        assert!((125..=126).contains(&frames));
    }

    #[test]
    fn test_frozen_after_done() {
        let mut anim = CounterAnimation::new(7, 2000, 16);
        while !anim.tick().done {}
        assert!(anim.is_done());
        assert_eq!(anim.tick(), CounterTick { display: 7, done: true });
    }

    #[test]
    fn test_zero_target_finishes_immediately() {
        let mut anim = CounterAnimation::new(0, 2000, 16);
        assert_eq!(anim.tick(), CounterTick { display: 0, done: true });
    }
}

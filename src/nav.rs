//! Mobile hamburger menu.
//!
//! One `open` flag mirrored onto the hamburger button and the link panel as
//! the `active` class. Any nav link or the theme toggle closes it.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use web_sys::{Element, MouseEvent};

use crate::config::NavConfig;
use crate::dom::{self, Page};
use crate::error::PortfolioError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

struct NavDom {
    menu: NavMenu,
    hamburger: Element,
    panel: Element,
    class: String,
}

impl NavDom {
    fn sync(&self) {
        dom::set_class(&self.hamburger, &self.class, self.menu.is_open());
        dom::set_class(&self.panel, &self.class, self.menu.is_open());
    }
}

pub fn mount(page: &Page, cfg: &NavConfig) -> Result<bool, PortfolioError> {
    let (Some(hamburger), Some(panel)) = (page.by_id(&cfg.hamburger_id), page.by_id(&cfg.panel_id))
    else {
        debug!("nav: #{} or #{} not present", cfg.hamburger_id, cfg.panel_id);
        return Ok(false);
    };

    let state = Rc::new(RefCell::new(NavDom {
        menu: NavMenu::default(),
        hamburger: hamburger.clone(),
        panel,
        class: cfg.open_class.clone(),
    }));

    {
        let state = state.clone();
        dom::listen(&hamburger, "click", move |_evt: MouseEvent| {
            let mut s = state.borrow_mut();
            s.menu.toggle();
            s.sync();
        })?;
    }

    let mut closers = page.query_all(&cfg.link_selector)?;
    if let Some(toggle) = page.by_id(&cfg.theme_toggle_id) {
        closers.push(toggle);
    }
    for el in closers {
        let state = state.clone();
        dom::listen(&el, "click", move |_evt: MouseEvent| {
            let mut s = state.borrow_mut();
            s.menu.close();
            s.sync();
        })?;
    }
    Ok(true)
}

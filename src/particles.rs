//! Canvas particle background.
//!
//! A fixed set of slow particles drifting across a full-viewport canvas,
//! bouncing off the edges. The simulation ([`ParticleField`]) is pure; the
//! mount function sizes the canvas, seeds the field and drives it from
//! `requestAnimationFrame` forever.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement};

use crate::config::ParticleConfig;
use crate::dom::{self, Page};
use crate::error::PortfolioError;
use crate::rng::{self, Rng};

/// `min(cap, floor(w * h / area))`; zero for empty or invalid sizes.
pub fn particle_count(width: f64, height: f64, area_per_particle: f64, cap: usize) -> usize {
    let n = (width * height / area_per_particle).floor();
    if n.is_finite() && n > 0.0 { (n as usize).min(cap) } else { 0 }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub vx: f64,
    pub vy: f64,
}

impl Particle {
    fn advance(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;
        if self.x < 0.0 || self.x > width {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > height {
            self.vy = -self.vy;
        }
        self.x = self.x.clamp(0.0, width);
        self.y = self.y.clamp(0.0, height);
    }
}

pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Seed `particle_count(width, height, ..)` particles at random positions.
    pub fn seed(width: f64, height: f64, cfg: &ParticleConfig, random: &mut Rng) -> Self {
        let (width, height) = (width.max(0.0), height.max(0.0));
        let count = particle_count(width, height, cfg.area_per_particle, cfg.max_particles);
        let particles = (0..count)
            .map(|_| Particle {
                x: rng::range(random, 0.0, width),
                y: rng::range(random, 0.0, height),
                radius: rng::range(random, cfg.min_radius, cfg.max_radius),
                vx: rng::range(random, -cfg.max_speed, cfg.max_speed),
                vy: rng::range(random, -cfg.max_speed, cfg.max_speed),
            })
            .collect();
        Self { width, height, particles }
    }

    /// New bounds; particles stay where they are and are pulled back in on
    /// the next step.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.advance(w, h);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

// --- Rendering / loop -------------------------------------------------------

struct ParticleScene {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    field: ParticleField,
    fill: String,
}

impl ParticleScene {
    fn frame(&mut self) {
        let (w, h) = self.field.size();
        self.ctx.clear_rect(0.0, 0.0, w, h);
        self.field.step();
        self.ctx.set_fill_style_str(&self.fill);
        for p in self.field.particles() {
            self.ctx.begin_path();
            self.ctx.arc(p.x, p.y, p.radius, 0.0, std::f64::consts::TAU).ok();
            self.ctx.fill();
        }
    }

    fn fit(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.field.resize(width, height);
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn start_loop(page: &Page, scene: Rc<RefCell<ParticleScene>>) -> Result<(), PortfolioError> {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    let window = page.window.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        scene.borrow_mut().frame();
        if let Some(cb) = f.borrow().as_ref() {
            let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(cb) = g.borrow().as_ref() {
        page.window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}

pub fn mount(page: &Page, cfg: &ParticleConfig) -> Result<bool, PortfolioError> {
    let Some(canvas) = page.by_id_as::<HtmlCanvasElement>(&cfg.canvas_id)? else {
        debug!("particles: #{} not present", cfg.canvas_id);
        return Ok(false);
    };
    let Some(ctx) = canvas.get_context("2d")? else {
        debug!("particles: 2d context unavailable");
        return Ok(false);
    };
    let ctx: CanvasRenderingContext2d = ctx
        .dyn_into()
        .map_err(|_| PortfolioError::Js("2d context has unexpected type".into()))?;

    let (w, h) = page.viewport();
    let mut rng = rng::from_entropy(page.now());
    let field = ParticleField::seed(w, h, cfg, &mut rng);
    debug!("particles: {} particles on {w}x{h}", field.particles().len());

    let mut scene = ParticleScene { canvas, ctx, field, fill: cfg.fill.clone() };
    scene.fit(w, h);
    let scene = Rc::new(RefCell::new(scene));

    {
        let scene = scene.clone();
        let resized = page.clone();
        dom::listen(&page.window, "resize", move |_evt: Event| {
            let (w, h) = resized.viewport();
            scene.borrow_mut().fit(w, h);
        })?;
    }
    start_loop(page, scene)?;
    Ok(true)
}

//! Constellation scene app
//!
//! Runs on both native and WASM platforms. Owns the point set and the
//! animation clock; every display refresh clears the frame and redraws the
//! full point-and-link web. Runs until the page (or window) goes away.

use eframe::egui;
use kurbo::Point;
use tracing::info;

use crate::field::{self, POINT_RADIUS};
use crate::theme::{colors, night_visuals};
use crate::time::AnimationClock;

/// Navigation targets for the two scene buttons.
pub const ENTER_TARGET: &str = "scene01.html";
pub const CREDITS_TARGET: &str = "credits.html";

pub struct ConstellationApp {
    /// Canvas-fitted base positions; written once at startup, read every frame
    points: Vec<Point>,
    /// Elapsed-seconds source for the jitter phase
    clock: AnimationClock,
    /// FPS counter for the header
    fps_counter: FpsCounter,
}

impl ConstellationApp {
    pub fn new(cc: &eframe::CreationContext<'_>, points: Vec<Point>) -> Self {
        cc.egui_ctx.set_visuals(night_visuals());
        info!(points = points.len(), "Constellation scene starting");

        Self {
            points,
            clock: AnimationClock::start(),
            fps_counter: FpsCounter::new(),
        }
    }

    fn render_header(&mut self, ui: &mut egui::Ui) {
        self.fps_counter.tick();

        ui.horizontal(|ui| {
            if ui.button("Enter").clicked() {
                navigate(ENTER_TARGET);
            }
            if ui.button("Credits").clicked() {
                navigate(CREDITS_TARGET);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(format!("{:.0} fps", self.fps_counter.fps()))
                        .color(colors::TEXT_MUTED),
                );
                ui.label(egui::RichText::new("/").color(colors::TEXT_MUTED));
                ui.label(
                    egui::RichText::new(format!("{} points", self.points.len()))
                        .color(colors::TEXT_MUTED),
                );
            });
        });
    }

    /// Draw the current frame of the particle web.
    ///
    /// Base positions are fixed; each point's drawn position adds the jitter
    /// offset for the current instant. Links fade with the base distance
    /// between their points. An empty set simply draws nothing.
    fn render_field(&self, ui: &mut egui::Ui) {
        let t = self.clock.elapsed_seconds();
        let available = ui.available_size();
        let (_response, painter) = ui.allocate_painter(available, egui::Sense::hover());

        // Links below, points on top
        for link in field::frame_links(&self.points, t) {
            painter.line_segment(
                [to_pos2(link.from), to_pos2(link.to)],
                egui::Stroke::new(1.0, colors::link_stroke(link.opacity)),
            );
        }

        for p in &self.points {
            let drawn = *p + field::jitter_offset(*p, t);
            painter.circle_filled(to_pos2(drawn), POINT_RADIUS as f32, colors::point_fill());
        }
    }
}

impl eframe::App for ConstellationApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Unconditional: the loop has no stop condition
        ctx.request_repaint();

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(colors::BG_PRIMARY))
            .show(ctx, |ui| {
                self.render_header(ui);
                self.render_field(ui);
            });
    }
}

/// Points are fitted in canvas pixel space, which matches egui screen space.
fn to_pos2(p: Point) -> egui::Pos2 {
    egui::pos2(p.x as f32, p.y as f32)
}

/// Leave for another page. Fire-and-forget, no confirmation.
#[cfg(target_arch = "wasm32")]
fn navigate(target: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(target) {
            tracing::error!(?e, target, "Navigation failed");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn navigate(target: &str) {
    info!(target, "Navigation requested (browser only, ignored)");
}

/// Rolling-window FPS counter
pub struct FpsCounter {
    clock: AnimationClock,
    frames: std::collections::VecDeque<f64>,
}

impl FpsCounter {
    const WINDOW: usize = 90;

    pub fn new() -> Self {
        Self {
            clock: AnimationClock::start(),
            frames: std::collections::VecDeque::with_capacity(Self::WINDOW + 1),
        }
    }

    pub fn tick(&mut self) {
        self.frames.push_back(self.clock.elapsed_seconds());
        while self.frames.len() > Self::WINDOW {
            self.frames.pop_front();
        }
    }

    pub fn fps(&self) -> f64 {
        let (Some(first), Some(last)) = (self.frames.front(), self.frames.back()) else {
            return 0.0;
        };
        let elapsed = last - first;
        if self.frames.len() < 2 || elapsed <= 0.0 {
            return 0.0;
        }
        (self.frames.len() as f64 - 1.0) / elapsed
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_counter_needs_two_frames() {
        let mut counter = FpsCounter::new();
        assert_eq!(counter.fps(), 0.0);
        counter.tick();
        assert_eq!(counter.fps(), 0.0);
    }

    #[test]
    fn test_fps_counter_window_is_bounded() {
        let mut counter = FpsCounter::new();
        for _ in 0..500 {
            counter.tick();
        }
        assert!(counter.frames.len() <= FpsCounter::WINDOW);
    }
}

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use common::games::snake::{
    Color, DrawRect, ExitReason, SnakeError, SnakeGameState, SnakeSettings, TickOutcome,
};
use common::games::{SessionRng, TickTimer};
use common::{log, trace};

use crate::input::collect_inputs;

/// Shared slot the app fills in once the run is over; `main` reads it after
/// the window closes.
#[derive(Clone, Default)]
pub struct RunResult(Rc<RefCell<Option<Result<ExitReason, SnakeError>>>>);

impl RunResult {
    pub fn new() -> Self {
        Self::default()
    }

    fn set(&self, result: Result<ExitReason, SnakeError>) {
        let mut slot = self.0.borrow_mut();
        if slot.is_none() {
            *slot = Some(result);
        }
    }

    fn is_set(&self) -> bool {
        self.0.borrow().is_some()
    }

    /// A window closed before anything was recorded counts as a quit.
    pub fn take(&self) -> Result<ExitReason, SnakeError> {
        self.0.borrow_mut().take().unwrap_or(Ok(ExitReason::Quit))
    }
}

pub struct SnakeApp {
    state: SnakeGameState,
    rng: SessionRng,
    timer: TickTimer,
    background: Color,
    ticks: u64,
    result: RunResult,
}

impl SnakeApp {
    pub fn new(settings: &SnakeSettings, mut rng: SessionRng, result: RunResult) -> Result<Self, SnakeError> {
        let state = SnakeGameState::new(settings, &mut rng)?;
        let timer = TickTimer::new(settings.ticks_per_second);
        log!(
            "Board {}x{} cells, one tick every {:?}",
            state.grid.width_cells(),
            state.grid.height_cells(),
            timer.interval()
        );
        Ok(Self {
            state,
            rng,
            timer,
            background: settings.background_color,
            ticks: 0,
            result,
        })
    }

    fn finish(&self, ctx: &egui::Context, result: Result<ExitReason, SnakeError>) {
        log!("Run finished after {} ticks: {:?}", self.ticks, result);
        self.result.set(result);
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }

    fn step(&mut self, ctx: &egui::Context) {
        for input in collect_inputs(ctx) {
            if let Some(reason) = self.state.apply_input(input) {
                self.finish(ctx, Ok(reason));
                return;
            }
        }

        if !self.timer.poll(Instant::now()) {
            return;
        }

        self.ticks += 1;
        match self.state.tick(&mut self.rng) {
            Ok(TickOutcome::Running(events)) => {
                if events.ate_apple || events.reset {
                    trace!("Tick {}: {:?}", self.ticks, events);
                }
            }
            Ok(TickOutcome::Finished(reason)) => self.finish(ctx, Ok(reason)),
            Err(e) => self.finish(ctx, Err(e)),
        }
    }

    fn paint(&self, ui: &mut egui::Ui) {
        let origin = ui.max_rect().min;
        let painter = ui.painter();
        for rect in self.state.frame(self.background) {
            painter.rect_filled(to_egui_rect(origin, &rect), 0.0, to_color32(rect.color));
        }
    }
}

fn to_egui_rect(origin: egui::Pos2, rect: &DrawRect) -> egui::Rect {
    egui::Rect::from_min_size(
        origin + egui::vec2(rect.position.x as f32, rect.position.y as f32),
        egui::vec2(rect.width as f32, rect.height as f32),
    )
}

fn to_color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.result.is_set() {
            self.step(ctx);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.paint(ui));

        if !self.result.is_set() {
            ctx.request_repaint_after(self.timer.remaining(Instant::now()));
        }
    }
}

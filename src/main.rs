//! Render-loop driver: samples the clock once per tick, asks the core for
//! geometry, and draws it. All simulation state lives in the core; the
//! only thing owned here is the clock and a few UI toggles.

use std::time::Instant;

use eframe::egui::{self, Color32, Pos2, Sense, Stroke};

use merger_grid::grid::{self, Lattice};
use merger_grid::physics::constants::ANIMATION_DURATION;
use merger_grid::{MergerConfig, Phase, Timeline};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = MergerConfig::default();
    let app = MergerApp::new(config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 900.0])
            .with_title("Binary Merger"),
        ..Default::default()
    };

    eframe::run_native(
        "Binary Merger",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("window error: {e}"))?;
    Ok(())
}

struct MergerApp {
    timeline: Timeline,
    lattice: Lattice,
    t: f64,
    last_tick: Instant,
    running: bool,
    looping: bool,
    time_scale: f64,
    last_phase: Phase,
}

impl MergerApp {
    fn new(config: MergerConfig) -> anyhow::Result<Self> {
        let timeline = Timeline::new(config)?;
        let lattice = Lattice::new(config.lattice_size, config.cell_spacing);
        Ok(Self {
            timeline,
            lattice,
            t: 0.0,
            last_tick: Instant::now(),
            running: true,
            looping: true,
            time_scale: 1.0,
            last_phase: Phase::Inspiral,
        })
    }

    fn restart(&mut self) {
        self.t = 0.0;
        self.last_tick = Instant::now();
        self.last_phase = Phase::Inspiral;
    }

    fn advance_clock(&mut self) {
        let dt = self.last_tick.elapsed().as_secs_f64();
        self.last_tick = Instant::now();
        if !self.running {
            return;
        }
        self.t += dt * self.time_scale;
        // Terminal condition is the driver's job, not the core's.
        if self.t >= ANIMATION_DURATION {
            if self.looping {
                self.t = 0.0;
                self.last_phase = Phase::Inspiral;
            } else {
                self.t = ANIMATION_DURATION;
            }
        }
    }
}

impl eframe::App for MergerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.advance_clock();

        let sample = self.timeline.evaluate(self.t);
        if sample.phase != self.last_phase {
            log::info!("phase transition: {:?} at t={:.3}s", sample.phase, self.t);
            self.last_phase = sample.phase;
        }
        let frame = grid::render_frame(&sample, &self.lattice);

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.running { "Pause" } else { "Play" })
                    .clicked()
                {
                    self.running = !self.running;
                    self.last_tick = Instant::now();
                }
                if ui.button("Restart").clicked() {
                    self.restart();
                }
                ui.checkbox(&mut self.looping, "Loop");

                ui.separator();
                ui.label("Speed:");
                ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=4.0).text("x"));

                ui.separator();
                ui.label(format!("t: {:.2}s", self.t));
                ui.label(format!("Phase: {:?}", sample.phase));
                ui.label(format!("r: {:.1}", self.timeline.separation(self.t)));
                ui.label(format!("|h|: {:.3}", sample.strain.amplitude()));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
            let rect = response.rect;

            // Fit the undistorted grid into the panel with some margin.
            let extent =
                (self.lattice.size().saturating_sub(1)) as f64 * self.lattice.spacing();
            let scale = if extent > 0.0 {
                0.85 * f64::from(rect.width().min(rect.height())) / extent
            } else {
                1.0
            };
            let center = rect.center();
            let to_screen = |p: glam::DVec2| {
                Pos2::new(
                    center.x + (p.x * scale) as f32,
                    center.y + (p.y * scale) as f32,
                )
            };

            let grid_stroke = Stroke::new(1.0, Color32::from_rgb(90, 140, 200));
            for (a, b) in &frame.segments {
                painter.line_segment([to_screen(*a), to_screen(*b)], grid_stroke);
            }
            for body in &frame.bodies {
                painter.circle_filled(to_screen(*body), 9.0, Color32::from_rgb(255, 170, 40));
            }
        });

        if self.running {
            ctx.request_repaint();
        }
    }
}

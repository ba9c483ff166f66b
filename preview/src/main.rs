//! Desktop preview app for the binary LEDs module
//!
//! Shows the five lamps and the three wires in a window. Clicks on the wires
//! and the arm button go through the same event queue a game host would use.

use std::time::Instant as StdInstant;

use binary_leds::{
    BinaryLedsModule, EventProcessor, EventQueue, EventSender, FrameScheduler, Instant,
    LedDisplay, LedDisplayConfig, ModuleConfig, OutputDriver, Rgb, WireAdapter, WireSlot,
    color::wire_rgb, display::LAMP_COUNT,
};
use eframe::egui::{self};

/// Event queue size
const EVENT_QUEUE_SIZE: usize = 8;

/// Size of each lamp in pixels
const LAMP_SIZE: f32 = 36.0;

/// Gap between lamps
const LAMP_GAP: f32 = 10.0;

/// How many host messages to keep on screen
const LOG_LINES: usize = 12;

/// Static event queue between the UI and the module
static EVENTS: EventQueue<EVENT_QUEUE_SIZE> = EventQueue::<EVENT_QUEUE_SIZE>::new();

type PreviewScheduler =
    FrameScheduler<'static, LedDisplay<FrameCapture>, PreviewHost, EVENT_QUEUE_SIZE>;

/// Keeps the last frame written to the lamps
#[derive(Default)]
struct FrameCapture {
    frame: [Rgb; LAMP_COUNT],
}

impl OutputDriver for FrameCapture {
    fn write(&mut self, colors: &[Rgb]) {
        for (pixel, color) in self.frame.iter_mut().zip(colors) {
            *pixel = *color;
        }
    }
}

/// Stands in for the game: records strikes, passes and cut wires
#[derive(Default)]
struct PreviewHost {
    severed: [bool; 3],
    strikes: u32,
    passed: bool,
    log: Vec<String>,
}

impl PreviewHost {
    fn push_log(&mut self, line: String) {
        self.log.push(line);
        if self.log.len() > LOG_LINES {
            self.log.remove(0);
        }
    }
}

impl WireAdapter for PreviewHost {
    fn sever(&mut self, slot: WireSlot) {
        self.severed[slot.index()] = true;
    }

    fn play_cut_cue(&mut self) {
        self.push_log("*snip*".to_owned());
    }

    fn report_strike(&mut self) {
        self.strikes += 1;
        self.push_log(format!("Strike! ({} total)", self.strikes));
    }

    fn report_pass(&mut self) {
        self.passed = true;
        self.push_log("Module solved".to_owned());
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 480.0])
            .with_title("Binary LEDs Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "binary-leds-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    /// Module, lamps and host, driven frame by frame
    scheduler: PreviewScheduler,
    /// Event sender for UI input
    event_sender: EventSender<'static, EVENT_QUEUE_SIZE>,

    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether the clock is running
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// Config used for the next module
    safety_valve: bool,
    dark_until_armed: bool,
    /// Show the solution row for debugging
    show_solution: bool,
}

impl PreviewApp {
    fn new() -> Self {
        let mut app = Self {
            scheduler: Self::build_scheduler(&ModuleConfig::default(), Instant::from_millis(0)),
            event_sender: EVENTS.sender(),
            t_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            safety_valve: true,
            dark_until_armed: true,
            show_solution: false,
        };
        app.log_module();
        app
    }

    fn build_scheduler(config: &ModuleConfig, now: Instant) -> PreviewScheduler {
        let module = BinaryLedsModule::new(&mut rand::thread_rng(), config.clone(), now);
        let display = LedDisplay::new(FrameCapture::default(), LedDisplayConfig::default());
        FrameScheduler::new(
            module,
            display,
            PreviewHost::default(),
            EventProcessor::new(EVENTS.receiver()),
        )
    }

    /// Start over with a fresh random module
    fn reset_module(&mut self) {
        while EVENTS.pop().is_some() {}
        let config = ModuleConfig {
            safety_valve: self.safety_valve,
            dark_until_armed: self.dark_until_armed,
            ..ModuleConfig::default()
        };
        self.scheduler = Self::build_scheduler(&config, self.now());
        self.log_module();
    }

    fn log_module(&mut self) {
        let module = self.scheduler.module();
        let line = format!(
            "Module {}: sequence {}, offset {}",
            module.id(),
            module.sequence_id().as_raw(),
            module.initial_offset()
        );
        self.scheduler.adapter_mut().push_log(line);
    }

    fn now(&self) -> Instant {
        Instant::from_millis(self.t_ms)
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            let delta_ms_f64 = if delta_ms_f64.is_finite() {
                #[allow(clippy::cast_precision_loss)]
                delta_ms_f64.clamp(0.0, u64::MAX as f64)
            } else {
                0.0
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = delta_ms_f64 as u64;
            self.t_ms = self.t_ms.wrapping_add(delta_ms);
        }
    }

    fn send_cut(&mut self, slot: WireSlot) {
        let now = self.now();
        if self.event_sender.wire_interacted(slot, now).is_err() {
            self.scheduler
                .adapter_mut()
                .push_log("Event queue full, cut dropped".to_owned());
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        self.scheduler.tick(self.now());

        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            // <PlaybackControls>
            ui.horizontal(|ui| {
                if ui.button("⏮ New module").clicked() {
                    self.reset_module();
                }
                if ui
                    .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                    .clicked()
                {
                    self.playing = !self.playing;
                }
                if ui
                    .add_enabled(!self.scheduler.module().is_armed(), egui::Button::new("Arm"))
                    .clicked()
                {
                    let _ = self.event_sender.activate();
                }
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                let secs = self.t_ms / 1000;
                let ms = self.t_ms % 1000;
                ui.label(format!("Time: {secs}.{ms:03}s"));
                ui.add_space(8.0);
                ui.label("Speed:");
                ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=5.0).logarithmic(true));
            });

            ui.horizontal(|ui| {
                ui.checkbox(&mut self.safety_valve, "Safety valve");
                ui.checkbox(&mut self.dark_until_armed, "Dark until armed");
                ui.checkbox(&mut self.show_solution, "Show solution");
            });
            // </PlaybackControls>

            ui.add_space(16.0);

            // === Lamps ===
            let frame = *self.scheduler.display().frame();
            #[allow(clippy::cast_precision_loss)]
            let width = LAMP_COUNT as f32 * (LAMP_SIZE + LAMP_GAP);
            let (response, painter) =
                ui.allocate_painter(egui::vec2(width, LAMP_SIZE), egui::Sense::hover());
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for (i, pixel) in frame.iter().enumerate() {
                let x = origin.x + i as f32 * (LAMP_SIZE + LAMP_GAP);
                let center = egui::pos2(x + LAMP_SIZE / 2.0, origin.y + LAMP_SIZE / 2.0);
                let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                painter.circle_filled(center, LAMP_SIZE / 2.0, color);
                painter.circle_stroke(
                    center,
                    LAMP_SIZE / 2.0,
                    egui::Stroke::new(1.0, egui::Color32::GRAY),
                );
            }

            ui.add_space(16.0);

            // === Wires ===
            let module = self.scheduler.module();
            let wires = *module.wires();
            let mut clicked = None;
            for (slot, wire) in WireSlot::ALL.into_iter().zip(wires) {
                let rgb = wire_rgb(wire.color());
                let color = egui::Color32::from_rgb(rgb.r, rgb.g, rgb.b);
                let severed = self.scheduler.adapter().severed[slot.index()];
                let label = if severed {
                    egui::RichText::new("✂ ─────   ─────").color(color)
                } else {
                    egui::RichText::new("━━━━━━━━━━━━━━").color(color)
                };
                ui.horizontal(|ui| {
                    if ui.add_enabled(!severed, egui::Button::new(label)).clicked() {
                        clicked = Some(slot);
                    }
                    if self.show_solution {
                        let solution = binary_leds::SequenceTable::solution(
                            module.sequence_id(),
                            wire.color(),
                        );
                        ui.label(format!("{} at position {solution}", wire.color().as_str()));
                    }
                });
            }
            if let Some(slot) = clicked {
                self.send_cut(slot);
            }

            ui.add_space(8.0);

            let module = self.scheduler.module();
            let host = self.scheduler.adapter();
            ui.label(format!(
                "State: {:?}  |  Strikes: {}{}  |  Blink delay: {} ms  |  Position: {}",
                module.state(),
                host.strikes,
                if host.passed { "  |  Passed" } else { "" },
                module.step_duration().as_millis(),
                module.position_at(self.now())
            ));

            ui.add_space(8.0);
            ui.separator();
            for line in &self.scheduler.adapter().log {
                ui.label(line);
            }
        });
    }
}

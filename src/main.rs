//! Crossed Lines.
//!
//! Interaktives Zeichnen eines Netzes aus Liniensegmenten, in dem jedes
//! Segment höchstens zwei Kreuzungen trägt. egui + wgpu.

use eframe::egui;
use eframe::egui_wgpu;
use crossed_lines::{render, ui, AppController, AppIntent, AppState, LinesOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Crossed Lines v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Crossed Lines"),
            renderer: eframe::Renderer::Wgpu,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Crossed Lines",
            options,
            Box::new(|cc| {
                let render_state = cc.wgpu_render_state.as_ref().ok_or_else(|| {
                    anyhow::anyhow!(
                        "wgpu nicht verfügbar: Renderer konnte nicht initialisiert werden"
                    )
                })?;
                Ok(Box::new(LinesApp::new(render_state)))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct LinesApp {
    state: AppState,
    controller: AppController,
    renderer: std::sync::Arc<std::sync::Mutex<render::Renderer>>,
    device: eframe::wgpu::Device,
    queue: eframe::wgpu::Queue,
    input: ui::InputState,
    /// Zuletzt an das Fenster gemeldeter Vollbild-Zustand
    applied_fullscreen: bool,
}

impl LinesApp {
    fn new(render_state: &egui_wgpu::RenderState) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = LinesOptions::config_path();
        let options = LinesOptions::load_from_file(&config_path);

        let mut state = AppState::with_options(options);
        state.options_path = config_path;

        let mut controller = AppController::new();
        if let Err(e) = controller.handle_intent(&mut state, AppIntent::SessionStarted) {
            log::error!("Start-Bestückung fehlgeschlagen: {:#}", e);
        }

        Self {
            state,
            controller,
            renderer: std::sync::Arc::new(std::sync::Mutex::new(render::Renderer::new(
                render_state,
            ))),
            device: render_state.device.clone(),
            queue: render_state.queue.clone(),
            input: ui::InputState::new(),
            applied_fullscreen: false,
        }
    }
}

impl eframe::App for LinesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        self.process_events(events);

        self.draw_viewport(ctx);

        self.sync_fullscreen(ctx);

        // Kamera-Nachführung läuft kontinuierlich
        ctx.request_repaint();
    }
}

impl LinesApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    /// Ein Frame Zeichenfläche: Eingabe sammeln, Controller-Tick, Szene malen.
    fn draw_viewport(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let frame_input = self.input.collect_frame_input(
                    ui,
                    &response,
                    &self.state.view.viewport,
                    &self.state.view.camera,
                );

                let scene = match self.controller.tick(&mut self.state, &frame_input) {
                    Ok(scene) => scene,
                    Err(e) => {
                        log::error!("Frame fehlgeschlagen: {:#}", e);
                        self.controller.build_render_scene(&self.state)
                    }
                };

                ui.painter()
                    .rect_filled(rect, 0.0, to_color32(scene.clear_color));

                let callback = egui_wgpu::Callback::new_paint_callback(
                    rect,
                    render::WgpuRenderCallback {
                        renderer: self.renderer.clone(),
                        render_data: render::WgpuRenderData { scene },
                        device: self.device.clone(),
                        queue: self.queue.clone(),
                    },
                );

                ui.painter().add(callback);
            });
    }

    fn sync_fullscreen(&mut self, ctx: &egui::Context) {
        if self.state.view.fullscreen == self.applied_fullscreen {
            return;
        }
        self.applied_fullscreen = self.state.view.fullscreen;
        ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(self.applied_fullscreen));
    }
}

fn to_color32(color: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0].clamp(0.0, 1.0) * 255.0) as u8,
        (color[1].clamp(0.0, 1.0) * 255.0) as u8,
        (color[2].clamp(0.0, 1.0) * 255.0) as u8,
        (color[3].clamp(0.0, 1.0) * 255.0) as u8,
    )
}

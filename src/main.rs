mod app;
mod color;
mod demo;
mod state;
mod ui;

use app::TiltViewerApp;
use demo::DemoConfig;
use eframe::egui;
use ui::figure::FigureQueue;

fn main() -> eframe::Result {
    env_logger::init();

    // Everything is loaded before the event loop starts; the window only
    // drains the queued figures.
    let (mut queue, incoming) = FigureQueue::channel();
    demo::run(&DemoConfig::default(), &mut queue);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Tilt Viewer – Tiltmeter Data",
        options,
        Box::new(move |cc| {
            queue.attach(cc.egui_ctx.clone());
            Ok(Box::new(TiltViewerApp::new(queue, incoming)))
        }),
    )
}

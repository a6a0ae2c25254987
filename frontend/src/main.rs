use frontend::App;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        gloo_console::error!(format!("Logger init failed: {}", e));
    }
    log::info!("Starting community feedback app");
    yew::Renderer::<App>::new().render();
}

// =============================================================================
// Admin Web - WASM Entry Point
// =============================================================================
// Trunk compiles this binary and injects it into index.html.
// =============================================================================

use admin_web::App;

fn main() {
    console_error_panic_hook::set_once();

    // Ignore if already initialized by the library entry point
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Starting admin dashboard...");

    leptos::mount::mount_to_body(App);
}

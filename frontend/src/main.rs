mod config;
mod global;

use crate::config::CONFIG;

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    match global::install() {
        Ok(_) => web_sys::console::log_1(&format!(
            "{} config installed as window.{} ({})",
            CONFIG.service.name,
            global::GLOBAL_NAME,
            CONFIG.api.base_url
        ).into()),
        Err(e) => web_sys::console::error_1(&format!("Failed to install config: {}", e).into()),
    }
}

pub mod app;
pub mod build_info;
pub mod component;
pub mod config;
pub mod dom;
pub mod error;
pub mod logging;
pub mod mount;
pub mod panic_hook;
pub mod startup;

pub use app::App;
pub use config::StartupConfig;
pub use error::StartupError;
pub use panic_hook::set_panic_hook;
pub use startup::{Bootstrap, PanicHook};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// The mounted root component, handed back to the page.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub struct AppHandle {
    app: Option<App<dom::BrowserElement>>,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl AppHandle {
    pub fn destroy(&mut self) -> Result<(), JsValue> {
        if let Some(app) = self.app.take() {
            app.destroy()
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
        }
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn main() -> Result<AppHandle, JsValue> {
    set_panic_hook();
    let to_js = |e: &dyn std::fmt::Display| JsValue::from_str(&e.to_string());

    let config = StartupConfig::embedded().map_err(|e| JsValue::from_str(&format!("{:#}", e)))?;
    logging::init(config.log_level);

    let document = dom::BrowserDocument::current().map_err(|e| to_js(&e))?;
    let app = Bootstrap::new(PanicHook, &config)
        .run(&document)
        .map_err(|e| to_js(&e))?;
    Ok(AppHandle { app: Some(app) })
}

use std::sync::Once;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

static INSTALL: Once = Once::new();

/// Routes panics of this module to the host's error console.
///
/// Must run before anything else in the module can fail. Only the first
/// call installs the hook; later calls return immediately.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn set_panic_hook() {
    INSTALL.call_once(install);
}

pub fn is_installed() -> bool {
    INSTALL.is_completed()
}

#[cfg(target_arch = "wasm32")]
fn install() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
}

#[cfg(not(target_arch = "wasm32"))]
fn install() {
    let prev = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        log::error!("{}", info);
        prev(info);
    }));
}

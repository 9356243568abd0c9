#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use vite_rust_wasm::{
        dom::{HeadlessDocument, HeadlessElement},
        logging, App, Bootstrap, PanicHook, StartupConfig,
    };

    vite_rust_wasm::set_panic_hook();

    let config = StartupConfig::embedded()?;
    let _guard = logging::init(config.log_level)?;

    let document = HeadlessDocument::for_selector(&config.selector)
        .with_context(|| format!("prerender page for `{}`", config.selector))?;

    let _app: App<HeadlessElement> = Bootstrap::new(PanicHook, &config)
        .run(&document)
        .context("prerender startup")?;

    println!("{}", document.to_html());
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}

use std::sync::atomic::{AtomicBool, Ordering};

use crate::{
    build_info,
    component::RootComponent,
    config::StartupConfig,
    dom::Document,
    error::{ModuleInitError, Result, StartupError},
    mount, panic_hook,
};

static STARTED: AtomicBool = AtomicBool::new(false);

/// Proof that the panic hook was registered. Mounting requires one.
pub struct HookInstalled(());

pub trait HookRegistrar {
    fn register(&self) -> std::result::Result<(), ModuleInitError>;
}

/// Registers this module's own panic hook.
pub struct PanicHook;

impl HookRegistrar for PanicHook {
    fn register(&self) -> std::result::Result<(), ModuleInitError> {
        // A module that fails to load never gets here; that failure is
        // reported by the host loader.
        panic_hook::set_panic_hook();
        Ok(())
    }
}

/// The startup sequence: register the panic hook, then mount the root
/// component. Only the first run in a process proceeds; later runs fail
/// with [`StartupError::AlreadyStarted`], including after a failed run.
pub struct Bootstrap<R> {
    registrar: R,
    selector: String,
    started: &'static AtomicBool,
}

impl<R: HookRegistrar> Bootstrap<R> {
    pub fn new(registrar: R, config: &StartupConfig) -> Self {
        Self::with_guard(registrar, config, &STARTED)
    }

    fn with_guard(registrar: R, config: &StartupConfig, started: &'static AtomicBool) -> Self {
        Self {
            registrar,
            selector: config.selector.clone(),
            started,
        }
    }

    pub fn run<D, C>(self, document: &D) -> Result<C>
    where
        D: Document,
        C: RootComponent<D::Element>,
    {
        if self.started.swap(true, Ordering::SeqCst) {
            let e = StartupError::AlreadyStarted;
            log::error!("startup aborted: {}", e);
            return Err(e);
        }

        let start = instant::Instant::now();
        log::info!("{}", build_info::summary());

        let hook = match self.registrar.register() {
            Ok(()) => HookInstalled(()),
            Err(e) => {
                log::error!("startup aborted: {}", e);
                return Err(e.into());
            }
        };
        log::info!("panic hook installed");

        match mount::mount(&hook, document, &self.selector) {
            Ok(component) => {
                log::info!(
                    "root component mounted into `{}` in {:?}",
                    self.selector,
                    start.elapsed()
                );
                Ok(component)
            }
            Err(e) => {
                log::error!("startup aborted: {}", e);
                Err(e)
            }
        }
    }
}

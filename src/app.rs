//! Process-wide application bootstrap.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::backend::{Backend, BackendError, resolve_backend};

/// The process-wide GUI context owned by this crate.
///
/// At most one instance exists per process. It records which display
/// backend it was constructed for and, optionally, a display name fixed
/// at construction time. The instance is never torn down explicitly; its
/// lifetime ends with the process.
#[derive(Debug)]
pub struct Application {
    backend: Backend,
    name: Option<String>,
    running: AtomicBool,
}

impl Application {
    fn new(backend: Backend, name: Option<&str>) -> Self {
        tracing::debug!(backend = %backend, name = ?name, "creating application instance");
        Self {
            backend,
            name: name.map(str::to_owned),
            running: AtomicBool::new(false),
        }
    }

    /// The display backend this application was constructed for.
    ///
    /// Always equal to [`active_backend`](crate::backend::active_backend):
    /// the instance is only constructed after, and from, a successful
    /// resolution.
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// The display name supplied when the instance was constructed.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Hand control to the toolkit's event loop on the calling thread.
    ///
    /// Must be called from the main thread, at most once per process; the
    /// toolkit owns a single event loop. A second call is rejected
    /// without touching the toolkit. The call returns when the loop
    /// exits.
    pub fn run<F>(&self, on_ready: F)
    where
        F: FnOnce(&mut gpui::App) + 'static,
    {
        if self.running.swap(true, Ordering::SeqCst) {
            tracing::error!("event loop already started; ignoring second run request");
            return;
        }
        gpui::Application::new().run(on_ready);
    }
}

static APPLICATION: OnceLock<Application> = OnceLock::new();

fn get_or_create<'a>(
    cell: &'a OnceLock<Application>,
    resolve: impl FnOnce() -> Result<Backend, BackendError>,
    name: Option<&str>,
) -> Result<&'a Application, BackendError> {
    if let Some(app) = cell.get() {
        return Ok(app);
    }
    let backend = resolve()?;
    Ok(cell.get_or_init(|| Application::new(backend, name)))
}

/// Return the process-wide [`Application`], creating it on first call.
///
/// The first call forces backend resolution and fails with
/// [`BackendError::NoBackendAvailable`] when no display binding can be
/// bound; in that case nothing is constructed and later calls fail the
/// same way.
///
/// `name` is honored only by the call that constructs the instance. On
/// every later call it is ignored and the existing instance is returned
/// unchanged, so callers expecting a rename will be surprised: the
/// instance keeps the name it was created with.
pub fn get_application(name: Option<&str>) -> Result<&'static Application, BackendError> {
    get_or_create(&APPLICATION, resolve_backend, name)
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn later_calls_return_the_same_instance_and_keep_the_first_name() {
        let cell = OnceLock::new();
        let first = get_or_create(&cell, || Ok(Backend::Wayland), Some("viewer")).unwrap();
        let second = get_or_create(&cell, || Ok(Backend::X11), Some("renamed")).unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(second.name(), Some("viewer"));
        assert_eq!(second.backend(), Backend::Wayland);
    }

    #[test]
    fn resolution_failure_constructs_nothing() {
        let cell = OnceLock::new();
        let result = get_or_create(
            &cell,
            || {
                Err(BackendError::NoBackendAvailable {
                    attempts: Vec::new(),
                })
            },
            Some("viewer"),
        );
        assert!(result.is_err());
        assert!(cell.get().is_none());
    }

    #[test]
    fn concurrent_first_calls_construct_exactly_once() {
        let cell = OnceLock::new();
        thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    let cell = &cell;
                    scope.spawn(move || {
                        let name = format!("caller-{i}");
                        let app = get_or_create(cell, || Ok(Backend::X11), Some(&name)).unwrap();
                        app as *const Application as usize
                    })
                })
                .collect();
            let addresses: Vec<usize> = handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect();
            assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
        });
        let app = cell.get().unwrap();
        assert_eq!(app.backend(), Backend::X11);
        assert!(app.name().is_some_and(|name| name.starts_with("caller-")));
    }
}

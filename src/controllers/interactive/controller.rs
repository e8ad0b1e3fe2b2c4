use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::actions::render_plane::{RenderPlaneError, render_plane_cancelable};
use log::{debug, info, trace, warn};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

type PendingRequest = Option<(u64, Arc<RenderRequest>)>;

struct SharedState {
    name: &'static str,
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<PendingRequest>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
}

impl SharedState {
    // A panicking presenter must not wedge the worker, so poisoning is ignored.
    fn lock_request(&self) -> MutexGuard<'_, PendingRequest> {
        self.latest_request
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Renders the newest submitted request on a dedicated worker thread.
///
/// Submitting a request supersedes whatever is queued or in flight: the
/// running render notices through its cancel token and is dropped without
/// an event. Only the request that is still current when it finishes is
/// presented.
pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    /// `name` only labels log lines, e.g. `"mandelbrot"` or `"julia"`.
    pub fn new(name: &'static str, presenter_port: Arc<dyn InteractiveControllerPresenterPort>) -> Self {
        let shared = Arc::new(SharedState {
            name,
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    pub fn submit_request(&self, request: Arc<RenderRequest>) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        debug!(
            "{}: submitted generation {} ({} {}x{}, {} iterations)",
            self.shared.name,
            generation,
            request.fractal.display_name(),
            request.params.width(),
            request.params.height(),
            request.params.max_iterations()
        );

        *self.shared.lock_request() = Some((generation, request));

        self.shared.wake.notify_one();

        generation
    }

    /// Stops the worker. Any in-flight render is cancelled and not presented.
    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn next_job(shared: &SharedState) -> Option<(u64, Arc<RenderRequest>)> {
        let mut guard = shared.lock_request();

        loop {
            if shared.shutdown.load(Ordering::Acquire) {
                return None;
            }

            if let Some(job) = guard.take() {
                return Some(job);
            }

            guard = shared
                .wake
                .wait(guard)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        while let Some((job_generation, request)) = Self::next_job(shared) {
            let cancel_token = || {
                shared.shutdown.load(Ordering::Relaxed)
                    || job_generation != shared.generation.load(Ordering::Relaxed)
            };

            let start = Instant::now();
            let result = render_plane_cancelable(&request.params, request.fractal, &cancel_token);
            let render_duration = start.elapsed();

            let is_current = job_generation == shared.generation.load(Ordering::Acquire);

            match result {
                Ok(result) if is_current => {
                    info!(
                        "{}: generation {} rendered in {:.1?}",
                        shared.name, job_generation, render_duration
                    );

                    shared.presenter_port.present(RenderEvent::Frame(FrameData {
                        generation: job_generation,
                        result,
                        render_duration,
                    }));

                    shared
                        .last_completed_generation
                        .store(job_generation, Ordering::Release);
                }
                Err(RenderPlaneError::Cancelled(_)) => {
                    trace!("{}: generation {} cancelled", shared.name, job_generation);
                }
                Err(err) if is_current => {
                    warn!(
                        "{}: generation {} failed: {}",
                        shared.name, job_generation, err
                    );

                    shared
                        .presenter_port
                        .present(RenderEvent::Error(RenderError {
                            generation: job_generation,
                            message: err.to_string(),
                        }));

                    shared
                        .last_completed_generation
                        .store(job_generation, Ordering::Release);
                }
                _ => {
                    trace!(
                        "{}: generation {} superseded before presenting",
                        shared.name, job_generation
                    );
                }
            }
        }
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

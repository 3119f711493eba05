//! `use_initial_loader`: drives the load gate on browser timers.
//!
//! ARCHITECTURE
//! ============
//! The hook owns one [`loadgate::LoadGate`] per mounted app and wires its
//! effects to gloo timers, `sessionStorage`, the DOM probe, and the body
//! marker. The splash screen only ever sees the resulting [`LoadState`]
//! signal.
//!
//! Timer callbacks hold weak references to the host, so the only strong
//! reference lives in the reactive owner. Disposing the owner drops the host,
//! and dropping gloo timers clears them. `on_cleanup` additionally tears the
//! gate down so a pending finish cannot write the session flag.
//!
//! A timer is never dropped from inside its own callback; stopped timers are
//! cancelled immediately and their closures released on the next microtask.

use leptos::prelude::*;
use loadgate::{GateConfig, LoadState};

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use gloo_timers::callback::{Interval, Timeout};
#[cfg(feature = "csr")]
use js_sys::{Date, Math};
#[cfg(feature = "csr")]
use loadgate::{Effect, LoadGate, LoadSession};

#[cfg(feature = "csr")]
use crate::util::{body_marker, dom_probe::DomProbe, session_storage::BrowserSessionStore};

/// Start the splash gate with the shipped timings.
pub fn use_initial_loader() -> ReadSignal<LoadState> {
    use_initial_loader_with(GateConfig::default())
}

/// Start the splash gate with custom timings. Invalid configs fall back to
/// the defaults.
pub fn use_initial_loader_with(config: GateConfig) -> ReadSignal<LoadState> {
    let state = RwSignal::new(LoadState::default());

    #[cfg(feature = "csr")]
    {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("invalid load gate config ({e}); using defaults");
                GateConfig::default()
            }
        };
        let host = StoredValue::new_local(GateHost::start(config, state));
        on_cleanup(move || {
            host.try_with_value(GateHost::teardown);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }

    state.read_only()
}

#[cfg(feature = "csr")]
#[derive(Default)]
struct Timers {
    ticker: Option<Interval>,
    poller: Option<Interval>,
    finish: Option<Timeout>,
}

#[cfg(feature = "csr")]
struct HostInner {
    gate: RefCell<LoadGate>,
    timers: RefCell<Timers>,
    state: RwSignal<LoadState>,
    started_ms: f64,
}

#[cfg(feature = "csr")]
struct GateHost {
    inner: Rc<HostInner>,
}

#[cfg(feature = "csr")]
impl GateHost {
    fn start(config: GateConfig, state: RwSignal<LoadState>) -> Self {
        let key = config.session_key.clone();
        let host = Self {
            inner: Rc::new(HostInner {
                gate: RefCell::new(LoadGate::new(config)),
                timers: RefCell::new(Timers::default()),
                state,
                started_ms: Date::now(),
            }),
        };
        let session = LoadSession::read(&BrowserSessionStore, &key);
        let effects = host.inner.gate.borrow_mut().activate(session, 0);
        host.apply(effects);
        host.publish();
        host
    }

    fn on_tick(&self) {
        let moved = self.inner.gate.borrow_mut().on_progress_tick(Math::random());
        if moved {
            self.publish();
        }
    }

    fn on_poll(&self) {
        let effects = self.inner.gate.borrow_mut().on_poll(self.elapsed_ms(), &DomProbe);
        self.apply(effects);
        self.publish();
    }

    fn on_finish(&self) {
        retire_timeout(self.inner.timers.borrow_mut().finish.take());
        let effects = self.inner.gate.borrow_mut().on_finish_elapsed();
        self.apply(effects);
        self.publish();
    }

    fn teardown(&self) {
        let effects = self.inner.gate.borrow_mut().teardown();
        self.apply(effects);
    }

    fn apply(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartTimers => {
                    let (progress_ms, poll_ms) = {
                        let gate = self.inner.gate.borrow();
                        (millis(gate.config().progress_interval_ms), millis(gate.config().poll_interval_ms))
                    };
                    let ticker = Interval::new(progress_ms, self.callback(Self::on_tick));
                    let poller = Interval::new(poll_ms, self.callback(Self::on_poll));
                    let mut timers = self.inner.timers.borrow_mut();
                    timers.ticker = Some(ticker);
                    timers.poller = Some(poller);
                }
                Effect::StopTimers => {
                    let mut timers = self.inner.timers.borrow_mut();
                    retire_interval(timers.ticker.take());
                    retire_interval(timers.poller.take());
                }
                Effect::ScheduleFinish { delay_ms } => {
                    let finish = Timeout::new(millis(delay_ms), self.callback(Self::on_finish));
                    self.inner.timers.borrow_mut().finish = Some(finish);
                }
                Effect::CancelFinish => retire_timeout(self.inner.timers.borrow_mut().finish.take()),
                Effect::PersistShown => {
                    let key = self.inner.gate.borrow().config().session_key.clone();
                    LoadSession::mark_shown(&BrowserSessionStore, &key);
                }
                Effect::SignalAnimationsReady => body_marker::release(),
            }
        }
    }

    fn publish(&self) {
        let next = self.inner.gate.borrow().state();
        if self.inner.state.try_get_untracked().is_some_and(|current| current != next) {
            self.inner.state.try_set(next);
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn elapsed_ms(&self) -> u64 {
        (Date::now() - self.inner.started_ms).max(0.0) as u64
    }

    /// Timer callback that becomes a no-op once the host is gone.
    fn callback(&self, handler: fn(&GateHost)) -> impl FnMut() + 'static {
        let weak = Rc::downgrade(&self.inner);
        move || {
            if let Some(inner) = weak.upgrade() {
                handler(&GateHost { inner });
            }
        }
    }
}

#[cfg(feature = "csr")]
fn millis(ms: u64) -> u32 {
    u32::try_from(ms).unwrap_or(u32::MAX)
}

#[cfg(feature = "csr")]
fn retire_interval(interval: Option<Interval>) {
    if let Some(interval) = interval {
        let closure = interval.cancel();
        wasm_bindgen_futures::spawn_local(async move { drop(closure) });
    }
}

#[cfg(feature = "csr")]
fn retire_timeout(timeout: Option<Timeout>) {
    if let Some(timeout) = timeout {
        let closure = timeout.cancel();
        wasm_bindgen_futures::spawn_local(async move { drop(closure) });
    }
}

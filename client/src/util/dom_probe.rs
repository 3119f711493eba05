//! Readiness probe over the live DOM.
//!
//! Each call walks the currently mounted `<img>` and `<video>` elements and
//! the landmark selector; nothing is cached between polls because the page
//! keeps mounting media while the splash is up.

use loadgate::ReadinessProbe;
use loadgate::ReadinessSnapshot;
#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;
#[cfg(feature = "csr")]
use loadgate::readiness::{DocumentPhase, ImageObservation, LANDMARK_SELECTOR, VideoObservation};

#[derive(Clone, Copy, Debug, Default)]
pub struct DomProbe;

impl ReadinessProbe for DomProbe {
    fn snapshot(&self) -> ReadinessSnapshot {
        #[cfg(feature = "csr")]
        {
            let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
                return ReadinessSnapshot::default();
            };
            let phase = DocumentPhase::from_ready_state(&doc.ready_state());
            let images = collect::<web_sys::HtmlImageElement, _>(&doc, "img", |img| ImageObservation {
                complete: img.complete(),
                natural_height: img.natural_height(),
                src: img.src(),
            });
            let videos = collect::<web_sys::HtmlMediaElement, _>(&doc, "video", |video| VideoObservation {
                ready_state: video.ready_state(),
            });
            let landmarks = doc
                .query_selector_all(LANDMARK_SELECTOR)
                .map_or(0, |list| list.length() as usize);
            ReadinessSnapshot::evaluate(phase, &images, videos, landmarks)
        }
        #[cfg(not(feature = "csr"))]
        {
            ReadinessSnapshot::default()
        }
    }
}

#[cfg(feature = "csr")]
fn collect<E, T>(doc: &web_sys::Document, selector: &str, observe: impl Fn(&E) -> T) -> Vec<T>
where
    E: wasm_bindgen::JsCast,
{
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<E>().ok())
        .map(|el| observe(&el))
        .collect()
}

#[cfg(all(test, not(feature = "csr")))]
#[path = "dom_probe_test.rs"]
mod dom_probe_test;

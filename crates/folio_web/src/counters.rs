//! Count-up stats, the preloader, and the footer year.

use folio_core::animation::CounterConfig;
use folio_core::{CountUp, FrameScheduler};
use web_sys::{Element, Window};

use crate::dom;
use crate::error::WebResult;
use crate::frame::{self, RafScheduler};

/// Counter elements and their animations.
struct Counters(Vec<(Element, CountUp)>);

/// On `load` (or now, if it already fired): hide the preloader and start
/// every `.count[data-count]`.
pub fn mount(window: &Window, config: &CounterConfig) -> WebResult<()> {
    let document = dom::document()?;
    let preloader = document.query_selector(".preloader")?;
    let counters = Counters(
        dom::query_all(&document, ".count[data-count]")?
            .into_iter()
            .map(|el| {
                let counter = CountUp::from_attribute(el.get_attribute("data-count").as_deref(), config);
                (el, counter)
            })
            .collect(),
    );

    let loop_window = window.clone();
    let mut counters = Some(counters);
    let mut on_load = move || {
        if let Some(preloader) = &preloader {
            if let Err(err) = preloader.class_list().add_1("hidden") {
                tracing::warn!(error = ?err, "could not hide preloader");
            }
        }
        let Some(counters) = counters.take().filter(|c| !c.0.is_empty()) else {
            return;
        };
        tracing::debug!(count = counters.0.len(), "starting counters");
        if let Err(err) = frame::start_loop(loop_window.clone(), counters, tick) {
            tracing::warn!(error = %err, "counters not started");
        }
    };

    // The module may finish instantiating after `load` has fired.
    if already_loaded(&document.ready_state()) {
        on_load();
        Ok(())
    } else {
        dom::listen(window, "load", move |_| on_load())
    }
}

/// Returns true once `document.readyState` says `load` has fired.
fn already_loaded(ready_state: &str) -> bool {
    ready_state == "complete"
}

/// Advances every counter; stops requesting frames once all are done.
fn tick(counters: &mut Counters, now: f64, scheduler: &mut RafScheduler) {
    let mut running = false;
    for (element, counter) in &mut counters.0 {
        let value = counter.tick(now);
        element.set_text_content(Some(&value.to_string()));
        running |= !counter.is_complete();
    }
    if running {
        scheduler.request_tick();
    }
}

/// Writes the current year into `#year`.
pub fn mount_year() -> WebResult<()> {
    let document = dom::document()?;
    let year = dom::require_id(&document, "year")?;
    year.set_text_content(Some(&js_sys::Date::new_0().get_full_year().to_string()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_complete_counts_as_loaded() {
        assert!(already_loaded("complete"));
        assert!(!already_loaded("interactive"));
        assert!(!already_loaded("loading"));
    }
}

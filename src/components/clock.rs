//! Live wall clock for the page header.

use leptos::prelude::*;

/// Current local time, refreshed every `ClientConfig::clock_tick_ms`.
///
/// Renders empty during SSR and fills in once hydrated.
#[component]
pub fn RealTimeClock() -> impl IntoView {
    let label = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        let tick_ms = expect_context::<crate::config::ClientConfig>().clock_tick_ms;
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                label.set(crate::util::clock::now_label());
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(tick_ms))).await;
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <time class="dining-clock">{move || label.get()}</time>
    }
}

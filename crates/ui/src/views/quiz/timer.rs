use dioxus::prelude::*;
use quiz_core::TickOutcome;
use services::{TICK_PERIOD, drive_ticks};

use crate::vm::QuizVm;

/// Ticks the session countdown once per second while mounted.
///
/// The tick task belongs to this component: unmounting it (review mode,
/// leaving the page) drops the interval with it.
#[component]
pub fn QuizTimer(vm: Signal<Option<QuizVm>>, on_expired: EventHandler<()>) -> Element {
    use_future(move || async move {
        let mut vm = vm;
        let outcome = drive_ticks(TICK_PERIOD, move || {
            vm.write()
                .as_mut()
                .map_or(TickOutcome::Stopped, QuizVm::tick)
        })
        .await;
        if outcome == TickOutcome::Expired {
            tracing::info!("quiz time expired");
            on_expired.call(());
        }
    });

    let label = vm
        .read()
        .as_ref()
        .map(QuizVm::timer_label)
        .unwrap_or_default();
    let urgent = vm
        .read()
        .as_ref()
        .is_some_and(|quiz| quiz.session().time_remaining() <= 30);

    rsx! {
        span {
            class: if urgent { "timer timer--urgent" } else { "timer" },
            "{label}"
        }
    }
}

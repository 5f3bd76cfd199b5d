//! Headline numbers that count up the first time they scroll into view.

use leptos::prelude::*;

#[derive(Clone, Copy)]
struct Stat {
    /// Final rendered value, e.g. `50+`. Shown as-is before hydration.
    value: &'static str,
    label: &'static str,
}

const STATS: &[Stat] = &[
    Stat { value: "50+", label: "Projects Completed" },
    Stat { value: "5+", label: "Years Experience" },
    Stat { value: "30+", label: "Happy Clients" },
    Stat { value: "15+", label: "Technologies" },
];

/// Visible fraction of the section that starts the counters.
const STATS_THRESHOLD: f64 = 0.3;

#[component]
pub fn StatsSection() -> impl IntoView {
    let section_ref = NodeRef::<leptos::html::Section>::new();
    let shown: Vec<RwSignal<String>> = STATS.iter().map(|s| RwSignal::new(s.value.to_owned())).collect();

    #[cfg(feature = "hydrate")]
    {
        let shown = shown.clone();
        Effect::new(move || {
            let Some(section) = section_ref.get() else {
                return;
            };
            let shown = shown.clone();
            crate::util::visibility::on_first_visible(&section, STATS_THRESHOLD, "0px", move || {
                for (stat, display) in STATS.iter().zip(shown) {
                    spawn_counter(*stat, display);
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = STATS_THRESHOLD;
    }

    view! {
        <section id="stats" class="stats-section" node_ref=section_ref>
            {STATS
                .iter()
                .zip(shown)
                .map(|(stat, display)| {
                    view! {
                        <div class="stat">
                            <span class="stat-number">{move || display.get()}</span>
                            <p class="stat-label">{stat.label}</p>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}

/// Count `display` from zero up to the stat's numeric prefix, keeping its suffix.
#[cfg(feature = "hydrate")]
fn spawn_counter(stat: Stat, display: RwSignal<String>) {
    use std::time::Duration;

    use crate::util::animation::{COUNTER_DURATION_MS, COUNTER_TICK_MS, CounterAnimation, parse_leading_int};

    let Some(target) = parse_leading_int(stat.value) else {
        return;
    };
    let suffix = stat.value.trim_start().trim_start_matches(|c: char| c == '-' || c.is_ascii_digit());
    let mut counter = CounterAnimation::new(0, target, COUNTER_DURATION_MS, COUNTER_TICK_MS);
    display.set(format!("0{suffix}"));

    leptos::task::spawn_local(async move {
        while !counter.is_done() {
            gloo_timers::future::sleep(Duration::from_millis(u64::from(COUNTER_TICK_MS))).await;
            let value = counter.tick();
            display.set(format!("{value}{suffix}"));
        }
    });
}

use leptos::prelude::*;

/// Stroke length of the r=44 ring (2 * PI * 44).
const CIRCUMFERENCE: f64 = 276.46;

/// Ring fill for a 0-100 score. Out-of-range input is a service-contract
/// violation; the mapping stays the identity percentage and does not clamp.
fn fill_fraction(value: u8) -> f64 {
    f64::from(value) / 100.0
}

fn dash_offset(value: u8) -> f64 {
    CIRCUMFERENCE * (1.0 - fill_fraction(value))
}

/// Circular gauge for one 0-100 report score.
#[component]
pub fn ScoreGauge(label: &'static str, value: u8) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center">
            <div class="relative w-24 h-24">
                <svg class="absolute inset-0 w-24 h-24 -rotate-90" viewBox="0 0 100 100">
                    <circle
                        cx="50"
                        cy="50"
                        r="44"
                        fill="none"
                        stroke="#334155"
                        stroke-width="7"
                    />
                    <circle
                        cx="50"
                        cy="50"
                        r="44"
                        fill="none"
                        stroke="#6366f1"
                        stroke-width="7"
                        stroke-linecap="round"
                        stroke-dasharray=CIRCUMFERENCE
                        stroke-dashoffset=dash_offset(value)
                    />
                </svg>
                <div class="absolute inset-0 flex items-center justify-center">
                    <span class="text-lg font-semibold text-slate-100">
                        {format!("{}%", value)}
                    </span>
                </div>
            </div>
            <p class="mt-2 text-sm font-medium text-slate-400">{label}</p>
        </div>
    }
}

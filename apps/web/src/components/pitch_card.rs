use leptos::prelude::*;

/// Bullet list of marketing-ready pitch points.
#[component]
pub fn PitchPointsCard(points: Vec<String>) -> impl IntoView {
    view! {
        <div class="card p-6">
            <h2 class="text-2xl font-semibold text-indigo-400 mb-4">"Key Pitch Points"</h2>
            <ul class="space-y-3">
                {points
                    .into_iter()
                    .map(|point| {
                        view! {
                            <li class="flex gap-3">
                                <div class="w-6 h-6 rounded-full bg-indigo-500/20 flex-shrink-0 flex items-center justify-center mt-0.5">
                                    <svg
                                        class="w-3 h-3 text-indigo-400"
                                        fill="currentColor"
                                        viewBox="0 0 24 24"
                                    >
                                        <path d="M9 16.17L4.83 12l-1.42 1.41L9 19 21 7l-1.41-1.41z" />
                                    </svg>
                                </div>
                                <p class="text-slate-300">{point}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

use leptos::prelude::*;

use crate::models::Character;

/// Card for one inferred character: role, short description, archetype,
/// audience-appeal bar, and comparable actors.
#[component]
pub fn CharacterCard(character: Character) -> impl IntoView {
    let appeal_percent = character.appeal_percent();
    let appeal_score = character.attributes.audience_appeal_score;
    let role = character.role.clone();
    let description = character.description_short.clone();
    let archetype = character.attributes.archetype.clone();
    let actors = character.attributes.comparable_actors.clone();

    view! {
        <div class="card p-4">
            <div class="flex items-center mb-2">
                <svg
                    class="w-5 h-5 text-indigo-400 mr-2"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    viewBox="0 0 24 24"
                >
                    <path
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        d="M16 7a4 4 0 11-8 0 4 4 0 018 0zM12 14a7 7 0 00-7 7h14a7 7 0 00-7-7z"
                    />
                </svg>
                <h3 class="font-semibold text-slate-100">{role}</h3>
            </div>

            <p class="text-sm text-slate-400 mb-3">{description}</p>

            <span class="chip bg-purple-900/60 text-purple-300 text-xs font-medium mb-3">
                {archetype}
            </span>

            <div class="mb-3">
                <p class="text-sm font-medium text-slate-200">"Audience Appeal"</p>
                <div class="h-2 mt-1 bg-slate-800 rounded-full overflow-hidden">
                    <div
                        class="h-full rounded-full bg-indigo-500 transition-all duration-700"
                        style=format!("width: {}%", appeal_percent)
                    />
                </div>
                <p class="text-xs text-slate-500 mt-1">{format!("{}/10", appeal_score)}</p>
            </div>

            <div>
                <p class="text-sm font-medium text-slate-200 mb-1">"Comparable Actors"</p>
                <div class="flex flex-wrap gap-2">
                    {actors
                        .into_iter()
                        .map(|actor| {
                            view! {
                                <span class="chip bg-slate-800 text-slate-300 text-xs">{actor}</span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

use leptos::prelude::*;

use crate::components::{MetadataPanel, ScoreGauge};
use crate::models::StoryReport;

/// The report's headline card: score gauges, genre and theme chips, target
/// audience, summary, the one-liner pitch, and the diagnostics disclosure.
#[component]
pub fn InsightsCard(report: StoryReport) -> impl IntoView {
    let scores = report.top_level_score.to_labeled_vec();
    let genres = report.key_insights.genres.clone();
    let themes = report.key_insights.themes.clone();
    let audience = report.key_insights.target_audience.join(", ");
    let summary = report.key_insights.summary.clone();
    let one_liner = report.pitch_ready_copy.one_liner.clone();
    let metadata = report.metadata.clone();

    view! {
        <div class="card p-6">
            <h2 class="text-2xl font-semibold text-indigo-300 mb-4">"Story Insights"</h2>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-6">
                {scores
                    .into_iter()
                    .map(|(label, value)| view! { <ScoreGauge label=label value=value /> })
                    .collect_view()}
            </div>

            <div class="mb-6">
                <p class="font-medium text-sm text-slate-200 mb-2">"Genres"</p>
                <div class="flex flex-wrap gap-2">
                    {genres
                        .into_iter()
                        .map(|genre| {
                            view! {
                                <span class="chip bg-indigo-900 text-indigo-300">{genre}</span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="mb-6">
                <p class="font-medium text-sm text-slate-200 mb-2">"Themes"</p>
                <div class="flex flex-wrap gap-2">
                    {themes
                        .into_iter()
                        .map(|theme| {
                            view! {
                                <span class="chip bg-emerald-900 text-emerald-300">{theme}</span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="mb-6">
                <p class="font-medium text-sm text-slate-200 mb-1">"Target Audience"</p>
                <p class="text-slate-300">{audience}</p>
            </div>

            <div class="mb-6">
                <p class="font-medium text-sm text-slate-200 mb-1">"Summary"</p>
                <p class="italic text-slate-300">{summary}</p>
            </div>

            <div class="bg-indigo-950 border-l-4 border-indigo-500 p-4 rounded-lg">
                <h3 class="font-semibold text-indigo-300">"One-Liner Pitch"</h3>
                <p class="italic text-slate-200 mt-1">{one_liner}</p>
            </div>

            {metadata.map(|m| view! { <MetadataPanel metadata=m /> })}
        </div>
    }
}

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{analyze_synopsis, get_loading_messages, sample_synopses};
use crate::components::{
    CharacterCard, EmotionalArcChart, InsightsCard, LoadingCard, PitchPointsCard,
    SimilarMoviesCarousel,
};
use crate::models::{can_submit, score_verdict, AnalysisState, StoryReport, SubmissionGuard};

/// The analyzer page: synopsis input, submission lifecycle, and the report.
///
/// States run `Idle -> Loading -> (Complete | Error) -> Loading -> ...`.
/// The submit control is disabled while a request is in flight, so at most
/// one call is outstanding; a completion from a superseded submission is
/// dropped via the ticket check rather than rendered.
#[component]
pub fn AnalyzePage() -> impl IntoView {
    let (synopsis, set_synopsis) = signal(String::new());
    let (analysis_state, set_analysis_state) = signal(AnalysisState::Idle);
    let (loading_message, set_loading_message) = signal(String::new());
    let (loading_progress, set_loading_progress) = signal(0u8);
    let guard = StoredValue::new(SubmissionGuard::default());

    let submit_enabled = Memo::new(move |_| can_submit(&synopsis.get(), &analysis_state.get()));

    let start_analysis = move |_: leptos::ev::MouseEvent| {
        let story = synopsis.get_untracked();
        // The button is disabled for these cases; re-check anyway so a
        // programmatic click cannot start a second request.
        if !can_submit(&story, &analysis_state.get_untracked()) {
            return;
        }

        let mut ticket = 0;
        guard.update_value(|g| ticket = g.begin());

        set_loading_message.set("Starting analysis...".into());
        set_loading_progress.set(0);
        set_analysis_state.set(AnalysisState::Loading {
            message: "Starting analysis...".into(),
            progress: 0,
        });

        spawn_local(async move {
            let messages = get_loading_messages();
            for (i, msg) in messages.iter().enumerate() {
                set_loading_message.set(msg.to_string());
                set_loading_progress.set(((i + 1) * 100 / messages.len()) as u8);
                gloo_timers::future::TimeoutFuture::new(250).await;
            }

            let outcome = analyze_synopsis(&story).await;

            if !guard.with_value(|g| g.is_current(ticket)) {
                log::debug!("dropping completion for superseded submission");
                return;
            }

            match outcome {
                Ok(report) => set_analysis_state.set(AnalysisState::Complete(report)),
                Err(err) => {
                    log::error!("synopsis analysis failed: {}", err);
                    set_analysis_state.set(AnalysisState::Error(err.user_message()));
                }
            }
        });
    };

    view! {
        <div class="max-w-5xl mx-auto px-4 sm:px-6 py-10">
            <section class="mb-8">
                <h1 class="text-3xl font-bold text-slate-100 mb-2">"Story Analyzer"</h1>
                <p class="text-slate-400">
                    "Paste a synopsis to get scores, inferred characters, an emotional arc, "
                    "and pitch-ready copy."
                </p>
            </section>

            <section class="mb-4">
                <p class="text-xs uppercase tracking-wider text-slate-500 mb-2">
                    "Or try a sample synopsis"
                </p>
                <div class="flex flex-wrap gap-2">
                    {sample_synopses()
                        .into_iter()
                        .map(|sample| {
                            view! {
                                <button
                                    type="button"
                                    class="btn-secondary text-sm"
                                    on:click=move |_| {
                                        set_synopsis.set(sample.text.to_string());
                                        set_analysis_state.set(AnalysisState::Idle);
                                    }
                                >
                                    {sample.title}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <textarea
                class="w-full p-3 rounded-lg mb-3 bg-slate-900 border border-slate-700 text-slate-200 placeholder-slate-500 focus:outline-none focus:border-indigo-500"
                rows="6"
                placeholder="Paste your story synopsis here..."
                prop:value=move || synopsis.get()
                on:input=move |ev| set_synopsis.set(event_target_value(&ev))
            ></textarea>

            <button
                type="button"
                class="btn-primary"
                on:click=start_analysis
                disabled=move || !submit_enabled.get()
            >
                {move || {
                    if analysis_state.get().is_loading() {
                        "Analyzing..."
                    } else {
                        "Analyze Story"
                    }
                }}
            </button>

            {move || match analysis_state.get() {
                AnalysisState::Idle => view! {
                    <div class="text-center py-16">
                        <p class="text-slate-500">"Your story report will appear here."</p>
                    </div>
                }
                .into_any(),

                AnalysisState::Loading { .. } => view! {
                    <div class="mt-8">
                        <LoadingCard message=loading_message progress=loading_progress />
                    </div>
                }
                .into_any(),

                AnalysisState::Complete(report) => view! {
                    <ReportView report=report />
                }
                .into_any(),

                AnalysisState::Error(msg) => view! {
                    <div class="card p-8 text-center mt-8">
                        <div class="w-12 h-12 mx-auto mb-4 rounded-lg bg-red-950 flex items-center justify-center">
                            <svg
                                class="w-6 h-6 text-red-400"
                                fill="none"
                                stroke="currentColor"
                                stroke-width="2"
                                viewBox="0 0 24 24"
                            >
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    d="M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-3L13.732 4c-.77-1.333-2.694-1.333-3.464 0L3.34 16c-.77 1.333.192 3 1.732 3z"
                                />
                            </svg>
                        </div>
                        <h3 class="text-xl font-semibold text-slate-100 mb-2">"Analysis Failed"</h3>
                        <p class="text-sm text-slate-400 mb-6">{msg}</p>
                        <button type="button" class="btn-secondary" on:click=start_analysis>
                            "Try Again"
                        </button>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn ReportView(report: StoryReport) -> impl IntoView {
    let verdict = score_verdict(report.top_level_score.overall);
    let title = report.title.clone();
    let logline = report.logline.clone();
    let arc = report.emotional_arc_data.clone();
    let characters = report.characters.clone();
    let pitch_points = report.pitch_ready_copy.key_pitch_points.clone();
    let similar = report.similar_movies.clone();

    view! {
        <div class="mt-8 space-y-6">
            <div class="card p-6">
                <div class="flex items-start justify-between gap-4">
                    <div>
                        <h2 class="text-2xl font-semibold text-slate-100">{title}</h2>
                        <p class="italic text-slate-400 mt-2">{logline}</p>
                    </div>
                    <span class="chip bg-indigo-500/20 text-indigo-300 font-medium shrink-0">
                        {verdict}
                    </span>
                </div>
            </div>

            <InsightsCard report=report.clone() />

            <div class="card p-6">
                <h2 class="text-2xl font-semibold text-indigo-400 mb-4">"Emotional Arc"</h2>
                <EmotionalArcChart data=arc />
            </div>

            {(!characters.is_empty()).then(|| view! {
                <div>
                    <h2 class="text-2xl font-semibold text-indigo-400 mb-4">
                        "Inferred Characters"
                    </h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        {characters
                            .into_iter()
                            .map(|character| view! { <CharacterCard character=character /> })
                            .collect_view()}
                    </div>
                </div>
            })}

            <PitchPointsCard points=pitch_points />

            {(!similar.is_empty()).then(|| view! { <SimilarMoviesCarousel movies=similar /> })}
        </div>
    }
}

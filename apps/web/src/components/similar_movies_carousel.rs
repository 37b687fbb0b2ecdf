use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::models::SimilarMovie;

/// Clamped navigation over the poster strip. Callers only mount the
/// carousel for a non-empty strip, but both helpers stay total anyway.
fn prev_index(current: usize) -> usize {
    current.saturating_sub(1)
}

fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1).min(len - 1)
    }
}

fn card_id(index: usize) -> String {
    format!("similar-movie-{}", index)
}

/// Smooth-scroll the strip so the selected card is its leading visible item.
fn scroll_to_card(index: usize) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(card) = document.get_element_by_id(&card_id(index)) else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_inline(ScrollLogicalPosition::Start);
    options.set_block(ScrollLogicalPosition::Nearest);
    card.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Horizontally scrollable strip of comparable titles. Render only when the
/// report actually carries similar movies; an empty strip means no carousel
/// in the tree at all. The index resets on every mount.
#[component]
pub fn SimilarMoviesCarousel(movies: Vec<SimilarMovie>) -> impl IntoView {
    let len = movies.len();
    let (current, set_current) = signal(0usize);

    Effect::new(move || scroll_to_card(current.get()));

    view! {
        <div class="card p-6 flex flex-col">
            <h2 class="text-2xl font-semibold text-indigo-400 mb-4">"Similar Movies"</h2>

            <div class="relative flex items-center">
                <button
                    type="button"
                    on:click=move |_| set_current.update(|i| *i = prev_index(*i))
                    disabled=move || current.get() == 0
                    class="p-2 rounded-full bg-indigo-700 hover:bg-indigo-600 disabled:opacity-50 disabled:cursor-not-allowed text-white mr-2 transition"
                    aria-label="Previous"
                >
                    <svg class="w-4 h-4" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" d="M15 19l-7-7 7-7" />
                    </svg>
                </button>

                <div class="overflow-x-auto scroll-smooth scrollbar-hide flex snap-x snap-mandatory space-x-4">
                    {movies
                        .iter()
                        .cloned()
                        .enumerate()
                        .map(|(index, movie)| {
                            view! { <MovieCard index=index movie=movie /> }
                        })
                        .collect_view()}
                </div>

                <button
                    type="button"
                    on:click=move |_| set_current.update(|i| *i = next_index(*i, len))
                    disabled=move || current.get() + 1 >= len
                    class="p-2 rounded-full bg-indigo-700 hover:bg-indigo-600 disabled:opacity-50 disabled:cursor-not-allowed text-white ml-2 transition"
                    aria-label="Next"
                >
                    <svg class="w-4 h-4" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" d="M9 5l7 7-7 7" />
                    </svg>
                </button>
            </div>
        </div>
    }
}

#[component]
fn MovieCard(index: usize, movie: SimilarMovie) -> impl IntoView {
    let poster = movie.has_poster().then(|| movie.poster.clone());
    let title = movie.title.clone();
    let alt = format!("{} Poster", movie.title);

    view! {
        <div
            id=card_id(index)
            class="shrink-0 w-40 snap-start bg-slate-800 rounded-lg overflow-hidden shadow hover:shadow-indigo-600/40 transition"
        >
            {match poster {
                Some(url) => view! {
                    <img src=url alt=alt loading="lazy" class="object-cover w-full h-60" />
                }
                .into_any(),
                None => view! {
                    <div class="w-full h-60 flex items-center justify-center bg-slate-700">
                        <svg
                            class="w-10 h-10 text-slate-500"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="1.5"
                            viewBox="0 0 24 24"
                        >
                            <path
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                d="M3 5a2 2 0 012-2h14a2 2 0 012 2v14a2 2 0 01-2 2H5a2 2 0 01-2-2V5zm4 0v14m10-14v14M3 9h4m10 0h4M3 15h4m10 0h4"
                            />
                        </svg>
                    </div>
                }
                .into_any(),
            }}
            <div class="p-2 text-center">
                <h3 class="text-indigo-300 font-semibold text-sm truncate">{title}</h3>
                <p class="text-slate-400 text-xs mt-1">{movie.year.clone()}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prev_is_a_no_op_at_the_left_edge() {
        assert_eq!(prev_index(0), 0);
        assert_eq!(prev_index(3), 2);
    }

    #[test]
    fn next_clamps_at_the_right_edge() {
        // Five items, starting at 0: four steps reach the end, a fifth stays.
        let len = 5;
        let mut index = 0;
        assert_eq!(prev_index(index), 0);
        for _ in 0..4 {
            index = next_index(index, len);
        }
        assert_eq!(index, 4);
        assert_eq!(next_index(index, len), 4);
    }

    #[test]
    fn empty_strip_never_underflows() {
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0), 0);
    }

    #[test]
    fn card_ids_are_positional() {
        assert_eq!(card_id(0), "similar-movie-0");
        assert_eq!(card_id(4), "similar-movie-4");
    }
}

use leptos::prelude::*;

use crate::models::AnalysisMetadata;

/// Disclosure state for the diagnostics panel. Starts collapsed on every
/// mount; nothing is persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Disclosure {
    #[default]
    Collapsed,
    Expanded,
}

impl Disclosure {
    pub fn toggled(self) -> Self {
        match self {
            Disclosure::Collapsed => Disclosure::Expanded,
            Disclosure::Expanded => Disclosure::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        matches!(self, Disclosure::Expanded)
    }
}

/// Togglable panel of analysis diagnostics. Callers render this only when
/// the report carries metadata; an absent section means no panel at all,
/// not a disabled one.
#[component]
pub fn MetadataPanel(metadata: AnalysisMetadata) -> impl IntoView {
    let (disclosure, set_disclosure) = signal(Disclosure::Collapsed);
    let lines = metadata.detail_lines();

    view! {
        <div class="mt-6">
            <button
                type="button"
                class="flex items-center gap-1 text-sm text-indigo-400 hover:text-indigo-300 transition-colors"
                on:click=move |_| set_disclosure.update(|d| *d = d.toggled())
                aria-expanded=move || disclosure.get().is_expanded().to_string()
            >
                <svg
                    class=move || {
                        let base = "w-4 h-4 transition-transform";
                        if disclosure.get().is_expanded() {
                            format!("{} rotate-180", base)
                        } else {
                            base.to_string()
                        }
                    }
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    viewBox="0 0 24 24"
                >
                    <path stroke-linecap="round" stroke-linejoin="round" d="M19 9l-7 7-7-7" />
                </svg>
                {move || {
                    if disclosure.get().is_expanded() {
                        "Hide analysis metadata"
                    } else {
                        "Show analysis metadata"
                    }
                }}
            </button>

            <Show when=move || disclosure.get().is_expanded()>
                <div class="mt-3 bg-slate-800 p-4 rounded-lg text-sm text-slate-300 space-y-2">
                    {lines
                        .clone()
                        .into_iter()
                        .map(|line| view! { <p>{line}</p> })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_starts_collapsed() {
        assert_eq!(Disclosure::default(), Disclosure::Collapsed);
        assert!(!Disclosure::default().is_expanded());
    }

    #[test]
    fn toggling_is_an_involution() {
        let open = Disclosure::Collapsed.toggled();
        assert!(open.is_expanded());
        assert_eq!(open.toggled(), Disclosure::Collapsed);
    }
}

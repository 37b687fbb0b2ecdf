use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-50 bg-slate-950/90 backdrop-blur-sm border-b border-slate-800">
            <div class="max-w-5xl mx-auto px-4 sm:px-6">
                <div class="flex items-center justify-between h-16">
                    <a
                        href="/"
                        class="flex items-center gap-2 text-slate-100 hover:text-indigo-300 transition-colors"
                        aria-label="StoryScope Home"
                    >
                        <div class="w-8 h-8 rounded-lg bg-indigo-500/20 flex items-center justify-center">
                            <svg
                                class="w-4 h-4 text-indigo-400"
                                fill="none"
                                stroke="currentColor"
                                stroke-width="2"
                                viewBox="0 0 24 24"
                            >
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    d="M7 4v16M17 4v16M3 8h4m10 0h4M3 12h18M3 16h4m10 0h4M4 20h16a1 1 0 001-1V5a1 1 0 00-1-1H4a1 1 0 00-1 1v14a1 1 0 001 1z"
                                />
                            </svg>
                        </div>
                        <span class="text-xl font-extrabold tracking-wide text-indigo-400 drop-shadow-md">
                            "StoryScope"
                        </span>
                    </a>

                    <nav class="flex items-center gap-1" role="navigation" aria-label="Main navigation">
                        <a
                            href="/"
                            class="text-slate-300 hover:text-indigo-400 px-3 py-2 rounded-md text-sm font-medium transition-colors"
                        >
                            "Synopsis Analyzer"
                        </a>
                    </nav>
                </div>
            </div>
        </header>
    }
}

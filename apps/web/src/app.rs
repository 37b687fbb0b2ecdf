use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::Header;
use crate::pages::AnalyzePage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen bg-gradient-to-b from-slate-900 via-slate-900 to-slate-950">
                <Header />
                <main>
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=AnalyzePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="text-center py-20">
            <h1 class="text-6xl font-bold text-white/20 mb-4">"404"</h1>
            <h2 class="text-2xl text-white mb-4">"Page Not Found"</h2>
            <p class="text-white/50 mb-6">"The page you're looking for doesn't exist."</p>
            <a
                href="/"
                class="inline-flex items-center gap-2 px-6 py-3 bg-indigo-600 hover:bg-indigo-500 rounded-lg font-semibold text-white transition-colors"
            >
                "Back to the Analyzer"
            </a>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-white/10 mt-20">
            <div class="max-w-5xl mx-auto px-4 py-8 text-center">
                <p class="text-white/40 text-sm">
                    "Built with Leptos + Rust. Analysis by the StoryScope service."
                </p>
            </div>
        </footer>
    }
}

//! Hero section component

use leptos::*;

const FEATURES: [(&str, &str, &str); 3] = [
    ("🧠", "AI-Powered Analysis", "Advanced language models trained on legal documents"),
    ("🛡️", "Risk Detection", "Identify potential legal and financial risks instantly"),
    ("✅", "Plain English", "Complex legal jargon translated to clear explanations"),
];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <span class="badge">"⚖️ Legal AI Assistant"</span>
            <h1>"Demystify Legal Documents with " <span class="accent">"AI Intelligence"</span></h1>
            <p class="subtitle">
                "Upload any legal document and get instant summaries, risk assessments, "
                "and plain-English explanations."
            </p>
            <div class="hero-features">
                {FEATURES
                    .into_iter()
                    .map(|(icon, title, description)| view! {
                        <div class="hero-feature">
                            <span class="hero-feature-icon">{icon}</span>
                            <div class="hero-feature-title">{title}</div>
                            <div class="hero-feature-text">{description}</div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

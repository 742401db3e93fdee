use crate::config::VERSION;
use leptos::prelude::*;

#[component]
pub fn Features() -> impl IntoView {
    let eyebrow = format!("{} Features", VERSION);
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">{eyebrow}</p>
                    <h2 class="section-title">"Less paperwork. More mentoring."</h2>
                    <p class="section-description">
                        "Built around the weekly mentor meeting. "
                        "Everything you write down ends up where the next conversation needs it."
                    </p>
                </div>
                <div class="features-grid">
                    <FeatureCard
                        icon="ri-user-star-line"
                        title="Mentee Profiles"
                        description="Contact details, class, section and assigned mentor in one place. No more spreadsheets per teacher."
                    />
                    <FeatureCard
                        icon="ri-calendar-check-line"
                        title="Meeting Log"
                        description="Record each session with date, topics covered and follow-ups. The history stays with the mentee."
                    />
                    <FeatureCard
                        icon="ri-flag-line"
                        title="Objectives"
                        description="Goals agreed with the mentee, checked off as they are reached."
                    />
                    <FeatureCard
                        icon="ri-file-list-3-line"
                        title="Academic Records"
                        description="Term-wise grades for every subject, entered once and shown everywhere."
                    />
                    <FeatureCard
                        icon="ri-line-chart-line"
                        title="Performance Trends"
                        description="Subject scores plotted across terms so a slipping grade shows up early."
                    />
                    <FeatureCard
                        icon="ri-team-line"
                        title="Guardian Contacts"
                        description="Parent and guardian details with their preferred way of getting updates."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(icon: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class="feature-icon">
                <i class=icon></i>
            </div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
        </article>
    }
}

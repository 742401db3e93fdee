use leptos::prelude::*;

use super::progress::{Metric, MetricList};

/// How much of the grid a card occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSpan {
    Regular,
    Wide,
    Tall,
}

impl CardSpan {
    fn class(self) -> &'static str {
        match self {
            CardSpan::Regular => "bento-card",
            CardSpan::Wide => "bento-card bento-card--wide",
            CardSpan::Tall => "bento-card bento-card--tall",
        }
    }
}

pub struct BentoCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub span: CardSpan,
}

const CARDS: &[BentoCard] = &[
    BentoCard {
        icon: "ri-links-line",
        title: "Mentor Matching",
        description: "Pair every mentee with a mentor by subject, schedule and goals. Reassign in one click when plans change.",
        span: CardSpan::Wide,
    },
    BentoCard {
        icon: "ri-sticky-note-line",
        title: "Session Notes",
        description: "Write notes during the meeting. They land in the mentee's record book with the date attached.",
        span: CardSpan::Regular,
    },
    BentoCard {
        icon: "ri-focus-3-line",
        title: "Goal Tracking",
        description: "Set objectives together and tick them off as the term goes on.",
        span: CardSpan::Tall,
    },
    BentoCard {
        icon: "ri-parent-line",
        title: "Parent Updates",
        description: "Monthly summaries go out to guardians without anyone copying numbers into an email.",
        span: CardSpan::Regular,
    },
    BentoCard {
        icon: "ri-book-2-line",
        title: "Record Book",
        description: "Details, grades, contacts and goals for each mentee, one tab away.",
        span: CardSpan::Regular,
    },
];

const TERM_PROGRESS: &[Metric] = &[
    Metric::new("Attendance", 94),
    Metric::new("Assignments", 81),
    Metric::new("Goals met", 60),
];

#[component]
pub fn BentoGrid() -> impl IntoView {
    view! {
        <section id="bento" class="bento">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Why mentors stay"</p>
                    <h2 class="section-title">"Everything about a mentee, on one grid."</h2>
                </div>
                <div class="bento-grid">
                    {CARDS.iter().map(|card| view! { <Card card=card /> }).collect_view()}
                    <article class="bento-card bento-card--wide bento-card--analytics">
                        <div class="bento-icon">
                            <i class="ri-line-chart-line"></i>
                        </div>
                        <h3 class="bento-title">"Progress Analytics"</h3>
                        <p class="bento-description">
                            "See how the term is going before the report card does."
                        </p>
                        <MetricList metrics=TERM_PROGRESS />
                    </article>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Card(card: &'static BentoCard) -> impl IntoView {
    view! {
        <article class={card.span.class()}>
            <div class="bento-icon">
                <i class={card.icon}></i>
            </div>
            <h3 class="bento-title">{card.title}</h3>
            <p class="bento-description">{card.description}</p>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    fn render() -> String {
        Owner::new().with(|| view! { <BentoGrid /> }.to_html())
    }

    #[test]
    fn renders_every_card() {
        let html = render();
        for card in CARDS {
            assert!(html.contains(card.title), "missing card {}", card.title);
            assert!(html.contains(card.icon));
        }
        assert!(html.contains("Progress Analytics"));
    }

    #[test]
    fn span_modifiers_match_cards() {
        let html = render();
        let wide = CARDS.iter().filter(|c| c.span == CardSpan::Wide).count();
        let tall = CARDS.iter().filter(|c| c.span == CardSpan::Tall).count();
        // +1 for the analytics card
        assert_eq!(html.matches("bento-card--wide").count(), wide + 1);
        assert_eq!(html.matches("bento-card--tall").count(), tall);
    }

    #[test]
    fn analytics_card_shows_mock_progress() {
        let html = render();
        assert_eq!(html.matches("class=\"progress\"").count(), TERM_PROGRESS.len());
        assert!(html.contains("width: 94%"));
    }
}

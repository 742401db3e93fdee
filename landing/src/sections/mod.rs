// Landing page sections
// Built for mentors by The MentorTrack Team (c)2025

mod bento_grid;
mod book_showcase;
mod console_banner;
mod features;
mod footer;
mod nav;
mod placeholder;
mod progress;

pub use bento_grid::BentoGrid;
pub use book_showcase::BookShowcase;
pub use console_banner::ConsoleBanner;
pub use features::Features;
pub use footer::Footer;
pub use nav::Nav;
pub use placeholder::Placeholder;

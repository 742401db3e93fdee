// Site-wide constants (single source of truth for copy that repeats)

/// Product name shown in the nav, footer and console banner.
pub const PRODUCT_NAME: &str = "MentorTrack";

/// Version string used across the landing page.
pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

pub const TAGLINE: &str = "Every mentee, every milestone, one record book.";

pub const COPYRIGHT: &str = "Built for mentors by The MentorTrack Team (c)2025";

/// External booking calendar used by every CTA on the site.
pub const BOOKING_URL: &str = "https://calendar.app.google/29to7brSPsZf5huk6";

/// Viewports narrower than this get the reduced-motion presentation and
/// the shorter transition lock.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

//! Routing Decision
//!
//! Maps a URL path and the session status to what the router should do.
//! The function is pure so the gate can be tested without a browser.

use std::fmt;

use crate::session::SessionStatus;

/// Every page the application knows about
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppRoute {
    SignIn,
    SignUp,
    Dashboard,
    Bookings,
    Admin,
    AdminManageUsers,
    AdminManageBookings,
    Activity,
    Venue { id: String },
    VenueBooking,
    MobileSearch,
    MaintenanceIssues,
    VenueIssueReporting,
    Profile,
}

/// Path the mobile profile slot navigates to
pub const PROFILE_PATH: &str = "/profile";

impl AppRoute {
    /// Parse a location path. Query string, fragment and a trailing slash are ignored.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let route = match segments.as_slice() {
            ["sign-in"] => AppRoute::SignIn,
            ["sign-up"] => AppRoute::SignUp,
            ["dashboard"] => AppRoute::Dashboard,
            ["bookings"] => AppRoute::Bookings,
            ["admin"] => AppRoute::Admin,
            ["admin", "manage-users"] => AppRoute::AdminManageUsers,
            ["admin", "manage-bookings"] => AppRoute::AdminManageBookings,
            ["activity"] => AppRoute::Activity,
            // Static segment wins over the venue id
            ["venue", "booking"] => AppRoute::VenueBooking,
            ["venue", id] => AppRoute::Venue { id: id.to_string() },
            ["mobile", "search"] => AppRoute::MobileSearch,
            ["maintenance", "issues"] => AppRoute::MaintenanceIssues,
            ["venue-issue-reporting"] => AppRoute::VenueIssueReporting,
            ["profile"] => AppRoute::Profile,
            _ => return None,
        };

        Some(route)
    }

    /// Canonical path for this route
    pub fn path(&self) -> String {
        match self {
            AppRoute::SignIn => "/sign-in".to_string(),
            AppRoute::SignUp => "/sign-up".to_string(),
            AppRoute::Dashboard => "/dashboard".to_string(),
            AppRoute::Bookings => "/bookings".to_string(),
            AppRoute::Admin => "/admin".to_string(),
            AppRoute::AdminManageUsers => "/admin/manage-users".to_string(),
            AppRoute::AdminManageBookings => "/admin/manage-bookings".to_string(),
            AppRoute::Activity => "/activity".to_string(),
            AppRoute::Venue { id } => format!("/venue/{}", id),
            AppRoute::VenueBooking => "/venue/booking".to_string(),
            AppRoute::MobileSearch => "/mobile/search".to_string(),
            AppRoute::MaintenanceIssues => "/maintenance/issues".to_string(),
            AppRoute::VenueIssueReporting => "/venue-issue-reporting".to_string(),
            AppRoute::Profile => PROFILE_PATH.to_string(),
        }
    }

    /// Reachable without a session
    pub fn is_public(&self) -> bool {
        matches!(self, AppRoute::SignIn | AppRoute::SignUp)
    }

    /// Page heading
    pub fn title(&self) -> &'static str {
        match self {
            AppRoute::SignIn => "Sign In",
            AppRoute::SignUp => "Sign Up",
            AppRoute::Dashboard => "Home",
            AppRoute::Bookings => "My Bookings",
            AppRoute::Admin => "Admin Dashboard",
            AppRoute::AdminManageUsers => "Manage Users",
            AppRoute::AdminManageBookings => "Booking Requests",
            AppRoute::Activity => "Activity",
            AppRoute::Venue { .. } => "Venue Details",
            AppRoute::VenueBooking => "Book a Venue",
            AppRoute::MobileSearch => "Search Venues",
            AppRoute::MaintenanceIssues => "Issue Reports",
            AppRoute::VenueIssueReporting => "Report an Issue",
            AppRoute::Profile => "Profile",
        }
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// What the router should do for a location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Auth status not resolved yet; render a placeholder and do not navigate
    Loading,
    Render(AppRoute),
    Redirect(AppRoute),
    NotFound,
}

/// Decide how to handle `path` given the session status
pub fn resolve(status: &SessionStatus, path: &str) -> RouteDecision {
    let signed_in = match status {
        SessionStatus::Unresolved => return RouteDecision::Loading,
        SessionStatus::SignedOut => false,
        SessionStatus::SignedIn { .. } => true,
    };

    let trimmed = path.split(['?', '#']).next().unwrap_or_default();
    if trimmed.trim_matches('/').is_empty() {
        return if signed_in {
            RouteDecision::Redirect(AppRoute::Dashboard)
        } else {
            RouteDecision::Redirect(AppRoute::SignIn)
        };
    }

    let decision = match AppRoute::parse(trimmed) {
        Some(route) if route.is_public() || signed_in => RouteDecision::Render(route),
        Some(_) => RouteDecision::Redirect(AppRoute::SignIn),
        None if signed_in => RouteDecision::NotFound,
        None => RouteDecision::Redirect(AppRoute::SignIn),
    };

    tracing::debug!(path = %path, signed_in, decision = ?decision, "Resolved route");
    decision
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROTECTED: &[&str] = &[
        "/dashboard",
        "/bookings",
        "/admin",
        "/admin/manage-users",
        "/admin/manage-bookings",
        "/activity",
        "/venue/42",
        "/venue/booking",
        "/mobile/search",
        "/maintenance/issues",
        "/venue-issue-reporting",
        "/profile",
    ];

    fn signed_in() -> SessionStatus {
        SessionStatus::signed_in("user_1")
    }

    #[test]
    fn test_unresolved_is_loading() {
        for path in ["/", "/sign-in", "/dashboard", "/nowhere"] {
            assert_eq!(resolve(&SessionStatus::Unresolved, path), RouteDecision::Loading);
        }
    }

    #[test]
    fn test_signed_out_protected_redirects_to_sign_in() {
        for path in PROTECTED {
            assert_eq!(
                resolve(&SessionStatus::SignedOut, path),
                RouteDecision::Redirect(AppRoute::SignIn),
                "path {}",
                path
            );
        }
    }

    #[test]
    fn test_signed_out_unknown_redirects_to_sign_in() {
        assert_eq!(
            resolve(&SessionStatus::SignedOut, "/does/not/exist"),
            RouteDecision::Redirect(AppRoute::SignIn)
        );
    }

    #[test]
    fn test_public_routes_render_for_everyone() {
        for status in [SessionStatus::SignedOut, signed_in()] {
            assert_eq!(resolve(&status, "/sign-in"), RouteDecision::Render(AppRoute::SignIn));
            assert_eq!(resolve(&status, "/sign-up"), RouteDecision::Render(AppRoute::SignUp));
        }
    }

    #[test]
    fn test_root_redirects() {
        assert_eq!(
            resolve(&signed_in(), "/"),
            RouteDecision::Redirect(AppRoute::Dashboard)
        );
        assert_eq!(
            resolve(&SessionStatus::SignedOut, "/"),
            RouteDecision::Redirect(AppRoute::SignIn)
        );
    }

    #[test]
    fn test_signed_in_reaches_every_route() {
        for path in PROTECTED {
            let decision = resolve(&signed_in(), path);
            assert!(matches!(decision, RouteDecision::Render(_)), "path {}", path);
        }
    }

    #[test]
    fn test_signed_in_unknown_is_not_found() {
        assert_eq!(resolve(&signed_in(), "/admin/reports"), RouteDecision::NotFound);
    }

    #[test]
    fn test_venue_booking_beats_venue_id() {
        assert_eq!(AppRoute::parse("/venue/booking"), Some(AppRoute::VenueBooking));
        assert_eq!(
            AppRoute::parse("/venue/lt-101"),
            Some(AppRoute::Venue { id: "lt-101".to_string() })
        );
    }

    #[test]
    fn test_parse_ignores_query_and_trailing_slash() {
        assert_eq!(AppRoute::parse("/bookings/?page=2"), Some(AppRoute::Bookings));
        assert_eq!(AppRoute::parse("/activity#latest"), Some(AppRoute::Activity));
    }

    #[test]
    fn test_path_matches_parse() {
        for path in PROTECTED {
            let route = AppRoute::parse(path).unwrap();
            assert_eq!(route.path(), *path);
        }
    }
}

//! Canonical URL handling for the intercepted download route
//!
//! The download endpoint is addressed as `files/download/<id>`. The route is
//! never registered on the router — the interceptor claims it before
//! dispatch — so both the URL builder and the parser live here as the single
//! source of truth for its shape.

use crate::types::FileId;

/// Controller segment of the download route
pub const CONTROLLER: &str = "files";

/// Action segment of the download route
pub const ACTION: &str = "download";

/// A controller/action/id triple parsed from a request path
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    /// First path segment
    pub controller: &'a str,
    /// Second path segment
    pub action: &'a str,
    /// Third path segment, uninterpreted
    pub id: &'a str,
}

/// Return the canonical relative URL for downloading a file
///
/// # Example
///
/// ```
/// use filegate::types::FileId;
/// use filegate::url::download_url;
///
/// assert_eq!(download_url(FileId(17)), "files/download/17");
/// ```
pub fn download_url(id: FileId) -> String {
    format!("{CONTROLLER}/{ACTION}/{id}")
}

/// Split a request path into a controller/action/id triple
///
/// Accepts an optional leading slash. Returns `None` unless the path has
/// exactly three non-empty segments.
pub fn parse_route(path: &str) -> Option<RouteMatch<'_>> {
    let mut segments = path.trim_start_matches('/').split('/');

    let controller = segments.next().filter(|s| !s.is_empty())?;
    let action = segments.next().filter(|s| !s.is_empty())?;
    let id = segments.next().filter(|s| !s.is_empty())?;

    if segments.next().is_some() {
        return None;
    }

    Some(RouteMatch {
        controller,
        action,
        id,
    })
}

/// Return the raw id segment if the path addresses the download route
///
/// This is the trigger condition for the interceptor: the controller segment
/// must equal [`CONTROLLER`] and the action segment [`ACTION`]. The id is
/// returned uninterpreted so the caller decides how to treat a malformed one.
pub fn match_download(path: &str) -> Option<&str> {
    let route = parse_route(path)?;
    (route.controller == CONTROLLER && route.action == ACTION).then_some(route.id)
}

use crate::routes::Route;

/// Parse an incoming URL into a route.
///
/// Contract: any URL whose path contains `reset-password` and carries both
/// `token` and `email` query parameters opens the reset screen with those
/// values pre-filled. Anything else is not a deep link we handle.
pub fn parse_deep_link(url: &str) -> Option<Route> {
    let (path, query) = match url.split_once('?') {
        Some((path, query)) => (path, query),
        None => (url, ""),
    };

    if !path.contains("reset-password") {
        return None;
    }

    let mut token = None;
    let mut email = None;

    for pair in query.split('&') {
        let (key, value) = pair.split_once('=')?;
        let value = urlencoding::decode(value).ok()?.into_owned();
        match key {
            "token" => token = Some(value),
            "email" => email = Some(value),
            _ => {}
        }
    }

    match (token, email) {
        (Some(token), Some(email)) => Some(Route::ResetPassword { token, email }),
        _ => None,
    }
}

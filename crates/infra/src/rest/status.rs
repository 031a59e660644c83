//! HTTP status classification

use anypoint_domain::AnypointError;
use reqwest::StatusCode;

/// Map a response status to the error it represents, `None` for success.
///
/// `resource` names the request target and ends up in every message; `body`
/// is the response body, used as the detail of unclassified failures.
pub fn classify_status(status: StatusCode, resource: &str, body: &str) -> Option<AnypointError> {
    if status.as_u16() < 400 {
        return None;
    }

    let err = match status {
        StatusCode::UNAUTHORIZED => AnypointError::AuthExpired(format!(
            "missing or expired auth token calling '{resource}'; log in again"
        )),
        StatusCode::NOT_FOUND => AnypointError::NotFound(format!("entity '{resource}' not found")),
        _ => {
            let body = body.trim();
            let detail = if body.is_empty() {
                format!("{resource}: {}", status.canonical_reason().unwrap_or("unknown status"))
            } else {
                format!("{resource}: {body}")
            };
            AnypointError::Remote { status: status.as_u16(), detail }
        }
    };

    Some(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_statuses_are_not_errors() {
        for code in [200, 201, 204, 205, 302] {
            let status = StatusCode::from_u16(code).unwrap();
            assert!(classify_status(status, "GET /x", "").is_none(), "{code}");
        }
    }

    #[test]
    fn unauthorized_means_expired_auth() {
        let err = classify_status(StatusCode::UNAUTHORIZED, "GET /x", "").unwrap();
        assert!(matches!(err, AnypointError::AuthExpired(_)));
    }

    #[test]
    fn not_found_names_the_resource() {
        let err = classify_status(StatusCode::NOT_FOUND, "GET /organizations/9", "").unwrap();
        match err {
            AnypointError::NotFound(msg) => assert!(msg.contains("/organizations/9")),
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[test]
    fn other_failures_carry_status_and_detail() {
        let err = classify_status(StatusCode::FORBIDDEN, "PUT /x", "no permission").unwrap();
        assert_eq!(err, AnypointError::Remote { status: 403, detail: "PUT /x: no permission".into() });

        let err = classify_status(StatusCode::SERVICE_UNAVAILABLE, "GET /x", " ").unwrap();
        assert_eq!(
            err,
            AnypointError::Remote { status: 503, detail: "GET /x: Service Unavailable".into() }
        );
    }
}

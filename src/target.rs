use crate::error::ProxyError;

// Turn the inbound path ("/https%3A%2F%2Fhost%2Fcal.ics") into the upstream URL
pub fn parse_target(path: &str) -> Result<String, ProxyError> {
    let path = path.strip_prefix('/').unwrap_or(path);

    if path.is_empty() {
        return Err(ProxyError::InvalidInput(
            "Missing or invalid URL in path".to_string(),
        ));
    }

    let decoded = urlencoding::decode(path)
        .map_err(|_| ProxyError::InvalidInput("Invalid URL encoding".to_string()))?;

    if decoded.is_empty() {
        return Err(ProxyError::InvalidInput(
            "Missing or invalid URL in path".to_string(),
        ));
    }

    Ok(decoded.into_owned())
}

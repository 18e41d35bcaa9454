//! HTTP agent construction and bounded response helpers.

use std::io::{self, Read};
use std::time::Duration;

use crate::config::HttpSettings;

/// Build an HTTP agent with the configured timeouts.
///
/// A timeout of zero seconds leaves that phase unbounded.
pub fn build_agent(settings: &HttpSettings) -> ureq::Agent {
    let mut builder = ureq::AgentBuilder::new().user_agent(concat!(
        "fraudcheck/",
        env!("CARGO_PKG_VERSION")
    ));
    if let Some(timeout) = non_zero_secs(settings.connect_timeout_secs) {
        builder = builder.timeout_connect(timeout);
    }
    if let Some(timeout) = non_zero_secs(settings.read_timeout_secs) {
        builder = builder.timeout_read(timeout);
    }
    if let Some(timeout) = non_zero_secs(settings.write_timeout_secs) {
        builder = builder.timeout_write(timeout);
    }
    builder.build()
}

fn non_zero_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

/// Read a response into memory, enforcing a maximum byte size.
pub(crate) fn read_response_bytes(
    response: ureq::Response,
    max_bytes: usize,
) -> Result<Vec<u8>, io::Error> {
    check_content_length(&response, max_bytes)?;
    let mut limited = response.into_reader().take(max_bytes as u64 + 1);
    let mut bytes = Vec::new();
    limited.read_to_end(&mut bytes)?;
    if bytes.len() > max_bytes {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Response exceeded {max_bytes} bytes"),
        ));
    }
    Ok(bytes)
}

/// Read a response body as UTF-8 text, enforcing a maximum byte size.
pub(crate) fn read_response_text(
    response: ureq::Response,
    max_bytes: usize,
) -> Result<String, io::Error> {
    let bytes = read_response_bytes(response, max_bytes)?;
    String::from_utf8(bytes).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}

fn check_content_length(response: &ureq::Response, max_bytes: usize) -> Result<(), io::Error> {
    let Some(length) = response.header("Content-Length") else {
        return Ok(());
    };
    let Ok(length) = length.parse::<u64>() else {
        return Ok(());
    };
    if length > max_bytes as u64 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Response too large: {length} bytes"),
        ));
    }
    Ok(())
}

/// Why a listing request failed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// GitHub answered with a non-success status
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The request never produced a usable response
    #[error("Request failed: {0}")]
    Transport(String),
}

impl From<octocrab::Error> for ClientError {
    fn from(err: octocrab::Error) -> Self {
        match err {
            octocrab::Error::GitHub { source, .. } => Self::Status {
                status: source.status_code.as_u16(),
                message: source.message.clone(),
            },
            other => Self::Transport(describe(&other)),
        }
    }
}

/// One-line description of `err` and its causes
///
/// octocrab's `Display` appends a captured backtrace after the first line,
/// so only first lines are kept.
fn describe(err: &(dyn std::error::Error + 'static)) -> String {
    let mut detail = first_line(err);
    let mut cause = err.source();
    while let Some(source) = cause {
        let line = first_line(source);
        if !line.is_empty() && !detail.contains(&line) {
            detail.push_str(": ");
            detail.push_str(&line);
        }
        cause = source.source();
    }
    detail
}

fn first_line(err: &dyn std::error::Error) -> String {
    err.to_string().lines().next().unwrap_or_default().trim().to_string()
}

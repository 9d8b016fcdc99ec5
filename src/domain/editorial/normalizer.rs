use serde::{Deserialize, Serialize};

/// Which parse path produced a normalized result.
///
/// The generation prompt demands a pipe-separated headline/script pair, but
/// the model does not always comply. `Lines` marks the degraded line-based
/// parse so callers can report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParsePath {
    Delimiter,
    Lines,
}

impl std::fmt::Display for ParsePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParsePath::Delimiter => write!(f, "delimiter"),
            ParsePath::Lines => write!(f, "lines"),
        }
    }
}

/// Headline/script pair extracted from a raw generation response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedResult {
    pub headline: String,
    pub script: String,
    pub path: ParsePath,
}

/// Raised when neither the delimiter nor a usable multi-line structure is
/// present. Carries the full raw text for diagnostic display.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("could not extract headline and script from model output")]
pub struct ParseError {
    pub raw: String,
}

/// Extract a `(headline, script)` pair from a raw generation response.
///
/// Primary path: split on the FIRST `|` only; any later `|` characters stay
/// in the script. Fallback path: with no `|` present, the first non-empty
/// line becomes the headline and the remaining non-empty lines, joined with
/// single spaces, become the script. The fallback makes no attempt to verify
/// that the first line really is a headline; a two-sentence paragraph will
/// parse "successfully" and that is an accepted degradation.
///
/// Both fields have markdown emphasis markers (`*`) removed and surrounding
/// whitespace trimmed. The headline is guaranteed non-empty on success.
pub fn normalize(raw: &str) -> Result<NormalizedResult, ParseError> {
    if let Some((left, right)) = raw.split_once('|') {
        let headline = strip_emphasis(left);
        let script = strip_emphasis(right);

        if headline.is_empty() {
            return Err(ParseError {
                raw: raw.to_string(),
            });
        }

        return Ok(NormalizedResult {
            headline,
            script,
            path: ParsePath::Delimiter,
        });
    }

    let lines: Vec<&str> = raw.lines().filter(|line| !line.trim().is_empty()).collect();

    if lines.len() < 2 {
        return Err(ParseError {
            raw: raw.to_string(),
        });
    }

    let headline = strip_emphasis(lines[0]);
    let script = strip_emphasis(&lines[1..].join(" "));

    if headline.is_empty() {
        return Err(ParseError {
            raw: raw.to_string(),
        });
    }

    Ok(NormalizedResult {
        headline,
        script,
        path: ParsePath::Lines,
    })
}

fn strip_emphasis(text: &str) -> String {
    text.replace('*', "").trim().to_string()
}

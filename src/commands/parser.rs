use crate::statuspage::vocabulary::{component_status_from_phrase, COMPONENT_STATUS_PHRASES};
use crate::statuspage::IncidentStatus;

use super::intent::{IncidentTarget, Intent};

const COMMAND_KEYWORDS: [&str; 2] = ["status", "statuspage"];

/// First words that can never start a component name.
const RESERVED_WORDS: [&str; 5] = ["incidents", "open", "update", "resolve", "create"];

type Matcher = fn(&str) -> Option<Intent>;

/// Evaluated top to bottom; the first match wins. Specific shapes come before
/// the component fallbacks that would otherwise swallow them.
const MATCHERS: [(&str, Matcher); 8] = [
    ("help", match_help),
    ("incidents", match_incidents),
    ("update_by_id", match_targeted_update),
    ("update_latest", match_latest_update),
    ("open", match_open),
    ("overview", match_overview),
    ("component_query", match_component_query),
    ("component_update", match_component_update),
];

/// Returns `None` for anything that is not a status command; the caller stays silent.
pub(crate) fn parse_command(text: &str) -> Option<Intent> {
    let args = command_args(text)?;
    MATCHERS.iter().find_map(|(name, matcher)| {
        let intent = matcher(args)?;
        log::debug!("command_matched matcher={}", name);
        Some(intent)
    })
}

/// Strips `/`, the keyword and an optional `@botname`, returning the trimmed arguments.
fn command_args(text: &str) -> Option<&str> {
    let text = text.trim();
    let text = text.strip_prefix('/').unwrap_or(text);
    let head_end = text
        .find(|c: char| c.is_whitespace() || c == '?')
        .unwrap_or(text.len());
    let (head, rest) = text.split_at(head_end);
    let keyword = head.split_once('@').map_or(head, |(keyword, _)| keyword);
    if !COMMAND_KEYWORDS
        .iter()
        .any(|candidate| keyword.eq_ignore_ascii_case(candidate))
    {
        return None;
    }

    if rest.trim() == "?" {
        Some("?")
    } else if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest.trim())
    } else {
        None
    }
}

fn match_help(args: &str) -> Option<Intent> {
    args.eq_ignore_ascii_case("help").then_some(Intent::Help)
}

fn match_incidents(args: &str) -> Option<Intent> {
    let word = args.strip_suffix('?').unwrap_or(args).trim_end();
    word.eq_ignore_ascii_case("incidents")
        .then_some(Intent::ListIncidents)
}

fn match_targeted_update(args: &str) -> Option<Intent> {
    let rest = strip_keyword(args, "update")?;
    let (incident_id, rest) = split_word(rest)?;
    let (status, message) = incident_status_and_text(rest)?;
    Some(Intent::UpdateIncident {
        target: IncidentTarget::Id(incident_id.to_string()),
        status,
        message: message.to_string(),
    })
}

fn match_latest_update(args: &str) -> Option<Intent> {
    let rest = strip_keyword(args, "update")?;
    let (status, message) = incident_status_and_text(rest)?;
    Some(Intent::UpdateIncident {
        target: IncidentTarget::MostRecent,
        status,
        message: message.to_string(),
    })
}

fn match_open(args: &str) -> Option<Intent> {
    let rest = strip_keyword(args, "open")?;
    let (status, text) = incident_status_and_text(rest)?;
    let (name, message) = match text.split_once(':') {
        Some((name, message)) => (name.trim(), Some(message.trim())),
        None => (text.trim(), None),
    };
    if name.is_empty() {
        return None;
    }

    Some(Intent::OpenIncident {
        status,
        name: name.to_string(),
        message: message
            .filter(|message| !message.is_empty())
            .map(str::to_string),
    })
}

fn match_overview(args: &str) -> Option<Intent> {
    (args.is_empty() || args == "?").then_some(Intent::Overview)
}

fn match_component_query(args: &str) -> Option<Intent> {
    let name = args.strip_suffix('?')?.trim_end();
    if name.is_empty() || starts_with_reserved_word(name) {
        return None;
    }
    Some(Intent::ComponentStatus {
        name: name.to_string(),
    })
}

fn match_component_update(args: &str) -> Option<Intent> {
    COMPONENT_STATUS_PHRASES.iter().find_map(|phrase| {
        let split = args.len().checked_sub(phrase.len())?;
        if !args.is_char_boundary(split) || !args[split..].eq_ignore_ascii_case(phrase) {
            return None;
        }
        let head = &args[..split];
        if !head.ends_with(char::is_whitespace) {
            return None;
        }
        let name = head.trim_end();
        if name.is_empty() || starts_with_reserved_word(name) {
            return None;
        }
        Some(Intent::SetComponentStatus {
            name: name.to_string(),
            status: component_status_from_phrase(phrase)?,
        })
    })
}

fn strip_keyword<'a>(args: &'a str, keyword: &str) -> Option<&'a str> {
    let (word, rest) = split_word(args)?;
    word.eq_ignore_ascii_case(keyword).then_some(rest)
}

/// `<lifecycle status> <non-empty text>`
fn incident_status_and_text(input: &str) -> Option<(IncidentStatus, &str)> {
    let (word, text) = split_word(input)?;
    let status = IncidentStatus::from_command_word(word)?;
    if text.is_empty() {
        return None;
    }
    Some((status, text))
}

fn split_word(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }
    match input.find(char::is_whitespace) {
        Some(end) => Some((&input[..end], input[end..].trim())),
        None => Some((input, "")),
    }
}

fn starts_with_reserved_word(name: &str) -> bool {
    split_word(name).is_some_and(|(first, _)| {
        RESERVED_WORDS
            .iter()
            .any(|reserved| first.eq_ignore_ascii_case(reserved))
    })
}

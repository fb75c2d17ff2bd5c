// Error handling utilities for consistent error messages and exit codes

use std::process;
use crate::config::parse_keyword_list;
use crate::models::Unit;

/// Exit with a user error (exit code 1)
/// User errors are for invalid expressions, unknown units, bad flags, etc.
pub fn user_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

/// Exit with an internal error (exit code >1)
/// Internal errors are for unexpected system failures such as an unreadable config file
pub fn internal_error(message: &str) -> ! {
    eprintln!("Internal error: {}", message);
    process::exit(2);
}

/// Whether an error comes from the system rather than from what the user typed
///
/// I/O failures (unreadable config file and the like) are internal; everything
/// else, including malformed config lines, is on the user.
pub fn is_internal_error(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| cause.downcast_ref::<std::io::Error>().is_some())
}

/// Parse an `--alias` value of the form `CODE=keyword,keyword`
pub fn parse_alias_spec(spec: &str) -> Result<(Unit, Vec<String>), String> {
    let (code, words) = spec.split_once('=')
        .ok_or_else(|| format!("Invalid alias '{}'. Expected CODE=keyword[,keyword...] (e.g. d=tag,tage).", spec))?;

    let code = code.trim().to_lowercase();
    let unit = Unit::from_code(&code)
        .ok_or_else(|| format!("Invalid unit code '{}' in alias. Expected one of: ms, s, m, h, d, w, mth, y.", code))?;

    let keywords = parse_keyword_list(words);
    if keywords.is_empty() {
        return Err(format!("Alias for '{}' has no keywords.", code));
    }
    if let Some(bad) = keywords.iter().find(|w| !w.chars().all(char::is_alphabetic)) {
        return Err(format!("Invalid keyword '{}'. Unit keywords can only contain letters.", bad));
    }

    Ok((unit, keywords))
}

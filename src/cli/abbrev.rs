// Subcommand abbreviation matching and implicit `parse` for the timestring CLI

/// Find all commands that start with the given prefix (case-insensitive)
pub fn find_matching_commands<'a>(prefix: &str, commands: &'a [&str]) -> Vec<&'a str> {
    let prefix_lower = prefix.to_lowercase();
    commands.iter()
        .filter(|cmd| cmd.to_lowercase().starts_with(&prefix_lower))
        .copied()
        .collect()
}

/// Find a unique command match for the given prefix
/// Returns Ok(command) if exactly one match, Err(matches) if ambiguous, Err(empty) if no match
/// Note: Exact matches take precedence over prefix matches
pub fn find_unique_command<'a>(prefix: &str, commands: &'a [&str]) -> Result<&'a str, Vec<&'a str>> {
    let prefix_lower = prefix.to_lowercase();
    for cmd in commands {
        if cmd.to_lowercase() == prefix_lower {
            return Ok(*cmd);
        }
    }

    let matches = find_matching_commands(prefix, commands);

    if matches.is_empty() {
        Err(Vec::new())
    } else if matches.len() == 1 {
        Ok(matches[0])
    } else {
        Err(matches)
    }
}

/// Top-level commands
pub const TOP_LEVEL_COMMANDS: &[&str] = &["parse", "units", "constants", "help"];

/// Flags clap handles before any subcommand
const GLOBAL_FLAGS: &[&str] = &["-h", "--help", "-V", "--version"];

/// Expressions and parse options can never be command names
fn is_parse_argument(arg: &str) -> bool {
    arg.starts_with(|c: char| c.is_ascii_digit() || matches!(c, '.' | '+' | '-'))
}

/// Expand an abbreviated subcommand, or put `parse` in front when the first
/// argument is not a command at all
///
/// `timestring 1h 15m` becomes `timestring parse 1h 15m` and
/// `timestring u` becomes `timestring units`.
pub fn expand_command_abbreviations(args: Vec<String>) -> Result<Vec<String>, String> {
    let Some(first) = args.first() else {
        return Ok(args);
    };

    if GLOBAL_FLAGS.contains(&first.as_str()) {
        return Ok(args);
    }

    let mut expanded = Vec::with_capacity(args.len() + 1);

    if is_parse_argument(first) {
        // `timestring 1h`, `timestring --unit h 1h`
        expanded.push("parse".to_string());
        expanded.extend(args);
        return Ok(expanded);
    }

    match find_unique_command(first, TOP_LEVEL_COMMANDS) {
        Ok(full_cmd) => {
            expanded.push(full_cmd.to_string());
            expanded.extend(args.into_iter().skip(1));
        }
        Err(matches) => {
            if matches.is_empty() {
                // No match - treat the whole line as an expression
                expanded.push("parse".to_string());
                expanded.extend(args);
            } else {
                let match_list = matches.join(", ");
                return Err(format!(
                    "Ambiguous command '{}'. Did you mean one of: {}?",
                    first, match_list
                ));
            }
        }
    }

    Ok(expanded)
}

use clap::{Args, Parser as ClapParser, Subcommand};
use anyhow::{Context, Result};
use log::debug;
use crate::cli::abbrev;
use crate::cli::error::{internal_error, is_internal_error, parse_alias_spec, user_error};
use crate::cli::output::{constants_json, format_breakdown, format_constants, format_unit_table, format_value, unit_table_json};
use crate::config::Config;
use crate::models::CalendarConstants;
use crate::parser::{ParseOptions, Parser};

#[derive(ClapParser)]
#[command(name = "timestring")]
#[command(about = "Parse human-written durations like \"1d 3h 25m 18s\" into seconds or any other unit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a duration expression (default when no command is given)
    Parse {
        /// Output unit: ms, s, m, h, d, w, mth, y or any unit keyword (default: s)
        #[arg(short = 'u', long)]
        unit: Option<String>,
        /// Print the total as days, hours, minutes and seconds instead of a number
        #[arg(short = 'b', long)]
        breakdown: bool,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        calendar: CalendarArgs,
        /// Replace the keywords of a unit (e.g. "d=tag,tage"); repeatable
        #[arg(long = "alias", value_name = "CODE=KEYWORDS")]
        aliases: Vec<String>,
        /// Duration expression (e.g. "1d 3h 25m 18s"); words are joined with spaces
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        expr: Vec<String>,
    },
    /// List units and the keywords that name them
    Units {
        /// Replace the keywords of a unit (e.g. "d=tag,tage"); repeatable
        #[arg(long = "alias", value_name = "CODE=KEYWORDS")]
        aliases: Vec<String>,
        #[command(flatten)]
        calendar: CalendarArgs,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Show the calendar constants in effect
    Constants {
        #[command(flatten)]
        calendar: CalendarArgs,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

/// Calendar overrides shared by every command
#[derive(Args, Debug, Default, Clone)]
pub struct CalendarArgs {
    /// Hours in a day (default: 24)
    #[arg(long)]
    pub hours_per_day: Option<f64>,
    /// Days in a week (default: 7)
    #[arg(long)]
    pub days_per_week: Option<f64>,
    /// Weeks in a month (default: 4; informational only)
    #[arg(long)]
    pub weeks_per_month: Option<f64>,
    /// Months in a year (default: 12)
    #[arg(long)]
    pub months_per_year: Option<f64>,
    /// Days in a year (default: 365.25)
    #[arg(long)]
    pub days_per_year: Option<f64>,
}

impl CalendarArgs {
    /// Overlay the flags that were given onto `calendar`
    pub fn apply(&self, calendar: &mut CalendarConstants) {
        if let Some(v) = self.hours_per_day {
            calendar.hours_per_day = v;
        }
        if let Some(v) = self.days_per_week {
            calendar.days_per_week = v;
        }
        if let Some(v) = self.weeks_per_month {
            calendar.weeks_per_month = v;
        }
        if let Some(v) = self.months_per_year {
            calendar.months_per_year = v;
        }
        if let Some(v) = self.days_per_year {
            calendar.days_per_year = v;
        }
    }
}

/// Merge rc-file settings with command-line flags (flags win)
pub fn build_options(config: &Config, calendar: &CalendarArgs, aliases: &[String]) -> Result<ParseOptions, String> {
    let mut options = config.options.clone();
    calendar.apply(&mut options.calendar);
    for spec in aliases {
        let (unit, keywords) = parse_alias_spec(spec)?;
        options.custom_units.insert(unit, keywords);
    }
    Ok(options)
}

fn build_parser(config: &Config, calendar: &CalendarArgs, aliases: &[String]) -> Result<Parser> {
    let options = match build_options(config, calendar, aliases) {
        Ok(options) => options,
        Err(e) => user_error(&e),
    };
    Ok(Parser::new(&options)?)
}

pub fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    // Expand abbreviations and insert the implicit `parse`
    let args = match abbrev::expand_command_abbreviations(args) {
        Ok(expanded) => expanded,
        Err(e) => user_error(&e),
    };
    debug!("Expanded arguments: {:?}", args);

    let cli = Cli::parse_from(std::iter::once("timestring".to_string()).chain(args));

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) if is_internal_error(&e) => internal_error(&format!("{:#}", e)),
        Err(e) => user_error(&format!("{:#}", e)),
    };

    match cli.command {
        Commands::Parse { unit, breakdown, json, calendar, aliases, expr } => {
            let parser = build_parser(&config, &calendar, &aliases)?;
            let expression = expr.join(" ");
            let unit = unit
                .or_else(|| config.output_unit.clone())
                .unwrap_or_else(|| "s".to_string());
            handle_parse(&parser, &expression, &unit, breakdown, json)
        }
        Commands::Units { aliases, calendar, json } => {
            let parser = build_parser(&config, &calendar, &aliases)?;
            if json {
                let value = unit_table_json(parser.table(), parser.calendar());
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                print!("{}", format_unit_table(parser.table(), parser.calendar()));
            }
            Ok(())
        }
        Commands::Constants { calendar, json } => {
            let parser = build_parser(&config, &calendar, &[])?;
            if json {
                println!("{}", serde_json::to_string_pretty(&constants_json(parser.calendar()))?);
            } else {
                print!("{}", format_constants(parser.calendar()));
            }
            Ok(())
        }
    }
}

pub fn handle_parse(parser: &Parser, expression: &str, unit: &str, breakdown: bool, json: bool) -> Result<()> {
    let seconds = parser.seconds(expression)?;
    let value = parser.convert(seconds, unit)?;

    let breakdown = if breakdown {
        let delta = crate::parser::to_time_delta(seconds)?;
        Some(format_breakdown(delta))
    } else {
        None
    };

    if json {
        let mut result = serde_json::json!({
            "expression": expression,
            "unit": unit,
            "value": value,
            "seconds": seconds,
        });
        if let Some(text) = &breakdown {
            result["breakdown"] = serde_json::json!(text);
        }
        let rendered = serde_json::to_string_pretty(&result)
            .context("Failed to render JSON output")?;
        println!("{}", rendered);
    } else if let Some(text) = breakdown {
        println!("{}", text);
    } else {
        println!("{}", format_value(value));
    }

    Ok(())
}

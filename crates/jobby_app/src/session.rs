//! Line-driven job list session.
//!
//! Each command maps onto one filter mutator of the list controller. Output is
//! produced by a subscription, so every state transition is printed as it happens.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use jobby_engine::{JobListController, PendingFetch};
use jobby_logging::jobby_debug;

use crate::render;

const HELP: &str = "\
commands:
  toggle <TYPE>   tick/untick an employment type (refetches)
  salary <AMOUNT> pick a salary tier (refetches)
  type <TEXT>     edit the search box (does not refetch)
  search          submit the search box
  retry           repeat the last request
  filters         show current filters and choices
  help            show this text
  quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Toggle(String),
    Salary(u64),
    Type(String),
    Search,
    Retry,
    Filters,
    Help,
    Quit,
}

pub fn parse(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();
    match word {
        "toggle" if !rest.is_empty() => Ok(Command::Toggle(rest.to_string())),
        "salary" => rest
            .parse()
            .map(Command::Salary)
            .map_err(|_| format!("not a salary amount: {rest:?}")),
        "type" => Ok(Command::Type(rest.to_string())),
        "search" => Ok(Command::Search),
        "retry" => Ok(Command::Retry),
        "filters" => Ok(Command::Filters),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        _ => Err(format!("unknown command: {line:?} (try `help`)")),
    }
}

pub async fn run(controller: &JobListController, json: bool) -> Result<()> {
    let subscription = controller.subscribe(move |state| {
        let out = if json {
            render::json(state)
        } else {
            render::jobs(state, "type `retry` to try again")
        };
        println!("{out}");
    });

    println!("{HELP}");
    controller.trigger().await;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match parse(&line) {
            Ok(command) => command,
            Err(message) => {
                eprintln!("{message}");
                continue;
            }
        };
        jobby_debug!("session command {:?}", command);

        let pending: Option<PendingFetch> = match command {
            Command::Toggle(tag) => controller.toggle_employment_type(&tag),
            Command::Salary(amount) => controller.set_salary_floor(amount),
            Command::Type(text) => {
                controller.set_search_term(text);
                println!(
                    "search: {:?} (press `search` to submit)",
                    controller.criteria().search_term()
                );
                None
            }
            Command::Search => controller.submit_search(),
            Command::Retry => Some(controller.retry()),
            Command::Filters => {
                print_filters(controller);
                None
            }
            Command::Help => {
                println!("{HELP}");
                None
            }
            Command::Quit => break,
        };
        if let Some(pending) = pending {
            pending.await;
        }
        io::stdout().flush()?;
    }

    controller.unsubscribe(subscription);
    Ok(())
}

fn print_filters(controller: &JobListController) {
    let criteria = controller.criteria();
    let types: Vec<&str> = criteria.employment_types().collect();
    println!("selected types: {}", types.join(", "));
    match criteria.minimum_salary() {
        Some(floor) => println!("minimum package: {floor}"),
        None => println!("minimum package: any"),
    }
    println!("search: {:?}", criteria.search_term());
    print!("{}", render::filter_help());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_filter_commands() {
        assert_eq!(
            parse("toggle FULLTIME"),
            Ok(Command::Toggle("FULLTIME".to_string()))
        );
        assert_eq!(parse("salary 2000000"), Ok(Command::Salary(2_000_000)));
        assert_eq!(
            parse("  type  rust dev "),
            Ok(Command::Type("rust dev".to_string()))
        );
        assert_eq!(parse("type"), Ok(Command::Type(String::new())));
        assert_eq!(parse("search"), Ok(Command::Search));
        assert_eq!(parse("retry"), Ok(Command::Retry));
        assert_eq!(parse("q"), Ok(Command::Quit));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse("toggle").is_err());
        assert!(parse("salary lots").is_err());
        assert!(parse("dance").is_err());
    }
}

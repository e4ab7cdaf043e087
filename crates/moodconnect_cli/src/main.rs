//! Command-line entry point over `moodconnect_core`.
//!
//! # Responsibility
//! - Run one session operation per invocation against the configured store.
//! - Keep output plain text and deterministic for scripting.

use chrono::Local;
use log::warn;
use moodconnect_core::db::open_db;
use moodconnect_core::{
    core_version, init_logging, ContactDraft, ContactId, CoreConfig, MoodSession,
    RelationshipType, SqliteKeyValueStore,
};
use std::process::ExitCode;

const USAGE: &str = "usage: moodconnect <command>
commands:
  log <1-5>                         log today's mood
  add <name> <relationship> [days]  add a contact (family|close-friend|friend|acquaintance|colleague)
  contacted <id>                    mark a contact as reached now
  delete <id>                       delete a contact
  today                             today's mood and suggested contacts
  reconnect                         contacts due for reconnection
  stats                             mood statistics
  history                           mood entries, newest first
  contacts                          list contacts
  version                           print core version";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let Some(command) = args.first().map(String::as_str) else {
        return Err(USAGE.to_string());
    };
    if command == "version" {
        println!("moodconnect_core version={}", core_version());
        return Ok(());
    }

    let config = CoreConfig::from_env();
    if let Some(log_dir) = &config.log_dir {
        let log_dir = log_dir.to_string_lossy();
        if let Err(err) = init_logging(&config.log_level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let conn = open_db(&config.db_path).map_err(|err| {
        format!(
            "failed to open storage `{}`: {err}",
            config.db_path.display()
        )
    })?;
    let mut session = MoodSession::open(SqliteKeyValueStore::new(&conn));
    let now = Local::now();

    match (command, &args[1..]) {
        ("log", [value]) => {
            let value = value
                .parse::<i64>()
                .map_err(|_| format!("mood value must be a number, got `{value}`"))?;
            let entry = session.log_mood(value, now).map_err(|err| err.to_string())?;
            println!(
                "{} {} - {}",
                entry.date_key(),
                entry.value.label(),
                entry.value.suggestion()
            );
        }
        ("add", [name, relationship, rest @ ..]) if rest.len() <= 1 => {
            let relationship =
                RelationshipType::parse(relationship).map_err(|err| err.to_string())?;
            let mut draft = ContactDraft::new(name.as_str(), relationship);
            if let Some(days) = rest.first() {
                let days = days
                    .parse::<i64>()
                    .map_err(|_| format!("reconnect days must be a number, got `{days}`"))?;
                draft = draft.with_reconnect_days(days);
            }
            let id = session
                .add_contact(draft, now)
                .map_err(|err| err.to_string())?;
            println!("added contact {id}");
        }
        ("contacted", [id]) => {
            let id = parse_contact_id(id)?;
            if !session.mark_contacted(id, now) {
                warn!("event=cli_contacted module=cli status=skip contact_id={id}");
                println!("no contact with id {id}");
            }
        }
        ("delete", [id]) => {
            let id = parse_contact_id(id)?;
            if !session.delete_contact(id) {
                println!("no contact with id {id}");
            }
        }
        ("today", []) => match session.today_mood(&now) {
            None => println!("no mood logged today"),
            Some(entry) => {
                println!("{} - {}", entry.value.label(), entry.value.suggestion());
                for contact in session.suggested_contacts(&now) {
                    println!(
                        "  {} ({})",
                        contact.name,
                        contact.relationship.label()
                    );
                }
            }
        },
        ("reconnect", []) => {
            for candidate in session.reconnect_suggestions(&now) {
                println!(
                    "{} [{}] {} (every {} days)",
                    candidate.contact.name,
                    candidate.contact.id,
                    candidate.staleness,
                    candidate.contact.reconnect_days
                );
            }
        }
        ("stats", []) => {
            let stats = session.mood_statistics();
            println!(
                "total={} average={:.1} streak={}",
                stats.total, stats.average, stats.streak
            );
        }
        ("history", []) => {
            for entry in session.mood_history() {
                println!("{} {}", entry.date_key(), entry.value.label());
            }
        }
        ("contacts", []) => {
            for contact in session.contacts() {
                println!(
                    "[{}] {} ({}, every {} days)",
                    contact.id,
                    contact.name,
                    contact.relationship.label(),
                    contact.reconnect_days
                );
            }
        }
        _ => return Err(USAGE.to_string()),
    }

    Ok(())
}

fn parse_contact_id(value: &str) -> Result<ContactId, String> {
    value
        .parse::<i64>()
        .map(ContactId)
        .map_err(|_| format!("contact id must be a number, got `{value}`"))
}

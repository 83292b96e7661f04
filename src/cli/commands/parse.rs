use crate::cli::parser::Commands;
use crate::cli::read_transcript;
use crate::core::parser::parse_transcript;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Parse { file, json } = cmd {
        let text = read_transcript(file)?;
        let outcome = parse_transcript(&text);

        if *json {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
            return Ok(());
        }

        info(format!(
            "Parsed {} event(s), {} message(s) kept.\n",
            outcome.events.len(),
            outcome.messages.len()
        ));

        println!("EVENTS:");
        for ev in &outcome.events {
            println!(
                "- {} | {} | in={} out={} | loc={}",
                ev.employee_name,
                ev.kind.as_str(),
                ev.in_time.as_deref().unwrap_or("-"),
                ev.out_time.as_deref().unwrap_or("-"),
                ev.location_code.as_deref().unwrap_or("-"),
            );
        }

        if !outcome.messages.is_empty() {
            println!("\nMESSAGES:");
            for m in &outcome.messages {
                let sender = if m.sender_name.is_empty() {
                    "(unknown)"
                } else {
                    m.sender_name.as_str()
                };
                println!("- {} [{}]: {}", sender, m.time, m.text);
            }
        }
    }
    Ok(())
}

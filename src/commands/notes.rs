//! Note command handlers.

use colored::Colorize;
use prettytable::{row, Table};
use uuid::Uuid;

use crate::config::Config;
use crate::error::Result;

/// Handle `supatask notes list`.
pub async fn list(
    config: &Config,
    email: Option<&str>,
    password: Option<&str>,
    project: Option<Uuid>,
) -> Result<()> {
    let client = super::connect(config, email, password).await?;
    let notes = client.notes(project).await?;

    if notes.is_empty() {
        println!("no notes");
        return Ok(());
    }

    let mut table = Table::new();
    table.add_row(row!["ID", "TITLE", "BODY", "PROJECT", "CREATED"]);
    for note in &notes {
        table.add_row(row![
            note.id,
            note.title,
            note.body,
            note.project_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            note.created_at.to_rfc3339(),
        ]);
    }
    table.printstd();
    Ok(())
}

/// Handle `supatask notes add`.
pub async fn add(
    config: &Config,
    email: Option<&str>,
    password: Option<&str>,
    title: &str,
    body: &str,
    project: Option<Uuid>,
) -> Result<()> {
    let client = super::connect(config, email, password).await?;
    let user_id = super::acting_user_id(&client)?;

    match client.add_note(title, body, user_id, project).await? {
        Some(note) => println!("{} added note {} ({})", "ok:".green().bold(), note.title, note.id),
        None => println!(
            "{} note created but the backend returned no row",
            "warning:".yellow().bold()
        ),
    }
    Ok(())
}

/// Handle `supatask notes rm`.
pub async fn rm(
    config: &Config,
    email: Option<&str>,
    password: Option<&str>,
    id: Uuid,
) -> Result<()> {
    let client = super::connect(config, email, password).await?;
    client.delete_note(id).await?;
    println!("{} deleted note {}", "ok:".green().bold(), id);
    Ok(())
}

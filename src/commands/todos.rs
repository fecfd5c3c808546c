//! Todo command handlers.

use colored::Colorize;
use prettytable::{row, Table};
use uuid::Uuid;

use crate::config::Config;
use crate::error::Result;

/// Handle `supatask todos list`.
pub async fn list(
    config: &Config,
    email: Option<&str>,
    password: Option<&str>,
    project: Option<Uuid>,
) -> Result<()> {
    let client = super::connect(config, email, password).await?;
    let todos = match project {
        Some(project_id) => client.todos_in_project(project_id).await?,
        None => client.todos().await?,
    };

    if todos.is_empty() {
        println!("no todos");
        return Ok(());
    }

    let mut table = Table::new();
    table.add_row(row!["ID", "TITLE", "DONE", "PROJECT", "INSERTED"]);
    for todo in &todos {
        table.add_row(row![
            todo.id,
            todo.title,
            if todo.is_done { "yes" } else { "no" },
            todo.project_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            todo.inserted_at.to_rfc3339(),
        ]);
    }
    table.printstd();
    Ok(())
}

/// Handle `supatask todos add`.
pub async fn add(
    config: &Config,
    email: Option<&str>,
    password: Option<&str>,
    title: &str,
    project: Option<Uuid>,
) -> Result<()> {
    let client = super::connect(config, email, password).await?;
    let user_id = super::acting_user_id(&client)?;

    let created = match project {
        Some(project_id) => client.add_todo_in_project(title, user_id, project_id).await?,
        None => client.add_todo(title, user_id).await?,
    };

    match created {
        Some(todo) => println!("{} added todo {} ({})", "ok:".green().bold(), todo.title, todo.id),
        None => println!(
            "{} todo created but the backend returned no row",
            "warning:".yellow().bold()
        ),
    }
    Ok(())
}

/// Handle `supatask todos toggle`.
pub async fn toggle(
    config: &Config,
    email: Option<&str>,
    password: Option<&str>,
    id: Uuid,
    done: bool,
) -> Result<()> {
    let client = super::connect(config, email, password).await?;
    let updated = client.set_todo_done(id, done).await?;

    match updated {
        Some(todo) => println!(
            "{} todo {} is now {}",
            "ok:".green().bold(),
            todo.title,
            if todo.is_done { "done" } else { "open" }
        ),
        None => println!(
            "{} no todo matched id {}",
            "warning:".yellow().bold(),
            id
        ),
    }
    Ok(())
}

/// Handle `supatask todos rm`.
pub async fn rm(
    config: &Config,
    email: Option<&str>,
    password: Option<&str>,
    id: Uuid,
) -> Result<()> {
    let client = super::connect(config, email, password).await?;
    client.delete_todo(id).await?;
    println!("{} deleted todo {}", "ok:".green().bold(), id);
    Ok(())
}

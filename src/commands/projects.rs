//! Project command handlers.

use colored::Colorize;
use prettytable::{row, Table};
use uuid::Uuid;

use crate::config::Config;
use crate::error::Result;

/// Handle `supatask projects list`.
pub async fn list(config: &Config, email: Option<&str>, password: Option<&str>) -> Result<()> {
    let client = super::connect(config, email, password).await?;
    let projects = client.projects().await?;

    if projects.is_empty() {
        println!("no projects");
        return Ok(());
    }

    let mut table = Table::new();
    table.add_row(row!["ID", "NAME", "CREATED"]);
    for project in &projects {
        table.add_row(row![project.id, project.name, project.created_at.to_rfc3339()]);
    }
    table.printstd();
    Ok(())
}

/// Handle `supatask projects add`.
pub async fn add(
    config: &Config,
    email: Option<&str>,
    password: Option<&str>,
    name: &str,
) -> Result<()> {
    let client = super::connect(config, email, password).await?;
    let user_id = super::acting_user_id(&client)?;

    match client.add_project(name, user_id).await? {
        Some(project) => println!(
            "{} added project {} ({})",
            "ok:".green().bold(),
            project.name,
            project.id
        ),
        None => println!(
            "{} project created but the backend returned no row",
            "warning:".yellow().bold()
        ),
    }
    Ok(())
}

/// Handle `supatask projects rm`.
pub async fn rm(
    config: &Config,
    email: Option<&str>,
    password: Option<&str>,
    id: Uuid,
) -> Result<()> {
    let client = super::connect(config, email, password).await?;
    client.delete_project(id).await?;
    println!("{} deleted project {}", "ok:".green().bold(), id);
    Ok(())
}

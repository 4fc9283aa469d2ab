use anyhow::{Context, Result};
use teammanager::config::Config;
use teammanager::logger::Logger;
use teammanager::pagination::PageRequest;
use teammanager::repositories::{ProjectRepository, TaskRepository, UserRepository};
use teammanager::storage::LocalStorage;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.first().map(String::as_str) == Some("--generate-config") {
        let path = match args.get(1) {
            Some(path) => path.into(),
            None => Config::get_default_config_path()?,
        };
        Config::generate_default_config(&path)?;
        println!("Configuration written to {}", path.display());
        return Ok(());
    }

    let config = Config::load()?;
    Logger::from_config(&config.logging)?.install()?;

    let storage = LocalStorage::connect(&config.database)
        .await
        .with_context(|| format!("Failed to open database at {}", config.database.url))?;

    let today = chrono::Local::now().date_naive();
    let users = UserRepository::count(&storage.conn).await?;
    let projects = ProjectRepository::count(&storage.conn).await?;
    let active = ProjectRepository::count_by_end_date_is_null_or_end_date_after(&storage.conn, today).await?;
    let tasks = TaskRepository::count(&storage.conn).await?;

    log::info!(
        "Store ready: {} users, {} projects ({} active), {} tasks",
        users,
        projects,
        active,
        tasks
    );
    println!("Database: {}", config.database.url);
    println!("Users:    {}", users);
    println!("Projects: {} ({} active as of {})", projects, active, today);
    println!("Tasks:    {}", tasks);

    let listing = ProjectRepository::find_all(&storage.conn, PageRequest::clamped(0, None, &config.pagination)).await?;
    for project in &listing.items {
        println!("  #{} {} ({} to {})", project.id, project.name, project.start_date, project.end_date);
    }
    if listing.has_next() {
        println!("  ... {} more", listing.total_items - listing.len() as u64);
    }

    Ok(())
}

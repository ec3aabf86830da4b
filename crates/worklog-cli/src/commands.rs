use anyhow::Result;

use crate::cli::{Commands, UserCommands};
use crate::client::ApiClient;
use worklog_api::ServerConfig;
use worklog_core::TimeLog;

pub async fn execute(command: Commands, client: &ApiClient) -> Result<()> {
    match command {
        Commands::Users { command } => execute_user_command(command, client).await?,

        Commands::Start { user_id, task_id } => {
            let log = client.start_timer(user_id, task_id).await?;
            println!("✓ Timer started: {}", log.id);
            print_time_log(&log);
        }

        Commands::Stop { user_id, task_id } => {
            let log = client.stop_timer(user_id, task_id).await?;
            println!("✓ Timer stopped: {}", log.id);
            print_time_log(&log);
            println!("  Duration: {}", format_duration(log.duration().num_seconds()));
        }

        Commands::Worklogs { user_id, start, end } => {
            let entries = client
                .worklogs(user_id, start.as_deref(), end.as_deref())
                .await?;

            println!("Worklogs for user {} ({}):", user_id, entries.len());
            for entry in &entries {
                let state = if entry.log.is_open() { " (running)" } else { "" };
                println!(
                    "  #{:<5} task {:<6} {:>10}  started {}{}",
                    entry.log.id,
                    entry.log.task_id,
                    format_duration(entry.duration_seconds),
                    entry.log.start_time.to_rfc3339(),
                    state
                );
            }
        }

        Commands::Stats => {
            let stats = client.statistics().await?;
            println!("📊 Worklog Statistics");
            println!("  Users: {}", stats.total_users);
            println!("  Time logs: {}", stats.total_time_logs);
            println!("  Running: {}", stats.open_time_logs);
            println!("  Finished: {}", stats.closed_time_logs);
        }

        Commands::Serve { port } => {
            let mut config = ServerConfig::from_env()?;
            if let Some(port) = port {
                config.port = port;
            }
            println!("Starting API server on {}...", config.bind_address());
            worklog_api::serve(config).await?;
        }
    }

    Ok(())
}

async fn execute_user_command(command: UserCommands, client: &ApiClient) -> Result<()> {
    match command {
        UserCommands::List { passport, skip, limit } => {
            let users = client.list_users(passport.as_deref(), skip, limit).await?;
            if users.is_empty() {
                println!("No users found");
            }
            for user in users {
                println!("  {:<6} {}", user.id, user.passport_number);
            }
        }

        UserCommands::Create { passport } => {
            let user = client.create_user(passport).await?;
            println!("✓ User created: {}", user.id);
            println!("  Passport: {}", user.passport_number);
        }

        UserCommands::Update { id, passport } => {
            let user = client.update_user(id, passport).await?;
            println!("✓ User updated: {}", user.id);
            println!("  Passport: {}", user.passport_number);
        }

        UserCommands::Delete { id } => {
            let response = client.delete_user(id).await?;
            println!("✓ {}: {}", response.message, id);
        }
    }

    Ok(())
}

fn print_time_log(log: &TimeLog) {
    println!("  User: {}", log.user_id);
    println!("  Task: {}", log.task_id);
    println!("  Started: {}", log.start_time.to_rfc3339());
    if let Some(end) = log.end_time {
        println!("  Ended: {}", end.to_rfc3339());
    }
}

fn format_duration(total_seconds: i64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{}h {:02}m {:02}s", hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0h 00m 00s");
        assert_eq!(format_duration(5400), "1h 30m 00s");
        assert_eq!(format_duration(90061), "25h 01m 01s");
    }
}

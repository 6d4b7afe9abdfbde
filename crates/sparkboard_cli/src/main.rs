//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `sparkboard_core` linkage and logging bootstrap.
//! - Replay one drag gesture on the seeded board with deterministic output.

mod config;

use config::CliConfig;
use log::{info, warn};
use sparkboard_core::{seed_task_id, Dashboard, DragGesture, DragLocation, TaskStatus};

fn main() {
    let config = CliConfig::from_env();
    match config.log_dir.to_str() {
        Some(dir) => {
            if let Err(err) = sparkboard_core::init_logging(&config.log_level, dir) {
                eprintln!("logging disabled: {err}");
            }
        }
        None => eprintln!("logging disabled: log directory is not valid UTF-8"),
    }

    println!("sparkboard_core ping={}", sparkboard_core::ping());
    println!(
        "sparkboard_core version={}",
        sparkboard_core::core_version()
    );

    let mut dashboard = Dashboard::seeded();
    let gesture = DragGesture::new(
        seed_task_id(1),
        DragLocation::new(TaskStatus::Todo, 0),
        DragLocation::new(TaskStatus::InProgress, 0),
    );
    match dashboard.board_mut().drop_task(&gesture) {
        Ok(Some(change)) => {
            info!(
                "event=replay_drop module=cli status=ok task_id={}",
                change.task.id
            );
            println!("{}: {}", change.notice.title, change.notice.message);
        }
        Ok(None) => println!("drop ignored"),
        Err(err) => {
            warn!("event=replay_drop module=cli status=error");
            println!("drop failed: {err}");
        }
    }

    for line in summary_lines(&dashboard) {
        println!("{line}");
    }
}

/// Column, project and stats lines printed after the replayed drop.
fn summary_lines(dashboard: &Dashboard) -> Vec<String> {
    let mut lines = Vec::new();
    for column in dashboard.board().columns() {
        lines.push(format!("{} ({})", column.label, column.count()));
        for task in column.tasks {
            let priority = task.priority.as_str();
            lines.push(format!("  - {} [{priority}]", task.title));
        }
    }
    for project in dashboard.projects().list() {
        lines.push(format!(
            "project {} [{}] {}%",
            project.title,
            project.status.label(),
            project.progress
        ));
    }
    let stats = dashboard.stats();
    lines.push(format!(
        "active_projects={} team_members={} completed_tasks={} in_progress_tasks={}",
        stats.active_projects, stats.team_members, stats.completed_tasks, stats.in_progress_tasks
    ));
    lines
}

//! Session seed data for the board.

use crate::board::store::TaskBoard;
use crate::model::task::{Priority, Task, TaskStatus};
use uuid::Uuid;

struct SeedTask {
    id: u128,
    title: &'static str,
    description: &'static str,
    assignee: &'static str,
    priority: Priority,
    due_date: &'static str,
    status: TaskStatus,
}

const SEED_TASKS: &[SeedTask] = &[
    SeedTask {
        id: 1,
        title: "Design Landing Page",
        description: "Create wireframes and mockups for the new landing page",
        assignee: "Sarah Chen",
        priority: Priority::High,
        due_date: "2024-01-15",
        status: TaskStatus::Todo,
    },
    SeedTask {
        id: 2,
        title: "Setup Analytics",
        description: "Implement Google Analytics and conversion tracking",
        assignee: "Mike Johnson",
        priority: Priority::Medium,
        due_date: "2024-01-18",
        status: TaskStatus::Todo,
    },
    SeedTask {
        id: 3,
        title: "Mobile App Development",
        description: "Build React Native mobile application",
        assignee: "Alex Rivera",
        priority: Priority::High,
        due_date: "2024-01-20",
        status: TaskStatus::InProgress,
    },
    SeedTask {
        id: 4,
        title: "Brand Guidelines",
        description: "Complete brand identity and style guide",
        assignee: "Emma Davis",
        priority: Priority::Medium,
        due_date: "2024-01-10",
        status: TaskStatus::Done,
    },
];

/// Fixed id of the `n`th seed task (1-based), stable across sessions.
pub fn seed_task_id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

impl TaskBoard {
    /// Board with the session's starting tasks.
    pub fn seeded() -> Self {
        let mut board = Self::new();
        for seed in SEED_TASKS {
            board.insert_existing(Task {
                id: seed_task_id(seed.id),
                title: seed.title.to_string(),
                description: seed.description.to_string(),
                assignee: seed.assignee.to_string(),
                priority: seed.priority,
                due_date: seed.due_date.to_string(),
                status: seed.status,
            });
        }
        board
    }
}

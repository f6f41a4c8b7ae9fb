use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use taskflow_core::{
    CategoryRepository, CategorySelector, FileTaskRepository, MemoryCategoryRepository,
    MemoryTaskRepository, NewTask, Priority, PriorityFilter, SortKey, StatusFilter, Task,
    TaskFilter, TaskQuery, TaskRepository, TaskService,
};

#[derive(Parser)]
#[command(name = "taskflow")]
#[command(about = "Task management from the terminal", long_about = None)]
struct Cli {
    /// Use a seeded in-memory demo store instead of the on-disk store
    #[arg(long, global = true)]
    demo: bool,

    /// Override the data directory (default: ~/.taskflow)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        /// Task title (multiple words allowed)
        #[arg(required = true)]
        title: Vec<String>,
        /// Longer description
        #[arg(long, short = 'D', default_value = "")]
        description: String,
        /// low, medium or high (default: medium)
        #[arg(long, short)]
        priority: Option<String>,
        /// Due date, YYYY-MM-DD
        #[arg(long)]
        due: Option<String>,
        /// Category id (default: personal)
        #[arg(long, short)]
        category: Option<String>,
    },
    /// List tasks, active first
    List {
        /// Category id, including the virtual all/today/upcoming views
        #[arg(long, short, default_value = "all")]
        category: String,
        /// all, active or completed
        #[arg(long, short, default_value = "all")]
        status: String,
        /// all, low, medium or high
        #[arg(long, short, default_value = "all")]
        priority: String,
        /// created, dueDate, priority or title
        #[arg(long, default_value = "created")]
        sort: String,
        /// Substring search over title and description
        #[arg(long, short = 'q')]
        search: Option<String>,
    },
    /// Mark a task completed
    Done { id: u64 },
    /// Mark a completed task active again
    Reopen { id: u64 },
    /// Flip a task's completion state
    Toggle { id: u64 },
    /// Delete a task
    Delete { id: u64 },
    /// Delete every completed task
    ClearCompleted,
    /// Show categories with their active-task counts
    Categories,
    /// Show active tasks that are past their due date
    Overdue,
}

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = " ")]
    done: &'static str,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Priority")]
    priority: &'static str,
    #[tabled(rename = "Due")]
    due: String,
    #[tabled(rename = "Category")]
    category: String,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            done: if task.completed { "x" } else { " " },
            title: task.title.clone(),
            priority: match task.priority {
                Priority::High => "high",
                Priority::Medium => "medium",
                Priority::Low => "low",
            },
            due: task
                .due_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string()),
            category: task.category_id.clone(),
        }
    }
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Active")]
    active: usize,
}

fn parse_priority(s: &str) -> Priority {
    match s.to_lowercase().as_str() {
        "h" | "high" => Priority::High,
        "l" | "low" => Priority::Low,
        _ => Priority::Medium,
    }
}

fn parse_due(s: &str) -> Result<NaiveDate> {
    s.parse::<NaiveDate>()
        .with_context(|| format!("invalid due date '{s}', expected YYYY-MM-DD"))
}

fn print_tasks(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }
    let rows: Vec<TaskRow> = tasks.iter().map(TaskRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::psql());
    println!("{table}");
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let today = Local::now().date_naive();
    let categories = MemoryCategoryRepository::new();

    if cli.demo {
        let service = TaskService::new(MemoryTaskRepository::seeded(today));
        run(&service, &categories, cli.command, today)
    } else {
        let service = TaskService::new(FileTaskRepository::new(cli.data_dir)?);
        run(&service, &categories, cli.command, today)
    }
}

fn run<R: TaskRepository>(
    service: &TaskService<R>,
    categories: &MemoryCategoryRepository,
    command: Commands,
    today: NaiveDate,
) -> Result<()> {
    match command {
        Commands::Add {
            title,
            description,
            priority,
            due,
            category,
        } => {
            let draft = NewTask {
                title: title.join(" "),
                description,
                priority: priority.as_deref().map(parse_priority).unwrap_or_default(),
                due_date: due.as_deref().map(parse_due).transpose()?,
                category_id: category,
            };
            let task = service.create_task(draft)?;
            println!("Task added: {} (ID: {})", task.title, task.id);
            if let Some(d) = task.due_date {
                println!("  Due: {d}");
            }
            println!("  Category: {}", task.category_id);
        }
        Commands::List {
            category,
            status,
            priority,
            sort,
            search,
        } => {
            let query = TaskQuery {
                search,
                filter: TaskFilter {
                    status: StatusFilter::parse(&status),
                    priority: PriorityFilter::parse(&priority),
                    category: CategorySelector::parse(&category),
                },
                sort: SortKey::parse(&sort),
            };
            print_tasks(&service.query(&query, today)?);
        }
        Commands::Done { id } => {
            let task = service.set_completed(id, true, Utc::now())?;
            println!("Completed: {}", task.title);
        }
        Commands::Reopen { id } => {
            let task = service.set_completed(id, false, Utc::now())?;
            println!("Reopened: {}", task.title);
        }
        Commands::Toggle { id } => {
            let task = service.toggle_completed(id, Utc::now())?;
            let state = if task.completed { "completed" } else { "active" };
            println!("{}: {state}", task.title);
        }
        Commands::Delete { id } => {
            service.delete_task(id)?;
            println!("Task {id} deleted.");
        }
        Commands::ClearCompleted => {
            let deleted = service.clear_completed()?;
            println!("{deleted} completed tasks deleted.");
        }
        Commands::Categories => {
            let all = categories.list()?;
            let counts = service.category_counts(&all, today)?;
            let rows: Vec<CategoryRow> = all
                .iter()
                .map(|c| CategoryRow {
                    id: c.id.clone(),
                    name: c.name.clone(),
                    active: counts.get(&c.id).copied().unwrap_or(0),
                })
                .collect();
            let mut table = Table::new(rows);
            table.with(Style::psql());
            println!("{table}");
        }
        Commands::Overdue => {
            print_tasks(&service.overdue_tasks(today)?);
        }
    }
    Ok(())
}

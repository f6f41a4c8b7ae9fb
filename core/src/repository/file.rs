use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use chrono::Utc;

use crate::error::Error;
use crate::model::{NewTask, Task};
use crate::repository::next_id;
use crate::repository::traits::TaskRepository;

const DEFAULT_FILE_NAME: &str = "tasks.json";

/// JSON-file-backed task store, the offline counterpart of the remote
/// record store. The whole collection is read and rewritten per
/// operation; fine at to-do-list scale.
#[derive(Clone)]
pub struct FileTaskRepository {
    file_path: PathBuf,
}

impl FileTaskRepository {
    /// Opens (and if needed initializes) the store under `base_dir`,
    /// defaulting to `~/.taskflow`.
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(".taskflow")
            }
        };
        fs::create_dir_all(&path)?;
        path.push(DEFAULT_FILE_NAME);

        if !path.exists() {
            log::info!("initializing empty task store at {}", path.display());
            let mut writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(&mut writer, &Vec::<Task>::new())?;
            writer.flush()?;
        }

        Ok(FileTaskRepository { file_path: path })
    }

    fn read_tasks(&self) -> Result<Vec<Task>> {
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let tasks = serde_json::from_reader(reader)?;
        Ok(tasks)
    }

    fn write_tasks(&self, tasks: &[Task]) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, tasks)?;
        writer.flush()?;
        Ok(())
    }
}

impl TaskRepository for FileTaskRepository {
    fn create(&self, draft: NewTask) -> Result<Task> {
        let mut tasks = self.read_tasks()?;
        let task = draft.into_task(next_id(&tasks), Utc::now());
        tasks.push(task.clone());
        self.write_tasks(&tasks)?;
        Ok(task)
    }

    fn list(&self) -> Result<Vec<Task>> {
        self.read_tasks()
    }

    fn get(&self, id: u64) -> Result<Task> {
        let tasks = self.read_tasks()?;
        tasks
            .into_iter()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::NotFound(id).into())
    }

    fn update(&self, task: &Task) -> Result<()> {
        let mut tasks = self.read_tasks()?;
        if let Some(pos) = tasks.iter().position(|t| t.id == task.id) {
            tasks[pos] = task.clone();
            self.write_tasks(&tasks)?;
            Ok(())
        } else {
            Err(Error::NotFound(task.id).into())
        }
    }

    fn delete(&self, id: u64) -> Result<()> {
        let mut tasks = self.read_tasks()?;
        let initial_len = tasks.len();
        tasks.retain(|t| t.id != id);

        if tasks.len() == initial_len {
            return Err(Error::NotFound(id).into());
        }

        self.write_tasks(&tasks)?;
        Ok(())
    }

    fn delete_completed(&self) -> Result<usize> {
        let mut tasks = self.read_tasks()?;
        let initial_len = tasks.len();
        tasks.retain(|t| !t.completed);
        let deleted = initial_len - tasks.len();

        if deleted > 0 {
            log::info!("deleting {deleted} completed tasks");
            self.write_tasks(&tasks)?;
        }
        Ok(deleted)
    }
}

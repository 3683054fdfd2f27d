use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// TodoTask entity - a todo list item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoTask {
    /// Unique identifier (store-assigned)
    pub id: i32,
    /// Task title
    pub title: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Soft-delete flag; deleted rows are hidden from every read path
    pub is_deleted: bool,
}

/// TodoSubtask entity - a checklist entry belonging to a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoSubtask {
    pub id: i32,
    pub name: String,
    pub is_checked: bool,
    pub is_deleted: bool,
    pub todo_task_id: i32,
}

/// A live task together with its live subtasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoTaskWithSubtasks {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub subtasks: Vec<TodoSubtask>,
}

/// Wire representation of a task (soft-delete flag is never exposed)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoTaskDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
}

/// Wire representation of a subtask
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoSubtaskDto {
    pub id: i32,
    pub name: String,
    pub is_checked: bool,
    pub todo_task_id: i32,
}

/// DTO for creating a new task
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoTask {
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    #[validate(length(max = 255))]
    pub description: Option<String>,
}

/// DTO for updating an existing task (id travels in the body)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoTask {
    pub id: i32,
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    #[validate(length(max = 255))]
    pub description: Option<String>,
}

/// DTO for creating a new subtask
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoSubtask {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub todo_task_id: i32,
}

/// DTO for renaming an existing subtask
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoSubtask {
    pub id: i32,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

impl TodoTask {
    /// Apply updates from UpdateTodoTask DTO
    pub fn apply_update(&mut self, update: UpdateTodoTask) {
        self.title = update.title;
        self.description = update.description;
    }
}

impl TodoSubtask {
    /// Apply updates from UpdateTodoSubtask DTO
    pub fn apply_update(&mut self, update: UpdateTodoSubtask) {
        self.name = update.name;
    }

    /// Flip the checked flag and return the new value
    pub fn toggle_checked(&mut self) -> bool {
        self.is_checked = !self.is_checked;
        self.is_checked
    }
}

impl From<TodoTask> for TodoTaskDto {
    fn from(task: TodoTask) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
        }
    }
}

impl From<TodoSubtask> for TodoSubtaskDto {
    fn from(subtask: TodoSubtask) -> Self {
        Self {
            id: subtask.id,
            name: subtask.name,
            is_checked: subtask.is_checked,
            todo_task_id: subtask.todo_task_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_checked_returns_new_value() {
        let mut subtask = TodoSubtask {
            id: 1,
            name: "Milk".to_string(),
            is_checked: false,
            is_deleted: false,
            todo_task_id: 1,
        };

        assert!(subtask.toggle_checked());
        assert!(subtask.is_checked);
        assert!(!subtask.toggle_checked());
        assert!(!subtask.is_checked);
    }

    #[test]
    fn test_task_dto_hides_soft_delete_flag() {
        let task = TodoTask {
            id: 7,
            title: "Groceries".to_string(),
            description: None,
            is_deleted: false,
        };

        let json = serde_json::to_value(TodoTaskDto::from(task)).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["title"], "Groceries");
        assert!(json.get("isDeleted").is_none());
    }

    #[test]
    fn test_subtask_dto_uses_camel_case() {
        let subtask = TodoSubtask {
            id: 3,
            name: "Milk".to_string(),
            is_checked: true,
            is_deleted: false,
            todo_task_id: 9,
        };

        let json = serde_json::to_value(TodoSubtaskDto::from(subtask)).unwrap();
        assert_eq!(json["isChecked"], true);
        assert_eq!(json["todoTaskId"], 9);
    }

    #[test]
    fn test_create_task_validation_bounds() {
        use validator::Validate;

        let empty = CreateTodoTask {
            title: String::new(),
            description: None,
        };
        assert!(empty.validate().is_err());

        let too_long = CreateTodoTask {
            title: "x".repeat(101),
            description: None,
        };
        assert!(too_long.validate().is_err());

        let ok = CreateTodoTask {
            title: "Groceries".to_string(),
            description: Some("weekly run".to_string()),
        };
        assert!(ok.validate().is_ok());
    }
}

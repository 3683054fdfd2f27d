//! Sea-ORM entities for the todo tables.
//!
//! Both tables carry an `is_deleted` flag; `find_live()` is the shared
//! soft-delete filter every read path goes through.

pub mod todo_task {
    use sea_orm::ActiveValue::{NotSet, Set};
    use sea_orm::QueryFilter;
    use sea_orm::entity::prelude::*;

    /// Sea-ORM Entity for the todo_tasks table
    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "todo_tasks")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub title: String,
        pub description: Option<String>,
        pub is_deleted: bool,
    }

    impl Model {
        pub const TAG: &'static str = "todotask";
        pub const URL: &'static str = "/todotask";
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::todo_subtask::Entity")]
        TodoSubtask,
    }

    impl Related<super::todo_subtask::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::TodoSubtask.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}

    /// Select only rows that have not been soft deleted
    pub fn find_live() -> Select<Entity> {
        Entity::find().filter(Column::IsDeleted.eq(false))
    }

    impl From<Model> for crate::models::TodoTask {
        fn from(model: Model) -> Self {
            Self {
                id: model.id,
                title: model.title,
                description: model.description,
                is_deleted: model.is_deleted,
            }
        }
    }

    impl From<crate::models::CreateTodoTask> for ActiveModel {
        fn from(input: crate::models::CreateTodoTask) -> Self {
            ActiveModel {
                id: NotSet,
                title: Set(input.title),
                description: Set(input.description),
                is_deleted: Set(false),
            }
        }
    }

    impl From<crate::models::TodoTask> for ActiveModel {
        fn from(task: crate::models::TodoTask) -> Self {
            ActiveModel {
                id: Set(task.id),
                title: Set(task.title),
                description: Set(task.description),
                is_deleted: Set(task.is_deleted),
            }
        }
    }
}

pub mod todo_subtask {
    use sea_orm::ActiveValue::{NotSet, Set};
    use sea_orm::QueryFilter;
    use sea_orm::entity::prelude::*;

    /// Sea-ORM Entity for the todo_subtasks table
    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "todo_subtasks")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub name: String,
        pub is_checked: bool,
        pub is_deleted: bool,
        pub todo_task_id: i32,
    }

    impl Model {
        pub const TAG: &'static str = "todosubtask";
        pub const URL: &'static str = "/todosubtask";
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::todo_task::Entity",
            from = "Column::TodoTaskId",
            to = "super::todo_task::Column::Id"
        )]
        TodoTask,
    }

    impl Related<super::todo_task::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::TodoTask.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}

    /// Select only rows that have not been soft deleted
    pub fn find_live() -> Select<Entity> {
        Entity::find().filter(Column::IsDeleted.eq(false))
    }

    impl From<Model> for crate::models::TodoSubtask {
        fn from(model: Model) -> Self {
            Self {
                id: model.id,
                name: model.name,
                is_checked: model.is_checked,
                is_deleted: model.is_deleted,
                todo_task_id: model.todo_task_id,
            }
        }
    }

    impl From<crate::models::CreateTodoSubtask> for ActiveModel {
        fn from(input: crate::models::CreateTodoSubtask) -> Self {
            ActiveModel {
                id: NotSet,
                name: Set(input.name),
                is_checked: Set(false),
                is_deleted: Set(false),
                todo_task_id: Set(input.todo_task_id),
            }
        }
    }

    impl From<crate::models::TodoSubtask> for ActiveModel {
        fn from(subtask: crate::models::TodoSubtask) -> Self {
            ActiveModel {
                id: Set(subtask.id),
                name: Set(subtask.name),
                is_checked: Set(subtask.is_checked),
                is_deleted: Set(subtask.is_deleted),
                todo_task_id: Set(subtask.todo_task_id),
            }
        }
    }
}

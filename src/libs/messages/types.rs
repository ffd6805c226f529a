#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(String),           // title
    TaskAlreadyExists(String),   // title
    TaskNotFoundWithId(i64),     // task id
    TaskDeleted(String),         // title
    TaskUpdated(String),         // title
    TaskMarkedComplete(String),  // title
    TaskAlreadyComplete(String), // title
    TasksHeader,
    TasksCompletedHeader,
    TasksIncompleteHeader,
    TasksNotFound,
    TasksSummaryHeader,
    SummaryTotal,
    SummaryCompleted,
    SummaryIncomplete,

    // === MENU MESSAGES ===
    MenuTitle,
    MenuShowAll,
    MenuShowCompleted,
    MenuShowIncomplete,
    MenuAddTask,
    MenuDeleteTask,
    MenuUpdateTask,
    MenuMarkComplete,
    MenuExit,
    Goodbye,

    // === PROMPTS ===
    PromptTaskId,
    PromptTaskTitle,
    PromptTaskDueDate,
    PromptTaskNote,
    PromptTaskComplete,

    // === VALIDATION MESSAGES ===
    InvalidTaskId,
    InvalidDateTime,
    EmptyTitle,

    // === DATABASE MESSAGES ===
    DatabaseConnected(String),        // path
    DatabaseConnectionFailed(String), // error
    DatabaseClosed,
    DatabaseCloseFailed(String),  // error
    StoreOperationFailed(String), // error

    // === CONFIGURATION MESSAGES ===
    ConfigParseError(String),  // error
    ConfigEnvOverride(String), // variable name
}

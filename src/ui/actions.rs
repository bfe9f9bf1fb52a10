use crate::export::ExportFormat;

/// What the keyboard is currently driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
    ConfirmDelete,
    Help,
    Logs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,

    // Navigation
    NextRow,
    PreviousRow,
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,
    NextDomain,
    PreviousDomain,

    // Search and filters
    StartSearch,
    SearchInput(char),
    SearchBackspace,
    SubmitSearch,
    CancelSearch,
    CycleFilter,
    NextFilterSlot,
    ClearFilters,

    // Selection
    ToggleSelect,
    SelectPage,

    // Record operations
    ToggleField,
    RequestDelete,
    ConfirmDelete,
    CancelDelete,
    Duplicate,
    Export(ExportFormat),
    Reload,

    // Overlays
    DismissNotification,
    ToggleHelp,
    ToggleLogs,
    ScrollUp,
    ScrollDown,
}

use std::fmt;

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    List,
    ChangeDirectory,
    CreateFile,
    CreateDirectory,
    CopyFile,
    MoveFile,
    DeleteFile,
    DeleteDirectory,
    Search,
    ViewPermissions,
    ChangePermissions,
    ViewDetails,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 13] = [
        MenuAction::List,
        MenuAction::ChangeDirectory,
        MenuAction::CreateFile,
        MenuAction::CreateDirectory,
        MenuAction::CopyFile,
        MenuAction::MoveFile,
        MenuAction::DeleteFile,
        MenuAction::DeleteDirectory,
        MenuAction::Search,
        MenuAction::ViewPermissions,
        MenuAction::ChangePermissions,
        MenuAction::ViewDetails,
        MenuAction::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::List => "List Files and Directories",
            MenuAction::ChangeDirectory => "Change Directory",
            MenuAction::CreateFile => "Create New File",
            MenuAction::CreateDirectory => "Create New Directory",
            MenuAction::CopyFile => "Copy File",
            MenuAction::MoveFile => "Move File",
            MenuAction::DeleteFile => "Delete File",
            MenuAction::DeleteDirectory => "Delete Directory",
            MenuAction::Search => "Search Files",
            MenuAction::ViewPermissions => "View File Permissions",
            MenuAction::ChangePermissions => "Change File Permissions",
            MenuAction::ViewDetails => "View File Details",
            MenuAction::Exit => "Exit",
        }
    }

    /// Labels for a selection widget, in `ALL` order.
    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|a| a.label()).collect()
    }

    pub fn from_index(i: usize) -> Option<MenuAction> {
        Self::ALL.get(i).copied()
    }

    pub fn is_destructive(self) -> bool {
        matches!(self, MenuAction::DeleteFile | MenuAction::DeleteDirectory)
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//! Commands returned by `update` for the host to execute

/// Side effects requested by an update
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Re-derive pane sizes and re-render
    Redraw,
    /// Set presentation variables on the root element
    ApplyTheme { variables: Vec<(String, String)> },
    /// Show a message to the user
    ShowMessage(String),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::ApplyTheme { .. } => true,
            Cmd::ShowMessage(_) => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Message carried by this command or any batched command
    pub fn message(&self) -> Option<&str> {
        match self {
            Cmd::ShowMessage(message) => Some(message),
            Cmd::Batch(cmds) => cmds.iter().find_map(|c| c.message()),
            _ => None,
        }
    }

    /// Theme variables carried by this command or any batched command
    pub fn theme_variables(&self) -> Option<&[(String, String)]> {
        match self {
            Cmd::ApplyTheme { variables } => Some(variables),
            Cmd::Batch(cmds) => cmds.iter().find_map(|c| c.theme_variables()),
            _ => None,
        }
    }
}

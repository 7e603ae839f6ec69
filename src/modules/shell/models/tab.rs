use std::fmt;

/// The three mutually exclusive views of the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Input,
    List,
}

impl Tab {
    /// Navigation order
    pub const ALL: [Tab; 3] = [Tab::Dashboard, Tab::Input, Tab::List];

    /// Label in the navigation bar
    pub fn nav_label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Input => "Tax Input",
            Tab::List => "Transactions",
        }
    }

    /// Heading of the view
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Tax Summary",
            Tab::Input => "New Transaction",
            Tab::List => "Transaction List",
        }
    }

    /// Name typed in the `tab` command
    pub fn command_name(&self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Input => "input",
            Tab::List => "list",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command_name())
    }
}

impl std::str::FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dashboard" | "summary" => Ok(Tab::Dashboard),
            "input" | "new" | "form" => Ok(Tab::Input),
            "list" | "transactions" => Ok(Tab::List),
            _ => Err(format!("Unknown tab: {}", s)),
        }
    }
}

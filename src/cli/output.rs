//! Colored output helpers for CLI
//!
//! Provides consistent, colored terminal output for the HireAI CLI.

use chrono::NaiveDate;
use owo_colors::OwoColorize;
use serde::Serialize;

/// Output style configuration
pub struct Output {
    /// Whether to use colored output
    pub colored: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper with colors enabled
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Create a new output helper with colors disabled
    pub fn no_color() -> Self {
        Self { colored: false }
    }

    /// Print the HireAI banner
    pub fn banner(&self) {
        if self.colored {
            println!(
                "\n   {} {}\n",
                "HireAI".bright_cyan().bold(),
                format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
            );
        } else {
            println!("\n   HireAI v{}\n", env!("CARGO_PKG_VERSION"));
        }
    }

    /// Print a success message with a checkmark
    pub fn success(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "✓".green().bold(), message.green());
        } else {
            println!("  [OK] {}", message);
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "•".blue(), message);
        } else {
            println!("  [INFO] {}", message);
        }
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "⚠".yellow().bold(), message.yellow());
        } else {
            println!("  [WARN] {}", message);
        }
    }

    /// Print a header for a section
    pub fn header(&self, title: &str) {
        if self.colored {
            println!("\n  {}", title.bright_white().bold().underline());
        } else {
            println!("\n  === {} ===", title);
        }
    }

    /// Print a subheader
    pub fn subheader(&self, title: &str) {
        if self.colored {
            println!("\n  {}", title.cyan().bold());
        } else {
            println!("\n  --- {} ---", title);
        }
    }

    /// Print a key-value pair
    pub fn kv(&self, key: &str, value: &str) {
        if self.colored {
            println!("    {}: {}", key.dimmed(), value.bright_white());
        } else {
            println!("    {}: {}", key, value);
        }
    }

    /// Print a list item
    pub fn list_item(&self, item: &str) {
        if self.colored {
            println!("    {} {}", "•".blue(), item);
        } else {
            println!("    - {}", item);
        }
    }

    /// Print a hint/tip message
    pub fn hint(&self, message: &str) {
        if self.colored {
            println!("\n  {} {}", "💡".dimmed(), message.dimmed().italic());
        } else {
            println!("\n  [TIP] {}", message);
        }
    }

    /// Print a command suggestion
    pub fn command(&self, cmd: &str) {
        if self.colored {
            println!("     {}", format!("$ {}", cmd).bright_cyan());
        } else {
            println!("     $ {}", cmd);
        }
    }

    /// Print a row of filter chips; the active one is highlighted
    pub fn chips(&self, chips: &[(String, bool)]) {
        let rendered: Vec<String> = chips
            .iter()
            .map(|(label, active)| match (self.colored, active) {
                (true, true) => format!("[{}]", label).bright_cyan().bold().to_string(),
                (true, false) => label.dimmed().to_string(),
                (false, true) => format!("[{}]", label),
                (false, false) => label.clone(),
            })
            .collect();
        println!("    {}", rendered.join("  "));
    }

    /// Print a table header row
    pub fn table_header(&self, columns: &[&str]) {
        let header = pad_row(columns);
        if self.colored {
            println!("    {}", header.bright_white().bold());
            println!("    {}", "─".repeat(columns.len() * COLUMN_WIDTH).dimmed());
        } else {
            println!("    {}", header);
            println!("    {}", "-".repeat(columns.len() * COLUMN_WIDTH));
        }
    }

    /// Print a table row
    pub fn table_row(&self, values: &[&str]) {
        println!("    {}", pad_row(values));
    }

    /// Print a value as pretty JSON
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> serde_json::Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    /// Print newline
    pub fn newline(&self) {
        println!();
    }
}

const COLUMN_WIDTH: usize = 22;

fn pad_row(values: &[&str]) -> String {
    values
        .iter()
        .map(|v| format!("{:<width$}", v, width = COLUMN_WIDTH - 1))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Human label for how long ago `date` was, e.g. "3 days ago".
pub fn relative_age(date: NaiveDate, today: NaiveDate) -> String {
    let days = (today - date).num_days();
    match days {
        i64::MIN..=-1 => "Upcoming".to_string(),
        0 => "Today".to_string(),
        1 => "1 day ago".to_string(),
        2..=6 => format!("{} days ago", days),
        7..=13 => "1 week ago".to_string(),
        14..=29 => format!("{} weeks ago", days / 7),
        30..=59 => "1 month ago".to_string(),
        _ => format!("{} months ago", days / 30),
    }
}

/// Star rating as filled and empty stars.
pub fn stars(rating: u8, max: u8) -> String {
    let filled = rating.min(max) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(max as usize - filled))
}

use std::fmt::Display;

use console::{Style, style};

/// # `MessageType`
/// Trait for the kinds of message the CLI prints.
trait MessageType {
    /// The emoji prefix for each message type (e.g., "🚨 ERROR")
    const PREFIX: &'static str;

    /// Whether to output to stderr (true) or stdout (false)
    const TO_STDERR: bool = false;

    fn style() -> Style;
}

struct Error;
struct Warning;
struct Success;
struct Info;

impl MessageType for Error {
    const PREFIX: &'static str = "🚨 ERROR";
    const TO_STDERR: bool = true;

    fn style() -> Style {
        Style::new().red().bold()
    }
}

impl MessageType for Warning {
    const PREFIX: &'static str = "⚠️ WARNING";

    fn style() -> Style {
        Style::new().yellow().bold()
    }
}

impl MessageType for Success {
    const PREFIX: &'static str = "✅ SUCCESS";

    fn style() -> Style {
        Style::new().green().bold()
    }
}

impl MessageType for Info {
    const PREFIX: &'static str = "ℹ️ INFO";

    fn style() -> Style {
        Style::new().cyan().bold()
    }
}

/// # `format_message`
/// Formats a message without suggestion.
///
/// ## Arguments
/// * `title` - The title of the message.
/// * `details` - The details of the message.
///
/// ## Returns
/// * String - The formatted message.
fn format_message<T: MessageType>(title: &str, details: &str) -> String {
    let prefix = T::style().apply_to(T::PREFIX);

    if details.is_empty() {
        format!("{prefix}: {title}")
    } else {
        format!("{prefix}: {title}\n\n{details}")
    }
}

fn emit<T: MessageType>(message: &str) {
    if T::TO_STDERR {
        eprintln!("{message}");
    } else {
        println!("{message}");
    }
}

/// # `print_error`
/// Prints an error message with a consistent format for user-friendly display.
///
/// ## Arguments
/// - `title`: The title of the error message.
/// - `details`: The details of the error message.
/// - `suggestion`: The suggestion for resolving the error.
pub fn print_error(title: &str, details: &str, suggestion: &str) {
    let message = format_message::<Error>(title, details);
    emit::<Error>(&format!("{message}\n\n{}", style(suggestion).dim()));
}

/// # `print_warning`
/// Prints a warning message with a consistent format for user-friendly display.
pub fn print_warning(title: &str, details: &str) {
    emit::<Warning>(&format_message::<Warning>(title, details));
}

/// # `print_success`
/// Prints a success message with a consistent format for user-friendly display.
pub fn print_success(title: &str, details: &str) {
    emit::<Success>(&format_message::<Success>(title, details));
}

/// # `print_info`
/// Prints an informational message with a consistent format for user-friendly display.
pub fn print_info(title: &str, details: &str) {
    emit::<Info>(&format_message::<Info>(title, details));
}

/// # `format_list`
/// Formats a list of items with a consistent format for user-friendly display.
///
/// ## Arguments
/// - `items`: The list of items to format.
///
/// ## Returns
/// * String - A formatted string representation of the list.
pub fn format_list<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| format!("  - {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

use colored::{ColoredString, Colorize};
use docdeck::model::Method;

/// Method badge colors follow the usual REST palette: GET green, POST
/// blue, everything else plain bold.
pub fn method_badge(method: Method) -> ColoredString {
    let label = method.to_string();
    match method {
        Method::Get => label.green().bold(),
        Method::Post => label.blue().bold(),
        _ => label.bold(),
    }
}

pub fn required_flag(required: bool) -> ColoredString {
    if required {
        "required".red()
    } else {
        "optional".dimmed()
    }
}

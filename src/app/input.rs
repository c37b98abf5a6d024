//! Typed command-line parsing.
//!
//! Maps one line of terminal input to application events, the way a key map
//! would for a full-screen UI. Plain text is treated as ingredient input:
//! commas and the end of the line both confirm an entry.
//!
//! | Input                               | Event(s)                      |
//! |-------------------------------------|-------------------------------|
//! | free text, comma separated          | one `AddIngredient` per piece |
//! | `/add <text>`                       | same as free text             |
//! | `/rm <n>` or `/remove <n>`          | `RemoveIngredient(n - 1)`     |
//! | `/meal <salad\|main\|appetizer>`    | `SetMealType`                 |
//! | `/go`, `/generate`, `/regenerate`   | `Generate`                    |
//! | `/reset`, `/back`                   | `Reset`                       |
//! | `/quit`, `/exit`                    | `Quit`                        |

use super::Event;
use crate::domain::MealType;

/// Result of parsing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Events to feed to the handler, in order.
    Events(Vec<Event>),

    /// Nothing to do (blank line or only delimiters).
    Empty,

    /// The line could not be understood; carries a hint for the user.
    Unknown(String),
}

/// Parses one line of user input.
///
/// # Example
///
/// ```rust
/// use fridgechef::app::{parse_line, Event, Input};
///
/// assert_eq!(
///     parse_line("Eggs, spinach"),
///     Input::Events(vec![
///         Event::AddIngredient("Eggs".to_string()),
///         Event::AddIngredient("spinach".to_string()),
///     ])
/// );
/// assert_eq!(parse_line("/rm 2"), Input::Events(vec![Event::RemoveIngredient(1)]));
/// ```
#[must_use]
pub fn parse_line(line: &str) -> Input {
    let line = line.trim();

    let Some(command_line) = line.strip_prefix('/') else {
        return ingredients(line);
    };

    let (command, argument) = command_line
        .split_once(char::is_whitespace)
        .map_or((command_line, ""), |(command, rest)| (command, rest.trim()));

    match command.to_lowercase().as_str() {
        "add" => ingredients(argument),
        "rm" | "remove" => parse_remove(argument),
        "meal" => match argument.parse::<MealType>() {
            Ok(meal_type) => Input::Events(vec![Event::SetMealType(meal_type)]),
            Err(_) => Input::Unknown(format!(
                "Unknown meal type '{argument}'. Choose salad, main or appetizer."
            )),
        },
        "go" | "generate" | "regenerate" => Input::Events(vec![Event::Generate]),
        "reset" | "back" => Input::Events(vec![Event::Reset]),
        "quit" | "exit" => Input::Events(vec![Event::Quit]),
        _ => Input::Unknown(format!("Unknown command '/{command}'.")),
    }
}

fn ingredients(text: &str) -> Input {
    let events: Vec<Event> = text
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(|piece| Event::AddIngredient(piece.to_string()))
        .collect();

    if events.is_empty() {
        Input::Empty
    } else {
        Input::Events(events)
    }
}

fn parse_remove(argument: &str) -> Input {
    match argument.parse::<usize>() {
        Ok(position) if position >= 1 => Input::Events(vec![Event::RemoveIngredient(position - 1)]),
        _ => Input::Unknown(format!(
            "'/rm' needs an ingredient number from the list, got '{argument}'."
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_delimiter_only_lines_are_empty() {
        assert_eq!(parse_line(""), Input::Empty);
        assert_eq!(parse_line("  ,, , "), Input::Empty);
        assert_eq!(parse_line("/add"), Input::Empty);
    }

    #[test]
    fn add_command_matches_free_text() {
        assert_eq!(parse_line("/add tomato, basil"), parse_line("tomato,basil"));
    }

    #[test]
    fn meal_aliases() {
        assert_eq!(
            parse_line("/meal Main Meal"),
            Input::Events(vec![Event::SetMealType(MealType::MainMeal)])
        );
        assert_eq!(
            parse_line("/MEAL salad"),
            Input::Events(vec![Event::SetMealType(MealType::Salad)])
        );
        assert!(matches!(parse_line("/meal dessert"), Input::Unknown(_)));
    }

    #[test]
    fn remove_is_one_based() {
        assert_eq!(parse_line("/remove 1"), Input::Events(vec![Event::RemoveIngredient(0)]));
        assert!(matches!(parse_line("/rm 0"), Input::Unknown(_)));
        assert!(matches!(parse_line("/rm two"), Input::Unknown(_)));
    }

    #[test]
    fn request_commands() {
        for line in ["/go", "/generate", "/regenerate"] {
            assert_eq!(parse_line(line), Input::Events(vec![Event::Generate]));
        }
        for line in ["/reset", "/back"] {
            assert_eq!(parse_line(line), Input::Events(vec![Event::Reset]));
        }
        for line in ["/quit", "/exit"] {
            assert_eq!(parse_line(line), Input::Events(vec![Event::Quit]));
        }
        assert_eq!(parse_line("/dance"), Input::Unknown("Unknown command '/dance'.".to_string()));
    }
}

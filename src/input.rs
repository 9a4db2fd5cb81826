use std::error::Error;
use std::fmt;

/// Why a typed move line was rejected before ever reaching the board.
/// Range violations are not decided here; the board reports those itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputError {
    Empty,
    NotANumber(String),
    NonPositive,
    WrongCount(usize),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Empty => write!(f, "type a row and a column"),
            InputError::NotANumber(token) => write!(f, "'{token}' is not a number"),
            InputError::NonPositive => write!(f, "row and column start at 1"),
            InputError::WrongCount(n) => write!(f, "expected 2 numbers, got {n}"),
        }
    }
}

impl Error for InputError {}

/// Parses a "row col" line of 1-based positive integers into the 0-based
/// pair the board consumes.
pub fn parse_move(line: &str) -> Result<(usize, usize), InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(InputError::Empty);
    }
    if tokens.len() != 2 {
        return Err(InputError::WrongCount(tokens.len()));
    }
    let row = parse_coordinate(tokens[0])?;
    let col = parse_coordinate(tokens[1])?;
    Ok((row - 1, col - 1))
}

fn parse_coordinate(token: &str) -> Result<usize, InputError> {
    let value: i64 = token
        .parse()
        .map_err(|_| InputError::NotANumber(token.to_string()))?;
    if value <= 0 {
        return Err(InputError::NonPositive);
    }
    Ok(value as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifts_one_based_input_down() {
        assert_eq!(parse_move("1 1"), Ok((0, 0)));
        assert_eq!(parse_move("3 7"), Ok((2, 6)));
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(parse_move("  4   2  "), Ok((3, 1)));
    }

    #[test]
    fn rejects_blank_lines() {
        assert_eq!(parse_move(""), Err(InputError::Empty));
        assert_eq!(parse_move("   "), Err(InputError::Empty));
    }

    #[test]
    fn rejects_wrong_arity() {
        assert_eq!(parse_move("3"), Err(InputError::WrongCount(1)));
        assert_eq!(parse_move("1 2 3"), Err(InputError::WrongCount(3)));
    }

    #[test]
    fn keeps_non_positive_distinct_from_non_numeric() {
        assert_eq!(parse_move("0 4"), Err(InputError::NonPositive));
        assert_eq!(parse_move("3 -1"), Err(InputError::NonPositive));
        assert_eq!(
            parse_move("a 4"),
            Err(InputError::NotANumber("a".to_string()))
        );
    }
}

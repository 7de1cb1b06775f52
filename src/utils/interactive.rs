use crate::utils::error::{AppError, AppResult};
use crate::utils::output::OutputStyle;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Print a prompt and read one trimmed line.
/// End of input is reported as `AppError::Input`.
pub fn prompt_input<R: BufRead>(reader: &mut R, prompt: &str) -> AppResult<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Err(AppError::Input);
    }

    Ok(input.trim().to_string())
}

/// Keep asking until the answer parses as `T`
pub fn prompt_parse<R: BufRead, T: FromStr>(reader: &mut R, prompt: &str) -> AppResult<T> {
    loop {
        let input = prompt_input(reader, prompt)?;
        match input.parse::<T>() {
            Ok(value) => return Ok(value),
            Err(_) => println!(
                "{}",
                OutputStyle::warning(&format!("'{}' is not a valid number, try again.", input))
            ),
        }
    }
}

/// `y`/`Y` is yes, anything else is no
pub fn prompt_yes_no<R: BufRead>(reader: &mut R, prompt: &str) -> AppResult<bool> {
    let input = prompt_input(reader, &format!("{} (y/n): ", prompt))?;
    Ok(input.eq_ignore_ascii_case("y"))
}

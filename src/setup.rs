//! Interactive prompting for the initial configuration.

use std::io::{BufRead, Write};

use crate::{Config, Glyphs, GridError, SetupError};

/// Asks whether to use custom values or the built-in map, then, for custom
/// values, the dimensions, the fill frequency and the display symbols.
pub fn prompt(mut input: impl BufRead, mut output: impl Write) -> Result<Config, SetupError> {
    writeln!(output, "Conway's Game of Life")?;
    writeln!(output, "---------------------")?;
    writeln!(output, "Set custom values or use the default map?")?;
    writeln!(output, "1: custom 2: default")?;

    loop {
        match ask(&mut input, &mut output, ">> ")?.as_str() {
            "1" => return prompt_custom(&mut input, &mut output),
            "2" => return Ok(Config::default()),
            _ => writeln!(output, "Unknown input")?,
        }
    }
}

fn prompt_custom(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<Config, SetupError> {
    let height = ask_number(input, output, "Enter map height: ")?;
    let width = ask_number(input, output, "Enter map width: ")?;
    if height == 0 || width == 0 {
        return Err(GridError::InvalidDimension { height, width }.into());
    }
    let frequency = ask_number(
        input,
        output,
        "(0% - 100%) Enter frequency of cells in initial state: ",
    )?;
    if frequency > 100 {
        return Err(GridError::InvalidDensity(frequency as f64 / 100.0).into());
    }
    let live = ask(input, output, "Enter symbol for cell: ")?;
    let dead = ask(input, output, "Enter symbol for empty tile: ")?;

    Ok(Config::custom(
        height,
        width,
        frequency as f64 / 100.0,
        Glyphs { live, dead },
    ))
}

fn ask(
    input: &mut impl BufRead,
    output: &mut impl Write,
    question: &str,
) -> Result<String, SetupError> {
    write!(output, "{question}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(SetupError::Eof);
    }
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}

fn ask_number(
    input: &mut impl BufRead,
    output: &mut impl Write,
    question: &str,
) -> Result<usize, SetupError> {
    let answer = ask(input, output, question)?;
    answer
        .trim()
        .parse()
        .map_err(|_| SetupError::InvalidNumber(answer))
}

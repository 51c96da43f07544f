use terminal_size::{terminal_size, Width};

use crate::api::{Check, CliOption, CliValue, Command};
use crate::constant::*;
use crate::parser::UserInterface;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

const INDENT: usize = 1;
const PADDING: usize = 2;

// We'll target 95% of the total width, to ensure the renderer doesn't literally use the full space.
const TARGET_TOTAL_FACTOR: f64 = 0.95;

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
const MINIMUM_MIDDLE_WIDTH: usize = 17;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Row {
    left: String,
    middle: String,
    right: String,
}

impl Row {
    fn new(left: impl Into<String>, middle: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            middle: middle.into(),
            right: right.into(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct ColumnRenderer {
    left: usize,
    middle: usize,
    right: usize,
}

impl ColumnRenderer {
    /// Produce a renderer fitting the rows, using a heuristic to chose the middle width.
    fn guided(rows: &[Row], total_width: usize) -> Self {
        let left = max_width(rows.iter().map(|row| &row.left));
        let middle = max_width(rows.iter().map(|row| &row.middle));
        let right = max_width(rows.iter().map(|row| &row.right));
        let mut non_middle = INDENT + left + PADDING;

        if right > 0 {
            non_middle += PADDING + right;
        }

        let target_total_width = (total_width as f64 * TARGET_TOTAL_FACTOR) as usize;
        let guided_middle = std::cmp::max(middle, MINIMUM_MIDDLE_WIDTH);

        let middle = if guided_middle + non_middle <= target_total_width {
            guided_middle
        } else if non_middle + MINIMUM_MIDDLE_WIDTH < total_width {
            total_width - non_middle
        } else {
            MINIMUM_MIDDLE_WIDTH
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Columns [{left}, {middle}, {right}] for total width {total_width}.");
        }

        Self {
            left,
            middle,
            right,
        }
    }

    fn render(&self, row: &Row) -> Vec<String> {
        let padding = format!("{:PADDING$}", "");
        let left_width = self.left;
        let middle_width = self.middle;
        let parts = chunk(&row.middle, middle_width);
        let mut out = Vec::default();

        for (i, part) in parts.iter().enumerate() {
            if i == 0 {
                out.push(format!(
                    "{:INDENT$}{:left_width$}{padding}{:middle_width$}{padding}{}",
                    "", row.left, part, row.right
                ));
            } else {
                out.push(format!(
                    "{:INDENT$}{:left_width$}{padding}{}",
                    "", "", part
                ));
            }
        }

        if out.is_empty() {
            out.push(format!(
                "{:INDENT$}{:left_width$}{padding}{:middle_width$}{padding}{}",
                "", row.left, "", row.right
            ));
        }

        out.into_iter()
            .map(|line| line.trim_end().to_string())
            .collect()
    }
}

fn max_width<'r>(cells: impl Iterator<Item = &'r String>) -> usize {
    cells
        .map(|cell| cell.chars().count())
        .max()
        .unwrap_or_default()
}

fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ') {
        if !word.is_empty() {
            if current.is_empty() {
                hyphenate(width, &mut lines, &mut current, word);
            } else if current.chars().count() + word.chars().count() + 1 <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(current);
                current = String::default();
                hyphenate(width, &mut lines, &mut current, word);
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let width = std::cmp::max(width, 2);
    let increment = width - 1;
    let chars: Vec<char> = word.chars().collect();
    let mut left = 0;

    while chars.len() - left > width {
        let piece: String = chars[left..left + increment].iter().collect();
        lines.push(format!("{piece}-"));
        left += increment;
    }

    current.extend(&chars[left..]);
}

fn metavar(name: &str) -> String {
    let mut out = String::default();

    for c in name.chars() {
        if c == '-' {
            out.push('_');
        } else if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c);
        } else {
            out.push(c.to_ascii_uppercase());
        }
    }

    out
}

fn details(check: &Check<'_>) -> String {
    match check {
        Check::Pass => String::default(),
        Check::Custom(_) => "type: custom".to_string(),
        Check::Filter(filter) => match filter.default_value() {
            Some(default) => format!("type: {}  default: {default}", filter.kind()),
            None => format!("type: {}", filter.kind()),
        },
    }
}

fn option_usage(option: &CliOption<'_>) -> String {
    let mut usage = match option.short() {
        Some(short) => format!("-{short}"),
        None => format!("--{}", option.name()),
    };

    if option.check().takes_value() {
        usage.push(' ');
        usage.push_str(&metavar(option.name()));
    }

    if option.check().is_mandatory() {
        usage
    } else {
        format!("[{usage}]")
    }
}

fn value_usage(value: &CliValue<'_>) -> String {
    let usage = metavar(value.name());

    if value.check().is_mandatory() {
        usage
    } else {
        format!("[{usage}]")
    }
}

/// Renders the help message of a program.
#[derive(Debug)]
pub(crate) struct Printer {
    total_width: usize,
}

impl Printer {
    /// A printer sized to the terminal (or the default width when there is none).
    pub(crate) fn terminal() -> Self {
        let total_width = match terminal_size() {
            Some((Width(width), _)) => width as usize,
            None => DEFAULT_WIDTH,
        };
        Self { total_width }
    }

    #[cfg(test)]
    pub(crate) fn fixed(total_width: usize) -> Self {
        Self { total_width }
    }

    pub(crate) fn help(&self, program: &str, version: bool, command: &Command<'_>) -> Vec<String> {
        let mut usage = vec![format!("usage: {program}"), format!("[-{HELP_SHORT}]")];
        let mut options = vec![Row::new(
            format!("-{HELP_SHORT}, --{HELP_NAME}"),
            "Show this help message and exit.",
            "",
        )];

        if version {
            usage.push(format!("[--{VERSION_NAME}]"));
            options.push(Row::new(
                format!("--{VERSION_NAME}"),
                "Show the version and exit.",
                "",
            ));
        }

        for option in command.options() {
            usage.push(option_usage(option));
            let left = if option.check().takes_value() {
                format!("{} {}", option.slug(), metavar(option.name()))
            } else {
                option.slug().to_string()
            };
            options.push(Row::new(left, option.description(), details(option.check())));
        }

        let mut values = Vec::default();

        for value in command.values() {
            usage.push(value_usage(value));
            values.push(Row::new(
                metavar(value.name()),
                value.description(),
                details(value.check()),
            ));
        }

        let all: Vec<Row> = values.iter().chain(options.iter()).cloned().collect();
        let renderer = ColumnRenderer::guided(&all, self.total_width);
        let mut lines = vec![usage.join(" ")];

        if let Some(about) = command.about() {
            lines.push(String::default());
            lines.extend(chunk(about, self.total_width));
        }

        lines.push(String::default());

        if !values.is_empty() {
            lines.push("values:".to_string());
            lines.extend(values.iter().flat_map(|row| renderer.render(row)));
        }

        lines.push("options:".to_string());
        lines.extend(options.iter().flat_map(|row| renderer.render(row)));
        lines
    }

    pub(crate) fn print_help(
        &self,
        program: &str,
        version: bool,
        command: &Command<'_>,
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        user_interface.print(self.help(program, version, command).join("\n"));
    }
}

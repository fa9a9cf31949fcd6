use rann_saka::evaluation::{Catalog, Category, EvaluationMode, Indicator, Response, ResponseSource};
use std::io::{self, BufRead, Write};
use std::path::Path;

const BANNER: &str = r"
░▒█▀▀▄░█▀▀▄░█▀▀▄░█▀▀▄░░░░▒█▀▀▀█░█▀▀▄░█░▄░█▀▀▄
░▒█▄▄▀░█▄▄█░█░▒█░█░▒█░▀▀░░▀▀▀▄▄░█▄▄█░█▀▄░█▄▄█
░▒█░▒█░▀░░▀░▀░░▀░▀░░▀░░░░▒█▄▄▄█░▀░░▀░▀░▀░▀░░▀
";

const INVALID_ANSWER: &str = "Invalid input. Please answer with 'yes'(y) or 'no'(n) or 'exit'.";
const INVALID_SAVE: &str = "Invalid input, please enter 'yes'(y) or 'no'";
const INVALID_CHOICE: &str = "Invalid choice. Please enter '1' or '2' or 'exit'";

/// Line-oriented prompt channel over any reader/writer pair.
///
/// End of input is treated like `exit`.
pub struct Console<R, W> {
    input: R,
    output: W,
    separator: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            separator: String::new(),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn print_banner(&mut self) -> io::Result<()> {
        writeln!(self.output, "{BANNER}")
    }

    /// Top-level menu. Returns `None` when the user exits.
    pub fn choose_mode(&mut self) -> io::Result<Option<EvaluationMode>> {
        writeln!(self.output, "Choose the type of evaluation:")?;
        for mode in EvaluationMode::ordered() {
            writeln!(self.output, "{}: {}", mode.menu_key(), mode.label())?;
        }

        loop {
            let Some(choice) = self.prompt("Enter your choice (1 or 2 or 'exit'): ")? else {
                return Ok(None);
            };
            if choice.trim() == "exit" {
                return Ok(None);
            }
            match EvaluationMode::from_menu_key(&choice) {
                Some(mode) => return Ok(Some(mode)),
                None => writeln!(self.output, "{INVALID_CHOICE}")?,
            }
        }
    }

    /// Prints the questionnaire header and sizes separator lines to the catalog.
    pub fn begin_questionnaire(&mut self, catalog: &Catalog) -> io::Result<()> {
        self.separator = "-".repeat(catalog.longest_label_width());
        writeln!(self.output, "{}", self.separator)?;
        writeln!(
            self.output,
            "Please answer the following questions with 'yes'(y) or 'no'(n) or 'exit':\n"
        )
    }

    pub fn print_summary(&mut self, summary: &str) -> io::Result<()> {
        writeln!(self.output, "{summary}")
    }

    /// Asks whether to persist the results. End of input counts as "no".
    pub fn confirm_save(&mut self, mode: EvaluationMode) -> io::Result<bool> {
        let question = format!(
            "Do you want to save the {} evaluation results to a file? (yes/no): ",
            mode.short_name()
        );
        loop {
            let Some(answer) = self.prompt(&question)? else {
                return Ok(false);
            };
            match Response::parse(&answer) {
                Some(Response::Affirmative) => return Ok(true),
                Some(Response::Negative) => return Ok(false),
                _ => writeln!(self.output, "{INVALID_SAVE}")?,
            }
        }
    }

    pub fn report_saved(&mut self, path: &Path) -> io::Result<()> {
        writeln!(self.output, "Results saved to {}", path.display())
    }

    pub fn report_skipped(&mut self) -> io::Result<()> {
        writeln!(self.output, "Results not saved")
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> ResponseSource for Console<R, W> {
    fn begin_category(&mut self, category: &Category) -> io::Result<()> {
        writeln!(self.output, "Category: {}", category.name())
    }

    fn respond(&mut self, indicator: &Indicator) -> io::Result<Response> {
        let question = format!("{}: ", indicator.question());
        loop {
            let response = match self.prompt(&question)? {
                Some(line) => Response::parse(&line),
                None => Some(Response::Abort),
            };
            match response {
                Some(Response::Abort) => {
                    writeln!(self.output, "Program exited by user.")?;
                    return Ok(Response::Abort);
                }
                Some(answer) => {
                    writeln!(self.output, "{}", self.separator)?;
                    return Ok(answer);
                }
                None => writeln!(self.output, "{INVALID_ANSWER}")?,
            }
        }
    }
}

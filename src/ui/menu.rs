use crate::analysis::{find_duplicates, floor_statistics};
use crate::parser::load_file;
use crossterm::style::Stylize;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Result of analyzing one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Analyzed,
    /// Nothing was loaded; the reason has already been printed.
    NoData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Analyze,
    Quit,
    Invalid,
}

impl Choice {
    fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => Self::Analyze,
            "2" => Self::Quit,
            _ => Self::Invalid,
        }
    }
}

/// Text menu: load a file, print its reports, repeat until the user quits.
///
/// Generic over its streams so it can run against stdin/stdout or in-memory
/// buffers. The loaded records live only for one iteration.
pub struct Menu<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            color: false,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Runs the menu until the user chooses to quit or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let heading = self.heading("Меню:");
            writeln!(self.output, "\n{heading}")?;
            writeln!(self.output, "1. Ввести путь к файлу")?;
            writeln!(self.output, "2. Выйти из программы")?;

            let Some(line) = self.prompt("Выберите действие (1 или 2): ")? else {
                break;
            };

            match Choice::parse(&line) {
                Choice::Quit => break,
                Choice::Analyze => {
                    let Some(path) = self.prompt("Введите путь к файлу (CSV или XML): ")? else {
                        break;
                    };
                    self.analyze_file(Path::new(path.trim()))?;
                }
                Choice::Invalid => {
                    let message = self.error("Неверный выбор. Пожалуйста, выберите 1 или 2.");
                    writeln!(self.output, "{message}")?;
                }
            }
        }

        writeln!(self.output, "Завершаем программу...")?;
        self.output.flush()
    }

    /// Loads one file and prints the duplicate and floor reports with timings.
    ///
    /// Load failures are printed and reported as [`Outcome::NoData`]; only
    /// errors writing the output are returned.
    pub fn analyze_file(&mut self, path: &Path) -> io::Result<Outcome> {
        let read_start = Instant::now();
        let loaded = match load_file(path) {
            Ok(dataset) => Some(dataset),
            Err(e) => {
                log::debug!("load failed: {e:?}");
                let message = self.error(&e.to_string());
                writeln!(self.output, "{message}")?;
                None
            }
        };
        let read_time = read_start.elapsed();

        let Some(dataset) = loaded.filter(|d| !d.is_empty()) else {
            let message = self.error("Ошибка: не удалось загрузить данные из файла.");
            writeln!(self.output, "{message}")?;
            return Ok(Outcome::NoData);
        };

        log::info!(
            "analyzing {} records from {} file {}",
            dataset.len(),
            dataset.format,
            dataset.path.display()
        );
        let processing_start = Instant::now();
        let duplicates = find_duplicates(&dataset.records);
        let floors = floor_statistics(&dataset.records);
        write!(self.output, "{duplicates}{floors}")?;
        let processing_time = processing_start.elapsed();

        writeln!(
            self.output,
            "\nВремя на чтение файла: {:.2} секунд",
            read_time.as_secs_f64()
        )?;
        writeln!(
            self.output,
            "Время на обработку данных: {:.2} секунд",
            processing_time.as_secs_f64()
        )?;
        self.output.flush()?;

        Ok(Outcome::Analyzed)
    }

    /// Analyzes each file in turn and returns how many produced no data.
    pub fn analyze_all(&mut self, paths: &[PathBuf]) -> io::Result<usize> {
        let mut failed = 0;
        for path in paths {
            if self.analyze_file(path)? == Outcome::NoData {
                failed += 1;
            }
        }
        Ok(failed)
    }

    /// Prints a prompt and reads one line; `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn error(&self, text: &str) -> String {
        if self.color {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn run_menu(input: &str) -> String {
        let mut output = Vec::new();
        Menu::new(input.as_bytes(), &mut output).run().unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn quits_on_two() {
        let output = run_menu("2\n");

        assert!(output.contains("1. Ввести путь к файлу"));
        assert!(output.ends_with("Завершаем программу...\n"));
    }

    #[test]
    fn end_of_input_quits() {
        let output = run_menu("");
        assert!(output.ends_with("Завершаем программу...\n"));
    }

    #[test]
    fn invalid_choice_reprompts() {
        let output = run_menu("3\n\n2\n");

        assert_eq!(
            output
                .matches("Неверный выбор. Пожалуйста, выберите 1 или 2.")
                .count(),
            2
        );
        assert_eq!(output.matches("Меню:").count(), 3);
    }

    #[test]
    fn missing_file_reports_and_reprompts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        let output = run_menu(&format!("1\n{}\n2\n", path.display()));

        assert!(output.contains("Ошибка при чтении CSV файла"));
        assert!(output.contains("Ошибка: не удалось загрузить данные из файла."));
        assert!(!output.contains("Дублирующиеся записи"));
        assert_eq!(output.matches("Меню:").count(), 2);
    }

    #[test]
    fn unsupported_format_is_reported() {
        let output = run_menu("1\nnotes.txt\n2\n");

        assert!(output.contains("поддерживаются только файлы CSV и XML"));
        assert!(output.contains("Ошибка: не удалось загрузить данные из файла."));
    }

    #[test]
    fn analyzes_file_and_prints_reports_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cities.csv");
        fs::write(
            &path,
            "city;street;house;floor\nParis;Main;1;3\nParis;Main;1;3\nLyon;Oak;5;7\n",
        )
        .unwrap();

        let mut output = Vec::new();
        let outcome = Menu::new(&b""[..], &mut output)
            .analyze_file(&path)
            .unwrap();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(outcome, Outcome::Analyzed);
        let duplicates = output.find("Paris, Main, дом 1, этаж 3: 2 раз(а)").unwrap();
        let floors = output.find("Город: Paris").unwrap();
        assert!(duplicates < floors);
        assert!(output.contains("  3-этажных зданий: 2"));
        assert!(!output.contains("Город: Lyon"));
        assert!(output.contains("Время на чтение файла: "));
        assert!(output.contains("Время на обработку данных: "));
    }

    #[test]
    fn header_only_file_counts_as_no_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        fs::write(&path, "city;street;house;floor\n").unwrap();

        let mut output = Vec::new();
        let outcome = Menu::new(&b""[..], &mut output)
            .analyze_file(&path)
            .unwrap();

        assert_eq!(outcome, Outcome::NoData);
    }

    #[test]
    fn zero_byte_file_counts_as_no_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.csv");
        fs::write(&path, "").unwrap();

        let mut output = Vec::new();
        let outcome = Menu::new(&b""[..], &mut output)
            .analyze_file(&path)
            .unwrap();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(outcome, Outcome::NoData);
        assert!(output.contains("Ошибка: не удалось загрузить данные из файла."));
        assert!(!output.contains("Дублирующиеся записи"));
    }

    #[test]
    fn analyze_all_counts_files_without_data() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.csv");
        let empty = dir.path().join("empty.csv");
        fs::write(&good, "city;street;house;floor\nParis;Main;1;3\n").unwrap();
        fs::write(&empty, "city;street;house;floor\n").unwrap();
        let paths = vec![
            good.clone(),
            dir.path().join("absent.xml"),
            empty,
            PathBuf::from("notes.txt"),
            good,
        ];

        let mut output = Vec::new();
        let failed = Menu::new(&b""[..], &mut output)
            .analyze_all(&paths)
            .unwrap();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(failed, 3);
        assert_eq!(output.matches("Город: Paris").count(), 2);
        assert_eq!(
            output
                .matches("Ошибка: не удалось загрузить данные из файла.")
                .count(),
            3
        );
    }

    #[test]
    fn path_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("one.xml");
        fs::write(&path, r#"<root><item city="Rome" street="Via" house="9" floor="2"/></root>"#)
            .unwrap();

        let output = run_menu(&format!("1\n   {}  \n2\n", path.display()));

        assert!(output.contains("Город: Rome"));
    }
}

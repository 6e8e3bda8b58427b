use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use payroll::{Config, EmployeeData, EmployeeRecord, Format, InvalidArgument};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Validate every employee record in a file")]
pub struct Check {
    /// File holding a list of employee records
    file: PathBuf,

    /// Record format (defaults to the file extension, then the config)
    #[arg(long, value_name = "FORMAT")]
    format: Option<InputFormat>,

    /// Stop at the first invalid record
    #[arg(long)]
    fail_fast: bool,

    /// Only print invalid records
    #[arg(long, short)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum InputFormat {
    Yaml,
    Json,
}

impl From<InputFormat> for Format {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Yaml => Self::Yaml,
            InputFormat::Json => Self::Json,
        }
    }
}

/// Outcome of checking one inbound record.
#[derive(Debug)]
struct Entry {
    /// One-based position of the record in the file.
    position: usize,
    result: Result<EmployeeRecord, InvalidArgument>,
}

#[derive(Debug, Default)]
struct Report {
    entries: Vec<Entry>,
    stopped_early: bool,
}

impl Report {
    fn invalid(&self) -> usize {
        self.entries.iter().filter(|e| e.result.is_err()).count()
    }
}

impl Check {
    #[instrument(level = "debug", skip(self, config), fields(file = %self.file.display()))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let format = self
            .format
            .map(Format::from)
            .or_else(|| format_from_extension(&self.file))
            .unwrap_or(config.format);
        let fail_fast = self.fail_fast || config.fail_fast;

        let content = std::fs::read_to_string(&self.file)
            .with_context(|| format!("failed to read {}", self.file.display()))?;
        let records = parse(&content, format)
            .with_context(|| format!("failed to parse {} as {format}", self.file.display()))?;
        tracing::debug!("Read {} records as {format}", records.len());

        let report = check(records, fail_fast);
        self.print(&report);

        let invalid = report.invalid();
        if invalid > 0 {
            anyhow::bail!(
                "{invalid} of {} checked records are invalid",
                report.entries.len()
            );
        }
        Ok(())
    }

    fn print(&self, report: &Report) {
        for entry in &report.entries {
            match &entry.result {
                Ok(record) if !self.quiet => {
                    println!("{} #{} {record}", "ok".success(), entry.position);
                }
                Ok(_) => {}
                Err(error) => {
                    println!("{} #{} {error}", "invalid".warning(), entry.position);
                }
            }
        }

        if report.stopped_early {
            println!("{}", "stopped at the first invalid record".dim());
        }
    }
}

fn format_from_extension(path: &Path) -> Option<Format> {
    match path.extension()?.to_str()? {
        "json" => Some(Format::Json),
        "yaml" | "yml" => Some(Format::Yaml),
        _ => None,
    }
}

fn parse(content: &str, format: Format) -> anyhow::Result<Vec<EmployeeData>> {
    let records = match format {
        Format::Yaml => serde_yaml::from_str(content)?,
        Format::Json => serde_json::from_str(content)?,
    };
    Ok(records)
}

fn check(records: Vec<EmployeeData>, fail_fast: bool) -> Report {
    let mut report = Report::default();

    for (index, data) in records.into_iter().enumerate() {
        let result = EmployeeRecord::try_from(data);
        let failed = result.is_err();
        if let Err(error) = &result {
            tracing::warn!("Record #{} is invalid: {error}", index + 1);
        }

        report.entries.push(Entry {
            position: index + 1,
            result,
        });

        if failed && fail_fast {
            report.stopped_early = true;
            break;
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use payroll::Field;
    use test_case::test_case;

    use super::*;

    const ROSTER: &str = "\
- firstName: Frodo
  lastName: Baggins
  description: ring bearer
  jobYears: 2
  email: frodo@shire.me
- firstName: Bilbo
  lastName: '  '
  description: burglar
  jobYears: 60
  email: bilbo@shire.me
- id: 3
  firstName: Sam
  lastName: Gamgee
  description: gardener
  email: sam@shire.me
";

    #[test]
    fn reports_each_record() {
        let records = parse(ROSTER, Format::Yaml).unwrap();
        let report = check(records, false);

        assert_eq!(report.entries.len(), 3);
        assert_eq!(report.invalid(), 2);
        assert!(!report.stopped_early);

        assert!(report.entries[0].result.is_ok());
        assert_eq!(
            report.entries[1].result.as_ref().unwrap_err().field(),
            Field::LastName
        );
        assert_eq!(
            report.entries[2].result.as_ref().unwrap_err().field(),
            Field::JobYears
        );
    }

    #[test]
    fn fail_fast_stops_at_first_invalid_record() {
        let records = parse(ROSTER, Format::Yaml).unwrap();
        let report = check(records, true);

        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.entries[1].position, 2);
        assert!(report.stopped_early);
    }

    #[test]
    fn parses_json_records() {
        let json = r#"[{"firstName": "Gandalf", "lastName": "The Grey", "description": "Wizard", "jobYears": 1000, "email": "gandalf123@gmail.com"}]"#;
        let report = check(parse(json, Format::Json).unwrap(), false);

        assert_eq!(report.invalid(), 0);
        assert_eq!(
            report.entries[0].result.as_ref().unwrap().to_string(),
            "EmployeeRecord{id=null, firstName='Gandalf', lastName='The Grey', description='Wizard', jobYears='1000', email='gandalf123@gmail.com'}"
        );
    }

    #[test_case("roster.json", Some(Format::Json); "json")]
    #[test_case("roster.yaml", Some(Format::Yaml); "yaml")]
    #[test_case("roster.yml", Some(Format::Yaml); "short yaml")]
    #[test_case("roster.txt", None; "unknown")]
    #[test_case("roster", None; "no extension")]
    fn format_follows_extension(file: &str, expected: Option<Format>) {
        assert_eq!(format_from_extension(Path::new(file)), expected);
    }

    #[test]
    fn run_fails_when_a_record_is_invalid() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(ROSTER.as_bytes()).unwrap();

        let command = Check {
            file: file.path().to_path_buf(),
            format: None,
            fail_fast: false,
            quiet: true,
        };

        let error = command.run(&Config::default()).unwrap_err();
        assert_eq!(error.to_string(), "2 of 3 checked records are invalid");
    }

    #[test]
    fn run_succeeds_for_valid_records() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[]").unwrap();

        let command = Check {
            file: file.path().to_path_buf(),
            format: Some(InputFormat::Json),
            fail_fast: false,
            quiet: true,
        };

        command.run(&Config::default()).unwrap();
    }
}

use clap::Parser;
use payroll::EmployeeRecord;
use tracing::instrument;

#[derive(Debug, Parser)]
#[command(about = "Build an employee record from its fields")]
pub struct New {
    /// First name
    #[arg(long)]
    first_name: String,

    /// Last name
    #[arg(long)]
    last_name: String,

    /// Job description
    #[arg(long)]
    description: String,

    /// Years of experience (may be negative)
    #[arg(long, allow_negative_numbers = true)]
    job_years: i32,

    /// Email address
    #[arg(long)]
    email: String,

    /// Identifier to assign to the record
    #[arg(long)]
    id: Option<i64>,

    /// Output format (defaults to the canonical text rendering)
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// The record's display rendering
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// YAML document
    Yaml,
}

impl New {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self) -> anyhow::Result<()> {
        let output = self.output;
        let record = self.build()?;
        tracing::info!("Built employee record for {}", record.first_name());

        println!("{}", render(&record, output)?);
        Ok(())
    }

    fn build(self) -> anyhow::Result<EmployeeRecord> {
        let mut record = EmployeeRecord::new(
            self.first_name,
            self.last_name,
            self.description,
            self.job_years,
            self.email,
        )?;
        record.set_id(self.id);
        Ok(record)
    }
}

fn render(record: &EmployeeRecord, output: OutputFormat) -> anyhow::Result<String> {
    let rendered = match output {
        OutputFormat::Text => record.to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(record)?,
        OutputFormat::Yaml => serde_yaml::to_string(record)?.trim_end().to_string(),
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        new: New,
    }

    fn parse(args: &[&str]) -> New {
        let mut argv = vec!["payroll"];
        argv.extend_from_slice(args);
        Harness::parse_from(argv).new
    }

    const GANDALF: &[&str] = &[
        "--first-name",
        "Gandalf",
        "--last-name",
        "The Grey",
        "--description",
        "Wizard",
        "--job-years",
        "1000",
        "--email",
        "gandalf123@gmail.com",
    ];

    #[test]
    fn builds_record_from_flags() {
        let record = parse(GANDALF).build().unwrap();
        assert_eq!(
            record.to_string(),
            "EmployeeRecord{id=null, firstName='Gandalf', lastName='The Grey', description='Wizard', jobYears='1000', email='gandalf123@gmail.com'}"
        );
    }

    #[test]
    fn assigns_identifier_from_flag() {
        let mut args = GANDALF.to_vec();
        args.extend(["--id", "9"]);
        assert_eq!(parse(&args).build().unwrap().id(), Some(9));
    }

    #[test]
    fn accepts_negative_job_years() {
        let mut args = GANDALF.to_vec();
        args[7] = "-2";
        assert_eq!(parse(&args).build().unwrap().job_years(), -2);
    }

    #[test]
    fn rejects_invalid_email() {
        let mut args = GANDALF.to_vec();
        args[9] = "frodo.com";
        let error = parse(&args).build().unwrap_err();
        assert!(error.to_string().contains("invalid email"));
    }

    #[test]
    fn json_output_uses_field_keys() {
        let record = parse(GANDALF).build().unwrap();
        let json = render(&record, OutputFormat::Json).unwrap();
        assert!(json.contains("\"firstName\": \"Gandalf\""));
    }

    #[test]
    fn yaml_output_uses_field_keys() {
        let record = parse(GANDALF).build().unwrap();
        let yaml = render(&record, OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("firstName: Gandalf"));
        assert!(yaml.contains("id: null"));
    }
}

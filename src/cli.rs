use clap::Parser;
use gradepoint_core::CourseDraft;
use std::path::PathBuf;

#[derive(Parser, Debug, PartialEq)]
#[command(name = "gradepoint")]
#[command(about = "A terminal form for tracking your cumulative grade-point average")]
pub struct CliArgs {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Skip the welcome screen (overrides config)
    #[arg(long)]
    pub no_intro: bool,

    /// Pre-fill a course as CREDITS:GRADE[:NAME], e.g. 3:A+:Compilers
    #[arg(long = "course", value_name = "CREDITS:GRADE[:NAME]")]
    pub courses: Vec<CourseDraft>,

    /// Print the CGPA of the given courses and exit
    #[arg(long)]
    pub print: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradepoint_core::GradeSymbol;

    #[test]
    fn test_cli_parse_no_args() {
        let args = CliArgs::parse_from(["gradepoint"]);
        assert_eq!(args.config, None);
        assert!(!args.no_intro);
        assert!(args.courses.is_empty());
        assert!(!args.print);
        assert_eq!(args.log_file, None);
    }

    #[test]
    fn test_cli_parse_with_config() {
        let args = CliArgs::parse_from(["gradepoint", "--config", "/custom/config.toml", "--no-intro"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
        assert!(args.no_intro);
    }

    #[test]
    fn test_cli_parse_courses() {
        let args = CliArgs::parse_from([
            "gradepoint",
            "--course",
            "3:O:Maths",
            "--course",
            "4:B",
            "--print",
        ]);
        assert!(args.print);
        assert_eq!(args.courses.len(), 2);
        assert_eq!(args.courses[0].name, "Maths");
        assert_eq!(args.courses[1].grade, GradeSymbol::B);
    }

    #[test]
    fn test_cli_rejects_unknown_grade() {
        let result = CliArgs::try_parse_from(["gradepoint", "--course", "3:Z"]);
        assert!(result.is_err());
    }
}

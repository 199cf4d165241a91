use std::{fs::File, io::BufReader};

use refute::{
    builder::read_clauses, context::Context, reports::Report, structures::literal::Literal,
    types::err::ErrorKind,
};

use crate::config::{CliConfig, Detail};

/// The clause texts of the file (if any) followed by those given directly.
///
/// If the file cannot be opened or read a message is sent and the process is terminated.
pub fn clause_texts(cli_config: &CliConfig) -> Vec<String> {
    let mut texts = Vec::default();

    if let Some(path) = &cli_config.file {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("Failed to open {path:?}: {e}");
                std::process::exit(1);
            }
        };

        match read_clauses(BufReader::new(file)) {
            Ok(read) => texts.extend(read),
            Err(e) => {
                eprintln!("Failed to read {path:?}: {e:?}");
                std::process::exit(1);
            }
        }
    }

    texts.extend(cli_config.clauses.iter().cloned());
    texts
}

/// The lines reported for a completed refutation.
///
/// Unless quiet, the clauses and the literal checked precede the result.
/// With [Detail::Derivation] each resolution step follows, as `left , right => resolvent`.
pub fn report_lines(
    the_context: &Context,
    texts: &[String],
    query: Literal,
    report: &Report,
    detail: Detail,
) -> Result<Vec<String>, ErrorKind> {
    let mut lines = Vec::default();

    if detail != Detail::Quiet {
        lines.push(format!("Initial: {}", texts.join(" ")));
        lines.push(format!("Check: {query}"));
    }

    lines.push(format!("Result: {}", report.is_entailed()));

    if detail == Detail::Derivation {
        for [left, right, resolvent] in the_context.resolution_steps()? {
            lines.push(format!("{left} , {right} => {resolvent}"));
        }
    }

    Ok(lines)
}

/// Installs a console logger on stderr.
#[cfg(feature = "log")]
pub fn init_logger() {
    use log4rs::{
        append::console::{ConsoleAppender, Target},
        config::{Appender, Config, Root},
        encode::pattern::PatternEncoder,
    };

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} {t} - {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(log::LevelFilter::Trace));

    match config {
        Ok(config) => {
            if let Err(e) = log4rs::init_config(config) {
                eprintln!("Failed to initialise logging: {e}");
            }
        }
        Err(e) => eprintln!("Failed to configure logging: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use refute::config::Config;

    use super::*;
    use crate::config::DEFAULT_CLAUSES;

    fn demonstration_lines(detail: Detail) -> Vec<String> {
        let texts = DEFAULT_CLAUSES
            .iter()
            .map(|text| text.to_string())
            .collect::<Vec<_>>();

        let config = Config {
            record_derivation: detail == Detail::Derivation,
        };
        let mut the_context = Context::from_config(config);
        assert!(the_context.add_clauses(&texts).is_ok());

        let query = Literal::new('R', false);
        let report = the_context.refute(query).expect("a report");

        report_lines(&the_context, &texts, query, &report, detail).expect("lines")
    }

    #[test]
    fn summary() {
        assert_eq!(
            demonstration_lines(Detail::Summary),
            vec!["Initial: C|P !C|R !P|H !H", "Check: R", "Result: true"]
        );
    }

    #[test]
    fn quiet() {
        assert_eq!(demonstration_lines(Detail::Quiet), vec!["Result: true"]);
    }

    #[test]
    fn derivation() {
        assert_eq!(
            demonstration_lines(Detail::Derivation),
            vec![
                "Initial: C|P !C|R !P|H !H",
                "Check: R",
                "Result: true",
                "C|P , !C|R => P|R",
                "!P|H , P|R => H|R",
                "!H , H|R => R",
                "!R , R => {}",
            ]
        );
    }

    #[test]
    fn not_entailed() {
        let texts = vec!["p|q".to_string()];
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_clauses(&texts).is_ok());

        let query = Literal::new('r', false);
        let report = the_context.refute(query).expect("a report");

        let lines = report_lines(&the_context, &texts, query, &report, Detail::Summary);
        assert_eq!(
            lines,
            Ok(vec![
                "Initial: p|q".to_string(),
                "Check: r".to_string(),
                "Result: false".to_string(),
            ])
        );
    }
}

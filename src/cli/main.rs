#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use clap::Parser;
use refute::{context::Context, structures::literal::Literal};

mod config;
mod misc;

use config::{config_from_args, Args};

fn main() {
    #[cfg(feature = "log")]
    misc::init_logger();

    let args = Args::parse();

    if args.markdown_help {
        clap_markdown::print_help_markdown::<Args>();
        return;
    }

    let (config, cli_config) = config_from_args(args);
    let mut the_context = Context::from_config(config);

    let texts = misc::clause_texts(&cli_config);
    if let Err(e) = the_context.add_clauses(&texts) {
        eprintln!("Parse error: {e:?}");
        std::process::exit(1);
    }

    let query = match cli_config.query.parse::<Literal>() {
        Ok(query) => query,
        Err(e) => {
            eprintln!("Query parse error: {e:?}");
            std::process::exit(1);
        }
    };

    let report = match the_context.refute(query) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Refutation error: {e:?}");
            std::process::exit(1);
        }
    };

    match misc::report_lines(&the_context, &texts, query, &report, cli_config.detail) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(e) => {
            eprintln!("Derivation error: {e:?}");
            std::process::exit(1);
        }
    }
}

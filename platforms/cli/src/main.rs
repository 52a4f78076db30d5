use clap::Parser;
use ntm::machines::MachineCatalog;
use ntm::parser::Description;
use ntm::reporter::Reporter;
use ntm::scheduler::Scheduler;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Machine description file (reads stdin when omitted)
    file: Option<PathBuf>,

    /// Run one of the embedded demo machines by name
    #[clap(short, long, conflicts_with = "file")]
    demo: Option<String>,

    /// List the embedded demo machines and exit
    #[clap(short, long)]
    list: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.list {
        for name in MachineCatalog::names() {
            println!("{}", name);
        }
        return ExitCode::SUCCESS;
    }

    let description = match load_description(&cli) {
        Ok(description) => description,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::FAILURE;
        }
    };

    let scheduler = Scheduler::new(&description.table, description.max_steps);
    let mut reporter = Reporter::new(std::io::stdout().lock());

    for input in &description.inputs {
        let decision = scheduler.decide(input);
        if let Err(e) = reporter.report(decision.verdict) {
            eprintln!("Failed to write verdict: {}", e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

fn load_description(cli: &Cli) -> Result<Description, String> {
    if let Some(name) = &cli.demo {
        return MachineCatalog::get_by_name(name).map_err(|e| e.to_string());
    }

    if let Some(path) = &cli.file {
        return ntm::loader::DescriptionLoader::load_description(path).map_err(|e| e.to_string());
    }

    if atty::is(atty::Stream::Stdin) {
        return Err("No description file given and stdin is a terminal (try --help)".to_string());
    }

    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .map_err(|e| format!("Failed to read stdin: {}", e))?;

    ntm::parser::parse(&content).map_err(|e| e.to_string())
}

use clap::Parser;
use miette::Result;

use eiq::cli::{commands, helpers, Cli, Commands, OutputFormat};
use eiq::core::Config;

fn main() -> Result<()> {
    // Restore default SIGPIPE behavior so piping into `head` etc. exits
    // quietly instead of panicking on a broken pipe.
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(false)
                .context_lines(2)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let mut global = cli.global;
    if global.format == OutputFormat::Auto {
        global.format = helpers::resolve_format(global.format, &Config::load());
    }

    match cli.command {
        Commands::Init(args) => commands::init::run(args, &global),
        Commands::Facility(cmd) => commands::facility::run(cmd, &global),
        Commands::Asset(cmd) => commands::asset::run(cmd, &global),
        Commands::Wo(cmd) => commands::wo::run(cmd, &global),
        Commands::Contract(cmd) => commands::contract::run(cmd, &global),
        Commands::Cert(cmd) => commands::cert::run(cmd, &global),
        Commands::Import(args) => commands::import::run(args, &global),
        Commands::Seed(args) => commands::seed::run(args, &global),
        Commands::Validate(args) => commands::validate::run(args, &global),
        Commands::Report(cmd) => commands::report::run(cmd, &global),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

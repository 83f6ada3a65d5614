use liftoff::{
    cli::{get_log_level_from_verbose, parse_cli, run_render, run_validate, Commands},
    error::default_error_handler,
};

fn main() {
    let cli = parse_cli();
    env_logger::Builder::new()
        .filter_level(get_log_level_from_verbose(cli.verbose))
        .init();

    let result = match &cli.command {
        Commands::Render(args) => run_render(args),
        Commands::Validate(args) => run_validate(args),
    };

    if let Err(err) = result {
        default_error_handler(err);
    }
}

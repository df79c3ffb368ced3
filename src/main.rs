use clap::Parser;
use greeter::utils::{logger, validation::Validate};
use greeter::{greet, CliConfig, CliOutput};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::debug!("Input rejected (field: {})", e.field());
        eprintln!("{}", CliOutput::from_error(&e).render(config.json));
        std::process::exit(e.exit_code());
    }

    let result = greet(config.name.as_deref());
    let output = CliOutput::from_result(&result);

    match result {
        Ok(_) => println!("{}", output.render(config.json)),
        Err(e) => {
            eprintln!("{}", output.render(config.json));
            std::process::exit(e.exit_code());
        }
    }
}

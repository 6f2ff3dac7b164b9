// src/main.rs

use later::errors::LaterError;
use later::{cli, logging, run};

#[tokio::main]
async fn main() {
    match run_main().await {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            if let Some(LaterError::NoCommand) = err.downcast_ref::<LaterError>() {
                eprintln!("no command given");
                eprintln!("{}", cli::usage());
            } else {
                eprintln!("later error: {err:?}");
            }
            std::process::exit(1);
        }
    }
}

async fn run_main() -> anyhow::Result<i32> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args).await
}

use std::env;
use std::process;

use arserve::{banner, config::ServeConfig, lan, server, ServeError};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let config = ServeConfig::from_args(env::args().skip(1));

    if !config.root.exists() {
        eprintln!("Path [{}] does not exist!", config.root.display());
        process::exit(1);
    }

    let listener = match server::bind(&config).await {
        Ok(listener) => listener,
        Err(ServeError::PortInUse(port)) => {
            eprintln!("{}", banner::port_in_use(port));
            process::exit(1);
        }
        Err(err) => {
            eprintln!("ERROR: {err}");
            process::exit(1);
        }
    };

    println!("{}", banner::startup(&config, lan::discover()));

    if let Err(err) = server::run(listener, server::app(&config.root)).await {
        eprintln!("ERROR: {err}");
        process::exit(1);
    }

    println!("{}", banner::shutdown());
}

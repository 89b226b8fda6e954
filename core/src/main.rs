mod args;

use std::error::Error;
use std::fs::File;
use std::io;

use args::Args;
use clap::Parser;
use epd::Converter;
use log::{error, info, LevelFilter};
use simplelog::{Config, WriteLogger};

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    let converter: Converter = Converter::default();
    let result = epd::run(
        &converter,
        args.on_invalid_fen.into(),
        io::stdin().lock(),
        io::stdout().lock(),
        io::stderr().lock(),
    );

    match result {
        Ok(summary) => {
            info!("{}", summary);
            Ok(())
        }
        Err(e) => {
            error!("Conversion stopped: {}", e);
            Err(e.into())
        }
    }
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();

    if let Some(log_file) = &args.log_file {
        WriteLogger::init(
            LevelFilter::Debug,
            Config::default(),
            File::create(log_file)?,
        )?;
    }

    Ok(args)
}

use std::process::ExitCode;

// clap and the subscriber are native-only
#[cfg(not(target_arch = "wasm32"))]
fn main() -> ExitCode {
    native::main()
}

#[cfg(target_arch = "wasm32")]
fn main() -> ExitCode {
    ExitCode::SUCCESS
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::io::{Read, Write};
    use std::process::ExitCode;

    use clap::Parser;
    use gis_geojson::{encoder, logging};

    /// Read JSON on stdin and write it back indented with four spaces.
    #[derive(Parser, Debug)]
    #[command(version, about)]
    struct Cli {
        /// Increase log verbosity on stderr (-v, -vv, -vvv)
        #[arg(short, long, action = clap::ArgAction::Count)]
        verbose: u8,
    }

    pub fn main() -> ExitCode {
        let cli = Cli::parse();
        logging::init(cli.verbose);

        let mut input = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut input) {
            tracing::error!("failed to read stdin: {e}");
            return ExitCode::FAILURE;
        }
        tracing::debug!(bytes = input.len(), "read input");

        let pretty = match encoder::reformat_pretty(&input) {
            Ok(pretty) => pretty,
            Err(e) => {
                tracing::error!("JSON parse error: {e}");
                return ExitCode::FAILURE;
            }
        };

        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{pretty}").and_then(|()| stdout.flush()) {
            tracing::error!("failed to write output: {e}");
            return ExitCode::FAILURE;
        }
        ExitCode::SUCCESS
    }
}

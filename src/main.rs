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
    use std::io::Write;
    use std::process::ExitCode;

    use clap::Parser;
    use gis_geojson::{ConvertOptions, encoder, logging, sample};

    /// Write the sample world as a GeoJSON FeatureCollection on stdout.
    #[derive(Parser, Debug)]
    #[command(version, about)]
    struct Cli {
        /// Re-indent the output with four spaces
        #[arg(long)]
        pretty: bool,

        /// Emit the world name as a top-level "name" member
        #[arg(long)]
        include_name: bool,

        /// Drop the elevation from every position
        #[arg(long)]
        no_elevation: bool,

        /// Increase log verbosity on stderr (-v, -vv, -vvv)
        #[arg(short, long, action = clap::ArgAction::Count)]
        verbose: u8,
    }

    impl Cli {
        fn convert_options(&self) -> ConvertOptions {
            ConvertOptions {
                include_elevation: !self.no_elevation,
                include_world_name: self.include_name,
            }
        }
    }

    fn run(cli: &Cli) -> Result<String, gis_geojson::Error> {
        let opts = cli.convert_options();
        tracing::debug!(?opts, pretty = cli.pretty, "resolved options");

        let world = sample::sample_world();
        let json = world.to_json_with(&opts)?;
        tracing::info!(
            world = world.name(),
            features = world.features().len(),
            bytes = json.len(),
            "serialized world"
        );

        if cli.pretty {
            Ok(encoder::reformat_pretty(&json)?)
        } else {
            Ok(json)
        }
    }

    pub fn main() -> ExitCode {
        let cli = Cli::parse();
        logging::init(cli.verbose);

        let json = match run(&cli) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("{e}");
                return ExitCode::FAILURE;
            }
        };

        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{json}").and_then(|()| stdout.flush()) {
            tracing::error!("failed to write output: {e}");
            return ExitCode::FAILURE;
        }
        ExitCode::SUCCESS
    }
}

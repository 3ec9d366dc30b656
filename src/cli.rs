use clap::{Arg, ArgAction, ArgMatches, ColorChoice, Command, Error};

/// Default reference catalog location
const DEFAULT_CATALOG: &str = "bts.csv";

/// Default output file the map link is written to
const DEFAULT_OUTPUT: &str = "out.txt";

pub struct Cli {
    /// arguments passed by user
    pub matches: ArgMatches,
}

impl Cli {
    pub fn new() -> Result<Self, Error> {
        let matches = Command::new("bts-locate")
            .author("Guillaume W. Bres <guillaume.bressaix@gmail.com>")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Mobile device position estimation from GSM base station observations")
            .arg_required_else_help(true)
            .color(ColorChoice::Always)
            .next_help_heading("Input/Output")
            .arg(
                Arg::new("observations")
                    .required(true)
                    .help("Scan of nearby towers (semicolon delimited)"),
            )
            .arg(
                Arg::new("catalog")
                    .short('b')
                    .long("bts")
                    .action(ArgAction::Set)
                    .default_value(DEFAULT_CATALOG)
                    .help("Reference tower catalog (semicolon delimited)"),
            )
            .arg(
                Arg::new("output")
                    .short('o')
                    .long("output")
                    .action(ArgAction::Set)
                    .default_value(DEFAULT_OUTPUT)
                    .help("Output file the resolved map link is written to"),
            )
            .next_help_heading("Estimation")
            .arg(
                Arg::new("signed")
                    .short('s')
                    .long("signed")
                    .action(ArgAction::SetTrue)
                    .help(
                        "Apply S/W hemisphere signing when parsing the catalog.
Historical catalogs are north-eastern and were never signed: off by default.",
                    ),
            )
            .try_get_matches()?;
        Ok(Self { matches })
    }

    pub fn observations_path(&self) -> &str {
        self.matches.get_one::<String>("observations").unwrap()
    }

    pub fn catalog_path(&self) -> &str {
        self.matches.get_one::<String>("catalog").unwrap()
    }

    pub fn output_path(&self) -> &str {
        self.matches.get_one::<String>("output").unwrap()
    }

    pub fn signed_hemispheres(&self) -> bool {
        self.matches.get_flag("signed")
    }
}

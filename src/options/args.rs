//! Argument parsing via clap.

use clap::*;
use indoc::indoc;

const TEMPLATE: &str = indoc! {
    "{name} {version}
    {author}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const USAGE: &str = "ptop [OPTIONS]";

/// The arguments for pipetop.
#[derive(Parser, Clone, Debug)]
#[command(
    name = crate_name!(),
    version = crate_version!(),
    author = crate_authors!(),
    about = crate_description!(),
    color = ColorChoice::Auto,
    help_template = TEMPLATE,
    override_usage = USAGE,
)]
pub struct Args {
    #[command(flatten)]
    pub general_args: GeneralArgs,
}

#[derive(clap::Args, Clone, Debug)]
#[command(next_help_heading = "General Options")]
pub struct GeneralArgs {
    #[arg(
        short = 'C',
        long,
        value_name = "PATH",
        help = "Sets the location of the config file.",
        long_help = "Sets the location of the config file. Expects a config file in the TOML format. \
                    If it doesn't exist, a default config file is created at the path."
    )]
    pub config_location: Option<String>,

    #[arg(
        short = 'r',
        long,
        value_name = "TIME",
        help = "How often samples are pulled from the pipe.",
        long_help = indoc! {
            "How often samples are pulled from the pipe. Takes a number in
            milliseconds or a human duration (e.g. 500ms). The minimum is
            100ms, and the default is 500ms. Note that a pull blocks until
            the producer writes a line, so the effective cadence is also
            bounded by the producer's."
        }
    )]
    pub rate: Option<String>,

    #[arg(
        short = 'p',
        long,
        value_name = "PATH",
        help = "The named pipe to read samples from.",
        long_help = "The named pipe to read samples from. Created if it does not exist yet. \
                    Defaults to /tmp/sysmon_pipe."
    )]
    pub pipe: Option<String>,

    #[arg(
        long,
        value_name = "N",
        help = "How many samples each chart keeps on screen.",
        long_help = "How many samples each chart keeps on screen. The charts scroll once \
                    this many samples have arrived. The minimum is 2, and the default is 50."
    )]
    pub capacity: Option<usize>,

    #[arg(
        long,
        help = "Uses a dot marker for the charts.",
        long_help = "Uses a dot marker for the charts instead of the default braille marker."
    )]
    pub dot_marker: bool,
}

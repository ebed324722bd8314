use indoc::indoc;

/// How long to wait on the event receiver before redrawing anyway.
pub const TICK_RATE_IN_MILLISECONDS: u64 = 200;

/// How often the collection thread attempts a pipe read by default.
pub const DEFAULT_UPDATE_RATE_IN_MILLISECONDS: u64 = 500;

/// The smallest update rate we accept.
pub const MINIMUM_UPDATE_RATE_IN_MILLISECONDS: u64 = 100;

/// Where samples are read from unless overridden.
pub const DEFAULT_PIPE_PATH: &str = "/tmp/sysmon_pipe";

/// How many samples each chart keeps on screen.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// The smallest history capacity we accept.
pub const MINIMUM_HISTORY_CAPACITY: usize = 2;

pub const DEFAULT_CONFIG_FILE_PATH: &str = "pipetop/pipetop.toml";

/// Written out when no config file exists at the resolved location.
pub const CONFIG_TEXT: &str = indoc! {r##"
    # This is a default config file for pipetop. All of the settings are
    # commented out; uncomment and change them to take effect.

    [flags]
    # How often samples are pulled from the pipe, in milliseconds.
    #rate = 500

    # The named pipe samples are read from.
    #pipe_path = "/tmp/sysmon_pipe"

    # How many samples each chart keeps on screen.
    #capacity = 50

    # Use a dot marker for the charts instead of the default braille marker.
    #dot_marker = false
"##};

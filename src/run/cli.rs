use clap::{Parser, ValueEnum};
use derive_builder::Builder;
use std::fmt::{Display, Formatter};

macro_rules! create_options_structs {
    (
        $(
            $(#[$meta:meta])*
            clap $clap:tt
            pub $name:ident : $ty:ty
        ),* $(,)?
    ) => {
        #[derive(Clone, Default, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Parser)]
        #[command(version, about, long_about = None)]
        #[doc(hidden)]
        pub struct CliOptions {
            $(
            $(#[$meta])*
            #[arg$clap]
            pub(crate) $name: $ty,
            )*

            // clap-only stuff:

            /// An optional list of quake files to parse, by path. If not provided, standard input will be used.
            ///
            /// If these are provided, quake-gen will act as if they were all concatenated into a single file, with a
            /// newline after each one.
            ///
            /// A path of "-" represents standard input. Standard input is read at most once; all but the first "-"
            /// are ignored.
            #[arg()]
            pub(crate) input_file_paths: Vec<String>,
        }

        /// Options analogous to the quake-gen CLI's switches.
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Builder)]
        #[builder(default)]
        pub struct RunOptions {
            $(
            $(#[$meta])*
            pub $name: $ty,
            )*

            pub input_file_paths: Vec<String>,
        }

        impl From<CliOptions> for RunOptions {
            fn from(value: CliOptions) -> Self {
                Self {
                    $($name: value.$name,)*
                    input_file_paths: value.input_file_paths,
                }
            }
        }
    };
}

create_options_structs! {
    /// Specifies the output format. Defaults to JSON.
    clap(long, short, default_value_t = OutputFormat::Json)
    pub output: OutputFormat,

    /// Pretty-print JSON output. This has no effect in plain output mode.
    clap(long)
    pub pretty: bool,

    /// Put a blank line between blocks in plain output mode. This has no effect in JSON output mode.
    clap(long)
    pub br: bool,

    /// Quiet: do not print anything to stdout. The exit code will still be 0 if the input had any blocks, and non-0
    /// if it didn't.
    clap(long, short)
    pub quiet: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            output: OutputFormat::Json,
            pretty: false,
            br: false,
            quiet: false,
            input_file_paths: vec![],
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum OutputFormat {
    /// Output the blocks as JSON. Each block is an object keyed by its kind (`heading`, `blockquote`,
    /// `horizontal_rule`, `list` or `paragraph`):
    ///
    /// ```json
    /// {"blocks":[{"heading":{"level":1,"text":"Hello","anchor":"hello"}},{"paragraph":"world"}]}
    /// ```
    Json,

    /// Outputs just the plain text of each block, one per line. Links in headings are rendered as just their labels,
    /// nested list items are flattened, and horizontal rules are dropped.
    Plain,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Json
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let self_str = match self {
            OutputFormat::Json => "json",
            OutputFormat::Plain => "plain",
        };
        f.write_str(self_str)
    }
}

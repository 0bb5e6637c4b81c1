use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use quotex::{Dialect, Input, Mode, ModeFlags, compile_debug, compile_pattern};

#[derive(Parser)]
#[command(name = "quotex")]
#[command(about = "Quotex - escape text into safe regex, PCRE, replacement and glob patterns")]
#[command(version)]
struct Cli {
    /// Print debug logging (repeat for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile text into a pattern
    Compile {
        /// The text to escape; several values form a list
        #[arg(required = true)]
        text: Vec<String>,
        #[command(flatten)]
        flags: FlagArgs,
        /// Show every compilation step
        #[arg(short, long)]
        debug: bool,
    },
    /// Compile text and test the pattern against a haystack
    Check {
        /// The text to escape
        text: String,
        /// The string to test the pattern against
        haystack: String,
        #[command(flatten)]
        flags: FlagArgs,
    },
}

#[derive(Args)]
struct FlagArgs {
    /// Build a PCRE instead of a traditional regex
    #[arg(long)]
    pcre: bool,
    /// Match the whole string
    #[arg(long, conflicts_with = "word")]
    exact: bool,
    /// Match as a word
    #[arg(long)]
    word: bool,
    /// Case insensitive
    #[arg(short = 'i', long)]
    nocase: bool,
    /// Treat the text as a comma separated list
    #[arg(short, long)]
    list: bool,
    /// Translate ? and * wildcards
    #[arg(short, long)]
    wildcard: bool,
    /// Escape for a glob pattern (exclusive)
    #[arg(long)]
    getdir: bool,
    /// Escape for a replacement template (exclusive)
    #[arg(long)]
    replace: bool,
    /// Extra flags by name, e.g. "pcre|exact"
    #[arg(long)]
    mode: Option<String>,
}

impl FlagArgs {
    fn to_flags(&self) -> quotex::Result<ModeFlags> {
        let mut flags = match &self.mode {
            Some(names) => names.parse()?,
            None => ModeFlags::empty(),
        };
        for (set, flag) in [
            (self.pcre, ModeFlags::PCRE),
            (self.exact, ModeFlags::EXACT),
            (self.word, ModeFlags::WORD),
            (self.nocase, ModeFlags::NOCASE),
            (self.list, ModeFlags::LIST),
            (self.wildcard, ModeFlags::WILDCARD),
            (self.getdir, ModeFlags::GETDIR),
            (self.replace, ModeFlags::REPLACE),
        ] {
            if set {
                flags |= flag;
            }
        }
        Ok(flags)
    }
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    match cli.command {
        Commands::Compile { text, flags, debug } => cmd_compile(text, &flags, debug),
        Commands::Check {
            text,
            haystack,
            flags,
        } => cmd_check(&text, &haystack, &flags),
    }
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{} {}", "Error:".red().bold(), message);
    std::process::exit(2);
}

fn to_input(mut text: Vec<String>) -> Input {
    if text.len() == 1 {
        Input::Single(text.remove(0))
    } else {
        Input::List(text)
    }
}

fn cmd_compile(text: Vec<String>, args: &FlagArgs, debug: bool) {
    let flags = args.to_flags().unwrap_or_else(|e| fail(e));
    let input = to_input(text);

    if debug {
        match compile_debug(input, flags) {
            Ok(report) => report.report(),
            Err(e) => fail(e),
        }
        return;
    }

    match compile_pattern(input, flags) {
        Ok(Some(pattern)) => {
            println!("{}", "Pattern:".bold());
            println!("  {}", pattern.green());
        }
        Ok(None) => println!("{}", "No pattern (empty list)".yellow()),
        Err(e) => fail(e),
    }
}

fn cmd_check(text: &str, haystack: &str, args: &FlagArgs) {
    let flags = args.to_flags().unwrap_or_else(|e| fail(e));
    let input = Input::from(text);
    let mode = Mode::resolve(flags, &input).unwrap_or_else(|e| fail(e));

    let pattern = match compile_pattern(input, flags) {
        Ok(Some(pattern)) => pattern,
        Ok(None) => {
            println!("{}", "No pattern (empty list)".yellow());
            std::process::exit(1);
        }
        Err(e) => fail(e),
    };

    println!("  Pattern:  {}", pattern.cyan());
    println!("  Haystack: {}", haystack.yellow());

    let matched = match mode {
        Mode::Pattern(p) if p.dialect == Dialect::Regex => regex::Regex::new(&pattern)
            .map(|re| re.is_match(haystack))
            .unwrap_or_else(|e| fail(e)),
        Mode::Pattern(_) => pcre2::bytes::RegexBuilder::new()
            .utf(true)
            .build(&pattern)
            .and_then(|re| re.is_match(haystack.as_bytes()))
            .unwrap_or_else(|e| fail(e)),
        Mode::GetDir => globset::GlobBuilder::new(&pattern)
            .backslash_escape(true)
            .literal_separator(true)
            .build()
            .map(|glob| glob.compile_matcher().is_match(haystack))
            .unwrap_or_else(|e| fail(e)),
        Mode::Replace => fail("a replacement template cannot be checked against a haystack"),
    };

    if matched {
        println!("{}", "✓ Match".green().bold());
        std::process::exit(0);
    } else {
        println!("{}", "✗ No match".red());
        std::process::exit(1);
    }
}

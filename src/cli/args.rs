use std::path::PathBuf;

use clap::Parser;

/// Type a few letters, pick a champion, open its stats page
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Name list, one name per line (overrides the config's list_file)
    #[arg(short, long, value_name = "PATH")]
    pub list: Option<PathBuf>,

    /// Config file [default: ~/.config/lolaunch/config.toml]
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the resolved target instead of opening it, then exit
    #[arg(short, long)]
    pub print: bool,

    /// Print the names matching QUERY and exit
    #[arg(long, value_name = "QUERY", conflicts_with = "resolve")]
    pub filter: Option<String>,

    /// Resolve the first name matching QUERY, print it and exit
    #[arg(long, value_name = "QUERY")]
    pub resolve: Option<String>,

    /// Target used by --resolve (0 = Enter, 1 = Shift+Enter)
    #[arg(short, long, value_name = "INDEX", default_value_t = 0, requires = "resolve")]
    pub target: usize,
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod args_tests;

use clap::Parser;
use java2js::commands::convert::{self, ConvertArgs};

/// Convert a Java source file to JavaScript.
#[derive(Parser)]
#[command(name = "java2js", version, about)]
struct Cli {
    #[command(flatten)]
    args: ConvertArgs,
}

/// Reset SIGPIPE to default behavior so piping to `head` etc. doesn't panic.
#[cfg(unix)]
fn reset_sigpipe() {
    // SAFETY: libc::signal is a standard POSIX function. Restoring the default
    // disposition only changes how a closed stdout pipe terminates the process.
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}

fn main() {
    reset_sigpipe();
    java2js::logging::init();

    let cli = Cli::parse();
    std::process::exit(convert::run(cli.args));
}

use clap::Parser;
use eco_cli::Cli;

fn main() {
    let cli = Cli::parse();

    match cli.run() {
        Ok(Some(code)) => std::process::exit(code),
        Ok(None) => {}
        Err(e) => {
            eprintln!("❌ Error: {e}");
            std::process::exit(1);
        }
    }
}

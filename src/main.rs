use anyhow::Result;
use ski::cli::{self, Opts};

fn main() -> Result<()> {
    let opts = Opts::parse()?;
    cli::run(&opts)?;
    Ok(())
}

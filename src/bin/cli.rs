use miette::Result;

fn main() -> Result<()> {
    hireflux::cli::run()
}

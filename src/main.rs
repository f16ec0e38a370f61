use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = jellylink::cli::parse();
    app::run(args)
}

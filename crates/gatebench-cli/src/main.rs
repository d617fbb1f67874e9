mod command;
mod format;
mod reports;
mod schema;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}

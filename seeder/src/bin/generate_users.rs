// Writes a CSV of fake users to the path given on the command line
use anyhow::Result;
use seeder::{config, fake_users, setup};
use std::env;
use tracing::error;

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    setup::init_tracing();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        error!("Usage: {} <output_csv_path>", args[0]);
        std::process::exit(1);
    }

    let count = config::get_fake_user_count()?;
    fake_users::write_fake_users_to_path(&args[1], count)?;

    Ok(())
}

use aerodesk_console::Menu;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // logs go to stderr and stay quiet unless RUST_LOG asks otherwise
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let (_config, inventory) = aerodesk_store::bootstrap()?;

    println!("\n Welcome To Aerodesk Flight Bookings \n");
    let stdin = io::stdin();
    let mut menu = Menu::new(inventory, stdin.lock(), io::stdout());
    menu.run()?;
    Ok(())
}

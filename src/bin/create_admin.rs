use clap::Parser;
use hbnb_backend::config::Config;
use hbnb_backend::domain::models::user::NewUser;
use hbnb_backend::error::AppError;
use hbnb_backend::infra::factory::bootstrap_state;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "create_admin", version, about = "Create an HBnB administrator account")]
struct Cli {
    #[arg(long, default_value = "admin@hbnb.com")]
    email: String,

    #[arg(long, default_value = "admin123")]
    password: String,

    #[arg(long, default_value = "Admin")]
    first_name: String,

    #[arg(long, default_value = "User")]
    last_name: String,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenv::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    let config = Config::from_env();
    let state = bootstrap_state(&config).await;

    // Existing accounts are reported, never modified.
    if let Some(existing) = state.facade.get_user_by_email(&cli.email).await? {
        println!("Admin user already exists: {}", existing.email);
        println!("  User ID: {}", existing.id);
        println!("  Is Admin: {}", existing.is_admin);
        return Ok(());
    }

    let admin = state.facade.create_user(NewUser {
        first_name: cli.first_name,
        last_name: cli.last_name,
        email: cli.email,
        password: cli.password,
        is_admin: true,
    }).await?;

    println!("Admin user created");
    println!("  Email: {}", admin.email);
    println!("  ID: {}", admin.id);
    println!("  Database: {}", config.database_url);
    Ok(())
}

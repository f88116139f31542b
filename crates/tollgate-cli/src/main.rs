use anyhow::Context;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use tollgate_auth::create_access_token;
use tollgate_cli::{parse_role, validate_new_password};
use tollgate_config::JwtConfig;
use tollgate_core::{hash_password, hash_password_with_cost};
use tollgate_db::{NewUser, create_user, init_db_pool, run_migrations};
use tollgate_models::Role;

#[derive(Parser)]
#[command(name = "tollgate-cli")]
#[command(about = "Tollgate CLI - user administration and token tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Print a bcrypt hash for a password
    HashPassword {
        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,

        /// bcrypt cost factor
        #[arg(long)]
        cost: Option<u32>,
    },
    /// Create a user account in the database
    CreateUser {
        #[arg(short = 'u', long)]
        username: Option<String>,

        #[arg(short = 'r', long, value_parser = parse_role, default_value = "user")]
        role: Role,

        #[arg(short = 'f', long)]
        first_name: Option<String>,

        #[arg(short = 'l', long)]
        last_name: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Sign a token with the configured JWT settings, for debugging clients
    IssueToken {
        #[arg(short = 's', long)]
        subject: String,

        #[arg(short = 'u', long)]
        username: String,

        #[arg(short = 'r', long, value_parser = parse_role, default_value = "user")]
        role: Role,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Migrate => handle_migrate().await,
        Commands::HashPassword { password, cost } => handle_hash_password(password, cost),
        Commands::CreateUser {
            username,
            role,
            first_name,
            last_name,
            password,
        } => handle_create_user(username, role, first_name, last_name, password).await,
        Commands::IssueToken {
            subject,
            username,
            role,
        } => handle_issue_token(&subject, &username, role),
    }
}

async fn connect() -> anyhow::Result<tollgate_db::PgPool> {
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    init_db_pool(&database_url)
        .await
        .context("Failed to connect to database")
}

async fn handle_migrate() -> anyhow::Result<()> {
    let pool = connect().await?;
    run_migrations(&pool).await.context("Migration failed")?;
    println!("✅ Migrations applied");
    Ok(())
}

fn prompt_new_password(password: Option<String>) -> anyhow::Result<String> {
    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .context("Failed to read password")?,
    };

    validate_new_password(&password).map_err(anyhow::Error::msg)?;
    Ok(password)
}

fn handle_hash_password(password: Option<String>, cost: Option<u32>) -> anyhow::Result<()> {
    let password = prompt_new_password(password)?;

    let hash = match cost {
        Some(cost) => hash_password_with_cost(&password, cost),
        None => hash_password(&password),
    }
    .map_err(|e| e.into_inner())?;

    println!("{hash}");
    Ok(())
}

async fn handle_create_user(
    username: Option<String>,
    role: Role,
    first_name: Option<String>,
    last_name: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let username = match username {
        Some(username) => username,
        None => Input::new()
            .with_prompt("Username")
            .interact_text()
            .context("Failed to read username")?,
    };
    let password = prompt_new_password(password)?;
    let password_hash = hash_password(&password).map_err(|e| e.into_inner())?;

    let pool = connect().await?;
    let record = create_user(
        &pool,
        NewUser {
            username,
            password_hash,
            role,
            first_name,
            last_name,
        },
    )
    .await
    .context("Error creating user")?;

    println!("\n✅ User created successfully!");
    println!("   Username: {}", record.username);
    println!("   Role: {}", record.role);
    if !record.full_name().is_empty() {
        println!("   Name: {}", record.full_name());
    }
    Ok(())
}

fn handle_issue_token(subject: &str, username: &str, role: Role) -> anyhow::Result<()> {
    let jwt_config = JwtConfig::from_env()?;
    let issued = create_access_token(subject, username, role, &jwt_config)?;

    println!("{}", issued.token);
    eprintln!("expires in {}s", issued.expires_in);
    Ok(())
}

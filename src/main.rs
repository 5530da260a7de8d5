use create_user::{
    config::{Config, LogConfig},
    database::pool::create_pool,
    dto::user_dto::CreateUserRequest,
    error::Result,
    output::{input_error_text, Confirmation},
    services::user_service::{PgUserStore, UserService},
};
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let result = match LogConfig::from_env() {
        Ok(log_config) => {
            init_tracing(&log_config);
            run().await
        }
        Err(err) => {
            init_tracing(&LogConfig::default());
            Err(err)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_input_error() => {
            info!("{}", err);
            println!("{}", input_error_text(&err));
            ExitCode::FAILURE
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cmd = CreateUserRequest::from_env().into_command()?;
    let config = Config::from_env()?;

    let pool = create_pool(&config).await?;
    let service = UserService::new(PgUserStore::new(pool.clone()), config.hash_scheme);
    let created = service.create(&cmd).await;
    pool.close().await;
    let created = created?;

    let password = config.echo_password.then_some(cmd.password.as_str());
    print!(
        "{}",
        Confirmation {
            user: &created,
            password,
        }
    );
    Ok(())
}

fn init_tracing(log_config: &LogConfig) {
    let filter = EnvFilter::try_new(&log_config.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal());

    if log_config.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

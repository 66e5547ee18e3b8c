use std::fmt::Display;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use hitbox::{Category, DEFAULT_BASE_URL, HitboxClient};
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "hitbox-games")]
#[command(about = "Print the top games on hitbox.tv", long_about = None)]
struct Args {
    /// API root to query
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: Url,

    /// Request timeout in seconds (no timeout when omitted)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Log level
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", failure_message(&err));
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("hitbox={}", args.log_level).parse()?)
                .add_directive(format!("hitbox_games={}", args.log_level).parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = match args.timeout_secs {
        Some(secs) => {
            let http = reqwest::Client::builder()
                .timeout(Duration::from_secs(secs))
                .build()?;
            HitboxClient::with_http_client(http)
        }
        None => HitboxClient::new(),
    }
    .with_base_url(args.base_url);

    tracing::info!(base_url = %client.base_url(), "fetching games");

    let (games, _) = client.games().await?;

    println!("The top 100 games on hitbox.tv sorted by number of viewers");
    for (i, game) in games.categories.iter().enumerate() {
        println!("{}", format_line(i + 1, game));
    }

    Ok(())
}

fn failure_message(err: &dyn Display) -> String {
    format!("hitbox-games: {err}")
}

fn format_line(rank: usize, game: &Category) -> String {
    format!(
        "[{rank}] {} | current viewers = {}",
        game.category_name, game.category_viewers
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_shows_rank_name_and_viewers() {
        let game = Category {
            category_name: "Dota 2".into(),
            category_viewers: 3811,
            ..Category::default()
        };
        assert_eq!(format_line(1, &game), "[1] Dota 2 | current viewers = 3811");
    }

    #[test]
    fn failure_shows_error_message_not_debug() {
        let err: Box<dyn std::error::Error + Send + Sync> =
            Box::new(hitbox::Error::UnexpectedStatus(Box::new(hitbox::RawResponse {
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
                headers: reqwest::header::HeaderMap::new(),
                url: Url::parse("http://api.hitbox.tv/games").unwrap(),
                body: b"Service Unavailable".to_vec(),
                complete: true,
            })));
        assert_eq!(
            failure_message(&err),
            "hitbox-games: hitbox.tv api responded with http 503"
        );
    }

    #[test]
    fn args_default_to_public_api() {
        let args = Args::parse_from(["hitbox-games"]);
        assert_eq!(args.base_url.as_str(), "http://api.hitbox.tv/");
        assert_eq!(args.timeout_secs, None);
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn args_accept_overrides() {
        let args = Args::parse_from([
            "hitbox-games",
            "--base-url",
            "http://localhost:8080/api/",
            "--timeout-secs",
            "10",
        ]);
        assert_eq!(args.base_url.path(), "/api/");
        assert_eq!(args.timeout_secs, Some(10));
    }
}

use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use social_pulse::config::AppConfig;
use social_pulse::error::AppError;
use social_pulse::random::request_rng;
use social_pulse::{
    analyze_sentiment, format_float, format_number, format_percent, predict_engagement,
    rewrite_caption, score_content, server, telemetry, CaptionStyle, ContentInput, ContentType,
    Platform,
};

#[derive(Parser)]
#[command(name = "social-pulse", about = "Heuristic content scoring for social posts", version)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Predict engagement for a post before publishing
    Predict(PredictArgs),
    /// Score a post against the six content metrics
    Score(ScoreArgs),
    /// Classify the sentiment of a set of comments
    Sentiment(SentimentArgs),
    /// Generate ranked caption variants
    Rewrite(RewriteArgs),
}

#[derive(Args, Debug, Clone, Default)]
struct ServeArgs {
    #[arg(long)]
    host: Option<String>,
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug, Clone)]
struct PredictArgs {
    #[arg(long)]
    text: Option<String>,
    #[arg(long, default_value = "twitter")]
    platform: String,
    #[arg(long, default_value = "text")]
    content_type: String,
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug, Clone)]
struct ScoreArgs {
    #[arg(long)]
    text: Option<String>,
    #[arg(long, default_value = "twitter")]
    platform: String,
}

#[derive(Args, Debug, Clone)]
struct SentimentArgs {
    /// Comment to analyse; repeat for several. Omit to use the demo set.
    #[arg(long = "comment")]
    comments: Vec<String>,
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug, Clone)]
struct RewriteArgs {
    #[arg(long)]
    text: Option<String>,
    #[arg(long, default_value = "engaging")]
    style: String,
    #[arg(long, default_value = "twitter")]
    platform: String,
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let (mut config, _) = AppConfig::load(cli.config)?;
    let command = cli.command.unwrap_or(Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => {
            if let Some(host) = args.host {
                config.server.host = host;
            }
            if let Some(port) = args.port {
                config.server.port = port;
            }
            telemetry::init(&config.telemetry)?;
            server::serve(config).await
        }
        Command::Predict(args) => run_predict(args, config.engine.seed),
        Command::Score(args) => run_score(args),
        Command::Sentiment(args) => run_sentiment(args, config.engine.seed),
        Command::Rewrite(args) => run_rewrite(args, config.engine.seed),
    }
}

fn run_predict(args: PredictArgs, default_seed: Option<u64>) -> Result<(), AppError> {
    let input = ContentInput::new(
        read_text(args.text)?,
        Platform::parse(&args.platform),
        ContentType::parse(&args.content_type),
    );
    let mut rng = request_rng(args.seed.or(default_seed));
    let prediction = predict_engagement(&input, &mut rng);

    println!("Engagement score: {}/100", prediction.engagement_score);
    println!(
        "Predicted: likes {} | comments {} | shares {} | reach {}",
        format_number(prediction.predicted_likes),
        format_number(prediction.predicted_comments),
        format_number(prediction.predicted_shares),
        format_number(prediction.predicted_reach)
    );
    println!(
        "Confidence: {} | viral probability: {}",
        format_percent(prediction.confidence),
        format_percent(prediction.viral_probability)
    );
    println!("Best time to post: {}", prediction.best_time_to_post);

    println!("\nRecommendations:");
    for recommendation in prediction.recommendations {
        println!("- {}", recommendation);
    }

    Ok(())
}

fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let text = read_text(args.text)?;
    let score = score_content(&text, Platform::parse(&args.platform));

    println!(
        "Overall score: {} ({})",
        format_float(score.overall_score, 1),
        score.grade.label()
    );
    for (metric, value) in score.breakdown.entries() {
        println!("  {}: {}", metric, format_float(value, 1));
    }

    println!("\nTips:");
    for tip in score.improvement_tips {
        println!("- {}", tip);
    }

    Ok(())
}

fn run_sentiment(args: SentimentArgs, default_seed: Option<u64>) -> Result<(), AppError> {
    let mut rng = request_rng(args.seed.or(default_seed));
    let report = analyze_sentiment(&args.comments, &mut rng);

    println!(
        "Overall sentiment: {} (score {})",
        report.overall_sentiment.label(),
        format_float(report.sentiment_score, 2)
    );
    println!(
        "Distribution: positive {}% | negative {}% | neutral {}%",
        format_float(report.distribution.positive, 1),
        format_float(report.distribution.negative, 1),
        format_float(report.distribution.neutral, 1)
    );
    for comment in &report.analyzed_comments {
        println!(
            "  [{}] {} ({})",
            comment.sentiment.label(),
            comment.text,
            format_float(comment.score, 2)
        );
    }

    println!("\nAction items:");
    for action in report.action_items {
        println!("- {}", action);
    }

    Ok(())
}

fn run_rewrite(args: RewriteArgs, default_seed: Option<u64>) -> Result<(), AppError> {
    let text = read_text(args.text)?;
    let mut rng = request_rng(args.seed.or(default_seed));
    let rewrite = rewrite_caption(
        &text,
        CaptionStyle::parse(&args.style),
        Platform::parse(&args.platform),
        &mut rng,
    );

    for (rank, variant) in rewrite.variations.iter().enumerate() {
        println!(
            "#{} [{}] predicted engagement {}",
            rank + 1,
            variant.style,
            variant.predicted_engagement
        );
        println!("{}\n", variant.text);
    }

    Ok(())
}

fn read_text(arg: Option<String>) -> Result<String, AppError> {
    if let Some(text) = arg {
        if !text.trim().is_empty() {
            return Ok(text);
        }
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidInput(
            "missing post text: pass --text or pipe stdin".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}

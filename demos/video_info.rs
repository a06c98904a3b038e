use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use console::Style;
use dialoguer::{theme::ColorfulTheme, FuzzySelect};
use indicatif::{ProgressBar, ProgressStyle};
use time::OffsetDateTime;
use yt_rs::{Auth, Config, DateRange, HttpTransport, Metric, Video};

#[derive(Debug, Parser)]
struct Args {
    // video id
    // ex. "MESycYJytkU"
    #[arg(short, long)]
    id: String,

    // OAuth access token, needed for reports
    #[arg(short, long)]
    token: Option<String>,

    // content owner to scope reports to
    #[arg(short, long)]
    owner: Option<String>,

    // days of report to show
    #[arg(short, long, default_value_t = 7)]
    days: i64,
}

fn spinner(msg: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner());
    pb.set_message(msg);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

async fn handle(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut auth = match args.token {
        Some(token) => Auth::new(token),
        None => Auth::anonymous(),
    };
    if let Some(owner) = args.owner {
        auth = auth.with_owner_name(owner);
    }
    let transport = Arc::new(HttpTransport::new(Config::from_env()?)?);
    let video = Video::new(args.id, Arc::new(auth), transport);

    let pb = spinner("fetching video ...");
    video.preload().await?;
    pb.finish_and_clear();

    println!("  ----------------");
    println!("  title: {}", video.title().await?);
    println!("  channel: {}", video.channel_title().await?.unwrap_or_default());
    println!("  tags: {}", video.tags().await?.join(", "));
    println!("  duration: {}s, hd: {}", video.duration().await?, video.hd().await?);
    println!("  public: {}, embeddable: {}", video.public().await?, video.embeddable().await?);
    println!("  views: {}, likes: {}, comments: {}", video.view_count().await?, video.like_count().await?, video.comment_count().await?);
    println!("  ----------------");

    let theme = ColorfulTheme {
        values_style: Style::new().yellow().dim(),
        ..ColorfulTheme::default()
    };
    let metrics = Metric::ALL.iter().map(|m| m.to_string()).collect::<Vec<_>>();
    let index = FuzzySelect::with_theme(&theme)
        .with_prompt("Which report to show?")
        .default(0)
        .items(&metrics)
        .interact()?;
    let metric = metrics[index].parse::<Metric>()?;

    let until = OffsetDateTime::now_utc().date();
    let since = until - time::Duration::days(args.days - 1);
    let pb = spinner("fetching report ...");
    let series = video.report(metric, DateRange::new(since, until)).await?;
    pb.finish_and_clear();

    for (day, value) in series {
        println!("  {}: {}", day, value);
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    match handle(args).await {
        Ok(_) => {}
        Err(e) => {
            eprintln!("{:?}", e);
            std::process::exit(1);
        }
    }
}

use chrono::Utc;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;
use talekeep::api::{
    CmdMessage, ConfigAction, ListedStory, MessageLevel, StoryFilter, StorePaths, TalekeepApi,
};
use talekeep::catalog::Catalog;
use talekeep::commands::progress::format_duration;
use talekeep::config::TalekeepConfig;
use talekeep::error::{Result, TalekeepError};
use talekeep::model::{FontContext, FontFamily, ReadingRecord, StoryId, Theme};
use talekeep::store::fs::FileStore;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: TalekeepApi<FileStore>,
    catalog_path: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List {
            search,
            bookmarked,
            completed,
        }) => handle_list(&ctx, search, bookmarked, completed),
        Some(Commands::Progress { story, percent }) => handle_progress(&mut ctx, story, percent),
        Some(Commands::Complete { story }) => handle_complete(&mut ctx, story),
        Some(Commands::Bookmark { story }) => handle_bookmark(&mut ctx, story),
        Some(Commands::View { story }) => handle_view(&ctx, story),
        Some(Commands::Start { story }) => handle_start(&mut ctx, story),
        Some(Commands::Session { story, seconds }) => handle_session(&mut ctx, story, seconds),
        Some(Commands::Stats) => handle_stats(&ctx),
        Some(Commands::Theme { theme }) => handle_theme(&mut ctx, theme),
        Some(Commands::Font {
            action,
            reader,
            step,
        }) => handle_font(&mut ctx, action, reader, step),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        None => handle_list(&ctx, None, false, false),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match (&cli.data_dir, std::env::var_os("TALEKEEP_HOME")) {
        (Some(dir), _) => dir.clone(),
        (None, Some(home)) => PathBuf::from(home),
        (None, None) => {
            let proj_dirs = ProjectDirs::from("com", "talekeep", "talekeep")
                .ok_or_else(|| TalekeepError::Store("Could not determine data dir".to_string()))?;
            proj_dirs.data_dir().to_path_buf()
        }
    };

    let config = TalekeepConfig::load(&data_dir).unwrap_or_default();
    let catalog_path = cli
        .catalog
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.catalog_file));

    let store = FileStore::new(data_dir.clone());
    let paths = StorePaths { data: data_dir };
    let api = TalekeepApi::new(store, config, paths);

    Ok(AppContext { api, catalog_path })
}

fn handle_list(
    ctx: &AppContext,
    search: Option<String>,
    bookmarked: bool,
    completed: bool,
) -> Result<()> {
    let catalog = Catalog::load(&ctx.catalog_path)?;
    let filter = if bookmarked {
        StoryFilter::Bookmarked
    } else if completed {
        StoryFilter::Completed
    } else {
        StoryFilter::All
    };

    let result = ctx.api.list_stories(&catalog, filter, search.as_deref())?;
    print_stories(&result.listed_stories);
    print_messages(&result.messages);
    Ok(())
}

fn handle_progress(ctx: &mut AppContext, story: String, percent: f64) -> Result<()> {
    let result = ctx.api.record_progress(&story, percent)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_complete(ctx: &mut AppContext, story: String) -> Result<()> {
    let result = ctx.api.mark_complete(&story)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_bookmark(ctx: &mut AppContext, story: String) -> Result<()> {
    let result = ctx.api.toggle_bookmark(&story)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, story: String) -> Result<()> {
    let result = ctx.api.reading_record(&story)?;
    for (id, record) in &result.records {
        print_record(id, record);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_start(ctx: &mut AppContext, story: String) -> Result<()> {
    let result = ctx.api.begin_session(&story)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_session(ctx: &mut AppContext, story: String, seconds: u64) -> Result<()> {
    let result = ctx.api.record_session_time(&story, seconds)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.stats()?;
    if let Some(stats) = result.stats {
        println!("Stories read:  {}", stats.stories_read);
        println!("Time reading:  {}", format_duration(stats.total_time_secs));
        println!("Favorites:     {}", stats.favorites);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_theme(ctx: &mut AppContext, theme: Option<String>) -> Result<()> {
    let result = match theme {
        Some(raw) => {
            let theme: Theme = raw.parse()?;
            ctx.api.set_theme(theme)?
        }
        None => ctx.api.preferences()?,
    };
    if let Some(prefs) = &result.preferences {
        println!("theme = {}", prefs.theme);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_font(ctx: &mut AppContext, action: String, reader: bool, step: i32) -> Result<()> {
    let font_ctx = if reader {
        FontContext::Reader
    } else {
        FontContext::Site
    };

    let result = match action.as_str() {
        "bigger" => ctx.api.adjust_font_size(font_ctx, step)?,
        "smaller" => ctx.api.adjust_font_size(font_ctx, -step)?,
        "reset" => ctx.api.reset_font_size(font_ctx)?,
        "serif" => ctx.api.set_font_family(FontFamily::Serif)?,
        "default" => ctx.api.set_font_family(FontFamily::Default)?,
        other => {
            return Err(TalekeepError::Api(format!(
                "Unknown font action: {} (try bigger, smaller, reset, serif, default)",
                other
            )))
        }
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config_action(action)?;
    if let Some(config) = &result.config {
        println!("completion-threshold = {}", config.completion_threshold);
        println!("catalog-file = {}", config.catalog_file);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_record(id: &StoryId, record: &ReadingRecord) {
    println!("{}", id.to_string().bold());
    println!("--------------------------------");
    println!("progress:   {:.0}%", record.progress_percent);
    println!("completed:  {}", if record.completed { "yes" } else { "no" });
    println!("bookmarked: {}", if record.bookmarked { "yes" } else { "no" });
    println!("time read:  {}", format_duration(record.time_read_secs));
    match record.last_read_at {
        Some(ts) => println!("last read:  {}", format_time_ago(ts)),
        None => println!("last read:  never"),
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const COMPLETED_MARKER: &str = "✓";
const BOOKMARK_MARKER: &str = "♥";

fn print_stories(stories: &[ListedStory]) {
    if stories.is_empty() {
        return;
    }

    for entry in stories {
        let record = &entry.record;
        let story = &entry.story;

        let marker = if record.completed {
            format!("{} ", COMPLETED_MARKER.green())
        } else if record.bookmarked {
            format!("{} ", BOOKMARK_MARKER.red())
        } else {
            "  ".to_string()
        };

        let progress = if record.progress_percent > 0.0 {
            format!("{:>4.0}%", record.progress_percent)
        } else {
            "   —".to_string()
        };

        let time_ago = match record.last_read_at {
            Some(ts) => format_time_ago(ts),
            None => " ".repeat(TIME_WIDTH),
        };

        let mut title_line = story.title.clone();
        if !story.author.is_empty() {
            title_line.push_str(&format!(" — {}", story.author));
        }
        if !story.genre.is_empty() {
            title_line.push_str(&format!(" [{}]", story.genre));
        }
        if story.word_count > 0 {
            title_line.push_str(&format!(" ~{} min", story.reading_minutes()));
        }

        // marker (2) + progress (5) + separator (2) + time column
        let fixed_width = 2 + 5 + 2 + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let title_display = truncate_to_width(&title_line, available);
        let padding = available.saturating_sub(title_display.width());

        println!(
            "{}{}  {}{}{}",
            marker,
            title_display,
            " ".repeat(padding),
            progress,
            time_ago.dimmed()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

use clap::{Parser, Subcommand};
use inkpost::author::{self, NewPost};
use inkpost::config::BlogConfig;
use inkpost::engine::Blog;
use inkpost::fetch::DirFetcher;
use inkpost::manifest::Manifest;
use inkpost::router::{Route, parse_fragment};
use inkpost::{check, output};
use std::io::{BufRead, Write};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let describe = env!("GIT_DESCRIBE");
    if describe.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        // Leaked once at startup — trivial, called exactly once
        Box::leak(format!("{} ({describe})", env!("CARGO_PKG_VERSION")).into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "inkpost")]
#[command(about = "Manifest-driven markdown blog engine")]
#[command(long_about = "\
Manifest-driven markdown blog engine

A blog directory holds a posts.json manifest and the post sources it
points at. Posts are markdown with an optional YAML frontmatter block;
routes are #post/<year>/<slug> fragments resolved against the manifest.

Blog structure:

  blog/
  ├── config.toml                  # Engine config (optional)
  ├── posts.json                   # Post manifest — the index source of truth
  └── posts/
      └── 2024/
          └── My First Post.md     # Frontmatter + markdown body

Run 'inkpost new' to scaffold a post, 'inkpost check' to validate the
directory, and 'inkpost render' to print a view as HTML.")]
#[command(version = version_string())]
struct Cli {
    /// Blog directory
    #[arg(long, default_value = ".", global = true)]
    dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scaffold a new post and add it to the manifest
    New {
        /// Post title (prompted for when omitted)
        #[arg(long)]
        title: Option<String>,
        /// Publication date, YYYY-MM-DD (prompted for when omitted; defaults to today)
        #[arg(long)]
        date: Option<String>,
        /// Category: general or web_design (prompted for when omitted)
        #[arg(long)]
        category: Option<String>,
        /// Replace an existing post with the same year and slug without asking
        #[arg(long)]
        force: bool,
    },
    /// Validate the blog directory: manifest, post files, frontmatter
    Check,
    /// Render a view to stdout as HTML
    Render {
        /// Route fragment, e.g. '#post/2024/my-post' or '#blog' for the index
        #[arg(default_value = "#blog")]
        fragment: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::New {
            title,
            date,
            category,
            force,
        } => new_post(&cli.dir, title, date, category, force)?,
        Command::Check => {
            let report = check::check(&cli.dir)?;
            output::print_check_report(&report);
            if !report.is_ok() {
                std::process::exit(1);
            }
        }
        Command::Render { fragment } => render(&cli.dir, &fragment)?,
    }

    Ok(())
}

fn render(dir: &std::path::Path, fragment: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = BlogConfig::load(dir)?;
    let fetcher = DirFetcher::new(dir.to_path_buf());
    let mut blog = Blog::open(Box::new(fetcher), &config)?;

    let Some(route) = parse_fragment(fragment) else {
        return Err(format!("not a route: {fragment}").into());
    };
    let html = match route {
        Route::Index => blog.render_index().into_string(),
        Route::Post { year, slug } => {
            let view = blog.render_post(year, &slug)?;
            view.article.into_string()
        }
    };
    for warning in blog.drain_warnings() {
        eprintln!("warning: {warning}");
    }
    println!("{html}");
    Ok(())
}

fn new_post(
    dir: &std::path::Path,
    title: Option<String>,
    date: Option<String>,
    category: Option<String>,
    force: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = BlogConfig::load(dir)?;
    let manifest_path = dir.join(&config.manifest_file);
    let mut manifest = if manifest_path.exists() {
        Manifest::read(&manifest_path)?
    } else {
        Manifest::default()
    };

    let stdin = std::io::stdin();
    let mut input = stdin.lock();

    let title = match title {
        Some(t) => t,
        None => prompt(&mut input, "Title: ")?,
    };
    let today = chrono::Local::now().date_naive().format("%Y-%m-%d");
    let date = match date {
        Some(d) => d,
        None => {
            let answer = prompt(&mut input, &format!("Date [{today}]: "))?;
            if answer.is_empty() {
                today.to_string()
            } else {
                answer
            }
        }
    };
    let category = match category {
        Some(c) => c,
        None => prompt(&mut input, "Category (general/web_design) [general]: ")
            .map(|c| if c.is_empty() { "general".to_string() } else { c })?,
    };

    let post = NewPost::validate(&title, &date, &category)?;
    let replacing = author::entry_exists(&manifest, post.year(), &post.slug());
    if replacing && !force {
        let answer = prompt(
            &mut input,
            &format!(
                "Post {}/{} already exists. Overwrite? (yes/no): ",
                post.year(),
                post.slug()
            ),
        )?;
        if !matches!(answer.to_lowercase().as_str(), "yes" | "y") {
            println!("Aborted");
            return Ok(());
        }
    }

    let file = post.write_file(dir)?;
    author::upsert(&mut manifest, post.meta());
    manifest.write(&manifest_path)?;

    let shown = file.strip_prefix(dir).unwrap_or(&file);
    output::print_new_post_summary(&post, shown, replacing);
    Ok(())
}

/// Print a prompt to stdout and read one trimmed line.
fn prompt(input: &mut impl BufRead, message: &str) -> std::io::Result<String> {
    print!("{message}");
    std::io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

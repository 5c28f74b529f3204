//! Linkboard CLI
//!
//! Terminal front end for Linkboard:
//! - Sign in, register, sign out
//! - Read the feed and publish posts
//! - View and edit profiles
//!
//! The session is kept in a file so it survives between invocations.

use chrono::Local;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use linkboard::config::{generate_default_config, Config, LoggingConfig};
use linkboard::forms::{password_strength, LoginForm, RegisterForm, StrengthLabel};
use linkboard::models::Post;
use linkboard::routes::{self, Resolution, Route};
use linkboard::session::{FileStorage, SessionStore};
use linkboard::timefmt::{format_date, format_relative};
use linkboard::views::{self, Feed, Notice, ProfileView};
use linkboard::HttpClient;

#[derive(Parser)]
#[command(name = "linkboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Terminal client for the Linkboard social network")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API origin (overrides config and LINKBOARD_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in
    Login {
        email: String,
        /// Password (default: LINKBOARD_PASSWORD)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Create an account and sign in
    Register {
        name: String,
        email: String,
        /// Password (default: LINKBOARD_PASSWORD)
        #[arg(short, long)]
        password: Option<String>,
        /// Password confirmation (must match)
        #[arg(long)]
        confirm: String,
    },

    /// Sign out and forget the stored session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Show every post
    Feed,

    /// Publish a post
    Post {
        content: String,
    },

    /// Show a profile and its posts (default: your own)
    Profile {
        user_id: Option<String>,
    },

    /// Edit your name and bio
    EditProfile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        bio: Option<String>,
    },

    /// Rate a password the way the registration form does
    Strength {
        password: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    init_logging(&config.logging);

    let api = HttpClient::new(&config.api)?;
    let storage = FileStorage::new(config.session.path());
    tracing::debug!("Session file: {:?}", storage.path());
    let mut session = SessionStore::restore(storage);
    let json = cli.format == "json";

    let ok = match cli.command {
        Commands::Login { email, password } => {
            let form = LoginForm {
                email,
                password: password_arg(password)?,
            };
            let outcome = views::login(&api, &mut session, &form).await;
            print_notice(&outcome.notice());
            if outcome.is_authenticated() {
                println!("{}", views::greeting(session.user()));
            }
            outcome.is_authenticated()
        }

        Commands::Register {
            name,
            email,
            password,
            confirm,
        } => {
            let form = RegisterForm {
                name,
                email,
                password: password_arg(password)?,
                confirm_password: confirm,
            };
            let score = form.strength();
            println!("Password strength: {}", StrengthLabel::from_score(score));

            let outcome = views::register(&api, &mut session, &form).await;
            print_notice(&outcome.notice());
            outcome.is_authenticated()
        }

        Commands::Logout => {
            session.logout()?;
            println!("Signed out");
            true
        }

        Commands::Whoami => match session.user() {
            Some(user) if json => {
                println!("{}", serde_json::to_string_pretty(user)?);
                true
            }
            Some(user) => {
                println!("{}", views::greeting(Some(user)));
                println!("{} <{}> ({})", user.name, user.email, user.id);
                println!("Joined {}", format_date(user.created_at.with_timezone(&Local)));
                true
            }
            None => {
                eprintln!("Not signed in");
                false
            }
        },

        Commands::Feed => {
            if guard(routes::HOME, &session).is_none() {
                exit_signed_out();
            }
            let mut feed = Feed::new();
            feed.refresh(&api).await;
            print_posts(feed.posts(), json)?;
            true
        }

        Commands::Post { content } => {
            if guard(routes::HOME, &session).is_none() {
                exit_signed_out();
            }
            let mut feed = Feed::new();
            let notice = feed.create(&api, &session, &content).await;
            print_notice(&notice);
            !notice.is_error()
        }

        Commands::Profile { user_id } => {
            let path = profile_request_path(user_id.as_deref())?;
            let Some(Route::Profile(id)) = guard(&path, &session) else {
                exit_signed_out();
            };

            let mut view = ProfileView::new(Some(&id), session.user());
            view.load(&api).await;
            print_profile(&view, json)?;
            view.profile().is_some()
        }

        Commands::EditProfile { name, bio } => {
            let Some(Route::Profile(id)) = guard(routes::PROFILE, &session) else {
                exit_signed_out();
            };

            let mut view = ProfileView::new(Some(&id), session.user());
            view.load(&api).await;
            view.begin_edit();
            if !view.is_editing() {
                eprintln!("Could not load your profile");
                std::process::exit(1);
            }
            if let Some(name) = name {
                view.form_mut().name = name;
            }
            if let Some(bio) = bio {
                view.form_mut().bio = bio;
            }

            let notice = view.save_edit(&api, &mut session).await;
            print_notice(&notice);
            !notice.is_error()
        }

        Commands::Strength { password } => {
            let score = password_strength(&password);
            println!("{}/100 {}", score, StrengthLabel::from_score(score));
            true
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
            true
        }
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("linkboard={}", config.level).into());
    let registry = tracing_subscriber::registry().with(filter);

    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn password_arg(flag: Option<String>) -> anyhow::Result<String> {
    flag.or_else(|| std::env::var("LINKBOARD_PASSWORD").ok())
        .ok_or_else(|| anyhow::anyhow!("password required: pass --password or set LINKBOARD_PASSWORD"))
}

/// Path the `profile` command asks the router for; `None` means the
/// viewer's own profile
fn profile_request_path(user_id: Option<&str>) -> anyhow::Result<String> {
    let Some(id) = user_id else {
        return Ok(routes::PROFILE.to_string());
    };
    let path = routes::profile_path(id);
    match Route::parse(&path) {
        Route::Profile(_) => Ok(path),
        _ => anyhow::bail!("Invalid user id: {:?}", id),
    }
}

/// Follow router redirects for `path`; `None` means the viewer must sign in
fn guard(path: &str, session: &SessionStore<FileStorage>) -> Option<Route> {
    let mut path = path.to_string();
    // A redirect chain is at most two hops (e.g. unknown -> / -> /login).
    for _ in 0..3 {
        match routes::resolve(&path, session.user()) {
            Resolution::Render(Route::Login) | Resolution::Render(Route::Register) => return None,
            Resolution::Render(route) => return Some(route),
            Resolution::Redirect(to) => path = to,
        }
    }
    None
}

fn exit_signed_out() -> ! {
    eprintln!("Please sign in first: linkboard login <email>");
    std::process::exit(1)
}

fn print_notice(notice: &Notice) {
    match notice {
        Notice::Success(m) => println!("✓ {}", m),
        Notice::Error(m) => eprintln!("✕ {}", m),
    }
}

fn print_posts(posts: &[Post], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(posts)?);
        return Ok(());
    }

    if posts.is_empty() {
        println!("No posts yet.");
        return Ok(());
    }

    let now = Local::now();
    for post in posts {
        println!(
            "[{}] {:<20} {:>10}  ({})",
            post.author.initial(),
            post.author.name,
            format_relative(now, post.created_at.with_timezone(&Local)),
            routes::profile_path(&post.user_id)
        );
        for line in post.content.lines() {
            println!("    {}", line);
        }
        println!();
    }
    Ok(())
}

fn print_profile(view: &ProfileView, json: bool) -> anyhow::Result<()> {
    let Some(user) = view.profile() else {
        eprintln!("User not found");
        return Ok(());
    };

    if json {
        let body = serde_json::json!({
            "user": user,
            "posts": view.posts(),
            "is_own_profile": view.is_own_profile(),
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!("[{}] {}", user.initial(), user.name);
    println!("{}", user.email);
    println!("Joined {}", format_date(user.created_at.with_timezone(&Local)));
    if !user.bio.is_empty() {
        println!();
        println!("{}", user.bio);
    }
    if view.can_edit() {
        println!();
        println!("Edit with: linkboard edit-profile --name <name> --bio <bio>");
    }

    println!();
    println!("{} ({} posts)", view.posts_heading(), view.posts().len());
    println!("{}", "-".repeat(60));
    print_posts(view.posts(), false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_request_path() {
        assert_eq!(profile_request_path(None).unwrap(), "/profile");
        assert_eq!(profile_request_path(Some("u1")).unwrap(), "/profile/u1");
    }

    #[test]
    fn test_profile_request_path_rejects_bad_ids() {
        let err = profile_request_path(Some("a/b")).unwrap_err();
        assert_eq!(err.to_string(), r#"Invalid user id: "a/b""#);
        assert!(profile_request_path(Some("")).is_err());
    }
}
